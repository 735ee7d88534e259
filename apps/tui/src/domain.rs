use serde::{Deserialize, Serialize};
use std::fmt;

/// Logical names the discovery endpoint knows how to resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceName {
    Places,
    Schedule,
    Stage,
}

impl ResourceName {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Places => "places",
            Self::Schedule => "schedule",
            Self::Stage => "stage",
        }
    }
}

impl fmt::Display for ResourceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One element of the places-service listings (provinces, municipalities, places).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct NamedEntry {
    pub name: String,
}

/// Latest load-shedding stage as reported by the stage service.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct StageStatus {
    pub stage: i32,
    pub description: String,
}

/// Calendar date as sent on the wire: `[year, month, day]`, month 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct WireDate(pub i32, pub u32, pub u32);

/// Wall-clock time as sent on the wire: `[hour, minute]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct ClockTime(pub u32, pub u32);

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.0, self.1)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct Slot {
    pub start: ClockTime,
    pub end: ClockTime,
}

impl Slot {
    /// Cell text for the schedule table, e.g. `09:05-10:00`.
    pub fn span_label(&self) -> String {
        format!("{}-{}", self.start, self.end)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
pub struct Day {
    #[serde(default)]
    pub slots: Vec<Slot>,
}

/// Weekly availability for one place, starting at `start_date`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleDocument {
    pub start_date: WireDate,
    #[serde(default)]
    pub days: Vec<Day>,
}
