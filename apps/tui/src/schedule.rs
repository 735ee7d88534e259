use crate::domain::ScheduleDocument;
use crate::error::RenderError;
use chrono::format::{Item, StrftimeItems};
use chrono::NaiveDate;
use serde::Serialize;
use std::fmt::Write;

pub const DEFAULT_DATE_FORMAT: &str = "%a %d %b %Y";

/// True when every strftime specifier in `format` is one chrono understands.
pub fn is_valid_date_format(format: &str) -> bool {
    StrftimeItems::new(format).all(|item| !matches!(item, Item::Error))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayRow {
    pub date: NaiveDate,
    pub label: String,
    pub slots: Vec<String>,
}

/// Container the schedule is rendered into: one row per day, one cell per slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduleTable {
    #[serde(skip)]
    date_format: String,
    rows: Vec<DayRow>,
}

impl Default for ScheduleTable {
    fn default() -> Self {
        Self::new(DEFAULT_DATE_FORMAT)
    }
}

impl ScheduleTable {
    pub fn new(date_format: impl Into<String>) -> Self {
        Self {
            date_format: date_format.into(),
            rows: Vec::new(),
        }
    }

    pub fn rows(&self) -> &[DayRow] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Widest row, i.e. the number of slot columns the table needs.
    pub fn max_slots(&self) -> usize {
        self.rows.iter().map(|row| row.slots.len()).max().unwrap_or(0)
    }

    pub fn clear(&mut self) {
        self.rows.clear();
    }

    /// Replaces the table's content with `doc`, dating row `i` as `startDate + i` days.
    ///
    /// On error the table is left empty.
    pub fn render(&mut self, doc: &ScheduleDocument) -> Result<(), RenderError> {
        self.clear();

        let start = doc.start_date;
        let mut date = NaiveDate::from_ymd_opt(start.0, start.1, start.2).ok_or(
            RenderError::InvalidStartDate {
                year: start.0,
                month: start.1,
                day: start.2,
            },
        )?;

        let mut rows = Vec::with_capacity(doc.days.len());
        for (index, day) in doc.days.iter().enumerate() {
            if index > 0 {
                date = date
                    .succ_opt()
                    .ok_or(RenderError::DateOverflow { index })?;
            }

            let mut label = String::new();
            if write!(label, "{}", date.format(&self.date_format)).is_err() {
                return Err(RenderError::InvalidDateFormat {
                    format: self.date_format.clone(),
                });
            }

            rows.push(DayRow {
                date,
                label,
                slots: day.slots.iter().map(|slot| slot.span_label()).collect(),
            });
        }

        self.rows = rows;
        Ok(())
    }
}
