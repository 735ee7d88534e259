use super::dropdown::{Dropdown, Level};
use crate::domain::ScheduleDocument;
use crate::error::CascadeError;
use crate::schedule::ScheduleTable;
use serde::Serialize;
use std::fmt;

/// What the visitor has picked so far. Lower levels are only set under a set parent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SelectionState {
    pub province: Option<String>,
    pub municipality: Option<String>,
    pub place: Option<String>,
}

impl SelectionState {
    fn choose_province(&mut self, province: String) {
        self.province = Some(province);
        self.municipality = None;
        self.place = None;
    }

    fn choose_municipality(&mut self, municipality: String) -> bool {
        if self.province.is_none() {
            return false;
        }
        self.municipality = Some(municipality);
        self.place = None;
        true
    }

    fn choose_place(&mut self, place: String) -> bool {
        if self.municipality.is_none() {
            return false;
        }
        self.place = Some(place);
        true
    }
}

/// Emitted by a dropdown's change listener.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    ProvinceChosen(String),
    MunicipalityChosen(String),
    PlaceChosen(String),
}

/// Controls a request can (re)populate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    Provinces,
    Municipalities,
    Places,
    Schedule,
}

impl Control {
    const fn index(self) -> usize {
        match self {
            Self::Provinces => 0,
            Self::Municipalities => 1,
            Self::Places => 2,
            Self::Schedule => 3,
        }
    }
}

impl From<Level> for Control {
    fn from(level: Level) -> Self {
        match level {
            Level::Province => Self::Provinces,
            Level::Municipality => Self::Municipalities,
            Level::Place => Self::Places,
        }
    }
}

impl fmt::Display for Control {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Provinces => "provinces",
            Self::Municipalities => "municipalities",
            Self::Places => "places",
            Self::Schedule => "schedule",
        };
        f.write_str(name)
    }
}

/// The fetch one transition needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    Provinces,
    Municipalities { province: String },
    Places { municipality: String },
    Schedule { province: String, place: String },
}

impl Request {
    pub const fn control(&self) -> Control {
        match self {
            Self::Provinces => Control::Provinces,
            Self::Municipalities { .. } => Control::Municipalities,
            Self::Places { .. } => Control::Places,
            Self::Schedule { .. } => Control::Schedule,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Listing(Vec<String>),
    Schedule(ScheduleDocument),
}

/// A finished chain, handed back to whoever owns the form.
#[derive(Debug)]
pub struct Completion {
    pub request: Request,
    pub result: Result<Outcome, CascadeError>,
}

/// Province → municipality → place selection plus the rendered schedule.
///
/// Every change is split in two: [`SelectionForm::transition`] clears what the
/// change invalidates and names the fetch to run, [`SelectionForm::complete`]
/// applies the fetch once it finishes. Completions are applied in whatever order
/// they arrive; a chain started for an earlier choice is not cancelled and will
/// still populate its control if it resolves last.
#[derive(Debug, Clone)]
pub struct SelectionForm {
    state: SelectionState,
    provinces: Dropdown,
    municipalities: Dropdown,
    places: Dropdown,
    schedule: ScheduleTable,
    in_flight: [usize; 4],
}

impl SelectionForm {
    pub fn new(date_format: &str) -> Self {
        Self {
            state: SelectionState::default(),
            provinces: Dropdown::cleared(Level::Province),
            municipalities: Dropdown::cleared(Level::Municipality),
            places: Dropdown::cleared(Level::Place),
            schedule: ScheduleTable::new(date_format),
            in_flight: [0; 4],
        }
    }

    /// Resets everything and asks for the province list.
    pub fn init(&mut self) -> Request {
        self.state = SelectionState::default();
        self.provinces = Dropdown::cleared(Level::Province);
        self.clear_below(Level::Province);
        self.begin(Request::Provinces)
    }

    pub fn transition(&mut self, transition: Transition) -> Option<Request> {
        let request = match transition {
            Transition::ProvinceChosen(province) => {
                self.state.choose_province(province.clone());
                self.clear_below(Level::Province);
                Request::Municipalities { province }
            }
            Transition::MunicipalityChosen(municipality) => {
                if !self.state.choose_municipality(municipality.clone()) {
                    return None;
                }
                self.clear_below(Level::Municipality);
                Request::Places { municipality }
            }
            Transition::PlaceChosen(place) => {
                let province = self.state.province.clone()?;
                if !self.state.choose_place(place.clone()) {
                    return None;
                }
                self.schedule.clear();
                Request::Schedule { province, place }
            }
        };

        Some(self.begin(request))
    }

    /// Picks option `index` of `level` and runs the resulting transition, if any.
    pub fn choose(&mut self, level: Level, index: usize) -> Option<Request> {
        let transition = self.dropdown_mut(level).choose(index)?;
        self.transition(transition)
    }

    pub fn complete(&mut self, completion: Completion) {
        let control = completion.request.control();
        let pending = &mut self.in_flight[control.index()];
        *pending = pending.saturating_sub(1);

        let outcome = match completion.result {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::warn!(%control, error = %e, "cascade step failed, control left unpopulated");
                return;
            }
        };

        match (completion.request, outcome) {
            (Request::Provinces, Outcome::Listing(names)) => {
                self.provinces =
                    Dropdown::rebuild(Level::Province, names, Transition::ProvinceChosen);
            }
            (Request::Municipalities { .. }, Outcome::Listing(names)) => {
                self.municipalities =
                    Dropdown::rebuild(Level::Municipality, names, Transition::MunicipalityChosen);
            }
            (Request::Places { .. }, Outcome::Listing(names)) => {
                self.places = Dropdown::rebuild(Level::Place, names, Transition::PlaceChosen);
            }
            (Request::Schedule { province, place }, Outcome::Schedule(doc)) => {
                if let Err(e) = self.schedule.render(&doc) {
                    tracing::warn!(%province, %place, error = %e, "schedule not rendered");
                }
            }
            (request, _) => {
                tracing::warn!(?request, "completion does not match its request, ignored");
            }
        }
    }

    pub const fn state(&self) -> &SelectionState {
        &self.state
    }

    pub const fn dropdown(&self, level: Level) -> &Dropdown {
        match level {
            Level::Province => &self.provinces,
            Level::Municipality => &self.municipalities,
            Level::Place => &self.places,
        }
    }

    fn dropdown_mut(&mut self, level: Level) -> &mut Dropdown {
        match level {
            Level::Province => &mut self.provinces,
            Level::Municipality => &mut self.municipalities,
            Level::Place => &mut self.places,
        }
    }

    pub const fn schedule(&self) -> &ScheduleTable {
        &self.schedule
    }

    pub const fn is_loading(&self, control: Control) -> bool {
        self.in_flight[control.index()] > 0
    }

    fn begin(&mut self, request: Request) -> Request {
        self.in_flight[request.control().index()] += 1;
        request
    }

    fn clear_below(&mut self, level: Level) {
        if level == Level::Province {
            self.municipalities = Dropdown::cleared(Level::Municipality);
        }
        if level != Level::Place {
            self.places = Dropdown::cleared(Level::Place);
        }
        self.schedule.clear();
    }
}
