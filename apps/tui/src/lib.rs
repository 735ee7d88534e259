// Export our modules for use in binaries and tests
pub mod cascade;
pub mod config;
pub mod domain;
pub mod error;
pub mod http;
pub mod locator;
pub mod poller;
pub mod query;
pub mod router;
pub mod schedule;
pub mod store;

#[cfg(test)]
mod testing;

pub use cascade::{CascadeClient, CascadeController, Level, SelectionForm};
pub use config::AppConfig;
pub use domain::{ResourceName, ScheduleDocument, StageStatus};
pub use locator::Locator;
pub use poller::StatusPoller;
pub use query::{Answer, Query, Report};
pub use router::{Router, View};
pub use store::{status_store, StageSnapshot, StatusStore};
