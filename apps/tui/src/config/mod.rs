// Config module for lightsched
// Environment-driven settings with `.env` support

mod settings;

pub use settings::{
    AppConfig, DATE_FORMAT_VAR, DEBUG_VAR, DEFAULT_DISCOVERY_URL, DEFAULT_REQUEST_TIMEOUT,
    DISCOVERY_URL_VAR, POLL_INTERVAL_VAR, REQUEST_TIMEOUT_VAR,
};
