use crate::domain::ResourceName;
use thiserror::Error;

/// The request never produced an HTTP response (connection refused, timeout, ...).
#[derive(Debug, Clone, Error)]
#[error("request to {url} failed: {message}")]
pub struct TransportError {
    pub url: String,
    pub message: String,
}

impl TransportError {
    pub fn new(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            message: message.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum LocatorError {
    #[error("discovery for {resource} is unreachable: {source}")]
    Unreachable {
        resource: ResourceName,
        #[source]
        source: TransportError,
    },

    #[error("discovery for {resource} answered {status} {status_text}")]
    Rejected {
        resource: ResourceName,
        status: u16,
        status_text: String,
    },

    #[error("discovery for {resource} returned an unusable location: {reason}")]
    InvalidLocation {
        resource: ResourceName,
        reason: String,
    },
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error(transparent)]
    Unreachable(#[from] TransportError),

    #[error("{url} answered {status} {status_text}")]
    Rejected {
        url: String,
        status: u16,
        status_text: String,
    },

    #[error("{url} returned a body that does not decode: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("cannot build a request URL from {base}: {reason}")]
    InvalidUrl { base: String, reason: String },
}

/// Failure of one cascade chain: either the locate step or the fetch step.
#[derive(Debug, Error)]
pub enum CascadeError {
    #[error(transparent)]
    Locate(#[from] LocatorError),

    #[error(transparent)]
    Fetch(#[from] FetchError),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error("schedule starts on an impossible date {year}-{month}-{day}")]
    InvalidStartDate { year: i32, month: u32, day: u32 },

    #[error("schedule day {index} falls outside the supported calendar")]
    DateOverflow { index: usize },

    #[error("date format {format:?} cannot be applied")]
    InvalidDateFormat { format: String },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{key}={value} is invalid: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}
