use super::transport::HttpReply;
use crate::error::{CascadeError, FetchError, LocatorError};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// A reply whose status was 400 or above.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rejection {
    pub status: u16,
    pub status_text: String,
}

impl From<&HttpReply> for Rejection {
    fn from(reply: &HttpReply) -> Self {
        Self {
            status: reply.status,
            status_text: reply.status_text.clone(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ResponseError {
    #[error("rejected with {} {}", .0.status, .0.status_text)]
    Rejected(Rejection),

    #[error("body does not decode: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Shared response policy: anything below 400 resolves with the parsed JSON body,
/// anything else is a [`Rejection`].
pub fn translate<T: DeserializeOwned>(reply: &HttpReply) -> Result<T, ResponseError> {
    if reply.status < 400 {
        Ok(serde_json::from_str(&reply.body)?)
    } else {
        Err(ResponseError::Rejected(Rejection::from(reply)))
    }
}

/// Generic error page shown when a rejection reaches a caller with no handler of its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorView {
    pub status: u16,
    pub message: String,
}

impl From<&Rejection> for ErrorView {
    fn from(rejection: &Rejection) -> Self {
        Self {
            status: rejection.status,
            message: rejection.status_text.clone(),
        }
    }
}

impl fmt::Display for ErrorView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Error {}: {}", self.status, self.message)
    }
}

impl LocatorError {
    pub fn rejection(&self) -> Option<Rejection> {
        match self {
            Self::Rejected {
                status,
                status_text,
                ..
            } => Some(Rejection {
                status: *status,
                status_text: status_text.clone(),
            }),
            _ => None,
        }
    }
}

impl FetchError {
    pub fn rejection(&self) -> Option<Rejection> {
        match self {
            Self::Rejected {
                status,
                status_text,
                ..
            } => Some(Rejection {
                status: *status,
                status_text: status_text.clone(),
            }),
            _ => None,
        }
    }
}

impl CascadeError {
    /// The error page for this failure, if it was an HTTP rejection at either step.
    pub fn error_view(&self) -> Option<ErrorView> {
        let rejection = match self {
            Self::Locate(err) => err.rejection(),
            Self::Fetch(err) => err.rejection(),
        };
        rejection.as_ref().map(ErrorView::from)
    }
}
