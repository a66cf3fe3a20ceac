use serde_json::Value;
use thiserror::Error;

use crate::shape::ShapeError;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum DataError {
    #[error("request to {endpoint} failed: {message}")]
    Transport { endpoint: String, message: String },
    #[error("{endpoint} responded with status {status}")]
    Status { endpoint: String, status: u16 },
    #[error("fixture {path} could not be read: {message}")]
    Fixture { path: String, message: String },
    #[error("response was not valid JSON: {0}")]
    Malformed(String),
    #[error(transparent)]
    Shape(#[from] ShapeError),
    #[error("payload carries neither file_name nor column_name")]
    MissingParameter,
    #[error("only .xlsx workbooks can be uploaded (got `{0}`)")]
    UnsupportedUpload(String),
}

/// Result of every data-source call, consumed the same way by every page.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome<T> {
    Success(T),
    NotFound,
    Error(DataError),
}

impl FetchOutcome<Value> {
    /// Wrap a decoded body, honouring the `{"notFound": true}` sentinel.
    pub fn from_json(value: Value) -> Self {
        let not_found = value
            .get("notFound")
            .and_then(Value::as_bool)
            .unwrap_or(false);
        if not_found {
            FetchOutcome::NotFound
        } else {
            FetchOutcome::Success(value)
        }
    }
}

impl<T> FetchOutcome<T> {
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> FetchOutcome<U> {
        match self {
            FetchOutcome::Success(value) => FetchOutcome::Success(f(value)),
            FetchOutcome::NotFound => FetchOutcome::NotFound,
            FetchOutcome::Error(err) => FetchOutcome::Error(err),
        }
    }

    /// Chain a fallible step (typically shaping) onto a successful fetch.
    pub fn and_then<U, E>(self, f: impl FnOnce(T) -> Result<U, E>) -> FetchOutcome<U>
    where
        E: Into<DataError>,
    {
        match self {
            FetchOutcome::Success(value) => match f(value) {
                Ok(next) => FetchOutcome::Success(next),
                Err(err) => FetchOutcome::Error(err.into()),
            },
            FetchOutcome::NotFound => FetchOutcome::NotFound,
            FetchOutcome::Error(err) => FetchOutcome::Error(err),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, FetchOutcome::Success(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, FetchOutcome::NotFound)
    }
}
