//! Pure transformations from response JSON to view-models.
//!
//! Nothing here touches the network or the DOM; every function takes a
//! decoded `serde_json::Value` and either returns a view-model or a
//! `ShapeError` naming the response it could not make sense of.

use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

mod detail;
mod graph;
mod report;

pub use detail::{detail_screen, segment, segment_series};
pub use graph::{graph, infer_legend, series};
pub use report::{overview, participants, survey_report};

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ShapeError {
    #[error("{context} response is malformed: {message}")]
    Malformed {
        context: &'static str,
        message: String,
    },
}

pub(crate) fn decode<T: DeserializeOwned>(value: Value, context: &'static str) -> Result<T, ShapeError> {
    serde_json::from_value(value).map_err(|err| ShapeError::Malformed {
        context,
        message: err.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::raw::RawAllGraphs;
    use serde_json::json;

    #[test]
    fn decode_reports_context_and_field() {
        let err = decode::<RawAllGraphs>(json!({"charts": []}), "overview").unwrap_err();
        let ShapeError::Malformed { context, message } = err;
        assert_eq!(context, "overview");
        assert!(message.contains("graphs"), "{message}");
    }
}
