//! Page-level state machine shared by every container view.

use crate::data::{DataError, FetchOutcome};

/// Why a page could not show its content. Views localize the message.
#[derive(Debug, Clone, PartialEq)]
pub enum PageError {
    /// The service answered but had nothing to show.
    NoData,
    /// Fetch or shaping failed.
    Fetch(String),
}

impl From<DataError> for PageError {
    fn from(err: DataError) -> Self {
        PageError::Fetch(err.to_string())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PageState<T> {
    Loading,
    Ready(T),
    NotFound,
    Failed(PageError),
}

impl<T> Default for PageState<T> {
    fn default() -> Self {
        PageState::Loading
    }
}

impl<T> PageState<T> {
    /// Direct translation; `NotFound` stays `NotFound`.
    pub fn from_outcome(outcome: FetchOutcome<T>) -> Self {
        match outcome {
            FetchOutcome::Success(value) => PageState::Ready(value),
            FetchOutcome::NotFound => PageState::NotFound,
            FetchOutcome::Error(err) => PageState::Failed(err.into()),
        }
    }

    /// For pages without a not-found screen: a missing response is a failure.
    pub fn not_found_as_error(outcome: FetchOutcome<T>) -> Self {
        match outcome {
            FetchOutcome::NotFound => PageState::Failed(PageError::NoData),
            other => Self::from_outcome(other),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, PageState::Loading)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            PageState::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&PageError> {
        match self {
            PageState::Failed(err) => Some(err),
            _ => None,
        }
    }
}

/// Detail shown with the fetch-error message when a report has no graphs.
pub const EMPTY_REPORT: &str = "the report contains no graphs";

/// Survey page: an empty report is treated as a failed fetch.
pub fn survey_state(
    outcome: FetchOutcome<crate::model::SurveyReportView>,
) -> PageState<crate::model::SurveyReportView> {
    match PageState::not_found_as_error(outcome) {
        PageState::Ready(view) if view.graphs.is_empty() => {
            PageState::Failed(PageError::Fetch(EMPTY_REPORT.to_string()))
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DescriptionMainGraph, SurveyReportView};

    #[test]
    fn empty_survey_report_fails() {
        let outcome = FetchOutcome::Success(SurveyReportView {
            summary: DescriptionMainGraph::default(),
            graphs: Vec::new(),
        });
        assert_eq!(
            survey_state(outcome),
            PageState::Failed(PageError::Fetch(EMPTY_REPORT.into()))
        );
    }

    #[test]
    fn not_found_handling_differs_per_page() {
        assert_eq!(
            PageState::<u8>::from_outcome(FetchOutcome::NotFound),
            PageState::NotFound
        );
        assert_eq!(
            PageState::<u8>::not_found_as_error(FetchOutcome::NotFound),
            PageState::Failed(PageError::NoData)
        );
    }

    #[test]
    fn errors_carry_their_message() {
        let state = PageState::<u8>::from_outcome(FetchOutcome::Error(DataError::Status {
            endpoint: "get-all-graphs".into(),
            status: 500,
        }));
        assert_eq!(
            state.error(),
            Some(&PageError::Fetch(
                "get-all-graphs responded with status 500".into()
            ))
        );
        assert!(PageState::<u8>::default().is_loading());
    }
}
