//! Page containers. Each page reads the `SharedDataSource` from context,
//! fetches once per mount or route-parameter change, shapes the response
//! and hands a `PageState` to a presentational body.

mod detail;
mod home;
mod not_found;
mod participants;
mod survey;
mod upload;

pub use detail::{DetailScreen, DetailScreenBody};
pub use home::{Home, OverviewBody};
pub use not_found::NotFound;
pub use participants::{ParticipantPage, ParticipantsBody};
pub use survey::{Survey, SurveyReportBody};
pub use upload::UploadSurvey;

use dioxus::prelude::*;

use crate::data::SharedDataSource;

/// Data source installed by the platform launcher.
pub(crate) fn use_data_source() -> SharedDataSource {
    use_context::<SharedDataSource>()
}

/// Subscribe to the global language code so page text refreshes on switch.
pub(crate) fn use_language_marker() -> String {
    try_use_context::<Signal<String>>()
        .map(|code| code())
        .unwrap_or_default()
}
