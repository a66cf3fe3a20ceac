//! Server-side pieces of the survey dashboard: the blob-storage listing that
//! feeds the navigation drawer, exposed as a fullstack server function.

use dioxus::prelude::*;

pub mod blob;

pub use blob::filter_file_names;

/// List survey workbook basenames from the `data` container.
///
/// Runs on the server so storage credentials never ship to the browser.
/// Listing failures are logged server-side and produce an empty list.
#[server(ListSurveyFiles)]
pub async fn list_survey_files() -> Result<Vec<String>, ServerFnError> {
    Ok(blob::list_from_env().await)
}

/// Workbook names for the navigation drawer.
///
/// Desktop builds (`direct`) list in-process; other builds call the server
/// function. Errors never propagate: the drawer simply renders nothing.
pub async fn survey_files() -> Vec<String> {
    #[cfg(feature = "direct")]
    {
        blob::list_from_env().await
    }

    #[cfg(not(feature = "direct"))]
    {
        match list_survey_files().await {
            Ok(files) => files,
            Err(err) => {
                tracing::warn!("survey file listing failed: {err}");
                Vec::new()
            }
        }
    }
}
