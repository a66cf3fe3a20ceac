use dioxus::prelude::*;

use crate::state::PageError;
use crate::t;

/// Localized text for a page failure.
pub fn error_message(err: &PageError) -> String {
    match err {
        PageError::NoData => t!("error-no-data"),
        PageError::Fetch(detail) => t!("error-fetch", detail = detail.clone()),
    }
}

#[component]
pub fn LoadingPanel() -> Element {
    rsx! {
        div { class: "status status--loading", role: "status",
            span { class: "status__spinner", aria_hidden: "true" }
            span { {t!("status-loading")} }
        }
    }
}

#[component]
pub fn ErrorPanel(error: PageError) -> Element {
    rsx! {
        div { class: "status status--error", role: "alert",
            strong { {t!("status-error-title")} }
            p { {error_message(&error)} }
        }
    }
}
