use dioxus::prelude::*;

use super::{use_data_source, use_language_marker};
use crate::components::{ErrorPanel, GraphsDisplay, LoadingPanel};
use crate::model::OverviewView;
use crate::shape;
use crate::state::{PageError, PageState};
use crate::t;

#[component]
pub fn Home() -> Element {
    let _lang = use_language_marker();
    let source = use_data_source();

    let overview = use_resource(move || {
        let source = source.clone();
        async move {
            let outcome = source.get_all_graphs().await.and_then(shape::overview);
            PageState::not_found_as_error(outcome)
        }
    });

    rsx! {
        section { class: "page page-home",
            h1 { {t!("home-title")} }
            p { class: "page__lead", {t!("home-intro")} }
            OverviewBody { state: overview.cloned().unwrap_or_default() }
        }
    }
}

#[component]
pub fn OverviewBody(state: PageState<OverviewView>) -> Element {
    match state {
        PageState::Loading => rsx! { LoadingPanel {} },
        PageState::Ready(view) if view.graphs.is_empty() => rsx! {
            ErrorPanel { error: PageError::NoData }
        },
        PageState::Ready(view) => rsx! { GraphsDisplay { graphs: view.graphs, homepage: None } },
        PageState::NotFound => rsx! { ErrorPanel { error: PageError::NoData } },
        PageState::Failed(error) => rsx! { ErrorPanel { error } },
    }
}
