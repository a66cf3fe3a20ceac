use dioxus::prelude::*;

use super::{use_data_source, use_language_marker};
use crate::charts::GraphChart;
use crate::components::{
    page_trail, Breadcrumb, ErrorPanel, LegendBar, LoadingPanel, SegmentCard,
};
use crate::model::DetailScreenView;
use crate::nav::{redirect, NavTarget};
use crate::shape;
use crate::state::PageState;
use crate::t;

/// Breakdown of one question: its overall distribution followed by the
/// per-segment min/max cards. Questions without data redirect to the
/// not-found page.
#[component]
pub fn DetailScreen(column_name: String, homepage_url: String) -> Element {
    let _lang = use_language_marker();
    let source = use_data_source();

    let requested = column_name.clone();
    let detail = use_resource(use_reactive!(|(requested,)| {
        let source = source.clone();
        async move {
            let outcome = source
                .get_detail_screen_data(&requested)
                .await
                .and_then(shape::detail_screen);
            PageState::from_outcome(outcome)
        }
    }));

    use_effect(move || {
        if let Some(PageState::NotFound) = &*detail.read() {
            tracing::info!("question has no breakdown; redirecting");
            redirect(NavTarget::NotFound);
        }
    });

    rsx! {
        section { class: "page page-detail",
            Breadcrumb { trail: page_trail(&homepage_url, column_name.clone()) }
            DetailScreenBody { state: detail.cloned().unwrap_or_default() }
        }
    }
}

#[component]
pub fn DetailScreenBody(state: PageState<DetailScreenView>) -> Element {
    match state {
        PageState::Loading => rsx! { LoadingPanel {} },
        // Redirect pending; render nothing.
        PageState::NotFound => rsx! {},
        PageState::Failed(error) => rsx! { ErrorPanel { error } },
        PageState::Ready(view) => {
            let DetailScreenView { question, segments } = view;
            rsx! {
                article { class: "card detail-question",
                    h1 { class: "card__title", "{question.title}" }
                    GraphChart { data: question.graph }
                    LegendBar { legend: question.legend }
                    if !question.insight.is_empty() {
                        div { class: "insight", dangerous_inner_html: "{question.insight}" }
                    }
                }
                if segments.is_empty() {
                    p { class: "page__note", {t!("detail-no-segments")} }
                } else {
                    h2 { {t!("detail-segments-title")} }
                    div { class: "segment-grid",
                        for (i, segment) in segments.into_iter().enumerate() {
                            SegmentCard { key: "{i}", segment }
                        }
                    }
                }
            }
        }
    }
}
