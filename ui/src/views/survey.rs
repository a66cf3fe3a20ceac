use dioxus::prelude::*;

use super::{use_data_source, use_language_marker};
use crate::components::{
    error_message, survey_trail, use_toaster, Breadcrumb, ErrorPanel, ExecutiveSummary,
    GraphsDisplay, LoadingPanel, ToastKind,
};
use crate::data::{Endpoint, RequestPayload};
use crate::model::SurveyReportView;
use crate::nav::{homepage_for, NavLink, NavTarget};
use crate::shape;
use crate::state::{survey_state, PageError, PageState};
use crate::t;

/// Insights report for one uploaded workbook.
#[component]
pub fn Survey(survey_name: String) -> Element {
    let _lang = use_language_marker();
    let source = use_data_source();
    let toaster = use_toaster();

    let requested = survey_name.clone();
    let report = use_resource(use_reactive!(|(requested,)| {
        let source = source.clone();
        async move {
            let outcome = source
                .post_data(
                    Endpoint::SurveyInsightsReport,
                    &RequestPayload::file(requested),
                )
                .await
                .and_then(shape::survey_report);
            survey_state(outcome)
        }
    }));

    use_effect(move || {
        if let Some(PageState::Failed(err)) = &*report.read() {
            toaster.push(ToastKind::Error, error_message(err));
        }
    });

    rsx! {
        section { class: "page page-survey",
            Breadcrumb { trail: survey_trail(&survey_name) }
            h1 { "{survey_name}" }
            SurveyReportBody {
                survey_name: survey_name.clone(),
                state: report.cloned().unwrap_or_default(),
            }
        }
    }
}

#[component]
pub fn SurveyReportBody(survey_name: String, state: PageState<SurveyReportView>) -> Element {
    let homepage = homepage_for(&survey_name);
    match state {
        PageState::Loading => rsx! { LoadingPanel {} },
        PageState::Ready(view) => rsx! {
            div { class: "page__actions",
                NavLink {
                    to: NavTarget::Participants { homepage: homepage.clone() },
                    class: "button",
                    {t!("survey-participants-link")}
                }
            }
            ExecutiveSummary { summary: view.summary }
            GraphsDisplay { graphs: view.graphs, homepage: Some(homepage) }
        },
        PageState::NotFound => rsx! { ErrorPanel { error: PageError::NoData } },
        PageState::Failed(error) => rsx! { ErrorPanel { error } },
    }
}
