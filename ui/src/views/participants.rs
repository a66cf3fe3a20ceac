use dioxus::prelude::*;

use super::{use_data_source, use_language_marker};
use crate::components::{
    page_trail, Breadcrumb, ErrorPanel, GraphsDisplay, LoadingPanel, ParticipantStats,
};
use crate::data::{Endpoint, FetchOutcome, RequestPayload};
use crate::model::ParticipantData;
use crate::nav::survey_name_from_homepage;
use crate::shape;
use crate::state::{PageError, PageState};
use crate::t;

/// Response statistics for the survey addressed by `homepage_url`.
#[component]
pub fn ParticipantPage(homepage_url: String) -> Element {
    let _lang = use_language_marker();
    let source = use_data_source();

    let requested = homepage_url.clone();
    let participants = use_resource(use_reactive!(|(requested,)| {
        let source = source.clone();
        async move {
            let Some(survey_name) = survey_name_from_homepage(&requested) else {
                tracing::warn!(homepage = %requested, "participant page without a survey");
                return PageState::Failed(PageError::NoData);
            };
            let outcome: FetchOutcome<ParticipantData> = source
                .post_data(
                    Endpoint::SurveyParticipantsPage,
                    &RequestPayload::file(survey_name),
                )
                .await
                .and_then(shape::participants);
            PageState::not_found_as_error(outcome)
        }
    }));

    rsx! {
        section { class: "page page-participants",
            Breadcrumb { trail: page_trail(&homepage_url, t!("participants-title")) }
            h1 { {t!("participants-title")} }
            ParticipantsBody {
                homepage_url: homepage_url.clone(),
                state: participants.cloned().unwrap_or_default(),
            }
        }
    }
}

#[component]
pub fn ParticipantsBody(homepage_url: String, state: PageState<ParticipantData>) -> Element {
    match state {
        PageState::Loading => rsx! { LoadingPanel {} },
        PageState::NotFound => rsx! { ErrorPanel { error: PageError::NoData } },
        PageState::Failed(error) => rsx! { ErrorPanel { error } },
        PageState::Ready(data) => {
            let graphs = data.graphs.clone();
            rsx! {
                ParticipantStats { data }
                if !graphs.is_empty() {
                    GraphsDisplay { graphs, homepage: Some(homepage_url) }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_show_dash_without_participants() {
        crate::i18n::init();
        let data = ParticipantData {
            num_duplicated_answer: 0,
            num_of_survey_participants: 0,
            uncompleted_answers: 0,
            graphs: Vec::new(),
        };
        let mut dom = VirtualDom::new_with_props(
            ParticipantsBody,
            ParticipantsBodyProps {
                homepage_url: "/survey/s.xlsx".into(),
                state: PageState::Ready(data),
            },
        );
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);
        assert_eq!(html.matches("participant-stats__tile").count(), 4);
        assert!(html.contains("—"));
        assert!(!html.contains("graphs-display"));
    }
}
