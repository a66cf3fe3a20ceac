use dioxus::prelude::*;

use crate::core::format::{format_count, format_percent};
use crate::model::ParticipantData;
use crate::t;

#[component]
pub fn ParticipantStats(data: ParticipantData) -> Element {
    let completion = data
        .completion_rate()
        .map(format_percent)
        .unwrap_or_else(|| "—".to_string());

    let tiles = [
        (t!("stats-participants"), format_count(data.num_of_survey_participants)),
        (t!("stats-duplicated"), format_count(data.num_duplicated_answer)),
        (t!("stats-uncompleted"), format_count(data.uncompleted_answers)),
        (t!("stats-completion"), completion),
    ];

    rsx! {
        section { class: "participant-stats",
            for (i, (label, value)) in tiles.into_iter().enumerate() {
                div { key: "{i}", class: "participant-stats__tile",
                    span { class: "participant-stats__label", "{label}" }
                    strong { class: "participant-stats__value", "{value}" }
                }
            }
        }
    }
}
