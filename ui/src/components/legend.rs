use dioxus::prelude::*;

use crate::labels::{Sentiment, Severity, SENTIMENT_LEGEND};
use crate::t;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LegendEntry {
    /// Level name as it appears in the payloads.
    pub label: &'static str,
    pub color: &'static str,
}

/// Entries for a legend key: two sentiment buckets, or the full scale.
pub fn legend_entries(key: &str) -> Vec<LegendEntry> {
    if key == SENTIMENT_LEGEND {
        return vec![
            LegendEntry {
                label: "Negative",
                color: Sentiment::Negative.color(),
            },
            LegendEntry {
                label: "Positive",
                color: Sentiment::Positive.color(),
            },
        ];
    }
    Severity::ORDER
        .into_iter()
        .map(|level| LegendEntry {
            label: level.data_label(),
            color: level.color(),
        })
        .collect()
}

/// Localized display name for a level label.
pub fn level_display(label: &str) -> String {
    if let Some(level) = Severity::from_data_label(label) {
        return match level {
            Severity::VeryDissatisfied => t!("level-very-dissatisfied"),
            Severity::Dissatisfied => t!("level-dissatisfied"),
            Severity::SomewhatDissatisfied => t!("level-somewhat-dissatisfied"),
            Severity::Neutral => t!("level-neutral"),
            Severity::SomewhatSatisfied => t!("level-somewhat-satisfied"),
            Severity::Satisfied => t!("level-satisfied"),
            Severity::VerySatisfied => t!("level-very-satisfied"),
        };
    }
    match Sentiment::from_data_label(label) {
        Some(Sentiment::Negative) => t!("level-negative"),
        Some(Sentiment::Positive) => t!("level-positive"),
        None => label.to_string(),
    }
}

#[component]
pub fn LegendBar(legend: String) -> Element {
    let entries = legend_entries(&legend);
    rsx! {
        ul { class: "legend-bar",
            for entry in entries {
                li {
                    key: "{entry.label}",
                    class: "legend-bar__entry",
                    "data-level": "{entry.label}",
                    span { class: "legend-bar__swatch", style: "background:{entry.color}" }
                    span { class: "legend-bar__label", {level_display(entry.label)} }
                }
            }
        }
    }
}
