use dioxus::prelude::*;

use crate::model::DescriptionMainGraph;
use crate::t;

/// Executive summary above the survey graphs. The short description is
/// always visible; the detailed one folds out.
#[component]
pub fn ExecutiveSummary(summary: DescriptionMainGraph) -> Element {
    let mut expanded = use_signal(|| false);
    let toggle_label = if expanded() {
        t!("summary-show-less")
    } else {
        t!("summary-show-more")
    };

    rsx! {
        section { class: "card executive-summary",
            h2 { class: "card__title", {t!("summary-title")} }
            div {
                class: "executive-summary__short insight",
                dangerous_inner_html: "{summary.short_description}",
            }
            if !summary.detailed_description.is_empty() {
                if expanded() {
                    div {
                        class: "executive-summary__detailed insight",
                        dangerous_inner_html: "{summary.detailed_description}",
                    }
                }
                button {
                    class: "button button--link",
                    r#type: "button",
                    onclick: move |_| expanded.set(!expanded()),
                    "{toggle_label}"
                }
            }
        }
    }
}
