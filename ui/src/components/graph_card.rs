use dioxus::prelude::*;

use crate::charts::GraphChart;
use crate::components::legend::LegendBar;
use crate::model::GraphWrapper;
use crate::nav::{NavLink, NavTarget};
use crate::t;

/// One graph with its insight and legend. When the graph belongs to a
/// question and the survey page is known, links to the question breakdown.
#[component]
pub fn GraphCard(graph: GraphWrapper, #[props(!optional)] homepage: Option<String>) -> Element {
    let detail = match (&graph.column_name, &homepage) {
        (Some(column), Some(homepage)) => Some(NavTarget::Detail {
            column: column.clone(),
            homepage: homepage.clone(),
        }),
        _ => None,
    };

    rsx! {
        article { class: "card graph-card",
            header { class: "graph-card__header",
                h3 { class: "card__title", "{graph.title}" }
                if let Some(target) = detail {
                    NavLink { to: target, class: "graph-card__detail-link", {t!("graph-view-details")} }
                }
            }
            GraphChart { data: graph.graph.clone() }
            LegendBar { legend: graph.legend.clone() }
            if !graph.insight.is_empty() {
                div { class: "graph-card__insight insight", dangerous_inner_html: "{graph.insight}" }
            }
        }
    }
}

#[component]
pub fn GraphsDisplay(
    graphs: Vec<GraphWrapper>,
    #[props(!optional)] homepage: Option<String>,
) -> Element {
    rsx! {
        section { class: "graphs-display",
            for (i, graph) in graphs.into_iter().enumerate() {
                GraphCard { key: "{i}", graph, homepage: homepage.clone() }
            }
        }
    }
}
