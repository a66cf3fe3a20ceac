use dioxus::prelude::*;

use crate::charts::Chart;
use crate::model::{SegmentDataWrapper, SegmentGraph};
use crate::shape::segment_series;

#[component]
pub fn SegmentCard(segment: SegmentDataWrapper) -> Element {
    rsx! {
        article { class: "card segment-card",
            header {
                h3 { class: "card__title", "{segment.title}" }
                if !segment.sub_title.is_empty() {
                    p { class: "segment-card__subtitle", "{segment.sub_title}" }
                }
            }
            div { class: "segment-card__charts",
                {segment_chart(&segment.min_graph, "segment-card__min")}
                {segment_chart(&segment.max_graph, "segment-card__max")}
            }
            if !segment.insight.is_empty() {
                div { class: "segment-card__insight insight", dangerous_inner_html: "{segment.insight}" }
            }
        }
    }
}

fn segment_chart(graph: &SegmentGraph, class: &str) -> Element {
    rsx! {
        div { class: "{class}",
            Chart {
                series: segment_series(graph),
                kind: graph.kind,
                title: graph.title.clone(),
                x_title: None,
                y_title: None,
            }
        }
    }
}
