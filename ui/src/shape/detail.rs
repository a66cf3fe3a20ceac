use serde_json::Value;

use super::{decode, graph, ShapeError};
use crate::core::sanitize::SafeHtml;
use crate::model::raw::{RawDetailScreen, RawSegment};
use crate::labels::level_color;
use crate::model::{ChartSeries, DetailScreenView, ResponseValue, SegmentDataWrapper, SegmentGraph};

/// Shape a question breakdown. The caller has already turned the
/// `notFound` sentinel into `FetchOutcome::NotFound`.
pub fn detail_screen(value: Value) -> Result<DetailScreenView, ShapeError> {
    let raw: RawDetailScreen = decode(value, "question details")?;
    Ok(DetailScreenView {
        question: graph(raw.question),
        segments: raw.cards.into_iter().map(segment).collect(),
    })
}

/// Category order is the order of the response document.
pub fn segment(raw: RawSegment) -> SegmentDataWrapper {
    SegmentDataWrapper {
        title: raw.title,
        sub_title: raw.sub_title,
        insight: SafeHtml::sanitize(&raw.insight),
        min_graph: SegmentGraph {
            kind: raw.min_graph_type,
            title: raw.min_graph_title,
            categories: raw.graph_min_lvl_2,
        },
        max_graph: SegmentGraph {
            kind: raw.max_graph_type,
            title: raw.max_graph_title,
            categories: raw.graph_max_lvl_2,
        },
    }
}

/// Chart series for one side of a segment, one point per category.
pub fn segment_series(graph: &SegmentGraph) -> ChartSeries {
    let mut series = ChartSeries::default();
    for (category, point) in &graph.categories {
        series.x.push(ResponseValue::Text(category.clone()));
        series.y.push(point.count);
        series.colors.push(level_color(Some(&point.level)).to_string());
    }
    series
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ChartKind;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn sample() -> Value {
        json!({
            "title": "Overall satisfaction",
            "column_name": "Q1",
            "insight": "Stable",
            "graph_lvl_1": [{"Response": 2, "Count": 1}, {"Response": 1, "Count": 9}],
            "cards": [{
                "title": "By department",
                "sub_title": "Lowest vs highest",
                "insight": "<em>Sales</em> trails",
                "graph_min_lvl_2": {
                    "Sales": {"Satisfaction Level": "Dissatisfied", "Count": 12},
                    "Ops": {"Satisfaction Level": "Neutral", "Count": 7}
                },
                "graph_max_lvl_2": {
                    "R&D": {"Satisfaction Level": "Very Satisfied", "Count": 30}
                },
                "max_graph_type": "pie",
                "min_graph_title": "Least satisfied"
            }]
        })
    }

    #[test]
    fn detail_keeps_category_order() {
        let view = detail_screen(sample()).unwrap();
        assert_eq!(view.question.column_name.as_deref(), Some("Q1"));
        assert_eq!(view.question.graph.series.y, vec![9.0, 1.0]);

        let segment = &view.segments[0];
        let categories: Vec<&str> = segment.min_graph.categories.keys().map(String::as_str).collect();
        assert_eq!(categories, ["Sales", "Ops"]);
        assert_eq!(segment.min_graph.kind, ChartKind::Bar);
        assert_eq!(segment.max_graph.kind, ChartKind::Pie);
        assert_eq!(segment.min_graph.title, "Least satisfied");
        assert_eq!(segment.insight.as_str(), "<em>Sales</em> trails");

        let series = segment_series(&segment.min_graph);
        assert!(series.is_aligned());
        assert_eq!(series.y, vec![12.0, 7.0]);
        assert_eq!(series.colors[0], crate::labels::Severity::Dissatisfied.color());
    }

    #[test]
    fn detail_without_cards_has_no_segments() {
        let mut value = sample();
        value.as_object_mut().unwrap().remove("cards");
        assert!(detail_screen(value).unwrap().segments.is_empty());
    }

    #[test]
    fn malformed_segment_is_an_error() {
        let mut value = sample();
        value["cards"][0]["graph_max_lvl_2"] = json!([1, 2]);
        assert!(detail_screen(value).is_err());
    }
}
