use crate::core::sanitize::SafeHtml;
use crate::labels::{level_color, Sentiment, FULL_LEGEND, SENTIMENT_LEGEND};
use crate::model::raw::{RawGraph, RawPoint};
use crate::model::{ChartLayout, ChartSeries, GraphData, GraphWrapper};

/// Sort points by `Response` and split them into aligned chart arrays.
pub fn series(mut points: Vec<RawPoint>) -> ChartSeries {
    // Stable, so equal responses keep their payload order.
    points.sort_by(|a, b| a.response.cmp(&b.response));

    let mut out = ChartSeries {
        x: Vec::with_capacity(points.len()),
        y: Vec::with_capacity(points.len()),
        colors: Vec::with_capacity(points.len()),
    };
    for point in points {
        out.colors.push(level_color(point.level.as_deref()).to_string());
        out.x.push(point.response);
        out.y.push(point.count);
    }
    out
}

/// Legend for a graph that does not name one: two-bucket charts get the
/// sentiment legend, everything else the full scale.
pub fn infer_legend(points: &[RawPoint]) -> &'static str {
    let all_sentiment = !points.is_empty()
        && points.iter().all(|p| {
            p.level
                .as_deref()
                .and_then(Sentiment::from_data_label)
                .is_some()
        });
    if all_sentiment {
        SENTIMENT_LEGEND
    } else {
        FULL_LEGEND
    }
}

pub fn graph(raw: RawGraph) -> GraphWrapper {
    let legend = raw
        .legend
        .filter(|l| !l.trim().is_empty())
        .unwrap_or_else(|| infer_legend(&raw.graph_lvl_1).to_string());

    GraphWrapper {
        graph: GraphData {
            series: series(raw.graph_lvl_1),
            layout: ChartLayout {
                kind: raw.chart_type,
                title: raw.title.clone(),
                x_title: raw.x_title,
                y_title: raw.y_title,
            },
        },
        insight: SafeHtml::sanitize(&raw.insight),
        column_name: raw.column_name.filter(|c| !c.is_empty()),
        title: raw.title,
        legend,
    }
}
