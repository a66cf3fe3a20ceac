//! Inline SVG charts.

use dioxus::prelude::*;

use crate::model::{ChartKind, ChartSeries, GraphData};

mod bar;
pub mod geometry;
mod pie;

pub use bar::BarChart;
pub use pie::PieChart;

/// Render a series with the chart kind its layout asks for.
#[component]
pub fn Chart(
    series: ChartSeries,
    kind: ChartKind,
    #[props(default)] title: String,
    #[props(!optional)] x_title: Option<String>,
    #[props(!optional)] y_title: Option<String>,
) -> Element {
    if series.is_empty() {
        return rsx! {
            p { class: "chart chart--empty", {crate::t!("chart-empty")} }
        };
    }

    rsx! {
        figure { class: "chart",
            if !title.is_empty() {
                figcaption { class: "chart__title", "{title}" }
            }
            {match kind {
                ChartKind::Bar => rsx! { BarChart { series, x_title, y_title } },
                ChartKind::Pie => rsx! { PieChart { series } },
            }}
        }
    }
}

#[component]
pub fn GraphChart(data: GraphData) -> Element {
    let GraphData { series, layout } = data;
    rsx! {
        Chart {
            series,
            kind: layout.kind,
            x_title: layout.x_title,
            y_title: layout.y_title,
        }
    }
}
