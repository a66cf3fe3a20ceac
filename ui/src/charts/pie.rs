use dioxus::prelude::*;

use super::geometry::{pie_slices, SliceShape};
use crate::core::format::format_percent;
use crate::model::ChartSeries;

const SIZE: f64 = 240.0;
const INSET: f64 = 8.0;

#[component]
pub fn PieChart(series: ChartSeries) -> Element {
    let center = SIZE / 2.0;
    let radius = center - INSET;
    let slices = pie_slices(&series, center, center, radius);

    rsx! {
        div { class: "chart__pie",
            svg {
                class: "chart__svg chart__svg--pie",
                view_box: "0 0 {SIZE} {SIZE}",
                role: "img",
                for (i, slice) in slices.iter().enumerate() {
                    {match &slice.shape {
                        SliceShape::Full => rsx! {
                            circle { key: "{i}", cx: "{center}", cy: "{center}", r: "{radius}", fill: "{slice.color}" }
                        },
                        SliceShape::Path(d) => rsx! {
                            path { key: "{i}", d: "{d}", fill: "{slice.color}", stroke: "#ffffff", stroke_width: "1" }
                        },
                    }}
                }
            }
            ul { class: "chart__pie-legend",
                for (i, slice) in slices.iter().enumerate() {
                    li { key: "{i}",
                        span { class: "chart__swatch", style: "background:{slice.color}" }
                        span { class: "chart__pie-label", "{slice.label}" }
                        span { class: "chart__pie-value", {format_percent(slice.fraction)} }
                    }
                }
            }
        }
    }
}
