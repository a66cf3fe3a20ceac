use dioxus::prelude::*;

use super::geometry::{bar_layout, Frame, VIEW_HEIGHT, VIEW_WIDTH};
use crate::core::format::format_number;
use crate::model::ChartSeries;

struct Gridline {
    y: f64,
    label_y: f64,
    label: String,
}

struct BarMarks {
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    center: f64,
    value_y: f64,
    value: String,
    label: String,
    color: String,
}

#[component]
pub fn BarChart(
    series: ChartSeries,
    #[props(!optional)] x_title: Option<String>,
    #[props(!optional)] y_title: Option<String>,
) -> Element {
    let frame = Frame::plot_area();
    let layout = bar_layout(&series, frame);
    let view_box = format!("0 0 {VIEW_WIDTH} {VIEW_HEIGHT}");

    let axis_y = frame.bottom();
    let axis_right = frame.left + frame.width;
    let tick_x = frame.left - 8.0;
    let category_y = axis_y + 16.0;
    let x_title_x = frame.left + frame.width / 2.0;
    let x_title_y = VIEW_HEIGHT - 8.0;
    let y_title_transform = format!("translate(14 {}) rotate(-90)", frame.top + frame.height / 2.0);

    let gridlines: Vec<Gridline> = layout
        .ticks
        .iter()
        .map(|&tick| {
            let y = axis_y - frame.height * tick / layout.scale_max;
            Gridline {
                y,
                label_y: y + 4.0,
                label: format_number(tick, 1),
            }
        })
        .collect();

    let bars: Vec<BarMarks> = layout
        .bars
        .into_iter()
        .map(|bar| BarMarks {
            center: bar.center_x(),
            value_y: bar.y - 4.0,
            value: format_number(bar.value, 0),
            x: bar.x,
            y: bar.y,
            width: bar.width,
            height: bar.height,
            label: bar.label,
            color: bar.color,
        })
        .collect();

    rsx! {
        svg {
            class: "chart__svg chart__svg--bar",
            view_box: "{view_box}",
            role: "img",
            for (i, grid) in gridlines.iter().enumerate() {
                g { key: "grid-{i}", class: "chart__grid",
                    line {
                        x1: "{frame.left}",
                        y1: "{grid.y}",
                        x2: "{axis_right}",
                        y2: "{grid.y}",
                        stroke: "currentColor",
                        stroke_opacity: "0.15",
                    }
                    text {
                        x: "{tick_x}",
                        y: "{grid.label_y}",
                        text_anchor: "end",
                        font_size: "11",
                        fill: "currentColor",
                        "{grid.label}"
                    }
                }
            }
            for (i, bar) in bars.iter().enumerate() {
                g { key: "bar-{i}", class: "chart__bar",
                    rect {
                        x: "{bar.x}",
                        y: "{bar.y}",
                        width: "{bar.width}",
                        height: "{bar.height}",
                        rx: "3",
                        fill: "{bar.color}",
                    }
                    text {
                        x: "{bar.center}",
                        y: "{bar.value_y}",
                        text_anchor: "middle",
                        font_size: "11",
                        fill: "currentColor",
                        "{bar.value}"
                    }
                    text {
                        x: "{bar.center}",
                        y: "{category_y}",
                        text_anchor: "middle",
                        font_size: "11",
                        fill: "currentColor",
                        "{bar.label}"
                    }
                }
            }
            if let Some(x_title) = x_title {
                text {
                    class: "chart__axis-title",
                    x: "{x_title_x}",
                    y: "{x_title_y}",
                    text_anchor: "middle",
                    font_size: "12",
                    fill: "currentColor",
                    "{x_title}"
                }
            }
            if let Some(y_title) = y_title {
                text {
                    class: "chart__axis-title",
                    transform: "{y_title_transform}",
                    text_anchor: "middle",
                    font_size: "12",
                    fill: "currentColor",
                    "{y_title}"
                }
            }
        }
    }
}
