//! Layout math for the SVG charts, kept free of any rendering so it can be
//! tested directly.

use std::f64::consts::{FRAC_PI_2, TAU};

use crate::model::ChartSeries;

pub const VIEW_WIDTH: f64 = 640.0;
pub const VIEW_HEIGHT: f64 = 360.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Frame {
    /// Plot area inside the default view box, leaving room for axis labels.
    pub fn plot_area() -> Self {
        Self {
            left: 56.0,
            top: 16.0,
            width: VIEW_WIDTH - 72.0,
            height: VIEW_HEIGHT - 72.0,
        }
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub label: String,
    pub value: f64,
    pub color: String,
}

impl BarRect {
    pub fn center_x(&self) -> f64 {
        self.x + self.width / 2.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarLayout {
    pub bars: Vec<BarRect>,
    /// Value at the top of the y axis.
    pub scale_max: f64,
    /// Gridline values from zero to `scale_max`.
    pub ticks: Vec<f64>,
}

/// Lay out one bar per point. Negative and non-finite counts render as empty bars.
pub fn bar_layout(series: &ChartSeries, frame: Frame) -> BarLayout {
    let values: Vec<f64> = series
        .y
        .iter()
        .map(|v| if v.is_finite() { v.max(0.0) } else { 0.0 })
        .collect();
    let peak = values.iter().copied().fold(0.0_f64, f64::max);
    let scale_max = nice_ceiling(peak);
    let ticks = (0..=4).map(|i| scale_max * i as f64 / 4.0).collect();

    let n = series.len().max(1) as f64;
    let slot = frame.width / n;
    let width = slot * 0.7;

    let bars = series
        .x
        .iter()
        .zip(values.iter())
        .zip(series.colors.iter())
        .enumerate()
        .map(|(i, ((label, &value), color))| {
            let height = if scale_max > 0.0 {
                frame.height * value / scale_max
            } else {
                0.0
            };
            BarRect {
                x: frame.left + slot * i as f64 + (slot - width) / 2.0,
                y: frame.bottom() - height,
                width,
                height,
                label: label.to_string(),
                value,
                color: color.clone(),
            }
        })
        .collect();

    BarLayout {
        bars,
        scale_max,
        ticks,
    }
}

/// Round up to 1, 2, 2.5 or 5 times a power of ten.
fn nice_ceiling(value: f64) -> f64 {
    if value <= 0.0 {
        return 1.0;
    }
    let magnitude = 10f64.powf(value.log10().floor());
    [1.0, 2.0, 2.5, 5.0, 10.0]
        .into_iter()
        .map(|step| step * magnitude)
        .find(|candidate| *candidate >= value)
        .unwrap_or(10.0 * magnitude)
}

#[derive(Debug, Clone, PartialEq)]
pub enum SliceShape {
    /// The only non-empty slice; drawn as a circle because an arc cannot
    /// start and end at the same point.
    Full,
    Path(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub shape: SliceShape,
    pub label: String,
    pub value: f64,
    pub fraction: f64,
    pub color: String,
}

/// Slices clockwise from twelve o'clock. Zero-valued points are omitted.
pub fn pie_slices(series: &ChartSeries, cx: f64, cy: f64, radius: f64) -> Vec<PieSlice> {
    let total = series.total();
    if total <= 0.0 {
        return Vec::new();
    }

    let points: Vec<(String, f64, String)> = series
        .x
        .iter()
        .zip(series.y.iter())
        .zip(series.colors.iter())
        .filter(|((_, v), _)| v.is_finite() && **v > 0.0)
        .map(|((label, v), color)| (label.to_string(), *v, color.clone()))
        .collect();

    if points.len() == 1 {
        let (label, value, color) = points.into_iter().next().unwrap_or_default();
        return vec![PieSlice {
            shape: SliceShape::Full,
            label,
            value,
            fraction: 1.0,
            color,
        }];
    }

    let mut angle = -FRAC_PI_2;
    points
        .into_iter()
        .map(|(label, value, color)| {
            let fraction = value / total;
            let sweep = fraction * TAU;
            let (x0, y0) = polar(cx, cy, radius, angle);
            let (x1, y1) = polar(cx, cy, radius, angle + sweep);
            let large_arc = if sweep > std::f64::consts::PI { 1 } else { 0 };
            angle += sweep;
            PieSlice {
                shape: SliceShape::Path(format!(
                    "M {cx:.2} {cy:.2} L {x0:.2} {y0:.2} A {radius:.2} {radius:.2} 0 {large_arc} 1 {x1:.2} {y1:.2} Z"
                )),
                label,
                value,
                fraction,
                color,
            }
        })
        .collect()
}

fn polar(cx: f64, cy: f64, radius: f64, angle: f64) -> (f64, f64) {
    (cx + radius * angle.cos(), cy + radius * angle.sin())
}
