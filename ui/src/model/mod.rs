//! Wire shapes returned by the analytics service (`raw`) and the page-scoped
//! view-models the components render (`view`).

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

pub mod raw;
pub mod view;

pub use view::*;

/// Value on a chart's category axis (`Response` in the payloads).
///
/// Numbers order numerically and sort before text; text orders
/// lexicographically.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResponseValue {
    Number(f64),
    Text(String),
}

impl PartialEq for ResponseValue {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for ResponseValue {}

impl PartialOrd for ResponseValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ResponseValue {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (ResponseValue::Number(a), ResponseValue::Number(b)) => a.total_cmp(b),
            (ResponseValue::Number(_), ResponseValue::Text(_)) => Ordering::Less,
            (ResponseValue::Text(_), ResponseValue::Number(_)) => Ordering::Greater,
            (ResponseValue::Text(a), ResponseValue::Text(b)) => a.cmp(b),
        }
    }
}

impl fmt::Display for ResponseValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResponseValue::Number(n) if n.fract() == 0.0 && n.is_finite() => write!(f, "{n:.0}"),
            ResponseValue::Number(n) => write!(f, "{n}"),
            ResponseValue::Text(text) => f.write_str(text),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    #[default]
    Bar,
    Pie,
}

/// One category of a segment breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentPoint {
    #[serde(rename = "Satisfaction Level")]
    pub level: String,
    #[serde(rename = "Count")]
    pub count: f64,
}
