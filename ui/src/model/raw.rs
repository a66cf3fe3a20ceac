//! Response bodies as the analytics service sends them.

use indexmap::IndexMap;
use serde::Deserialize;

use super::{ChartKind, ResponseValue, SegmentPoint};

#[derive(Debug, Clone, Deserialize)]
pub struct RawPoint {
    #[serde(rename = "Response")]
    pub response: ResponseValue,
    #[serde(rename = "Count")]
    pub count: f64,
    #[serde(rename = "Satisfaction Level", default)]
    pub level: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawGraph {
    pub title: String,
    #[serde(default)]
    pub column_name: Option<String>,
    #[serde(default)]
    pub insight: String,
    #[serde(default)]
    pub legend: Option<String>,
    #[serde(default)]
    pub chart_type: ChartKind,
    #[serde(default)]
    pub x_title: Option<String>,
    #[serde(default)]
    pub y_title: Option<String>,
    pub graph_lvl_1: Vec<RawPoint>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawDescription {
    pub short_description: String,
    pub detailed_description: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawSurveyReport {
    pub description_main_graph: RawDescription,
    pub graphs: Vec<RawGraph>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawAllGraphs {
    pub graphs: Vec<RawGraph>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawSegment {
    pub title: String,
    #[serde(default)]
    pub sub_title: String,
    #[serde(default)]
    pub insight: String,
    pub graph_min_lvl_2: IndexMap<String, SegmentPoint>,
    pub graph_max_lvl_2: IndexMap<String, SegmentPoint>,
    #[serde(default)]
    pub min_graph_type: ChartKind,
    #[serde(default)]
    pub max_graph_type: ChartKind,
    #[serde(default)]
    pub min_graph_title: String,
    #[serde(default)]
    pub max_graph_title: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawDetailScreen {
    #[serde(flatten)]
    pub question: RawGraph,
    #[serde(default)]
    pub cards: Vec<RawSegment>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawParticipants {
    pub num_duplicated_answer: u64,
    pub num_of_survey_participants: u64,
    pub uncompleted_answers: u64,
    #[serde(default)]
    pub graphs: Vec<RawGraph>,
}
