//! UI-ready view-models. Built per fetch, held in page state and dropped on
//! navigation.

use indexmap::IndexMap;

use super::{ChartKind, ResponseValue, SegmentPoint};
use crate::core::sanitize::SafeHtml;

/// Parallel arrays feeding one chart trace.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartSeries {
    pub x: Vec<ResponseValue>,
    pub y: Vec<f64>,
    pub colors: Vec<String>,
}

impl ChartSeries {
    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// `x`, `y` and `colors` line up.
    pub fn is_aligned(&self) -> bool {
        self.x.len() == self.y.len() && self.y.len() == self.colors.len()
    }

    /// Sum of the positive finite values (the ones a pie chart can draw).
    pub fn total(&self) -> f64 {
        self.y.iter().copied().filter(|v| v.is_finite() && *v > 0.0).sum()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartLayout {
    pub kind: ChartKind,
    pub title: String,
    pub x_title: Option<String>,
    pub y_title: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GraphData {
    pub series: ChartSeries,
    pub layout: ChartLayout,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GraphWrapper {
    pub title: String,
    /// Question the graph belongs to; present when a detail screen exists.
    pub column_name: Option<String>,
    pub insight: SafeHtml,
    pub graph: GraphData,
    /// Legend key (see `labels::SENTIMENT_LEGEND` / `labels::FULL_LEGEND`).
    pub legend: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SegmentGraph {
    pub kind: ChartKind,
    pub title: String,
    pub categories: IndexMap<String, SegmentPoint>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SegmentDataWrapper {
    pub title: String,
    pub sub_title: String,
    pub insight: SafeHtml,
    pub min_graph: SegmentGraph,
    pub max_graph: SegmentGraph,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DescriptionMainGraph {
    pub short_description: SafeHtml,
    pub detailed_description: SafeHtml,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParticipantData {
    pub num_duplicated_answer: u64,
    pub num_of_survey_participants: u64,
    pub uncompleted_answers: u64,
    pub graphs: Vec<GraphWrapper>,
}

impl ParticipantData {
    /// Share of participants who completed the survey; `None` without participants.
    pub fn completion_rate(&self) -> Option<f64> {
        if self.num_of_survey_participants == 0 {
            return None;
        }
        let total = self.num_of_survey_participants as f64;
        let completed = total - self.uncompleted_answers.min(self.num_of_survey_participants) as f64;
        Some(completed / total)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SurveyReportView {
    pub summary: DescriptionMainGraph,
    pub graphs: Vec<GraphWrapper>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DetailScreenView {
    pub question: GraphWrapper,
    pub segments: Vec<SegmentDataWrapper>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct OverviewView {
    pub graphs: Vec<GraphWrapper>,
}
