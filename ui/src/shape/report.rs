use serde_json::Value;

use super::{decode, graph, ShapeError};
use crate::core::sanitize::SafeHtml;
use crate::model::raw::{RawAllGraphs, RawParticipants, RawSurveyReport};
use crate::model::{DescriptionMainGraph, OverviewView, ParticipantData, SurveyReportView};

pub fn survey_report(value: Value) -> Result<SurveyReportView, ShapeError> {
    let raw: RawSurveyReport = decode(value, "survey report")?;
    Ok(SurveyReportView {
        summary: DescriptionMainGraph {
            short_description: SafeHtml::sanitize(&raw.description_main_graph.short_description),
            detailed_description: SafeHtml::sanitize(
                &raw.description_main_graph.detailed_description,
            ),
        },
        graphs: raw.graphs.into_iter().map(graph).collect(),
    })
}

pub fn overview(value: Value) -> Result<OverviewView, ShapeError> {
    let raw: RawAllGraphs = decode(value, "overview")?;
    Ok(OverviewView {
        graphs: raw.graphs.into_iter().map(graph).collect(),
    })
}

pub fn participants(value: Value) -> Result<ParticipantData, ShapeError> {
    let raw: RawParticipants = decode(value, "participants")?;
    Ok(ParticipantData {
        num_duplicated_answer: raw.num_duplicated_answer,
        num_of_survey_participants: raw.num_of_survey_participants,
        uncompleted_answers: raw.uncompleted_answers,
        graphs: raw.graphs.into_iter().map(graph).collect(),
    })
}
