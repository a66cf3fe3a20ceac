use serde::{Deserialize, Serialize};

use super::DataError;

/// Analytics service endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    AllGraphs,
    SurveyInsightsReport,
    SurveyParticipantsPage,
    QuestionPlotDetails,
    UploadFile,
}

impl Endpoint {
    /// Path segment under the service base URL (also the fixture section key).
    pub fn path(self) -> &'static str {
        match self {
            Endpoint::AllGraphs => "get-all-graphs",
            Endpoint::SurveyInsightsReport => "survey-insights-report",
            Endpoint::SurveyParticipantsPage => "survey-participants-page",
            Endpoint::QuestionPlotDetails => "get_question_plot_details",
            Endpoint::UploadFile => "upload-file",
        }
    }
}

/// JSON body of the POST endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RequestPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column_name: Option<String>,
}

impl RequestPayload {
    pub fn file(name: impl Into<String>) -> Self {
        Self {
            file_name: Some(name.into()),
            column_name: None,
        }
    }

    pub fn column(name: impl Into<String>) -> Self {
        Self {
            file_name: None,
            column_name: Some(name.into()),
        }
    }

    /// Parameter used to pick the fixture file: `file_name`, else `column_name`.
    pub fn fixture_param(&self) -> Option<&str> {
        self.file_name
            .as_deref()
            .or(self.column_name.as_deref())
            .filter(|param| !param.trim().is_empty())
    }
}

/// `report.xlsx` -> `report`; anything outside `[A-Za-z0-9_-]` becomes `_`.
pub fn sanitize_param(raw: &str) -> String {
    let trimmed = raw.trim();
    let stem = match trimmed.len().checked_sub(".xlsx".len()) {
        Some(cut) if trimmed.is_char_boundary(cut) && trimmed[cut..].eq_ignore_ascii_case(".xlsx") => {
            &trimmed[..cut]
        }
        _ => trimmed,
    };
    stem.chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
        .collect()
}

pub fn fixture_file_name(param: &str) -> String {
    format!("cache_{}.json", sanitize_param(param))
}

/// Fixture holding the overview graphs.
pub const ALL_GRAPHS_FIXTURE: &str = "db.json";

/// A workbook picked on the upload page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileUpload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl FileUpload {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Result<Self, DataError> {
        let file_name = file_name.into();
        validate_upload_name(&file_name)?;
        Ok(Self { file_name, bytes })
    }
}

pub fn validate_upload_name(name: &str) -> Result<(), DataError> {
    let lower = name.trim().to_ascii_lowercase();
    if lower.len() > ".xlsx".len() && lower.ends_with(".xlsx") {
        Ok(())
    } else {
        Err(DataError::UnsupportedUpload(name.to_string()))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct UploadReceipt {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub file_name: Option<String>,
}
