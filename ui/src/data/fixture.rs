use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, info, warn};

use super::request::{fixture_file_name, validate_upload_name, ALL_GRAPHS_FIXTURE};
use super::{DataError, DataSource, Endpoint, FetchOutcome, FileUpload, RequestPayload, UploadReceipt};
use crate::config::{DataMode, FixtureRoot};

/// Reads precomputed responses from static JSON files.
///
/// A fixture may hold one response, or several keyed by endpoint path
/// (`{"survey-insights-report": {...}, "survey-participants-page": {...}}`)
/// so that one `cache_<survey>.json` serves every page of that survey.
#[derive(Debug, Clone)]
pub struct FixtureDataSource {
    root: FixtureRoot,
    http: reqwest::Client,
}

impl FixtureDataSource {
    pub fn new(root: FixtureRoot) -> Self {
        Self {
            root,
            http: reqwest::Client::new(),
        }
    }

    pub fn root(&self) -> &FixtureRoot {
        &self.root
    }

    async fn load(&self, file: &str, endpoint: Endpoint) -> FetchOutcome<Value> {
        let raw = match &self.root {
            FixtureRoot::Http(base) => self.fetch(&format!("{base}/{file}")).await,
            FixtureRoot::Directory(dir) => read_local(&dir.join(file)).await,
        };

        let text = match raw {
            FetchOutcome::Success(text) => text,
            FetchOutcome::NotFound => {
                debug!(fixture = file, "fixture missing");
                return FetchOutcome::NotFound;
            }
            FetchOutcome::Error(err) => {
                warn!(fixture = file, "{err}");
                return FetchOutcome::Error(err);
            }
        };

        match serde_json::from_str::<Value>(&text) {
            Ok(document) => FetchOutcome::from_json(select_section(document, endpoint)),
            Err(err) => {
                warn!(fixture = file, "fixture is not valid JSON: {err}");
                FetchOutcome::Error(DataError::Malformed(err.to_string()))
            }
        }
    }

    async fn fetch(&self, url: &str) -> FetchOutcome<String> {
        let response = match self.http.get(url).send().await {
            Ok(response) => response,
            Err(err) => {
                return FetchOutcome::Error(DataError::Fixture {
                    path: url.to_string(),
                    message: err.to_string(),
                })
            }
        };
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return FetchOutcome::NotFound;
        }
        if !response.status().is_success() {
            return FetchOutcome::Error(DataError::Status {
                endpoint: url.to_string(),
                status: response.status().as_u16(),
            });
        }
        match response.text().await {
            Ok(text) => FetchOutcome::Success(text),
            Err(err) => FetchOutcome::Error(DataError::Fixture {
                path: url.to_string(),
                message: err.to_string(),
            }),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
async fn read_local(path: &std::path::Path) -> FetchOutcome<String> {
    match tokio::fs::read_to_string(path).await {
        Ok(text) => FetchOutcome::Success(text),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => FetchOutcome::NotFound,
        Err(err) => FetchOutcome::Error(DataError::Fixture {
            path: path.display().to_string(),
            message: err.to_string(),
        }),
    }
}

#[cfg(target_arch = "wasm32")]
async fn read_local(path: &std::path::Path) -> FetchOutcome<String> {
    FetchOutcome::Error(DataError::Fixture {
        path: path.display().to_string(),
        message: "directory fixtures are unavailable in the browser".to_string(),
    })
}

/// Pick the endpoint's section out of a multi-response fixture.
fn select_section(document: Value, endpoint: Endpoint) -> Value {
    match document {
        Value::Object(mut map) if map.contains_key(endpoint.path()) => map
            .remove(endpoint.path())
            .unwrap_or(Value::Null),
        other => other,
    }
}

#[async_trait(?Send)]
impl DataSource for FixtureDataSource {
    fn mode(&self) -> DataMode {
        DataMode::Dev
    }

    async fn get_all_graphs(&self) -> FetchOutcome<Value> {
        self.load(ALL_GRAPHS_FIXTURE, Endpoint::AllGraphs).await
    }

    async fn post_data(&self, endpoint: Endpoint, payload: &RequestPayload) -> FetchOutcome<Value> {
        let Some(param) = payload.fixture_param() else {
            return FetchOutcome::Error(DataError::MissingParameter);
        };
        let file = fixture_file_name(param);
        debug!(fixture = %file, endpoint = endpoint.path(), "reading fixture");
        self.load(&file, endpoint).await
    }

    async fn upload_file(&self, upload: FileUpload) -> FetchOutcome<UploadReceipt> {
        if let Err(err) = validate_upload_name(&upload.file_name) {
            return FetchOutcome::Error(err);
        }
        info!(
            file = %upload.file_name,
            bytes = upload.bytes.len(),
            "fixture mode: upload accepted without contacting the service"
        );
        FetchOutcome::Success(UploadReceipt {
            message: Some("accepted in fixture mode".to_string()),
            file_name: Some(upload.file_name),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::fs;

    fn source_with(files: &[(&str, Value)]) -> (tempfile::TempDir, FixtureDataSource) {
        let dir = tempfile::tempdir().unwrap();
        for (name, body) in files {
            fs::write(dir.path().join(name), body.to_string()).unwrap();
        }
        let source = FixtureDataSource::new(FixtureRoot::Directory(dir.path().to_path_buf()));
        (dir, source)
    }

    #[tokio::test]
    async fn participant_payload_reads_stripped_cache_file() {
        let body = json!({"num_of_survey_participants": 3});
        let (_dir, source) = source_with(&[("cache_report.json", body.clone())]);

        let outcome = source
            .post_data(
                Endpoint::SurveyParticipantsPage,
                &RequestPayload::file("report.xlsx"),
            )
            .await;
        assert_eq!(outcome, FetchOutcome::Success(body));
    }

    #[tokio::test]
    async fn sections_are_selected_per_endpoint() {
        let doc = json!({
            "survey-insights-report": {"graphs": []},
            "survey-participants-page": {"num_of_survey_participants": 9}
        });
        let (_dir, source) = source_with(&[("cache_q3.json", doc)]);
        let payload = RequestPayload::file("q3.xlsx");

        let report = source.post_data(Endpoint::SurveyInsightsReport, &payload).await;
        assert_eq!(report, FetchOutcome::Success(json!({"graphs": []})));

        let participants = source
            .post_data(Endpoint::SurveyParticipantsPage, &payload)
            .await;
        assert_eq!(
            participants,
            FetchOutcome::Success(json!({"num_of_survey_participants": 9}))
        );
    }

    #[tokio::test]
    async fn missing_fixture_is_not_found() {
        let (_dir, source) = source_with(&[]);
        let outcome = source.get_detail_screen_data("Unknown question").await;
        assert!(outcome.is_not_found());
    }

    #[tokio::test]
    async fn not_found_sentinel_in_fixture() {
        let (_dir, source) = source_with(&[("cache_Q9.json", json!({"notFound": true}))]);
        assert!(source.get_detail_screen_data("Q9").await.is_not_found());
    }

    #[tokio::test]
    async fn all_graphs_read_db_json() {
        let (_dir, source) = source_with(&[("db.json", json!({"graphs": []}))]);
        assert_eq!(
            source.get_all_graphs().await,
            FetchOutcome::Success(json!({"graphs": []}))
        );
    }

    #[tokio::test]
    async fn invalid_json_is_malformed() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("db.json"), "{not json").unwrap();
        let source = FixtureDataSource::new(FixtureRoot::Directory(dir.path().to_path_buf()));
        assert!(matches!(
            source.get_all_graphs().await,
            FetchOutcome::Error(DataError::Malformed(_))
        ));
    }

    #[tokio::test]
    async fn payload_without_parameter_is_an_error() {
        let (_dir, source) = source_with(&[]);
        let outcome = source
            .post_data(Endpoint::SurveyInsightsReport, &RequestPayload::default())
            .await;
        assert_eq!(outcome, FetchOutcome::Error(DataError::MissingParameter));
    }

    #[tokio::test]
    async fn uploads_are_simulated() {
        let (_dir, source) = source_with(&[]);
        let outcome = source
            .upload_file(FileUpload::new("wave2.xlsx", vec![0u8; 4]).unwrap())
            .await;
        match outcome {
            FetchOutcome::Success(receipt) => {
                assert_eq!(receipt.file_name.as_deref(), Some("wave2.xlsx"))
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
    }
}
