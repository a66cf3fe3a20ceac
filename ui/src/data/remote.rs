use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use serde_json::Value;
use tracing::{debug, warn};

use super::{DataError, DataSource, Endpoint, FetchOutcome, FileUpload, RequestPayload, UploadReceipt};
use crate::config::DataMode;

#[cfg(not(target_arch = "wasm32"))]
const REQUEST_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(60);

/// Talks to the analytics service over HTTPS.
#[derive(Debug, Clone)]
pub struct RemoteDataSource {
    base_url: String,
    http: reqwest::Client,
}

impl RemoteDataSource {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: build_client(),
        }
    }

    pub fn url(&self, endpoint: Endpoint) -> String {
        format!("{}/{}", self.base_url, endpoint.path())
    }

    async fn read_body(
        endpoint: Endpoint,
        sent: Result<reqwest::Response, reqwest::Error>,
    ) -> Result<reqwest::Response, FetchOutcome<Value>> {
        let response = match sent {
            Ok(response) => response,
            Err(err) => {
                warn!(endpoint = endpoint.path(), "request failed: {err}");
                return Err(FetchOutcome::Error(DataError::Transport {
                    endpoint: endpoint.path().to_string(),
                    message: err.to_string(),
                }));
            }
        };

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            debug!(endpoint = endpoint.path(), "resource not found");
            return Err(FetchOutcome::NotFound);
        }
        if !status.is_success() {
            warn!(endpoint = endpoint.path(), status = status.as_u16(), "non-success response");
            return Err(FetchOutcome::Error(DataError::Status {
                endpoint: endpoint.path().to_string(),
                status: status.as_u16(),
            }));
        }
        Ok(response)
    }

    async fn json(
        endpoint: Endpoint,
        sent: Result<reqwest::Response, reqwest::Error>,
    ) -> FetchOutcome<Value> {
        let response = match Self::read_body(endpoint, sent).await {
            Ok(response) => response,
            Err(outcome) => return outcome,
        };
        match response.json::<Value>().await {
            Ok(value) => FetchOutcome::from_json(value),
            Err(err) => {
                warn!(endpoint = endpoint.path(), "undecodable body: {err}");
                FetchOutcome::Error(DataError::Malformed(err.to_string()))
            }
        }
    }
}

fn build_client() -> reqwest::Client {
    #[cfg(not(target_arch = "wasm32"))]
    {
        reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|err| {
                warn!("falling back to default HTTP client: {err}");
                reqwest::Client::new()
            })
    }

    #[cfg(target_arch = "wasm32")]
    {
        reqwest::Client::new()
    }
}

#[async_trait(?Send)]
impl DataSource for RemoteDataSource {
    fn mode(&self) -> DataMode {
        DataMode::Prod
    }

    async fn get_all_graphs(&self) -> FetchOutcome<Value> {
        let endpoint = Endpoint::AllGraphs;
        debug!(url = %self.url(endpoint), "GET");
        let sent = self.http.get(self.url(endpoint)).send().await;
        Self::json(endpoint, sent).await
    }

    async fn post_data(&self, endpoint: Endpoint, payload: &RequestPayload) -> FetchOutcome<Value> {
        debug!(url = %self.url(endpoint), ?payload, "POST");
        let sent = self
            .http
            .post(self.url(endpoint))
            .json(payload)
            .send()
            .await;
        Self::json(endpoint, sent).await
    }

    async fn upload_file(&self, upload: FileUpload) -> FetchOutcome<UploadReceipt> {
        let endpoint = Endpoint::UploadFile;
        if let Err(err) = super::validate_upload_name(&upload.file_name) {
            return FetchOutcome::Error(err);
        }

        debug!(file = %upload.file_name, bytes = upload.bytes.len(), "uploading workbook");
        let part = Part::bytes(upload.bytes).file_name(upload.file_name.clone());
        let form = Form::new().part("file", part);
        let sent = self.http.post(self.url(endpoint)).multipart(form).send().await;

        let response = match Self::read_body(endpoint, sent).await {
            Ok(response) => response,
            Err(outcome) => return outcome.map(|_| UploadReceipt::default()),
        };

        let body = match response.text().await {
            Ok(body) => body,
            Err(err) => return FetchOutcome::Error(DataError::Malformed(err.to_string())),
        };
        if body.trim().is_empty() {
            return FetchOutcome::Success(UploadReceipt {
                message: None,
                file_name: Some(upload.file_name),
            });
        }
        match serde_json::from_str::<UploadReceipt>(&body) {
            Ok(mut receipt) => {
                receipt.file_name.get_or_insert(upload.file_name);
                FetchOutcome::Success(receipt)
            }
            Err(err) => FetchOutcome::Error(DataError::Malformed(err.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    /// Serve one canned response on a loopback port. The handle yields the
    /// request head that was received.
    async fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());
        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let request = read_request(&mut socket).await;
            let response = format!(
                "HTTP/1.1 {status}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
            request
        });
        (base_url, handle)
    }

    /// Read the head and the whole body (content-length or chunked).
    async fn read_request(socket: &mut tokio::net::TcpStream) -> String {
        let mut raw = Vec::new();
        let mut chunk = [0u8; 4096];
        loop {
            let read = socket.read(&mut chunk).await.unwrap();
            if read == 0 {
                break;
            }
            raw.extend_from_slice(&chunk[..read]);
            let text = String::from_utf8_lossy(&raw).to_string();
            let Some(head_end) = text.find("\r\n\r\n") else {
                continue;
            };
            let head = text[..head_end].to_ascii_lowercase();
            let body_len = raw.len() - (head_end + 4);
            let length = head
                .lines()
                .find_map(|line| line.strip_prefix("content-length:"))
                .and_then(|value| value.trim().parse::<usize>().ok());
            let complete = match length {
                Some(length) => body_len >= length,
                None if head.contains("transfer-encoding: chunked") => raw.ends_with(b"0\r\n\r\n"),
                None => true,
            };
            if complete {
                return text[..head_end].to_string();
            }
        }
        String::from_utf8_lossy(&raw).to_string()
    }

    #[tokio::test]
    async fn missing_resource_is_not_found() {
        let (base_url, server) = serve_once("404 Not Found", "").await;
        let outcome = RemoteDataSource::new(&base_url)
            .post_data(Endpoint::SurveyInsightsReport, &RequestPayload::file("wave2.xlsx"))
            .await;
        assert_eq!(outcome, FetchOutcome::NotFound);
        assert!(server
            .await
            .unwrap()
            .starts_with("POST /survey-insights-report HTTP/1.1"));
    }

    #[tokio::test]
    async fn server_error_keeps_status() {
        let (base_url, server) = serve_once("503 Service Unavailable", "").await;
        let outcome = RemoteDataSource::new(&base_url).get_all_graphs().await;
        assert_eq!(
            outcome,
            FetchOutcome::Error(DataError::Status {
                endpoint: "get-all-graphs".into(),
                status: 503,
            })
        );
        assert!(server.await.unwrap().starts_with("GET /get-all-graphs HTTP/1.1"));
    }

    #[tokio::test]
    async fn not_found_sentinel_in_ok_body() {
        let (base_url, _server) = serve_once("200 OK", r#"{"notFound": true}"#).await;
        let outcome = RemoteDataSource::new(&base_url)
            .get_detail_screen_data("Q2")
            .await;
        assert_eq!(outcome, FetchOutcome::NotFound);
    }

    #[tokio::test]
    async fn ok_body_is_returned() {
        let (base_url, _server) = serve_once("200 OK", r#"{"graphs": []}"#).await;
        let outcome = RemoteDataSource::new(&base_url).get_all_graphs().await;
        assert_eq!(outcome, FetchOutcome::Success(serde_json::json!({"graphs": []})));
    }

    #[tokio::test]
    async fn undecodable_body_is_malformed() {
        let (base_url, _server) = serve_once("200 OK", "<html>").await;
        let outcome = RemoteDataSource::new(&base_url).get_all_graphs().await;
        assert!(matches!(outcome, FetchOutcome::Error(DataError::Malformed(_))));
    }

    #[tokio::test]
    async fn upload_receipt_is_parsed() {
        let (base_url, server) = serve_once("200 OK", r#"{"message": "stored"}"#).await;
        let upload = FileUpload::new("wave2.xlsx", vec![1, 2, 3]).unwrap();
        let outcome = RemoteDataSource::new(&base_url).upload_file(upload).await;
        assert_eq!(
            outcome,
            FetchOutcome::Success(UploadReceipt {
                message: Some("stored".into()),
                file_name: Some("wave2.xlsx".into()),
            })
        );
        let head = server.await.unwrap().to_ascii_lowercase();
        assert!(head.starts_with("post /upload-file http/1.1"));
        assert!(head.contains("content-type: multipart/form-data"));
    }

    #[tokio::test]
    async fn empty_upload_response_is_success() {
        let (base_url, _server) = serve_once("200 OK", "").await;
        let upload = FileUpload::new("wave2.xlsx", vec![1]).unwrap();
        let outcome = RemoteDataSource::new(&base_url).upload_file(upload).await;
        assert_eq!(
            outcome,
            FetchOutcome::Success(UploadReceipt {
                message: None,
                file_name: Some("wave2.xlsx".into()),
            })
        );
    }

    #[test]
    fn urls_join_base_and_endpoint() {
        let source = RemoteDataSource::new("https://analytics.example.org/");
        assert_eq!(
            source.url(Endpoint::SurveyInsightsReport),
            "https://analytics.example.org/survey-insights-report"
        );
        assert_eq!(
            source.url(Endpoint::QuestionPlotDetails),
            "https://analytics.example.org/get_question_plot_details"
        );
    }

    #[tokio::test]
    async fn unsupported_upload_is_rejected_before_sending() {
        let source = RemoteDataSource::new("http://127.0.0.1:9");
        let outcome = source
            .upload_file(FileUpload {
                file_name: "notes.csv".into(),
                bytes: vec![],
            })
            .await;
        assert!(matches!(
            outcome,
            FetchOutcome::Error(DataError::UnsupportedUpload(_))
        ));
    }

    #[tokio::test]
    async fn unreachable_service_is_a_transport_error() {
        // Port 9 (discard) is closed on test machines; the connect fails fast.
        let source = RemoteDataSource::new("http://127.0.0.1:9");
        let outcome = source.get_all_graphs().await;
        assert!(matches!(
            outcome,
            FetchOutcome::Error(DataError::Transport { .. })
        ));
    }
}
