//! Azure Blob Storage listing for the survey workbook container.
//!
//! Only the pieces the dashboard needs are implemented: credential
//! resolution, Shared Key request signing and the paginated `List Blobs`
//! call. The filtering helpers are platform-agnostic and compile on every
//! target; the network client is gated behind the `server`/`direct`
//! features.

use std::collections::BTreeMap;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use hmac::{Hmac, Mac};
use once_cell::sync::Lazy;
use regex::Regex;
use sha2::Sha256;
use thiserror::Error;

/// Container holding uploaded survey workbooks.
pub const CONTAINER: &str = "data";

/// Extension of the workbooks surfaced in the navigation drawer.
pub const WORKBOOK_EXTENSION: &str = ".xlsx";

pub const ENV_ACCOUNT_NAME: &str = "AZURE_STORAGE_ACCOUNT_NAME";
pub const ENV_ACCOUNT_KEY: &str = "AZURE_STORAGE_ACCOUNT_KEY";
pub const ENV_CONNECTION_STRING: &str = "AZURE_STORAGE_CONNECTION_STRING";

const API_VERSION: &str = "2021-08-06";
const DEFAULT_ENDPOINT_SUFFIX: &str = "core.windows.net";

#[derive(Debug, Error)]
pub enum BlobError {
    #[error(
        "missing storage credentials (set AZURE_STORAGE_CONNECTION_STRING or AZURE_STORAGE_ACCOUNT_NAME/AZURE_STORAGE_ACCOUNT_KEY)"
    )]
    MissingCredentials,
    #[error("connection string is missing `{0}`")]
    IncompleteConnectionString(&'static str),
    #[error("account key is not valid base64")]
    InvalidKey,
    #[error("storage request failed: {0}")]
    Transport(String),
    #[error("storage responded with status {0}")]
    Status(u16),
}

/// Keep workbook entries only, reduced to their basenames, in listing order.
pub fn filter_file_names<I, S>(names: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    names
        .into_iter()
        .filter(|name| name.as_ref().ends_with(WORKBOOK_EXTENSION))
        .map(|name| basename(name.as_ref()).to_string())
        .collect()
}

fn basename(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

/// Resolved account credentials and endpoint.
#[derive(Clone, PartialEq, Eq)]
pub struct StorageCredentials {
    pub account: String,
    key: Vec<u8>,
    pub blob_endpoint: String,
}

impl std::fmt::Debug for StorageCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StorageCredentials")
            .field("account", &self.account)
            .field("key", &"<redacted>")
            .field("blob_endpoint", &self.blob_endpoint)
            .finish()
    }
}

impl StorageCredentials {
    pub fn new(account: &str, encoded_key: &str) -> Result<Self, BlobError> {
        let key = STANDARD
            .decode(encoded_key.trim())
            .map_err(|_| BlobError::InvalidKey)?;
        Ok(Self {
            account: account.to_string(),
            key,
            blob_endpoint: format!("https://{account}.blob.{DEFAULT_ENDPOINT_SUFFIX}"),
        })
    }

    /// Parse an Azure connection string
    /// (`DefaultEndpointsProtocol=https;AccountName=..;AccountKey=..;EndpointSuffix=..`).
    pub fn from_connection_string(raw: &str) -> Result<Self, BlobError> {
        let parts: BTreeMap<&str, &str> = raw
            .split(';')
            .filter_map(|pair| pair.split_once('='))
            .map(|(k, v)| (k.trim(), v.trim()))
            .collect();

        let account = parts
            .get("AccountName")
            .ok_or(BlobError::IncompleteConnectionString("AccountName"))?;
        let key = parts
            .get("AccountKey")
            .ok_or(BlobError::IncompleteConnectionString("AccountKey"))?;

        let mut creds = Self::new(account, key)?;
        if let Some(endpoint) = parts.get("BlobEndpoint") {
            creds.blob_endpoint = endpoint.trim_end_matches('/').to_string();
        } else {
            let protocol = parts.get("DefaultEndpointsProtocol").unwrap_or(&"https");
            let suffix = parts.get("EndpointSuffix").unwrap_or(&DEFAULT_ENDPOINT_SUFFIX);
            creds.blob_endpoint = format!("{protocol}://{account}.blob.{suffix}");
        }
        Ok(creds)
    }

    /// Resolve credentials through `lookup` (normally the process environment).
    /// The connection string wins over the name/key pair.
    pub fn resolve(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, BlobError> {
        let non_empty = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        if let Some(conn) = non_empty(ENV_CONNECTION_STRING) {
            return Self::from_connection_string(&conn);
        }
        match (non_empty(ENV_ACCOUNT_NAME), non_empty(ENV_ACCOUNT_KEY)) {
            (Some(account), Some(key)) => Self::new(&account, &key),
            _ => Err(BlobError::MissingCredentials),
        }
    }

    pub fn from_env() -> Result<Self, BlobError> {
        Self::resolve(|name| std::env::var(name).ok())
    }

    /// `SharedKey` signature over a canonical string-to-sign.
    pub fn sign(&self, string_to_sign: &str) -> String {
        let mut mac = Hmac::<Sha256>::new_from_slice(&self.key)
            .expect("HMAC accepts keys of any length");
        mac.update(string_to_sign.as_bytes());
        STANDARD.encode(mac.finalize().into_bytes())
    }

    pub fn authorization(&self, string_to_sign: &str) -> String {
        format!("SharedKey {}:{}", self.account, self.sign(string_to_sign))
    }
}

/// Canonical string-to-sign for a body-less GET against `container`.
pub fn list_string_to_sign(
    account: &str,
    container: &str,
    date: &str,
    query: &[(&str, &str)],
) -> String {
    let mut params: Vec<(String, &str)> = query
        .iter()
        .map(|(k, v)| (k.to_ascii_lowercase(), *v))
        .collect();
    params.sort();

    let mut resource = format!("/{account}/{container}");
    for (name, value) in params {
        resource.push('\n');
        resource.push_str(&name);
        resource.push(':');
        resource.push_str(value);
    }

    // VERB, then 11 standard headers (all empty for this request).
    format!(
        "GET\n\n\n\n\n\n\n\n\n\n\n\nx-ms-date:{date}\nx-ms-version:{API_VERSION}\n{resource}"
    )
}

/// One page of a `List Blobs` response.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ListPage {
    pub names: Vec<String>,
    pub next_marker: Option<String>,
}

/// Extract blob names and the continuation marker from the XML body.
///
/// Names flagged `Encoded="true"` (invalid XML characters) arrive
/// percent-encoded and are decoded here.
pub fn parse_list_page(xml: &str) -> ListPage {
    static NAME: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r#"<Blob>\s*<Name(?:\s+Encoded="(true|false)")?\s*>([^<]*)</Name>"#)
            .expect("static pattern")
    });
    static MARKER: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"<NextMarker>([^<]+)</NextMarker>").expect("static pattern"));

    let names = NAME
        .captures_iter(xml)
        .map(|caps| {
            let name = unescape_xml(&caps[2]);
            match caps.get(1).map(|flag| flag.as_str()) {
                Some("true") => percent_decode(&name),
                _ => name,
            }
        })
        .collect();
    let next_marker = MARKER
        .captures(xml)
        .map(|caps| unescape_xml(&caps[1]));

    ListPage { names, next_marker }
}

/// Resolve the predefined entities and numeric character references.
fn unescape_xml(raw: &str) -> String {
    static ENTITY: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"&(?:#x([0-9A-Fa-f]+)|#([0-9]+)|(lt|gt|quot|apos|amp));")
            .expect("static pattern")
    });

    ENTITY
        .replace_all(raw, |caps: &regex::Captures| {
            let code = match (caps.get(1), caps.get(2)) {
                (Some(hex), _) => u32::from_str_radix(hex.as_str(), 16).ok(),
                (_, Some(dec)) => dec.as_str().parse::<u32>().ok(),
                _ => {
                    return match &caps[3] {
                        "lt" => "<",
                        "gt" => ">",
                        "quot" => "\"",
                        "apos" => "'",
                        _ => "&",
                    }
                    .to_string()
                }
            };
            code.and_then(char::from_u32)
                .map(String::from)
                .unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

fn percent_decode(raw: &str) -> String {
    let bytes = raw.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' && i + 2 < bytes.len() {
            let hex = std::str::from_utf8(&bytes[i + 1..i + 3]).ok();
            if let Some(byte) = hex.and_then(|h| u8::from_str_radix(h, 16).ok()) {
                out.push(byte);
                i += 3;
                continue;
            }
        }
        out.push(bytes[i]);
        i += 1;
    }
    String::from_utf8_lossy(&out).into_owned()
}

#[cfg(any(feature = "server", feature = "direct"))]
pub use client::{list_from_env, BlobContainerClient};

#[cfg(any(feature = "server", feature = "direct"))]
mod client {
    use time::{macros::format_description, OffsetDateTime};
    use tracing::{debug, error, info};

    use super::*;

    /// Thin `List Blobs` client for one container.
    pub struct BlobContainerClient {
        http: reqwest::Client,
        creds: StorageCredentials,
        container: String,
    }

    impl BlobContainerClient {
        pub fn new(creds: StorageCredentials, container: impl Into<String>) -> Self {
            Self {
                http: reqwest::Client::new(),
                creds,
                container: container.into(),
            }
        }

        /// All blob names in the container, following continuation markers.
        pub async fn list_names(&self) -> Result<Vec<String>, BlobError> {
            let mut names = Vec::new();
            let mut marker: Option<String> = None;

            loop {
                let page = self.list_page(marker.as_deref()).await?;
                debug!(count = page.names.len(), "blob page received");
                names.extend(page.names);
                match page.next_marker {
                    Some(next) => marker = Some(next),
                    None => break,
                }
            }

            Ok(names)
        }

        async fn list_page(&self, marker: Option<&str>) -> Result<ListPage, BlobError> {
            let date = http_date(OffsetDateTime::now_utc());
            let mut query = vec![("restype", "container"), ("comp", "list")];
            if let Some(marker) = marker {
                query.push(("marker", marker));
            }

            let to_sign = list_string_to_sign(&self.creds.account, &self.container, &date, &query);
            let url = format!("{}/{}", self.creds.blob_endpoint, self.container);

            let response = self
                .http
                .get(url)
                .query(&query)
                .header("x-ms-date", &date)
                .header("x-ms-version", API_VERSION)
                .header("Authorization", self.creds.authorization(&to_sign))
                .send()
                .await
                .map_err(|err| BlobError::Transport(err.to_string()))?;

            let status = response.status();
            if !status.is_success() {
                return Err(BlobError::Status(status.as_u16()));
            }

            let body = response
                .text()
                .await
                .map_err(|err| BlobError::Transport(err.to_string()))?;
            Ok(parse_list_page(&body))
        }
    }

    fn http_date(now: OffsetDateTime) -> String {
        now.format(&format_description!(
            "[weekday repr:short], [day] [month repr:short] [year] [hour]:[minute]:[second] GMT"
        ))
        .unwrap_or_default()
    }

    /// Workbook names from the `data` container using environment credentials.
    /// Any failure is logged and yields an empty list.
    pub async fn list_from_env() -> Vec<String> {
        let creds = match StorageCredentials::from_env() {
            Ok(creds) => creds,
            Err(err) => {
                error!("blob listing unavailable: {err}");
                return Vec::new();
            }
        };

        let client = BlobContainerClient::new(creds, CONTAINER);
        match client.list_names().await {
            Ok(names) => {
                let files = filter_file_names(&names);
                info!(total = names.len(), workbooks = files.len(), "listed survey container");
                files
            }
            Err(err) => {
                error!("blob listing failed: {err}");
                Vec::new()
            }
        }
    }

}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    // "secret-key" in base64.
    const KEY: &str = "c2VjcmV0LWtleQ==";

    #[test]
    fn filters_workbooks_to_basenames_in_order() {
        let names = ["a/b/f1.xlsx", "a/f2.csv", "f3.xlsx"];
        assert_eq!(filter_file_names(names), vec!["f1.xlsx", "f3.xlsx"]);
    }

    #[test]
    fn filter_handles_empty_and_lookalike_names() {
        assert!(filter_file_names(Vec::<String>::new()).is_empty());
        let names = ["report.xlsx.bak", "archive/xlsx", "nested/deep/q.xlsx"];
        assert_eq!(filter_file_names(names), vec!["q.xlsx"]);
    }

    #[test]
    fn connection_string_wins_over_name_and_key() {
        let creds = StorageCredentials::resolve(|name| match name {
            ENV_CONNECTION_STRING => Some(format!(
                "DefaultEndpointsProtocol=https;AccountName=fromconn;AccountKey={KEY};EndpointSuffix=core.windows.net"
            )),
            ENV_ACCOUNT_NAME => Some("fromenv".into()),
            ENV_ACCOUNT_KEY => Some(KEY.into()),
            _ => None,
        })
        .unwrap();

        assert_eq!(creds.account, "fromconn");
        assert_eq!(creds.blob_endpoint, "https://fromconn.blob.core.windows.net");
    }

    #[test]
    fn explicit_blob_endpoint_is_respected() {
        let creds = StorageCredentials::from_connection_string(&format!(
            "AccountName=devstoreaccount1;AccountKey={KEY};BlobEndpoint=http://127.0.0.1:10000/devstoreaccount1/"
        ))
        .unwrap();
        assert_eq!(creds.blob_endpoint, "http://127.0.0.1:10000/devstoreaccount1");
    }

    #[test]
    fn missing_credentials_are_reported() {
        let err = StorageCredentials::resolve(|name| match name {
            ENV_ACCOUNT_NAME => Some("only-name".into()),
            ENV_CONNECTION_STRING => Some("   ".into()),
            _ => None,
        })
        .unwrap_err();
        assert!(matches!(err, BlobError::MissingCredentials));

        let err = StorageCredentials::from_connection_string("AccountName=x").unwrap_err();
        assert!(matches!(err, BlobError::IncompleteConnectionString("AccountKey")));
    }

    #[test]
    fn invalid_key_is_rejected() {
        let err = StorageCredentials::new("acct", "not base64!!").unwrap_err();
        assert!(matches!(err, BlobError::InvalidKey));
    }

    #[test]
    fn debug_output_redacts_key() {
        let creds = StorageCredentials::new("acct", KEY).unwrap();
        let printed = format!("{creds:?}");
        assert!(printed.contains("<redacted>"));
        assert!(!printed.contains("secret"));
    }

    #[test]
    fn string_to_sign_canonicalizes_query() {
        let to_sign = list_string_to_sign(
            "acct",
            CONTAINER,
            "Sun, 11 Oct 2009 21:49:13 GMT",
            &[("restype", "container"), ("comp", "list"), ("marker", "m1")],
        );

        let expected = "GET\n\n\n\n\n\n\n\n\n\n\n\n\
            x-ms-date:Sun, 11 Oct 2009 21:49:13 GMT\n\
            x-ms-version:2021-08-06\n\
            /acct/data\ncomp:list\nmarker:m1\nrestype:container";
        assert_eq!(to_sign, expected);
    }

    #[test]
    fn signature_is_deterministic_sha256_mac() {
        let creds = StorageCredentials::new("acct", KEY).unwrap();
        let first = creds.sign("payload");
        assert_eq!(first, creds.sign("payload"));
        assert_ne!(first, creds.sign("other payload"));
        // 32-byte digest in padded base64.
        assert_eq!(first.len(), 44);
        assert!(creds.authorization("payload").starts_with("SharedKey acct:"));
    }

    #[test]
    fn parses_names_and_marker() {
        let xml = r#"<?xml version="1.0" encoding="utf-8"?>
<EnumerationResults ServiceEndpoint="https://acct.blob.core.windows.net/" ContainerName="data">
  <Blobs>
    <Blob><Name>2024/q1 &amp; q2.xlsx</Name><Properties /></Blob>
    <Blob>
      <Name>notes.csv</Name>
    </Blob>
  </Blobs>
  <NextMarker>2!88!MDAwMDE</NextMarker>
</EnumerationResults>"#;

        let page = parse_list_page(xml);
        assert_eq!(page.names, vec!["2024/q1 & q2.xlsx", "notes.csv"]);
        assert_eq!(page.next_marker.as_deref(), Some("2!88!MDAwMDE"));
    }

    #[test]
    fn encoded_names_and_character_references() {
        let xml = r#"<EnumerationResults><Blobs>
    <Blob><Name Encoded="true">wave%203%01.xlsx</Name></Blob>
    <Blob><Name Encoded="false">caf&#xE9; &#38; bar.xlsx</Name></Blob>
    <Blob><Name>bad&#xD800;.xlsx</Name></Blob>
  </Blobs></EnumerationResults>"#;

        let page = parse_list_page(xml);
        assert_eq!(
            page.names,
            vec!["wave 3\u{1}.xlsx", "café & bar.xlsx", "bad&#xD800;.xlsx"]
        );
    }

    #[test]
    fn empty_marker_ends_pagination() {
        let page = parse_list_page("<EnumerationResults><Blobs /><NextMarker /></EnumerationResults>");
        assert_eq!(page, ListPage::default());
    }
}
