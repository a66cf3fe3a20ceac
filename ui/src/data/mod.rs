//! Data-fetch adapter. The page containers talk to a `DataSource` obtained
//! from context; which implementation sits behind it is decided once at
//! startup from `AppConfig`.

use std::ops::Deref;
use std::rc::Rc;

use async_trait::async_trait;
use serde_json::Value;

use crate::config::{AppConfig, DataMode};

mod fixture;
mod outcome;
mod remote;
mod request;

pub use fixture::FixtureDataSource;
pub use outcome::{DataError, FetchOutcome};
pub use remote::RemoteDataSource;
pub use request::{
    fixture_file_name, sanitize_param, validate_upload_name, Endpoint, FileUpload,
    RequestPayload, UploadReceipt, ALL_GRAPHS_FIXTURE,
};

#[async_trait(?Send)]
pub trait DataSource {
    fn mode(&self) -> DataMode;

    /// Overview graphs (`GET /get-all-graphs`).
    async fn get_all_graphs(&self) -> FetchOutcome<Value>;

    /// JSON POST to one of the survey endpoints.
    async fn post_data(&self, endpoint: Endpoint, payload: &RequestPayload) -> FetchOutcome<Value>;

    /// Question breakdown for the detail screen.
    async fn get_detail_screen_data(&self, column_name: &str) -> FetchOutcome<Value> {
        self.post_data(
            Endpoint::QuestionPlotDetails,
            &RequestPayload::column(column_name),
        )
        .await
    }

    async fn upload_file(&self, upload: FileUpload) -> FetchOutcome<UploadReceipt>;
}

/// Cloneable handle placed in the Dioxus context.
#[derive(Clone)]
pub struct SharedDataSource(Rc<dyn DataSource>);

impl SharedDataSource {
    pub fn new(source: impl DataSource + 'static) -> Self {
        Self(Rc::new(source))
    }
}

impl Deref for SharedDataSource {
    type Target = dyn DataSource;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

/// Build the data source selected by `config.mode`.
pub fn connect(config: &AppConfig) -> SharedDataSource {
    tracing::info!(mode = config.mode.as_str(), "selecting survey data source");
    match config.mode {
        DataMode::Prod => SharedDataSource::new(RemoteDataSource::new(&config.api_base_url)),
        DataMode::Dev => SharedDataSource::new(FixtureDataSource::new(config.fixture_root.clone())),
    }
}
