use std::path::Path;

use serde::Serialize;
use serde_json::Value;
use tokio_util::sync::CancellationToken;
use url::Url;

use crate::data_uri::read_as_data_uri;
use crate::protocol::{classify_response, ImageAnalysisBody, TextAnalysisBody};
use crate::types::{AnalysisJob, AnalysisReply, ClientError, JobInput};

/// Connection settings for the analysis backend.
#[derive(Debug, Clone)]
pub struct ClientSettings {
    pub base_url: String,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8888".to_string(),
        }
    }
}

#[async_trait::async_trait]
pub trait AnalysisBackend: Send + Sync {
    /// Runs one analysis round trip. Returns `ClientError::Cancelled` as soon
    /// as `cancel` fires, at whichever suspension point the job is in.
    async fn analyze(
        &self,
        job: &AnalysisJob,
        cancel: &CancellationToken,
    ) -> Result<AnalysisReply, ClientError>;
}

#[derive(Debug, Clone)]
pub struct HttpAnalysisClient {
    base_url: Url,
    http: reqwest::Client,
}

impl HttpAnalysisClient {
    pub fn new(settings: ClientSettings) -> Result<Self, ClientError> {
        let base_url = Url::parse(&settings.base_url)
            .map_err(|err| ClientError::InvalidBaseUrl(err.to_string()))?;
        // No timeouts: a hung request holds its slot until a newer submission
        // cancels it.
        let http = reqwest::Client::builder()
            .build()
            .map_err(|err| ClientError::Network(err.to_string()))?;
        Ok(Self { base_url, http })
    }

    fn endpoint(&self, path: &str) -> Result<Url, ClientError> {
        self.base_url
            .join(path)
            .map_err(|err| ClientError::InvalidBaseUrl(err.to_string()))
    }

    async fn post_json<B: Serialize + Sync>(
        &self,
        endpoint: Url,
        body: &B,
        cancel: &CancellationToken,
    ) -> Result<AnalysisReply, ClientError> {
        let response = tokio::select! {
            _ = cancel.cancelled() => return Err(ClientError::Cancelled),
            result = self.http.post(endpoint).json(body).send() => {
                result.map_err(|err| ClientError::Network(err.to_string()))?
            }
        };

        // The HTTP status is not consulted: the body alone decides what gets
        // displayed, and a non-JSON body of any status counts as unreachable.
        let value = tokio::select! {
            _ = cancel.cancelled() => return Err(ClientError::Cancelled),
            result = response.json::<Value>() => {
                result.map_err(|err| ClientError::Network(err.to_string()))?
            }
        };

        Ok(classify_response(&value))
    }
}

#[async_trait::async_trait]
impl AnalysisBackend for HttpAnalysisClient {
    async fn analyze(
        &self,
        job: &AnalysisJob,
        cancel: &CancellationToken,
    ) -> Result<AnalysisReply, ClientError> {
        match &job.input {
            JobInput::Text(text) => {
                let body = TextAnalysisBody {
                    text,
                    url: &job.reference_url,
                    model: &job.model,
                };
                self.post_json(self.endpoint("/api/analyze")?, &body, cancel)
                    .await
            }
            JobInput::ImageFile(path) => {
                // The file read must finish before the network call is issued.
                let image = tokio::select! {
                    _ = cancel.cancelled() => return Err(ClientError::Cancelled),
                    result = read_as_data_uri(Path::new(path)) => result?,
                };
                let body = ImageAnalysisBody {
                    image: &image,
                    url: &job.reference_url,
                    model: &job.model,
                };
                self.post_json(self.endpoint("/api/analyze_image")?, &body, cancel)
                    .await
            }
        }
    }
}
