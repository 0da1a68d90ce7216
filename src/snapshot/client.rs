//! Client for the remote analysis service
//!
//! Two operations: submit a statement for analysis, and restore the most
//! recent analysis for the configured business. One request per user action,
//! no retry, no timeout; a failure surfaces once and prior state is kept.

use chrono::Utc;
use serde::Deserialize;
use thiserror::Error;

use super::data::{AnalysisReport, AnalysisResponse};

/// Default base address of the analysis service
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Environment variable selecting the analysis service base address
pub const BASE_URL_ENV: &str = "SME_API_URL";

/// Failures surfaced by the analysis service boundary
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// Network/transport error while talking to the service
    #[error("could not reach analysis service: {0}")]
    UploadFailure(#[from] reqwest::Error),

    /// The service answered with a non-success status; `detail` is surfaced
    /// to the user verbatim
    #[error("analysis rejected: {detail}")]
    AnalysisRejected { detail: String },
}

/// Where the analysis service lives and which business it is scoped to
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub base_url: String,
    pub business_id: u64,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            business_id: 1,
        }
    }
}

impl ServiceConfig {
    /// Read the base address from `SME_API_URL`, falling back to localhost
    pub fn from_env() -> Self {
        let base_url =
            std::env::var(BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self {
            base_url,
            ..Self::default()
        }
    }

    fn analyze_url(&self) -> String {
        format!("{}/smes/{}/analyze", self.base_url, self.business_id)
    }

    fn latest_url(&self) -> String {
        format!("{}/smes/{}/latest-analysis", self.base_url, self.business_id)
    }
}

/// Error envelope the service uses on HTTP-level failures
#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: String,
}

/// Async client for the analysis service
pub struct AnalysisClient {
    http: reqwest::Client,
    config: ServiceConfig,
}

impl AnalysisClient {
    pub fn new(config: ServiceConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// Restore the most recent analysis, if any
    ///
    /// `"no_data"` is the normal first-run answer and maps to `Ok(None)`.
    pub async fn fetch_latest(&self) -> Result<Option<AnalysisReport>, AnalysisError> {
        let url = self.config.latest_url();
        log::debug!("fetching latest analysis from {url}");

        let response = self.http.get(&url).send().await?;
        let response = Self::into_envelope(response).await?;

        match response.status.as_str() {
            "no_data" => Ok(None),
            _ => Self::into_report(response).map(Some),
        }
    }

    /// Submit one user-selected statement document for analysis
    pub async fn upload_statement(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<AnalysisReport, AnalysisError> {
        let url = self.config.analyze_url();
        log::debug!("submitting {file_name} ({} bytes) to {url}", bytes.len());

        let part = reqwest::multipart::Part::bytes(bytes).file_name(file_name.to_string());
        let form = reqwest::multipart::Form::new().part("file", part);

        let response = self.http.post(&url).multipart(form).send().await?;
        let response = Self::into_envelope(response).await?;
        Self::into_report(response)
    }

    /// Map an HTTP response to the service envelope, turning HTTP-level
    /// errors into rejections carrying the service's detail message
    async fn into_envelope(
        response: reqwest::Response,
    ) -> Result<AnalysisResponse, AnalysisError> {
        let http_status = response.status();
        if !http_status.is_success() {
            let detail = response
                .json::<ErrorBody>()
                .await
                .map(|body| body.detail)
                .unwrap_or_else(|_| format!("service returned {http_status}"));
            return Err(AnalysisError::AnalysisRejected { detail });
        }
        Ok(response.json::<AnalysisResponse>().await?)
    }

    /// Convert a success envelope into a report; anything else is a rejection
    fn into_report(response: AnalysisResponse) -> Result<AnalysisReport, AnalysisError> {
        if response.status != "success" {
            let detail = response
                .detail
                .unwrap_or_else(|| format!("unexpected status '{}'", response.status));
            return Err(AnalysisError::AnalysisRejected { detail });
        }

        match (response.metrics, response.ai_insights) {
            (Some(metrics), Some(insights)) => Ok(AnalysisReport {
                metrics,
                insights,
                fetched_at: Utc::now(),
            }),
            _ => Err(AnalysisError::AnalysisRejected {
                detail: "success response is missing metrics or insights".to_string(),
            }),
        }
    }
}
