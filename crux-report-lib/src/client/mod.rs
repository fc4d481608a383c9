//! HTTP client for the analysis service
//!
//! The client performs exactly one attempt per call. Failures are classified into a
//! [`TransportError`] whose `Display` is the message shown to the user; nothing is
//! retried or swallowed here.

mod records;
mod transport_error;

pub use records::{HealthStatus, HistoryEntry};
pub use transport_error::TransportError;

use crate::model::AnalysisResponse;
use crate::request::AnalyzeRequest;
use core::time::Duration;
use ohno::IntoAppError;
use serde::de::DeserializeOwned;

const LOG_TARGET: &str = "    client";

/// Default time allowed for one request.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

pub type TransportResult<T> = core::result::Result<T, TransportError>;

#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: String,
}

impl Client {
    /// Create a client for the service rooted at `base_url` (for example
    /// `http://localhost:8000/api`).
    pub fn new(base_url: &str, timeout: Duration) -> crate::Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent("crux-report")
            .timeout(timeout)
            .build()
            .into_app_err("unable to create HTTP client")?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{path}/", self.base_url)
    }

    /// Submit URLs for analysis.
    pub async fn analyze(&self, request: &AnalyzeRequest) -> TransportResult<AnalysisResponse> {
        let url = self.endpoint("analyze");
        log::debug!(target: LOG_TARGET, "POST {url} ({} URL(s), {})", request.urls.len(), request.form_factor);

        let response = self
            .http
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| classify(&url, &e))?;

        decode(&url, response).await
    }

    /// List previously stored analyses.
    pub async fn history(&self) -> TransportResult<Vec<HistoryEntry>> {
        self.get("history").await
    }

    /// Check that the service is up.
    pub async fn health(&self) -> TransportResult<HealthStatus> {
        self.get("health").await
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> TransportResult<T> {
        let url = self.endpoint(path);
        log::debug!(target: LOG_TARGET, "GET {url}");

        let response = self.http.get(&url).send().await.map_err(|e| classify(&url, &e))?;
        decode(&url, response).await
    }
}

fn classify(url: &str, error: &reqwest::Error) -> TransportError {
    let classified = TransportError::from_reqwest(error);
    log::debug!(target: LOG_TARGET, "Request to {url} failed: {error}");
    classified
}

async fn decode<T: DeserializeOwned>(url: &str, response: reqwest::Response) -> TransportResult<T> {
    let status = response.status();
    log::debug!(target: LOG_TARGET, "Response from {url}: {status}");

    if !status.is_success() {
        let detail = response
            .json::<serde_json::Value>()
            .await
            .ok()
            .and_then(|body| body.get("error").and_then(serde_json::Value::as_str).map(str::to_string));
        return Err(TransportError::from_status(status.as_u16(), detail));
    }

    let body = response.text().await.map_err(|e| classify(url, &e))?;
    serde_json::from_str(&body).map_err(|e| {
        log::debug!(target: LOG_TARGET, "Could not decode response from {url}: {e}");
        TransportError::InvalidResponse
    })
}
