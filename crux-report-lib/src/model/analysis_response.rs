use super::{SummaryStat, UrlResult};
use crate::Result;
use camino::Utf8Path;
use ohno::IntoAppError;
use serde::{Deserialize, Serialize};
use std::fs;

/// The full result of one analysis submission.
///
/// A response is replaced wholesale by the next submission and is never mutated;
/// every derived view is recomputed from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResponse {
    pub session_id: String,

    #[serde(default)]
    pub results: Vec<UrlResult>,

    /// Present only when more than one URL was analyzed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<Vec<SummaryStat>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary_error: Option<String>,
}

impl AnalysisResponse {
    #[must_use]
    pub fn new(session_id: impl Into<String>, results: Vec<UrlResult>) -> Self {
        Self {
            session_id: session_id.into(),
            results,
            summary: None,
            note: None,
            summary_error: None,
        }
    }

    /// Decode a response from its JSON wire form.
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).into_app_err("decoding analysis response")
    }

    /// Load a previously saved response from disk.
    pub fn load(path: &Utf8Path) -> Result<Self> {
        let text = fs::read_to_string(path).into_app_err_with(|| format!("reading analysis response '{path}'"))?;
        serde_json::from_str(&text).into_app_err_with(|| format!("parsing analysis response '{path}'"))
    }

    /// Save the response as pretty-printed JSON.
    pub fn save(&self, path: &Utf8Path) -> Result<()> {
        let text = serde_json::to_string_pretty(self).into_app_err("encoding analysis response")?;
        fs::write(path, text).into_app_err_with(|| format!("writing analysis response '{path}'"))
    }

    /// The upstream per-metric statistics, empty when the service sent none.
    #[must_use]
    pub fn summary_stats(&self) -> &[SummaryStat] {
        self.summary.as_deref().unwrap_or_default()
    }
}
