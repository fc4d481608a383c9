//! Outbound request preparation.

mod normalizer;

pub use normalizer::{MAX_URLS, UrlIssue, ValidationError, is_valid_url, normalize};

use crate::model::FormFactor;
use serde::{Deserialize, Serialize};

/// Body of an analysis submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    pub urls: Vec<String>,
    pub form_factor: FormFactor,
}
