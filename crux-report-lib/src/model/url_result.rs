use super::{FormFactor, MetricSample, timestamp};
use chrono::{DateTime, Utc};
use compact_str::CompactString;
use serde::{Deserialize, Serialize};

/// Measurements for a single analyzed URL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UrlResult {
    pub url: String,

    #[serde(default)]
    pub form_factor: FormFactor,

    /// Upstream rating label; free-form and possibly absent.
    #[serde(default)]
    pub overall_performance: Option<CompactString>,

    /// Samples in upstream order. Metric names are expected to be unique within a result.
    #[serde(default)]
    pub metrics: Vec<MetricSample>,

    #[serde(deserialize_with = "timestamp::deserialize")]
    pub created_at: DateTime<Utc>,
}

impl UrlResult {
    #[must_use]
    pub fn new(url: impl Into<String>, overall_performance: Option<&str>, metrics: Vec<MetricSample>, created_at: DateTime<Utc>) -> Self {
        Self {
            url: url.into(),
            form_factor: FormFactor::default(),
            overall_performance: overall_performance.map(CompactString::from),
            metrics,
            created_at,
        }
    }

    #[must_use]
    pub fn rating(&self) -> Option<&str> {
        self.overall_performance.as_deref()
    }
}
