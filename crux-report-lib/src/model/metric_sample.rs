use compact_str::CompactString;
use serde::{Deserialize, Serialize};

/// One metric's percentile data for a single URL.
///
/// The three ratios are expected to sum to roughly 1 when all are present, but this
/// is upstream data and is never enforced here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricSample {
    pub metric_name: CompactString,
    #[serde(default)]
    pub p75_value: Option<f64>,
    #[serde(default)]
    pub good_ratio: Option<f64>,
    #[serde(default)]
    pub needs_improvement_ratio: Option<f64>,
    #[serde(default)]
    pub poor_ratio: Option<f64>,
}

impl MetricSample {
    #[must_use]
    pub fn new(metric_name: impl Into<CompactString>, p75_value: Option<f64>) -> Self {
        Self {
            metric_name: metric_name.into(),
            p75_value,
            good_ratio: None,
            needs_improvement_ratio: None,
            poor_ratio: None,
        }
    }

    #[must_use]
    pub const fn with_ratios(mut self, good: Option<f64>, needs_improvement: Option<f64>, poor: Option<f64>) -> Self {
        self.good_ratio = good;
        self.needs_improvement_ratio = needs_improvement;
        self.poor_ratio = poor;
        self
    }
}
