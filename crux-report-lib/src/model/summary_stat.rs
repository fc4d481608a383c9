use compact_str::CompactString;
use serde::{Deserialize, Serialize};

/// Cross-URL statistics for one metric, as computed by the analysis service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryStat {
    pub metric_name: CompactString,
    #[serde(default)]
    pub average_p75: Option<f64>,
    #[serde(default)]
    pub best_url: Option<String>,
    #[serde(default)]
    pub best_value: Option<f64>,
    #[serde(default)]
    pub worst_url: Option<String>,
    #[serde(default)]
    pub worst_value: Option<f64>,
}
