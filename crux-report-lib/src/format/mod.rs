//! Pure display formatting for metric values, URLs, and rating colors.

mod color;
mod metric;
mod short_url;

pub use color::{PerformanceColor, good_ratio_color, performance_color};
pub use metric::{DEFAULT_UNIT, MetricValue, format_metric, format_p75, format_ratio};
pub use short_url::format_url;
