//! Wire-level data model for analysis responses
//!
//! These types mirror what the analysis service returns: one [`AnalysisResponse`]
//! per submission, holding a [`UrlResult`] per analyzed URL, each with a
//! heterogeneous list of [`MetricSample`]s. Different URLs may report different
//! metric sets, so nothing here assumes a fixed schema; see [`crate::schema`] for
//! how the set of measurable fields is derived.
//!
//! Rating labels are kept as opaque strings. [`RatingClass`] offers a tolerant
//! classification for presentation purposes only.

mod analysis_response;
mod form_factor;
mod metric_sample;
pub mod rating;
mod summary_stat;
pub(crate) mod timestamp;
mod url_result;

pub use analysis_response::AnalysisResponse;
pub use form_factor::FormFactor;
pub use metric_sample::MetricSample;
pub use rating::RatingClass;
pub use summary_stat::SummaryStat;
pub use url_result::UrlResult;
