//! Results processing pipeline
//!
//! Pure transformations from an [`AnalysisResponse`](crate::model::AnalysisResponse)
//! to a displayable [`ReportView`]. Nothing in here performs I/O or keeps state
//! between calls; every view is rebuilt from the original response.
//!
//! The stages are:
//!
//! - [`filter`]: conjunctive rating and metric-threshold criteria, order preserving
//! - [`sort`]: stable ordering by URL, rating label, or a metric's p75
//! - [`summary`]: rating counts and percentages over the unfiltered results
//! - [`view`]: assembles the above, filtering before sorting
//!
//! Filtering and sorting commute, and both are idempotent for fixed inputs.

pub mod filter;
pub mod sort;
pub mod summary;
mod view;

pub use filter::{FilterCriteria, MetricThreshold};
pub use sort::{SortDirection, SortField, SortSpec};
pub use summary::{Percentage, RatingBreakdown, RatingSummary};
pub use view::{ReportView, build_view};
