use crate::model::UrlResult;
use compact_str::CompactString;
use std::collections::BTreeSet;

/// Metric names that have at least one non-null p75 value, sorted.
///
/// These are the metrics worth offering for threshold filters and sorting.
#[must_use]
pub fn filterable_metrics(results: &[UrlResult]) -> Vec<CompactString> {
    results
        .iter()
        .flat_map(|r| &r.metrics)
        .filter(|s| s.p75_value.is_some())
        .map(|s| s.metric_name.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Distinct rating labels present in the results, sorted.
#[must_use]
pub fn available_ratings(results: &[UrlResult]) -> Vec<CompactString> {
    results
        .iter()
        .filter_map(|r| r.overall_performance.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
