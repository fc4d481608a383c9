//! Common utilities shared across report generators.

use crate::format::format_p75;
use crate::model::UrlResult;
use crate::model::rating::UNRATED;
use crate::pipeline::{ReportView, SortDirection};
use crate::schema::{SampleLookup, catalog, lookup};

/// The rating label to display, with a placeholder for unrated results.
pub fn rating_label(result: &UrlResult) -> &str {
    result.rating().unwrap_or(UNRATED)
}

/// Formatted p75 for one metric cell.
///
/// Returns `None` when the result has no sample for the metric; a sample without a
/// value renders as `N/A`.
pub fn metric_cell(result: &UrlResult, metric_name: &str, default_unit: &str) -> Option<String> {
    match lookup(result, metric_name) {
        SampleLookup::Absent => None,
        SampleLookup::Present(sample) => Some(format_p75(sample.p75_value, catalog::unit_for(metric_name, default_unit))),
    }
}

/// A one-line description of the active filters and sort, if any.
pub fn describe_criteria(view: &ReportView<'_>) -> Option<String> {
    let mut parts = Vec::new();

    if let Some(rating) = view.criteria.rating_filter() {
        parts.push(format!("rating = {rating}"));
    }

    if let Some(threshold) = &view.criteria.metric_threshold {
        parts.push(format!("{} <= {}", threshold.metric_name, threshold.max_value));
    }

    if let Some(field) = &view.sort.field {
        let direction = match view.sort.direction {
            SortDirection::Asc => "ascending",
            SortDirection::Desc => "descending",
        };
        parts.push(format!("sorted by {field} ({direction})"));
    }

    if parts.is_empty() { None } else { Some(parts.join("; ")) }
}
