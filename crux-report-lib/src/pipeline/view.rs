use super::{FilterCriteria, RatingSummary, SortSpec, filter, sort};
use crate::model::{AnalysisResponse, SummaryStat, UrlResult};
use crate::schema::{MetricSchema, available_ratings, filterable_metrics};
use compact_str::CompactString;

/// Everything a report needs, derived from one response and the current criteria.
///
/// The view borrows its rows from the response; the response itself is never
/// modified, so rebuilding a view with different criteria is always safe.
#[derive(Debug, Clone)]
pub struct ReportView<'a> {
    pub response: &'a AnalysisResponse,
    pub schema: MetricSchema,
    pub ratings: RatingSummary,
    pub rows: Vec<&'a UrlResult>,
    pub criteria: FilterCriteria,
    pub sort: SortSpec,
}

impl<'a> ReportView<'a> {
    #[must_use]
    pub fn summary_stats(&self) -> &'a [SummaryStat] {
        self.response.summary_stats()
    }

    #[must_use]
    pub fn note(&self) -> Option<&'a str> {
        self.response.note.as_deref()
    }

    #[must_use]
    pub fn summary_error(&self) -> Option<&'a str> {
        self.response.summary_error.as_deref()
    }

    /// True when there were results but the criteria excluded all of them.
    #[must_use]
    pub fn is_no_match(&self) -> bool {
        self.rows.is_empty() && !self.response.results.is_empty()
    }

    /// Number of active filter and sort settings.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.criteria.active_count() + usize::from(self.sort.is_active())
    }

    #[must_use]
    pub fn filterable_metrics(&self) -> Vec<CompactString> {
        filterable_metrics(&self.response.results)
    }

    #[must_use]
    pub fn available_ratings(&self) -> Vec<CompactString> {
        available_ratings(&self.response.results)
    }
}

/// Derive a report view: schema and rating summary over all results, rows filtered
/// then sorted.
#[must_use]
pub fn build_view<'a>(response: &'a AnalysisResponse, criteria: &FilterCriteria, sort_spec: &SortSpec) -> ReportView<'a> {
    let all: Vec<&UrlResult> = response.results.iter().collect();
    let filtered = filter::apply(&all, criteria);
    let rows = sort::apply(&filtered, sort_spec);

    ReportView {
        response,
        schema: MetricSchema::derive(&response.results),
        ratings: RatingSummary::compute(&response.results),
        rows,
        criteria: criteria.clone(),
        sort: sort_spec.clone(),
    }
}
