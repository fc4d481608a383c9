use crate::model::UrlResult;
use crate::schema::lookup;
use compact_str::CompactString;

const LOG_TARGET: &str = "    filter";

/// Rating filter value meaning "no rating filter".
pub const ALL_RATINGS: &str = "all";

/// Keep only results whose p75 for `metric_name` is at most `max_value`.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricThreshold {
    pub metric_name: CompactString,
    pub max_value: f64,
}

impl MetricThreshold {
    #[must_use]
    pub fn new(metric_name: impl Into<CompactString>, max_value: f64) -> Self {
        Self {
            metric_name: metric_name.into(),
            max_value,
        }
    }
}

/// Conjunctive criteria applied to a result set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    pub performance_filter: Option<CompactString>,
    pub metric_threshold: Option<MetricThreshold>,
}

impl FilterCriteria {
    #[must_use]
    pub fn new(performance_filter: Option<&str>, metric_threshold: Option<MetricThreshold>) -> Self {
        Self {
            performance_filter: performance_filter.map(CompactString::from),
            metric_threshold,
        }
    }

    /// The rating filter, unless unset or the "all" sentinel.
    #[must_use]
    pub fn rating_filter(&self) -> Option<&str> {
        self.performance_filter
            .as_deref()
            .filter(|f| !f.eq_ignore_ascii_case(ALL_RATINGS))
    }

    /// Number of criteria that actually restrict the result set.
    #[must_use]
    pub fn active_count(&self) -> usize {
        usize::from(self.rating_filter().is_some()) + usize::from(self.metric_threshold.is_some())
    }

    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.active_count() == 0
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Whether a single result passes every active criterion.
    #[must_use]
    pub fn matches(&self, result: &UrlResult) -> bool {
        if let Some(wanted) = self.rating_filter() {
            let Some(rating) = result.rating() else {
                return false;
            };

            if rating.to_lowercase() != wanted.to_lowercase() {
                return false;
            }
        }

        if let Some(threshold) = &self.metric_threshold {
            let Some(value) = lookup(result, &threshold.metric_name).p75() else {
                return false;
            };

            if value.is_nan() || value > threshold.max_value {
                return false;
            }
        }

        true
    }
}

/// Keep the rows matching `criteria`, preserving their order.
#[must_use]
pub fn apply<'a>(rows: &[&'a UrlResult], criteria: &FilterCriteria) -> Vec<&'a UrlResult> {
    if criteria.is_identity() {
        return rows.to_vec();
    }

    if let Some(threshold) = &criteria.metric_threshold {
        let missing = rows.iter().filter(|r| lookup(r, &threshold.metric_name).p75().is_none()).count();
        if missing > 0 {
            log::debug!(target: LOG_TARGET, "{missing} row(s) have no value for '{}' and are excluded", threshold.metric_name);
        }
    }

    rows.iter().copied().filter(|r| criteria.matches(r)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::MetricSample;
    use chrono::Utc;

    const LCP: &str = "Largest Contentful Paint (LCP)";

    fn row(url: &str, rating: Option<&str>, lcp: Option<Option<f64>>) -> UrlResult {
        let metrics = lcp.map(|v| vec![MetricSample::new(LCP, v)]).unwrap_or_default();
        UrlResult::new(url, rating, metrics, Utc::now())
    }

    fn urls<'a>(rows: &[&'a UrlResult]) -> Vec<&'a str> {
        rows.iter().map(|r| r.url.as_str()).collect()
    }

    #[test]
    fn test_identity_filter() {
        let data = [row("a", Some("Good"), None), row("b", None, None)];
        let rows: Vec<_> = data.iter().collect();
        assert_eq!(urls(&apply(&rows, &FilterCriteria::default())), vec!["a", "b"]);
    }

    #[test]
    fn test_rating_filter_is_case_insensitive() {
        let data = [
            row("a", Some("Good"), None),
            row("b", Some("POOR"), None),
            row("c", Some("good"), None),
            row("d", None, None),
        ];
        let rows: Vec<_> = data.iter().collect();

        let criteria = FilterCriteria::new(Some("GOOD"), None);
        assert_eq!(urls(&apply(&rows, &criteria)), vec!["a", "c"]);
    }

    #[test]
    fn test_all_sentinel_disables_rating_filter() {
        let data = [row("a", Some("Good"), None), row("b", None, None)];
        let rows: Vec<_> = data.iter().collect();

        let criteria = FilterCriteria::new(Some("All"), None);
        assert_eq!(criteria.active_count(), 0);
        assert_eq!(urls(&apply(&rows, &criteria)), vec!["a", "b"]);
    }

    #[test]
    fn test_null_rating_never_matches() {
        let data = [row("a", None, None)];
        let rows: Vec<_> = data.iter().collect();
        assert!(apply(&rows, &FilterCriteria::new(Some("Unknown"), None)).is_empty());
    }

    #[test]
    fn test_threshold_excludes_missing_and_null() {
        let data = [
            row("a", None, Some(Some(1800.0))),
            row("b", None, Some(Some(3200.0))),
            row("c", None, None),
            row("d", None, Some(None)),
            row("e", None, Some(Some(2500.0))),
        ];
        let rows: Vec<_> = data.iter().collect();

        let criteria = FilterCriteria::new(None, Some(MetricThreshold::new(LCP, 2500.0)));
        assert_eq!(urls(&apply(&rows, &criteria)), vec!["a", "e"]);
    }

    #[test]
    fn test_zero_values_are_real() {
        let data = [row("a", None, Some(Some(0.0))), row("b", None, Some(Some(1.0)))];
        let rows: Vec<_> = data.iter().collect();

        let criteria = FilterCriteria::new(None, Some(MetricThreshold::new(LCP, 0.0)));
        assert_eq!(urls(&apply(&rows, &criteria)), vec!["a"]);
    }

    #[test]
    fn test_criteria_are_conjunctive() {
        let data = [
            row("a", Some("Good"), Some(Some(1000.0))),
            row("b", Some("Poor"), Some(Some(1000.0))),
            row("c", Some("Good"), Some(Some(9000.0))),
        ];
        let rows: Vec<_> = data.iter().collect();

        let criteria = FilterCriteria::new(Some("good"), Some(MetricThreshold::new(LCP, 2500.0)));
        assert_eq!(criteria.active_count(), 2);
        assert_eq!(urls(&apply(&rows, &criteria)), vec!["a"]);
    }

    #[test]
    fn test_clear() {
        let mut criteria = FilterCriteria::new(Some("Poor"), Some(MetricThreshold::new(LCP, 1.0)));
        criteria.clear();
        assert!(criteria.is_identity());
        assert_eq!(criteria, FilterCriteria::default());
    }
}
