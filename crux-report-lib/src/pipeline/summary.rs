use crate::model::UrlResult;
use crate::model::rating::{GOOD, NEEDS_IMPROVEMENT, POOR};
use core::fmt::{Display, Formatter};
use serde::Serialize;

/// A share of the total, in percent, rounded to one decimal place.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Percentage(f64);

impl Percentage {
    #[must_use]
    pub fn of(count: usize, total: usize) -> Self {
        #[expect(clippy::cast_precision_loss, reason = "result counts are far below 2^52")]
        let raw = count as f64 / total as f64 * 100.0;
        Self((raw * 10.0).round() / 10.0)
    }

    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }
}

impl Display for Percentage {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:.1}", self.0)
    }
}

/// Rating counts over a non-empty result set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RatingBreakdown {
    pub total: usize,
    pub good_count: usize,
    pub needs_improvement_count: usize,
    pub poor_count: usize,
    pub unknown_count: usize,
    pub good_percentage: Percentage,
    pub needs_improvement_percentage: Percentage,
    pub poor_percentage: Percentage,
}

/// Dashboard rating summary. An empty result set is `NoData` rather than a division
/// by zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum RatingSummary {
    NoData,
    Breakdown(RatingBreakdown),
}

impl RatingSummary {
    /// Count the known rating labels. Matching is exact and case-sensitive; any other
    /// label, or no label, counts as unknown.
    #[must_use]
    pub fn compute(results: &[UrlResult]) -> Self {
        let total = results.len();
        if total == 0 {
            return Self::NoData;
        }

        let count = |label: &str| results.iter().filter(|r| r.rating() == Some(label)).count();
        let good_count = count(GOOD);
        let needs_improvement_count = count(NEEDS_IMPROVEMENT);
        let poor_count = count(POOR);

        Self::Breakdown(RatingBreakdown {
            total,
            good_count,
            needs_improvement_count,
            poor_count,
            unknown_count: total - good_count - needs_improvement_count - poor_count,
            good_percentage: Percentage::of(good_count, total),
            needs_improvement_percentage: Percentage::of(needs_improvement_count, total),
            poor_percentage: Percentage::of(poor_count, total),
        })
    }

    #[must_use]
    pub const fn breakdown(&self) -> Option<&RatingBreakdown> {
        match self {
            Self::NoData => None,
            Self::Breakdown(b) => Some(b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn rated(labels: &[Option<&str>]) -> Vec<UrlResult> {
        labels
            .iter()
            .enumerate()
            .map(|(i, label)| UrlResult::new(format!("https://{i}.example"), *label, vec![], Utc::now()))
            .collect()
    }

    #[test]
    fn test_good_good_poor() {
        let summary = RatingSummary::compute(&rated(&[Some("Good"), Some("Good"), Some("Poor")]));
        let b = summary.breakdown().unwrap();

        assert_eq!(b.total, 3);
        assert_eq!(b.good_count, 2);
        assert_eq!(b.poor_count, 1);
        assert_eq!(b.needs_improvement_count, 0);
        assert_eq!(b.unknown_count, 0);
        assert_eq!(b.good_percentage.to_string(), "66.7");
        assert_eq!(b.poor_percentage.to_string(), "33.3");
        assert_eq!(b.needs_improvement_percentage.to_string(), "0.0");
    }

    #[test]
    fn test_empty_is_no_data() {
        assert_eq!(RatingSummary::compute(&[]), RatingSummary::NoData);
        assert!(RatingSummary::NoData.breakdown().is_none());
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        let summary = RatingSummary::compute(&rated(&[Some("good"), Some("Needs Improvement"), None, Some("No data available")]));
        let b = summary.breakdown().unwrap();

        assert_eq!(b.good_count, 0);
        assert_eq!(b.needs_improvement_count, 1);
        assert_eq!(b.unknown_count, 3);
        assert_eq!(b.needs_improvement_percentage.to_string(), "25.0");
    }

    #[test]
    fn test_percentage_rounding() {
        assert_eq!(Percentage::of(1, 3).value(), 33.3);
        assert_eq!(Percentage::of(2, 3).value(), 66.7);
        assert_eq!(Percentage::of(3, 3).to_string(), "100.0");
    }

    #[test]
    fn test_serialized_shape() {
        let summary = RatingSummary::compute(&rated(&[Some("Good")]));
        let json = serde_json::to_value(summary).unwrap();
        assert_eq!(json["state"], "breakdown");
        assert_eq!(json["good_count"], 1);
        assert_eq!(json["good_percentage"], 100.0);

        let json = serde_json::to_value(RatingSummary::NoData).unwrap();
        assert_eq!(json["state"], "no_data");
    }
}
