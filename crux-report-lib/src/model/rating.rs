/// The rating labels the analysis service is known to emit.
pub const GOOD: &str = "Good";
pub const NEEDS_IMPROVEMENT: &str = "Needs Improvement";
pub const POOR: &str = "Poor";

/// Label shown for results without a rating.
pub const UNRATED: &str = "Unknown";

/// Coarse classification of a free-form rating label.
///
/// Matching is case-insensitive; anything unrecognized (including diagnostic labels
/// such as "No data available") is `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RatingClass {
    Good,
    NeedsImprovement,
    Poor,
    Other,
}

impl RatingClass {
    #[must_use]
    pub fn classify(label: Option<&str>) -> Self {
        let Some(label) = label else {
            return Self::Other;
        };

        match label.to_lowercase().as_str() {
            "good" => Self::Good,
            "needs improvement" => Self::NeedsImprovement,
            "poor" => Self::Poor,
            _ => Self::Other,
        }
    }
}
