use crate::model::{MetricSample, UrlResult};

/// Outcome of looking up a metric in one result.
///
/// `Absent` means the result has no sample for the metric at all, which is different
/// from a present sample whose p75 is null.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SampleLookup<'a> {
    Absent,
    Present(&'a MetricSample),
}

impl<'a> SampleLookup<'a> {
    #[must_use]
    pub const fn sample(self) -> Option<&'a MetricSample> {
        match self {
            Self::Absent => None,
            Self::Present(sample) => Some(sample),
        }
    }

    /// The p75 value, or `None` when the sample is absent or has no value.
    #[must_use]
    pub const fn p75(self) -> Option<f64> {
        match self {
            Self::Absent => None,
            Self::Present(sample) => sample.p75_value,
        }
    }

    #[must_use]
    pub const fn is_absent(self) -> bool {
        matches!(self, Self::Absent)
    }
}

/// Find the sample for `metric_name` by exact name match.
#[must_use]
pub fn lookup<'a>(result: &'a UrlResult, metric_name: &str) -> SampleLookup<'a> {
    result
        .metrics
        .iter()
        .find(|s| s.metric_name == metric_name)
        .map_or(SampleLookup::Absent, SampleLookup::Present)
}
