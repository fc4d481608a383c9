use crate::model::UrlResult;
use crate::schema::lookup;
use compact_str::CompactString;
use core::cmp::Ordering;
use core::fmt::{Display, Formatter};
use core::str::FromStr;

const LOG_TARGET: &str = "      sort";

pub const URL_FIELD: &str = "url";
pub const RATING_FIELD: &str = "overall_performance";

/// What to order rows by.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SortField {
    Url,
    OverallPerformance,
    Metric(CompactString),
}

impl SortField {
    /// Interpret a field name; anything other than the two fixed fields is a metric name.
    #[must_use]
    pub fn parse(field: &str) -> Self {
        match field {
            URL_FIELD => Self::Url,
            RATING_FIELD => Self::OverallPerformance,
            metric => Self::Metric(metric.into()),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Url => URL_FIELD,
            Self::OverallPerformance => RATING_FIELD,
            Self::Metric(name) => name,
        }
    }
}

impl Display for SortField {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl FromStr for SortDirection {
    type Err = ohno::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            _ => Err(ohno::app_err!("unknown sort direction '{s}' (expected 'asc' or 'desc')")),
        }
    }
}

/// A requested ordering. No field means "keep the input order".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortSpec {
    pub field: Option<SortField>,
    pub direction: SortDirection,
}

impl SortSpec {
    #[must_use]
    pub fn new(field: Option<&str>, direction: SortDirection) -> Self {
        Self {
            field: field.filter(|f| !f.is_empty()).map(SortField::parse),
            direction,
        }
    }

    #[must_use]
    pub fn by(field: &str) -> Self {
        Self::new(Some(field), SortDirection::Asc)
    }

    #[must_use]
    pub fn descending(mut self) -> Self {
        self.direction = SortDirection::Desc;
        self
    }

    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.field.is_some()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Order rows by `spec`, stably. Rows with equal keys keep their input order in both
/// directions.
#[must_use]
pub fn apply<'a>(rows: &[&'a UrlResult], spec: &SortSpec) -> Vec<&'a UrlResult> {
    let mut sorted = rows.to_vec();
    let Some(field) = &spec.field else {
        return sorted;
    };

    if let SortField::Metric(name) = field {
        let missing = rows.iter().filter(|r| lookup(r, name).p75().is_none_or(f64::is_nan)).count();
        if missing > 0 {
            log::debug!(target: LOG_TARGET, "{missing} row(s) have no value for '{name}' and sort as 0");
        }
    }

    sorted.sort_by(|a, b| {
        let ordering = compare(a, b, field);
        match spec.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });

    sorted
}

fn compare(a: &UrlResult, b: &UrlResult, field: &SortField) -> Ordering {
    match field {
        SortField::Url => collate(&a.url, &b.url),
        SortField::OverallPerformance => collate(a.rating().unwrap_or_default(), b.rating().unwrap_or_default()),
        SortField::Metric(name) => {
            let x = metric_key(a, name);
            let y = metric_key(b, name);
            x.total_cmp(&y)
        }
    }
}

/// A missing sample, a null value, and NaN all sort as 0.
fn metric_key(result: &UrlResult, metric_name: &str) -> f64 {
    lookup(result, metric_name).p75().filter(|v| !v.is_nan()).unwrap_or(0.0)
}

/// Compare two strings the way a human-facing list expects.
///
/// Case is ignored first; remaining ties put lowercase before uppercase at the first
/// differing character, then fall back to the raw code points.
#[must_use]
pub fn collate(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
        .then_with(|| case_order(a, b))
        .then_with(|| a.cmp(b))
}

fn case_order(a: &str, b: &str) -> Ordering {
    a.chars()
        .zip(b.chars())
        .find(|(x, y)| x != y)
        .map_or(Ordering::Equal, |(x, y)| match (x.is_lowercase(), y.is_lowercase()) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            _ => Ordering::Equal,
        })
}
