use compact_str::CompactString;
use core::fmt::{Display, Formatter};

/// The default unit appended to formatted metric values.
pub const DEFAULT_UNIT: &str = "ms";

const NOT_AVAILABLE: &str = "N/A";

/// A raw value destined for a metric cell.
#[derive(Debug, Clone, PartialEq)]
pub enum MetricValue {
    Number(f64),
    Text(CompactString),
}

impl From<f64> for MetricValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for MetricValue {
    fn from(value: &str) -> Self {
        Self::Text(value.into())
    }
}

impl Display for MetricValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// Render a metric value for display.
///
/// Missing and non-finite values render as `N/A`, text is passed through unchanged,
/// and numbers get the unit appended. Values of 1000 and above are grouped in
/// thousands; non-integers always carry two decimals.
#[must_use]
pub fn format_metric(value: Option<&MetricValue>, unit: &str) -> String {
    match value {
        None => NOT_AVAILABLE.to_string(),
        Some(MetricValue::Text(text)) => text.to_string(),
        Some(MetricValue::Number(number)) => format_number(*number, unit),
    }
}

/// Render an optional p75 value.
#[must_use]
pub fn format_p75(value: Option<f64>, unit: &str) -> String {
    value.map_or_else(|| NOT_AVAILABLE.to_string(), |v| format_number(v, unit))
}

/// Render a `0..=1` ratio as a percentage with one decimal.
#[must_use]
pub fn format_ratio(ratio: Option<f64>) -> String {
    match ratio {
        Some(r) if r.is_finite() => format!("{:.1}%", r * 100.0),
        _ => NOT_AVAILABLE.to_string(),
    }
}

fn format_number(value: f64, unit: &str) -> String {
    if !value.is_finite() {
        return NOT_AVAILABLE.to_string();
    }

    let is_integer = value.fract() == 0.0;
    let digits = if is_integer { format!("{value:.0}") } else { format!("{value:.2}") };

    if value >= 1000.0 {
        format!("{}{unit}", group_thousands(&digits))
    } else {
        format!("{digits}{unit}")
    }
}

/// Insert `,` separators into the integer part of a plain decimal string.
fn group_thousands(digits: &str) -> String {
    let (int_part, frac_part) = digits.split_once('.').map_or((digits, None), |(i, f)| (i, Some(f)));

    let mut grouped = String::with_capacity(digits.len() + int_part.len() / 3);
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    if let Some(frac) = frac_part {
        grouped.push('.');
        grouped.push_str(frac);
    }

    grouped
}
