/// Reference information for a well-known Core Web Vitals metric.
#[derive(Debug)]
pub struct MetricInfo {
    pub name: &'static str,
    pub description: &'static str,
    pub good_threshold: f64,
    pub unit: &'static str,
}

macro_rules! metric_info {
    ($name:expr, $description:expr, $threshold:expr, $unit:expr) => {
        MetricInfo {
            name: $name,
            description: $description,
            good_threshold: $threshold,
            unit: $unit,
        }
    };
}

pub const FALLBACK_DESCRIPTION: &str = "Performance metric from Chrome UX Report";

pub const KNOWN_METRICS: &[MetricInfo] = &[
    metric_info!(
        "Largest Contentful Paint (LCP)",
        "Measures loading performance. Good LCP is 2.5s or less.",
        2500.0,
        "ms"
    ),
    metric_info!(
        "First Input Delay (FID)",
        "Measures interactivity. Good FID is 100ms or less.",
        100.0,
        "ms"
    ),
    metric_info!(
        "Cumulative Layout Shift (CLS)",
        "Measures visual stability. Good CLS is 0.1 or less.",
        0.1,
        ""
    ),
    metric_info!(
        "First Contentful Paint (FCP)",
        "Measures time to first content render. Good FCP is 1.8s or less.",
        1800.0,
        "ms"
    ),
    metric_info!(
        "Interaction to Next Paint (INP)",
        "Measures responsiveness. Good INP is 200ms or less.",
        200.0,
        "ms"
    ),
    metric_info!(
        "Time to First Byte (TTFB)",
        "Measures server response time. Good TTFB is 0.8s or less.",
        800.0,
        "ms"
    ),
];

#[must_use]
pub fn find(metric_name: &str) -> Option<&'static MetricInfo> {
    KNOWN_METRICS.iter().find(|info| info.name == metric_name)
}

#[must_use]
pub fn describe(metric_name: &str) -> &'static str {
    find(metric_name).map_or(FALLBACK_DESCRIPTION, |info| info.description)
}

/// The unit to display for a metric, falling back to `default_unit` for unknown names.
#[must_use]
pub fn unit_for<'a>(metric_name: &str, default_unit: &'a str) -> &'a str {
    find(metric_name).map_or(default_unit, |info| info.unit)
}
