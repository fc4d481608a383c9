use crate::model::{MetricSample, UrlResult};
use compact_str::CompactString;
use std::collections::{HashMap, HashSet};

const LOG_TARGET: &str = "    schema";

/// Replace every character outside `[A-Za-z0-9]` with `_`.
#[must_use]
pub fn sanitize_key(metric_name: &str) -> String {
    metric_name
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}

/// Two distinct metric names that map to the same sanitized key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyCollision {
    pub key: String,
    pub first: CompactString,
    pub second: CompactString,
}

/// The dynamic set of measurable fields across a result set.
///
/// Metric names are the identity; sanitized keys are only a display concern.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetricSchema {
    names: Vec<CompactString>,
}

impl MetricSchema {
    /// Collect every distinct metric name across all results, in first-seen order.
    #[must_use]
    pub fn derive(results: &[UrlResult]) -> Self {
        let mut seen = HashSet::new();
        let mut names = Vec::new();

        for sample in results.iter().flat_map(|r| &r.metrics) {
            if seen.insert(sample.metric_name.as_str()) {
                names.push(sample.metric_name.clone());
            }
        }

        let schema = Self { names };
        for collision in schema.collisions() {
            log::warn!(
                target: LOG_TARGET,
                "Metrics '{}' and '{}' share the display key '{}'; '{}' shadows '{}' in keyed output",
                collision.first,
                collision.second,
                collision.key,
                collision.second,
                collision.first
            );
        }

        schema
    }

    #[must_use]
    pub fn names(&self) -> &[CompactString] {
        &self.names
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    #[must_use]
    pub fn contains(&self, metric_name: &str) -> bool {
        self.names.iter().any(|n| n == metric_name)
    }

    /// Metric names paired with their sanitized display keys.
    pub fn keyed_names(&self) -> impl Iterator<Item = (&CompactString, String)> {
        self.names.iter().map(|n| (n, sanitize_key(n)))
    }

    /// Every pair of names whose sanitized keys collide, in schema order.
    #[must_use]
    pub fn collisions(&self) -> Vec<KeyCollision> {
        let mut owners: HashMap<String, &CompactString> = HashMap::new();
        let mut collisions = Vec::new();

        for name in &self.names {
            let key = sanitize_key(name);
            match owners.get(&key) {
                Some(first) => collisions.push(KeyCollision {
                    key,
                    first: (*first).clone(),
                    second: name.clone(),
                }),
                None => {
                    let _ = owners.insert(key, name);
                }
            }
        }

        collisions
    }
}

/// Index a result's samples by sanitized key.
///
/// When two metric names sanitize to the same key, the sample appearing later in the
/// result silently replaces the earlier one.
#[must_use]
pub fn keyed_samples(result: &UrlResult) -> HashMap<String, &MetricSample> {
    result.metrics.iter().map(|s| (sanitize_key(&s.metric_name), s)).collect()
}
