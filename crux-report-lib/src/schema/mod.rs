//! Dynamic metric schema derivation
//!
//! Different URLs may report different metric sets, so the set of measurable fields
//! is computed by unioning metric names across every result rather than by inspecting
//! one row. The original metric name is the identity used everywhere in the pipeline.
//! Sanitized keys (`[A-Za-z0-9_]` only) exist for addressing columns and JSON fields;
//! when two names sanitize to the same key the collision is detected and logged, and
//! in keyed output the later metric shadows the earlier one.

pub mod catalog;
mod lookup;
mod metric_schema;
mod pickers;

pub use lookup::{SampleLookup, lookup};
pub use metric_schema::{KeyCollision, MetricSchema, keyed_samples, sanitize_key};
pub use pickers::{available_ratings, filterable_metrics};
