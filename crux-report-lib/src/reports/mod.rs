//! Multi-format report generation for analysis results
//!
//! This module turns a [`ReportView`](crate::pipeline::ReportView) into output for
//! human consumption and programmatic processing.
//!
//! # Implementation Model
//!
//! Three report generators are provided, each accessed through a `generate` function:
//! - **Console**: Terminal output with rating summary, per-URL metric blocks, and ANSI colors
//! - **CSV**: One row per URL and one column per metric, with proper escaping
//! - **JSON**: Machine-readable structured data keyed by sanitized metric names
//!
//! All generators operate on the same input, so several formats can be produced
//! from one view. Rows appear in view order, after filtering and sorting; the rating
//! summary always covers the complete result set.

mod common;
mod console;
mod csv;
mod json;

pub use console::generate as generate_console;
pub use csv::generate as generate_csv;
pub use json::generate as generate_json;

use crate::format::DEFAULT_UNIT;

/// Default width URLs are shortened to in console output.
pub const DEFAULT_URL_WIDTH: usize = 50;

/// Presentation settings for the console report.
#[derive(Debug, Clone)]
pub struct ReportOptions {
    pub use_colors: bool,
    pub unit: String,
    pub url_width: usize,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            use_colors: false,
            unit: DEFAULT_UNIT.to_string(),
            url_width: DEFAULT_URL_WIDTH,
        }
    }
}
