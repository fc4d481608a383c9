#![doc(hidden)]
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core library for crux-report
//!
//! This library consolidates all functionality for the crux-report tool, which submits
//! web pages for Core Web Vitals analysis and turns the results into filtered, sorted
//! reports.
//!
//! # Module Organization
//!
//! - [`commands`]: Command-line interface and orchestration
//! - [`model`]: The analysis response data model
//! - [`format`]: Display formatting for values, ratios, URLs, and ratings
//! - [`schema`]: Metric field discovery across heterogeneous results
//! - [`pipeline`]: Filtering, sorting, and rating aggregation
//! - [`request`]: Validation and normalization of user-entered URLs
//! - [`client`]: HTTP transport to the analysis service
//! - [`session`]: Submission lifecycle and stale-response handling
//! - [`reports`]: Report generation in multiple formats

pub type Result<T, E = ohno::AppError> = core::result::Result<T, E>;

#[cfg(any(debug_assertions, test))]
pub mod commands;
#[cfg(not(any(debug_assertions, test)))]
mod commands;

pub mod client;
pub mod format;
pub mod model;
pub mod pipeline;
pub mod request;
pub mod schema;
pub mod session;

#[cfg(any(debug_assertions, test))]
pub mod reports;
#[cfg(not(any(debug_assertions, test)))]
mod reports;

pub use crate::commands::{Host, run};
