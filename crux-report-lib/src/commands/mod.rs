//! Command-line interface and orchestration for crux-report
//!
//! This module implements the CLI commands and ties the request, client, session,
//! pipeline, and report modules together into end-to-end workflows. It handles
//! argument parsing, configuration management, and logging setup.
//!
//! # Implementation Model
//!
//! ## Commands
//!
//! - **analyze**: Normalize the given URLs, submit them to the analysis service,
//!   and report the response
//! - **report**: Load a response saved by `analyze --save` and report it again,
//!   typically with different filters or sorting
//! - **history**: List past analyses stored by the service
//! - **health**: Check that the service is reachable and healthy
//! - **init**: Generate a default configuration file
//!
//! ## Execution Flow
//!
//! The `run` function parses command-line arguments using clap and routes
//! to the appropriate command handler. The reporting commands follow the same
//! pattern:
//!
//! 1. Set up logging and load configuration
//! 2. Obtain an analysis response, from the service or from a file
//! 3. Build a view by filtering and then sorting the results
//! 4. Generate console, CSV, and JSON reports from the view
//!
//! The `common` module provides the shared arguments, logging setup, color mode
//! handling, and the report output logic.
//!
//! Failures from the service are written to the error stream as their fixed
//! user-facing message before the process exits with a non-zero status.

mod analyze;
mod common;
mod config;
mod health;
mod history;
mod host;
mod init;
mod report;
mod run;

pub use analyze::{AnalyzeArgs, analyze_urls};
pub use health::{HealthArgs, check_health};
pub use history::{HistoryArgs, show_history};
pub use host::Host;
pub use init::{InitArgs, init_config};
pub use report::{ReportFileArgs, report_file};
pub use run::run;
