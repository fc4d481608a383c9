//! Common processing logic shared between commands.

use super::Host;
use super::config::Config;
use crate::Result;
use crate::client::Client;
use crate::pipeline::{FilterCriteria, MetricThreshold, ReportView, SortDirection, SortSpec};
use crate::reports::{ReportOptions, generate_console, generate_csv, generate_json};
use camino::{Utf8Path, Utf8PathBuf};
use clap::Args;
use clap::ValueEnum;
use ohno::IntoAppError;
use std::fs;
use std::io::Write;

/// Color mode configuration for output
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    /// Always use colors
    Always,

    /// Never use colors
    Never,

    /// Use colors if the output is a terminal, otherwise don't use colors
    Auto,
}

/// Log level for diagnostic output
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// No logging output
    None,

    /// Only error messages
    Error,

    /// Warning and error messages
    Warn,

    /// Info, warning, and error messages
    Info,

    /// Debug, info, warning, and error messages
    Debug,

    /// Trace, debug, info, warning, and error messages
    Trace,
}

/// Arguments shared by every command that talks to the service or reads configuration
#[derive(Args, Debug)]
pub struct CommonArgs {
    /// Path to configuration file (default is `crux-report.toml`)
    #[arg(long, short = 'c', value_name = "PATH")]
    pub config: Option<Utf8PathBuf>,

    /// Root URL of the analysis service API
    #[arg(long, value_name = "URL", env = "CRUX_REPORT_BASE_URL")]
    pub base_url: Option<String>,

    /// Set the logging level for diagnostic output
    #[arg(long, value_name = "LEVEL", default_value = "none", global = true)]
    pub log_level: LogLevel,
}

/// Arguments that shape how analysis results are filtered, sorted, and reported
#[derive(Args, Debug)]
pub struct ReportArgs {
    /// Only show results with this overall rating (use "all" for no filtering)
    #[arg(long, value_name = "RATING", help_heading = "Filtering")]
    pub rating: Option<String>,

    /// Metric whose p75 value must not exceed `--max`
    #[arg(long, value_name = "NAME", requires = "max", help_heading = "Filtering")]
    pub metric: Option<String>,

    /// Largest p75 value allowed for the `--metric` filter
    #[arg(long, value_name = "VALUE", requires = "metric", allow_negative_numbers = true, help_heading = "Filtering")]
    pub max: Option<f64>,

    /// Sort results by `url`, `overall_performance`, or a metric name
    #[arg(long, value_name = "FIELD", help_heading = "Filtering")]
    pub sort: Option<String>,

    /// Sort in descending order
    #[arg(long, requires = "sort", help_heading = "Filtering")]
    pub desc: bool,

    /// Control when to use colored output
    #[arg(long, value_name = "WHEN", default_value = "auto")]
    pub color: ColorMode,

    /// Width URLs are shortened to in console output
    #[arg(long, value_name = "N")]
    pub url_width: Option<usize>,

    /// Output results to a CSV file
    #[arg(long, value_name = "PATH", help_heading = "Report Output")]
    pub csv: Option<Utf8PathBuf>,

    /// Output results to a JSON file
    #[arg(long, value_name = "PATH", help_heading = "Report Output")]
    pub json: Option<Utf8PathBuf>,

    /// Output results to the console. Implied when no other report is requested.
    #[arg(long, help_heading = "Report Output")]
    pub console: bool,
}

impl ReportArgs {
    #[must_use]
    pub fn criteria(&self) -> FilterCriteria {
        let threshold = match (&self.metric, self.max) {
            (Some(name), Some(max)) => Some(MetricThreshold::new(name.as_str(), max)),
            _ => None,
        };

        FilterCriteria::new(self.rating.as_deref(), threshold)
    }

    #[must_use]
    pub fn sort_spec(&self) -> SortSpec {
        let direction = if self.desc { SortDirection::Desc } else { SortDirection::Asc };
        SortSpec::new(self.sort.as_deref(), direction)
    }
}

pub struct Common<'a, H: Host> {
    pub config: Config,
    host: &'a mut H,
}

impl<'a, H: Host> Common<'a, H> {
    /// Set up logging and load the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be loaded
    pub fn new(host: &'a mut H, args: &CommonArgs) -> Result<Self> {
        Self::init_logging(args.log_level);

        let mut config = Config::load(Utf8Path::new("."), args.config.as_ref())?;
        if let Some(base_url) = &args.base_url {
            config.override_base_url(base_url)?;
        }

        Ok(Self { config, host })
    }

    /// Initialize logger based on log level
    fn init_logging(log_level: LogLevel) {
        let level = match log_level {
            LogLevel::None => return,
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        };

        let env = env_logger::Env::default().filter_or("RUST_LOG", level);

        // a logger may already be installed when commands run more than once in-process
        let _ = env_logger::Builder::from_env(env)
            .format_timestamp(None)
            .format_module_path(false)
            .format_target(matches!(log_level, LogLevel::Debug | LogLevel::Trace))
            .try_init();
    }

    /// A client for the configured service
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created
    pub fn client(&self) -> Result<Client> {
        Client::new(&self.config.base_url, self.config.request_timeout)
    }

    pub fn output(&mut self) -> impl Write {
        self.host.output()
    }

    /// Report a failure on the error stream and terminate with a non-zero status
    pub fn fail(&mut self, message: impl core::fmt::Display) {
        let _ = writeln!(self.host.error(), "❌ {message}");
        self.host.exit(1);
    }

    pub fn report(&mut self, view: &ReportView<'_>, args: &ReportArgs) -> Result<()> {
        let generating_reports = args.csv.is_some() || args.json.is_some();

        if args.console || !generating_reports {
            let use_colors = match args.color {
                ColorMode::Always => true,
                ColorMode::Never => false,
                ColorMode::Auto => {
                    use std::io::{IsTerminal, stdout};
                    stdout().is_terminal()
                }
            };

            let options = ReportOptions {
                use_colors,
                unit: self.config.unit.clone(),
                url_width: args.url_width.unwrap_or(self.config.url_display_width),
            };

            let mut console_output = String::new();
            generate_console(view, &options, &mut console_output)?;
            let _ = write!(self.host.output(), "{console_output}");
        }

        if let Some(filename) = &args.csv {
            let mut csv_output = String::new();
            generate_csv(view, &self.config.unit, &mut csv_output)?;
            fs::write(filename, csv_output).into_app_err_with(|| format!("writing CSV report to '{filename}'"))?;
        }

        if let Some(filename) = &args.json {
            let mut json_output = String::new();
            generate_json(view, &mut json_output)?;
            fs::write(filename, json_output).into_app_err_with(|| format!("writing JSON report to '{filename}'"))?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::host::TestHost;
    use crate::model::{AnalysisResponse, MetricSample, UrlResult};
    use crate::pipeline::{SortField, build_view};
    use chrono::Utc;
    use clap::Parser;

    #[derive(Parser, Debug)]
    struct Harness {
        #[command(flatten)]
        report: ReportArgs,
    }

    fn parse(args: &[&str]) -> ReportArgs {
        Harness::parse_from(core::iter::once("test").chain(args.iter().copied())).report
    }

    fn response() -> AnalysisResponse {
        AnalysisResponse::new(
            "s1",
            vec![
                UrlResult::new("https://a.com/", Some("Good"), vec![MetricSample::new("LCP", Some(1200.0))], Utc::now()),
                UrlResult::new("https://b.com/", Some("Poor"), vec![MetricSample::new("LCP", Some(4100.0))], Utc::now()),
            ],
        )
    }

    #[test]
    fn test_default_args_are_identity() {
        let args = parse(&[]);
        assert!(args.criteria().is_identity());
        assert!(!args.sort_spec().is_active());
        assert_eq!(args.color, ColorMode::Auto);
    }

    #[test]
    fn test_criteria_from_args() {
        let args = parse(&["--rating", "Poor", "--metric", "LCP", "--max", "2500"]);
        let criteria = args.criteria();
        assert_eq!(criteria.rating_filter(), Some("Poor"));
        assert_eq!(criteria.active_count(), 2);
    }

    #[test]
    fn test_metric_requires_max() {
        let result = Harness::try_parse_from(["test", "--metric", "LCP"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_sort_from_args() {
        let spec = parse(&["--sort", "url", "--desc"]).sort_spec();
        assert_eq!(spec.field, Some(SortField::Url));
        assert_eq!(spec.direction, SortDirection::Desc);
    }

    #[test]
    fn test_report_to_console_by_default() {
        let mut host = TestHost::new();
        let mut common = Common { config: Config::default(), host: &mut host };

        let response = response();
        let args = parse(&["--color", "never", "--rating", "good"]);
        let view = build_view(&response, &args.criteria(), &args.sort_spec());
        common.report(&view, &args).unwrap();

        let output = host.output_str();
        assert!(output.contains("Showing 1 of 2"));
        assert!(output.contains("https://a.com/ [Good]"));
        assert!(!output.contains("b.com"));
    }

    #[test]
    #[cfg_attr(miri, ignore = "Miri cannot call GetTempPathW")]
    fn test_report_files_suppress_console() {
        let tmp = tempfile::tempdir().unwrap();
        let csv_path = Utf8PathBuf::try_from(tmp.path().join("out.csv")).unwrap();
        let json_path = Utf8PathBuf::try_from(tmp.path().join("out.json")).unwrap();

        let mut host = TestHost::new();
        let mut common = Common { config: Config::default(), host: &mut host };

        let response = response();
        let args = parse(&["--csv", csv_path.as_str(), "--json", json_path.as_str()]);
        let view = build_view(&response, &args.criteria(), &args.sort_spec());
        common.report(&view, &args).unwrap();

        assert!(host.output_str().is_empty());

        let csv = fs::read_to_string(&csv_path).unwrap();
        assert!(csv.starts_with("URL,Device,Overall Rating,Analyzed At,LCP\n"));
        assert_eq!(csv.lines().count(), 3);

        let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(&json_path).unwrap()).unwrap();
        assert_eq!(json["session_id"], "s1");
    }

    #[test]
    fn test_fail_reports_and_exits() {
        let mut host = TestHost::new();
        let mut common = Common { config: Config::default(), host: &mut host };
        common.fail("Request timeout. Please try again.");

        assert_eq!(host.exit_code, Some(1));
        assert!(host.error_str().contains("Request timeout. Please try again."));
    }
}
