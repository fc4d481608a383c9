//! Command dispatch logic for crux-report

use super::{
    AnalyzeArgs, HealthArgs, HistoryArgs, InitArgs, ReportFileArgs, analyze_urls, check_health, init_config, report_file, show_history,
};
use crate::{Host, Result};
use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects};
use clap::{Parser, Subcommand};

const CLAP_STYLES: Styles = Styles::styled()
    .header(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .literal(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
    .placeholder(AnsiColor::Cyan.on_default());

#[derive(Parser, Debug)]
#[command(name = "crux-report", author, version, long_about = None)]
#[command(about = "Analyze and report Core Web Vitals field data for web pages")]
#[command(styles = CLAP_STYLES)]
struct Cli {
    #[command(subcommand)]
    command: CruxSubcommand,
}

#[derive(Subcommand, Debug)]
enum CruxSubcommand {
    /// Submit URLs for analysis and report the results
    Analyze(Box<AnalyzeArgs>),
    /// Report on a previously saved analysis response
    Report(Box<ReportFileArgs>),
    /// List past analyses stored by the service
    History(HistoryArgs),
    /// Check that the analysis service is up
    Health(HealthArgs),
    /// Generate a default configuration file
    Init(InitArgs),
}

/// Dispatch command-line arguments to the appropriate handler
///
/// This function parses the command-line arguments and executes the corresponding
/// subcommand. It's designed to be called from main.rs with the program arguments.
///
/// # Arguments
///
/// * `args` - An iterator of command-line arguments (typically from `std::env::args()`)
///
/// # Errors
///
/// Returns an error if command parsing fails or if the executed command fails
pub async fn run<I, T, H>(host: &mut H, args: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
    H: Host,
{
    match &Cli::parse_from(args).command {
        CruxSubcommand::Analyze(analyze_args) => analyze_urls(host, analyze_args).await,
        CruxSubcommand::Report(report_args) => report_file(host, report_args),
        CruxSubcommand::History(history_args) => show_history(host, history_args).await,
        CruxSubcommand::Health(health_args) => check_health(host, health_args).await,
        CruxSubcommand::Init(init_args) => init_config(host, init_args),
    }
}
