use super::Host;
use super::common::{Common, CommonArgs};
use crate::Result;
use crate::client::HistoryEntry;
use crate::format::format_url;
use crate::model::FormFactor;
use crate::model::rating::UNRATED;
use clap::Parser;
use core::fmt::Write as _;
use ohno::IntoAppError;
use std::io::Write;

#[derive(Parser, Debug)]
pub struct HistoryArgs {
    /// Show at most this many entries
    #[arg(long, value_name = "N")]
    pub limit: Option<usize>,

    #[command(flatten)]
    pub common: CommonArgs,
}

pub async fn show_history<H: Host>(host: &mut H, args: &HistoryArgs) -> Result<()> {
    let mut common = Common::new(host, &args.common)?;
    let client = common.client()?;

    let entries = match client.history().await {
        Ok(entries) => entries,
        Err(e) => {
            common.fail(&e);
            return Err(e).into_app_err("retrieving analysis history");
        }
    };

    let mut output = String::new();
    generate(&entries, args.limit, common.config.url_display_width, &mut output)?;
    let _ = write!(common.output(), "{output}");
    Ok(())
}

fn generate<W: core::fmt::Write>(entries: &[HistoryEntry], limit: Option<usize>, url_width: usize, writer: &mut W) -> Result<()> {
    if entries.is_empty() {
        writeln!(writer, "No analyses recorded yet.")?;
        return Ok(());
    }

    let shown = limit.unwrap_or(entries.len()).min(entries.len());
    writeln!(writer, "Showing {shown} of {} past analyses", entries.len())?;
    writeln!(writer)?;

    for entry in entries.iter().take(shown) {
        let mut line = String::new();
        write!(
            line,
            "{}  {:<11}  {:<17}  {}",
            entry.created_at.format("%Y-%m-%d %H:%M"),
            device_label(entry),
            entry.overall_performance.as_deref().filter(|r| !r.is_empty()).unwrap_or(UNRATED),
            format_url(&entry.url, url_width)
        )?;
        writeln!(writer, "{}", line.trim_end())?;
    }

    Ok(())
}

fn device_label(entry: &HistoryEntry) -> &str {
    match entry.form_factor.as_deref() {
        None | Some("") => "-",
        Some(raw) => raw.parse::<FormFactor>().map_or(raw, |f| f.display_name()),
    }
}
