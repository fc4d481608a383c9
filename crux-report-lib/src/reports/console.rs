use super::{ReportOptions, common};
use crate::Result;
use crate::format::{PerformanceColor, format_p75, format_ratio, format_url, good_ratio_color, performance_color};
use crate::model::UrlResult;
use crate::model::rating::{GOOD, NEEDS_IMPROVEMENT, POOR, UNRATED};
use crate::pipeline::{RatingSummary, ReportView};
use crate::schema::{catalog, lookup};
use core::fmt::Write;
use owo_colors::OwoColorize;
use terminal_size::{Width, terminal_size};

pub fn generate<W: Write>(view: &ReportView<'_>, options: &ReportOptions, writer: &mut W) -> Result<()> {
    write_summary(view, options, writer)?;

    if view.is_no_match() {
        writeln!(writer)?;
        writeln!(writer, "No results match the current filters.")?;
    }

    let max_name_len = view.schema.names().iter().map(|n| n.chars().count()).max().unwrap_or(0);

    for (index, row) in view.rows.iter().enumerate() {
        writeln!(writer)?;
        if index > 0 {
            writeln!(writer, "═══════════════════════════════════════")?;
            writeln!(writer)?;
        }

        write_row(view, row, max_name_len, options, writer)?;
    }

    write_metric_stats(view, options, writer)?;

    if let Some(note) = view.note() {
        writeln!(writer)?;
        let prefix = "Note: ";
        for line in wrap_text(&format!("{prefix}{note}"), get_terminal_width(), prefix.len()) {
            writeln!(writer, "{line}")?;
        }
    }

    if let Some(error) = view.summary_error() {
        writeln!(writer)?;
        writeln!(writer, "Summary unavailable: {error}")?;
    }

    Ok(())
}

fn write_summary<W: Write>(view: &ReportView<'_>, options: &ReportOptions, writer: &mut W) -> Result<()> {
    let heading = "Core Web Vitals";
    if options.use_colors {
        writeln!(writer, "{}", heading.bold())?;
    } else {
        writeln!(writer, "{heading}")?;
    }

    let breakdown = match &view.ratings {
        RatingSummary::NoData => {
            writeln!(writer, "  No URLs were analyzed.")?;
            return Ok(());
        }
        RatingSummary::Breakdown(b) => b,
    };

    writeln!(writer, "  {} URL(s) analyzed", breakdown.total)?;

    let lines = [
        (GOOD, breakdown.good_count, Some(breakdown.good_percentage)),
        (NEEDS_IMPROVEMENT, breakdown.needs_improvement_count, Some(breakdown.needs_improvement_percentage)),
        (POOR, breakdown.poor_count, Some(breakdown.poor_percentage)),
        (UNRATED, breakdown.unknown_count, None),
    ];

    let width = lines.iter().map(|(label, _, _)| label.len()).max().unwrap_or(0);
    for (label, count, percentage) in lines {
        let padded = format!("{label:<width$}");
        let shown = paint(&padded, performance_color(Some(label)), options.use_colors);
        match percentage {
            Some(p) => writeln!(writer, "  {shown} : {count} ({p}%)")?,
            None => writeln!(writer, "  {shown} : {count}")?,
        }
    }

    if let Some(criteria) = common::describe_criteria(view) {
        writeln!(writer)?;
        writeln!(
            writer,
            "Showing {} of {} ({} active: {criteria})",
            view.rows.len(),
            breakdown.total,
            view.active_count()
        )?;
    }

    Ok(())
}

fn write_row<W: Write>(view: &ReportView<'_>, row: &UrlResult, max_name_len: usize, options: &ReportOptions, writer: &mut W) -> Result<()> {
    let url = format_url(&row.url, options.url_width);
    let rating = common::rating_label(row);
    let rating = paint(rating, performance_color(row.rating()), options.use_colors);

    if options.use_colors {
        writeln!(writer, "{} [{rating}]", url.bold())?;
    } else {
        writeln!(writer, "{url} [{rating}]")?;
    }

    writeln!(
        writer,
        "  {} · {}",
        row.form_factor.display_name(),
        row.created_at.format("%Y-%m-%d %H:%M UTC")
    )?;

    for name in view.schema.names() {
        let unit = catalog::unit_for(name, &options.unit);
        let cell = match lookup(row, name).sample() {
            None => "N/A".to_string(),
            Some(sample) => {
                let value = format_p75(sample.p75_value, unit);
                match sample.good_ratio {
                    Some(ratio) => {
                        let good = format!("{} good", format_ratio(Some(ratio)));
                        format!("{value}  ({})", paint(&good, good_ratio_color(Some(ratio)), options.use_colors))
                    }
                    None => value,
                }
            }
        };

        let padding = max_name_len.saturating_sub(name.chars().count());
        writeln!(writer, "  {name}{:padding$} : {cell}", "")?;
    }

    Ok(())
}

fn write_metric_stats<W: Write>(view: &ReportView<'_>, options: &ReportOptions, writer: &mut W) -> Result<()> {
    let stats = view.summary_stats();
    if stats.is_empty() {
        return Ok(());
    }

    writeln!(writer)?;
    if options.use_colors {
        writeln!(writer, "{}", "Per-metric summary".bold())?;
    } else {
        writeln!(writer, "Per-metric summary")?;
    }

    for stat in stats {
        let unit = catalog::unit_for(&stat.metric_name, &options.unit);
        let best = stat.best_url.as_deref().map_or_else(|| "N/A".to_string(), |u| format_url(u, options.url_width));
        let worst = stat.worst_url.as_deref().map_or_else(|| "N/A".to_string(), |u| format_url(u, options.url_width));

        writeln!(writer, "  {}", stat.metric_name)?;
        writeln!(writer, "    average : {}", format_p75(stat.average_p75, unit))?;
        writeln!(writer, "    best    : {best} ({})", format_p75(stat.best_value, unit))?;
        writeln!(writer, "    worst   : {worst} ({})", format_p75(stat.worst_value, unit))?;
    }

    Ok(())
}

fn paint(text: &str, color: PerformanceColor, use_colors: bool) -> String {
    if !use_colors {
        return text.to_string();
    }

    match color {
        PerformanceColor::Green => text.green().to_string(),
        PerformanceColor::Amber => text.yellow().to_string(),
        PerformanceColor::Red => text.red().to_string(),
        PerformanceColor::Gray => text.bright_black().to_string(),
    }
}

/// Get the terminal width, defaulting to 80 if not detectable
fn get_terminal_width() -> usize {
    terminal_size().map_or(80, |(Width(w), _)| w as usize)
}

/// Word-wrap text to fit within a given width, with indentation for continuation lines
fn wrap_text(text: &str, width: usize, indent: usize) -> Vec<String> {
    if width <= indent {
        return vec![text.to_string()];
    }

    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let current_width = if lines.is_empty() { 0 } else { indent } + current.chars().count();
        let needed = usize::from(!current.is_empty()) + word.chars().count();

        if !current.is_empty() && current_width + needed > width {
            push_line(&mut lines, core::mem::take(&mut current), indent);
        } else if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }

    if !current.is_empty() || lines.is_empty() {
        push_line(&mut lines, current, indent);
    }

    lines
}

fn push_line(lines: &mut Vec<String>, line: String, indent: usize) {
    if lines.is_empty() {
        lines.push(line);
    } else {
        lines.push(format!("{:indent$}{line}", ""));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AnalysisResponse, MetricSample, SummaryStat};
    use crate::pipeline::{FilterCriteria, SortSpec, build_view};
    use chrono::{TimeZone, Utc};

    const LCP: &str = "Largest Contentful Paint (LCP)";
    const CLS: &str = "Cumulative Layout Shift (CLS)";

    fn response() -> AnalysisResponse {
        let at = Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap();
        let mut response = AnalysisResponse::new(
            "s1",
            vec![
                UrlResult::new(
                    "https://example.com/",
                    Some("Good"),
                    vec![
                        MetricSample::new(LCP, Some(1800.0)).with_ratios(Some(0.82), Some(0.12), Some(0.06)),
                        MetricSample::new(CLS, Some(0.05)),
                    ],
                    at,
                ),
                UrlResult::new("https://example.org/", Some("Poor"), vec![MetricSample::new(LCP, Some(4200.0))], at),
            ],
        );
        response.summary = Some(vec![SummaryStat {
            metric_name: LCP.into(),
            average_p75: Some(3000.0),
            best_url: Some("https://example.com/".into()),
            best_value: Some(1800.0),
            worst_url: Some("https://example.org/".into()),
            worst_value: Some(4200.0),
        }]);
        response
    }

    fn render(view: &ReportView<'_>, use_colors: bool) -> String {
        let options = ReportOptions {
            use_colors,
            ..ReportOptions::default()
        };
        let mut output = String::new();
        generate(view, &options, &mut output).unwrap();
        output
    }

    #[test]
    fn test_summary_and_rows() {
        let response = response();
        let view = build_view(&response, &FilterCriteria::default(), &SortSpec::default());
        let output = render(&view, false);

        assert!(output.contains("2 URL(s) analyzed"));
        assert!(output.contains("Good              : 1 (50.0%)"));
        assert!(output.contains("Poor              : 1 (50.0%)"));
        assert!(output.contains("Unknown           : 0"));
        assert!(output.contains("https://example.com/ [Good]"));
        assert!(output.contains("All Devices · 2024-01-15 10:30 UTC"));
        assert!(output.contains("1,800ms  (82.0% good)"));
        assert!(output.contains(&format!("  {CLS}  : N/A")));
        assert!(output.contains("═══════════════════════════════════════"));
        assert!(!output.contains("Showing"));
    }

    #[test]
    fn test_metric_stats_section() {
        let response = response();
        let view = build_view(&response, &FilterCriteria::default(), &SortSpec::default());
        let output = render(&view, false);

        assert!(output.contains("Per-metric summary"));
        assert!(output.contains("average : 3,000ms"));
        assert!(output.contains("worst   : https://example.org/ (4,200ms)"));
    }

    #[test]
    fn test_no_match() {
        let response = response();
        let view = build_view(&response, &FilterCriteria::new(Some("Needs Improvement"), None), &SortSpec::default());
        let output = render(&view, false);

        assert!(output.contains("Showing 0 of 2 (1 active: rating = Needs Improvement)"));
        assert!(output.contains("No results match the current filters."));
    }

    #[test]
    fn test_empty_response() {
        let response = AnalysisResponse::new("s", vec![]);
        let view = build_view(&response, &FilterCriteria::default(), &SortSpec::default());
        let output = render(&view, false);

        assert!(output.contains("No URLs were analyzed."));
        assert!(!output.contains("No results match"));
    }

    #[test]
    fn test_note_and_summary_error() {
        let mut response = response();
        response.note = Some("Some URLs had no field data.".into());
        response.summary_error = Some("not enough data".into());
        let view = build_view(&response, &FilterCriteria::default(), &SortSpec::default());
        let output = render(&view, false);

        assert!(output.contains("Note: Some URLs had no field data."));
        assert!(output.contains("Summary unavailable: not enough data"));
    }

    #[test]
    fn test_color_mode_never() {
        let response = response();
        let view = build_view(&response, &FilterCriteria::default(), &SortSpec::default());
        assert!(!render(&view, false).contains("\x1b["));
        assert!(render(&view, true).contains("\x1b["));
    }

    #[test]
    fn test_wrap_text_short() {
        let lines = wrap_text("short text", 80, 10);
        assert_eq!(lines, vec!["short text"]);
    }

    #[test]
    fn test_wrap_text_long() {
        let text = "This is a very long text that should be wrapped at word boundaries when it exceeds the specified width";
        let lines = wrap_text(text, 40, 10);
        assert!(lines.len() > 1);
        assert!(!lines[0].starts_with(' '));
        assert!(lines[1].starts_with("          "));
        assert!(lines.iter().all(|l| l.chars().count() <= 40));
    }

    #[test]
    fn test_wrap_text_exact_fit() {
        assert_eq!(wrap_text("word1 word2 word3", 17, 5).len(), 1);
    }

    #[test]
    fn test_wrap_text_empty() {
        assert_eq!(wrap_text("", 80, 10), vec![""]);
    }
}
