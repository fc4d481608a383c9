use super::common;
use crate::Result;
use crate::pipeline::ReportView;
use core::fmt::Write;
use std::borrow::Cow;

pub fn generate<W: Write>(view: &ReportView<'_>, unit: &str, writer: &mut W) -> Result<()> {
    write!(writer, "URL,Device,Overall Rating,Analyzed At")?;
    for name in view.schema.names() {
        write!(writer, ",{}", escape_csv(name))?;
    }
    writeln!(writer)?;

    for row in &view.rows {
        write!(
            writer,
            "{},{},{},{}",
            escape_csv(&row.url),
            row.form_factor.display_name(),
            escape_csv(common::rating_label(row)),
            row.created_at.to_rfc3339()
        )?;

        for name in view.schema.names() {
            match common::metric_cell(row, name, unit) {
                Some(cell) => write!(writer, ",{}", escape_csv(&cell))?,
                None => write!(writer, ",")?,
            }
        }
        writeln!(writer)?;
    }

    Ok(())
}

/// Escape a value for RFC compliant CSV output.
///
/// Wraps the value in double quotes if it contains commas, newlines, or double quotes.
/// Internal double quotes are doubled per the RFC.
fn escape_csv(s: &str) -> Cow<'_, str> {
    if s.contains('"') {
        Cow::Owned(format!("\"{}\"", s.replace('"', "\"\"")))
    } else if s.contains(',') || s.contains('\n') || s.contains('\r') {
        Cow::Owned(format!("\"{s}\""))
    } else {
        Cow::Borrowed(s)
    }
}
