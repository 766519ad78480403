//! Human-readable text output writer
//!
//! Produces plain text suitable for terminal display:
//! ```text
//! db/changelog.yaml:4:7 [yaml] in databaseChangeLog > changeSet
//!   createTable  Creates a new table.
//!   addColumn    Adds columns to an existing table.
//! ```

use std::fmt::Write as FmtWrite;
use std::io::Write;

use crate::output::{CompletionReport, SuggestionWriter, TextWriter, WriteError};

/// Format the whole report as a text block.
fn format_report(report: &CompletionReport) -> String {
    let context = if report.context.active_tags.is_empty() {
        "at document root".to_string()
    } else {
        format!("in {}", report.context.active_tags.join(" > "))
    };

    let mut buf = String::new();
    let _ = writeln!(
        buf,
        "{}:{}:{} [{}] {}",
        report.file, report.line, report.column, report.format, context
    );

    if report.suggestions.is_empty() {
        let _ = writeln!(buf, "  no elements admissible here");
        return buf;
    }

    let width = report
        .suggestions
        .iter()
        .map(|s| s.label.len())
        .max()
        .unwrap_or(0);
    for suggestion in &report.suggestions {
        let _ = writeln!(
            buf,
            "  {:width$}  {}",
            suggestion.label, suggestion.documentation
        );
    }
    buf
}

impl SuggestionWriter for TextWriter {
    fn emit(&self, report: &CompletionReport, out: &mut dyn Write) -> Result<(), WriteError> {
        out.write_all(format_report(report).as_bytes())?;
        out.flush()?;
        Ok(())
    }
}
