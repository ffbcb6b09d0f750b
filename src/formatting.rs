// src/formatting.rs

use crate::core::{LogRow, Report};
use std::borrow::Cow;

/// A trait for formatting a sequence of log rows into a single report.
pub trait ReportFormatter: Send + Sync {
    fn format(&self, rows: &[LogRow]) -> Report;
}

/// Renders one `[timestamp] User: actor action action` line per row.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextFormatter;

impl PlainTextFormatter {
    fn format_line(&self, row: &LogRow) -> String {
        format!(
            "[{}] User: {} action {}",
            single_line(row.timestamp()),
            single_line(row.actor()),
            single_line(row.action())
        )
    }
}

/// Escapes line breaks so a field can never span more than one report line.
fn single_line(field: &str) -> Cow<'_, str> {
    if field.contains(['\r', '\n']) {
        Cow::Owned(field.replace('\r', "\\r").replace('\n', "\\n"))
    } else {
        Cow::Borrowed(field)
    }
}

impl ReportFormatter for PlainTextFormatter {
    fn format(&self, rows: &[LogRow]) -> Report {
        let lines: Vec<String> = rows.iter().map(|row| self.format_line(row)).collect();
        Report::new(lines.join("\n"))
    }
}
