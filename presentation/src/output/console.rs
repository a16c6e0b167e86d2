//! Console output formatter for conversion results

use colored::Colorize;
use dpr_gold_application::{ConvertError, ConvertOutput, ErrorKind};

/// Formats conversion results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// One-line summary of a successful run
    pub fn format_summary(output: &ConvertOutput) -> String {
        format!(
            "{} Wrote {} {} to {} (from {})",
            "v".green(),
            output.records_written.to_string().bold(),
            Self::records_noun(output.records_written),
            output.destination.cyan(),
            output.source
        )
    }

    /// Label for the failure class, as shown before the error chain
    pub fn error_label(err: &ConvertError) -> &'static str {
        match err.kind() {
            ErrorKind::Path => "path error",
            ErrorKind::Format => "format error",
        }
    }

    fn records_noun(count: usize) -> &'static str {
        if count == 1 { "record" } else { "records" }
    }
}
