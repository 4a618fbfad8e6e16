//! Renderer module
//!
//! Renders the run header, the model fallback notice and the final summary as
//! plain human-readable text. Labels are colored on terminals only.

use colored::Colorize;
use num_format::{Locale, ToFormattedString};
use std::io::IsTerminal;
use std::path::Path;

use crate::core::model::ScanResult;

/// Width of the rule printed under the header
const RULE_WIDTH: usize = 40;

/// Turn coloring off when stdout is not a terminal
pub fn configure_color() {
    if !std::io::stdout().is_terminal() {
        colored::control::set_override(false);
    }
}

/// Format a count with `,` thousands separators
pub fn format_count(n: usize) -> String {
    n.to_formatted_string(&Locale::en)
}

/// Lines printed before scanning starts
pub fn render_header(root: &Path, model: &str) -> String {
    format!(
        "{} {}\n{} {}\n{}",
        "Counting tokens in:".bold(),
        root.display(),
        "Using encoding for model:".bold(),
        model,
        "-".repeat(RULE_WIDTH)
    )
}

/// Notice shown when the requested model is unknown to the tokenizer
pub fn render_fallback_notice(model: &str, encoding: &str) -> String {
    format!("Model '{}' not found, using {} encoding", model, encoding)
        .yellow()
        .to_string()
}

/// Final three summary lines
pub fn render_summary(result: &ScanResult) -> String {
    format!(
        "{} {}\n{} {}\n{} {}",
        "Total tokens:".green().bold(),
        format_count(result.total_tokens),
        "Files processed:".bold(),
        format_count(result.files_processed),
        "Files skipped:".bold(),
        format_count(result.files_skipped)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1234), "1,234");
        assert_eq!(format_count(1_234_567), "1,234,567");
    }

    #[test]
    fn test_render_header() {
        let header = render_header(Path::new("/work/project"), "gpt-5");
        assert!(header.contains("Counting tokens in:"));
        assert!(header.contains("/work/project"));
        assert!(header.contains("Using encoding for model:"));
        assert!(header.contains("gpt-5"));
        assert!(header.ends_with(&"-".repeat(40)));
    }

    #[test]
    fn test_render_fallback_notice() {
        let notice = render_fallback_notice("mystery", "o200k_base");
        assert!(notice.contains("Model 'mystery' not found, using o200k_base encoding"));
    }

    #[test]
    fn test_render_summary() {
        let result = ScanResult {
            total_tokens: 1_234_567,
            files_processed: 1200,
            files_skipped: 3,
        };
        let summary = render_summary(&result);

        assert_eq!(summary.lines().count(), 3);
        assert!(summary.contains("Total tokens:"));
        assert!(summary.contains("1,234,567"));
        assert!(summary.contains("Files processed:"));
        assert!(summary.contains("1,200"));
        assert!(summary.contains("Files skipped:"));
        assert!(summary.contains(" 3"));
    }
}
