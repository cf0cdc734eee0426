use std::fmt::Write;

use crate::checker::CheckOutcome;
use crate::error::Result;
use crate::i18n::Locale;
use crate::report::Report;

use super::OutputFormatter;

/// GitHub-flavored markdown, suitable for posting as a PR comment.
pub struct MarkdownFormatter {
    locale: Locale,
}

impl MarkdownFormatter {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            locale: Locale::En,
        }
    }

    #[must_use]
    pub const fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    const fn status_cell(outcome: &CheckOutcome) -> &'static str {
        if outcome.is_failed() {
            "❌ Failed"
        } else if outcome.is_warning() {
            "⚠️ Warning"
        } else {
            "✅ Passed"
        }
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|").replace('\n', " ")
}

impl OutputFormatter for MarkdownFormatter {
    fn format(&self, report: &Report) -> Result<String> {
        let mut output = String::new();
        let header = self.locale.report_header().trim_end_matches(':');

        let _ = writeln!(output, "## {header} #{}", report.pr_number);
        output.push('\n');
        let _ = writeln!(output, "_Checked at `{}`_", report.timestamp);
        output.push('\n');

        output.push_str("| Status | Check | Message |\n");
        output.push_str("|--------|-------|---------|\n");
        for check in &report.checks {
            let _ = writeln!(
                output,
                "| {} | {} | {} |",
                Self::status_cell(&check.outcome),
                check.name,
                escape_cell(check.outcome.message())
            );
        }

        let invalid_files = report.checks.iter().find_map(|c| match &c.outcome {
            CheckOutcome::Files(files) if !files.invalid_files.is_empty() => {
                Some(&files.invalid_files)
            }
            _ => None,
        });
        if let Some(files) = invalid_files {
            output.push('\n');
            output.push_str("### Disallowed files\n\n");
            for file in files {
                let _ = writeln!(output, "- `{file}`");
            }
        }

        let (passed, warnings, failed) = report.tally();
        output.push('\n');
        let _ = writeln!(
            output,
            "**{passed}** passed, **{warnings}** warnings, **{failed}** failed"
        );

        Ok(output)
    }
}

#[cfg(test)]
#[path = "markdown_tests.rs"]
mod tests;
