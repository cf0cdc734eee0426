use std::fmt::Write;

use crate::checker::CheckOutcome;
use crate::error::Result;
use crate::i18n::Locale;
use crate::report::{NamedCheck, Report};

use super::{ColorMode, OutputFormatter, ansi, is_no_color_set};

pub struct TextFormatter {
    use_colors: bool,
    locale: Locale,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self {
            use_colors: Self::should_use_colors(mode),
            locale: Locale::default(),
        }
    }

    #[must_use]
    pub const fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                if is_no_color_set() {
                    return false;
                }
                std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }

    const fn status_icon(outcome: &CheckOutcome) -> &'static str {
        if outcome.is_failed() {
            "✗"
        } else if outcome.is_warning() {
            "⚠"
        } else {
            "✓"
        }
    }

    const fn status_text(outcome: &CheckOutcome) -> &'static str {
        if outcome.is_failed() {
            "FAILED"
        } else if outcome.is_warning() {
            "WARNING"
        } else {
            "PASSED"
        }
    }

    fn colorize(&self, text: &str, outcome: &CheckOutcome) -> String {
        if !self.use_colors {
            return text.to_string();
        }

        let color = if outcome.is_failed() {
            ansi::RED
        } else if outcome.is_warning() {
            ansi::YELLOW
        } else {
            ansi::GREEN
        };

        format!("{color}{text}{}", ansi::RESET)
    }

    fn format_check(&self, check: &NamedCheck, output: &mut String) {
        let icon = Self::status_icon(&check.outcome);
        let status = self.colorize(Self::status_text(&check.outcome), &check.outcome);

        let _ = writeln!(output, "{icon} {status}: {}", check.name);
        let _ = writeln!(output, "   {}", check.outcome.message());

        if let CheckOutcome::Files(files) = &check.outcome {
            for file in &files.invalid_files {
                let _ = writeln!(output, "   - {file}");
            }
        }
    }

    fn format_summary(&self, report: &Report, output: &mut String) {
        let (passed, warnings, failed) = report.tally();
        let summary = format!(
            "Summary: {} checks, {passed} passed, {warnings} warnings, {failed} failed",
            report.checks.len()
        );
        if self.use_colors {
            let _ = writeln!(output, "{}{summary}{}", ansi::BOLD, ansi::RESET);
        } else {
            let _ = writeln!(output, "{summary}");
        }
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, report: &Report) -> Result<String> {
        let mut output = String::new();

        let _ = writeln!(
            output,
            "{} #{} ({})",
            self.locale.report_header(),
            report.pr_number,
            report.timestamp
        );
        output.push('\n');

        for check in &report.checks {
            self.format_check(check, &mut output);
        }

        output.push('\n');
        self.format_summary(report, &mut output);

        Ok(output)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
