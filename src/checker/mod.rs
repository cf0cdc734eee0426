mod file_types;
mod lines;
mod result;
mod title;

pub use file_types::{DEFAULT_ALLOWED_EXTENSIONS, FileTypeValidator, extension_of};
pub use lines::{DEFAULT_MAX_CHANGES, LineCountChecker};
pub use result::{CheckOutcome, FileTypeCheck, LineCheck, LineStatus, TitleCheck};
pub use title::{DEFAULT_PREFIXES, TitleValidator};

use crate::config::Config;
use crate::error::Result;
use crate::i18n::Locale;
use crate::pr::PrData;

pub const TITLE_CHECK_NAME: &str = "Title Format";
pub const LINES_CHECK_NAME: &str = "Changed Lines";
pub const FILES_CHECK_NAME: &str = "File Types";

pub trait Checker {
    /// Name under which this check appears in a report.
    fn name(&self) -> &'static str;

    /// Run the check against the relevant fields of `pr`.
    fn check(&self, pr: &PrData) -> CheckOutcome;
}

/// Check a PR title against the default prefixes.
#[must_use]
pub fn validate_pr_title(title: &str) -> TitleCheck {
    TitleValidator::default().validate(title)
}

/// Check the changed-line total against the default threshold of 500.
#[must_use]
pub fn check_changed_lines(additions: i64, deletions: i64) -> LineCheck {
    LineCountChecker::default().check_lines(additions, deletions)
}

/// Check file names against the default extension allowlist.
#[must_use]
pub fn validate_file_types<S: AsRef<str>>(files: &[S]) -> FileTypeCheck {
    FileTypeValidator::default().validate(files)
}

/// The three PR checks, configured together.
///
/// Built from a [`Config`] by the CLI; `PrChecker::default()` uses the fixed
/// defaults that the free functions above use.
#[derive(Debug, Clone, Default)]
pub struct PrChecker {
    title: TitleValidator,
    lines: LineCountChecker,
    files: FileTypeValidator,
    locale: Locale,
}

impl PrChecker {
    /// Build the checkers from a configuration.
    ///
    /// # Errors
    /// Returns an error if the configured title prefixes do not form a valid pattern.
    pub fn from_config(config: &Config) -> Result<Self> {
        let locale = config.locale;
        Ok(Self {
            title: TitleValidator::new(config.title.prefixes.clone())?.with_locale(locale),
            lines: LineCountChecker::new(config.lines.max_changes).with_locale(locale),
            files: FileTypeValidator::new(config.files.allowed_extensions.clone())
                .with_locale(locale),
            locale,
        })
    }

    #[must_use]
    pub const fn locale(&self) -> Locale {
        self.locale
    }

    /// Checkers in report order.
    #[must_use]
    pub fn checkers(&self) -> [&dyn Checker; 3] {
        [&self.title, &self.lines, &self.files]
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
