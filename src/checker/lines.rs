use crate::i18n::Locale;
use crate::pr::PrData;

use super::{CheckOutcome, Checker, LINES_CHECK_NAME, LineCheck, LineStatus};

pub const DEFAULT_MAX_CHANGES: u64 = 500;

/// Warns when a PR changes more lines than `max_changes`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineCountChecker {
    max_changes: u64,
    locale: Locale,
}

impl Default for LineCountChecker {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_CHANGES)
    }
}

impl LineCountChecker {
    #[must_use]
    pub const fn new(max_changes: u64) -> Self {
        Self {
            max_changes,
            locale: Locale::En,
        }
    }

    #[must_use]
    pub const fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    #[must_use]
    pub const fn max_changes(&self) -> u64 {
        self.max_changes
    }

    /// Counts are not validated: a negative total simply never exceeds the limit.
    #[must_use]
    pub fn check_lines(&self, additions: i64, deletions: i64) -> LineCheck {
        let total = additions.saturating_add(deletions);
        let exceeded = u64::try_from(total).is_ok_and(|t| t > self.max_changes);

        if exceeded {
            LineCheck {
                status: LineStatus::Warning,
                message: self.locale.lines_too_many(total),
            }
        } else {
            LineCheck {
                status: LineStatus::Success,
                message: self.locale.lines_ok(total),
            }
        }
    }
}

impl Checker for LineCountChecker {
    fn name(&self) -> &'static str {
        LINES_CHECK_NAME
    }

    fn check(&self, pr: &PrData) -> CheckOutcome {
        self.check_lines(pr.additions, pr.deletions).into()
    }
}

#[cfg(test)]
#[path = "lines_tests.rs"]
mod tests;
