use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

use crate::checker::{CheckOutcome, PrChecker};
use crate::pr::PrData;

/// One entry of a report: the check name followed by the check's own fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NamedCheck {
    pub name: String,
    #[serde(flatten)]
    pub outcome: CheckOutcome,
}

/// Check results for a single pull request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    /// ISO-8601 UTC with millisecond precision, e.g. `2024-05-01T08:30:00.000Z`.
    pub timestamp: String,
    pub pr_number: u64,
    pub checks: Vec<NamedCheck>,
}

impl Report {
    #[must_use]
    pub fn has_failures(&self) -> bool {
        self.checks.iter().any(|c| c.outcome.is_failed())
    }

    #[must_use]
    pub fn has_warnings(&self) -> bool {
        self.checks.iter().any(|c| c.outcome.is_warning())
    }

    #[must_use]
    pub fn is_passing(&self) -> bool {
        self.checks.iter().all(|c| c.outcome.is_passed())
    }

    /// Counts of (passed, warnings, failed) checks.
    #[must_use]
    pub fn tally(&self) -> (usize, usize, usize) {
        self.checks.iter().fold((0, 0, 0), |(p, w, f), c| {
            if c.outcome.is_failed() {
                (p, w, f + 1)
            } else if c.outcome.is_warning() {
                (p, w + 1, f)
            } else {
                (p + 1, w, f)
            }
        })
    }
}

#[must_use]
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

impl PrChecker {
    /// Run all checks on `pr`, stamping the report with the current time.
    #[must_use]
    pub fn report(&self, pr: &PrData) -> Report {
        self.report_at(pr, Utc::now())
    }

    /// Run all checks on `pr` with a fixed timestamp.
    #[must_use]
    pub fn report_at(&self, pr: &PrData, at: DateTime<Utc>) -> Report {
        let checks = self
            .checkers()
            .iter()
            .map(|checker| NamedCheck {
                name: checker.name().to_string(),
                outcome: checker.check(pr),
            })
            .collect();

        Report {
            timestamp: format_timestamp(at),
            pr_number: pr.number,
            checks,
        }
    }
}

/// Run the title, changed-lines and file type checks with default settings.
#[must_use]
pub fn generate_check_report(pr: &PrData) -> Report {
    PrChecker::default().report(pr)
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
