use crate::error::Result;
use crate::report::Report;

use super::OutputFormatter;

/// Pretty-printed JSON, two-space indent, in the report's own field layout.
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format(&self, report: &Report) -> Result<String> {
        Ok(serde_json::to_string_pretty(report)?)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
