use chrono::{TimeZone, Utc};

use crate::checker::PrChecker;
use crate::output::OutputFormatter;
use crate::pr::PrData;

use super::JsonFormatter;

fn example_output() -> String {
    let at = Utc.with_ymd_and_hms(2024, 5, 1, 8, 30, 0).unwrap();
    let report = PrChecker::default().report_at(&PrData::example(), at);
    JsonFormatter.format(&report).unwrap()
}

#[test]
fn uses_two_space_indent() {
    let output = example_output();
    assert!(output.starts_with("{\n  \"timestamp\": \"2024-05-01T08:30:00.000Z\",\n  \"prNumber\": 123,"));
    assert!(output.contains("\n    {\n      \"name\": \"Title Format\",\n      \"valid\": true,"));
}

#[test]
fn empty_invalid_files_is_an_array() {
    assert!(example_output().contains("\"invalidFiles\": []"));
}

#[test]
fn output_parses_back_as_json() {
    let value: serde_json::Value = serde_json::from_str(&example_output()).unwrap();
    assert_eq!(value["checks"].as_array().unwrap().len(), 3);
    assert_eq!(value["checks"][1]["status"], "success");
}
