use chrono::{TimeZone, Utc};

use crate::checker::PrChecker;
use crate::pr::PrData;

use super::*;

fn report_for(pr: &PrData) -> Report {
    let at = Utc.with_ymd_and_hms(2024, 5, 1, 8, 30, 0).unwrap();
    PrChecker::default().report_at(pr, at)
}

#[test]
fn formats_heading_and_table() {
    let output = MarkdownFormatter::new()
        .format(&report_for(&PrData::example()))
        .unwrap();

    assert!(output.starts_with("## PR Check Report #123\n"));
    assert!(output.contains("_Checked at `2024-05-01T08:30:00.000Z`_"));
    assert!(output.contains("| Status | Check | Message |"));
    assert!(output.contains("| ✅ Passed | Title Format | PR title format is valid |"));
    assert!(output.contains("**3** passed, **0** warnings, **0** failed"));
    assert!(!output.contains("### Disallowed files"));
}

#[test]
fn lists_disallowed_files() {
    let pr = PrData {
        files: vec!["a.png".to_string(), "b.md".to_string(), "c.exe".to_string()],
        ..PrData::example()
    };
    let output = MarkdownFormatter::new().format(&report_for(&pr)).unwrap();

    assert!(output.contains("| ❌ Failed | File Types |"));
    assert!(output.contains("### Disallowed files\n\n- `a.png`\n- `c.exe`\n"));
}

#[test]
fn marks_warnings() {
    let pr = PrData {
        additions: 1000,
        ..PrData::example()
    };
    let output = MarkdownFormatter::new().format(&report_for(&pr)).unwrap();
    assert!(output.contains("| ⚠️ Warning | Changed Lines |"));
}

#[test]
fn escapes_pipes_in_cells() {
    assert_eq!(escape_cell("a|b\nc"), "a\\|b c");
}

#[test]
fn localized_heading() {
    let output = MarkdownFormatter::new()
        .with_locale(Locale::ZhCn)
        .format(&report_for(&PrData::example()))
        .unwrap();
    assert!(output.starts_with("## PR 检查报告 #123\n"));
}
