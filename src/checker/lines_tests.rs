use super::*;

#[test]
fn small_change_succeeds() {
    let result = LineCountChecker::default().check_lines(150, 30);
    assert_eq!(result.status, LineStatus::Success);
    assert!(result.message.contains("180"));
}

#[test]
fn exactly_at_threshold_succeeds() {
    let result = LineCountChecker::default().check_lines(250, 250);
    assert_eq!(result.status, LineStatus::Success);
}

#[test]
fn one_over_threshold_warns() {
    let result = LineCountChecker::default().check_lines(251, 250);
    assert_eq!(result.status, LineStatus::Warning);
    assert_eq!(
        result.message,
        "Large change (501 lines), consider splitting it into multiple PRs"
    );
}

#[test]
fn zero_change_succeeds() {
    assert_eq!(
        LineCountChecker::default().check_lines(0, 0).status,
        LineStatus::Success
    );
}

#[test]
fn negative_counts_pass_through() {
    let result = LineCountChecker::default().check_lines(-700, 100);
    assert_eq!(result.status, LineStatus::Success);
    assert!(result.message.contains("-600"));
}

#[test]
fn overflow_saturates() {
    let result = LineCountChecker::default().check_lines(i64::MAX, 1);
    assert_eq!(result.status, LineStatus::Warning);
}

#[test]
fn custom_threshold() {
    let checker = LineCountChecker::new(10);
    assert_eq!(checker.max_changes(), 10);
    assert_eq!(checker.check_lines(5, 5).status, LineStatus::Success);
    assert_eq!(checker.check_lines(5, 6).status, LineStatus::Warning);
}

#[test]
fn zero_threshold_warns_on_any_change() {
    let checker = LineCountChecker::new(0);
    assert_eq!(checker.check_lines(0, 0).status, LineStatus::Success);
    assert_eq!(checker.check_lines(1, 0).status, LineStatus::Warning);
}

#[test]
fn localized_message() {
    let checker = LineCountChecker::default().with_locale(Locale::ZhCn);
    assert_eq!(checker.check_lines(150, 30).message, "变更行数合理 (180 行)");
}

#[test]
fn checker_reads_pr_counts() {
    let pr = PrData {
        additions: 400,
        deletions: 200,
        ..PrData::default()
    };
    let outcome = Checker::check(&LineCountChecker::default(), &pr);
    assert!(outcome.is_warning());
}
