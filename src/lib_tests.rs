use super::*;

#[test]
fn exit_codes_are_distinct() {
    assert_eq!(EXIT_SUCCESS, 0);
    assert_eq!(EXIT_CHECK_FAILED, 1);
    assert_eq!(EXIT_CONFIG_ERROR, 2);
}

#[test]
fn root_api_covers_the_four_operations() {
    let title = validate_pr_title("feat(api): add auth");
    assert!(title.valid);

    let lines = check_changed_lines(150, 30);
    assert_eq!(lines.status, LineStatus::Success);
    assert!(lines.message.contains("180"));

    let files = validate_file_types(&["src/auth.js", "README.md", "image.png"]);
    assert!(!files.valid);
    assert_eq!(files.invalid_files, vec!["image.png".to_string()]);
    assert!(files.message.contains("image.png"));

    let report = generate_check_report(&PrData::example());
    assert_eq!(report.pr_number, 123);
    assert_eq!(report.checks.len(), 3);
    assert!(report.checks.iter().all(|c| c.outcome.is_passed()));
}

#[test]
fn line_threshold_boundary() {
    for (additions, deletions) in [(500, 0), (0, 500), (499, 1), (250, 250)] {
        assert_eq!(
            check_changed_lines(additions, deletions).status,
            LineStatus::Success
        );
    }
    for (additions, deletions) in [(501, 0), (0, 501), (500, 1), (1000, 1000)] {
        assert_eq!(
            check_changed_lines(additions, deletions).status,
            LineStatus::Warning
        );
    }
}
