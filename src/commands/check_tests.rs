use std::fs;
use std::path::PathBuf;

use clap::Parser;
use tempfile::TempDir;

use super::*;
use crate::cli::Commands;
use crate::i18n::Locale;

fn check_args(argv: &[&str]) -> CheckArgs {
    let mut full = vec!["pr-check", "check"];
    full.extend_from_slice(argv);
    match Cli::parse_from(full).command {
        Some(Commands::Check(args)) => args,
        _ => panic!("Expected Check command"),
    }
}

fn report_with(additions: i64, title: &str) -> Report {
    let pr = PrData {
        additions,
        title: title.to_string(),
        ..PrData::example()
    };
    PrChecker::default().report(&pr)
}

#[test]
fn overrides_apply_to_config() {
    let args = check_args(&["-", "--max-changes", "10", "--locale", "zh-CN", "--strict"]);
    let mut config = Config::default();
    apply_cli_overrides(&mut config, &args);

    assert_eq!(config.lines.max_changes, 10);
    assert_eq!(config.locale, Locale::ZhCn);
    assert!(config.check.strict);
}

#[test]
fn no_overrides_keep_config() {
    let args = check_args(&["-"]);
    let mut config = Config::default();
    config.check.strict = true;
    apply_cli_overrides(&mut config, &args);
    assert_eq!(config.lines.max_changes, 500);
    assert!(config.check.strict);
}

#[test]
fn read_pr_from_inline_flags() {
    let args = check_args(&["--title", "fix: x", "--additions", "2", "--file", "a.md"]);
    let pr = read_pr(&args).unwrap();
    assert_eq!(pr.number, 0);
    assert_eq!(pr.title, "fix: x");
    assert_eq!(pr.additions, 2);
    assert_eq!(pr.deletions, 0);
    assert_eq!(pr.files, vec!["a.md".to_string()]);
}

#[test]
fn read_pr_from_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("pr.json");
    fs::write(&path, r#"{"number": 5, "title": "docs: x", "files": []}"#).unwrap();

    let args = CheckArgs {
        input: Some(PathBuf::from(&path)),
        ..check_args(&[])
    };
    assert_eq!(read_pr(&args).unwrap().number, 5);
}

#[test]
fn read_pr_without_input_is_an_error() {
    let err = read_pr(&check_args(&[])).unwrap_err();
    assert!(matches!(err, PrCheckError::InvalidInput(_)));
}

#[test]
fn exit_code_success_for_passing_report() {
    let report = report_with(150, "feat: ok");
    assert_eq!(exit_code_for(&report, false, false), EXIT_SUCCESS);
    assert_eq!(exit_code_for(&report, false, true), EXIT_SUCCESS);
}

#[test]
fn exit_code_fails_on_invalid_title() {
    let report = report_with(150, "bad title");
    assert_eq!(exit_code_for(&report, false, false), EXIT_CHECK_FAILED);
    assert_eq!(exit_code_for(&report, true, false), EXIT_SUCCESS);
}

#[test]
fn warnings_only_fail_in_strict_mode() {
    let report = report_with(1000, "feat: big");
    assert_eq!(exit_code_for(&report, false, false), EXIT_SUCCESS);
    assert_eq!(exit_code_for(&report, false, true), EXIT_CHECK_FAILED);
}

#[test]
fn json_output_ends_with_newline() {
    let report = report_with(1, "feat: ok");
    let output =
        format_report(OutputFormat::Json, &report, ColorMode::Never, &Config::default()).unwrap();
    assert!(output.ends_with("}\n"));
}

#[test]
fn text_output_uses_config_locale() {
    let report = report_with(1, "feat: ok");
    let mut config = Config::default();
    config.locale = Locale::ZhCn;
    let output = format_report(OutputFormat::Text, &report, ColorMode::Never, &config).unwrap();
    assert!(output.starts_with("PR 检查报告:"));
}
