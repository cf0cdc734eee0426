use super::*;

#[test]
fn extension_includes_dot() {
    assert_eq!(extension_of("src/auth.js"), ".js");
    assert_eq!(extension_of("archive.tar.gz"), ".gz");
    assert_eq!(extension_of(".eslintrc"), ".eslintrc");
}

#[test]
fn name_without_dot_is_its_own_extension() {
    assert_eq!(extension_of("Makefile"), "Makefile");
    assert!(!FileTypeValidator::default().is_allowed("Makefile"));
}

#[test]
fn directory_dots_do_not_count_after_last_dot() {
    // The last dot wins even when it sits in a directory name.
    assert_eq!(extension_of("v1.2/LICENSE"), ".2/LICENSE");
}

#[test]
fn all_allowed_files_pass() {
    let files = ["src/auth.js", "src/App.tsx", "package.json", "README.md", "ci.yml"];
    let result = FileTypeValidator::default().validate(&files);
    assert!(result.valid);
    assert!(result.invalid_files.is_empty());
    assert_eq!(result.message, "All file types are allowed");
}

#[test]
fn flags_disallowed_file() {
    let result = FileTypeValidator::default().validate(&["src/auth.js", "README.md", "image.png"]);
    assert!(!result.valid);
    assert_eq!(result.invalid_files, vec!["image.png".to_string()]);
    assert!(result.message.contains("image.png"));
}

#[test]
fn keeps_input_order_of_invalid_files() {
    let result = FileTypeValidator::default().validate(&["b.rs", "a.md", "a.py", "Dockerfile"]);
    assert_eq!(
        result.invalid_files,
        vec!["b.rs".to_string(), "a.py".to_string(), "Dockerfile".to_string()]
    );
    assert_eq!(
        result.message,
        "Found disallowed file types: b.rs, a.py, Dockerfile"
    );
}

#[test]
fn comparison_is_case_sensitive() {
    assert!(!FileTypeValidator::default().validate(&["README.MD"]).valid);
}

#[test]
fn empty_file_list_is_valid() {
    let files: [&str; 0] = [];
    assert!(FileTypeValidator::default().validate(&files).valid);
}

#[test]
fn custom_allowlist() {
    let validator = FileTypeValidator::new(vec![".rs".to_string(), "Makefile".to_string()]);
    assert!(validator.validate(&["src/lib.rs", "Makefile"]).valid);
    assert!(!validator.validate(&["src/lib.js"]).valid);
    assert_eq!(validator.allowed_extensions().len(), 2);
}

#[test]
fn localized_message() {
    let validator = FileTypeValidator::default().with_locale(Locale::ZhCn);
    assert_eq!(
        validator.validate(&["x.png"]).message,
        "发现不允许的文件类型: x.png"
    );
}

#[test]
fn checker_reads_pr_files() {
    let pr = PrData {
        files: vec!["logo.svg".to_string()],
        ..PrData::default()
    };
    let outcome = Checker::check(&FileTypeValidator::default(), &pr);
    assert!(outcome.is_failed());
    assert_eq!(FileTypeValidator::default().name(), "File Types");
}
