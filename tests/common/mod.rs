#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the pr-check binary.
#[macro_export]
macro_rules! pr_check {
    () => {{
        #[allow(deprecated)]
        let cmd = assert_cmd::Command::cargo_bin("pr-check").expect("binary should exist");
        cmd
    }};
}

/// A passing PR description in the JSON shape `pr-check check` reads.
pub const PASSING_PR: &str = r#"{
  "number": 123,
  "title": "feat(api): add auth",
  "additions": 150,
  "deletions": 30,
  "files": ["src/auth.js", "src/utils.js", "README.md"]
}"#;

/// A PR that fails the title and file checks and warns on size.
pub const FAILING_PR: &str = r#"{
  "number": 77,
  "title": "Update everything",
  "additions": 450,
  "deletions": 100,
  "files": ["src/auth.js", "assets/logo.png", "Makefile"]
}"#;

/// A PR whose only problem is its size.
pub const LARGE_PR: &str = r#"{
  "number": 8,
  "title": "refactor: split modules",
  "additions": 400,
  "deletions": 101,
  "files": ["src/a.ts"]
}"#;

/// Creates a temporary directory with test fixtures for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content and returns its path.
    pub fn create_file(&self, relative_path: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
        path
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn create_config(&self, content: &str) -> PathBuf {
        self.create_file(".pr-check.toml", content)
    }

    pub fn create_pr(&self, content: &str) -> PathBuf {
        self.create_file("pr.json", content)
    }
}
