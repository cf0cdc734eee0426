use serde::{Deserialize, Serialize};

use crate::checker::{DEFAULT_ALLOWED_EXTENSIONS, DEFAULT_MAX_CHANGES, DEFAULT_PREFIXES};
use crate::i18n::Locale;

/// Supported config version.
pub const CONFIG_VERSION: &str = "1";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// Config format version. `None` means the current one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// Language of check messages.
    #[serde(default)]
    pub locale: Locale,

    #[serde(default)]
    pub title: TitleConfig,

    #[serde(default)]
    pub lines: LinesConfig,

    #[serde(default)]
    pub files: FilesConfig,

    #[serde(default)]
    pub check: CheckConfig,
}

/// Title format check [title].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TitleConfig {
    /// Allowed conventional-commit types.
    #[serde(default = "default_prefixes")]
    pub prefixes: Vec<String>,
}

impl Default for TitleConfig {
    fn default() -> Self {
        Self {
            prefixes: default_prefixes(),
        }
    }
}

/// Changed-lines check [lines].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct LinesConfig {
    /// Additions plus deletions above this produce a warning.
    #[serde(default = "default_max_changes")]
    pub max_changes: u64,
}

impl Default for LinesConfig {
    fn default() -> Self {
        Self {
            max_changes: DEFAULT_MAX_CHANGES,
        }
    }
}

/// File type check [files].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FilesConfig {
    /// Allowed extensions, dot included (e.g. ".md").
    #[serde(default = "default_allowed_extensions")]
    pub allowed_extensions: Vec<String>,
}

impl Default for FilesConfig {
    fn default() -> Self {
        Self {
            allowed_extensions: default_allowed_extensions(),
        }
    }
}

/// Exit code behavior of `pr-check check` [check].
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CheckConfig {
    /// Treat warnings as failures.
    #[serde(default)]
    pub strict: bool,
}

fn default_prefixes() -> Vec<String> {
    DEFAULT_PREFIXES.iter().map(ToString::to_string).collect()
}

const fn default_max_changes() -> u64 {
    DEFAULT_MAX_CHANGES
}

fn default_allowed_extensions() -> Vec<String> {
    DEFAULT_ALLOWED_EXTENSIONS
        .iter()
        .map(ToString::to_string)
        .collect()
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
