use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PrCheckError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid title pattern: {pattern}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl PrCheckError {
    /// Short category name used as the heading of stderr diagnostics.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::Config(_) => "Config",
            Self::FileRead { .. } => "FileRead",
            Self::InvalidPattern { .. } => "Pattern",
            Self::InvalidInput(_) => "Input",
            Self::Io(_) => "IO",
            Self::TomlParse(_) => "TomlParse",
            Self::Json(_) => "Json",
        }
    }

    /// Primary message, without the category prefix of `Display`.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Config(msg) | Self::InvalidInput(msg) => msg.clone(),
            Self::FileRead { path, .. } => format!("Failed to read {}", path.display()),
            Self::InvalidPattern { pattern, .. } => format!("Cannot compile '{pattern}'"),
            Self::Io(e) => e.to_string(),
            Self::TomlParse(e) => e.to_string(),
            Self::Json(e) => e.to_string(),
        }
    }

    /// Underlying cause, when there is one worth showing.
    #[must_use]
    pub fn detail(&self) -> Option<String> {
        match self {
            Self::FileRead { source, .. } => Some(source.to_string()),
            Self::InvalidPattern { source, .. } => Some(source.to_string()),
            Self::Config(_)
            | Self::InvalidInput(_)
            | Self::Io(_)
            | Self::TomlParse(_)
            | Self::Json(_) => None,
        }
    }

    /// Actionable hint for the user, if the error kind has one.
    #[must_use]
    pub const fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::TomlParse(_) => Some("run `pr-check config validate` to check the file"),
            Self::Json(_) | Self::InvalidInput(_) => Some(
                "input must be a JSON object with number, title, additions, deletions and files",
            ),
            Self::InvalidPattern { .. } => {
                Some("title prefixes are escaped literally; check for empty entries")
            }
            Self::Config(_) | Self::FileRead { .. } | Self::Io(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, PrCheckError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
