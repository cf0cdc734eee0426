use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{PrCheckError, Result};

/// Pull-request metadata fed to the checkers.
///
/// Key names match the JSON the checker has always consumed, so a record like
/// `{"number": 1, "title": "...", "additions": 0, "deletions": 0, "files": []}`
/// deserializes directly. A missing or `null` `title` becomes the empty string
/// and is reported by the title check rather than rejected here.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PrData {
    pub number: u64,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(default)]
    pub additions: i64,
    #[serde(default)]
    pub deletions: i64,
    #[serde(default)]
    pub files: Vec<String>,
}

impl PrData {
    /// The hard-coded pull request shown by `pr-check demo`.
    #[must_use]
    pub fn example() -> Self {
        Self {
            number: 123,
            title: "feat(api): 添加用户认证功能".to_string(),
            additions: 150,
            deletions: 30,
            files: vec![
                "src/auth.js".to_string(),
                "src/utils.js".to_string(),
                "README.md".to_string(),
            ],
        }
    }

    /// Parse a PR record from JSON text.
    ///
    /// # Errors
    /// Returns an error if the text is not a JSON object of the expected shape.
    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Read and parse a PR record from a JSON file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or does not parse.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| PrCheckError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content)
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
#[path = "pr_tests.rs"]
mod tests;
