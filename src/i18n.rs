//! Message catalog for human-readable check output.
//!
//! `En` is the default. `ZhCn` reproduces the Simplified Chinese wording the
//! checker has always used for its messages.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Serialized as its [`code`](Locale::code); parsed through [`FromStr`](std::str::FromStr)
/// so config files and `--locale` accept the same spellings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    En,
    ZhCn,
}

impl Locale {
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::ZhCn => "zh-CN",
        }
    }

    #[must_use]
    pub const fn report_header(self) -> &'static str {
        match self {
            Self::En => "PR Check Report:",
            Self::ZhCn => "PR 检查报告:",
        }
    }

    #[must_use]
    pub const fn title_empty(self) -> &'static str {
        match self {
            Self::En => "PR title must not be empty",
            Self::ZhCn => "PR 标题不能为空",
        }
    }

    #[must_use]
    pub fn title_malformed(self, prefixes: &[String]) -> String {
        let allowed = prefixes.join(", ");
        match self {
            Self::En => format!("PR title format is invalid. It should start with one of: {allowed}"),
            Self::ZhCn => format!("PR 标题格式不正确。应该以 {allowed} 之一开头"),
        }
    }

    #[must_use]
    pub const fn title_ok(self) -> &'static str {
        match self {
            Self::En => "PR title format is valid",
            Self::ZhCn => "PR 标题格式正确",
        }
    }

    #[must_use]
    pub fn lines_too_many(self, total: i64) -> String {
        match self {
            Self::En => format!(
                "Large change ({total} lines), consider splitting it into multiple PRs"
            ),
            Self::ZhCn => format!("变更行数较多 ({total} 行)，建议拆分为多个 PR"),
        }
    }

    #[must_use]
    pub fn lines_ok(self, total: i64) -> String {
        match self {
            Self::En => format!("Change size is reasonable ({total} lines)"),
            Self::ZhCn => format!("变更行数合理 ({total} 行)"),
        }
    }

    #[must_use]
    pub fn files_disallowed(self, files: &[String]) -> String {
        let listed = files.join(", ");
        match self {
            Self::En => format!("Found disallowed file types: {listed}"),
            Self::ZhCn => format!("发现不允许的文件类型: {listed}"),
        }
    }

    #[must_use]
    pub const fn files_ok(self) -> &'static str {
        match self {
            Self::En => "All file types are allowed",
            Self::ZhCn => "所有文件类型都是允许的",
        }
    }
}

impl std::str::FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "en" | "en-us" | "en-gb" => Ok(Self::En),
            "zh" | "zh-cn" | "zh-hans" => Ok(Self::ZhCn),
            _ => Err(format!("Unknown locale: {s}")),
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl Serialize for Locale {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

impl<'de> Deserialize<'de> for Locale {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let code = String::deserialize(deserializer)?;
        code.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
#[path = "i18n_tests.rs"]
mod tests;
