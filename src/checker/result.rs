use serde::Serialize;

/// Outcome of the title check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TitleCheck {
    pub valid: bool,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LineStatus {
    Success,
    Warning,
}

impl LineStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Warning => "warning",
        }
    }
}

/// Outcome of the changed-lines check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineCheck {
    pub status: LineStatus,
    pub message: String,
}

/// Outcome of the file type check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileTypeCheck {
    pub valid: bool,
    pub invalid_files: Vec<String>,
    pub message: String,
}

/// Result of any single check.
///
/// Serialized untagged so each variant's own fields appear directly in the
/// report entry next to its name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum CheckOutcome {
    Title(TitleCheck),
    Lines(LineCheck),
    Files(FileTypeCheck),
}

impl CheckOutcome {
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Title(c) => &c.message,
            Self::Lines(c) => &c.message,
            Self::Files(c) => &c.message,
        }
    }

    /// A validation check came back invalid.
    #[must_use]
    pub const fn is_failed(&self) -> bool {
        match self {
            Self::Title(c) => !c.valid,
            Self::Files(c) => !c.valid,
            Self::Lines(_) => false,
        }
    }

    #[must_use]
    pub const fn is_warning(&self) -> bool {
        matches!(
            self,
            Self::Lines(LineCheck {
                status: LineStatus::Warning,
                ..
            })
        )
    }

    #[must_use]
    pub const fn is_passed(&self) -> bool {
        !self.is_failed() && !self.is_warning()
    }
}

impl From<TitleCheck> for CheckOutcome {
    fn from(check: TitleCheck) -> Self {
        Self::Title(check)
    }
}

impl From<LineCheck> for CheckOutcome {
    fn from(check: LineCheck) -> Self {
        Self::Lines(check)
    }
}

impl From<FileTypeCheck> for CheckOutcome {
    fn from(check: FileTypeCheck) -> Self {
        Self::Files(check)
    }
}

#[cfg(test)]
#[path = "result_tests.rs"]
mod tests;
