use crate::i18n::Locale;
use crate::pr::PrData;

use super::{CheckOutcome, Checker, FILES_CHECK_NAME, FileTypeCheck};

pub const DEFAULT_ALLOWED_EXTENSIONS: &[&str] =
    &[".js", ".jsx", ".ts", ".tsx", ".json", ".md", ".yml", ".yaml"];

/// Extension of `file`: everything from the last `.` on, dot included.
///
/// A name without any `.` is returned whole, so `Makefile` has the extension
/// `Makefile` and is only allowed if that exact string is in the allowlist.
#[must_use]
pub fn extension_of(file: &str) -> &str {
    file.rfind('.').map_or(file, |idx| &file[idx..])
}

/// Flags files whose extension is not in the allowlist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileTypeValidator {
    allowed_extensions: Vec<String>,
    locale: Locale,
}

impl Default for FileTypeValidator {
    fn default() -> Self {
        Self::new(
            DEFAULT_ALLOWED_EXTENSIONS
                .iter()
                .map(ToString::to_string)
                .collect(),
        )
    }
}

impl FileTypeValidator {
    #[must_use]
    pub const fn new(allowed_extensions: Vec<String>) -> Self {
        Self {
            allowed_extensions,
            locale: Locale::En,
        }
    }

    #[must_use]
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    #[must_use]
    pub fn allowed_extensions(&self) -> &[String] {
        &self.allowed_extensions
    }

    #[must_use]
    pub fn is_allowed(&self, file: &str) -> bool {
        let ext = extension_of(file);
        self.allowed_extensions.iter().any(|allowed| allowed == ext)
    }

    #[must_use]
    pub fn validate<S: AsRef<str>>(&self, files: &[S]) -> FileTypeCheck {
        let invalid_files: Vec<String> = files
            .iter()
            .map(AsRef::<str>::as_ref)
            .filter(|file| !self.is_allowed(file))
            .map(ToString::to_string)
            .collect();

        let message = if invalid_files.is_empty() {
            self.locale.files_ok().to_string()
        } else {
            self.locale.files_disallowed(&invalid_files)
        };

        FileTypeCheck {
            valid: invalid_files.is_empty(),
            invalid_files,
            message,
        }
    }
}

impl Checker for FileTypeValidator {
    fn name(&self) -> &'static str {
        FILES_CHECK_NAME
    }

    fn check(&self, pr: &PrData) -> CheckOutcome {
        self.validate(&pr.files).into()
    }
}

#[cfg(test)]
#[path = "file_types_tests.rs"]
mod tests;
