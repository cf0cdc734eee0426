use regex::Regex;

use crate::error::{PrCheckError, Result};
use crate::i18n::Locale;
use crate::pr::PrData;

use super::{CheckOutcome, Checker, TITLE_CHECK_NAME, TitleCheck};

pub const DEFAULT_PREFIXES: &[&str] = &[
    "feat", "fix", "docs", "style", "refactor", "test", "chore",
];

/// Validates `type(scope): subject` style titles.
#[derive(Debug, Clone)]
pub struct TitleValidator {
    prefixes: Vec<String>,
    pattern: Regex,
    locale: Locale,
}

impl Default for TitleValidator {
    fn default() -> Self {
        let prefixes = DEFAULT_PREFIXES.iter().map(ToString::to_string).collect();
        Self::new(prefixes).expect("Invalid regex")
    }
}

impl TitleValidator {
    /// Create a validator accepting the given type prefixes.
    ///
    /// Prefixes are matched literally.
    ///
    /// # Errors
    /// Returns an error if the assembled pattern fails to compile.
    pub fn new(prefixes: Vec<String>) -> Result<Self> {
        let pattern_str = build_pattern(&prefixes);
        let pattern = Regex::new(&pattern_str).map_err(|source| PrCheckError::InvalidPattern {
            pattern: pattern_str,
            source,
        })?;
        Ok(Self {
            prefixes,
            pattern,
            locale: Locale::default(),
        })
    }

    #[must_use]
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    #[must_use]
    pub fn prefixes(&self) -> &[String] {
        &self.prefixes
    }

    #[must_use]
    pub fn validate(&self, title: &str) -> TitleCheck {
        if is_blank(title) {
            return TitleCheck {
                valid: false,
                message: self.locale.title_empty().to_string(),
            };
        }

        if !self.pattern.is_match(title) {
            return TitleCheck {
                valid: false,
                message: self.locale.title_malformed(&self.prefixes),
            };
        }

        TitleCheck {
            valid: true,
            message: self.locale.title_ok().to_string(),
        }
    }
}

impl Checker for TitleValidator {
    fn name(&self) -> &'static str {
        TITLE_CHECK_NAME
    }

    fn check(&self, pr: &PrData) -> CheckOutcome {
        self.validate(&pr.title).into()
    }
}

/// A byte-order mark counts as blank alongside Unicode whitespace.
fn is_blank(title: &str) -> bool {
    title
        .trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
        .is_empty()
}

// Any character except a line terminator (CR, LF, U+2028, U+2029).
const NOT_LINE_END: &str = r"[^\r\n\x{2028}\x{2029}]";

fn build_pattern(prefixes: &[String]) -> String {
    let alternatives: Vec<String> = prefixes.iter().map(|p| regex::escape(p)).collect();
    format!(
        r"^({})(\({NOT_LINE_END}+\))?: {NOT_LINE_END}+",
        alternatives.join("|")
    )
}

#[cfg(test)]
#[path = "title_tests.rs"]
mod tests;
