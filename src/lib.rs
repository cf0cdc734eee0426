pub mod checker;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod i18n;
pub mod output;
pub mod pr;
pub mod report;

pub use checker::{
    CheckOutcome, FileTypeCheck, LineCheck, LineStatus, PrChecker, TitleCheck,
    check_changed_lines, validate_file_types, validate_pr_title,
};
pub use error::{PrCheckError, Result};
pub use pr::PrData;
pub use report::{NamedCheck, Report, generate_check_report};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_CHECK_FAILED: i32 = 1;
pub const EXIT_CONFIG_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
