pub mod check;
pub mod config;
pub mod demo;
pub mod init;

pub use check::{run_check, run_check_impl};
pub use config::{format_config_text, run_config};
pub use demo::{run_demo, run_demo_impl};
pub use init::{generate_config_template, run_init, run_init_impl};

use crate::PrCheckError;
use crate::cli::ColorChoice;
use crate::output::{ColorMode, ErrorOutput};

pub(crate) const fn color_choice_to_mode(choice: ColorChoice) -> ColorMode {
    match choice {
        ColorChoice::Auto => ColorMode::Auto,
        ColorChoice::Always => ColorMode::Always,
        ColorChoice::Never => ColorMode::Never,
    }
}

/// Stderr diagnostics honoring the global `--color` flag.
pub(crate) fn diagnostics(choice: ColorChoice) -> ErrorOutput {
    ErrorOutput::new(color_choice_to_mode(choice))
}

pub(crate) fn report_error(e: &PrCheckError, choice: ColorChoice) {
    diagnostics(choice).print_error_with_detail(
        e.error_type(),
        &e.message(),
        e.detail().as_deref(),
        e.suggestion(),
    );
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
