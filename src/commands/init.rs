use std::fs;

use crate::cli::{Cli, InitArgs};
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, PrCheckError, Result};

use super::report_error;

#[must_use]
pub fn run_init(args: &InitArgs, cli: &Cli) -> i32 {
    match run_init_impl(args) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            report_error(&e, cli.color);
            EXIT_CONFIG_ERROR
        }
    }
}

/// Initializes a new configuration file.
///
/// # Errors
/// Returns an error if the file already exists (without --force) or cannot be written.
pub fn run_init_impl(args: &InitArgs) -> Result<()> {
    let output_path = &args.output;

    if output_path.exists() && !args.force {
        return Err(PrCheckError::Config(format!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            output_path.display()
        )));
    }

    fs::write(output_path, generate_config_template())?;

    println!("Created configuration file: {}", output_path.display());
    Ok(())
}

#[must_use]
pub fn generate_config_template() -> String {
    r#"# pr-check configuration file
version = "1"

# Language of check messages: "en" or "zh-CN"
locale = "en"

[title]
# Allowed conventional-commit types; titles must look like
# "type: subject" or "type(scope): subject"
prefixes = ["feat", "fix", "docs", "style", "refactor", "test", "chore"]

[lines]
# Additions plus deletions above this produce a warning (default: 500)
max_changes = 500

[files]
# Allowed extensions, measured from the last "." of the file name.
# A name without "." (e.g. "Makefile") must be listed verbatim to be allowed.
allowed_extensions = [".js", ".jsx", ".ts", ".tsx", ".json", ".md", ".yml", ".yaml"]

[check]
# Treat warnings as failures (default: false)
# strict = true
"#
    .to_string()
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
