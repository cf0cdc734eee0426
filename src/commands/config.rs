use std::fmt::Write;
use std::path::Path;

use crate::cli::{Cli, ConfigAction, ConfigArgs, ConfigOutputFormat};
use crate::config::{Config, ConfigLoader, FileConfigLoader, LoadResult};
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, PrCheckError, Result};

use super::report_error;

#[must_use]
pub fn run_config(args: &ConfigArgs, cli: &Cli) -> i32 {
    match &args.action {
        ConfigAction::Validate { config } => run_config_validate(config, cli),
        ConfigAction::Show { config, format } => run_config_show(config.as_deref(), *format, cli),
    }
}

fn run_config_validate(config_path: &Path, cli: &Cli) -> i32 {
    match run_config_validate_impl(config_path) {
        Ok(()) => {
            println!("Configuration is valid: {}", config_path.display());
            EXIT_SUCCESS
        }
        Err(e) => {
            report_error(&e, cli.color);
            EXIT_CONFIG_ERROR
        }
    }
}

/// Validates a configuration file.
///
/// # Errors
/// Returns an error if the file doesn't exist, contains invalid TOML, or has semantic errors.
pub(crate) fn run_config_validate_impl(config_path: &Path) -> Result<()> {
    if !config_path.exists() {
        return Err(PrCheckError::Config(format!(
            "Configuration file not found: {}",
            config_path.display()
        )));
    }

    FileConfigLoader::new().load_from_path(config_path)?;
    Ok(())
}

fn run_config_show(config_path: Option<&Path>, format: ConfigOutputFormat, cli: &Cli) -> i32 {
    match run_config_show_impl(config_path, format, cli.no_config) {
        Ok(output) => {
            print!("{output}");
            EXIT_SUCCESS
        }
        Err(e) => {
            report_error(&e, cli.color);
            EXIT_CONFIG_ERROR
        }
    }
}

/// Renders the effective configuration.
///
/// # Errors
/// Returns an error if the configuration cannot be loaded or serialized.
pub(crate) fn run_config_show_impl(
    config_path: Option<&Path>,
    format: ConfigOutputFormat,
    no_config: bool,
) -> Result<String> {
    let loaded = if no_config {
        LoadResult {
            config: Config::default(),
            source: None,
        }
    } else {
        let loader = FileConfigLoader::new();
        config_path.map_or_else(|| loader.load(), |path| loader.load_from_path(path))?
    };

    match format {
        ConfigOutputFormat::Json => Ok(format!("{}\n", serde_json::to_string_pretty(&loaded.config)?)),
        ConfigOutputFormat::Text => Ok(format_config_text(&loaded)),
    }
}

#[must_use]
pub fn format_config_text(loaded: &LoadResult) -> String {
    let config = &loaded.config;
    let mut out = String::new();

    let source = loaded
        .source
        .as_ref()
        .map_or_else(|| "(defaults)".to_string(), |p| p.display().to_string());
    let _ = writeln!(out, "# Effective configuration from {source}");
    out.push('\n');
    let _ = writeln!(out, "locale = {}", config.locale);
    out.push('\n');
    out.push_str("[title]\n");
    let _ = writeln!(out, "prefixes = {}", config.title.prefixes.join(", "));
    out.push('\n');
    out.push_str("[lines]\n");
    let _ = writeln!(out, "max_changes = {}", config.lines.max_changes);
    out.push('\n');
    out.push_str("[files]\n");
    let _ = writeln!(
        out,
        "allowed_extensions = {}",
        config.files.allowed_extensions.join(", ")
    );
    out.push('\n');
    out.push_str("[check]\n");
    let _ = writeln!(out, "strict = {}", config.check.strict);

    out
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
