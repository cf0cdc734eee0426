use crate::error::{PrCheckError, Result};

use super::Config;

/// Validates semantic correctness of a configuration.
///
/// # Errors
/// Returns an error if the title prefix list is empty or has blank entries, or
/// if any allowed extension is blank.
pub fn validate_config_semantics(config: &Config) -> Result<()> {
    validate_title_section(config)?;
    validate_files_section(config)?;
    Ok(())
}

fn validate_title_section(config: &Config) -> Result<()> {
    if config.title.prefixes.is_empty() {
        return Err(PrCheckError::Config(
            "title.prefixes must list at least one prefix".to_string(),
        ));
    }

    if let Some(idx) = config
        .title
        .prefixes
        .iter()
        .position(|p| p.trim().is_empty())
    {
        return Err(PrCheckError::Config(format!(
            "title.prefixes[{idx}] must not be empty"
        )));
    }

    Ok(())
}

fn validate_files_section(config: &Config) -> Result<()> {
    if let Some(idx) = config
        .files
        .allowed_extensions
        .iter()
        .position(String::is_empty)
    {
        return Err(PrCheckError::Config(format!(
            "files.allowed_extensions[{idx}] must not be empty"
        )));
    }

    Ok(())
}

#[cfg(test)]
#[path = "validation_tests.rs"]
mod tests;
