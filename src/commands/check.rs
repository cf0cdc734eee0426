use std::io::Read;
use std::path::Path;

use crate::checker::PrChecker;
use crate::cli::{CheckArgs, Cli};
use crate::config::{Config, ConfigLoader, FileConfigLoader, LoadResult};
use crate::output::{
    ColorMode, JsonFormatter, MarkdownFormatter, OutputFormat, OutputFormatter, TextFormatter,
};
use crate::pr::PrData;
use crate::report::Report;
use crate::{EXIT_CHECK_FAILED, EXIT_CONFIG_ERROR, EXIT_SUCCESS, PrCheckError, Result};

use super::{color_choice_to_mode, diagnostics, report_error};

#[must_use]
pub fn run_check(args: &CheckArgs, cli: &Cli) -> i32 {
    match run_check_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            report_error(&e, cli.color);
            EXIT_CONFIG_ERROR
        }
    }
}

/// Runs the check command and returns the process exit code.
///
/// # Errors
/// Returns an error if the configuration or the PR description cannot be
/// loaded, or the report cannot be written.
pub fn run_check_impl(args: &CheckArgs, cli: &Cli) -> Result<i32> {
    let diag = diagnostics(cli.color);

    // 1. Load configuration
    let loaded = load_config(args.config.as_deref(), cli.no_config)?;
    if cli.verbose > 0 {
        match &loaded.source {
            Some(path) => diag.print_info(&format!("Using config {}", path.display())),
            None => diag.print_info("No config file found, using defaults"),
        }
    }

    // 2. Apply CLI argument overrides
    let mut config = loaded.config;
    apply_cli_overrides(&mut config, args);

    // 3. Read the pull request
    let pr = read_pr(args)?;
    if cli.verbose > 0 {
        diag.print_info(&format!(
            "Checking PR #{} ({} files)",
            pr.number,
            pr.files.len()
        ));
    }

    // 4. Run checks
    let checker = PrChecker::from_config(&config)?;
    let report = checker.report(&pr);

    // 5. Format and write output
    let color_mode = color_choice_to_mode(cli.color);
    let output = format_report(args.format, &report, color_mode, &config)?;
    write_output(args.output.as_deref(), &output, cli.quiet)?;

    if args.warn_only && report.has_failures() {
        let (_, _, failed) = report.tally();
        diag.print_warning(&format!(
            "{failed} check(s) failed; exiting successfully because of --warn-only"
        ));
    }

    Ok(exit_code_for(&report, args.warn_only, config.check.strict))
}

fn load_config(config_path: Option<&Path>, no_config: bool) -> Result<LoadResult> {
    if no_config {
        return Ok(LoadResult {
            config: Config::default(),
            source: None,
        });
    }

    let loader = FileConfigLoader::new();
    config_path.map_or_else(|| loader.load(), |path| loader.load_from_path(path))
}

pub(crate) fn apply_cli_overrides(config: &mut Config, args: &CheckArgs) {
    if let Some(max_changes) = args.max_changes {
        config.lines.max_changes = max_changes;
    }

    if let Some(locale) = args.locale {
        config.locale = locale;
    }

    if args.strict {
        config.check.strict = true;
    }
}

pub(crate) fn read_pr(args: &CheckArgs) -> Result<PrData> {
    if let Some(input) = &args.input {
        if input.as_os_str() == "-" {
            let mut content = String::new();
            std::io::stdin().read_to_string(&mut content)?;
            return PrData::from_json(&content);
        }
        return PrData::from_path(input);
    }

    if !args.has_inline_pr() {
        return Err(PrCheckError::InvalidInput(
            "No pull request given: pass a JSON file, `-` for stdin, or --title/--file flags"
                .to_string(),
        ));
    }

    Ok(PrData {
        number: args.number.unwrap_or_default(),
        title: args.title.clone().unwrap_or_default(),
        additions: args.additions.unwrap_or_default(),
        deletions: args.deletions.unwrap_or_default(),
        files: args.files.clone(),
    })
}

pub(crate) fn format_report(
    format: OutputFormat,
    report: &Report,
    color_mode: ColorMode,
    config: &Config,
) -> Result<String> {
    match format {
        OutputFormat::Text => TextFormatter::new(color_mode)
            .with_locale(config.locale)
            .format(report),
        OutputFormat::Json => JsonFormatter
            .format(report)
            .map(|json| format!("{json}\n")),
        OutputFormat::Markdown => MarkdownFormatter::new()
            .with_locale(config.locale)
            .format(report),
    }
}

fn write_output(output_path: Option<&Path>, content: &str, quiet: bool) -> Result<()> {
    if let Some(path) = output_path {
        std::fs::write(path, content)?;
    } else if !quiet {
        print!("{content}");
    }
    Ok(())
}

pub(crate) fn exit_code_for(report: &Report, warn_only: bool, strict: bool) -> i32 {
    if warn_only {
        return EXIT_SUCCESS;
    }

    if report.has_failures() || (strict && report.has_warnings()) {
        EXIT_CHECK_FAILED
    } else {
        EXIT_SUCCESS
    }
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod tests;
