use crate::checker::PrChecker;
use crate::cli::{Cli, DemoArgs};
use crate::config::Config;
use crate::output::OutputFormat;
use crate::pr::PrData;
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, Result};

use super::check::format_report;
use super::{color_choice_to_mode, report_error};

/// Prints the report for [`PrData::example`]. Reads no config file.
#[must_use]
pub fn run_demo(args: &DemoArgs, cli: &Cli) -> i32 {
    match run_demo_impl(args, cli) {
        Ok(output) => {
            if !cli.quiet {
                print!("{output}");
            }
            EXIT_SUCCESS
        }
        Err(e) => {
            report_error(&e, cli.color);
            EXIT_CONFIG_ERROR
        }
    }
}

/// Renders the demo output.
///
/// JSON output is preceded by the localized report header line; the text and
/// markdown formats carry their own header.
///
/// # Errors
/// Returns an error if the report cannot be serialized.
pub fn run_demo_impl(args: &DemoArgs, cli: &Cli) -> Result<String> {
    let config = Config {
        locale: args.locale,
        ..Config::default()
    };
    let checker = PrChecker::from_config(&config)?;
    let report = checker.report(&PrData::example());

    let body = format_report(args.format, &report, color_choice_to_mode(cli.color), &config)?;
    if args.format == OutputFormat::Json {
        Ok(format!("{}\n{body}", args.locale.report_header()))
    } else {
        Ok(body)
    }
}

#[cfg(test)]
#[path = "demo_tests.rs"]
mod tests;
