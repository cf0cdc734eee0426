use clap::Parser;

use pr_check::cli::{Cli, Commands, DemoArgs};
use pr_check::commands::{run_check, run_config, run_demo, run_init};

fn main() {
    let cli = Cli::parse();

    let exit_code = match &cli.command {
        Some(Commands::Check(args)) => run_check(args, &cli),
        Some(Commands::Demo(args)) => run_demo(args, &cli),
        Some(Commands::Init(args)) => run_init(args, &cli),
        Some(Commands::Config(args)) => run_config(args, &cli),
        None => run_demo(&DemoArgs::default(), &cli),
    };

    std::process::exit(exit_code);
}
