//! CLI entry point for the data analyzer

use clap::Parser;
use datalyzer::io::cli::{Cli, CommandRunner};

fn main() -> datalyzer::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(cli.log_level())
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let runner = CommandRunner::new(cli);
    runner.run(std::io::stdin().lock(), std::io::stdout().lock())
}
