//! Usagi - personal task tracker

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::generate;
use usagi::cli::{self, Cli, Commands};

fn main() -> Result<()> {
    if std::env::var("USAGI_DEBUG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter("usagi=debug")
            .with_writer(std::io::stderr)
            .init();
    }

    let cli = Cli::parse();

    // Completions don't need the task file
    if let Some(Commands::Completion { shell }) = cli.command {
        generate(shell, &mut Cli::command(), "usagi", &mut std::io::stdout());
        return Ok(());
    }

    cli::run(cli)
}
