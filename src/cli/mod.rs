//! CLI command implementations

pub mod definition;
pub mod list;
pub mod shell;
pub mod task;

pub use definition::{Cli, Commands};

use anyhow::Result;
use chrono::{Local, NaiveDate};
use std::io;
use tracing::debug;

use crate::command::{Command, Session};
use crate::config::Config;
use crate::storage::Storage;

fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Open the task file the CLI flags and config point at
pub fn open_session(cli: &Cli) -> Result<Session> {
    let config = Config::load()?;
    let path = config.data_file(cli.file.clone());
    debug!("Using task file {}", path.display());
    Ok(Session::open(
        Storage::new(path),
        config.upcoming.default_days,
    )?)
}

/// Run one subcommand, or the interactive prompt when there is none
pub fn run(cli: Cli) -> Result<()> {
    let mut session = open_session(&cli)?;

    let command = match cli.command {
        None => {
            let stdin = io::stdin();
            return shell::run(&mut session, stdin.lock(), &mut io::stdout(), today);
        }
        Some(Commands::List(args)) => return list::run(&mut session, args, today()),
        Some(Commands::Todo(args)) => args.into_command(),
        Some(Commands::Deadline(args)) => args.into_command()?,
        Some(Commands::Event(args)) => args.into_command()?,
        Some(Commands::Recurring(args)) => args.into_command()?,
        Some(Commands::Mark(args)) => Command::Mark(args.index()),
        Some(Commands::Unmark(args)) => Command::Unmark(args.index()),
        Some(Commands::Delete(args)) => Command::Delete(args.index()),
        Some(Commands::Find { keyword }) => Command::Find(keyword),
        Some(Commands::On(args)) => args.into_command()?,
        Some(Commands::Advance(args)) => args.into_command(),
        Some(Commands::Upcoming(args)) => args.into_command(),
        // Handled before any task file is opened
        Some(Commands::Completion { .. }) => return Ok(()),
    };

    println!("{}", session.execute(&command, today())?);
    Ok(())
}
