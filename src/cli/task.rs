//! Arguments for the task-editing subcommands

use clap::Args;

use crate::command::error::Result;
use crate::command::Command;
use crate::task::datetime::{parse_date, parse_date_time};
use crate::task::RecurrencePattern;

#[derive(Args)]
pub struct TodoArgs {
    /// Task title
    #[arg(required = true, num_args = 1..)]
    title: Vec<String>,
}

#[derive(Args)]
pub struct DeadlineArgs {
    /// Task title
    title: String,

    /// Due date and time (e.g. 2019-12-02 1800, 2/12/2019 1800)
    #[arg(long)]
    by: String,
}

#[derive(Args)]
pub struct EventArgs {
    /// Task title
    title: String,

    /// Start date and time
    #[arg(long)]
    from: String,

    /// End date and time
    #[arg(long)]
    to: String,
}

#[derive(Args)]
pub struct RecurringArgs {
    /// Task title
    title: String,

    /// Start date and time of the first occurrence
    #[arg(long)]
    from: String,

    /// End date and time of the first occurrence
    #[arg(long)]
    to: String,

    /// Recurrence pattern (daily, weekly, monthly, yearly)
    #[arg(long)]
    every: String,

    /// Number of pattern units between occurrences
    #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
    interval: i64,
}

#[derive(Args)]
pub struct IndexArgs {
    /// Task number as shown by `list`
    index: usize,
}

#[derive(Args)]
pub struct OnArgs {
    /// Date to look up (e.g. 2023-12-25, 25/12/2023)
    date: String,
}

#[derive(Args)]
pub struct AdvanceArgs {
    /// Task number to advance; all recurring tasks when omitted
    index: Option<usize>,
}

#[derive(Args)]
pub struct UpcomingArgs {
    /// Number of days to look ahead; the configured default when omitted
    #[arg(value_parser = clap::value_parser!(u32).range(1..))]
    days: Option<u32>,
}

impl TodoArgs {
    pub fn into_command(self) -> Command {
        Command::Todo {
            title: self.title.join(" "),
        }
    }
}

impl DeadlineArgs {
    pub fn into_command(self) -> Result<Command> {
        Ok(Command::Deadline {
            by: parse_date_time(&self.by)?,
            title: self.title,
        })
    }
}

impl EventArgs {
    pub fn into_command(self) -> Result<Command> {
        Ok(Command::Event {
            from: parse_date_time(&self.from)?,
            to: parse_date_time(&self.to)?,
            title: self.title,
        })
    }
}

impl RecurringArgs {
    pub fn into_command(self) -> Result<Command> {
        Ok(Command::Recurring {
            from: parse_date_time(&self.from)?,
            to: parse_date_time(&self.to)?,
            pattern: self.every.parse::<RecurrencePattern>()?,
            interval: self.interval,
            title: self.title,
        })
    }
}

impl IndexArgs {
    pub fn index(&self) -> usize {
        self.index
    }
}

impl OnArgs {
    pub fn into_command(self) -> Result<Command> {
        Ok(Command::On(parse_date(&self.date)?))
    }
}

impl AdvanceArgs {
    pub fn into_command(self) -> Command {
        Command::Advance(self.index)
    }
}

impl UpcomingArgs {
    pub fn into_command(self) -> Command {
        Command::Upcoming(self.days)
    }
}
