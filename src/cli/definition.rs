//! CLI argument definitions

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use super::list::ListArgs;
use super::task::{
    AdvanceArgs, DeadlineArgs, EventArgs, IndexArgs, OnArgs, RecurringArgs, TodoArgs,
    UpcomingArgs,
};

#[derive(Parser)]
#[command(name = "usagi")]
#[command(about = "Personal task tracker for todos, deadlines, events and recurring tasks")]
#[command(version)]
pub struct Cli {
    /// Task file to use instead of the configured one
    #[arg(short, long, global = true, env = "USAGI_FILE")]
    pub file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List all tasks
    #[command(alias = "ls")]
    List(ListArgs),

    /// Add a todo
    Todo(TodoArgs),

    /// Add a task with a due date
    Deadline(DeadlineArgs),

    /// Add a task spanning a time window
    Event(EventArgs),

    /// Add a task that repeats on a schedule
    Recurring(RecurringArgs),

    /// Mark a task as done
    Mark(IndexArgs),

    /// Mark a task as not done
    Unmark(IndexArgs),

    /// Delete a task
    #[command(alias = "rm")]
    Delete(IndexArgs),

    /// Find tasks whose title contains a keyword
    Find {
        /// Case-insensitive keyword
        keyword: String,
    },

    /// Show tasks falling on a date
    On(OnArgs),

    /// Move recurring tasks to their next occurrence
    Advance(AdvanceArgs),

    /// Show recurring tasks due soon
    Upcoming(UpcomingArgs),

    /// Generate shell completions
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
