//! Text commands and their execution against the task list

pub mod error;
pub mod parser;
pub mod session;

use chrono::{NaiveDate, NaiveDateTime};

use crate::task::RecurrencePattern;

pub use error::CommandError;
pub use parser::parse;
pub use session::Session;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List,
    Exit,
    Todo {
        title: String,
    },
    Deadline {
        title: String,
        by: NaiveDateTime,
    },
    Event {
        title: String,
        from: NaiveDateTime,
        to: NaiveDateTime,
    },
    Recurring {
        title: String,
        from: NaiveDateTime,
        to: NaiveDateTime,
        pattern: RecurrencePattern,
        interval: i64,
    },
    Mark(usize),
    Unmark(usize),
    Delete(usize),
    Find(String),
    On(NaiveDate),
    /// Advance one recurring task, or all of them
    Advance(Option<usize>),
    /// Recurring tasks due within the given number of days
    Upcoming(Option<u32>),
}
