//! Text command parser
//!
//! ```text
//! todo read book
//! deadline return book /by 2/12/2019 1800
//! event party /from 2023-12-24 0900 /to 2023-12-26 1000
//! recurring standup /from 2024-01-01 0900 /to 2024-01-01 0915 /every weekly 2
//! mark 1 | unmark 1 | delete 1
//! find book | on 25/12/2023
//! advance [n] | upcoming [days] | list | bye
//! ```

use super::error::{CommandError, Result};
use super::Command;
use crate::task::datetime::{parse_date, parse_date_time};
use crate::task::RecurrencePattern;

const DEADLINE_USAGE: &str = "deadline must be followed by a description and a /by";
const EVENT_USAGE: &str = "event must be followed by a description and a /from and /to";
const RECURRING_USAGE: &str =
    "Correct format: recurring <title> /from <start-time> /to <end-time> /every <pattern> [interval]";

pub fn parse(input: &str) -> Result<Command> {
    let input = input.trim();
    let (keyword, rest) = match input.split_once(char::is_whitespace) {
        Some((keyword, rest)) => (keyword, rest.trim()),
        None => (input, ""),
    };

    match keyword {
        "list" if rest.is_empty() => Ok(Command::List),
        "bye" if rest.is_empty() => Ok(Command::Exit),
        "todo" => parse_todo(rest),
        "deadline" => parse_deadline(rest),
        "event" => parse_event(rest),
        "recurring" => parse_recurring(rest),
        "mark" => Ok(Command::Mark(parse_index(rest)?)),
        "unmark" => Ok(Command::Unmark(parse_index(rest)?)),
        "delete" => Ok(Command::Delete(parse_index(rest)?)),
        "find" => {
            if rest.is_empty() {
                return Err(CommandError::Usage("find must be followed by a keyword"));
            }
            Ok(Command::Find(rest.to_string()))
        }
        "on" => {
            if rest.is_empty() {
                return Err(CommandError::Usage("on must be followed by a date"));
            }
            Ok(Command::On(parse_date(rest)?))
        }
        "advance" => {
            if rest.is_empty() {
                Ok(Command::Advance(None))
            } else {
                Ok(Command::Advance(Some(parse_index(rest)?)))
            }
        }
        "upcoming" => {
            if rest.is_empty() {
                Ok(Command::Upcoming(None))
            } else {
                Ok(Command::Upcoming(Some(parse_days(rest)?)))
            }
        }
        _ => Err(CommandError::Unknown(input.to_string())),
    }
}

fn parse_todo(rest: &str) -> Result<Command> {
    if rest.is_empty() {
        return Err(CommandError::Usage("todo must be followed by a description"));
    }
    Ok(Command::Todo {
        title: rest.to_string(),
    })
}

fn parse_deadline(rest: &str) -> Result<Command> {
    let (title, by) = rest
        .split_once("/by")
        .ok_or(CommandError::Usage(DEADLINE_USAGE))?;
    let (title, by) = (title.trim(), by.trim());
    if title.is_empty() || by.is_empty() {
        return Err(CommandError::Usage(DEADLINE_USAGE));
    }

    Ok(Command::Deadline {
        title: title.to_string(),
        by: parse_date_time(by)?,
    })
}

fn parse_event(rest: &str) -> Result<Command> {
    let (title, times) = rest
        .split_once("/from")
        .ok_or(CommandError::Usage(EVENT_USAGE))?;
    let (from, to) = times
        .split_once("/to")
        .ok_or(CommandError::Usage(EVENT_USAGE))?;
    let (title, from, to) = (title.trim(), from.trim(), to.trim());
    if title.is_empty() || from.is_empty() || to.is_empty() {
        return Err(CommandError::Usage(EVENT_USAGE));
    }

    Ok(Command::Event {
        title: title.to_string(),
        from: parse_date_time(from)?,
        to: parse_date_time(to)?,
    })
}

fn parse_recurring(rest: &str) -> Result<Command> {
    let (title, times) = rest
        .split_once("/from")
        .ok_or(CommandError::Usage(RECURRING_USAGE))?;
    let (from, tail) = times
        .split_once("/to")
        .ok_or(CommandError::Usage(RECURRING_USAGE))?;
    let (to, every) = tail
        .split_once("/every")
        .ok_or(CommandError::Usage(RECURRING_USAGE))?;

    let mut every = every.split_whitespace();
    let pattern = every.next().ok_or(CommandError::Usage(RECURRING_USAGE))?;
    let interval = match every.next() {
        Some(raw) => raw
            .parse::<i64>()
            .map_err(|_| CommandError::Usage(RECURRING_USAGE))?,
        None => 1,
    };
    if every.next().is_some() {
        return Err(CommandError::Usage(RECURRING_USAGE));
    }

    let (title, from, to) = (title.trim(), from.trim(), to.trim());
    if title.is_empty() || from.is_empty() || to.is_empty() {
        return Err(CommandError::Usage(RECURRING_USAGE));
    }

    Ok(Command::Recurring {
        title: title.to_string(),
        from: parse_date_time(from)?,
        to: parse_date_time(to)?,
        pattern: pattern.parse::<RecurrencePattern>()?,
        interval,
    })
}

fn parse_index(raw: &str) -> Result<usize> {
    raw.parse::<usize>()
        .map_err(|_| CommandError::InvalidNumber(raw.to_string()))
}

fn parse_days(raw: &str) -> Result<u32> {
    match raw.parse::<u32>() {
        Ok(days) if days > 0 => Ok(days),
        _ => Err(CommandError::InvalidDays(raw.to_string())),
    }
}
