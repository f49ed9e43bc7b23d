//! Task line encoder and decoder
//!
//! One task per line, fields joined by `" | "`:
//!
//! ```text
//! T | 0 | read book
//! D | 1 | return book | 2019-12-02T18:00
//! E | 0 | party | 2023-12-24T09:00 | 2023-12-26T10:00
//! R | 0 | standup | 2024-01-01T09:00 | 2024-01-01T09:15 | weekly | 1 | 2024-01-08
//! ```

use std::sync::LazyLock;

use regex::Regex;

use super::datetime::{parse_date_time, parse_iso_date, parse_iso_date_time};
use super::error::{Result, TaskError};
use super::model::{Task, TaskType};
use super::recurrence::RecurrencePattern;

pub const SEPARATOR: &str = " | ";

static FIELD_SPLIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*\|\s*").expect("valid field separator regex"));

pub fn encode(task: &Task) -> String {
    let mut fields = vec![
        task.type_tag().to_string(),
        if task.is_done() { "1" } else { "0" }.to_string(),
        task.title().to_string(),
    ];
    fields.extend(task.extra_fields());
    fields.join(SEPARATOR)
}

pub fn decode(line: &str) -> Result<Task> {
    let mut fields: Vec<&str> = FIELD_SPLIT.split(line.trim()).collect();
    // A trailing separator leaves empty fields behind; they carry nothing
    while fields.last() == Some(&"") {
        fields.pop();
    }
    if fields.len() < 3 {
        return Err(TaskError::TooFewFields(fields.len()));
    }

    let done = match fields[1] {
        "0" => false,
        "1" => true,
        other => return Err(TaskError::InvalidDoneFlag(other.to_string())),
    };

    let task_type =
        TaskType::parse(fields[0]).ok_or_else(|| TaskError::UnknownType(fields[0].to_string()))?;
    if fields.len() != task_type.field_count() {
        return Err(TaskError::FieldCount {
            kind: task_type.label(),
            expected: task_type.field_count(),
            actual: fields.len(),
        });
    }

    let title = fields[2];
    let mut task = match task_type {
        TaskType::Todo => Task::todo(title)?,
        TaskType::Deadline => Task::deadline(title, parse_date_time(fields[3])?)?,
        TaskType::Event => Task::event(
            title,
            parse_date_time(fields[3])?,
            parse_date_time(fields[4])?,
        )?,
        TaskType::Recurring => decode_recurring(&fields)?,
    };

    if done {
        task.mark();
    }
    Ok(task)
}

/// Recurring records are machine-written, so every field is parsed strictly.
fn decode_recurring(fields: &[&str]) -> Result<Task> {
    let strict = |what: &str, raw: &str| {
        TaskError::InvalidRecurringField(format!("invalid {}: {}", what, raw))
    };

    let start_time =
        parse_iso_date_time(fields[3]).ok_or_else(|| strict("start time", fields[3]))?;
    let end_time = parse_iso_date_time(fields[4]).ok_or_else(|| strict("end time", fields[4]))?;
    let pattern: RecurrencePattern = fields[5].parse()?;
    let interval: i64 = fields[6]
        .parse()
        .map_err(|_| strict("interval", fields[6]))?;
    let next_occurrence =
        parse_iso_date(fields[7]).ok_or_else(|| strict("next occurrence", fields[7]))?;

    let mut task = Task::recurring(fields[2], start_time, end_time, pattern, interval)?;
    if let Some(recurrence) = task.recurrence_mut() {
        recurrence.set_next_occurrence(next_occurrence);
    }
    Ok(task)
}
