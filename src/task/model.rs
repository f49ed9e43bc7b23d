//! Task data model

use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;
use std::fmt;

use super::datetime::{format_display, format_iso_date_time};
use super::error::{Result, TaskError};
use super::recurrence::{Recurrence, RecurrencePattern};

/// Variant discriminant, written as the first field of a task line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskType {
    Todo,
    Deadline,
    Event,
    Recurring,
}

impl TaskType {
    /// Parse the single-letter tag
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "T" => Some(Self::Todo),
            "D" => Some(Self::Deadline),
            "E" => Some(Self::Event),
            "R" => Some(Self::Recurring),
            _ => None,
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            Self::Todo => "T",
            Self::Deadline => "D",
            Self::Event => "E",
            Self::Recurring => "R",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Todo => "Todo",
            Self::Deadline => "Deadline",
            Self::Event => "Event",
            Self::Recurring => "Recurring",
        }
    }

    /// Number of `|`-separated fields in an encoded line of this type
    pub fn field_count(&self) -> usize {
        match self {
            Self::Todo => 3,
            Self::Deadline => 4,
            Self::Event => 5,
            Self::Recurring => 8,
        }
    }
}

impl fmt::Display for TaskType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Variant-specific payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskKind {
    Todo,
    Deadline {
        due_at: NaiveDateTime,
    },
    /// `starts_at` is not required to precede `ends_at`
    Event {
        starts_at: NaiveDateTime,
        ends_at: NaiveDateTime,
    },
    Recurring(Recurrence),
}

/// A task
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    title: String,
    done: bool,
    kind: TaskKind,
}

impl Task {
    fn new(title: &str, kind: TaskKind) -> Result<Self> {
        let title = title.trim();
        if title.is_empty() {
            return Err(TaskError::EmptyTitle);
        }
        if title.contains('|') {
            return Err(TaskError::TitleContainsSeparator(title.to_string()));
        }
        if title.chars().any(char::is_control) {
            return Err(TaskError::TitleContainsControl(title.to_string()));
        }

        Ok(Self {
            title: title.to_string(),
            done: false,
            kind,
        })
    }

    pub fn todo(title: &str) -> Result<Self> {
        Self::new(title, TaskKind::Todo)
    }

    pub fn deadline(title: &str, due_at: NaiveDateTime) -> Result<Self> {
        Self::new(title, TaskKind::Deadline { due_at })
    }

    pub fn event(title: &str, starts_at: NaiveDateTime, ends_at: NaiveDateTime) -> Result<Self> {
        Self::new(title, TaskKind::Event { starts_at, ends_at })
    }

    pub fn recurring(
        title: &str,
        start_time: NaiveDateTime,
        end_time: NaiveDateTime,
        pattern: RecurrencePattern,
        interval: i64,
    ) -> Result<Self> {
        let title = title.trim();
        if title.is_empty() {
            return Err(TaskError::EmptyTitle);
        }
        let recurrence = Recurrence::new(start_time, end_time, pattern, interval)?;
        Self::new(title, TaskKind::Recurring(recurrence))
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    pub fn kind(&self) -> &TaskKind {
        &self.kind
    }

    pub fn task_type(&self) -> TaskType {
        match self.kind {
            TaskKind::Todo => TaskType::Todo,
            TaskKind::Deadline { .. } => TaskType::Deadline,
            TaskKind::Event { .. } => TaskType::Event,
            TaskKind::Recurring(_) => TaskType::Recurring,
        }
    }

    pub fn type_tag(&self) -> &'static str {
        self.task_type().tag()
    }

    pub fn recurrence(&self) -> Option<&Recurrence> {
        match &self.kind {
            TaskKind::Recurring(r) => Some(r),
            _ => None,
        }
    }

    pub fn recurrence_mut(&mut self) -> Option<&mut Recurrence> {
        match &mut self.kind {
            TaskKind::Recurring(r) => Some(r),
            _ => None,
        }
    }

    pub fn mark(&mut self) {
        self.done = true;
    }

    pub fn unmark(&mut self) {
        self.done = false;
    }

    /// Variant payload in its stored form, in field order
    pub fn extra_fields(&self) -> Vec<String> {
        match &self.kind {
            TaskKind::Todo => Vec::new(),
            TaskKind::Deadline { due_at } => vec![format_iso_date_time(due_at)],
            TaskKind::Event { starts_at, ends_at } => vec![
                format_iso_date_time(starts_at),
                format_iso_date_time(ends_at),
            ],
            TaskKind::Recurring(r) => vec![
                format_iso_date_time(&r.start_time()),
                format_iso_date_time(&r.end_time()),
                r.pattern().name().to_string(),
                r.interval().to_string(),
                r.next_occurrence().format("%Y-%m-%d").to_string(),
            ],
        }
    }

    /// Whether any part of the task falls on `date`.
    ///
    /// Recurring tasks are matched on their fixed start/end window, not on
    /// the next-occurrence cursor.
    pub fn falls_on(&self, date: NaiveDate) -> bool {
        match &self.kind {
            TaskKind::Todo => false,
            TaskKind::Deadline { due_at } => due_at.date() == date,
            TaskKind::Event { starts_at, ends_at } => {
                starts_at.date() <= date && date <= ends_at.date()
            }
            TaskKind::Recurring(r) => r.start_time().date() <= date && date <= r.end_time().date(),
        }
    }

    /// Display line, e.g. `[D][ ] return book (by: Dec 2 2019 18:00)`
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mark = if self.done { "X" } else { " " };
        write!(f, "[{}][{}] {}", self.type_tag(), mark, self.title)?;

        match &self.kind {
            TaskKind::Todo => Ok(()),
            TaskKind::Deadline { due_at } => write!(f, " (by: {})", format_display(due_at)),
            TaskKind::Event { starts_at, ends_at } => write!(
                f,
                " (from: {} to: {})",
                format_display(starts_at),
                format_display(ends_at)
            ),
            TaskKind::Recurring(r) => write!(
                f,
                " (from: {} to: {}, {}, next: {})",
                format_display(&r.start_time()),
                format_display(&r.end_time()),
                r.describe(),
                r.next_occurrence().format("%Y-%m-%d")
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_task_type_tags() {
        for ty in [
            TaskType::Todo,
            TaskType::Deadline,
            TaskType::Event,
            TaskType::Recurring,
        ] {
            assert_eq!(TaskType::parse(ty.tag()), Some(ty));
        }
        assert_eq!(TaskType::parse("X"), None);
        assert_eq!(TaskType::parse("t"), None);
    }

    #[test]
    fn test_title_is_trimmed_and_required() {
        let task = Task::todo("  read book  ").unwrap();
        assert_eq!(task.title(), "read book");

        assert_eq!(Task::todo("   ").unwrap_err(), TaskError::EmptyTitle);
        assert_eq!(
            Task::deadline("", at(2024, 1, 1, 0, 0)).unwrap_err(),
            TaskError::EmptyTitle
        );
    }

    #[test]
    fn test_title_rejects_separator() {
        assert!(matches!(
            Task::todo("a | b"),
            Err(TaskError::TitleContainsSeparator(_))
        ));
    }

    #[test]
    fn test_title_rejects_line_breaks() {
        assert_eq!(
            Task::todo("a\nb").unwrap_err(),
            TaskError::TitleContainsControl("a\nb".to_string())
        );
        assert!(matches!(
            Task::event("x\ry", at(2024, 1, 1, 9, 0), at(2024, 1, 1, 10, 0)),
            Err(TaskError::TitleContainsControl(_))
        ));
        // Surrounding newlines are trimmed away, not rejected
        assert_eq!(Task::todo("read book\n").unwrap().title(), "read book");
    }

    #[test]
    fn test_recurring_empty_title_checked_before_times() {
        let err = Task::recurring(
            " ",
            at(2024, 1, 2, 0, 0),
            at(2024, 1, 1, 0, 0),
            RecurrencePattern::Daily,
            1,
        )
        .unwrap_err();
        assert_eq!(err, TaskError::EmptyTitle);
    }

    #[test]
    fn test_mark_and_unmark() {
        let mut task = Task::todo("read book").unwrap();
        assert!(!task.is_done());
        task.mark();
        assert!(task.is_done());
        assert_eq!(task.render(), "[T][X] read book");
        task.unmark();
        assert!(!task.is_done());
        assert_eq!(task.render(), "[T][ ] read book");
    }

    #[test]
    fn test_render_deadline() {
        let task = Task::deadline("return book", at(2019, 12, 2, 18, 0)).unwrap();
        assert_eq!(task.render(), "[D][ ] return book (by: Dec 2 2019 18:00)");
    }

    #[test]
    fn test_render_event() {
        let task = Task::event("party", at(2023, 12, 24, 9, 0), at(2023, 12, 26, 10, 0)).unwrap();
        assert_eq!(
            task.render(),
            "[E][ ] party (from: Dec 24 2023 09:00 to: Dec 26 2023 10:00)"
        );
    }

    #[test]
    fn test_event_allows_end_before_start() {
        let task = Task::event("odd", at(2024, 1, 2, 0, 0), at(2024, 1, 1, 0, 0));
        assert!(task.is_ok());
    }

    #[test]
    fn test_render_recurring() {
        let task = Task::recurring(
            "standup",
            at(2024, 1, 1, 9, 0),
            at(2024, 1, 1, 9, 15),
            RecurrencePattern::Weekly,
            1,
        )
        .unwrap();
        assert_eq!(
            task.render(),
            "[R][ ] standup (from: Jan 1 2024 09:00 to: Jan 1 2024 09:15, weekly, next: 2024-01-01)"
        );

        let task = Task::recurring(
            "review",
            at(2024, 1, 1, 9, 0),
            at(2024, 1, 1, 10, 0),
            RecurrencePattern::Weekly,
            2,
        )
        .unwrap();
        assert_eq!(
            task.render(),
            "[R][ ] review (from: Jan 1 2024 09:00 to: Jan 1 2024 10:00, weekly (every 2 weeklys), next: 2024-01-01)"
        );
    }

    #[test]
    fn test_extra_fields() {
        assert!(Task::todo("a").unwrap().extra_fields().is_empty());
        assert_eq!(
            Task::deadline("a", at(2019, 12, 2, 18, 0))
                .unwrap()
                .extra_fields(),
            vec!["2019-12-02T18:00"]
        );
        assert_eq!(
            Task::event("a", at(2023, 12, 24, 9, 0), at(2023, 12, 26, 10, 0))
                .unwrap()
                .extra_fields(),
            vec!["2023-12-24T09:00", "2023-12-26T10:00"]
        );
        assert_eq!(
            Task::recurring(
                "a",
                at(2024, 1, 1, 9, 0),
                at(2024, 1, 1, 10, 0),
                RecurrencePattern::Monthly,
                3
            )
            .unwrap()
            .extra_fields(),
            vec![
                "2024-01-01T09:00",
                "2024-01-01T10:00",
                "monthly",
                "3",
                "2024-01-01"
            ]
        );
    }

    #[test]
    fn test_falls_on() {
        let todo = Task::todo("a").unwrap();
        assert!(!todo.falls_on(date(2024, 1, 1)));

        let deadline = Task::deadline("a", at(2024, 1, 1, 23, 59)).unwrap();
        assert!(deadline.falls_on(date(2024, 1, 1)));
        assert!(!deadline.falls_on(date(2024, 1, 2)));

        let mut recurring = Task::recurring(
            "a",
            at(2024, 1, 1, 9, 0),
            at(2024, 1, 2, 9, 0),
            RecurrencePattern::Daily,
            1,
        )
        .unwrap();
        recurring
            .recurrence_mut()
            .unwrap()
            .advance_to_next_occurrence()
            .unwrap();
        recurring
            .recurrence_mut()
            .unwrap()
            .advance_to_next_occurrence()
            .unwrap();
        assert!(recurring.falls_on(date(2024, 1, 2)));
        assert!(!recurring.falls_on(date(2024, 1, 3)));
    }
}
