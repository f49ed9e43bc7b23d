use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TaskError {
    #[error("Cannot parse date: {0}")]
    InvalidDate(String),

    #[error("Cannot parse date-time: {0}")]
    InvalidDateTime(String),

    #[error("Task title cannot be empty")]
    EmptyTitle,

    #[error("Task title cannot contain '|': {0}")]
    TitleContainsSeparator(String),

    #[error("Task title cannot contain line breaks or control characters: {0:?}")]
    TitleContainsControl(String),

    #[error("Start time cannot be after end time")]
    StartAfterEnd,

    #[error("Interval must be positive, got: {0}")]
    NonPositiveInterval(i64),

    #[error("Interval is too large, got: {0}")]
    IntervalTooLarge(i64),

    #[error("Invalid recurrence pattern: {0}")]
    UnknownPattern(String),

    #[error("Next occurrence after {0} is outside the supported calendar range")]
    OccurrenceOverflow(chrono::NaiveDate),

    #[error("Bad type: {0}")]
    UnknownType(String),

    #[error("Line must have at least 3 parts (type, done, description), got {0}")]
    TooFewFields(usize),

    #[error("{kind} task must have exactly {expected} parts, got {actual}")]
    FieldCount {
        kind: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("Done status must be '0' or '1', got: {0}")]
    InvalidDoneFlag(String),

    #[error("Invalid recurring task format: {0}")]
    InvalidRecurringField(String),

    #[error("Index must be between 1 and {size}, got: {index}")]
    IndexOutOfRange { index: usize, size: usize },

    #[error("Task {0} is not a recurring task")]
    NotRecurring(usize),
}

pub type Result<T> = std::result::Result<T, TaskError>;
