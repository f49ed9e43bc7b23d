use thiserror::Error;

use crate::storage::StorageError;
use crate::task::TaskError;

#[derive(Debug, Error)]
pub enum CommandError {
    #[error(
        "I don't understand that command. Try: list, todo, deadline, event, recurring, \
         mark, unmark, delete, find, on, advance, upcoming, or bye"
    )]
    Unknown(String),

    #[error("{0}")]
    Usage(&'static str),

    #[error("Invalid task number: {0}")]
    InvalidNumber(String),

    #[error("Days must be a positive number, got: {0}")]
    InvalidDays(String),

    #[error(transparent)]
    Task(#[from] TaskError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

pub type Result<T> = std::result::Result<T, CommandError>;
