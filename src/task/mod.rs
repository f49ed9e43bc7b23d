//! Task management module
//!
//! This module provides the task core:
//! - Task variants (todo, deadline, event, recurring) and their display form
//! - One-line text encoding used by the task file
//! - Flexible date and date-time parsing
//! - The ordered task list with date and keyword queries

pub mod codec;
pub mod datetime;
pub mod error;
pub mod list;
pub mod model;
pub mod recurrence;

pub use error::TaskError;
pub use list::TaskList;
pub use model::{Task, TaskKind, TaskType};
pub use recurrence::{Recurrence, RecurrencePattern};
