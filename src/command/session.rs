//! A loaded task list bound to its storage

use chrono::NaiveDate;
use tracing::{debug, info};

use super::error::Result;
use super::Command;
use crate::storage::Storage;
use crate::task::{Task, TaskList};

const EXIT_MESSAGE: &str = "Goodbye! See you next time!";

pub struct Session {
    tasks: TaskList,
    storage: Storage,
    upcoming_days: u32,
}

impl Session {
    /// Load the task file behind `storage`
    pub fn open(storage: Storage, upcoming_days: u32) -> Result<Self> {
        let tasks = storage.load()?;
        Ok(Self::with_tasks(tasks, storage, upcoming_days))
    }

    pub fn with_tasks(tasks: TaskList, storage: Storage, upcoming_days: u32) -> Self {
        Self {
            tasks,
            storage,
            upcoming_days,
        }
    }

    pub fn tasks(&self) -> &TaskList {
        &self.tasks
    }

    pub fn storage(&self) -> &Storage {
        &self.storage
    }

    /// Run `command` and return the message for the user.
    ///
    /// Mutations are applied to a copy of the list and only kept once the
    /// task file has been rewritten, so on any error the list is unchanged.
    pub fn execute(&mut self, command: &Command, today: NaiveDate) -> Result<String> {
        match command {
            Command::List => Ok(self.list()),
            Command::Find(keyword) => Ok(self.find(keyword)),
            Command::On(date) => Ok(self.on(*date)),
            Command::Upcoming(days) => {
                Ok(self.upcoming(today, days.unwrap_or(self.upcoming_days)))
            }
            Command::Exit => Ok(EXIT_MESSAGE.to_string()),
            Command::Todo { title } => {
                self.commit(command, |tasks| Ok(added(tasks, Task::todo(title)?, "task")))
            }
            Command::Deadline { title, by } => self.commit(command, |tasks| {
                Ok(added(tasks, Task::deadline(title, *by)?, "task"))
            }),
            Command::Event { title, from, to } => self.commit(command, |tasks| {
                Ok(added(tasks, Task::event(title, *from, *to)?, "task"))
            }),
            Command::Recurring {
                title,
                from,
                to,
                pattern,
                interval,
            } => self.commit(command, |tasks| {
                let task = Task::recurring(title, *from, *to, *pattern, *interval)?;
                Ok(added(tasks, task, "recurring task"))
            }),
            Command::Mark(index) => self.commit(command, |tasks| {
                Ok(format!(
                    "Nice! I've marked this task as done:\n  {}",
                    tasks.mark(*index)?
                ))
            }),
            Command::Unmark(index) => self.commit(command, |tasks| {
                Ok(format!(
                    "OK, I've marked this task as not done yet:\n  {}",
                    tasks.unmark(*index)?
                ))
            }),
            Command::Delete(index) => self.commit(command, |tasks| {
                let removed = tasks.delete(*index)?;
                Ok(format!(
                    "Noted. I've removed this task:\n  {}\nNow you have {} task(s) in the list.",
                    removed,
                    tasks.len()
                ))
            }),
            Command::Advance(Some(index)) => self.commit(command, |tasks| {
                let (previous, next) = tasks.advance_recurring(*index)?;
                let shown = tasks.get(*index)?.render();
                Ok(format!(
                    "Advanced recurring task '{}' from {} to {}.",
                    shown.strip_prefix("[R]").unwrap_or(&shown),
                    previous,
                    next
                ))
            }),
            Command::Advance(None) => {
                self.commit(command, |tasks| match tasks.advance_all_recurring()? {
                    0 => Ok("No recurring tasks found to advance.".to_string()),
                    n => Ok(format!(
                        "Advanced {} recurring task(s) to their next occurrence.",
                        n
                    )),
                })
            }
        }
    }

    fn commit(
        &mut self,
        command: &Command,
        change: impl FnOnce(&mut TaskList) -> Result<String>,
    ) -> Result<String> {
        let mut working = self.tasks.clone();
        let message = change(&mut working)?;
        self.storage.save(&working)?;
        self.tasks = working;
        info!("Saved {} task(s) after {:?}", self.tasks.len(), command);
        Ok(message)
    }

    fn list(&self) -> String {
        if self.tasks.is_empty() {
            "You have no tasks in your list.".to_string()
        } else {
            numbered("Here are your tasks:", self.tasks.all().iter())
        }
    }

    fn find(&self, keyword: &str) -> String {
        let matches = self.tasks.find(keyword);
        if matches.is_empty() {
            debug!("No title matched {:?}", keyword);
            "No tasks found matching your search.".to_string()
        } else {
            numbered("Here are the matching tasks in your list:", matches)
        }
    }

    fn on(&self, date: NaiveDate) -> String {
        let on_date = self.tasks.tasks_on(date);
        let shown = date.format("%b %d %Y");
        if on_date.is_empty() {
            format!("You have no tasks on {}.", shown)
        } else {
            numbered(&format!("Here are your tasks on {}:", shown), on_date)
        }
    }

    fn upcoming(&self, today: NaiveDate, days: u32) -> String {
        let upcoming = self.tasks.upcoming_recurring(today, days);
        if upcoming.is_empty() {
            return format!("No recurring tasks due in the next {} day(s).", days);
        }

        let mut lines = vec![format!(
            "Here are your recurring tasks due in the next {} day(s):",
            days
        )];
        for (position, task) in upcoming {
            let Some(recurrence) = task.recurrence() else {
                continue;
            };
            let next = recurrence.next_occurrence();
            lines.push(format!(
                "  {}. [{}] {} (from: {} to: {}, {}) (due: {})",
                position,
                if task.is_done() { "X" } else { " " },
                task.title(),
                recurrence.start_time_for(next).format("%H:%M"),
                recurrence.end_time_for(next).format("%H:%M"),
                recurrence.describe(),
                next.format("%b %-d, %Y")
            ));
        }
        lines.join("\n")
    }
}

fn added(tasks: &mut TaskList, task: Task, noun: &str) -> String {
    let shown = task.render();
    tasks.add(task);
    format!(
        "Got it. I've added this {}:\n  {}\nNow you have {} task(s) in the list.",
        noun,
        shown,
        tasks.len()
    )
}

fn numbered<'a>(header: &str, tasks: impl IntoIterator<Item = &'a Task>) -> String {
    let mut lines = vec![header.to_string()];
    for (i, task) in tasks.into_iter().enumerate() {
        lines.push(format!("{}.{}", i + 1, task));
    }
    lines.join("\n")
}
