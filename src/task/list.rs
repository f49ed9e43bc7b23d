//! Ordered task collection with 1-based positions

use chrono::{Days, NaiveDate};
use tracing::debug;

use super::error::{Result, TaskError};
use super::model::Task;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// All tasks in insertion order
    pub fn all(&self) -> &[Task] {
        &self.tasks
    }

    pub fn add(&mut self, task: Task) {
        self.tasks.push(task);
    }

    fn offset(&self, index: usize) -> Result<usize> {
        if index == 0 || index > self.tasks.len() {
            return Err(TaskError::IndexOutOfRange {
                index,
                size: self.tasks.len(),
            });
        }
        Ok(index - 1)
    }

    pub fn get(&self, index: usize) -> Result<&Task> {
        let offset = self.offset(index)?;
        Ok(&self.tasks[offset])
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut Task> {
        let offset = self.offset(index)?;
        Ok(&mut self.tasks[offset])
    }

    /// Remove the task at `index`; later tasks shift down by one.
    pub fn delete(&mut self, index: usize) -> Result<Task> {
        let offset = self.offset(index)?;
        Ok(self.tasks.remove(offset))
    }

    pub fn mark(&mut self, index: usize) -> Result<&Task> {
        let task = self.get_mut(index)?;
        task.mark();
        Ok(&*task)
    }

    pub fn unmark(&mut self, index: usize) -> Result<&Task> {
        let task = self.get_mut(index)?;
        task.unmark();
        Ok(&*task)
    }

    /// Deadlines due on `date`, and events or recurring windows that span it
    pub fn tasks_on(&self, date: NaiveDate) -> Vec<&Task> {
        self.tasks.iter().filter(|t| t.falls_on(date)).collect()
    }

    /// Case-insensitive substring search over titles
    pub fn find(&self, keyword: &str) -> Vec<&Task> {
        let keyword = keyword.trim().to_lowercase();
        if keyword.is_empty() {
            return Vec::new();
        }
        self.tasks
            .iter()
            .filter(|t| t.title().to_lowercase().contains(&keyword))
            .collect()
    }

    /// Advance the recurring task at `index`, returning the old and new cursor.
    pub fn advance_recurring(&mut self, index: usize) -> Result<(NaiveDate, NaiveDate)> {
        let task = self.get_mut(index)?;
        let recurrence = task
            .recurrence_mut()
            .ok_or(TaskError::NotRecurring(index))?;
        let previous = recurrence.next_occurrence();
        let next = recurrence.advance_to_next_occurrence()?;
        debug!("Advanced task {} from {} to {}", index, previous, next);
        Ok((previous, next))
    }

    /// Advance every recurring task. Either all advance or none do.
    pub fn advance_all_recurring(&mut self) -> Result<usize> {
        let mut planned = Vec::new();
        for (offset, task) in self.tasks.iter().enumerate() {
            if let Some(recurrence) = task.recurrence() {
                planned.push((offset, recurrence.peek_next_occurrence()?));
            }
        }

        for (offset, next) in &planned {
            if let Some(recurrence) = self.tasks[*offset].recurrence_mut() {
                recurrence.set_next_occurrence(*next);
            }
        }
        debug!("Advanced {} recurring task(s)", planned.len());
        Ok(planned.len())
    }

    /// Recurring tasks whose next occurrence lies in `[today, today + days]`,
    /// paired with their 1-based position.
    pub fn upcoming_recurring(&self, today: NaiveDate, days: u32) -> Vec<(usize, &Task)> {
        let end = today
            .checked_add_days(Days::new(u64::from(days)))
            .unwrap_or(NaiveDate::MAX);
        self.tasks
            .iter()
            .enumerate()
            .filter_map(|(offset, task)| {
                let next = task.recurrence()?.next_occurrence();
                (today <= next && next <= end).then_some((offset + 1, task))
            })
            .collect()
    }
}
