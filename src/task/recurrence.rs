//! Recurrence patterns and the next-occurrence cursor

use chrono::{Days, Months, NaiveDate, NaiveDateTime};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use super::error::{Result, TaskError};

/// Unit by which a recurring task's next occurrence advances
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RecurrencePattern {
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl RecurrencePattern {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
        }
    }

    /// Add `interval` units of this pattern to `date`. Months and years clamp
    /// to the last day of the target month.
    pub fn step(&self, date: NaiveDate, interval: u32) -> Option<NaiveDate> {
        match self {
            Self::Daily => date.checked_add_days(Days::new(u64::from(interval))),
            Self::Weekly => date.checked_add_days(Days::new(u64::from(interval) * 7)),
            Self::Monthly => date.checked_add_months(Months::new(interval)),
            Self::Yearly => date.checked_add_months(Months::new(interval.checked_mul(12)?)),
        }
    }
}

impl FromStr for RecurrencePattern {
    type Err = TaskError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "daily" => Ok(Self::Daily),
            "weekly" => Ok(Self::Weekly),
            "monthly" => Ok(Self::Monthly),
            "yearly" => Ok(Self::Yearly),
            _ => Err(TaskError::UnknownPattern(s.to_string())),
        }
    }
}

impl fmt::Display for RecurrencePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Schedule of a recurring task.
///
/// The `start_time`/`end_time` window is fixed at creation. `next_occurrence`
/// is an independent cursor that only moves through
/// [`Recurrence::advance_to_next_occurrence`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recurrence {
    start_time: NaiveDateTime,
    end_time: NaiveDateTime,
    pattern: RecurrencePattern,
    interval: u32,
    next_occurrence: NaiveDate,
}

impl Recurrence {
    pub fn new(
        start_time: NaiveDateTime,
        end_time: NaiveDateTime,
        pattern: RecurrencePattern,
        interval: i64,
    ) -> Result<Self> {
        if start_time > end_time {
            return Err(TaskError::StartAfterEnd);
        }
        if interval <= 0 {
            return Err(TaskError::NonPositiveInterval(interval));
        }
        let interval =
            u32::try_from(interval).map_err(|_| TaskError::IntervalTooLarge(interval))?;

        Ok(Self {
            start_time,
            end_time,
            pattern,
            interval,
            next_occurrence: start_time.date(),
        })
    }

    pub fn start_time(&self) -> NaiveDateTime {
        self.start_time
    }

    pub fn end_time(&self) -> NaiveDateTime {
        self.end_time
    }

    pub fn pattern(&self) -> RecurrencePattern {
        self.pattern
    }

    pub fn interval(&self) -> u32 {
        self.interval
    }

    pub fn next_occurrence(&self) -> NaiveDate {
        self.next_occurrence
    }

    /// Overwrite the cursor with an already-validated date
    pub(crate) fn set_next_occurrence(&mut self, date: NaiveDate) {
        self.next_occurrence = date;
    }

    /// The occurrence that would follow the current cursor
    pub fn peek_next_occurrence(&self) -> Result<NaiveDate> {
        self.pattern
            .step(self.next_occurrence, self.interval)
            .ok_or(TaskError::OccurrenceOverflow(self.next_occurrence))
    }

    /// Move the cursor forward by one interval. On overflow the cursor is unchanged.
    pub fn advance_to_next_occurrence(&mut self) -> Result<NaiveDate> {
        let next = self.peek_next_occurrence()?;
        self.next_occurrence = next;
        Ok(next)
    }

    pub fn occurs_on(&self, date: NaiveDate) -> bool {
        date == self.next_occurrence
    }

    /// Start time moved onto `occurrence`, keeping the time of day
    pub fn start_time_for(&self, occurrence: NaiveDate) -> NaiveDateTime {
        occurrence.and_time(self.start_time.time())
    }

    /// End time moved onto `occurrence`, keeping the time of day
    pub fn end_time_for(&self, occurrence: NaiveDate) -> NaiveDateTime {
        occurrence.and_time(self.end_time.time())
    }

    /// Pattern name plus the interval suffix, e.g. `weekly (every 2 weeklys)`
    pub fn describe(&self) -> String {
        if self.interval == 1 {
            self.pattern.name().to_string()
        } else {
            format!(
                "{} (every {} {}s)",
                self.pattern.name(),
                self.interval,
                self.pattern.name()
            )
        }
    }
}
