//! `usagi list` command implementation

use anyhow::Result;
use chrono::{NaiveDate, NaiveDateTime};
use clap::Args;
use serde::Serialize;

use crate::command::{Command, Session};
use crate::task::{RecurrencePattern, Task, TaskKind, TaskType};

#[derive(Args)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Serialize)]
struct TaskJson {
    index: usize,
    #[serde(rename = "type")]
    task_type: TaskType,
    title: String,
    done: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    by: Option<NaiveDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    from: Option<NaiveDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    to: Option<NaiveDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pattern: Option<RecurrencePattern>,
    #[serde(skip_serializing_if = "Option::is_none")]
    interval: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    next_occurrence: Option<NaiveDate>,
}

impl TaskJson {
    fn new(index: usize, task: &Task) -> Self {
        let mut json = Self {
            index,
            task_type: task.task_type(),
            title: task.title().to_string(),
            done: task.is_done(),
            by: None,
            from: None,
            to: None,
            pattern: None,
            interval: None,
            next_occurrence: None,
        };
        match task.kind() {
            TaskKind::Todo => {}
            TaskKind::Deadline { due_at } => json.by = Some(*due_at),
            TaskKind::Event { starts_at, ends_at } => {
                json.from = Some(*starts_at);
                json.to = Some(*ends_at);
            }
            TaskKind::Recurring(r) => {
                json.from = Some(r.start_time());
                json.to = Some(r.end_time());
                json.pattern = Some(r.pattern());
                json.interval = Some(r.interval());
                json.next_occurrence = Some(r.next_occurrence());
            }
        }
        json
    }
}

fn to_json(session: &Session) -> Result<String> {
    let tasks: Vec<TaskJson> = session
        .tasks()
        .all()
        .iter()
        .enumerate()
        .map(|(i, task)| TaskJson::new(i + 1, task))
        .collect();
    Ok(serde_json::to_string_pretty(&tasks)?)
}

pub fn run(session: &mut Session, args: ListArgs, today: NaiveDate) -> Result<()> {
    if args.json {
        println!("{}", to_json(session)?);
        return Ok(());
    }

    println!("{}", session.execute(&Command::List, today)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::Storage;
    use crate::task::TaskList;
    use serde_json::Value;
    use tempfile::tempdir;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    #[test]
    fn test_json_output_shape() {
        let temp = tempdir().unwrap();
        let mut done = Task::todo("read book").unwrap();
        done.mark();
        let tasks = TaskList::from_tasks(vec![
            done,
            Task::deadline("return book", at(2019, 12, 2, 18, 0)).unwrap(),
            Task::recurring(
                "standup",
                at(2024, 1, 1, 9, 0),
                at(2024, 1, 1, 9, 15),
                RecurrencePattern::Weekly,
                2,
            )
            .unwrap(),
        ]);
        let session = Session::with_tasks(tasks, Storage::new(temp.path().join("t.txt")), 7);

        let value: Value = serde_json::from_str(&to_json(&session).unwrap()).unwrap();
        let items = value.as_array().unwrap();
        assert_eq!(items.len(), 3);

        assert_eq!(items[0]["index"], 1);
        assert_eq!(items[0]["type"], "todo");
        assert_eq!(items[0]["done"], true);
        assert!(items[0].get("by").is_none());

        assert_eq!(items[1]["type"], "deadline");
        assert_eq!(items[1]["by"], "2019-12-02T18:00:00");

        assert_eq!(items[2]["type"], "recurring");
        assert_eq!(items[2]["pattern"], "weekly");
        assert_eq!(items[2]["interval"], 2);
        assert_eq!(items[2]["next_occurrence"], "2024-01-01");
    }

    #[test]
    fn test_json_empty_list() {
        let temp = tempdir().unwrap();
        let session =
            Session::with_tasks(TaskList::new(), Storage::new(temp.path().join("t.txt")), 7);
        assert_eq!(to_json(&session).unwrap(), "[]");
    }
}
