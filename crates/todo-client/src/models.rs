//! Task Models
//!
//! Data structures matching the backend task record, plus the
//! projection the list view is rendered from.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::{ClientError, ClientResult};

/// Formats accepted for a due date typed into the form
const DUE_DATE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S"];

const CREATED_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Task record (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: u32,
    pub content: String,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub due_date: Option<NaiveDateTime>,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
}

impl Task {
    /// Due date has passed. Display only, never stored.
    pub fn is_overdue(&self, now: NaiveDateTime) -> bool {
        self.due_date.map_or(false, |due| due < now)
    }

    /// Creation time as stamped by the backend, which records naive UTC
    pub fn created_label(&self) -> Option<String> {
        self.created_at.map(|at| format!("Created {} UTC", at.format(CREATED_FORMAT)))
    }
}

/// Number of tasks not yet completed
pub fn pending_count(tasks: &[Task]) -> usize {
    tasks.iter().filter(|t| !t.completed).count()
}

/// Create payload
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewTask {
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDateTime>,
}

/// Update payload
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TaskPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

impl TaskPatch {
    pub fn completed(completed: bool) -> Self {
        Self { completed: Some(completed) }
    }
}

/// Raw values from the new-task form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskDraft {
    pub content: String,
    pub notes: String,
    pub due_date: String,
}

impl TaskDraft {
    pub fn new(
        content: impl Into<String>,
        notes: impl Into<String>,
        due_date: impl Into<String>,
    ) -> Self {
        Self {
            content: content.into(),
            notes: notes.into(),
            due_date: due_date.into(),
        }
    }

    /// Turn form input into a create payload.
    ///
    /// Blank checks ignore whitespace, but text is sent exactly as typed.
    pub fn validate(&self) -> ClientResult<NewTask> {
        if self.content.trim().is_empty() {
            return Err(ClientError::InvalidInput("Task content cannot be empty".to_string()));
        }

        let notes = Some(&self.notes).filter(|n| !n.trim().is_empty()).cloned();

        let due_date = match self.due_date.trim() {
            "" => None,
            raw => Some(parse_due_date(raw)?),
        };

        Ok(NewTask {
            content: self.content.clone(),
            notes,
            due_date,
        })
    }
}

fn parse_due_date(raw: &str) -> ClientResult<NaiveDateTime> {
    DUE_DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .ok_or_else(|| ClientError::InvalidInput(format!("Invalid due date: {}", raw)))
}

/// A task as shown in the list
#[derive(Debug, Clone, PartialEq)]
pub struct TaskRow {
    pub task: Task,
    pub overdue: bool,
}

/// Everything one render needs, built from a single successful fetch
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskListSnapshot {
    /// One row per task, in server order
    pub rows: Vec<TaskRow>,
    pub pending: usize,
}

impl TaskListSnapshot {
    pub fn project(tasks: Vec<Task>, now: NaiveDateTime) -> Self {
        let pending = pending_count(&tasks);
        let rows = tasks
            .into_iter()
            .map(|task| {
                let overdue = task.is_overdue(now);
                TaskRow { task, overdue }
            })
            .collect();
        Self { rows, pending }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use serde_json::json;

    fn at(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(h, 0, 0).unwrap()
    }

    #[test]
    fn test_task_from_backend_json() {
        let value = json!({
            "id": 3,
            "content": "Buy milk",
            "notes": null,
            "due_date": "2024-05-01T10:00:00",
            "completed": false,
            "created_at": "2024-04-30T08:15:42.123456"
        });
        let task: Task = serde_json::from_value(value).unwrap();

        assert_eq!(task.id, 3);
        assert_eq!(task.content, "Buy milk");
        assert_eq!(task.notes, None);
        assert_eq!(task.due_date, Some(at(2024, 5, 1, 10)));
        assert!(task.created_at.is_some());
    }

    #[test]
    fn test_task_missing_optionals() {
        let task: Task = serde_json::from_value(json!({"id": 1, "content": "Buy milk"})).unwrap();
        assert!(!task.completed);
        assert_eq!(task.due_date, None);
    }

    #[test]
    fn test_legacy_task_field_rejected() {
        let result: Result<Task, _> = serde_json::from_value(json!({"id": 1, "task": "Buy milk"}));
        assert!(result.is_err());
    }

    #[test]
    fn test_overdue() {
        let mut task: Task = serde_json::from_value(json!({"id": 1, "content": "x"})).unwrap();
        let now = at(2024, 5, 2, 12);
        assert!(!task.is_overdue(now));

        task.due_date = Some(at(2024, 5, 1, 10));
        assert!(task.is_overdue(now));

        task.due_date = Some(at(2024, 5, 3, 10));
        assert!(!task.is_overdue(now));
    }

    #[test]
    fn test_draft_validation() {
        assert!(matches!(TaskDraft::default().validate(), Err(ClientError::InvalidInput(_))));
        assert!(TaskDraft::new("   ", "", "").validate().is_err());

        let new_task = TaskDraft::new(" Buy milk ", "  ", "").validate().unwrap();
        assert_eq!(new_task.content, " Buy milk ");
        assert_eq!(new_task.notes, None);
        assert_eq!(new_task.due_date, None);

        let new_task = TaskDraft::new("Call mom", "after 6pm", "2024-05-01T18:30")
            .validate()
            .unwrap();
        assert_eq!(new_task.notes.as_deref(), Some("after 6pm"));
        assert_eq!(
            new_task.due_date,
            Some(NaiveDate::from_ymd_opt(2024, 5, 1).unwrap().and_hms_opt(18, 30, 0).unwrap())
        );

        assert!(TaskDraft::new("Call mom", "", "tomorrow").validate().is_err());
    }

    #[test]
    fn test_draft_keeps_markdown_whitespace() {
        let notes = "    let x = 1;\nline one  \nline two\n";
        let new_task = TaskDraft::new("Code", notes, "").validate().unwrap();
        assert_eq!(new_task.notes.as_deref(), Some(notes));

        let payload = serde_json::to_value(&new_task).unwrap();
        assert_eq!(payload["notes"], json!(notes));
    }

    #[test]
    fn test_created_label_is_utc() {
        let mut task: Task = serde_json::from_value(json!({"id": 1, "content": "x"})).unwrap();
        assert_eq!(task.created_label(), None);

        task.created_at = Some(at(2024, 4, 30, 8));
        assert_eq!(task.created_label().as_deref(), Some("Created 2024-04-30 08:00 UTC"));
    }

    #[test]
    fn test_new_task_payload_omits_empty_fields() {
        let payload = TaskDraft::new("Buy milk", "", "").validate().unwrap();
        assert_eq!(serde_json::to_value(&payload).unwrap(), json!({"content": "Buy milk"}));

        let payload = TaskDraft::new("Buy milk", "2%", "2024-05-01T10:00").validate().unwrap();
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({"content": "Buy milk", "notes": "2%", "due_date": "2024-05-01T10:00:00"})
        );
    }

    #[test]
    fn test_snapshot_projection() {
        let tasks: Vec<Task> = serde_json::from_value(json!([
            {"id": 2, "content": "b", "completed": true},
            {"id": 1, "content": "a", "completed": false, "due_date": "2024-01-01T00:00:00"},
            {"id": 3, "content": "c", "completed": false}
        ]))
        .unwrap();

        let snapshot = TaskListSnapshot::project(tasks, at(2024, 5, 1, 0));

        assert_eq!(snapshot.len(), 3);
        assert_eq!(snapshot.pending, 2);
        let ids: Vec<u32> = snapshot.rows.iter().map(|r| r.task.id).collect();
        assert_eq!(ids, vec![2, 1, 3]);
        assert!(snapshot.rows[1].overdue);
        assert!(!snapshot.rows[2].overdue);
    }
}
