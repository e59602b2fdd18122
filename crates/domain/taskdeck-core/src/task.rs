use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::status::EntityStatus;
use crate::todolist::TodolistId;

pub type TaskId = String;

/// Encoded as an integer on the wire.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum TaskStatus {
    #[default]
    New,
    InProgress,
    Completed,
    Draft,
}

impl TaskStatus {
    pub fn is_completed(self) -> bool {
        self == TaskStatus::Completed
    }
}

impl TryFrom<u8> for TaskStatus {
    type Error = String;

    fn try_from(v: u8) -> Result<Self, Self::Error> {
        match v {
            0 => Ok(TaskStatus::New),
            1 => Ok(TaskStatus::InProgress),
            2 => Ok(TaskStatus::Completed),
            3 => Ok(TaskStatus::Draft),
            other => Err(format!("unknown task status {other}")),
        }
    }
}

impl From<TaskStatus> for u8 {
    fn from(s: TaskStatus) -> Self {
        match s {
            TaskStatus::New => 0,
            TaskStatus::InProgress => 1,
            TaskStatus::Completed => 2,
            TaskStatus::Draft => 3,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum TaskPriority {
    #[default]
    Low,
    Middle,
    Hi,
    Urgently,
    Later,
}

impl TryFrom<u8> for TaskPriority {
    type Error = String;

    fn try_from(v: u8) -> Result<Self, Self::Error> {
        match v {
            0 => Ok(TaskPriority::Low),
            1 => Ok(TaskPriority::Middle),
            2 => Ok(TaskPriority::Hi),
            3 => Ok(TaskPriority::Urgently),
            4 => Ok(TaskPriority::Later),
            other => Err(format!("unknown task priority {other}")),
        }
    }
}

impl From<TaskPriority> for u8 {
    fn from(p: TaskPriority) -> Self {
        match p {
            TaskPriority::Low => 0,
            TaskPriority::Middle => 1,
            TaskPriority::Hi => 2,
            TaskPriority::Urgently => 3,
            TaskPriority::Later => 4,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    pub todo_list_id: TodolistId,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: TaskStatus,
    #[serde(default)]
    pub priority: TaskPriority,
    #[serde(default)]
    pub order: i64,
    #[serde(default)]
    pub added_date: Option<NaiveDateTime>,
    #[serde(default)]
    pub start_date: Option<NaiveDateTime>,
    #[serde(default)]
    pub deadline: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TaskDomain {
    pub task: Task,
    pub entity_status: EntityStatus,
}

impl From<Task> for TaskDomain {
    fn from(task: Task) -> Self {
        Self {
            task,
            entity_status: EntityStatus::Idle,
        }
    }
}

/// Tasks bucketed by their owning list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskCollection {
    by_list: BTreeMap<TodolistId, Vec<TaskDomain>>,
}

impl TaskCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes sure a (possibly empty) bucket exists for `list_id`.
    pub fn open_bucket(&mut self, list_id: &str) {
        self.by_list.entry(list_id.to_string()).or_default();
    }

    pub fn reset_buckets<'a>(&mut self, list_ids: impl IntoIterator<Item = &'a str>) {
        self.by_list = list_ids
            .into_iter()
            .map(|id| (id.to_string(), Vec::new()))
            .collect();
    }

    pub fn drop_bucket(&mut self, list_id: &str) {
        self.by_list.remove(list_id);
    }

    pub fn replace_bucket(&mut self, list_id: &str, tasks: Vec<Task>) {
        self.by_list.insert(
            list_id.to_string(),
            tasks.into_iter().map(TaskDomain::from).collect(),
        );
    }

    pub fn insert_front(&mut self, task: Task) {
        self.by_list
            .entry(task.todo_list_id.clone())
            .or_default()
            .insert(0, TaskDomain::from(task));
    }

    pub fn remove(&mut self, list_id: &str, task_id: &str) -> bool {
        let Some(bucket) = self.by_list.get_mut(list_id) else {
            return false;
        };
        match bucket.iter().position(|t| t.task.id == task_id) {
            Some(ix) => {
                bucket.remove(ix);
                true
            }
            None => false,
        }
    }

    pub fn set_entity_status(&mut self, list_id: &str, task_id: &str, status: EntityStatus) {
        if let Some(t) = self
            .by_list
            .get_mut(list_id)
            .and_then(|bucket| bucket.iter_mut().find(|t| t.task.id == task_id))
        {
            t.entity_status = status;
        }
    }

    pub fn clear(&mut self) {
        self.by_list.clear();
    }

    pub fn bucket(&self, list_id: &str) -> &[TaskDomain] {
        self.by_list.get(list_id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn get(&self, list_id: &str, task_id: &str) -> Option<&TaskDomain> {
        self.bucket(list_id).iter().find(|t| t.task.id == task_id)
    }

    pub fn has_bucket(&self, list_id: &str) -> bool {
        self.by_list.contains_key(list_id)
    }

    pub fn is_empty(&self) -> bool {
        self.by_list.is_empty()
    }
}
