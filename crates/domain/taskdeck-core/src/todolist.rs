use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::status::EntityStatus;
use crate::task::Task;

pub type TodolistId = String;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todolist {
    pub id: TodolistId,
    pub title: String,
    #[serde(default)]
    pub added_date: Option<NaiveDateTime>,
    #[serde(default)]
    pub order: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateTodolistTitle {
    pub id: TodolistId,
    pub title: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterValue {
    #[default]
    All,
    Active,
    Completed,
}

impl FilterValue {
    pub fn admits(self, task: &Task) -> bool {
        match self {
            FilterValue::All => true,
            FilterValue::Active => !task.status.is_completed(),
            FilterValue::Completed => task.status.is_completed(),
        }
    }
}

/// A server list plus the client-only fields the UI needs.
#[derive(Debug, Clone, PartialEq)]
pub struct TodolistDomain {
    pub list: Todolist,
    pub filter: FilterValue,
    pub entity_status: EntityStatus,
}

impl From<Todolist> for TodolistDomain {
    fn from(list: Todolist) -> Self {
        Self {
            list,
            filter: FilterValue::All,
            entity_status: EntityStatus::Idle,
        }
    }
}

impl TodolistDomain {
    pub fn id(&self) -> &str {
        &self.list.id
    }
}

/// Ordered todo-list collection. Every method is a pure state transition;
/// unknown ids are ignored.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TodolistCollection {
    items: Vec<TodolistDomain>,
}

impl TodolistCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn replace_all(&mut self, lists: Vec<Todolist>) {
        self.items = lists.into_iter().map(TodolistDomain::from).collect();
    }

    /// New lists go to the front, matching the server's ordering of fresh lists.
    pub fn insert_front(&mut self, list: Todolist) {
        self.items.insert(0, TodolistDomain::from(list));
    }

    pub fn remove(&mut self, id: &str) -> bool {
        match self.items.iter().position(|l| l.id() == id) {
            Some(ix) => {
                self.items.remove(ix);
                true
            }
            None => false,
        }
    }

    pub fn rename(&mut self, id: &str, title: impl Into<String>) {
        if let Some(l) = self.get_mut(id) {
            l.list.title = title.into();
        }
    }

    pub fn set_filter(&mut self, id: &str, filter: FilterValue) {
        if let Some(l) = self.get_mut(id) {
            l.filter = filter;
        }
    }

    pub fn set_entity_status(&mut self, id: &str, status: EntityStatus) {
        if let Some(l) = self.get_mut(id) {
            l.entity_status = status;
        }
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn get(&self, id: &str) -> Option<&TodolistDomain> {
        self.items.iter().find(|l| l.id() == id)
    }

    fn get_mut(&mut self, id: &str) -> Option<&mut TodolistDomain> {
        self.items.iter_mut().find(|l| l.id() == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &TodolistDomain> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
