use taskdeck_core::{
    EntityStatus, RequestStatus, TaskCollection, TaskDomain, TaskId, TodolistCollection,
    TodolistId,
};

/// Global request status and banner, shared by every operation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppSlice {
    pub status: RequestStatus,
    pub error: Option<String>,
    pub is_initialized: bool,
    /// Operations currently between their start and their final reset.
    pub in_flight: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthState {
    pub is_logged_in: bool,
}

/// Identifies the record an entity-scoped status belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EntityKey {
    Todolist(TodolistId),
    Task { list_id: TodolistId, task_id: TaskId },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    pub app: AppSlice,
    pub auth: AuthState,
    pub todolists: TodolistCollection,
    pub tasks: TaskCollection,
}

impl AppState {
    pub fn entity_status(&self, key: &EntityKey) -> Option<EntityStatus> {
        match key {
            EntityKey::Todolist(id) => self.todolists.get(id).map(|l| l.entity_status),
            EntityKey::Task { list_id, task_id } => {
                self.tasks.get(list_id, task_id).map(|t| t.entity_status)
            }
        }
    }

    /// Tasks of a list that pass the list's current filter.
    pub fn visible_tasks(&self, list_id: &str) -> Vec<&TaskDomain> {
        let filter = self
            .todolists
            .get(list_id)
            .map(|l| l.filter)
            .unwrap_or_default();
        self.tasks
            .bucket(list_id)
            .iter()
            .filter(|t| filter.admits(&t.task))
            .collect()
    }
}
