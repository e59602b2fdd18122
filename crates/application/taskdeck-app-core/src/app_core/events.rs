use taskdeck_core::{EntityStatus, FilterValue, RequestStatus, Task, TaskId, Todolist, TodolistId};

use crate::domain::EntityKey;

#[derive(Debug, Clone, PartialEq)]
pub enum DomainEvent {
    // Global status & banner
    OperationStarted,
    OperationFinished,
    AppStatusChanged(RequestStatus),
    AppErrorSet(Option<String>),
    AppInitialized,

    // Session
    LoggedInChanged(bool),

    // Todolists
    TodolistsFetched(Vec<Todolist>),
    TodolistAdded(Todolist),
    TodolistRemoved(TodolistId),
    TodolistTitleChanged { id: TodolistId, title: String },
    TodolistFilterChanged { id: TodolistId, filter: FilterValue },

    // Tasks
    TasksFetched { list_id: TodolistId, tasks: Vec<Task> },
    TaskAdded(Task),
    TaskRemoved { list_id: TodolistId, task_id: TaskId },

    // Per-entity feedback
    EntityStatusChanged { key: EntityKey, status: EntityStatus },

    // Broadcast to every entity collection (logout)
    EntitiesCleared,
}
