use taskdeck_core::{FilterValue, LoginParams, TaskId, TodolistId};

#[derive(Debug, Clone)]
pub enum AppCommand {
    // Session
    InitializeApp,
    Login(LoginParams),
    Logout,

    // Todolists
    FetchTodolists,
    AddTodolist { title: String },
    RemoveTodolist(TodolistId),
    ChangeTodolistTitle { id: TodolistId, title: String },
    ChangeTodolistFilter { id: TodolistId, filter: FilterValue },

    // Tasks
    FetchTasks(TodolistId),
    AddTask { list_id: TodolistId, title: String },
    RemoveTask { list_id: TodolistId, task_id: TaskId },

    // Banner
    DismissError,
}
