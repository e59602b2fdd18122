pub mod auth;
pub mod envelope;
pub mod status;
pub mod task;
pub mod todolist;

pub use auth::{AuthMe, LoginData, LoginParams};
pub use envelope::{
    result_code, CreatedItem, Empty, FieldError, ResponseEnvelope, ServerFailure, ServerReply,
};
pub use status::{EntityStatus, RequestStatus};
pub use task::{Task, TaskCollection, TaskDomain, TaskId, TaskPriority, TaskStatus};
pub use todolist::{
    FilterValue, Todolist, TodolistCollection, TodolistDomain, TodolistId,
    UpdateTodolistTitle,
};
