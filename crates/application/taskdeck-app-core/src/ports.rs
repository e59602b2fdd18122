use async_trait::async_trait;
use taskdeck_core::{
    AuthMe, CreatedItem, Empty, LoginData, LoginParams, ServerReply, Task, Todolist,
    UpdateTodolistTitle,
};

/// A call that never produced a usable envelope.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// The server answered, but with an error status or an unreadable body.
    #[error("request failed: {message}")]
    Response {
        status: Option<u16>,
        payload: Option<serde_json::Value>,
        message: String,
    },
    /// Connectivity or timeout; nothing came back.
    #[error("network failure: {message}")]
    Network { message: String },
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl TransportError {
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// `message` embedded in the response payload, if the server sent one.
    pub fn payload_message(&self) -> Option<&str> {
        match self {
            TransportError::Response {
                payload: Some(payload),
                ..
            } => payload.get("message").and_then(serde_json::Value::as_str),
            _ => None,
        }
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            TransportError::Response { message, .. } | TransportError::Network { message } => {
                Some(message.as_str())
            }
            TransportError::Other(_) => None,
        }
    }
}

#[async_trait]
pub trait TodolistsApi: Send + Sync + 'static {
    async fn fetch_todolists(&self) -> Result<ServerReply<Vec<Todolist>>, TransportError>;
    async fn create_todolist(
        &self,
        title: &str,
    ) -> Result<ServerReply<CreatedItem<Todolist>>, TransportError>;
    async fn delete_todolist(&self, id: &str) -> Result<ServerReply<Empty>, TransportError>;
    async fn update_todolist_title(
        &self,
        arg: &UpdateTodolistTitle,
    ) -> Result<ServerReply<Empty>, TransportError>;
}

#[async_trait]
pub trait TasksApi: Send + Sync + 'static {
    async fn fetch_tasks(&self, list_id: &str) -> Result<ServerReply<Vec<Task>>, TransportError>;
    async fn create_task(
        &self,
        list_id: &str,
        title: &str,
    ) -> Result<ServerReply<CreatedItem<Task>>, TransportError>;
    async fn delete_task(
        &self,
        list_id: &str,
        task_id: &str,
    ) -> Result<ServerReply<Empty>, TransportError>;
}

#[async_trait]
pub trait AuthApi: Send + Sync + 'static {
    async fn login(&self, params: &LoginParams) -> Result<ServerReply<LoginData>, TransportError>;
    async fn logout(&self) -> Result<ServerReply<Empty>, TransportError>;
    async fn me(&self) -> Result<ServerReply<AuthMe>, TransportError>;
}
