//! Adapter from the infrastructure API client onto the transport ports.

use async_trait::async_trait;
use taskdeck_core::{
    AuthMe, CreatedItem, Empty, LoginData, LoginParams, ServerReply, Task, Todolist,
    UpdateTodolistTitle,
};
use taskdeck_infra::{ApiClient, ApiError, ApiErrorKind, ApiSettings};

use crate::ports::{AuthApi, TasksApi, TodolistsApi, TransportError};

#[derive(Debug, Clone)]
pub struct HttpApi {
    client: ApiClient,
}

impl HttpApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub fn from_settings(settings: &ApiSettings) -> anyhow::Result<Self> {
        Ok(Self::new(ApiClient::new(settings)?))
    }
}

impl From<ApiError> for TransportError {
    fn from(err: ApiError) -> Self {
        match err.kind() {
            ApiErrorKind::Response => TransportError::Response {
                status: err.status(),
                payload: err.response_body().cloned(),
                message: err.to_string(),
            },
            ApiErrorKind::Codec => TransportError::Response {
                status: None,
                payload: None,
                message: err.to_string(),
            },
            ApiErrorKind::Network => TransportError::Network {
                message: err.to_string(),
            },
            ApiErrorKind::Config => TransportError::Other(anyhow::Error::new(err)),
        }
    }
}

#[async_trait]
impl TodolistsApi for HttpApi {
    async fn fetch_todolists(&self) -> Result<ServerReply<Vec<Todolist>>, TransportError> {
        Ok(self.client.fetch_todolists().await?)
    }

    async fn create_todolist(
        &self,
        title: &str,
    ) -> Result<ServerReply<CreatedItem<Todolist>>, TransportError> {
        Ok(self.client.create_todolist(title).await?)
    }

    async fn delete_todolist(&self, id: &str) -> Result<ServerReply<Empty>, TransportError> {
        Ok(self.client.delete_todolist(id).await?)
    }

    async fn update_todolist_title(
        &self,
        arg: &UpdateTodolistTitle,
    ) -> Result<ServerReply<Empty>, TransportError> {
        Ok(self.client.update_todolist_title(arg).await?)
    }
}

#[async_trait]
impl TasksApi for HttpApi {
    async fn fetch_tasks(&self, list_id: &str) -> Result<ServerReply<Vec<Task>>, TransportError> {
        Ok(self.client.fetch_tasks(list_id).await?)
    }

    async fn create_task(
        &self,
        list_id: &str,
        title: &str,
    ) -> Result<ServerReply<CreatedItem<Task>>, TransportError> {
        Ok(self.client.create_task(list_id, title).await?)
    }

    async fn delete_task(
        &self,
        list_id: &str,
        task_id: &str,
    ) -> Result<ServerReply<Empty>, TransportError> {
        Ok(self.client.delete_task(list_id, task_id).await?)
    }
}

#[async_trait]
impl AuthApi for HttpApi {
    async fn login(&self, params: &LoginParams) -> Result<ServerReply<LoginData>, TransportError> {
        Ok(self.client.login(params).await?)
    }

    async fn logout(&self) -> Result<ServerReply<Empty>, TransportError> {
        Ok(self.client.logout().await?)
    }

    async fn me(&self) -> Result<ServerReply<AuthMe>, TransportError> {
        Ok(self.client.me().await?)
    }
}
