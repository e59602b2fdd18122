use reqwest::Method;
use serde::Deserialize;
use serde_json::json;
use taskdeck_core::{CreatedItem, Empty, ServerFailure, ServerReply, Task};

use super::ApiClient;
use crate::error::ApiError;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GetTasksResponse {
    #[serde(default)]
    items: Vec<Task>,
    #[serde(default)]
    error: Option<String>,
}

impl ApiClient {
    /// The task listing reports failures through its own `error` field rather
    /// than an envelope; a non-null `error` becomes a failed reply.
    pub async fn fetch_tasks(&self, list_id: &str) -> Result<ServerReply<Vec<Task>>, ApiError> {
        let res: GetTasksResponse = self
            .send_plain(self.request(Method::GET, &format!("todo-lists/{list_id}/tasks")))
            .await?;
        Ok(match res.error {
            Some(message) => ServerReply::Failure(ServerFailure::new(vec![message])),
            None => ServerReply::Success(res.items),
        })
    }

    pub async fn create_task(
        &self,
        list_id: &str,
        title: &str,
    ) -> Result<ServerReply<CreatedItem<Task>>, ApiError> {
        let req = self
            .request(Method::POST, &format!("todo-lists/{list_id}/tasks"))
            .json(&json!({ "title": title }));
        self.send_envelope(req).await
    }

    pub async fn delete_task(
        &self,
        list_id: &str,
        task_id: &str,
    ) -> Result<ServerReply<Empty>, ApiError> {
        let req = self.request(
            Method::DELETE,
            &format!("todo-lists/{list_id}/tasks/{task_id}"),
        );
        self.send_envelope(req).await
    }
}
