use reqwest::Method;
use serde_json::json;
use taskdeck_core::{CreatedItem, Empty, ServerReply, Todolist, UpdateTodolistTitle};

use super::ApiClient;
use crate::error::ApiError;

impl ApiClient {
    /// `GET todo-lists` answers with a bare array.
    pub async fn fetch_todolists(&self) -> Result<ServerReply<Vec<Todolist>>, ApiError> {
        let lists: Vec<Todolist> = self
            .send_plain(self.request(Method::GET, "todo-lists"))
            .await?;
        Ok(ServerReply::Success(lists))
    }

    pub async fn create_todolist(
        &self,
        title: &str,
    ) -> Result<ServerReply<CreatedItem<Todolist>>, ApiError> {
        let req = self
            .request(Method::POST, "todo-lists")
            .json(&json!({ "title": title }));
        self.send_envelope(req).await
    }

    pub async fn delete_todolist(&self, id: &str) -> Result<ServerReply<Empty>, ApiError> {
        let req = self.request(Method::DELETE, &format!("todo-lists/{id}"));
        self.send_envelope(req).await
    }

    pub async fn update_todolist_title(
        &self,
        arg: &UpdateTodolistTitle,
    ) -> Result<ServerReply<Empty>, ApiError> {
        let req = self
            .request(Method::PUT, &format!("todo-lists/{}", arg.id))
            .json(&json!({ "title": arg.title }));
        self.send_envelope(req).await
    }
}
