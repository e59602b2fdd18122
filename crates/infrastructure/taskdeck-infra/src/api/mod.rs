//! Thin typed wrapper over the todo-list HTTP API.
//!
//! Every endpoint answers with a [`ResponseEnvelope`] except the two list reads,
//! which return bare payloads and are lifted into a successful reply here.

mod auth;
mod tasks;
mod todolists;

use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use taskdeck_core::{ResponseEnvelope, ServerReply};
use tracing::debug;

use crate::error::ApiError;
use crate::net::{default_http_client, ApiSettings};

#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(settings: &ApiSettings) -> Result<Self, ApiError> {
        let client = default_http_client(settings)?;
        Ok(Self::with_client(client, settings.normalized_base_url()))
    }

    pub fn with_client(client: Client, base_url: impl AsRef<str>) -> Self {
        Self {
            client,
            base_url: taskdeck_config::normalize_base_url(base_url.as_ref()),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path.trim_start_matches('/'));
        debug!("{} {}", method, url);
        self.client.request(method, url)
    }

    async fn read_body(req: RequestBuilder) -> Result<Vec<u8>, ApiError> {
        let resp = req.send().await?;
        let status = resp.status();
        let body = resp.bytes().await?;
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                body: serde_json::from_slice(&body).ok(),
            });
        }
        Ok(body.to_vec())
    }

    /// Sends a request whose answer is a full envelope.
    async fn send_envelope<D: DeserializeOwned>(
        &self,
        req: RequestBuilder,
    ) -> Result<ServerReply<D>, ApiError> {
        let body = Self::read_body(req).await?;
        let raw: ResponseEnvelope<serde_json::Value> = serde_json::from_slice(&body)?;
        Ok(raw.decode()?)
    }

    /// Sends a request whose answer is a bare JSON payload.
    async fn send_plain<T: DeserializeOwned>(&self, req: RequestBuilder) -> Result<T, ApiError> {
        let body = Self::read_body(req).await?;
        Ok(serde_json::from_slice(&body)?)
    }
}
