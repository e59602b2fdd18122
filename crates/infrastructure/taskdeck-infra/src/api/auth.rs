use reqwest::Method;
use taskdeck_core::{AuthMe, Empty, LoginData, LoginParams, ServerReply};

use super::ApiClient;
use crate::error::ApiError;

impl ApiClient {
    pub async fn login(&self, params: &LoginParams) -> Result<ServerReply<LoginData>, ApiError> {
        let req = self.request(Method::POST, "auth/login").json(params);
        self.send_envelope(req).await
    }

    pub async fn logout(&self) -> Result<ServerReply<Empty>, ApiError> {
        self.send_envelope(self.request(Method::DELETE, "auth/login"))
            .await
    }

    pub async fn me(&self) -> Result<ServerReply<AuthMe>, ApiError> {
        self.send_envelope(self.request(Method::GET, "auth/me")).await
    }
}
