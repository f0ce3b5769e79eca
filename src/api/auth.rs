//! Login and registration endpoints, behind the `AuthApi` seam so the
//! session store can be driven without a network.

use async_trait::async_trait;
use serde_json::json;
use tracing::info;

use super::client::ApiClient;
use super::models::{AuthResponse, RegisterRequest};
use crate::error::ApiResult;

#[async_trait]
pub trait AuthApi: Send + Sync {
    async fn login(&self, username: &str, password: &str) -> ApiResult<AuthResponse>;
    async fn register(&self, request: &RegisterRequest) -> ApiResult<AuthResponse>;
}

#[async_trait]
impl AuthApi for ApiClient {
    async fn login(&self, username: &str, password: &str) -> ApiResult<AuthResponse> {
        let resp: AuthResponse = self
            .post_json("auth/login", &json!({"username": username, "password": password}))
            .await?;
        info!(target: "studylance::session", "auth.login user={}", username);
        Ok(resp)
    }

    async fn register(&self, request: &RegisterRequest) -> ApiResult<AuthResponse> {
        let resp: AuthResponse = self.post_json("auth/register", request).await?;
        info!(target: "studylance::session", "auth.register user={}", request.username);
        Ok(resp)
    }
}
