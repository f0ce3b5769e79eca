//! HTTP plumbing shared by every backend call: base-URL joins, bearer
//! decoration and uniform response mapping.

use std::sync::Arc;

use reqwest::{Method, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::config::ClientConfig;
use crate::error::{ApiError, ApiResult, ErrorPayload};
use crate::session::CredentialStore;

#[derive(Clone)]
pub struct ApiClient {
    base: Url,
    client: reqwest::Client,
    credentials: Arc<dyn CredentialStore>,
}

impl ApiClient {
    pub fn new(config: &ClientConfig, credentials: Arc<dyn CredentialStore>) -> ApiResult<Self> {
        let base = Url::parse(&config.base_url)
            .map_err(|e| ApiError::Url(format!("{}: {}", config.base_url, e)))?;
        let client = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self { base, client, credentials })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    fn url(&self, path: &str) -> ApiResult<Url> {
        self.base
            .join(path)
            .map_err(|e| ApiError::Url(format!("{}: {}", path, e)))
    }

    /// Start a request. The credential store is re-read on every call so a
    /// login or logout takes effect immediately for all holders of the
    /// client; requests go out bare when no credential is persisted.
    pub(crate) fn request(&self, method: Method, path: &str) -> ApiResult<reqwest::RequestBuilder> {
        let url = self.url(path)?;
        let mut builder = self.client.request(method, url);
        if let Some(token) = self.credentials.load() {
            builder = builder.bearer_auth(token);
        }
        Ok(builder)
    }

    async fn checked(resp: reqwest::Response) -> ApiResult<reqwest::Response> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }
        let body = resp.text().await.unwrap_or_default();
        debug!(target: "studylance::http", "request rejected: HTTP {} {}", status.as_u16(), body);
        Err(ApiError::Status {
            status: status.as_u16(),
            payload: ErrorPayload::from_body(&body),
        })
    }

    pub(crate) async fn execute<T: DeserializeOwned>(
        &self,
        builder: reqwest::RequestBuilder,
    ) -> ApiResult<T> {
        let resp = Self::checked(builder.send().await?).await?;
        Ok(resp.json::<T>().await?)
    }

    /// For endpoints whose success body the client ignores.
    pub(crate) async fn execute_unit(&self, builder: reqwest::RequestBuilder) -> ApiResult<()> {
        Self::checked(builder.send().await?).await?;
        Ok(())
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        self.execute(self.request(Method::GET, path)?).await
    }

    pub(crate) async fn get_json_with<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> ApiResult<T> {
        self.execute(self.request(Method::GET, path)?.query(params)).await
    }

    pub(crate) async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        self.execute(self.request(Method::POST, path)?.json(body)).await
    }

    pub(crate) async fn post_json_unit<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<()> {
        self.execute_unit(self.request(Method::POST, path)?.json(body)).await
    }

    /// POST with no body (e.g. unban).
    pub(crate) async fn post_unit(&self, path: &str) -> ApiResult<()> {
        self.execute_unit(self.request(Method::POST, path)?).await
    }

    pub(crate) async fn put_json_unit<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<()> {
        self.execute_unit(self.request(Method::PUT, path)?.json(body)).await
    }

    pub(crate) async fn patch_json_unit<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<()> {
        self.execute_unit(self.request(Method::PATCH, path)?.json(body)).await
    }

    pub(crate) async fn delete_unit(&self, path: &str) -> ApiResult<()> {
        self.execute_unit(self.request(Method::DELETE, path)?).await
    }
}
