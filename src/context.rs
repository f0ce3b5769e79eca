//! Application wiring: one owned context object handed to every screen, in
//! place of ambient globals. Dropping the context drops the whole client.

use std::path::Path;
use std::sync::Arc;

use crate::api::{ApiClient, AuthApi, PostsApi};
use crate::config::ClientConfig;
use crate::error::ApiResult;
use crate::session::{CredentialStore, FileCredentialStore, MemoryCredentialStore, SessionStore};

#[derive(Clone)]
pub struct AppContext {
    api: Arc<ApiClient>,
    session: Arc<SessionStore>,
}

impl AppContext {
    /// Durable context: the credential persists under `profile_dir` and the
    /// session bootstraps from it immediately.
    pub fn new(config: ClientConfig, profile_dir: impl AsRef<Path>) -> ApiResult<Self> {
        Self::with_store(config, Arc::new(FileCredentialStore::new(profile_dir)))
    }

    /// Ephemeral context for tests and one-shot tools; nothing touches disk.
    pub fn in_memory(config: ClientConfig) -> ApiResult<Self> {
        Self::with_store(config, Arc::new(MemoryCredentialStore::default()))
    }

    pub fn with_store(
        config: ClientConfig,
        credentials: Arc<dyn CredentialStore>,
    ) -> ApiResult<Self> {
        let api = Arc::new(ApiClient::new(&config, Arc::clone(&credentials))?);
        let auth: Arc<dyn AuthApi> = api.clone();
        let posts: Arc<dyn PostsApi> = api.clone();
        let session = Arc::new(SessionStore::new(credentials, auth, posts));
        Ok(Self { api, session })
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }
}
