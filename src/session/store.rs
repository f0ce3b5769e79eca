//! The single-writer session container.
//!
//! One `SessionStore` exists per application context. Every view reads it
//! through [`SessionStore::snapshot`]; only the transition methods below
//! mutate it, each completing its whole pending/settled write sequence
//! before any other transition starts, so readers never observe a partial
//! write. Overlapping authenticate submissions (double-click) are
//! serialized rather than raced: the second waits for the first to settle.

use std::sync::Arc;

use parking_lot::RwLock;
use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::api::models::{AuthResponse, Post, PostDraft, RegisterRequest};
use crate::api::{AuthApi, PostsApi};
use crate::error::{ApiError, ApiResult};
use crate::token;

use super::persist::CredentialStore;
use super::state::{RequestStatus, SessionState};

const LOGIN_FALLBACK: &str = "Failed to login";
const REGISTER_FALLBACK: &str = "Failed to register";
const POST_FALLBACK: &str = "Failed to post";

pub struct SessionStore {
    state: RwLock<SessionState>,
    credentials: Arc<dyn CredentialStore>,
    auth: Arc<dyn AuthApi>,
    posts: Arc<dyn PostsApi>,
    transition: Mutex<()>,
}

impl SessionStore {
    /// Build the store and bootstrap it from the persisted credential.
    pub fn new(
        credentials: Arc<dyn CredentialStore>,
        auth: Arc<dyn AuthApi>,
        posts: Arc<dyn PostsApi>,
    ) -> Self {
        let store = Self {
            state: RwLock::new(SessionState::default()),
            credentials,
            auth,
            posts,
            transition: Mutex::new(()),
        };
        store.bootstrap();
        store
    }

    pub fn snapshot(&self) -> SessionState {
        self.state.read().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.read().is_authenticated
    }

    pub fn is_admin(&self) -> bool {
        self.state.read().is_admin
    }

    pub fn identity(&self) -> String {
        self.state.read().identity.clone()
    }

    /// Re-derive the session from the persisted credential. No network,
    /// idempotent: the credential is the single source of truth, so
    /// re-running against unchanged storage reproduces the same state.
    pub fn bootstrap(&self) {
        let raw = self.credentials.load();
        let claims = token::decode(raw.as_deref());
        let mut st = self.state.write();
        st.apply_claims(raw.is_some(), &claims);
        debug!(
            target: "studylance::session",
            "session.bootstrap authenticated={} user={}",
            raw.is_some(),
            st.identity
        );
    }

    pub async fn login(&self, username: &str, password: &str) -> ApiResult<SessionState> {
        let _guard = self.transition.lock().await;
        self.begin();
        match self.auth.login(username, password).await {
            Ok(resp) => Ok(self.settle_authenticated(username, resp)),
            Err(err) => Err(self.settle_failed(err, LOGIN_FALLBACK)),
        }
    }

    pub async fn register(&self, request: &RegisterRequest) -> ApiResult<SessionState> {
        let _guard = self.transition.lock().await;
        self.begin();
        match self.auth.register(request).await {
            Ok(resp) => Ok(self.settle_authenticated(&request.username, resp)),
            Err(err) => Err(self.settle_failed(err, REGISTER_FALLBACK)),
        }
    }

    /// Drop the persisted credential and return to the anonymous default.
    /// Synchronous and idempotent; no network involved.
    pub fn logout(&self) {
        self.credentials.clear();
        self.state.write().reset();
        info!(target: "studylance::session", "session.logout");
    }

    /// Create a task through the posts collaborator. Same three-phase shape
    /// as authenticate but only `status`/`last_error` move; identity fields
    /// carry no task-creation invariants.
    pub async fn create_post(&self, draft: PostDraft) -> ApiResult<Post> {
        let _guard = self.transition.lock().await;
        self.begin();
        match self.posts.create(draft).await {
            Ok(post) => {
                let mut st = self.state.write();
                st.status = RequestStatus::Succeeded;
                st.last_error = None;
                Ok(post)
            }
            Err(err) => Err(self.settle_failed(err, POST_FALLBACK)),
        }
    }

    fn begin(&self) {
        self.state.write().status = RequestStatus::Loading;
    }

    /// Fulfilled authenticate: persist, re-decode, publish. Identity
    /// precedence: decoded subject, then the submitted username, then the
    /// previous identity.
    fn settle_authenticated(&self, username: &str, resp: AuthResponse) -> SessionState {
        self.credentials.save(&resp.token);
        let claims = token::decode(Some(&resp.token));
        let mut st = self.state.write();
        let prev_identity = std::mem::take(&mut st.identity);
        st.apply_claims(true, &claims);
        if st.identity.is_empty() {
            st.identity = if username.is_empty() { prev_identity } else { username.to_string() };
        }
        st.status = RequestStatus::Succeeded;
        st.last_error = None;
        info!(
            target: "studylance::session",
            "session.authenticate user={} admin={}",
            st.identity,
            st.is_admin
        );
        st.clone()
    }

    /// Rejected transition: record status and payload, leave identity,
    /// roles and the persisted credential exactly as they were.
    fn settle_failed(&self, err: ApiError, fallback: &str) -> ApiError {
        let payload = err.to_payload_or(fallback);
        let mut st = self.state.write();
        st.status = RequestStatus::Failed;
        st.last_error = Some(payload);
        debug!(target: "studylance::session", "session.transition failed: {}", err);
        err
    }
}
