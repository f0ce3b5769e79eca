//! The readable session snapshot.

use serde::Serialize;

use crate::error::ErrorPayload;
use crate::token::Claims;

/// Lifecycle of the most recent collaborator-backed transition.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    #[default]
    Idle,
    Loading,
    Succeeded,
    Failed,
}

/// Snapshot of the current session, handed out by value.
///
/// Identity fields are only ever written through [`SessionState::apply_claims`]
/// and [`SessionState::reset`], so `is_admin` always equals admin-tag
/// membership in `roles` and `is_authenticated` always tracks credential
/// presence, after every transition rather than eventually.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SessionState {
    pub is_authenticated: bool,
    pub identity: String,
    pub roles: Vec<String>,
    pub is_admin: bool,
    pub status: RequestStatus,
    pub last_error: Option<ErrorPayload>,
}

impl SessionState {
    /// Install decoded claims. `credential_present` drives
    /// `is_authenticated`: a present-but-undecodable credential still counts
    /// as authenticated, just with an anonymous identity.
    pub(crate) fn apply_claims(&mut self, credential_present: bool, claims: &Claims) {
        self.is_authenticated = credential_present;
        self.identity = claims.subject.clone();
        self.roles = claims.roles.clone();
        self.is_admin = claims.is_admin();
    }

    /// Back to the anonymous default.
    pub(crate) fn reset(&mut self) {
        *self = SessionState::default();
    }
}
