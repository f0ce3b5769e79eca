//! Bearer credential claim decoding.
//!
//! Credentials are opaque three-segment strings (`header.claims.signature`).
//! Only the middle segment is read, as unverified JSON claims that drive UI
//! affordances (current username, admin menu). Nothing here checks the
//! signature and nothing here may be treated as an authorization boundary;
//! the backend re-validates every request.

use base64::Engine;

/// Role tag the backend assigns to administrators.
pub const ADMIN_ROLE: &str = "ROLE_ADMIN";

/// Claims extracted from a credential: subject identity plus role tags.
/// Roles are unique, empty entries dropped, wire order preserved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Claims {
    pub subject: String,
    pub roles: Vec<String>,
}

impl Claims {
    pub fn is_admin(&self) -> bool {
        self.roles.iter().any(|r| r == ADMIN_ROLE)
    }
}

/// Decode the claims segment of a credential.
///
/// Total over all inputs: absent, malformed or truncated credentials yield
/// `Claims::default()` rather than an error, so a stale or garbage token
/// degrades the caller to an anonymous view instead of failing it.
pub fn decode(raw: Option<&str>) -> Claims {
    let Some(raw) = raw else {
        return Claims::default();
    };
    let payload = match raw.split('.').nth(1) {
        Some(seg) if !seg.is_empty() => seg,
        _ => return Claims::default(),
    };

    // Translate the URL-safe alphabet back to standard base64 and restore
    // the padding the issuer strips.
    let mut normalized: String = payload
        .chars()
        .map(|c| match c {
            '-' => '+',
            '_' => '/',
            other => other,
        })
        .collect();
    while normalized.len() % 4 != 0 {
        normalized.push('=');
    }

    let bytes = match base64::engine::general_purpose::STANDARD.decode(normalized.as_bytes()) {
        Ok(b) => b,
        Err(_) => return Claims::default(),
    };
    let claims: serde_json::Value = match serde_json::from_slice(&bytes) {
        Ok(v) => v,
        Err(_) => return Claims::default(),
    };

    let subject = claims
        .get("sub")
        .and_then(|v| v.as_str())
        .unwrap_or("")
        .to_string();

    let mut roles: Vec<String> = Vec::new();
    if let Some(list) = claims.get("roles").and_then(|v| v.as_array()) {
        for entry in list {
            if let Some(role) = entry.as_str() {
                if !role.is_empty() && !roles.iter().any(|r| r == role) {
                    roles.push(role.to_string());
                }
            }
        }
    }

    Claims { subject, roles }
}
