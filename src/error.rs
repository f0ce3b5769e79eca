//! Unified client error model and the backend error-payload mapping.
//! The backend reports failures as untyped JSON; this module gives that
//! payload a tagged shape plus a defined string fallback, and wraps the
//! transport-level failure modes of the HTTP client.

use serde::{Deserialize, Serialize};

/// Structured error body returned by the backend on a non-success status.
///
/// The common shape is `{"message": "..."}`; plain-string bodies and
/// arbitrary JSON are kept as-is so callers can still render them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum ErrorPayload {
    Message { message: String },
    Text(String),
    Other(serde_json::Value),
}

impl ErrorPayload {
    pub fn message(msg: impl Into<String>) -> Self {
        ErrorPayload::Message { message: msg.into() }
    }

    pub fn text(msg: impl Into<String>) -> Self {
        ErrorPayload::Text(msg.into())
    }

    /// Best-effort human-readable message; `fallback` when the payload
    /// carries no usable text.
    pub fn message_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        match self {
            ErrorPayload::Message { message } if !message.is_empty() => message.as_str(),
            ErrorPayload::Text(s) if !s.is_empty() => s.as_str(),
            _ => fallback,
        }
    }

    /// Parse a response body into a payload. Non-JSON bodies degrade to
    /// `Text`; empty bodies to a null `Other`.
    pub fn from_body(body: &str) -> Self {
        if body.trim().is_empty() {
            return ErrorPayload::Other(serde_json::Value::Null);
        }
        match serde_json::from_str::<ErrorPayload>(body) {
            Ok(p) => p,
            Err(_) => ErrorPayload::Text(body.to_string()),
        }
    }
}

/// Errors surfaced by the API client.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Connection, TLS, timeout or body-read failure before a status-coded
    /// response was obtained.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Backend answered with a non-success status; the payload is whatever
    /// the body parsed to.
    #[error("HTTP {status}: {}", .payload.message_or("request rejected"))]
    Status { status: u16, payload: ErrorPayload },

    /// Base URL or joined path did not form a valid URL.
    #[error("invalid request URL: {0}")]
    Url(String),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// The structured backend payload, when one exists.
    pub fn payload(&self) -> Option<&ErrorPayload> {
        match self {
            ApiError::Status { payload, .. } => Some(payload),
            _ => None,
        }
    }

    /// Payload for the session store's `last_error` slot: the backend body
    /// when present, otherwise `fallback` as a literal message.
    pub fn to_payload_or(&self, fallback: &str) -> ErrorPayload {
        match self {
            ApiError::Status { payload, .. } => match payload {
                ErrorPayload::Other(serde_json::Value::Null) => ErrorPayload::text(fallback),
                _ => payload.clone(),
            },
            _ => ErrorPayload::text(fallback),
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
