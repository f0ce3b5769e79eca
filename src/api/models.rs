//! Wire models for the Studylance backend. JSON is camelCase on the wire;
//! unknown fields are ignored so backend additions don't break older
//! clients.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Task lifecycle as the backend reports it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskStatus {
    Open,
    InProgress,
    Done,
    Cancelled,
}

impl TaskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Open => "OPEN",
            TaskStatus::InProgress => "IN_PROGRESS",
            TaskStatus::Done => "DONE",
            TaskStatus::Cancelled => "CANCELLED",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ComplaintStatus {
    Open,
    Resolved,
    Rejected,
}

impl ComplaintStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ComplaintStatus::Open => "OPEN",
            ComplaintStatus::Resolved => "RESOLVED",
            ComplaintStatus::Rejected => "REJECTED",
        }
    }
}

/// A task posting. `comments` holds the offers submitted against it; the
/// deposit fields appear once the owner has accepted an offer.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub goal: f64,
    #[serde(default)]
    pub account_details: String,
    pub status: TaskStatus,
    #[serde(default)]
    pub author_username: String,
    #[serde(default)]
    pub author_city: Option<String>,
    #[serde(default)]
    pub executor_username: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub deposit_amount: Option<f64>,
    #[serde(default)]
    pub deposit_status: Option<String>,
    #[serde(default)]
    pub comments: Vec<Offer>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// An offer left on a task (the backend models offers as comments).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Offer {
    pub id: u64,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub second_name: Option<String>,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: u64,
    #[serde(default)]
    pub post_id: Option<u64>,
    #[serde(default)]
    pub reviewer_username: String,
    #[serde(default)]
    pub rating: i32,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Own or public profile. `skills` is a comma-separated string on the wire.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub second_name: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub headline: String,
    #[serde(default)]
    pub about: String,
    #[serde(default)]
    pub skills: String,
    #[serde(default)]
    pub portfolio: String,
    #[serde(default)]
    pub contacts: String,
    #[serde(default)]
    pub rating_average: Option<f64>,
    #[serde(default)]
    pub rating_count: u32,
}

#[derive(Debug, Clone, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    pub first_name: String,
    pub second_name: String,
    pub city: String,
    pub headline: String,
    pub about: String,
    pub skills: String,
    pub portfolio: String,
    pub contacts: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminUser {
    #[serde(default)]
    pub id: Option<u64>,
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub second_name: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub roles: Vec<String>,
    #[serde(default)]
    pub banned: bool,
    #[serde(default)]
    pub ban_reason: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Complaint {
    pub id: u64,
    pub status: ComplaintStatus,
    #[serde(default)]
    pub reporter_username: Option<String>,
    #[serde(default)]
    pub target_username: Option<String>,
    #[serde(default)]
    pub target_post_id: Option<u64>,
    #[serde(default)]
    pub reason: String,
    #[serde(default)]
    pub admin_note: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Categories and cities lookups both come back as `[{"name": ...}]`.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct NamedEntry {
    pub name: String,
}

/// Successful login/register response: the fresh credential plus whatever
/// profile fields the backend chooses to echo.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Clone, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    pub email: String,
    pub first_name: String,
    pub second_name: String,
    pub city: String,
}

/// Input for multipart task creation. Absent optional fields are sent as
/// empty strings, matching what the form submits.
#[derive(Debug, Clone, Default)]
pub struct PostDraft {
    pub title: String,
    pub content: Option<String>,
    pub category: Option<String>,
    pub goal: f64,
    pub account_details: Option<String>,
    pub attachment: Option<Attachment>,
}

/// In-memory file attached to a task draft.
#[derive(Debug, Clone)]
pub struct Attachment {
    pub file_name: String,
    pub content: Vec<u8>,
}

#[derive(Debug, Clone, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PostUpdate {
    pub title: String,
    pub content: String,
    pub category: String,
    pub goal: f64,
    pub account_details: String,
}

/// Filters for the task listing.
#[derive(Debug, Clone, Default)]
pub struct PostQuery {
    pub sort: Option<String>,
    pub search: Option<String>,
    pub category: Option<String>,
    pub min_goal: Option<f64>,
    pub max_goal: Option<f64>,
}

impl PostQuery {
    pub fn newest() -> Self {
        Self { sort: Some("newest".into()), ..Default::default() }
    }

    /// Query-string pairs in the order the backend documents them.
    pub(crate) fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(sort) = &self.sort {
            params.push(("sort", sort.clone()));
        }
        if let Some(search) = &self.search {
            let trimmed = search.trim();
            if !trimmed.is_empty() {
                params.push(("search", trimmed.to_string()));
            }
        }
        if let Some(category) = &self.category {
            params.push(("category", category.clone()));
        }
        if let Some(min) = self.min_goal {
            params.push(("minGoal", min.to_string()));
        }
        if let Some(max) = self.max_goal {
            params.push(("maxGoal", max.to_string()));
        }
        params
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewDraft {
    pub rating: i32,
    pub content: String,
}

/// A complaint targets a user or a task, never both.
#[derive(Debug, Clone, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct NewComplaint {
    pub reason: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_post_id: Option<u64>,
}

impl NewComplaint {
    pub fn about_user(reason: impl Into<String>, username: impl Into<String>) -> Self {
        Self { reason: reason.into(), target_username: Some(username.into()), target_post_id: None }
    }

    pub fn about_post(reason: impl Into<String>, post_id: u64) -> Self {
        Self { reason: reason.into(), target_username: None, target_post_id: Some(post_id) }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolveComplaintRequest {
    pub status: ComplaintStatus,
    pub admin_note: String,
    pub ban_user: bool,
    pub ban_reason: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn post_deserializes_backend_shape() {
        let body = r#"{
            "id": 7, "title": "Essay", "content": "500 words",
            "category": "Writing", "goal": 40.0, "accountDetails": "card",
            "status": "IN_PROGRESS", "authorUsername": "alice",
            "executorUsername": "bob", "depositAmount": 40.0,
            "depositStatus": "HELD",
            "comments": [{"id": 1, "username": "bob", "content": "I can help"}]
        }"#;
        let post: Post = serde_json::from_str(body).unwrap();
        assert_eq!(post.status, TaskStatus::InProgress);
        assert_eq!(post.account_details, "card");
        assert_eq!(post.comments.len(), 1);
        assert_eq!(post.comments[0].username, "bob");
        assert_eq!(post.executor_username.as_deref(), Some("bob"));
    }

    #[test]
    fn post_query_skips_blank_filters() {
        let q = PostQuery {
            sort: Some("newest".into()),
            search: Some("   ".into()),
            min_goal: Some(10.0),
            ..Default::default()
        };
        assert_eq!(q.to_params(), vec![("sort", "newest".to_string()), ("minGoal", "10".to_string())]);
    }

    #[test]
    fn complaint_serializes_single_target() {
        let c = NewComplaint::about_post("spam", 12);
        let v = serde_json::to_value(&c).unwrap();
        assert_eq!(v["reason"], "spam");
        assert_eq!(v["targetPostId"], 12);
        assert!(v.get("targetUsername").is_none());
    }

    #[test]
    fn auth_response_keeps_echoed_fields() {
        let body = r#"{"token": "a.b.c", "username": "alice", "email": "a@x"}"#;
        let resp: AuthResponse = serde_json::from_str(body).unwrap();
        assert_eq!(resp.token, "a.b.c");
        assert_eq!(resp.extra["username"], "alice");
    }
}
