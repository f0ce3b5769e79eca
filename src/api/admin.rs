//! Moderation endpoints. The client-side admin flag only gates whether a
//! view offers these calls; the backend enforces the role on every one.

use serde_json::json;

use super::client::ApiClient;
use super::models::{AdminUser, Complaint, ComplaintStatus, ResolveComplaintRequest};
use crate::error::ApiResult;

impl ApiClient {
    pub async fn admin_users(&self) -> ApiResult<Vec<AdminUser>> {
        self.get_json("admin/users").await
    }

    /// `status = None` lists complaints in every state.
    pub async fn admin_complaints(
        &self,
        status: Option<ComplaintStatus>,
    ) -> ApiResult<Vec<Complaint>> {
        match status {
            Some(s) => {
                self.get_json_with("admin/complaints", &[("status", s.as_str().to_string())])
                    .await
            }
            None => self.get_json("admin/complaints").await,
        }
    }

    pub async fn ban_user(&self, username: &str, reason: &str) -> ApiResult<()> {
        self.post_json_unit(
            &format!("admin/users/{}/ban", urlencoding::encode(username)),
            &json!({ "reason": reason }),
        )
        .await
    }

    pub async fn unban_user(&self, username: &str) -> ApiResult<()> {
        self.post_unit(&format!("admin/users/{}/unban", urlencoding::encode(username)))
            .await
    }

    /// Close out a complaint, optionally banning the offending user in the
    /// same stroke.
    pub async fn resolve_complaint(
        &self,
        complaint_id: u64,
        request: &ResolveComplaintRequest,
    ) -> ApiResult<()> {
        self.post_json_unit(&format!("admin/complaints/{complaint_id}/resolve"), request)
            .await
    }

    pub async fn admin_delete_post(&self, post_id: u64) -> ApiResult<()> {
        self.delete_unit(&format!("admin/posts/{post_id}")).await
    }
}
