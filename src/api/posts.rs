//! Task operations: listing and detail, multipart creation, owner
//! mutations, offers and reviews.

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::Method;
use serde_json::json;

use super::client::ApiClient;
use super::models::{Post, PostDraft, PostQuery, PostUpdate, ReviewDraft, TaskStatus};
use crate::error::ApiResult;

/// Creation collaborator for the session store's post transition.
#[async_trait]
pub trait PostsApi: Send + Sync {
    async fn create(&self, draft: PostDraft) -> ApiResult<Post>;
}

#[async_trait]
impl PostsApi for ApiClient {
    /// `POST posts` as multipart/form-data. Absent optional fields go out
    /// as empty strings and the goal is stringified, matching the form
    /// submission the backend expects.
    async fn create(&self, draft: PostDraft) -> ApiResult<Post> {
        let mut form = Form::new()
            .text("title", draft.title)
            .text("content", draft.content.unwrap_or_default())
            .text("category", draft.category.unwrap_or_default())
            .text("goal", draft.goal.to_string())
            .text("accountDetails", draft.account_details.unwrap_or_default());
        if let Some(attachment) = draft.attachment {
            form = form.part(
                "image",
                Part::bytes(attachment.content).file_name(attachment.file_name),
            );
        }
        self.execute(self.request(Method::POST, "posts")?.multipart(form)).await
    }
}

impl ApiClient {
    pub async fn list_posts(&self, query: &PostQuery) -> ApiResult<Vec<Post>> {
        self.get_json_with("posts", &query.to_params()).await
    }

    pub async fn get_post(&self, id: u64) -> ApiResult<Post> {
        self.get_json(&format!("posts/{id}")).await
    }

    pub async fn update_post(&self, id: u64, update: &PostUpdate) -> ApiResult<()> {
        self.put_json_unit(&format!("posts/{id}"), update).await
    }

    pub async fn delete_post(&self, id: u64) -> ApiResult<()> {
        self.delete_unit(&format!("posts/{id}")).await
    }

    pub async fn set_post_status(&self, id: u64, status: TaskStatus) -> ApiResult<()> {
        self.patch_json_unit(&format!("posts/{id}/status"), &json!({ "status": status })).await
    }

    /// Leave an offer on a task. Offers ride the comments endpoint.
    pub async fn submit_offer(&self, post_id: u64, content: &str) -> ApiResult<()> {
        self.post_json_unit(&format!("posts/{post_id}/comments"), &json!({ "content": content }))
            .await
    }

    /// Owner accepts an offer and escrows `deposit_amount`; the backend
    /// assigns the offer's author as executor.
    pub async fn accept_offer(
        &self,
        post_id: u64,
        offer_id: u64,
        deposit_amount: f64,
    ) -> ApiResult<()> {
        self.post_json_unit(
            &format!("posts/{post_id}/comments/{offer_id}/accept"),
            &json!({ "depositAmount": deposit_amount }),
        )
        .await
    }

    pub async fn leave_review(&self, post_id: u64, review: &ReviewDraft) -> ApiResult<()> {
        self.post_json_unit(&format!("posts/{post_id}/reviews"), review).await
    }
}
