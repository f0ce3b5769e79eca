//! Own-profile and public-profile endpoints.

use super::client::ApiClient;
use super::models::{Profile, ProfileUpdate, Review};
use crate::error::ApiResult;

impl ApiClient {
    pub async fn my_profile(&self) -> ApiResult<Profile> {
        self.get_json("profiles/me").await
    }

    pub async fn update_my_profile(&self, update: &ProfileUpdate) -> ApiResult<()> {
        self.put_json_unit("profiles/me", update).await
    }

    pub async fn public_profile(&self, username: &str) -> ApiResult<Profile> {
        self.get_json(&format!("profiles/{}", urlencoding::encode(username))).await
    }

    pub async fn profile_reviews(&self, username: &str) -> ApiResult<Vec<Review>> {
        self.get_json(&format!("profiles/{}/reviews", urlencoding::encode(username)))
            .await
    }
}
