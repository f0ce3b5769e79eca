//! Reference lists used to populate optional form fields.
//!
//! These are auxiliary fetches: callers are expected to log a failure and
//! carry on with an empty list rather than block a primary flow on them.

use super::client::ApiClient;
use super::models::NamedEntry;
use crate::error::ApiResult;

impl ApiClient {
    pub async fn categories(&self) -> ApiResult<Vec<NamedEntry>> {
        self.get_json("categories").await
    }

    pub async fn cities(&self) -> ApiResult<Vec<NamedEntry>> {
        self.get_json("cities").await
    }
}
