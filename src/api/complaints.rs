//! Complaint filing. Listing and resolution are admin-only (see admin.rs).

use super::client::ApiClient;
use super::models::NewComplaint;
use crate::error::ApiResult;

impl ApiClient {
    pub async fn file_complaint(&self, complaint: &NewComplaint) -> ApiResult<()> {
        self.post_json_unit("complaints", complaint).await
    }
}
