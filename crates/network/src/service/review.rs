use moim_model::ReviewResponse;
use serde_json::json;

use crate::client::ApiClient;
use crate::error::NetworkError;

/// `review/*` endpoints.
#[derive(Clone)]
pub struct ReviewApi {
    client: ApiClient,
}

impl ReviewApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn get_review(&self, review_id: &str) -> Result<ReviewResponse, NetworkError> {
        self.client.get(&["review", review_id]).await
    }

    pub async fn get_reviews(&self, meeting_id: &str) -> Result<Vec<ReviewResponse>, NetworkError> {
        self.client.get(&["review", "list", meeting_id]).await
    }

    pub async fn delete_review(&self, review_id: &str) -> Result<(), NetworkError> {
        self.client.delete(&["review", review_id]).await
    }

    pub async fn report_review(&self, review_id: &str, reason: &str) -> Result<(), NetworkError> {
        let body = json!({ "reviewId": review_id, "reason": reason });
        self.client.post_unit(&["review", "report"], Some(&body)).await
    }
}
