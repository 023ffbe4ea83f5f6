use moim_model::CommentResponse;
use serde_json::json;

use crate::client::ApiClient;
use crate::error::NetworkError;

/// `comment/*` endpoints. Create and update answer with the post's full,
/// refreshed comment list.
#[derive(Clone)]
pub struct CommentApi {
    client: ApiClient,
}

impl CommentApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn get_comments(&self, post_id: &str) -> Result<Vec<CommentResponse>, NetworkError> {
        self.client.get(&["comment", post_id]).await
    }

    pub async fn create_comment(
        &self,
        post_id: &str,
        content: &str,
    ) -> Result<Vec<CommentResponse>, NetworkError> {
        let body = json!({ "contents": content });
        self.client
            .post(&["comment", post_id], Some(&body))
            .await
    }

    pub async fn update_comment(
        &self,
        post_id: &str,
        comment_id: &str,
        content: &str,
    ) -> Result<Vec<CommentResponse>, NetworkError> {
        let body = json!({ "contents": content });
        self.client
            .patch(&["comment", post_id, comment_id], &body)
            .await
    }

    pub async fn delete_comment(&self, comment_id: &str) -> Result<(), NetworkError> {
        self.client.delete(&["comment", comment_id]).await
    }

    /// Comment reports carry no reason.
    pub async fn report_comment(&self, comment_id: &str) -> Result<(), NetworkError> {
        let body = json!({ "commentId": comment_id, "reason": "" });
        self.client.post_unit(&["comment", "report"], Some(&body)).await
    }
}
