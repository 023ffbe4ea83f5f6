use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CommentResponse {
    #[serde(rename = "commentId")]
    pub comment_id: String,
    #[serde(rename = "postId")]
    pub post_id: String,
    #[serde(rename = "userId")]
    pub user_id: String,
    #[serde(rename = "userName")]
    pub user_name: String,
    #[serde(rename = "userImg")]
    pub user_image_url: String,
    #[serde(rename = "contents")]
    pub content: String,
    #[serde(rename = "createdAt")]
    pub created_at: String,
}

/// A comment on a plan or review.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub comment_id: String,
    pub post_id: String,
    pub user_id: String,
    pub user_name: String,
    pub user_image_url: String,
    pub content: String,
    pub created_at: String,
}

impl From<CommentResponse> for Comment {
    fn from(response: CommentResponse) -> Self {
        Self {
            comment_id: response.comment_id,
            post_id: response.post_id,
            user_id: response.user_id,
            user_name: response.user_name,
            user_image_url: response.user_image_url,
            content: response.content,
            created_at: response.created_at,
        }
    }
}
