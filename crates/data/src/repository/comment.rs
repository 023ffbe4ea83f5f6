use async_trait::async_trait;
use moim_core::DataResult;
use moim_model::Comment;
use moim_network::CommentApi;

use crate::catching::catching;

#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait CommentRepository: Send + Sync {
    async fn get_comments(&self, post_id: &str) -> DataResult<Vec<Comment>>;

    /// Returns the post's refreshed comment list.
    async fn create_comment(&self, post_id: &str, content: &str) -> DataResult<Vec<Comment>>;

    /// Returns the post's refreshed comment list.
    async fn update_comment(
        &self,
        post_id: &str,
        comment_id: &str,
        content: &str,
    ) -> DataResult<Vec<Comment>>;

    async fn delete_comment(&self, comment_id: &str) -> DataResult<()>;

    async fn report_comment(&self, comment_id: &str) -> DataResult<()>;
}

pub struct CommentRepositoryImpl {
    api: CommentApi,
}

impl CommentRepositoryImpl {
    pub fn new(api: CommentApi) -> Self {
        Self { api }
    }
}

fn to_comments(list: Vec<moim_model::CommentResponse>) -> Vec<Comment> {
    list.into_iter().map(Comment::from).collect()
}

#[async_trait]
impl CommentRepository for CommentRepositoryImpl {
    async fn get_comments(&self, post_id: &str) -> DataResult<Vec<Comment>> {
        catching("get_comments", self.api.get_comments(post_id))
            .await
            .map(to_comments)
    }

    async fn create_comment(&self, post_id: &str, content: &str) -> DataResult<Vec<Comment>> {
        catching("create_comment", self.api.create_comment(post_id, content))
            .await
            .map(to_comments)
    }

    async fn update_comment(
        &self,
        post_id: &str,
        comment_id: &str,
        content: &str,
    ) -> DataResult<Vec<Comment>> {
        catching(
            "update_comment",
            self.api.update_comment(post_id, comment_id, content),
        )
        .await
        .map(to_comments)
    }

    async fn delete_comment(&self, comment_id: &str) -> DataResult<()> {
        catching("delete_comment", self.api.delete_comment(comment_id)).await
    }

    async fn report_comment(&self, comment_id: &str) -> DataResult<()> {
        catching("report_comment", self.api.report_comment(comment_id)).await
    }
}
