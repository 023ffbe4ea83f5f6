use async_trait::async_trait;
use moim_core::DataResult;
use moim_model::Review;
use moim_network::ReviewApi;

use crate::catching::catching;

#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait ReviewRepository: Send + Sync {
    async fn get_review(&self, review_id: &str) -> DataResult<Review>;

    async fn get_reviews(&self, meeting_id: &str) -> DataResult<Vec<Review>>;

    async fn delete_review(&self, review_id: &str) -> DataResult<()>;

    async fn report_review(&self, review_id: &str, reason: &str) -> DataResult<()>;
}

pub struct ReviewRepositoryImpl {
    api: ReviewApi,
}

impl ReviewRepositoryImpl {
    pub fn new(api: ReviewApi) -> Self {
        Self { api }
    }
}

#[async_trait]
impl ReviewRepository for ReviewRepositoryImpl {
    async fn get_review(&self, review_id: &str) -> DataResult<Review> {
        catching("get_review", self.api.get_review(review_id))
            .await
            .map(Review::from)
    }

    async fn get_reviews(&self, meeting_id: &str) -> DataResult<Vec<Review>> {
        catching("get_reviews", self.api.get_reviews(meeting_id))
            .await
            .map(|reviews| reviews.into_iter().map(Review::from).collect())
    }

    async fn delete_review(&self, review_id: &str) -> DataResult<()> {
        catching("delete_review", self.api.delete_review(review_id)).await
    }

    async fn report_review(&self, review_id: &str, reason: &str) -> DataResult<()> {
        catching("report_review", self.api.report_review(review_id, reason)).await
    }
}
