use async_trait::async_trait;
use moim_core::DataResult;
use moim_model::{Participant, ParticipantContainer};
use moim_network::ParticipantApi;

use crate::catching::catching;

#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait ParticipantRepository: Send + Sync {
    async fn get_meeting_participants(&self, meeting_id: &str) -> DataResult<ParticipantContainer>;

    async fn get_plan_participants(&self, plan_id: &str) -> DataResult<Vec<Participant>>;

    async fn get_review_participants(&self, review_id: &str) -> DataResult<Vec<Participant>>;
}

pub struct ParticipantRepositoryImpl {
    api: ParticipantApi,
}

impl ParticipantRepositoryImpl {
    pub fn new(api: ParticipantApi) -> Self {
        Self { api }
    }
}

#[async_trait]
impl ParticipantRepository for ParticipantRepositoryImpl {
    async fn get_meeting_participants(&self, meeting_id: &str) -> DataResult<ParticipantContainer> {
        catching(
            "get_meeting_participants",
            self.api.get_meeting_participants(meeting_id),
        )
        .await
        .map(ParticipantContainer::from)
    }

    async fn get_plan_participants(&self, plan_id: &str) -> DataResult<Vec<Participant>> {
        catching("get_plan_participants", self.api.get_plan_participants(plan_id))
            .await
            .map(|list| list.into_iter().map(Participant::from).collect())
    }

    async fn get_review_participants(&self, review_id: &str) -> DataResult<Vec<Participant>> {
        catching(
            "get_review_participants",
            self.api.get_review_participants(review_id),
        )
        .await
        .map(|list| list.into_iter().map(Participant::from).collect())
    }
}
