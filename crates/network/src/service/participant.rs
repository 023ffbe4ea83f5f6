use moim_model::{ParticipantContainerResponse, ParticipantResponse};

use crate::client::ApiClient;
use crate::error::NetworkError;

/// Member lists of meetings, plans and reviews.
#[derive(Clone)]
pub struct ParticipantApi {
    client: ApiClient,
}

impl ParticipantApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn get_meeting_participants(
        &self,
        meeting_id: &str,
    ) -> Result<ParticipantContainerResponse, NetworkError> {
        self.client.get(&["meet", "members", meeting_id]).await
    }

    pub async fn get_plan_participants(
        &self,
        plan_id: &str,
    ) -> Result<Vec<ParticipantResponse>, NetworkError> {
        self.client.get(&["plan", "members", plan_id]).await
    }

    pub async fn get_review_participants(
        &self,
        review_id: &str,
    ) -> Result<Vec<ParticipantResponse>, NetworkError> {
        self.client.get(&["review", "members", review_id]).await
    }
}
