use moim_model::MeetingResponse;
use serde_json::json;

use crate::client::ApiClient;
use crate::error::NetworkError;

/// `meet/*` endpoints.
#[derive(Clone)]
pub struct MeetingApi {
    client: ApiClient,
}

impl MeetingApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn get_meetings(&self) -> Result<Vec<MeetingResponse>, NetworkError> {
        self.client.get(&["meet", "list"]).await
    }

    pub async fn get_meeting(&self, meeting_id: &str) -> Result<MeetingResponse, NetworkError> {
        self.client.get(&["meet", meeting_id]).await
    }

    /// Issues a fresh invite code for the meeting.
    pub async fn get_meeting_invite_code(&self, meeting_id: &str) -> Result<String, NetworkError> {
        self.client.post_text(&["meet", "invite", meeting_id]).await
    }

    pub async fn create_meeting(
        &self,
        name: &str,
        image_url: &str,
    ) -> Result<MeetingResponse, NetworkError> {
        let body = json!({ "meetName": name, "meetImage": image_url });
        self.client.post(&["meet", "create"], Some(&body)).await
    }

    pub async fn update_meeting(
        &self,
        meeting_id: &str,
        name: &str,
        image_url: &str,
    ) -> Result<MeetingResponse, NetworkError> {
        let body = json!({ "meetName": name, "meetImage": image_url });
        self.client
            .patch(&["meet", "update", meeting_id], &body)
            .await
    }

    pub async fn join_meeting(&self, code: &str) -> Result<MeetingResponse, NetworkError> {
        self.client.post(&["meet", "join", code], None).await
    }

    pub async fn delete_meeting(&self, meeting_id: &str) -> Result<(), NetworkError> {
        self.client.delete(&["meet", meeting_id]).await
    }
}
