use async_trait::async_trait;
use moim_core::DataResult;
use moim_model::Meeting;
use moim_network::MeetingApi;

use crate::catching::catching;

#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait MeetingRepository: Send + Sync {
    async fn get_meetings(&self) -> DataResult<Vec<Meeting>>;

    async fn get_meeting(&self, meeting_id: &str) -> DataResult<Meeting>;

    /// A fresh invite code other users can join with.
    async fn get_meeting_invite_code(&self, meeting_id: &str) -> DataResult<String>;

    async fn create_meeting(&self, name: &str, image_url: &str) -> DataResult<Meeting>;

    async fn update_meeting(
        &self,
        meeting_id: &str,
        name: &str,
        image_url: &str,
    ) -> DataResult<Meeting>;

    async fn join_meeting(&self, code: &str) -> DataResult<Meeting>;

    async fn delete_meeting(&self, meeting_id: &str) -> DataResult<()>;
}

pub struct MeetingRepositoryImpl {
    api: MeetingApi,
}

impl MeetingRepositoryImpl {
    pub fn new(api: MeetingApi) -> Self {
        Self { api }
    }
}

#[async_trait]
impl MeetingRepository for MeetingRepositoryImpl {
    async fn get_meetings(&self) -> DataResult<Vec<Meeting>> {
        catching("get_meetings", self.api.get_meetings())
            .await
            .map(|meetings| meetings.into_iter().map(Meeting::from).collect())
    }

    async fn get_meeting(&self, meeting_id: &str) -> DataResult<Meeting> {
        catching("get_meeting", self.api.get_meeting(meeting_id))
            .await
            .map(Meeting::from)
    }

    async fn get_meeting_invite_code(&self, meeting_id: &str) -> DataResult<String> {
        catching(
            "get_meeting_invite_code",
            self.api.get_meeting_invite_code(meeting_id),
        )
        .await
    }

    async fn create_meeting(&self, name: &str, image_url: &str) -> DataResult<Meeting> {
        catching("create_meeting", self.api.create_meeting(name, image_url))
            .await
            .map(Meeting::from)
    }

    async fn update_meeting(
        &self,
        meeting_id: &str,
        name: &str,
        image_url: &str,
    ) -> DataResult<Meeting> {
        catching(
            "update_meeting",
            self.api.update_meeting(meeting_id, name, image_url),
        )
        .await
        .map(Meeting::from)
    }

    async fn join_meeting(&self, code: &str) -> DataResult<Meeting> {
        catching("join_meeting", self.api.join_meeting(code))
            .await
            .map(Meeting::from)
    }

    async fn delete_meeting(&self, meeting_id: &str) -> DataResult<()> {
        catching("delete_meeting", self.api.delete_meeting(meeting_id)).await
    }
}
