use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ParticipantResponse {
    #[serde(rename = "userId")]
    pub user_id: String,
    #[serde(rename = "userName")]
    pub user_name: String,
    #[serde(rename = "userImg")]
    pub image_url: String,
}

/// Member list of a meeting, together with who created it.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ParticipantContainerResponse {
    #[serde(rename = "creatorId")]
    pub creator_id: String,
    #[serde(rename = "members")]
    pub participants: Vec<ParticipantResponse>,
}

/// A user taking part in a meeting or a plan.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    pub user_id: String,
    pub user_name: String,
    pub image_url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParticipantContainer {
    pub creator_id: String,
    pub participants: Vec<Participant>,
}

impl ParticipantContainer {
    pub fn is_creator(&self, user_id: &str) -> bool {
        !self.creator_id.is_empty() && self.creator_id == user_id
    }
}

impl From<ParticipantResponse> for Participant {
    fn from(response: ParticipantResponse) -> Self {
        Self {
            user_id: response.user_id,
            user_name: response.user_name,
            image_url: response.image_url,
        }
    }
}

impl From<ParticipantContainerResponse> for ParticipantContainer {
    fn from(response: ParticipantContainerResponse) -> Self {
        Self {
            creator_id: response.creator_id,
            participants: response
                .participants
                .into_iter()
                .map(Participant::from)
                .collect(),
        }
    }
}
