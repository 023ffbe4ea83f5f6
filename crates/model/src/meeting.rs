use serde::{Deserialize, Serialize};

use crate::default_member_count;

/// Meeting as returned by `meet/*` endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct MeetingResponse {
    #[serde(rename = "meetId")]
    pub id: String,
    #[serde(rename = "creatorId", default)]
    pub creator_id: String,
    #[serde(rename = "meetName")]
    pub name: String,
    #[serde(rename = "meetImage", default)]
    pub image_url: String,
    #[serde(rename = "memberCount", default = "default_member_count")]
    pub member_count: i32,
    #[serde(rename = "meetStartDate", default)]
    pub start_date: i32,
    #[serde(rename = "lastPlanDay", default)]
    pub last_plan_at: Option<String>,
    #[serde(rename = "sinceDays", default)]
    pub since_days: i32,
}

/// A group of people who schedule plans together.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Meeting {
    pub id: String,
    pub creator_id: String,
    pub name: String,
    pub image_url: String,
    pub member_count: i32,
    /// Start date as the server encodes it (`yyyyMMdd`).
    pub start_date: i32,
    pub last_plan_at: Option<String>,
    /// Days elapsed since the meeting started.
    pub since_days: i32,
}

impl From<MeetingResponse> for Meeting {
    fn from(response: MeetingResponse) -> Self {
        Self {
            id: response.id,
            creator_id: response.creator_id,
            name: response.name,
            image_url: response.image_url,
            member_count: response.member_count,
            start_date: response.start_date,
            last_plan_at: response.last_plan_at,
            since_days: response.since_days,
        }
    }
}
