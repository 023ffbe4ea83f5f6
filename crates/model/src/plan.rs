use serde::{Deserialize, Serialize};

use crate::default_member_count;

/// Plan as returned by `plan/*` endpoints. Every field is optional on the wire.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PlanResponse {
    #[serde(rename = "creatorId")]
    pub user_id: String,
    #[serde(rename = "planId")]
    pub plan_id: String,
    #[serde(rename = "meetId")]
    pub meeting_id: String,
    #[serde(rename = "meetName")]
    pub meeting_name: String,
    #[serde(rename = "meetImg")]
    pub meeting_image: String,
    #[serde(rename = "planName")]
    pub plan_name: String,
    #[serde(rename = "planMemberCount", default = "default_member_count")]
    pub member_count: i32,
    #[serde(rename = "planTime")]
    pub plan_time: String,
    #[serde(rename = "planAddress")]
    pub address: String,
    #[serde(rename = "title")]
    pub place_name: String,
    #[serde(rename = "lot")]
    pub longitude: f64,
    #[serde(rename = "lat")]
    pub latitude: f64,
    #[serde(rename = "weatherAddress")]
    pub weather_address: String,
    #[serde(rename = "weatherIcon")]
    pub weather_icon_url: String,
    pub temperature: f32,
    #[serde(rename = "participant")]
    pub is_participant: bool,
}

/// A scheduled get-together of a meeting at a place and time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    pub user_id: String,
    pub meeting_id: String,
    pub meeting_name: String,
    pub meeting_image_url: String,
    pub plan_id: String,
    pub plan_name: String,
    pub member_count: i32,
    pub plan_time: String,
    pub address: String,
    pub longitude: f64,
    pub latitude: f64,
    pub place_name: String,
    pub weather_address: String,
    pub weather_icon_url: String,
    pub temperature: f32,
    /// Whether the current user has applied to this plan.
    pub is_participant: bool,
}

impl From<PlanResponse> for Plan {
    fn from(response: PlanResponse) -> Self {
        Self {
            user_id: response.user_id,
            meeting_id: response.meeting_id,
            meeting_name: response.meeting_name,
            meeting_image_url: response.meeting_image,
            plan_id: response.plan_id,
            plan_name: response.plan_name,
            member_count: response.member_count,
            plan_time: response.plan_time,
            address: response.address,
            longitude: response.longitude,
            latitude: response.latitude,
            place_name: response.place_name,
            weather_address: response.weather_address,
            weather_icon_url: response.weather_icon_url,
            temperature: response.temperature,
            is_participant: response.is_participant,
        }
    }
}

/// Fields the user fills in when creating or editing a plan.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlanDraft {
    pub name: String,
    /// Server-format time, e.g. `2024-05-01 18:30:00`.
    pub plan_time: String,
    pub place_name: String,
    pub address: String,
    /// Address the server resolves the weather forecast for.
    pub weather_address: String,
    pub latitude: f64,
    pub longitude: f64,
}
