use moim_model::{Meeting, PlanItem};
use serde::Serialize;

/// Whose member list to show.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ParticipantSource {
    Meeting { meeting_id: String },
    Plan { plan_id: String },
    Review { review_id: String },
}

/// Navigation requests a screen emits. Interpreting them is the router's job.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "screen", rename_all = "snake_case")]
pub enum Route {
    Back,
    MeetingDetail {
        meeting_id: String,
    },
    /// Create a new meeting.
    MeetingWrite,
    MeetingSetting {
        meeting: Meeting,
    },
    PlanDetail {
        post_id: String,
        is_plan: bool,
    },
    /// Create a plan when `plan` is `None`, edit it otherwise.
    PlanWrite {
        meeting_id: String,
        plan: Option<PlanItem>,
    },
    ReviewWrite {
        post_id: String,
    },
    ParticipantList {
        source: ParticipantSource,
    },
    MapDetail {
        place_name: String,
        address: String,
        latitude: f64,
        longitude: f64,
    },
    ImageViewer {
        title: String,
        images: Vec<String>,
        position: usize,
    },
    WebBrowser {
        url: String,
    },
    /// Hand `text` to the platform share sheet.
    ExternalShare {
        text: String,
    },
    PhotoPicker,
}
