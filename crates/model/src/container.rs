use serde::{Deserialize, Serialize};

use crate::meeting::{Meeting, MeetingResponse};
use crate::plan::{Plan, PlanResponse};
use crate::review::{Review, ReviewResponse};

/// Home feed: the user's meetings and the upcoming plans across them.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct MeetingPlanContainerResponse {
    #[serde(rename = "meetList")]
    pub meetings: Vec<MeetingResponse>,
    #[serde(rename = "planList")]
    pub plans: Vec<PlanResponse>,
}

/// One calendar month of plans and reviews.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PlanReviewContainerResponse {
    #[serde(rename = "planList")]
    pub plans: Vec<PlanResponse>,
    #[serde(rename = "reviewList")]
    pub reviews: Vec<ReviewResponse>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MeetingPlanContainer {
    pub meetings: Vec<Meeting>,
    pub plans: Vec<Plan>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlanReviewContainer {
    pub plans: Vec<Plan>,
    pub reviews: Vec<Review>,
}

impl From<MeetingPlanContainerResponse> for MeetingPlanContainer {
    fn from(response: MeetingPlanContainerResponse) -> Self {
        Self {
            meetings: response.meetings.into_iter().map(Meeting::from).collect(),
            plans: response.plans.into_iter().map(Plan::from).collect(),
        }
    }
}

impl From<PlanReviewContainerResponse> for PlanReviewContainer {
    fn from(response: PlanReviewContainerResponse) -> Self {
        Self {
            plans: response.plans.into_iter().map(Plan::from).collect(),
            reviews: response.reviews.into_iter().map(Review::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_lists_decode_as_empty() {
        let home = MeetingPlanContainer::from(
            serde_json::from_str::<MeetingPlanContainerResponse>("{}").unwrap(),
        );
        assert!(home.meetings.is_empty());
        assert!(home.plans.is_empty());
    }

    #[test]
    fn lists_map_element_wise() {
        let response: PlanReviewContainerResponse = serde_json::from_value(serde_json::json!({
            "planList": [{"planId": "p1"}, {"planId": "p2"}],
            "reviewList": [{"reviewId": "r1"}]
        }))
        .unwrap();
        let month = PlanReviewContainer::from(response);

        assert_eq!(month.plans.len(), 2);
        assert_eq!(month.plans[1].plan_id, "p2");
        assert_eq!(month.reviews[0].review_id, "r1");
    }

    #[test]
    fn a_malformed_element_fails_the_whole_response() {
        let result = serde_json::from_value::<MeetingPlanContainerResponse>(serde_json::json!({
            "meetList": [{"meetId": "m1", "meetName": "ok"}, {"meetName": "no id"}]
        }));
        assert!(result.is_err());
    }
}
