use moim_model::{
    MeetingPlanContainerResponse, PlaceResponse, PlanDraft, PlanResponse,
    PlanReviewContainerResponse,
};
use serde_json::json;

use crate::client::ApiClient;
use crate::error::NetworkError;

/// `plan/*` endpoints.
#[derive(Clone)]
pub struct PlanApi {
    client: ApiClient,
}

impl PlanApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// The user's meetings plus their upcoming plans.
    pub async fn get_current_plans(&self) -> Result<MeetingPlanContainerResponse, NetworkError> {
        self.client.get(&["plan", "current"]).await
    }

    pub async fn get_plan(&self, plan_id: &str) -> Result<PlanResponse, NetworkError> {
        self.client.get(&["plan", plan_id]).await
    }

    pub async fn get_plans(&self, meeting_id: &str) -> Result<Vec<PlanResponse>, NetworkError> {
        self.client.get(&["plan", "list", meeting_id]).await
    }

    /// `month` is formatted `yyyy-MM`.
    pub async fn get_plans_for_calendar(
        &self,
        month: &str,
    ) -> Result<PlanReviewContainerResponse, NetworkError> {
        self.client.get(&["plan", "calendar", month]).await
    }

    pub async fn search_place(
        &self,
        keyword: &str,
        x: f64,
        y: f64,
    ) -> Result<Vec<PlaceResponse>, NetworkError> {
        let query = [
            ("keyword", keyword.to_string()),
            ("x", x.to_string()),
            ("y", y.to_string()),
        ];
        self.client.get_with_query(&["plan", "search", "place"], &query).await
    }

    pub async fn create_plan(
        &self,
        meeting_id: &str,
        draft: &PlanDraft,
    ) -> Result<PlanResponse, NetworkError> {
        let mut body = draft_body(draft);
        body["meetId"] = json!(meeting_id);
        self.client.post(&["plan", "create"], Some(&body)).await
    }

    pub async fn update_plan(
        &self,
        plan_id: &str,
        draft: &PlanDraft,
    ) -> Result<PlanResponse, NetworkError> {
        self.client
            .patch(&["plan", "update", plan_id], &draft_body(draft))
            .await
    }

    pub async fn join_plan(&self, plan_id: &str) -> Result<(), NetworkError> {
        self.client.post_unit(&["plan", "join", plan_id], None).await
    }

    pub async fn leave_plan(&self, plan_id: &str) -> Result<(), NetworkError> {
        self.client.delete(&["plan", "leave", plan_id]).await
    }

    pub async fn delete_plan(&self, plan_id: &str) -> Result<(), NetworkError> {
        self.client.delete(&["plan", plan_id]).await
    }

    pub async fn report_plan(&self, plan_id: &str, reason: &str) -> Result<(), NetworkError> {
        let body = json!({ "planId": plan_id, "reason": reason });
        self.client.post_unit(&["plan", "report"], Some(&body)).await
    }
}

fn draft_body(draft: &PlanDraft) -> serde_json::Value {
    json!({
        "planName": draft.name,
        "planTime": draft.plan_time,
        "title": draft.place_name,
        "planAddress": draft.address,
        "weatherAddress": draft.weather_address,
        "lat": draft.latitude,
        "lot": draft.longitude,
    })
}
