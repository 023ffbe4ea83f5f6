use async_trait::async_trait;
use moim_core::DataResult;
use moim_model::{MeetingPlanContainer, Place, Plan, PlanDraft, PlanReviewContainer};
use moim_network::PlanApi;

use crate::catching::catching;

#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait PlanRepository: Send + Sync {
    /// The user's meetings together with their upcoming plans.
    async fn get_current_plans(&self) -> DataResult<MeetingPlanContainer>;

    async fn get_plan(&self, plan_id: &str) -> DataResult<Plan>;

    async fn get_plans(&self, meeting_id: &str) -> DataResult<Vec<Plan>>;

    /// Plans and reviews of one month (`yyyy-MM`).
    async fn get_plans_for_calendar(&self, month: &str) -> DataResult<PlanReviewContainer>;

    async fn search_place(&self, keyword: &str, x: f64, y: f64) -> DataResult<Vec<Place>>;

    async fn create_plan(&self, meeting_id: &str, draft: PlanDraft) -> DataResult<Plan>;

    async fn update_plan(&self, plan_id: &str, draft: PlanDraft) -> DataResult<Plan>;

    async fn join_plan(&self, plan_id: &str) -> DataResult<()>;

    async fn leave_plan(&self, plan_id: &str) -> DataResult<()>;

    async fn delete_plan(&self, plan_id: &str) -> DataResult<()>;

    async fn report_plan(&self, plan_id: &str, reason: &str) -> DataResult<()>;
}

pub struct PlanRepositoryImpl {
    api: PlanApi,
}

impl PlanRepositoryImpl {
    pub fn new(api: PlanApi) -> Self {
        Self { api }
    }
}

#[async_trait]
impl PlanRepository for PlanRepositoryImpl {
    async fn get_current_plans(&self) -> DataResult<MeetingPlanContainer> {
        catching("get_current_plans", self.api.get_current_plans())
            .await
            .map(MeetingPlanContainer::from)
    }

    async fn get_plan(&self, plan_id: &str) -> DataResult<Plan> {
        catching("get_plan", self.api.get_plan(plan_id))
            .await
            .map(Plan::from)
    }

    async fn get_plans(&self, meeting_id: &str) -> DataResult<Vec<Plan>> {
        catching("get_plans", self.api.get_plans(meeting_id))
            .await
            .map(|plans| plans.into_iter().map(Plan::from).collect())
    }

    async fn get_plans_for_calendar(&self, month: &str) -> DataResult<PlanReviewContainer> {
        catching(
            "get_plans_for_calendar",
            self.api.get_plans_for_calendar(month),
        )
        .await
        .map(PlanReviewContainer::from)
    }

    async fn search_place(&self, keyword: &str, x: f64, y: f64) -> DataResult<Vec<Place>> {
        catching("search_place", self.api.search_place(keyword, x, y))
            .await
            .map(|places| places.into_iter().map(Place::from).collect())
    }

    async fn create_plan(&self, meeting_id: &str, draft: PlanDraft) -> DataResult<Plan> {
        catching("create_plan", self.api.create_plan(meeting_id, &draft))
            .await
            .map(Plan::from)
    }

    async fn update_plan(&self, plan_id: &str, draft: PlanDraft) -> DataResult<Plan> {
        catching("update_plan", self.api.update_plan(plan_id, &draft))
            .await
            .map(Plan::from)
    }

    async fn join_plan(&self, plan_id: &str) -> DataResult<()> {
        catching("join_plan", self.api.join_plan(plan_id)).await
    }

    async fn leave_plan(&self, plan_id: &str) -> DataResult<()> {
        catching("leave_plan", self.api.leave_plan(plan_id)).await
    }

    async fn delete_plan(&self, plan_id: &str) -> DataResult<()> {
        catching("delete_plan", self.api.delete_plan(plan_id)).await
    }

    async fn report_plan(&self, plan_id: &str, reason: &str) -> DataResult<()> {
        catching("report_plan", self.api.report_plan(plan_id, reason)).await
    }
}
