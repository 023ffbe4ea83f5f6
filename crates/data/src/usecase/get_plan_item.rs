use std::sync::Arc;

use moim_core::{Clock, DataResult};
use moim_model::PlanItem;

use crate::repository::{PlanRepository, ReviewRepository};

/// Load a post as a [`PlanItem`], from the plan or the review endpoint.
///
/// The caller knows which one it opened; `is_upcoming` on the result is
/// still derived from the clock at load time.
pub struct GetPlanItemUseCase {
    plans: Arc<dyn PlanRepository>,
    reviews: Arc<dyn ReviewRepository>,
    clock: Arc<dyn Clock>,
}

impl GetPlanItemUseCase {
    pub fn new(
        plans: Arc<dyn PlanRepository>,
        reviews: Arc<dyn ReviewRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            plans,
            reviews,
            clock,
        }
    }

    pub async fn call(&self, post_id: &str, is_plan: bool) -> DataResult<PlanItem> {
        if is_plan {
            let plan = self.plans.get_plan(post_id).await?;
            Ok(PlanItem::from_plan(&plan, self.clock.now()))
        } else {
            let review = self.reviews.get_review(post_id).await?;
            Ok(PlanItem::from_review(&review, self.clock.now()))
        }
    }
}
