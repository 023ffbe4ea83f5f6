//! Create a plan in a meeting, or edit an existing one.

use std::sync::Arc;

use async_trait::async_trait;
use moim_core::time::is_after;
use moim_core::{Clock, LoadResult};
use moim_data::PlanRepository;
use moim_events::{PlanChange, PlanChangeKind, PlanItemBus, ScreenId};
use moim_model::{Place, PlanDraft, PlanItem};
use serde::Serialize;

use crate::container::AppContainer;
use crate::view::{Feature, Route, Screen, StateHolder, ViewScope};

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PlanWriteContent {
    pub meeting_id: String,
    /// Set when editing an existing plan.
    pub plan_id: Option<String>,
    pub name: String,
    /// Server time string, e.g. `2024-05-03 19:00:00`.
    pub plan_time: String,
    pub place_name: String,
    pub address: String,
    pub weather_address: String,
    pub latitude: f64,
    pub longitude: f64,
    pub search_results: Vec<Place>,
}

impl PlanWriteContent {
    fn draft(&self) -> PlanDraft {
        PlanDraft {
            name: self.name.trim().to_string(),
            plan_time: self.plan_time.clone(),
            place_name: self.place_name.clone(),
            address: self.address.clone(),
            weather_address: self.weather_address.clone(),
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }

    /// A plan needs a name, a place and a time that has not passed yet.
    pub fn can_submit(&self, clock: &dyn Clock) -> bool {
        !self.name.trim().is_empty()
            && !self.place_name.is_empty()
            && is_after(&self.plan_time, clock.now())
    }
}

#[derive(Debug, Clone)]
pub enum PlanWriteAction {
    Back,
    ChangeName(String),
    ChangeTime(String),
    /// Search places around `x` (longitude) and `y` (latitude).
    SearchPlace { keyword: String, x: f64, y: f64 },
    SelectPlace(Place),
    Submit,
}

pub struct PlanWrite {
    id: ScreenId,
    holder: StateHolder<PlanWriteContent>,
    plans: Arc<dyn PlanRepository>,
    bus: Arc<PlanItemBus>,
    clock: Arc<dyn Clock>,
}

/// Open the form for a new plan in `meeting_id`, or prefilled with `plan`.
pub fn open(
    container: &AppContainer,
    meeting_id: &str,
    plan: Option<PlanItem>,
) -> Screen<PlanWrite> {
    let content = match plan {
        Some(item) => PlanWriteContent {
            meeting_id: meeting_id.to_string(),
            plan_id: Some(item.post_id),
            name: item.post_name,
            plan_time: item.plan_at,
            place_name: item.place_name,
            weather_address: if item.weather_address.is_empty() {
                item.address.clone()
            } else {
                item.weather_address
            },
            address: item.address,
            latitude: item.latitude,
            longitude: item.longitude,
            search_results: Vec::new(),
        },
        None => PlanWriteContent {
            meeting_id: meeting_id.to_string(),
            ..Default::default()
        },
    };

    let feature = Arc::new(PlanWrite {
        id: ScreenId::new(),
        holder: StateHolder::with_state(LoadResult::Success(content)),
        plans: Arc::clone(&container.repositories.plan),
        bus: Arc::clone(&container.plan_bus),
        clock: Arc::clone(&container.clock),
    });
    Screen::new(feature, ViewScope::new())
}

#[async_trait]
impl Feature for PlanWrite {
    type Content = PlanWriteContent;
    type Action = PlanWriteAction;

    fn holder(&self) -> &StateHolder<PlanWriteContent> {
        &self.holder
    }

    async fn handle(self: Arc<Self>, action: PlanWriteAction) {
        tracing::debug!(screen = %self.id, ?action, "Plan write action");

        match action {
            PlanWriteAction::Back => self.holder.navigate(Route::Back),
            PlanWriteAction::ChangeName(name) => {
                self.holder.update_success(|c| c.name = name);
            }
            PlanWriteAction::ChangeTime(plan_time) => {
                self.holder.update_success(|c| c.plan_time = plan_time);
            }
            PlanWriteAction::SearchPlace { keyword, x, y } => {
                self.search_place(keyword.trim(), x, y).await
            }
            PlanWriteAction::SelectPlace(place) => {
                self.holder.update_success(|c| {
                    c.place_name = place.name.clone();
                    c.address = place.display_address().to_string();
                    c.weather_address = place.weather_address().to_string();
                    c.latitude = place.latitude;
                    c.longitude = place.longitude;
                    c.search_results.clear();
                });
            }
            PlanWriteAction::Submit => self.submit().await,
        }
    }
}

impl PlanWrite {
    async fn search_place(&self, keyword: &str, x: f64, y: f64) {
        if keyword.is_empty() {
            self.holder.update_success(|c| c.search_results.clear());
            return;
        }
        let call = self.plans.search_place(keyword, x, y);
        if let Some(places) = self.holder.attempt("search_place", call).await {
            self.holder.update_success(|c| c.search_results = places);
        }
    }

    async fn submit(&self) {
        let Some(content) = self.holder.success() else {
            return;
        };
        if !content.can_submit(self.clock.as_ref()) {
            tracing::debug!(screen = %self.id, "Plan form incomplete");
            return;
        }

        let draft = content.draft();
        let change = match &content.plan_id {
            Some(plan_id) => {
                let call = self.plans.update_plan(plan_id, draft);
                self.holder
                    .attempt("update_plan", call)
                    .await
                    .map(|plan| {
                        let mut item = PlanItem::from_plan(&plan, self.clock.now());
                        // The update reply may omit the ids it was addressed by.
                        if item.post_id.is_empty() {
                            item.post_id = plan_id.clone();
                            item.comment_check_id = plan_id.clone();
                        }
                        if item.meeting_id.is_empty() {
                            item.meeting_id = content.meeting_id.clone();
                        }
                        PlanChangeKind::Edited(item)
                    })
            }
            None => {
                let call = self.plans.create_plan(&content.meeting_id, draft);
                self.holder
                    .attempt("create_plan", call)
                    .await
                    .map(|_| PlanChangeKind::Created {
                        meeting_id: content.meeting_id.clone(),
                    })
            }
        };

        if let Some(kind) = change {
            self.bus.publish(PlanChange::new(self.id, kind));
            self.holder.navigate(Route::Back);
        }
    }
}
