//! Home: the user's meetings and the upcoming plans they take part in.

use std::sync::Arc;

use async_trait::async_trait;
use moim_core::{Clock, DataError, LoadResult};
use moim_data::MeetingRepository;
use moim_events::{react, PlanChange, PlanReaction, PlanScope, ScreenId};
use moim_model::{Meeting, PlanItem};
use serde::Serialize;

use crate::container::AppContainer;
use crate::feature::listen_plan_changes;
use crate::view::{Feature, Restartable, Route, Screen, StateHolder, ViewScope};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HomeContent {
    pub meetings: Vec<Meeting>,
    pub plans: Vec<PlanItem>,
}

#[derive(Debug, Clone)]
pub enum HomeAction {
    Refresh,
    OpenMeeting(String),
    OpenPlan(String),
    CreateMeeting,
    /// Join a meeting with an invite code.
    JoinMeeting(String),
}

pub struct Home {
    id: ScreenId,
    holder: StateHolder<HomeContent>,
    source: Restartable<HomeContent>,
    meetings: Arc<dyn MeetingRepository>,
    clock: Arc<dyn Clock>,
}

pub fn open(container: &AppContainer) -> Screen<Home> {
    let scope = ViewScope::new();

    let source = {
        let plans = Arc::clone(&container.repositories.plan);
        let clock = Arc::clone(&container.clock);
        Restartable::new(scope.child_token(), move || {
            let plans = Arc::clone(&plans);
            let clock = Arc::clone(&clock);
            async move {
                let current = plans.get_current_plans().await?;
                let now = clock.now();
                Ok::<_, DataError>(HomeContent {
                    meetings: current.meetings,
                    plans: current
                        .plans
                        .iter()
                        .map(|plan| PlanItem::from_plan(plan, now))
                        .collect(),
                })
            }
        })
    };

    let feature = Arc::new(Home {
        id: ScreenId::new(),
        holder: StateHolder::new(),
        source,
        meetings: Arc::clone(&container.repositories.meeting),
        clock: Arc::clone(&container.clock),
    });

    let this = Arc::clone(&feature);
    scope.follow(feature.source.watch(), move |result| {
        if let LoadResult::Error(err) = &result {
            tracing::warn!(screen = %this.id, error = %err, "Failed to load home");
        }
        this.holder.set_state(result);
    });

    let this = Arc::clone(&feature);
    listen_plan_changes(&scope, &container.plan_bus, feature.id, move |change| {
        this.on_plan_change(&change)
    });

    feature.source.restart();
    Screen::new(feature, scope)
}

#[async_trait]
impl Feature for Home {
    type Content = HomeContent;
    type Action = HomeAction;

    fn holder(&self) -> &StateHolder<HomeContent> {
        &self.holder
    }

    async fn handle(self: Arc<Self>, action: HomeAction) {
        tracing::debug!(screen = %self.id, ?action, "Home action");

        match action {
            HomeAction::Refresh => {
                self.source.restart();
            }
            HomeAction::OpenMeeting(meeting_id) => {
                self.holder.navigate(Route::MeetingDetail { meeting_id })
            }
            HomeAction::OpenPlan(post_id) => self.holder.navigate(Route::PlanDetail {
                post_id,
                is_plan: true,
            }),
            HomeAction::CreateMeeting => self.holder.navigate(Route::MeetingWrite),
            HomeAction::JoinMeeting(code) => self.join_meeting(code.trim()).await,
        }
    }
}

impl Home {
    fn on_plan_change(&self, change: &PlanChange) {
        let Some(content) = self.holder.success() else {
            return;
        };
        let scope = PlanScope::Participating {
            post_ids: content.plans.iter().map(|p| p.post_id.clone()).collect(),
        };
        match react(change, &scope) {
            PlanReaction::Patch(item) => {
                let item = item.refreshed(self.clock.now());
                self.holder.update_success(|c| {
                    if let Some(shown) = c.plans.iter_mut().find(|p| p.post_id == item.post_id) {
                        *shown = item;
                    }
                });
            }
            PlanReaction::Remove(post_id) => {
                self.holder
                    .update_success(|c| c.plans.retain(|p| p.post_id != post_id));
            }
            PlanReaction::Refetch => {
                self.source.restart();
            }
            PlanReaction::Ignore => {}
        }
    }

    async fn join_meeting(&self, code: &str) {
        if code.is_empty() || self.holder.success().is_none() {
            return;
        }
        let call = self.meetings.join_meeting(code);
        if let Some(meeting) = self.holder.attempt("join_meeting", call).await {
            tracing::info!(screen = %self.id, meeting_id = %meeting.id, "Joined meeting");
            self.source.restart();
            self.holder.navigate(Route::MeetingDetail {
                meeting_id: meeting.id,
            });
        }
    }
}
