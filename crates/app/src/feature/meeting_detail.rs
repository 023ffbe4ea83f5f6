//! One meeting with its plans and reviews.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use moim_core::{Clock, DataError, LoadResult};
use moim_data::{MeetingRepository, PlanRepository};
use moim_events::{
    react, PlanChange, PlanChangeKind, PlanItemBus, PlanReaction, PlanScope, ScreenId,
};
use moim_model::{Meeting, PlanItem, User};
use serde::Serialize;

use crate::config::AppConfig;
use crate::container::AppContainer;
use crate::feature::listen_plan_changes;
use crate::view::{Feature, ParticipantSource, Restartable, Route, Screen, StateHolder, ViewScope};

/// Everything the meeting screen loads in one go.
#[derive(Debug, Clone, PartialEq)]
pub struct MeetingSnapshot {
    pub user: User,
    pub meeting: Meeting,
    pub plans: Vec<PlanItem>,
    pub reviews: Vec<PlanItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MeetingDetailContent {
    pub user_id: String,
    pub meeting: Meeting,
    pub plans: Vec<PlanItem>,
    pub reviews: Vec<PlanItem>,
    /// Plans tab when `true`, reviews tab otherwise.
    pub is_plan_selected: bool,
    /// Plan the cancel dialog was opened for.
    pub cancel_plan_id: Option<String>,
    pub show_apply_cancel_dialog: bool,
}

impl MeetingDetailContent {
    fn post_ids(&self) -> Vec<String> {
        self.plans
            .iter()
            .chain(&self.reviews)
            .map(|item| item.post_id.clone())
            .collect()
    }

    fn items_mut(&mut self) -> impl Iterator<Item = &mut PlanItem> {
        self.plans.iter_mut().chain(self.reviews.iter_mut())
    }
}

#[derive(Debug, Clone)]
pub enum MeetingDetailAction {
    Back,
    Refresh,
    SelectPlanTab(bool),
    OpenSetting,
    OpenMeetingImage,
    ShareInvite,
    WritePlan,
    OpenParticipants,
    OpenPost { post_id: String, is_plan: bool },
    Apply { plan_id: String, is_apply: bool },
    ShowApplyCancelDialog { show: bool, plan_id: Option<String> },
}

pub struct MeetingDetail {
    id: ScreenId,
    meeting_id: String,
    config: AppConfig,
    holder: StateHolder<MeetingDetailContent>,
    source: Restartable<MeetingSnapshot>,
    /// Selected tab, kept across reloads.
    plan_tab: AtomicBool,
    meetings: Arc<dyn MeetingRepository>,
    plans: Arc<dyn PlanRepository>,
    bus: Arc<PlanItemBus>,
}

pub fn open(container: &AppContainer, meeting_id: &str) -> Screen<MeetingDetail> {
    let scope = ViewScope::new();

    let source = {
        let repos = container.repositories.clone();
        let clock = Arc::clone(&container.clock);
        let meeting_id = meeting_id.to_string();
        Restartable::new(scope.child_token(), move || {
            let repos = repos.clone();
            let clock = Arc::clone(&clock);
            let meeting_id = meeting_id.clone();
            async move {
                let (user, meeting, plans, reviews) = tokio::try_join!(
                    repos.user.get_user(),
                    repos.meeting.get_meeting(&meeting_id),
                    repos.plan.get_plans(&meeting_id),
                    repos.review.get_reviews(&meeting_id),
                )?;
                let now = clock.now();
                Ok::<_, DataError>(MeetingSnapshot {
                    user,
                    meeting,
                    plans: plans.iter().map(|p| PlanItem::from_plan(p, now)).collect(),
                    reviews: reviews.iter().map(|r| PlanItem::from_review(r, now)).collect(),
                })
            }
        })
    };

    let feature = Arc::new(MeetingDetail {
        id: ScreenId::new(),
        meeting_id: meeting_id.to_string(),
        config: container.config.clone(),
        holder: StateHolder::new(),
        source,
        plan_tab: AtomicBool::new(true),
        meetings: Arc::clone(&container.repositories.meeting),
        plans: Arc::clone(&container.repositories.plan),
        bus: Arc::clone(&container.plan_bus),
    });

    let this = Arc::clone(&feature);
    scope.follow(feature.source.watch(), move |result| this.apply_snapshot(result));

    let this = Arc::clone(&feature);
    listen_plan_changes(&scope, &container.plan_bus, feature.id, move |change| {
        this.on_plan_change(&change)
    });

    tracing::debug!(screen = %feature.id, meeting_id, "Opening meeting detail");
    feature.source.restart();
    Screen::new(feature, scope)
}

#[async_trait]
impl Feature for MeetingDetail {
    type Content = MeetingDetailContent;
    type Action = MeetingDetailAction;

    fn holder(&self) -> &StateHolder<MeetingDetailContent> {
        &self.holder
    }

    async fn handle(self: Arc<Self>, action: MeetingDetailAction) {
        tracing::debug!(screen = %self.id, ?action, "Meeting detail action");

        match action {
            MeetingDetailAction::Back => self.holder.navigate(Route::Back),
            MeetingDetailAction::Refresh => {
                self.source.restart();
            }
            MeetingDetailAction::SelectPlanTab(is_plan) => {
                self.plan_tab.store(is_plan, Ordering::Relaxed);
                self.holder.update_success(|c| c.is_plan_selected = is_plan);
            }
            MeetingDetailAction::OpenSetting => {
                if let Some(content) = self.holder.success() {
                    self.holder.navigate(Route::MeetingSetting {
                        meeting: content.meeting,
                    });
                }
            }
            MeetingDetailAction::OpenMeetingImage => {
                if let Some(content) = self.holder.success() {
                    self.holder.navigate(Route::ImageViewer {
                        title: content.meeting.name,
                        images: vec![content.meeting.image_url],
                        position: 0,
                    });
                }
            }
            MeetingDetailAction::ShareInvite => self.share_invite().await,
            MeetingDetailAction::WritePlan => self.holder.navigate(Route::PlanWrite {
                meeting_id: self.meeting_id.clone(),
                plan: None,
            }),
            MeetingDetailAction::OpenParticipants => {
                self.holder.navigate(Route::ParticipantList {
                    source: ParticipantSource::Meeting {
                        meeting_id: self.meeting_id.clone(),
                    },
                })
            }
            MeetingDetailAction::OpenPost { post_id, is_plan } => {
                self.holder
                    .navigate(Route::PlanDetail { post_id, is_plan })
            }
            MeetingDetailAction::Apply { plan_id, is_apply } => {
                self.apply(&plan_id, is_apply).await
            }
            MeetingDetailAction::ShowApplyCancelDialog { show, plan_id } => {
                self.holder.update_success(|c| {
                    c.show_apply_cancel_dialog = show;
                    c.cancel_plan_id = plan_id;
                });
            }
        }
    }
}

impl MeetingDetail {
    fn apply_snapshot(&self, result: LoadResult<MeetingSnapshot>) {
        match result {
            LoadResult::Loading => self.holder.set_state(LoadResult::Loading),
            LoadResult::Success(snapshot) => {
                let is_plan_selected = self.plan_tab.load(Ordering::Relaxed);
                self.holder.set_state(LoadResult::Success(MeetingDetailContent {
                    user_id: snapshot.user.user_id,
                    meeting: snapshot.meeting,
                    plans: snapshot.plans,
                    reviews: snapshot.reviews,
                    is_plan_selected,
                    cancel_plan_id: None,
                    show_apply_cancel_dialog: false,
                }));
            }
            LoadResult::Error(err) => {
                tracing::warn!(
                    screen = %self.id,
                    meeting_id = %self.meeting_id,
                    error = %err,
                    "Failed to load meeting"
                );
                self.holder.set_state(LoadResult::Error(err));
            }
        }
    }

    fn on_plan_change(&self, change: &PlanChange) {
        let Some(content) = self.holder.success() else {
            return;
        };
        let scope = PlanScope::Meeting {
            meeting_id: self.meeting_id.clone(),
            post_ids: content.post_ids(),
        };
        match react(change, &scope) {
            PlanReaction::Patch(item) => {
                self.holder.update_success(|c| {
                    if let Some(shown) = c.items_mut().find(|shown| shown.post_id == item.post_id) {
                        *shown = item;
                    }
                });
            }
            PlanReaction::Remove(post_id) => {
                self.holder.update_success(|c| {
                    c.plans.retain(|item| item.post_id != post_id);
                    c.reviews.retain(|item| item.post_id != post_id);
                });
            }
            PlanReaction::Refetch => {
                self.source.restart();
            }
            PlanReaction::Ignore => {}
        }
    }

    async fn apply(&self, plan_id: &str, is_apply: bool) {
        if self.holder.success().is_none() {
            return;
        }
        let call = if is_apply {
            self.plans.join_plan(plan_id)
        } else {
            self.plans.leave_plan(plan_id)
        };
        if self.holder.attempt("apply_plan", call).await.is_none() {
            return;
        }

        let mut updated = None;
        self.holder.update_success(|c| {
            if let Some(item) = c.plans.iter_mut().find(|item| item.post_id == plan_id) {
                item.is_participant = is_apply;
                updated = Some(item.clone());
            }
            c.show_apply_cancel_dialog = false;
            c.cancel_plan_id = None;
        });
        if let Some(item) = updated {
            self.bus.publish(PlanChange::new(
                self.id,
                PlanChangeKind::ParticipationChanged(item),
            ));
        }
    }

    async fn share_invite(&self) {
        let call = self.meetings.get_meeting_invite_code(&self.meeting_id);
        if let Some(code) = self.holder.attempt("share_invite", call).await {
            self.holder.navigate(Route::ExternalShare {
                text: self.config.invite_url(&code),
            });
        }
    }
}
