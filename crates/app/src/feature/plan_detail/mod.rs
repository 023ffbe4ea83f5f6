//! Detail screen of one post (plan or review) with its comments.

mod model;

pub use model::{CommentSegment, CommentUiModel};

use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use moim_core::LoadResult;
use moim_data::{CommentRepository, PlanRepository, ReviewRepository};
use moim_events::{
    react, PlanChange, PlanChangeKind, PlanItemBus, PlanReaction, PlanScope, ScreenId,
};
use moim_model::{Comment, PlanItem, PostKind, User};
use serde::Serialize;

use crate::container::AppContainer;
use crate::feature::listen_plan_changes;
use crate::view::{
    Feature, ParticipantSource, Restartable, Route, Screen, StateHolder, ToastMessage, ViewScope,
};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanDetailContent {
    pub user: User,
    pub plan_item: PlanItem,
    pub comments: Vec<CommentUiModel>,
    /// Comment the edit or report dialog was opened for.
    pub selected_comment: Option<Comment>,
    /// Comment currently being rewritten in the input field.
    pub selected_update_comment: Option<Comment>,
    pub show_apply_cancel_dialog: bool,
    /// Upcoming posts created by someone else can be joined or left.
    pub show_apply_button: bool,
    pub show_plan_edit_dialog: bool,
    pub show_plan_report_dialog: bool,
    pub show_comment_edit_dialog: bool,
    pub show_comment_report_dialog: bool,
}

impl PlanDetailContent {
    fn new(user: User, plan_item: PlanItem) -> Self {
        let show_apply_button = can_apply(&user, &plan_item);
        Self {
            user,
            plan_item,
            comments: Vec::new(),
            selected_comment: None,
            selected_update_comment: None,
            show_apply_cancel_dialog: false,
            show_apply_button,
            show_plan_edit_dialog: false,
            show_plan_report_dialog: false,
            show_comment_edit_dialog: false,
            show_comment_report_dialog: false,
        }
    }
}

fn can_apply(user: &User, item: &PlanItem) -> bool {
    item.is_upcoming && user.user_id != item.user_id
}

#[derive(Debug, Clone)]
pub enum PlanDetailAction {
    Back,
    Refresh,
    OpenParticipants,
    /// Edit the plan, or write the review of a past post.
    EditPost,
    DeletePost,
    ReportPost,
    OpenMap,
    Apply { is_apply: bool },
    UploadComment {
        text: String,
        /// Rewrite this comment instead of adding a new one.
        editing: Option<Comment>,
    },
    ReportComment(Comment),
    EditComment(Comment),
    DeleteComment(Comment),
    OpenWebLink(String),
    OpenReviewImage(usize),
    OpenUserImage { image_url: String, user_name: String },
    ShowApplyCancelDialog(bool),
    ShowPlanEditDialog(bool),
    ShowPlanReportDialog(bool),
    ShowCommentEditDialog { show: bool, comment: Option<Comment> },
    ShowCommentReportDialog { show: bool, comment: Option<Comment> },
}

pub struct PlanDetail {
    id: ScreenId,
    post_id: String,
    holder: StateHolder<PlanDetailContent>,
    post_source: Restartable<(User, PlanItem)>,
    comment_source: Restartable<Vec<Comment>>,
    /// Id the comments are fetched under, known once the post has loaded.
    comment_post_id: Arc<RwLock<String>>,
    plans: Arc<dyn PlanRepository>,
    reviews: Arc<dyn ReviewRepository>,
    comments: Arc<dyn CommentRepository>,
    bus: Arc<PlanItemBus>,
}

/// Open the detail screen of `post_id`, loaded as a plan or as a review.
pub fn open(container: &AppContainer, post_id: &str, is_plan: bool) -> Screen<PlanDetail> {
    let scope = ViewScope::new();

    let post_source = {
        let users = Arc::clone(&container.repositories.user);
        let get_plan_item = Arc::new(container.get_plan_item());
        let post_id = post_id.to_string();
        Restartable::new(scope.child_token(), move || {
            let users = Arc::clone(&users);
            let get_plan_item = Arc::clone(&get_plan_item);
            let post_id = post_id.clone();
            async move { tokio::try_join!(users.get_user(), get_plan_item.call(&post_id, is_plan)) }
        })
    };

    let comment_post_id = Arc::new(RwLock::new(String::new()));
    let comment_source = {
        let comments = Arc::clone(&container.repositories.comment);
        let key = Arc::clone(&comment_post_id);
        Restartable::new(scope.child_token(), move || {
            let comments = Arc::clone(&comments);
            let post_id = key.read().unwrap_or_else(|p| p.into_inner()).clone();
            async move { comments.get_comments(&post_id).await }
        })
    };

    let feature = Arc::new(PlanDetail {
        id: ScreenId::new(),
        post_id: post_id.to_string(),
        holder: StateHolder::new(),
        post_source,
        comment_source,
        comment_post_id,
        plans: Arc::clone(&container.repositories.plan),
        reviews: Arc::clone(&container.repositories.review),
        comments: Arc::clone(&container.repositories.comment),
        bus: Arc::clone(&container.plan_bus),
    });

    let this = Arc::clone(&feature);
    scope.follow(feature.post_source.watch(), move |result| this.apply_post(result));

    let this = Arc::clone(&feature);
    scope.follow(feature.comment_source.watch(), move |result| {
        this.apply_comments(result)
    });

    let this = Arc::clone(&feature);
    listen_plan_changes(&scope, &container.plan_bus, feature.id, move |change| {
        this.on_plan_change(&change)
    });

    tracing::debug!(screen = %feature.id, post_id, is_plan, "Opening plan detail");
    feature.post_source.restart();
    Screen::new(feature, scope)
}

#[async_trait]
impl Feature for PlanDetail {
    type Content = PlanDetailContent;
    type Action = PlanDetailAction;

    fn holder(&self) -> &StateHolder<PlanDetailContent> {
        &self.holder
    }

    async fn handle(self: Arc<Self>, action: PlanDetailAction) {
        tracing::debug!(screen = %self.id, ?action, "Plan detail action");

        match action {
            PlanDetailAction::Back => self.holder.navigate(Route::Back),
            PlanDetailAction::Refresh => {
                self.post_source.restart();
            }
            PlanDetailAction::OpenParticipants => self.open_participants(),
            PlanDetailAction::EditPost => self.edit_post(),
            PlanDetailAction::DeletePost => self.delete_post().await,
            PlanDetailAction::ReportPost => self.report_post().await,
            PlanDetailAction::OpenMap => self.open_map(),
            PlanDetailAction::Apply { is_apply } => self.apply(is_apply).await,
            PlanDetailAction::UploadComment { text, editing } => {
                self.upload_comment(&text, editing).await
            }
            PlanDetailAction::ReportComment(comment) => self.report_comment(&comment).await,
            PlanDetailAction::EditComment(comment) => {
                self.holder
                    .update_success(|c| c.selected_update_comment = Some(comment));
            }
            PlanDetailAction::DeleteComment(comment) => self.delete_comment(&comment).await,
            PlanDetailAction::OpenWebLink(url) => self.holder.navigate(Route::WebBrowser { url }),
            PlanDetailAction::OpenReviewImage(position) => self.open_review_image(position),
            PlanDetailAction::OpenUserImage {
                image_url,
                user_name,
            } => self.holder.navigate(Route::ImageViewer {
                title: user_name,
                images: vec![image_url],
                position: 0,
            }),
            PlanDetailAction::ShowApplyCancelDialog(show) => {
                self.holder
                    .update_success(|c| c.show_apply_cancel_dialog = show);
            }
            PlanDetailAction::ShowPlanEditDialog(show) => {
                self.holder.update_success(|c| c.show_plan_edit_dialog = show);
            }
            PlanDetailAction::ShowPlanReportDialog(show) => {
                self.holder
                    .update_success(|c| c.show_plan_report_dialog = show);
            }
            PlanDetailAction::ShowCommentEditDialog { show, comment } => {
                self.holder.update_success(|c| {
                    c.show_comment_edit_dialog = show;
                    c.selected_comment = comment;
                });
            }
            PlanDetailAction::ShowCommentReportDialog { show, comment } => {
                self.holder.update_success(|c| {
                    c.show_comment_report_dialog = show;
                    c.selected_comment = comment;
                });
            }
        }
    }
}

impl PlanDetail {
    // ---- producers ----

    fn apply_post(&self, result: LoadResult<(User, PlanItem)>) {
        match result {
            LoadResult::Loading => self.holder.set_state(LoadResult::Loading),
            LoadResult::Success((user, plan_item)) => {
                *self
                    .comment_post_id
                    .write()
                    .unwrap_or_else(|p| p.into_inner()) = plan_item.comment_check_id.clone();
                self.holder
                    .set_state(LoadResult::Success(PlanDetailContent::new(user, plan_item)));
                self.comment_source.restart();
            }
            LoadResult::Error(err) => {
                tracing::warn!(
                    screen = %self.id,
                    post_id = %self.post_id,
                    error = %err,
                    "Failed to load post"
                );
                self.holder.set_state(LoadResult::Error(err));
            }
        }
    }

    fn apply_comments(&self, result: LoadResult<Vec<Comment>>) {
        match result {
            LoadResult::Loading => {}
            LoadResult::Success(list) => {
                self.holder
                    .update_success(|c| c.comments = to_ui_models(list));
            }
            LoadResult::Error(err) => {
                if self.holder.success().is_some() {
                    tracing::warn!(screen = %self.id, error = %err, "Failed to load comments");
                    self.holder.toast(ToastMessage::CommentError);
                }
            }
        }
    }

    fn on_plan_change(&self, change: &PlanChange) {
        let scope = PlanScope::Post {
            post_id: self.post_id.clone(),
        };
        match react(change, &scope) {
            PlanReaction::Patch(item) => {
                self.holder.update_success(|c| {
                    c.show_apply_button = can_apply(&c.user, &item);
                    c.plan_item = item;
                });
            }
            PlanReaction::Remove(_) => self.holder.navigate(Route::Back),
            PlanReaction::Refetch => {
                self.post_source.restart();
            }
            PlanReaction::Ignore => {}
        }
    }

    // ---- post actions ----

    async fn apply(&self, is_apply: bool) {
        if self.holder.success().is_none() {
            return;
        }
        let call = if is_apply {
            self.plans.join_plan(&self.post_id)
        } else {
            self.plans.leave_plan(&self.post_id)
        };
        if self.holder.attempt("apply_plan", call).await.is_none() {
            return;
        }

        let mut updated = None;
        self.holder.update_success(|c| {
            c.plan_item.is_participant = is_apply;
            c.show_apply_cancel_dialog = false;
            updated = Some(c.plan_item.clone());
        });
        if let Some(item) = updated {
            self.bus.publish(PlanChange::new(
                self.id,
                PlanChangeKind::ParticipationChanged(item),
            ));
        }
    }

    async fn delete_post(&self) {
        let Some(content) = self.holder.success() else {
            return;
        };
        let item = content.plan_item;
        let call = match item.kind() {
            PostKind::Plan => self.plans.delete_plan(&item.post_id),
            PostKind::Review => self.reviews.delete_review(&item.post_id),
        };
        if self.holder.attempt("delete_post", call).await.is_some() {
            self.bus.publish(PlanChange::new(
                self.id,
                PlanChangeKind::Deleted {
                    post_id: item.post_id.clone(),
                    meeting_id: item.meeting_id.clone(),
                },
            ));
            self.holder.navigate(Route::Back);
        }
    }

    async fn report_post(&self) {
        let Some(content) = self.holder.success() else {
            return;
        };
        let item = content.plan_item;
        let call = match item.kind() {
            PostKind::Plan => self.plans.report_plan(&item.post_id, ""),
            PostKind::Review => self.reviews.report_review(&item.post_id, ""),
        };
        if self.holder.attempt("report_post", call).await.is_some() {
            self.holder.toast(ToastMessage::ReportCompleted);
        }
    }

    // ---- comment actions ----

    async fn upload_comment(&self, text: &str, editing: Option<Comment>) {
        let Some(content) = self.holder.success() else {
            return;
        };
        let text = text.trim();
        if text.is_empty() {
            return;
        }
        let post_id = content.plan_item.comment_check_id;
        let call = match &editing {
            Some(comment) => self
                .comments
                .update_comment(&post_id, &comment.comment_id, text),
            None => self.comments.create_comment(&post_id, text),
        };
        if let Some(list) = self.holder.attempt("upload_comment", call).await {
            self.holder.update_success(|c| {
                c.comments = to_ui_models(list);
                c.selected_update_comment = None;
            });
        }
    }

    async fn delete_comment(&self, comment: &Comment) {
        let call = self.comments.delete_comment(&comment.comment_id);
        if self.holder.attempt("delete_comment", call).await.is_some() {
            self.holder.update_success(|c| {
                c.comments.retain(|model| model.id() != comment.comment_id)
            });
        }
    }

    async fn report_comment(&self, comment: &Comment) {
        let call = self.comments.report_comment(&comment.comment_id);
        if self.holder.attempt("report_comment", call).await.is_some() {
            self.holder.toast(ToastMessage::ReportCompleted);
        }
    }

    // ---- navigation ----

    fn open_participants(&self) {
        let Some(content) = self.holder.success() else {
            return;
        };
        let post_id = content.plan_item.post_id.clone();
        let source = match content.plan_item.kind() {
            PostKind::Plan => ParticipantSource::Plan { plan_id: post_id },
            PostKind::Review => ParticipantSource::Review { review_id: post_id },
        };
        self.holder.navigate(Route::ParticipantList { source });
    }

    fn edit_post(&self) {
        let Some(content) = self.holder.success() else {
            return;
        };
        let item = content.plan_item;
        let route = match item.kind() {
            PostKind::Plan => Route::PlanWrite {
                meeting_id: item.meeting_id.clone(),
                plan: Some(item),
            },
            PostKind::Review => Route::ReviewWrite {
                post_id: item.post_id,
            },
        };
        self.holder.navigate(route);
    }

    fn open_map(&self) {
        let Some(content) = self.holder.success() else {
            return;
        };
        let item = content.plan_item;
        self.holder.navigate(Route::MapDetail {
            place_name: item.place_name,
            address: item.address,
            latitude: item.latitude,
            longitude: item.longitude,
        });
    }

    fn open_review_image(&self, position: usize) {
        let Some(content) = self.holder.success() else {
            return;
        };
        let item = content.plan_item;
        self.holder.navigate(Route::ImageViewer {
            title: item.post_name,
            images: item
                .review_images
                .into_iter()
                .map(|image| image.image_url)
                .collect(),
            position,
        });
    }
}

fn to_ui_models(list: Vec<Comment>) -> Vec<CommentUiModel> {
    list.into_iter().map(CommentUiModel::new).collect()
}
