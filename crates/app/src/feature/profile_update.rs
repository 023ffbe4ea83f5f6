//! Edit the user's name and profile image.

use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use moim_core::LoadResult;
use moim_data::UserRepository;
use moim_events::ScreenId;
use moim_model::{ProfileImageChange, User};
use serde::Serialize;

use crate::container::AppContainer;
use crate::view::{Feature, Restartable, Route, Screen, StateHolder, ViewScope};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileUpdateContent {
    pub user: User,
    pub name: String,
    pub image: ProfileImageChange,
    pub show_image_edit_dialog: bool,
}

impl ProfileUpdateContent {
    fn new(user: User) -> Self {
        Self {
            name: user.name.clone(),
            user,
            image: ProfileImageChange::Keep,
            show_image_edit_dialog: false,
        }
    }

    /// What the avatar should show right now. `None` means the default image.
    pub fn image_preview(&self) -> Option<String> {
        match &self.image {
            ProfileImageChange::Keep if self.user.image_url.is_empty() => None,
            ProfileImageChange::Keep => Some(self.user.image_url.clone()),
            ProfileImageChange::Default => None,
            ProfileImageChange::File(path) => Some(path.display().to_string()),
        }
    }

    pub fn can_submit(&self) -> bool {
        !self.name.trim().is_empty()
    }
}

#[derive(Debug, Clone)]
pub enum ProfileUpdateAction {
    Back,
    Refresh,
    ChangeName(String),
    ShowImageEditDialog(bool),
    /// Ask the platform for a photo; the result comes back as `PhotoPicked`.
    PickPhoto,
    PhotoPicked(PathBuf),
    ResetImage,
    Submit,
}

pub struct ProfileUpdate {
    id: ScreenId,
    holder: StateHolder<ProfileUpdateContent>,
    source: Restartable<User>,
    users: Arc<dyn UserRepository>,
}

pub fn open(container: &AppContainer) -> Screen<ProfileUpdate> {
    let scope = ViewScope::new();

    let source = {
        let users = Arc::clone(&container.repositories.user);
        Restartable::new(scope.child_token(), move || {
            let users = Arc::clone(&users);
            async move { users.get_user().await }
        })
    };

    let feature = Arc::new(ProfileUpdate {
        id: ScreenId::new(),
        holder: StateHolder::new(),
        source,
        users: Arc::clone(&container.repositories.user),
    });

    let this = Arc::clone(&feature);
    scope.follow(feature.source.watch(), move |result| match result {
        LoadResult::Loading => this.holder.set_state(LoadResult::Loading),
        LoadResult::Success(user) => this
            .holder
            .set_state(LoadResult::Success(ProfileUpdateContent::new(user))),
        LoadResult::Error(err) => {
            tracing::warn!(screen = %this.id, error = %err, "Failed to load profile");
            this.holder.set_state(LoadResult::Error(err));
        }
    });

    feature.source.restart();
    Screen::new(feature, scope)
}

#[async_trait]
impl Feature for ProfileUpdate {
    type Content = ProfileUpdateContent;
    type Action = ProfileUpdateAction;

    fn holder(&self) -> &StateHolder<ProfileUpdateContent> {
        &self.holder
    }

    async fn handle(self: Arc<Self>, action: ProfileUpdateAction) {
        tracing::debug!(screen = %self.id, ?action, "Profile update action");

        match action {
            ProfileUpdateAction::Back => self.holder.navigate(Route::Back),
            ProfileUpdateAction::Refresh => {
                self.source.restart();
            }
            ProfileUpdateAction::ChangeName(name) => {
                self.holder.update_success(|c| c.name = name);
            }
            ProfileUpdateAction::ShowImageEditDialog(show) => {
                self.holder
                    .update_success(|c| c.show_image_edit_dialog = show);
            }
            ProfileUpdateAction::PickPhoto => {
                if self
                    .holder
                    .update_success(|c| c.show_image_edit_dialog = false)
                {
                    self.holder.navigate(Route::PhotoPicker);
                }
            }
            ProfileUpdateAction::PhotoPicked(path) => {
                self.holder
                    .update_success(|c| c.image = ProfileImageChange::File(path));
            }
            ProfileUpdateAction::ResetImage => {
                self.holder.update_success(|c| {
                    c.image = ProfileImageChange::Default;
                    c.show_image_edit_dialog = false;
                });
            }
            ProfileUpdateAction::Submit => self.submit().await,
        }
    }
}

impl ProfileUpdate {
    async fn submit(&self) {
        let Some(content) = self.holder.success() else {
            return;
        };
        if !content.can_submit() {
            return;
        }
        let call = self
            .users
            .update_user(content.name.trim(), content.image.clone());
        if let Some(user) = self.holder.attempt("update_user", call).await {
            tracing::info!(screen = %self.id, user_id = %user.user_id, "Profile updated");
            self.holder.update_success(|c| *c = ProfileUpdateContent::new(user));
            self.holder.navigate(Route::Back);
        }
    }
}
