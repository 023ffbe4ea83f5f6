use async_trait::async_trait;
use moim_core::DataResult;
use moim_model::{ProfileImageChange, User};
use moim_network::UserApi;

use crate::catching::catching;

#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn get_user(&self) -> DataResult<User>;

    /// Rename the user and optionally replace or reset their profile image.
    async fn update_user(&self, name: &str, image: ProfileImageChange) -> DataResult<User>;
}

pub struct UserRepositoryImpl {
    api: UserApi,
}

impl UserRepositoryImpl {
    pub fn new(api: UserApi) -> Self {
        Self { api }
    }
}

#[async_trait]
impl UserRepository for UserRepositoryImpl {
    async fn get_user(&self) -> DataResult<User> {
        catching("get_user", self.api.get_user()).await.map(User::from)
    }

    async fn update_user(&self, name: &str, image: ProfileImageChange) -> DataResult<User> {
        catching("update_user", self.api.update_user(name, &image))
            .await
            .map(User::from)
    }
}
