use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UserResponse {
    #[serde(rename = "userId")]
    pub user_id: String,
    #[serde(rename = "email")]
    pub email: String,
    #[serde(rename = "userName")]
    pub name: String,
    #[serde(rename = "userImg")]
    pub image_url: String,
}

/// The signed-in user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub user_id: String,
    pub email: String,
    pub name: String,
    pub image_url: String,
}

impl From<UserResponse> for User {
    fn from(response: UserResponse) -> Self {
        Self {
            user_id: response.user_id,
            email: response.email,
            name: response.name,
            image_url: response.image_url,
        }
    }
}

/// What to do with the profile image when the profile is saved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProfileImageChange {
    #[default]
    Keep,
    /// Reset to the service's default avatar.
    Default,
    /// Upload a local image file.
    File(PathBuf),
}
