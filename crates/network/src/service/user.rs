use moim_model::{ProfileImageChange, UserResponse};
use reqwest::multipart::{Form, Part};

use crate::client::ApiClient;
use crate::error::NetworkError;

/// The signed-in user's profile.
#[derive(Clone)]
pub struct UserApi {
    client: ApiClient,
}

impl UserApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn get_user(&self) -> Result<UserResponse, NetworkError> {
        self.client.get(&["user"]).await
    }

    /// Multipart profile update.
    ///
    /// Parts: `userName` always, `imageDefault=true` to reset the avatar, or
    /// an `image` file part for a new one.
    pub async fn update_user(
        &self,
        name: &str,
        image: &ProfileImageChange,
    ) -> Result<UserResponse, NetworkError> {
        let form = profile_form(name, image).await?;
        self.client.patch_multipart(&["user"], form).await
    }
}

async fn profile_form(name: &str, image: &ProfileImageChange) -> Result<Form, NetworkError> {
    let form = Form::new().text("userName", name.to_string());
    let form = match image {
        ProfileImageChange::Keep => form,
        ProfileImageChange::Default => form.text("imageDefault", "true"),
        ProfileImageChange::File(path) => {
            let bytes = tokio::fs::read(path).await?;
            let file_name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| "profile.jpg".to_string());
            let part = Part::bytes(bytes)
                .file_name(file_name)
                .mime_str(image_mime(path))?;
            form.part("image", part)
        }
    };
    Ok(form)
}

fn image_mime(path: &std::path::Path) -> &'static str {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .as_deref()
    {
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        _ => "image/jpeg",
    }
}
