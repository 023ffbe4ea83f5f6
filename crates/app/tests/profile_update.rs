//! Profile update screen driven against mocked repositories.

mod common;

use std::path::PathBuf;

use moim_app::feature::profile_update::{self, ProfileUpdateAction};
use moim_app::view::{Route, ToastMessage, UiEvent};
use moim_core::DataError;
use moim_model::{ProfileImageChange, User};

use common::*;

fn profile_mocks() -> Mocks {
    let mut mocks = Mocks::new();
    mocks.user.expect_get_user().returning(|| Ok(user("u1")));
    mocks
}

// ---------------------------------------------------------------------------
// Test: a picked photo is uploaded with the new name
// ---------------------------------------------------------------------------

#[tokio::test]
async fn submit_sends_name_and_picked_photo() {
    let mut mocks = profile_mocks();
    mocks
        .user
        .expect_update_user()
        .withf(|name, image| {
            name == "Mina"
                && *image == ProfileImageChange::File(PathBuf::from("/photos/me.jpg"))
        })
        .returning(|name, _| {
            Ok(User {
                name: name.to_string(),
                ..user("u1")
            })
        });
    let container = mocks.into_container();

    let screen = profile_update::open(&container);
    let mut events = screen.take_events().unwrap();
    let content = loaded(&screen).await;
    assert_eq!(content.name, "name-u1");
    assert_eq!(content.image, ProfileImageChange::Keep);

    screen
        .send(ProfileUpdateAction::ShowImageEditDialog(true))
        .await;
    screen.send(ProfileUpdateAction::PickPhoto).await;
    assert_eq!(
        drain(&mut events),
        vec![UiEvent::Navigate(Route::PhotoPicker)]
    );
    assert!(!screen.state().success().unwrap().show_image_edit_dialog);

    screen
        .send(ProfileUpdateAction::PhotoPicked(PathBuf::from("/photos/me.jpg")))
        .await;
    screen
        .send(ProfileUpdateAction::ChangeName(" Mina ".into()))
        .await;
    screen.send(ProfileUpdateAction::Submit).await;

    assert_eq!(drain(&mut events), vec![UiEvent::Navigate(Route::Back)]);
    assert_eq!(screen.state().success().unwrap().user.name, "Mina");
}

// ---------------------------------------------------------------------------
// Test: resetting the image asks for the default one
// ---------------------------------------------------------------------------

#[tokio::test]
async fn reset_image_requests_the_default() {
    let mut mocks = profile_mocks();
    mocks
        .user
        .expect_update_user()
        .withf(|_, image| *image == ProfileImageChange::Default)
        .returning(|_, _| Err(DataError::Network("offline".into())));
    let container = mocks.into_container();

    let screen = profile_update::open(&container);
    let mut events = screen.take_events().unwrap();
    loaded(&screen).await;

    screen.send(ProfileUpdateAction::ResetImage).await;
    assert_eq!(screen.state().success().unwrap().image_preview(), None);

    screen.send(ProfileUpdateAction::Submit).await;
    assert_eq!(
        drain(&mut events),
        vec![UiEvent::ShowToast(ToastMessage::NetworkError)]
    );
    assert_eq!(
        screen.state().success().unwrap().image,
        ProfileImageChange::Default
    );
}
