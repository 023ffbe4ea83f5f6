//! Plan write screen driven against mocked repositories.

mod common;

use assert_matches::assert_matches;
use moim_app::feature::plan_write::{self, PlanWriteAction};
use moim_app::view::{Route, UiEvent};
use moim_events::{PlanChangeKind, ScreenId};
use moim_model::{Place, PlanItem};

use common::*;

fn cafe() -> Place {
    Place {
        name: "Blue Cafe".into(),
        address: "12 Old St".into(),
        road_address: "12 New Rd".into(),
        latitude: 37.51,
        longitude: 127.02,
    }
}

// ---------------------------------------------------------------------------
// Test: a complete form creates the plan and announces it
// ---------------------------------------------------------------------------

#[tokio::test]
async fn submit_creates_plan_and_goes_back() {
    let mut mocks = Mocks::new();
    mocks
        .plan
        .expect_search_place()
        .withf(|keyword, _, _| keyword == "cafe")
        .returning(|_, _, _| Ok(vec![cafe()]));
    mocks
        .plan
        .expect_create_plan()
        .withf(|meeting_id, draft| {
            meeting_id == "m1"
                && draft.name == "Dinner"
                && draft.place_name == "Blue Cafe"
                && draft.address == "12 New Rd"
                && draft.weather_address == "12 Old St"
        })
        .returning(|meeting_id, _| Ok(plan("p9", meeting_id, FUTURE_TIME)));
    let container = mocks.into_container();
    let mut observer = container.plan_bus.subscribe(ScreenId::new());

    let screen = plan_write::open(&container, "m1", None);
    let mut events = screen.take_events().unwrap();

    screen
        .send(PlanWriteAction::ChangeName(" Dinner ".into()))
        .await;
    screen
        .send(PlanWriteAction::ChangeTime(FUTURE_TIME.into()))
        .await;
    screen
        .send(PlanWriteAction::SearchPlace {
            keyword: " cafe ".into(),
            x: 127.0,
            y: 37.5,
        })
        .await;
    let content = screen.state().success().cloned().unwrap();
    assert_eq!(content.search_results, vec![cafe()]);

    screen.send(PlanWriteAction::SelectPlace(cafe())).await;
    let content = screen.state().success().cloned().unwrap();
    assert!(content.search_results.is_empty());
    assert_eq!(content.address, "12 New Rd");
    assert_eq!(content.weather_address, "12 Old St");

    screen.send(PlanWriteAction::Submit).await;

    assert_eq!(drain(&mut events), vec![UiEvent::Navigate(Route::Back)]);
    let change = tokio::time::timeout(WAIT, observer.recv())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(
        change.kind,
        PlanChangeKind::Created {
            meeting_id: "m1".into()
        }
    );
}

// ---------------------------------------------------------------------------
// Test: an incomplete or past form is not submitted
// ---------------------------------------------------------------------------

#[tokio::test]
async fn incomplete_form_is_not_submitted() {
    let mut mocks = Mocks::new();
    mocks.plan.expect_create_plan().never();
    let container = mocks.into_container();

    let screen = plan_write::open(&container, "m1", None);
    let mut events = screen.take_events().unwrap();

    screen.send(PlanWriteAction::ChangeName("Lunch".into())).await;
    screen.send(PlanWriteAction::SelectPlace(cafe())).await;
    screen
        .send(PlanWriteAction::ChangeTime(PAST_TIME.into()))
        .await;
    screen.send(PlanWriteAction::Submit).await;

    assert!(drain(&mut events).is_empty());
}

// ---------------------------------------------------------------------------
// Test: editing updates the plan and broadcasts the edited item
// ---------------------------------------------------------------------------

#[tokio::test]
async fn editing_broadcasts_the_updated_plan() {
    let mut mocks = Mocks::new();
    mocks
        .plan
        .expect_update_plan()
        .withf(|plan_id, draft| {
            plan_id == "p1" && draft.name == "Brunch" && draft.weather_address == "Lot 7"
        })
        .returning(|_, _| {
            let mut updated = plan("", "", FUTURE_TIME);
            updated.plan_name = "Brunch".into();
            Ok(updated)
        });
    let container = mocks.into_container();
    let mut observer = container.plan_bus.subscribe(ScreenId::new());

    let existing = PlanItem {
        post_id: "p1".into(),
        comment_check_id: "p1".into(),
        meeting_id: "m1".into(),
        post_name: "Lunch".into(),
        place_name: "Blue Cafe".into(),
        address: "12 New Rd".into(),
        weather_address: "Lot 7".into(),
        plan_at: FUTURE_TIME.into(),
        is_upcoming: true,
        ..Default::default()
    };
    let screen = plan_write::open(&container, "m1", Some(existing));
    let content = screen.state().success().cloned().unwrap();
    assert_eq!(content.plan_id.as_deref(), Some("p1"));
    assert_eq!(content.name, "Lunch");

    screen.send(PlanWriteAction::ChangeName("Brunch".into())).await;
    screen.send(PlanWriteAction::Submit).await;

    let change = tokio::time::timeout(WAIT, observer.recv())
        .await
        .unwrap()
        .unwrap();
    assert_matches!(
        change.kind,
        PlanChangeKind::Edited(item)
            if item.post_id == "p1" && item.meeting_id == "m1" && item.post_name == "Brunch"
    );
}
