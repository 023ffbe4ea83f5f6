//! Home screen driven against mocked repositories.

mod common;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use moim_app::feature::home::{self, HomeAction};
use moim_app::view::{Route, ToastMessage, UiEvent};
use moim_core::DataError;
use moim_events::{PlanChange, PlanChangeKind, ScreenId};
use moim_model::{MeetingPlanContainer, PlanItem};

use common::*;

fn home_mocks(fetches: Arc<AtomicUsize>) -> Mocks {
    let mut mocks = Mocks::new();
    mocks.plan.expect_get_current_plans().returning(move || {
        fetches.fetch_add(1, Ordering::SeqCst);
        Ok(MeetingPlanContainer {
            meetings: vec![meeting("m1"), meeting("m2")],
            plans: vec![plan("p1", "m1", FUTURE_TIME)],
        })
    });
    mocks
}

async fn wait_for_fetches(fetches: &AtomicUsize, at_least: usize) {
    tokio::time::timeout(WAIT, async {
        while fetches.load(Ordering::SeqCst) < at_least {
            tokio::task::yield_now().await;
        }
    })
    .await
    .expect("home should fetch again");
}

// ---------------------------------------------------------------------------
// Test: meetings and upcoming plans load together
// ---------------------------------------------------------------------------

#[tokio::test]
async fn loads_meetings_and_plans() {
    let container = home_mocks(Arc::default()).into_container();
    let screen = home::open(&container);

    let content = loaded(&screen).await;

    assert_eq!(content.meetings.len(), 2);
    assert_eq!(content.plans[0].post_id, "p1");
    assert!(content.plans[0].is_upcoming);
}

// ---------------------------------------------------------------------------
// Test: joining by invite code refreshes and opens the meeting
// ---------------------------------------------------------------------------

#[tokio::test]
async fn join_meeting_opens_the_joined_meeting() {
    let fetches = Arc::new(AtomicUsize::new(0));
    let mut mocks = home_mocks(Arc::clone(&fetches));
    mocks
        .meeting
        .expect_join_meeting()
        .withf(|code| code == "ABC123")
        .returning(|_| Ok(meeting("m9")));
    let container = mocks.into_container();

    let screen = home::open(&container);
    let mut events = screen.take_events().unwrap();
    loaded(&screen).await;

    screen
        .send(HomeAction::JoinMeeting("  ABC123 ".into()))
        .await;

    assert_eq!(
        drain(&mut events),
        vec![UiEvent::Navigate(Route::MeetingDetail {
            meeting_id: "m9".into()
        })]
    );
    wait_for_fetches(&fetches, 2).await;
}

// ---------------------------------------------------------------------------
// Test: a rejected invite code shows one toast
// ---------------------------------------------------------------------------

#[tokio::test]
async fn rejected_invite_code_shows_server_toast() {
    let mut mocks = home_mocks(Arc::default());
    mocks.meeting.expect_join_meeting().returning(|_| {
        Err(DataError::Server {
            status: 404,
            message: "unknown code".into(),
        })
    });
    let container = mocks.into_container();

    let screen = home::open(&container);
    let mut events = screen.take_events().unwrap();
    loaded(&screen).await;

    screen.send(HomeAction::JoinMeeting("NOPE".into())).await;

    assert_eq!(
        drain(&mut events),
        vec![UiEvent::ShowToast(ToastMessage::ServerError)]
    );
    assert!(!screen.is_in_flight());
}

// ---------------------------------------------------------------------------
// Test: participation changes elsewhere refetch the filtered list
// ---------------------------------------------------------------------------

#[tokio::test]
async fn participation_change_refetches_home() {
    let fetches = Arc::new(AtomicUsize::new(0));
    let container = home_mocks(Arc::clone(&fetches)).into_container();
    let screen = home::open(&container);
    loaded(&screen).await;

    container.plan_bus.publish(PlanChange::new(
        ScreenId::new(),
        PlanChangeKind::ParticipationChanged(PlanItem {
            post_id: "p7".into(),
            meeting_id: "m2".into(),
            is_participant: true,
            ..Default::default()
        }),
    ));

    wait_for_fetches(&fetches, 2).await;
}

// ---------------------------------------------------------------------------
// Test: a deleted plan disappears without a refetch
// ---------------------------------------------------------------------------

#[tokio::test]
async fn deleted_plan_is_removed_locally() {
    let fetches = Arc::new(AtomicUsize::new(0));
    let container = home_mocks(Arc::clone(&fetches)).into_container();
    let screen = home::open(&container);
    loaded(&screen).await;

    container.plan_bus.publish(PlanChange::new(
        ScreenId::new(),
        PlanChangeKind::Deleted {
            post_id: "p1".into(),
            meeting_id: "m1".into(),
        },
    ));

    let content = wait_content(&screen, |c| c.plans.is_empty()).await;
    assert_eq!(content.meetings.len(), 2);
    assert_eq!(fetches.load(Ordering::SeqCst), 1);
}
