#![allow(dead_code)]

use std::fmt::Debug;
use std::sync::Arc;
use std::time::Duration;

use chrono::{TimeZone, Utc};
use moim_app::view::{Feature, Screen, UiEvent};
use moim_app::{AppConfig, AppContainer, Repositories};
use moim_core::types::Timestamp;
use moim_core::{FixedClock, LoadResult};
use moim_data::{
    MockCommentRepository, MockMeetingRepository, MockParticipantRepository, MockPlanRepository,
    MockReviewRepository, MockUserRepository,
};
use moim_model::{Comment, Meeting, Plan, Review, User};
use tokio::sync::mpsc;

/// Upper bound for anything a test waits on.
pub const WAIT: Duration = Duration::from_secs(2);

/// Upcoming relative to [`now`].
pub const FUTURE_TIME: &str = "2024-05-03 19:00:00";
/// Already past relative to [`now`].
pub const PAST_TIME: &str = "2024-04-20 19:00:00";

/// 2024-05-01 12:00 in the server offset.
pub fn now() -> Timestamp {
    Utc.with_ymd_and_hms(2024, 5, 1, 3, 0, 0).unwrap()
}

/// One mock per repository. Set expectations, then build the container.
#[derive(Default)]
pub struct Mocks {
    pub user: MockUserRepository,
    pub meeting: MockMeetingRepository,
    pub plan: MockPlanRepository,
    pub review: MockReviewRepository,
    pub comment: MockCommentRepository,
    pub participant: MockParticipantRepository,
}

impl Mocks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_container(self) -> AppContainer {
        let repositories = Repositories {
            user: Arc::new(self.user),
            meeting: Arc::new(self.meeting),
            plan: Arc::new(self.plan),
            review: Arc::new(self.review),
            comment: Arc::new(self.comment),
            participant: Arc::new(self.participant),
        };
        AppContainer::with_repositories(
            AppConfig::default(),
            repositories,
            Arc::new(FixedClock(now())),
        )
    }
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

pub fn user(id: &str) -> User {
    User {
        user_id: id.into(),
        email: format!("{id}@example.com"),
        name: format!("name-{id}"),
        image_url: format!("https://cdn.example/{id}.png"),
    }
}

pub fn meeting(id: &str) -> Meeting {
    Meeting {
        id: id.into(),
        creator_id: "u1".into(),
        name: format!("meeting-{id}"),
        image_url: format!("https://cdn.example/{id}.png"),
        member_count: 3,
        ..Default::default()
    }
}

pub fn plan(id: &str, meeting_id: &str, plan_time: &str) -> Plan {
    Plan {
        user_id: "u2".into(),
        meeting_id: meeting_id.into(),
        meeting_name: format!("meeting-{meeting_id}"),
        plan_id: id.into(),
        plan_name: format!("plan-{id}"),
        member_count: 2,
        plan_time: plan_time.into(),
        place_name: "Cafe".into(),
        address: "1 Main St".into(),
        latitude: 37.5,
        longitude: 127.0,
        ..Default::default()
    }
}

pub fn review(id: &str, plan_id: &str, meeting_id: &str) -> Review {
    Review {
        user_id: "u2".into(),
        meeting_id: meeting_id.into(),
        post_id: plan_id.into(),
        review_id: id.into(),
        review_name: format!("review-{id}"),
        review_at: PAST_TIME.into(),
        ..Default::default()
    }
}

pub fn comment(id: &str, content: &str) -> Comment {
    Comment {
        comment_id: id.into(),
        post_id: "p1".into(),
        user_id: "u3".into(),
        user_name: "commenter".into(),
        content: content.into(),
        ..Default::default()
    }
}

// ---------------------------------------------------------------------------
// Waiting on screens
// ---------------------------------------------------------------------------

/// Wait until the screen's state satisfies `pred` and return it.
pub async fn wait_state<F>(
    screen: &Screen<F>,
    pred: impl Fn(&LoadResult<F::Content>) -> bool,
) -> LoadResult<F::Content>
where
    F: Feature,
    F::Content: Debug,
{
    let mut rx = screen.watch();
    let result = match tokio::time::timeout(WAIT, rx.wait_for(|state| pred(state))).await {
        Ok(Ok(state)) => LoadResult::clone(&state),
        _ => panic!("state never matched; last state: {:?}", screen.state()),
    };
    result
}

/// Wait for `Success` content satisfying `pred`.
pub async fn wait_content<F>(screen: &Screen<F>, pred: impl Fn(&F::Content) -> bool) -> F::Content
where
    F: Feature,
    F::Content: Debug,
{
    match wait_state(screen, |state| state.success().is_some_and(&pred)).await {
        LoadResult::Success(content) => content,
        other => panic!("expected success, got {other:?}"),
    }
}

/// Wait for the first `Success`.
pub async fn loaded<F>(screen: &Screen<F>) -> F::Content
where
    F: Feature,
    F::Content: Debug,
{
    wait_content(screen, |_| true).await
}

pub async fn next_event(events: &mut mpsc::UnboundedReceiver<UiEvent>) -> UiEvent {
    tokio::time::timeout(WAIT, events.recv())
        .await
        .expect("no event within the wait window")
        .expect("event channel closed")
}

/// Drain whatever is queued without waiting.
pub fn drain(events: &mut mpsc::UnboundedReceiver<UiEvent>) -> Vec<UiEvent> {
    std::iter::from_fn(|| events.try_recv().ok()).collect()
}
