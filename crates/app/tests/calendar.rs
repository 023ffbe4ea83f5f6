//! Calendar screen driven against mocked repositories.

mod common;

use std::sync::{Arc, Mutex};

use chrono::NaiveDate;
use moim_app::feature::calendar::{self, CalendarAction};
use moim_app::view::{Route, UiEvent};
use moim_model::PlanReviewContainer;

use common::*;

fn calendar_mocks(months: Arc<Mutex<Vec<String>>>) -> Mocks {
    let mut mocks = Mocks::new();
    mocks
        .plan
        .expect_get_plans_for_calendar()
        .returning(move |month| {
            months.lock().unwrap().push(month.to_string());
            Ok(PlanReviewContainer {
                plans: vec![
                    plan("p1", "m1", "2024-05-03 19:00:00"),
                    plan("p2", "m1", "2024-05-10 19:00:00"),
                ],
                reviews: vec![review("r1", "p0", "m1")],
            })
        });
    mocks
}

// ---------------------------------------------------------------------------
// Test: the current month in server time is fetched first
// ---------------------------------------------------------------------------

#[tokio::test]
async fn opens_on_the_current_month() {
    let months = Arc::new(Mutex::new(Vec::new()));
    let container = calendar_mocks(Arc::clone(&months)).into_container();
    let screen = calendar::open(&container);

    let content = loaded(&screen).await;

    assert_eq!(content.month, "2024-05");
    assert_eq!(content.posts.len(), 3);
    assert_eq!(content.selected_day, None);
    assert_eq!(*months.lock().unwrap(), ["2024-05"]);
}

// ---------------------------------------------------------------------------
// Test: selecting a day filters locally
// ---------------------------------------------------------------------------

#[tokio::test]
async fn selecting_a_day_filters_without_fetching() {
    let months = Arc::new(Mutex::new(Vec::new()));
    let container = calendar_mocks(Arc::clone(&months)).into_container();
    let screen = calendar::open(&container);
    loaded(&screen).await;

    let day = NaiveDate::from_ymd_opt(2024, 5, 10).unwrap();
    screen.send(CalendarAction::SelectDay(day)).await;

    let content = screen.state().success().cloned().unwrap();
    assert_eq!(content.selected_day, Some(day));
    let ids: Vec<_> = content.day_posts.iter().map(|p| p.post_id.as_str()).collect();
    assert_eq!(ids, ["p2"]);
    assert_eq!(months.lock().unwrap().len(), 1);
}

// ---------------------------------------------------------------------------
// Test: moving to the next month refetches and clears the day
// ---------------------------------------------------------------------------

#[tokio::test]
async fn next_month_refetches_and_clears_selection() {
    let months = Arc::new(Mutex::new(Vec::new()));
    let container = calendar_mocks(Arc::clone(&months)).into_container();
    let screen = calendar::open(&container);
    loaded(&screen).await;

    screen
        .send(CalendarAction::SelectDay(
            NaiveDate::from_ymd_opt(2024, 5, 3).unwrap(),
        ))
        .await;
    screen.send(CalendarAction::NextMonth).await;

    let content = wait_content(&screen, |c| c.month == "2024-06").await;
    assert_eq!(content.selected_day, None);
    assert!(content.day_posts.is_empty());
    assert_eq!(*months.lock().unwrap(), ["2024-05", "2024-06"]);

    screen
        .send(CalendarAction::ChangeMonth {
            year: 2023,
            month: 12,
        })
        .await;
    wait_content(&screen, |c| c.month == "2023-12").await;
}

// ---------------------------------------------------------------------------
// Test: opening a post navigates to its detail
// ---------------------------------------------------------------------------

#[tokio::test]
async fn open_post_navigates_to_detail() {
    let container = calendar_mocks(Arc::default()).into_container();
    let screen = calendar::open(&container);
    let mut events = screen.take_events().unwrap();
    loaded(&screen).await;

    screen
        .send(CalendarAction::OpenPost {
            post_id: "r1".into(),
            is_plan: false,
        })
        .await;

    assert_eq!(
        next_event(&mut events).await,
        UiEvent::Navigate(Route::PlanDetail {
            post_id: "r1".into(),
            is_plan: false
        })
    );
}
