//! Month calendar of the user's plans and reviews.
//!
//! The month is fetched as a whole; picking a day only filters locally.

use std::sync::{Arc, Mutex, RwLock};

use async_trait::async_trait;
use chrono::{Datelike, Months, NaiveDate};
use moim_core::time::{server_date, server_today};
use moim_core::{Clock, DataError, LoadResult};
use moim_events::{react, PlanChange, PlanReaction, PlanScope, ScreenId};
use moim_model::PlanItem;
use serde::Serialize;

use crate::container::AppContainer;
use crate::feature::listen_plan_changes;
use crate::view::{Feature, Restartable, Route, Screen, StateHolder, ViewScope};

/// One fetched month.
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarMonth {
    pub month: NaiveDate,
    pub posts: Vec<PlanItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalendarContent {
    /// `yyyy-MM`.
    pub month: String,
    /// Every post of the month, plans first.
    pub posts: Vec<PlanItem>,
    pub selected_day: Option<NaiveDate>,
    /// Posts of `selected_day`, or empty when no day is selected.
    pub day_posts: Vec<PlanItem>,
}

impl CalendarContent {
    fn select(&mut self, day: Option<NaiveDate>) {
        self.selected_day = day;
        self.day_posts = match day {
            Some(day) => self
                .posts
                .iter()
                .filter(|post| server_date(&post.plan_at) == Some(day))
                .cloned()
                .collect(),
            None => Vec::new(),
        };
    }
}

#[derive(Debug, Clone)]
pub enum CalendarAction {
    Refresh,
    PreviousMonth,
    NextMonth,
    ChangeMonth { year: i32, month: u32 },
    SelectDay(NaiveDate),
    ClearDay,
    OpenPost { post_id: String, is_plan: bool },
}

pub struct Calendar {
    id: ScreenId,
    holder: StateHolder<CalendarContent>,
    source: Restartable<CalendarMonth>,
    /// First day of the shown month.
    month: Arc<RwLock<NaiveDate>>,
    selected_day: Mutex<Option<NaiveDate>>,
    clock: Arc<dyn Clock>,
}

pub fn open(container: &AppContainer) -> Screen<Calendar> {
    let scope = ViewScope::new();
    let today = server_today(container.clock.now());
    let month = Arc::new(RwLock::new(first_of_month(today)));

    let source = {
        let plans = Arc::clone(&container.repositories.plan);
        let clock = Arc::clone(&container.clock);
        let month = Arc::clone(&month);
        Restartable::new(scope.child_token(), move || {
            let plans = Arc::clone(&plans);
            let clock = Arc::clone(&clock);
            let month = *month.read().unwrap_or_else(|p| p.into_inner());
            async move {
                let fetched = plans.get_plans_for_calendar(&month_key(month)).await?;
                let now = clock.now();
                let posts = fetched
                    .plans
                    .iter()
                    .map(|plan| PlanItem::from_plan(plan, now))
                    .chain(
                        fetched
                            .reviews
                            .iter()
                            .map(|review| PlanItem::from_review(review, now)),
                    )
                    .collect();
                Ok::<_, DataError>(CalendarMonth { month, posts })
            }
        })
    };

    let feature = Arc::new(Calendar {
        id: ScreenId::new(),
        holder: StateHolder::new(),
        source,
        month,
        selected_day: Mutex::new(None),
        clock: Arc::clone(&container.clock),
    });

    let this = Arc::clone(&feature);
    scope.follow(feature.source.watch(), move |result| this.apply_month(result));

    let this = Arc::clone(&feature);
    listen_plan_changes(&scope, &container.plan_bus, feature.id, move |change| {
        this.on_plan_change(&change)
    });

    feature.source.restart();
    Screen::new(feature, scope)
}

#[async_trait]
impl Feature for Calendar {
    type Content = CalendarContent;
    type Action = CalendarAction;

    fn holder(&self) -> &StateHolder<CalendarContent> {
        &self.holder
    }

    async fn handle(self: Arc<Self>, action: CalendarAction) {
        tracing::debug!(screen = %self.id, ?action, "Calendar action");

        match action {
            CalendarAction::Refresh => {
                self.source.restart();
            }
            CalendarAction::PreviousMonth => {
                self.shift_month(|month| month.checked_sub_months(Months::new(1)))
            }
            CalendarAction::NextMonth => {
                self.shift_month(|month| month.checked_add_months(Months::new(1)))
            }
            CalendarAction::ChangeMonth { year, month } => {
                self.shift_month(|_| NaiveDate::from_ymd_opt(year, month, 1))
            }
            CalendarAction::SelectDay(day) => self.select_day(Some(day)),
            CalendarAction::ClearDay => self.select_day(None),
            CalendarAction::OpenPost { post_id, is_plan } => {
                self.holder
                    .navigate(Route::PlanDetail { post_id, is_plan })
            }
        }
    }
}

impl Calendar {
    fn apply_month(&self, result: LoadResult<CalendarMonth>) {
        match result {
            LoadResult::Loading => self.holder.set_state(LoadResult::Loading),
            LoadResult::Success(fetched) => {
                let mut content = CalendarContent {
                    month: month_key(fetched.month),
                    posts: fetched.posts,
                    selected_day: None,
                    day_posts: Vec::new(),
                };
                content.select(*self.selected_day.lock().unwrap_or_else(|p| p.into_inner()));
                self.holder.set_state(LoadResult::Success(content));
            }
            LoadResult::Error(err) => {
                tracing::warn!(screen = %self.id, error = %err, "Failed to load calendar");
                self.holder.set_state(LoadResult::Error(err));
            }
        }
    }

    fn on_plan_change(&self, change: &PlanChange) {
        let Some(content) = self.holder.success() else {
            return;
        };
        let scope = PlanScope::Participating {
            post_ids: content.posts.iter().map(|p| p.post_id.clone()).collect(),
        };
        match react(change, &scope) {
            PlanReaction::Patch(item) => {
                let item = item.refreshed(self.clock.now());
                self.holder.update_success(|c| {
                    if let Some(shown) = c.posts.iter_mut().find(|p| p.post_id == item.post_id) {
                        *shown = item;
                    }
                    c.select(c.selected_day);
                });
            }
            PlanReaction::Remove(post_id) => {
                self.holder.update_success(|c| {
                    c.posts.retain(|p| p.post_id != post_id);
                    c.select(c.selected_day);
                });
            }
            PlanReaction::Refetch => {
                self.source.restart();
            }
            PlanReaction::Ignore => {}
        }
    }

    fn shift_month(&self, next: impl FnOnce(NaiveDate) -> Option<NaiveDate>) {
        {
            let mut month = self.month.write().unwrap_or_else(|p| p.into_inner());
            let Some(target) = next(*month) else {
                return;
            };
            *month = first_of_month(target);
        }
        *self.selected_day.lock().unwrap_or_else(|p| p.into_inner()) = None;
        self.source.restart();
    }

    fn select_day(&self, day: Option<NaiveDate>) {
        *self.selected_day.lock().unwrap_or_else(|p| p.into_inner()) = day;
        self.holder.update_success(|c| c.select(day));
    }
}

fn first_of_month(day: NaiveDate) -> NaiveDate {
    day.with_day(1).unwrap_or(day)
}

fn month_key(month: NaiveDate) -> String {
    month.format("%Y-%m").to_string()
}
