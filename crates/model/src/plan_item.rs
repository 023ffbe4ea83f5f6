//! The unified "post" shown by detail, list and calendar screens.
//!
//! The backend serves plans and reviews from separate endpoints, but the
//! screens treat them as one thing: a post that is a plan while its time lies
//! ahead and a review once it has passed.

use moim_core::time::is_after;
use moim_core::types::Timestamp;
use serde::{Deserialize, Serialize};

use crate::plan::Plan;
use crate::review::{Review, ReviewImage};

/// Which endpoint family a post belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PostKind {
    Plan,
    Review,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlanItem {
    /// Plan id for plans, review id for reviews.
    pub post_id: String,
    /// Id comments are stored under. Reviews share their plan's comments.
    pub comment_check_id: String,
    pub user_id: String,
    pub meeting_id: String,
    pub meeting_name: String,
    pub meeting_image_url: String,
    pub post_name: String,
    pub place_name: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
    pub plan_at: String,
    pub member_count: i32,
    pub weather_address: String,
    pub weather_icon_url: String,
    pub temperature: f32,
    pub is_participant: bool,
    pub review_images: Vec<ReviewImage>,
    /// `plan_at` lies after the clock reading the item was built with.
    pub is_upcoming: bool,
}

impl PlanItem {
    pub fn from_plan(plan: &Plan, now: Timestamp) -> Self {
        Self {
            post_id: plan.plan_id.clone(),
            comment_check_id: plan.plan_id.clone(),
            user_id: plan.user_id.clone(),
            meeting_id: plan.meeting_id.clone(),
            meeting_name: plan.meeting_name.clone(),
            meeting_image_url: plan.meeting_image_url.clone(),
            post_name: plan.plan_name.clone(),
            place_name: plan.place_name.clone(),
            address: plan.address.clone(),
            latitude: plan.latitude,
            longitude: plan.longitude,
            plan_at: plan.plan_time.clone(),
            member_count: plan.member_count,
            weather_address: plan.weather_address.clone(),
            weather_icon_url: plan.weather_icon_url.clone(),
            temperature: plan.temperature,
            is_participant: plan.is_participant,
            review_images: Vec::new(),
            is_upcoming: is_after(&plan.plan_time, now),
        }
    }

    /// Reviews carry no weather snapshot and are always shown as joined.
    pub fn from_review(review: &Review, now: Timestamp) -> Self {
        Self {
            post_id: review.review_id.clone(),
            comment_check_id: review.post_id.clone(),
            user_id: review.user_id.clone(),
            meeting_id: review.meeting_id.clone(),
            meeting_name: review.meeting_name.clone(),
            meeting_image_url: review.meeting_image_url.clone(),
            post_name: review.review_name.clone(),
            place_name: review.place_name.clone(),
            address: review.address.clone(),
            latitude: review.latitude,
            longitude: review.longitude,
            plan_at: review.review_at.clone(),
            member_count: review.member_count,
            weather_address: String::new(),
            weather_icon_url: String::new(),
            temperature: 0.0,
            is_participant: true,
            review_images: review.images.clone(),
            is_upcoming: is_after(&review.review_at, now),
        }
    }

    pub fn kind(&self) -> PostKind {
        if self.is_upcoming {
            PostKind::Plan
        } else {
            PostKind::Review
        }
    }

    /// Re-evaluate `is_upcoming` against a newer clock reading.
    pub fn refreshed(mut self, now: Timestamp) -> Self {
        self.is_upcoming = is_after(&self.plan_at, now);
        self
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;

    fn now() -> Timestamp {
        // 2024-05-01 12:00 at UTC+9
        Utc.with_ymd_and_hms(2024, 5, 1, 3, 0, 0).unwrap()
    }

    fn plan(at: &str) -> Plan {
        Plan {
            plan_id: "p1".into(),
            user_id: "u1".into(),
            meeting_id: "m1".into(),
            plan_name: "Dinner".into(),
            plan_time: at.into(),
            member_count: 3,
            temperature: 18.0,
            is_participant: false,
            ..Default::default()
        }
    }

    #[test]
    fn plan_ids_feed_both_post_and_comment_ids() {
        let item = PlanItem::from_plan(&plan("2024-05-02 19:00:00"), now());

        assert_eq!(item.post_id, "p1");
        assert_eq!(item.comment_check_id, "p1");
        assert_eq!(item.post_name, "Dinner");
        assert_eq!(item.member_count, 3);
        assert!(item.is_upcoming);
        assert_eq!(item.kind(), PostKind::Plan);
    }

    #[test]
    fn past_plan_is_treated_as_a_review() {
        let item = PlanItem::from_plan(&plan("2024-04-30 19:00:00"), now());
        assert!(!item.is_upcoming);
        assert_eq!(item.kind(), PostKind::Review);
    }

    #[test]
    fn unparseable_time_is_not_upcoming() {
        let item = PlanItem::from_plan(&plan("someday"), now());
        assert_eq!(item.kind(), PostKind::Review);
    }

    #[test]
    fn review_comments_hang_off_the_plan() {
        let review = Review {
            review_id: "r9".into(),
            post_id: "p1".into(),
            review_name: "Dinner recap".into(),
            review_at: "2024-04-30 19:00:00".into(),
            images: vec![ReviewImage {
                image_id: "i1".into(),
                image_url: "https://img/1.png".into(),
            }],
            ..Default::default()
        };
        let item = PlanItem::from_review(&review, now());

        assert_eq!(item.post_id, "r9");
        assert_eq!(item.comment_check_id, "p1");
        assert_eq!(item.review_images.len(), 1);
        assert_eq!(item.kind(), PostKind::Review);
    }

    #[test]
    fn refreshed_flips_once_the_time_passes() {
        let item = PlanItem::from_plan(&plan("2024-05-01 12:30:00"), now());
        assert!(item.is_upcoming);

        let later = now() + chrono::Duration::hours(1);
        assert!(!item.refreshed(later).is_upcoming);
    }
}
