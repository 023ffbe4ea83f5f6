use serde::{Deserialize, Serialize};

use crate::default_member_count;

/// Review as returned by `review/*` endpoints.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ReviewResponse {
    #[serde(rename = "creatorId")]
    pub user_id: String,
    #[serde(rename = "meetId")]
    pub meeting_id: String,
    #[serde(rename = "meetName")]
    pub meeting_name: String,
    #[serde(rename = "meetImg")]
    pub meeting_image_url: String,
    #[serde(rename = "planId")]
    pub post_id: String,
    #[serde(rename = "reviewId")]
    pub review_id: String,
    #[serde(rename = "planName")]
    pub review_name: String,
    #[serde(rename = "planAddress")]
    pub address: String,
    #[serde(rename = "lat")]
    pub latitude: f64,
    #[serde(rename = "lot")]
    pub longitude: f64,
    #[serde(rename = "title")]
    pub place_name: String,
    #[serde(rename = "planMemberCount", default = "default_member_count")]
    pub member_count: i32,
    #[serde(rename = "images")]
    pub images: Vec<ReviewImageResponse>,
    #[serde(rename = "planTime")]
    pub review_at: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ReviewImageResponse {
    #[serde(rename = "imageId")]
    pub image_id: String,
    #[serde(rename = "reviewImg")]
    pub image_url: String,
}

/// Retrospective of a plan whose time has passed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub user_id: String,
    pub meeting_id: String,
    pub meeting_name: String,
    pub meeting_image_url: String,
    /// Id of the plan this review was written for.
    pub post_id: String,
    pub review_id: String,
    pub review_name: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
    pub place_name: String,
    pub member_count: i32,
    /// Attachments in upload order.
    pub images: Vec<ReviewImage>,
    pub review_at: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReviewImage {
    pub image_id: String,
    pub image_url: String,
}

impl From<ReviewImageResponse> for ReviewImage {
    fn from(response: ReviewImageResponse) -> Self {
        Self {
            image_id: response.image_id,
            image_url: response.image_url,
        }
    }
}

impl From<ReviewResponse> for Review {
    fn from(response: ReviewResponse) -> Self {
        Self {
            user_id: response.user_id,
            meeting_id: response.meeting_id,
            meeting_name: response.meeting_name,
            meeting_image_url: response.meeting_image_url,
            post_id: response.post_id,
            review_id: response.review_id,
            review_name: response.review_name,
            address: response.address,
            latitude: response.latitude,
            longitude: response.longitude,
            place_name: response.place_name,
            member_count: response.member_count,
            images: response.images.into_iter().map(ReviewImage::from).collect(),
            review_at: response.review_at,
        }
    }
}
