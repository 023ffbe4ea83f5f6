//! Wire DTOs and domain models for MoimTable.
//!
//! Each module pairs the `*Response` type that mirrors the backend JSON with
//! the immutable domain record the rest of the app works with, plus a total
//! `From` mapping between them. Optional wire fields carry serde defaults so
//! a response missing them still decodes.

pub mod comment;
pub mod container;
pub mod meeting;
pub mod participant;
pub mod place;
pub mod plan;
pub mod plan_item;
pub mod review;
pub mod user;

pub use comment::{Comment, CommentResponse};
pub use container::{
    MeetingPlanContainer, MeetingPlanContainerResponse, PlanReviewContainer,
    PlanReviewContainerResponse,
};
pub use meeting::{Meeting, MeetingResponse};
pub use participant::{
    Participant, ParticipantContainer, ParticipantContainerResponse, ParticipantResponse,
};
pub use place::{Place, PlaceResponse};
pub use plan::{Plan, PlanDraft, PlanResponse};
pub use plan_item::{PlanItem, PostKind};
pub use review::{Review, ReviewImage, ReviewImageResponse, ReviewResponse};
pub use user::{ProfileImageChange, User, UserResponse};

/// Default head count for meetings and plans: the creator.
pub(crate) fn default_member_count() -> i32 {
    1
}
