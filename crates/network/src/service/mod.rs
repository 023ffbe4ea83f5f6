//! Endpoint descriptors, one service per API resource.
//!
//! Services only know paths and bodies. They return transport DTOs and leave
//! mapping and error classification to the data layer.

mod comment;
mod meeting;
mod participant;
mod plan;
mod review;
mod user;

pub use comment::CommentApi;
pub use meeting::MeetingApi;
pub use participant::ParticipantApi;
pub use plan::PlanApi;
pub use review::ReviewApi;
pub use user::UserApi;
