//! One repository per API resource: a trait for the state holders to depend
//! on and an implementation over the matching network service.

mod comment;
mod meeting;
mod participant;
mod plan;
mod review;
mod user;

pub use comment::{CommentRepository, CommentRepositoryImpl};
pub use meeting::{MeetingRepository, MeetingRepositoryImpl};
pub use participant::{ParticipantRepository, ParticipantRepositoryImpl};
pub use plan::{PlanRepository, PlanRepositoryImpl};
pub use review::{ReviewRepository, ReviewRepositoryImpl};
pub use user::{UserRepository, UserRepositoryImpl};

#[cfg(any(test, feature = "testing"))]
pub use comment::MockCommentRepository;
#[cfg(any(test, feature = "testing"))]
pub use meeting::MockMeetingRepository;
#[cfg(any(test, feature = "testing"))]
pub use participant::MockParticipantRepository;
#[cfg(any(test, feature = "testing"))]
pub use plan::MockPlanRepository;
#[cfg(any(test, feature = "testing"))]
pub use review::MockReviewRepository;
#[cfg(any(test, feature = "testing"))]
pub use user::MockUserRepository;
