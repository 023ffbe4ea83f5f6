//! Repositories and use cases over the MoimTable REST API.
//!
//! Every operation is a single async call returning
//! [`DataResult`](moim_core::DataResult). There is no caching and no retry:
//! each call goes to the network, and each failure is logged once and
//! classified into a [`DataError`](moim_core::DataError) on the way out.

mod catching;
pub mod repository;
pub mod usecase;

pub use repository::{
    CommentRepository, CommentRepositoryImpl, MeetingRepository, MeetingRepositoryImpl,
    ParticipantRepository, ParticipantRepositoryImpl, PlanRepository, PlanRepositoryImpl,
    ReviewRepository, ReviewRepositoryImpl, UserRepository, UserRepositoryImpl,
};
#[cfg(any(test, feature = "testing"))]
pub use repository::{
    MockCommentRepository, MockMeetingRepository, MockParticipantRepository, MockPlanRepository,
    MockReviewRepository, MockUserRepository,
};
pub use usecase::GetPlanItemUseCase;
