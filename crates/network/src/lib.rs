//! HTTP access to the MoimTable REST API.
//!
//! [`ApiClient`] owns the connection pool, base URL and token store; the
//! services under [`service`] describe endpoints per resource. Failures come
//! back as [`NetworkError`] and convert into [`moim_core::DataError`].

pub mod client;
pub mod config;
pub mod error;
pub mod service;
pub mod token;

pub use client::ApiClient;
pub use config::{ConfigError, NetworkConfig};
pub use error::NetworkError;
pub use service::{CommentApi, MeetingApi, ParticipantApi, PlanApi, ReviewApi, UserApi};
pub use token::{MemoryTokenStore, TokenStore};

/// All resource services built over one shared client.
#[derive(Clone)]
pub struct Services {
    pub meeting: MeetingApi,
    pub plan: PlanApi,
    pub review: ReviewApi,
    pub comment: CommentApi,
    pub participant: ParticipantApi,
    pub user: UserApi,
}

impl Services {
    pub fn new(client: ApiClient) -> Self {
        Self {
            meeting: MeetingApi::new(client.clone()),
            plan: PlanApi::new(client.clone()),
            review: ReviewApi::new(client.clone()),
            comment: CommentApi::new(client.clone()),
            participant: ParticipantApi::new(client.clone()),
            user: UserApi::new(client),
        }
    }
}
