//! Explicit constructor wiring for the whole client core.

use std::sync::Arc;

use moim_core::{Clock, SystemClock};
use moim_data::{
    CommentRepository, CommentRepositoryImpl, GetPlanItemUseCase, MeetingRepository,
    MeetingRepositoryImpl, ParticipantRepository, ParticipantRepositoryImpl, PlanRepository,
    PlanRepositoryImpl, ReviewRepository, ReviewRepositoryImpl, UserRepository,
    UserRepositoryImpl,
};
use moim_events::PlanItemBus;
use moim_network::{ApiClient, MemoryTokenStore, NetworkError, Services, TokenStore};

use crate::config::AppConfig;

/// Every repository, as the trait objects screens depend on.
#[derive(Clone)]
pub struct Repositories {
    pub user: Arc<dyn UserRepository>,
    pub meeting: Arc<dyn MeetingRepository>,
    pub plan: Arc<dyn PlanRepository>,
    pub review: Arc<dyn ReviewRepository>,
    pub comment: Arc<dyn CommentRepository>,
    pub participant: Arc<dyn ParticipantRepository>,
}

impl Repositories {
    pub fn from_services(services: Services) -> Self {
        Self {
            user: Arc::new(UserRepositoryImpl::new(services.user)),
            meeting: Arc::new(MeetingRepositoryImpl::new(services.meeting)),
            plan: Arc::new(PlanRepositoryImpl::new(services.plan)),
            review: Arc::new(ReviewRepositoryImpl::new(services.review)),
            comment: Arc::new(CommentRepositoryImpl::new(services.comment)),
            participant: Arc::new(ParticipantRepositoryImpl::new(services.participant)),
        }
    }
}

/// Shared dependencies handed to every screen.
///
/// Cheap to clone; everything inside is behind an `Arc` or is plain data.
#[derive(Clone)]
pub struct AppContainer {
    pub config: AppConfig,
    pub repositories: Repositories,
    /// Process-wide plan change bus.
    pub plan_bus: Arc<PlanItemBus>,
    pub clock: Arc<dyn Clock>,
    pub tokens: Arc<dyn TokenStore>,
}

impl AppContainer {
    /// Wire the HTTP client, services and repositories from `config`.
    pub fn new(config: AppConfig) -> Result<Self, NetworkError> {
        let tokens: Arc<dyn TokenStore> =
            Arc::new(MemoryTokenStore::new(config.access_token.clone()));
        let client = ApiClient::new(&config.network, Arc::clone(&tokens))?;
        let repositories = Repositories::from_services(Services::new(client));

        tracing::info!(base_url = %config.network.base_url, "Client core wired");

        Ok(Self {
            config,
            repositories,
            plan_bus: Arc::new(PlanItemBus::default()),
            clock: Arc::new(SystemClock),
            tokens,
        })
    }

    /// Wire screens against caller-supplied repositories and clock.
    pub fn with_repositories(
        config: AppConfig,
        repositories: Repositories,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            config,
            repositories,
            plan_bus: Arc::new(PlanItemBus::default()),
            clock,
            tokens: Arc::new(MemoryTokenStore::default()),
        }
    }

    pub fn get_plan_item(&self) -> GetPlanItemUseCase {
        GetPlanItemUseCase::new(
            Arc::clone(&self.repositories.plan),
            Arc::clone(&self.repositories.review),
            Arc::clone(&self.clock),
        )
    }
}
