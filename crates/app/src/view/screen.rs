use std::sync::Arc;

use async_trait::async_trait;
use moim_core::LoadResult;
use tokio::sync::{mpsc, watch};

use crate::view::event::UiEvent;
use crate::view::scope::ViewScope;
use crate::view::state_holder::StateHolder;

/// The behaviour behind one screen.
///
/// `handle` is a total match over `Action`; actions that make no sense in
/// the current state return without doing anything.
#[async_trait]
pub trait Feature: Send + Sync + 'static {
    type Content: Clone + Send + Sync + 'static;
    type Action: Send + 'static;

    fn holder(&self) -> &StateHolder<Self::Content>;

    async fn handle(self: Arc<Self>, action: Self::Action);
}

/// Handle to a live screen. Dropping it cancels the screen's work.
pub struct Screen<F: Feature> {
    feature: Arc<F>,
    scope: ViewScope,
}

impl<F: Feature> Screen<F> {
    pub(crate) fn new(feature: Arc<F>, scope: ViewScope) -> Self {
        Self { feature, scope }
    }

    pub fn state(&self) -> LoadResult<F::Content> {
        self.feature.holder().state()
    }

    pub fn watch(&self) -> watch::Receiver<LoadResult<F::Content>> {
        self.feature.holder().watch()
    }

    pub fn is_in_flight(&self) -> bool {
        self.feature.holder().is_in_flight()
    }

    pub fn watch_in_flight(&self) -> watch::Receiver<usize> {
        self.feature.holder().watch_in_flight()
    }

    /// The screen's event stream. Only the first caller gets it.
    pub fn take_events(&self) -> Option<mpsc::UnboundedReceiver<UiEvent>> {
        self.feature.holder().take_events()
    }

    /// Handle `action` and wait until it is done.
    pub async fn send(&self, action: F::Action) {
        Arc::clone(&self.feature).handle(action).await;
    }

    /// Handle `action` in the background, bound to the screen's lifetime.
    pub fn dispatch(&self, action: F::Action) {
        let feature = Arc::clone(&self.feature);
        self.scope.spawn(async move { feature.handle(action).await });
    }

    /// Cancel everything the screen is doing and wait for it to stop.
    pub async fn close(self) {
        self.scope.shutdown().await;
    }
}
