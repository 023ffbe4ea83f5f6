use std::future::Future;
use std::sync::Mutex;

use moim_core::{DataError, DataResult, LoadResult};
use tokio::sync::{mpsc, watch};

use crate::view::event::{toast_for, ToastMessage, UiEvent};
use crate::view::route::Route;

/// Owns one screen's state, its in-flight counter and its event channel.
///
/// The state is a [`LoadResult`] over the screen's content type. Only the
/// owning feature mutates it; renderers observe it through [`watch`].
///
/// [`watch`]: StateHolder::watch
pub struct StateHolder<T> {
    state: watch::Sender<LoadResult<T>>,
    in_flight: watch::Sender<usize>,
    events: mpsc::UnboundedSender<UiEvent>,
    receiver: Mutex<Option<mpsc::UnboundedReceiver<UiEvent>>>,
}

impl<T> StateHolder<T>
where
    T: Clone + Send + Sync + 'static,
{
    /// Start in `Loading`.
    pub fn new() -> Self {
        Self::with_state(LoadResult::Loading)
    }

    pub fn with_state(initial: LoadResult<T>) -> Self {
        let (events, receiver) = mpsc::unbounded_channel();
        Self {
            state: watch::Sender::new(initial),
            in_flight: watch::Sender::new(0),
            events,
            receiver: Mutex::new(Some(receiver)),
        }
    }

    pub fn state(&self) -> LoadResult<T> {
        self.state.borrow().clone()
    }

    pub fn watch(&self) -> watch::Receiver<LoadResult<T>> {
        self.state.subscribe()
    }

    pub fn set_state(&self, state: LoadResult<T>) {
        self.state.send_replace(state);
    }

    /// Snapshot of the content, if the screen is in `Success`.
    pub fn success(&self) -> Option<T> {
        self.state.borrow().success().cloned()
    }

    /// Apply `f` to the current content. No-op unless in `Success`.
    ///
    /// Returns whether the update was applied.
    pub fn update_success(&self, f: impl FnOnce(&mut T)) -> bool {
        self.state.send_if_modified(|state| match state.success_mut() {
            Some(content) => {
                f(content);
                true
            }
            None => false,
        })
    }

    pub fn is_in_flight(&self) -> bool {
        *self.in_flight.borrow() > 0
    }

    pub fn watch_in_flight(&self) -> watch::Receiver<usize> {
        self.in_flight.subscribe()
    }

    /// Await `call` with the in-flight flag raised.
    ///
    /// The flag drops back even if the call is cancelled mid-way.
    pub async fn in_flight<F: Future>(&self, call: F) -> F::Output {
        let _guard = InFlightGuard::raise(&self.in_flight);
        call.await
    }

    pub fn emit(&self, event: UiEvent) {
        // Ignore the SendError; it only means the screen stopped listening.
        let _ = self.events.send(event);
    }

    pub fn navigate(&self, route: Route) {
        self.emit(UiEvent::Navigate(route));
    }

    pub fn toast(&self, message: ToastMessage) {
        self.emit(UiEvent::ShowToast(message));
    }

    /// Report a failed secondary action as a single toast.
    pub fn toast_error(&self, err: &DataError) {
        self.toast(toast_for(err));
    }

    /// Run a secondary call with the in-flight flag raised.
    ///
    /// A failure is logged, shown as exactly one toast and swallowed; the
    /// current state is left as it was.
    pub async fn attempt<R>(
        &self,
        action: &'static str,
        call: impl Future<Output = DataResult<R>>,
    ) -> Option<R> {
        match self.in_flight(call).await {
            Ok(value) => Some(value),
            Err(err) => {
                tracing::warn!(action, error = %err, "Screen action failed");
                self.toast_error(&err);
                None
            }
        }
    }

    /// Hand out the event receiver. Only the first caller gets it.
    pub fn take_events(&self) -> Option<mpsc::UnboundedReceiver<UiEvent>> {
        self.receiver
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .take()
    }
}

impl<T> Default for StateHolder<T>
where
    T: Clone + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

struct InFlightGuard<'a> {
    counter: &'a watch::Sender<usize>,
}

impl<'a> InFlightGuard<'a> {
    fn raise(counter: &'a watch::Sender<usize>) -> Self {
        counter.send_modify(|n| *n += 1);
        Self { counter }
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.counter.send_modify(|n| *n = n.saturating_sub(1));
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn updates_only_apply_in_success() {
        let holder = StateHolder::<i32>::new();
        assert!(!holder.update_success(|v| *v += 1));
        assert!(holder.state().is_loading());

        holder.set_state(LoadResult::Success(1));
        assert!(holder.update_success(|v| *v += 1));
        assert_eq!(holder.success(), Some(2));

        holder.set_state(LoadResult::Error(DataError::Network("x".into())));
        assert!(!holder.update_success(|v| *v += 1));
    }

    #[tokio::test]
    async fn in_flight_is_raised_only_during_the_call() {
        let holder = StateHolder::<i32>::new();
        let observed = holder
            .in_flight(async { holder.is_in_flight() })
            .await;
        assert!(observed);
        assert!(!holder.is_in_flight());
    }

    #[tokio::test]
    async fn cancelled_call_still_clears_in_flight() {
        let holder = StateHolder::<i32>::new();
        let pending = holder.in_flight(std::future::pending::<()>());
        let timed_out =
            tokio::time::timeout(std::time::Duration::from_millis(10), pending).await;
        assert!(timed_out.is_err());
        assert!(!holder.is_in_flight());
    }

    #[tokio::test]
    async fn failed_attempt_toasts_once_and_keeps_state() {
        let holder = StateHolder::with_state(LoadResult::Success(5));
        let mut events = holder.take_events().unwrap();

        let result = holder
            .attempt("delete", async { Err::<(), _>(DataError::Network("offline".into())) })
            .await;

        assert_eq!(result, None);
        assert_eq!(holder.success(), Some(5));
        assert!(!holder.is_in_flight());
        assert_matches!(
            events.try_recv(),
            Ok(UiEvent::ShowToast(ToastMessage::NetworkError))
        );
        assert!(events.try_recv().is_err());
    }

    #[tokio::test]
    async fn events_are_delivered_to_the_single_taker() {
        let holder = StateHolder::<i32>::new();
        let mut events = holder.take_events().unwrap();
        assert!(holder.take_events().is_none());

        holder.navigate(Route::Back);
        holder.toast_error(&DataError::Network("offline".into()));

        assert_eq!(events.recv().await, Some(UiEvent::Navigate(Route::Back)));
        assert_matches!(
            events.recv().await,
            Some(UiEvent::ShowToast(ToastMessage::NetworkError))
        );
    }
}
