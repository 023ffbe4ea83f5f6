use std::future::Future;
use std::sync::{Arc, Mutex};

use futures::future::BoxFuture;
use futures::FutureExt;
use moim_core::{DataResult, LoadResult};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

type Fetch<T> = Arc<dyn Fn() -> BoxFuture<'static, DataResult<T>> + Send + Sync>;

struct ActiveFetch {
    cancel: CancellationToken,
    handle: JoinHandle<()>,
}

/// A fetch that can be re-run on demand, publishing its progress as a
/// [`LoadResult`].
///
/// At most one fetch is active at a time: [`restart`](Self::restart) cancels
/// the running one before it starts the next, and a cancelled fetch never
/// publishes its result.
pub struct Restartable<T> {
    fetch: Fetch<T>,
    sender: Arc<watch::Sender<LoadResult<T>>>,
    parent: CancellationToken,
    active: Mutex<Option<ActiveFetch>>,
}

impl<T> Restartable<T>
where
    T: Clone + Send + Sync + 'static,
{
    /// Create an idle producer in `Loading`. Nothing runs until the first
    /// [`restart`](Self::restart).
    ///
    /// Every fetch is cancelled together with `parent`.
    pub fn new<F, Fut>(parent: CancellationToken, fetch: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = DataResult<T>> + Send + 'static,
    {
        Self {
            fetch: Arc::new(move || fetch().boxed()),
            sender: Arc::new(watch::Sender::new(LoadResult::Loading)),
            parent,
            active: Mutex::new(None),
        }
    }

    pub fn watch(&self) -> watch::Receiver<LoadResult<T>> {
        self.sender.subscribe()
    }

    pub fn current(&self) -> LoadResult<T> {
        self.sender.borrow().clone()
    }

    /// Cancel the running fetch, if any, publish `Loading` and start over.
    ///
    /// Returns `true` when a running fetch was cancelled.
    pub fn restart(&self) -> bool {
        let mut active = self
            .active
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        let cancelled = match active.take() {
            Some(previous) if !previous.handle.is_finished() => {
                previous.cancel.cancel();
                true
            }
            _ => false,
        };

        let cancel = self.parent.child_token();
        self.sender.send_replace(LoadResult::Loading);

        let call = (self.fetch)();
        let sender = Arc::clone(&self.sender);
        let token = cancel.clone();
        let handle = tokio::spawn(async move {
            tokio::select! {
                _ = token.cancelled() => {
                    tracing::debug!("Fetch cancelled");
                }
                result = call => {
                    // A restart may cancel us after the call finished but
                    // before the result lands.
                    sender.send_if_modified(|state| {
                        if token.is_cancelled() {
                            return false;
                        }
                        *state = LoadResult::from(result);
                        true
                    });
                }
            }
        });

        *active = Some(ActiveFetch { cancel, handle });
        cancelled
    }

    /// Cancel the running fetch without starting another.
    pub fn cancel(&self) {
        if let Some(active) = self
            .active
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .take()
        {
            active.cancel.cancel();
        }
    }
}

impl<T> Drop for Restartable<T> {
    fn drop(&mut self) {
        if let Ok(mut active) = self.active.lock() {
            if let Some(active) = active.take() {
                active.cancel.cancel();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    use moim_core::DataError;

    use super::*;

    struct CountOnDrop(Arc<AtomicUsize>);

    impl Drop for CountOnDrop {
        fn drop(&mut self) {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }

    async fn settled<T: Clone>(rx: &mut watch::Receiver<LoadResult<T>>) -> LoadResult<T> {
        tokio::time::timeout(Duration::from_secs(1), rx.wait_for(|s| !s.is_loading()))
            .await
            .expect("fetch should settle")
            .expect("producer alive")
            .clone()
    }

    #[tokio::test]
    async fn publishes_loading_then_the_result() {
        let producer = Restartable::new(CancellationToken::new(), || async { Ok(7) });
        assert!(producer.current().is_loading());

        producer.restart();
        let mut rx = producer.watch();
        assert_eq!(settled(&mut rx).await, LoadResult::Success(7));
    }

    #[tokio::test]
    async fn restart_cancels_exactly_the_running_fetch() {
        let started = Arc::new(AtomicUsize::new(0));
        let dropped = Arc::new(AtomicUsize::new(0));
        let (s, d) = (started.clone(), dropped.clone());
        let producer = Restartable::new(CancellationToken::new(), move || {
            let n = s.fetch_add(1, Ordering::SeqCst);
            let guard = CountOnDrop(d.clone());
            async move {
                let _guard = guard;
                if n == 0 {
                    std::future::pending::<()>().await;
                }
                Ok(n)
            }
        });

        assert!(!producer.restart());
        tokio::task::yield_now().await;
        assert!(producer.restart());

        let mut rx = producer.watch();
        assert_eq!(settled(&mut rx).await, LoadResult::Success(1));
        assert_eq!(started.load(Ordering::SeqCst), 2);

        // Both fetch futures are gone: the cancelled one and the finished one.
        tokio::time::timeout(Duration::from_secs(1), async {
            while dropped.load(Ordering::SeqCst) < 2 {
                tokio::task::yield_now().await;
            }
        })
        .await
        .expect("cancelled fetch should be dropped");
    }

    #[tokio::test]
    async fn failure_is_published_as_error() {
        let producer = Restartable::<i32>::new(CancellationToken::new(), || async {
            Err(DataError::Network("offline".into()))
        });
        producer.restart();
        let mut rx = producer.watch();
        assert_eq!(
            settled(&mut rx).await,
            LoadResult::Error(DataError::Network("offline".into()))
        );
    }

    #[tokio::test]
    async fn cancelled_parent_keeps_the_producer_loading() {
        let parent = CancellationToken::new();
        parent.cancel();
        let producer = Restartable::new(parent, || async { Ok(1) });
        producer.restart();

        tokio::time::sleep(Duration::from_millis(20)).await;
        assert!(producer.current().is_loading());
    }
}
