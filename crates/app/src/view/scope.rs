use std::future::Future;

use tokio::sync::watch;
use tokio_util::sync::CancellationToken;
use tokio_util::task::TaskTracker;

/// Lifetime of one screen's background work.
///
/// Tasks spawned through the scope stop at their next await point once the
/// scope is cancelled, which happens at the latest when it is dropped.
pub struct ViewScope {
    cancel: CancellationToken,
    tasks: TaskTracker,
}

impl ViewScope {
    pub fn new() -> Self {
        Self {
            cancel: CancellationToken::new(),
            tasks: TaskTracker::new(),
        }
    }

    /// A token cancelled together with this scope.
    pub fn child_token(&self) -> CancellationToken {
        self.cancel.child_token()
    }

    pub fn spawn<F>(&self, task: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let cancel = self.cancel.clone();
        self.tasks.spawn(async move {
            tokio::select! {
                _ = cancel.cancelled() => {}
                _ = task => {}
            }
        });
    }

    /// Feed the current value of `rx` and every later change into `apply`
    /// until the sender goes away or the scope is cancelled.
    pub fn follow<T, F>(&self, mut rx: watch::Receiver<T>, mut apply: F)
    where
        T: Clone + Send + Sync + 'static,
        F: FnMut(T) + Send + 'static,
    {
        self.spawn(async move {
            loop {
                let value = rx.borrow_and_update().clone();
                apply(value);
                if rx.changed().await.is_err() {
                    break;
                }
            }
        });
    }

    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }

    /// Tasks spawned through this scope that have not finished yet.
    pub fn active_tasks(&self) -> usize {
        self.tasks.len()
    }

    /// Cancel and wait for every task to finish.
    pub async fn shutdown(&self) {
        self.cancel.cancel();
        self.tasks.close();
        self.tasks.wait().await;
    }
}

impl Default for ViewScope {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for ViewScope {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
