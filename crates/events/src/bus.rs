//! In-process plan change bus backed by a `tokio::sync::broadcast` channel.
//!
//! [`PlanItemBus`] is meant to be shared via `Arc<PlanItemBus>`. Screens
//! subscribe with their own [`ScreenId`] and never see their own changes.

use std::fmt;

use moim_core::types::Timestamp;
use moim_model::PlanItem;
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;
use tokio::sync::broadcast::error::RecvError;
use uuid::Uuid;

// ---------------------------------------------------------------------------
// ScreenId
// ---------------------------------------------------------------------------

/// Identity of one live screen instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScreenId(Uuid);

impl ScreenId {
    /// Origin of changes the bus synthesizes itself.
    pub const BUS: ScreenId = ScreenId(Uuid::nil());

    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }
}

impl Default for ScreenId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ScreenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

// ---------------------------------------------------------------------------
// PlanChange
// ---------------------------------------------------------------------------

/// What happened to a post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PlanChangeKind {
    /// Content of the post changed (name, time, place).
    Edited(PlanItem),
    /// The current user applied to or cancelled the post.
    ParticipationChanged(PlanItem),
    Deleted { post_id: String, meeting_id: String },
    Created { meeting_id: String },
    /// Changes were lost; anything derived from plans may be stale.
    Invalidated,
}

/// A change to a post, published by the screen that made it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanChange {
    pub origin: ScreenId,
    pub at: Timestamp,
    pub kind: PlanChangeKind,
}

impl PlanChange {
    pub fn new(origin: ScreenId, kind: PlanChangeKind) -> Self {
        Self {
            origin,
            at: chrono::Utc::now(),
            kind,
        }
    }

    fn invalidated() -> Self {
        Self::new(ScreenId::BUS, PlanChangeKind::Invalidated)
    }
}

// ---------------------------------------------------------------------------
// PlanItemBus
// ---------------------------------------------------------------------------

/// Default buffer capacity for the broadcast channel.
const DEFAULT_CAPACITY: usize = 256;

/// Fan-out bus for [`PlanChange`]s.
///
/// Delivery is at most once per subscriber and in publish order per sender.
/// A subscriber only sees changes published after it subscribed.
pub struct PlanItemBus {
    sender: broadcast::Sender<PlanChange>,
}

impl PlanItemBus {
    /// Create a bus with a specific channel capacity.
    ///
    /// When the buffer is full the oldest unread changes are dropped and the
    /// slow subscriber gets a single [`PlanChangeKind::Invalidated`] instead.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Publish a change to all current subscribers.
    pub fn publish(&self, change: PlanChange) {
        tracing::debug!(
            origin = %change.origin,
            kind = change_name(&change.kind),
            "Publishing plan change"
        );
        // Ignore the SendError; it only means there are zero receivers.
        let _ = self.sender.send(change);
    }

    /// Subscribe on behalf of `owner`, whose own changes are filtered out.
    pub fn subscribe(&self, owner: ScreenId) -> PlanSubscription {
        PlanSubscription {
            owner,
            receiver: self.sender.subscribe(),
        }
    }
}

impl Default for PlanItemBus {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

/// One screen's view of the bus.
pub struct PlanSubscription {
    owner: ScreenId,
    receiver: broadcast::Receiver<PlanChange>,
}

impl PlanSubscription {
    /// Wait for the next change made by another screen.
    ///
    /// Returns `None` once the bus has been dropped.
    pub async fn recv(&mut self) -> Option<PlanChange> {
        loop {
            match self.receiver.recv().await {
                Ok(change) if change.origin == self.owner => continue,
                Ok(change) => return Some(change),
                Err(RecvError::Lagged(skipped)) => {
                    tracing::warn!(
                        screen = %self.owner,
                        skipped,
                        "Plan subscriber lagged, invalidating"
                    );
                    return Some(PlanChange::invalidated());
                }
                Err(RecvError::Closed) => return None,
            }
        }
    }
}

fn change_name(kind: &PlanChangeKind) -> &'static str {
    match kind {
        PlanChangeKind::Edited(_) => "edited",
        PlanChangeKind::ParticipationChanged(_) => "participation_changed",
        PlanChangeKind::Deleted { .. } => "deleted",
        PlanChangeKind::Created { .. } => "created",
        PlanChangeKind::Invalidated => "invalidated",
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn deleted(post_id: &str) -> PlanChangeKind {
        PlanChangeKind::Deleted {
            post_id: post_id.into(),
            meeting_id: "m1".into(),
        }
    }

    #[tokio::test]
    async fn other_screens_receive_the_change() {
        let bus = PlanItemBus::default();
        let (a, b, c) = (ScreenId::new(), ScreenId::new(), ScreenId::new());
        let mut rx_b = bus.subscribe(b);
        let mut rx_c = bus.subscribe(c);

        bus.publish(PlanChange::new(a, deleted("p1")));

        assert_eq!(rx_b.recv().await.unwrap().kind, deleted("p1"));
        assert_eq!(rx_c.recv().await.unwrap().origin, a);
    }

    #[tokio::test]
    async fn own_changes_are_skipped() {
        let bus = PlanItemBus::default();
        let (a, b) = (ScreenId::new(), ScreenId::new());
        let mut rx_a = bus.subscribe(a);

        bus.publish(PlanChange::new(a, deleted("own")));
        bus.publish(PlanChange::new(b, deleted("other")));

        assert_eq!(rx_a.recv().await.unwrap().kind, deleted("other"));
    }

    #[tokio::test]
    async fn changes_before_subscribing_are_not_replayed() {
        let bus = PlanItemBus::default();
        let (a, b) = (ScreenId::new(), ScreenId::new());

        bus.publish(PlanChange::new(a, deleted("early")));
        let mut rx_b = bus.subscribe(b);
        bus.publish(PlanChange::new(a, deleted("late")));

        assert_eq!(rx_b.recv().await.unwrap().kind, deleted("late"));
    }

    #[tokio::test]
    async fn order_per_sender_is_preserved() {
        let bus = PlanItemBus::default();
        let (a, b) = (ScreenId::new(), ScreenId::new());
        let mut rx_b = bus.subscribe(b);

        for id in ["p1", "p2", "p3"] {
            bus.publish(PlanChange::new(a, deleted(id)));
        }

        for id in ["p1", "p2", "p3"] {
            assert_eq!(rx_b.recv().await.unwrap().kind, deleted(id));
        }
    }

    #[tokio::test]
    async fn lagging_subscriber_gets_one_invalidation() {
        let bus = PlanItemBus::new(2);
        let (a, b) = (ScreenId::new(), ScreenId::new());
        let mut rx_b = bus.subscribe(b);

        for id in ["p1", "p2", "p3", "p4"] {
            bus.publish(PlanChange::new(a, deleted(id)));
        }

        let first = rx_b.recv().await.unwrap();
        assert_matches!(first.kind, PlanChangeKind::Invalidated);
        assert_eq!(first.origin, ScreenId::BUS);
        assert_eq!(rx_b.recv().await.unwrap().kind, deleted("p3"));
        assert_eq!(rx_b.recv().await.unwrap().kind, deleted("p4"));
    }

    #[tokio::test]
    async fn dropping_the_bus_ends_subscriptions() {
        let bus = PlanItemBus::default();
        let mut rx = bus.subscribe(ScreenId::new());
        drop(bus);
        assert!(rx.recv().await.is_none());
    }

    #[test]
    fn publish_with_no_subscribers_does_not_panic() {
        let bus = PlanItemBus::default();
        bus.publish(PlanChange::new(ScreenId::new(), PlanChangeKind::Invalidated));
    }
}
