//! Cross-screen propagation of plan mutations.
//!
//! - [`PlanItemBus`]: in-process publish/subscribe hub backed by
//!   `tokio::sync::broadcast`, shared by every screen for the lifetime of
//!   the process.
//! - [`PlanChange`]: the envelope a screen publishes after it changed a
//!   post on the server.
//! - [`policy::react`]: the single place that decides whether a screen
//!   patches its copy, drops it, or refetches.

pub mod bus;
pub mod policy;

pub use bus::{PlanChange, PlanChangeKind, PlanItemBus, PlanSubscription, ScreenId};
pub use policy::{react, PlanReaction, PlanScope};
