//! One module per screen.
//!
//! Each screen is opened with `open(&AppContainer, ..)`, which builds the
//! feature, starts its producers and listeners on a fresh
//! [`ViewScope`](crate::view::ViewScope) and returns the
//! [`Screen`](crate::view::Screen) handle.

pub mod calendar;
pub mod home;
pub mod meeting_detail;
pub mod participant_list;
pub mod plan_detail;
pub mod plan_write;
pub mod profile_update;

use moim_events::{PlanChange, PlanItemBus, ScreenId};

use crate::view::ViewScope;

/// Deliver plan changes from other screens to `on_change` for as long as
/// `scope` lives.
pub(crate) fn listen_plan_changes<F>(
    scope: &ViewScope,
    bus: &PlanItemBus,
    owner: ScreenId,
    mut on_change: F,
) where
    F: FnMut(PlanChange) + Send + 'static,
{
    let mut subscription = bus.subscribe(owner);
    scope.spawn(async move {
        while let Some(change) = subscription.recv().await {
            on_change(change);
        }
    });
}
