//! Screen runtime shared by every feature.
//!
//! A screen is a [`Feature`] (its state, actions and repositories) wrapped in
//! a [`Screen`] handle that owns the screen's [`ViewScope`]. State lives in a
//! [`StateHolder`]; primary content comes from [`Restartable`] producers;
//! one-shot navigation and toasts travel as [`UiEvent`]s.

mod event;
mod restartable;
mod route;
mod scope;
mod screen;
mod state_holder;

pub use event::{toast_for, ToastMessage, UiEvent};
pub use restartable::Restartable;
pub use route::{ParticipantSource, Route};
pub use scope::ViewScope;
pub use screen::{Feature, Screen};
pub use state_holder::StateHolder;
