//! Headless screen logic for the MoimTable client.
//!
//! [`AppContainer`] wires configuration, repositories and the plan change bus.
//! Each module under [`feature`] opens one screen as a
//! [`Screen`](view::Screen): a renderer watches its state, takes its event
//! receiver once and sends it actions.

pub mod config;
pub mod container;
pub mod feature;
pub mod view;

pub use config::AppConfig;
pub use container::{AppContainer, Repositories};
