//! Dashboard state model: views, actions, reducer, and overlays.

pub mod overlay;
pub mod store;
pub mod view;

#[cfg(test)]
mod tests;

pub use overlay::{OverlayDispatcher, OverlayId};
pub use store::{Action, AppState, Effect, Store, reduce};
pub use view::{QuickAction, UnknownView, UserMenuItem, View};
