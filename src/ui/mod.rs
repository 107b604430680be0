//! GUI panels and the application shell.

pub mod app;
pub mod components;
pub mod dashboard;
pub mod documents_panel;
pub mod experience_panel;
pub mod help_panel;
pub mod notification_panel;
pub mod payment_panel;
pub mod profile_panel;
pub mod settings_panel;
pub mod track_panel;

pub use app::App;
