pub mod config;
pub mod error;
pub mod models;
pub mod scheduler;
pub mod state;
pub mod ui;

pub use error::{AppError, Result};
