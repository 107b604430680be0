//! Error types and handling.

use thiserror::Error;

use crate::config::ConfigError;

/// Application-wide error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration could not be loaded or was rejected
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Native window or rendering backend failed
    #[error("UI error: {0}")]
    Ui(String),
}

/// Result type alias for AppError
pub type Result<T> = std::result::Result<T, AppError>;

impl From<eframe::Error> for AppError {
    fn from(err: eframe::Error) -> Self {
        Self::Ui(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_message() {
        let err: AppError = ConfigError::Validation("Applicant name cannot be empty".to_string()).into();
        assert_eq!(
            err.to_string(),
            "Config error: Validation failed: Applicant name cannot be empty"
        );
    }

    #[test]
    fn test_eframe_error_maps_to_ui() {
        let err: AppError = eframe::Error::AppCreation("no display".into()).into();
        assert!(matches!(err, AppError::Ui(ref m) if m.contains("no display")));
    }
}
