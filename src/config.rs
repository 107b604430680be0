//! Configuration management module.

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Configuration load result.
#[derive(Debug)]
pub enum ConfigLoadResult {
    /// Config loaded successfully.
    Loaded(AppConfig),
    /// Config file missing (defaults apply).
    Missing,
    /// Config file exists but invalid.
    Invalid(ConfigError),
}

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Read(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {0}")]
    Validation(String),
}

/// Main application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub applicant: ApplicantConfig,
    pub intake: IntakeConfig,
    pub ui: UiConfig,
}

/// Signed-in applicant shown in the header, profile and account panels.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApplicantConfig {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub account_id: String,
    pub member_since: String,
}

/// Intake form behaviour.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IntakeConfig {
    /// Delay before a submitted form is cleared, in milliseconds (default: 2000).
    pub clear_delay_ms: u64,
}

/// UI preferences.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub dark_mode: bool,
    pub window_width: f32,
    pub window_height: f32,
}

impl AppConfig {
    /// Get the config file path.
    ///
    /// Uses the per-user config directory, falling back to the directory of the executable.
    pub fn default_path() -> PathBuf {
        if let Some(dirs) = ProjectDirs::from("com", "CareerBridge", "career-bridge") {
            return dirs.config_dir().join("config.toml");
        }

        std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(|p| p.to_path_buf()))
            .unwrap_or_else(|| PathBuf::from("."))
            .join("config.toml")
    }

    /// Attempt to load config with detailed result.
    pub fn try_load(path: &Path) -> ConfigLoadResult {
        if !path.exists() {
            return ConfigLoadResult::Missing;
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match Self::parse(&content) {
                Ok(config) => ConfigLoadResult::Loaded(config),
                Err(e) => ConfigLoadResult::Invalid(e),
            },
            Err(e) => ConfigLoadResult::Invalid(ConfigError::Read(e)),
        }
    }

    /// Parse and validate config from TOML text.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config = toml::from_str::<AppConfig>(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.applicant.first_name.trim().is_empty() {
            return Err(ConfigError::Validation("Applicant first name cannot be empty".to_string()));
        }
        if !self.applicant.email.contains('@') {
            return Err(ConfigError::Validation(
                "Applicant email must contain '@'".to_string(),
            ));
        }
        if self.intake.clear_delay_ms < 100 {
            return Err(ConfigError::Validation(
                "Intake clear delay must be at least 100 ms".to_string(),
            ));
        }
        if self.intake.clear_delay_ms > 60_000 {
            return Err(ConfigError::Validation(
                "Intake clear delay cannot exceed 60000 ms".to_string(),
            ));
        }
        if self.ui.window_width < UiConfig::MIN_WIDTH || self.ui.window_height < UiConfig::MIN_HEIGHT {
            return Err(ConfigError::Validation(format!(
                "Window size must be at least {}x{}",
                UiConfig::MIN_WIDTH,
                UiConfig::MIN_HEIGHT
            )));
        }
        Ok(())
    }
}

impl IntakeConfig {
    /// Clear delay as a duration.
    pub fn clear_delay(&self) -> Duration {
        Duration::from_millis(self.clear_delay_ms)
    }
}

impl UiConfig {
    pub const MIN_WIDTH: f32 = 900.0;
    pub const MIN_HEIGHT: f32 = 600.0;
}

impl Default for ApplicantConfig {
    fn default() -> Self {
        Self {
            first_name: "Sarah".to_string(),
            last_name: "Johnson".to_string(),
            email: "sarah.johnson@email.com".to_string(),
            phone: "+1 (555) 123-4567".to_string(),
            account_id: "CB-2024-001234".to_string(),
            member_since: "January 2024".to_string(),
        }
    }
}

impl Default for IntakeConfig {
    fn default() -> Self {
        Self { clear_delay_ms: 2000 }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            dark_mode: false,
            window_width: 1200.0,
            window_height: 800.0,
        }
    }
}
