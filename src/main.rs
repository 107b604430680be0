//! Career Bridge - Applicant dashboard for RPL applications.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use career_bridge as app;
use eframe::egui;

use app::AppError;
use app::config::{AppConfig, ConfigLoadResult, UiConfig};
use app::ui::App;

/// Applicant dashboard for document upload, payment, and application tracking.
#[derive(Parser)]
#[command(name = "career-bridge")]
struct Cli {
    /// Use config.toml from current directory (dev mode)
    #[arg(long)]
    dev: bool,

    /// Load config from this path instead of the default location
    #[arg(long, value_name = "PATH", conflicts_with = "dev")]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    tracing::info!("Career Bridge starting...");

    let config_path = match cli.config {
        Some(path) => path,
        None if cli.dev => {
            tracing::info!("Dev mode: loading config from current directory");
            PathBuf::from("config.toml")
        }
        None => AppConfig::default_path(),
    };
    tracing::info!("Config path: {:?}", config_path);

    let (config, initial_error) = match AppConfig::try_load(&config_path) {
        ConfigLoadResult::Loaded(config) => {
            tracing::info!("Config loaded successfully");
            (config, None)
        }
        ConfigLoadResult::Missing => {
            tracing::info!("Config missing, using defaults");
            (AppConfig::default(), None)
        }
        ConfigLoadResult::Invalid(e) => {
            let err = AppError::from(e);
            tracing::warn!("{}", err);
            (AppConfig::default(), Some(err.to_string()))
        }
    };

    // Runtime for delayed UI tasks
    let rt = tokio::runtime::Runtime::new().context("Failed to create tokio runtime")?;

    run_app(config, rt, initial_error).context("Failed to run application")
}

fn run_app(config: AppConfig, rt: tokio::runtime::Runtime, initial_error: Option<String>) -> app::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Career Bridge")
            .with_inner_size([config.ui.window_width, config.ui.window_height])
            .with_min_inner_size([UiConfig::MIN_WIDTH, UiConfig::MIN_HEIGHT]),
        ..Default::default()
    };
    let dark_mode = config.ui.dark_mode;

    eframe::run_native(
        "Career Bridge",
        options,
        Box::new(move |cc| {
            let mut fonts = egui::FontDefinitions::default();
            egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
            cc.egui_ctx.set_fonts(fonts);
            cc.egui_ctx.set_visuals(if dark_mode {
                egui::Visuals::dark()
            } else {
                egui::Visuals::light()
            });
            Ok(Box::new(App::new(config, rt, initial_error)))
        }),
    )?;

    Ok(())
}
