use anyhow::Result;
use tracing::info;

use shopmuse::config::{AppConfig, ConfigOverrides};
use shopmuse::logging::{init_logging, LoggingConfig};

#[tokio::main]
async fn main() -> Result<()> {
    init_logging_from_env()?;

    info!("Starting ShopMuse v{}", env!("CARGO_PKG_VERSION"));

    let mut config = AppConfig::load().await?;
    ConfigOverrides::apply(&mut config);
    config.validate()?;

    let catalog = shopmuse::catalog::seed()?;
    info!(products = catalog.len(), "catalog loaded");

    #[cfg(feature = "ui")]
    {
        use tracing::error;

        let native_options = eframe::NativeOptions {
            viewport: eframe::egui::ViewportBuilder::default()
                .with_inner_size([config.ui.window_width, config.ui.window_height]),
            ..Default::default()
        };

        let app = shopmuse::ui::ShopMuseApp::new(config, catalog);
        if let Err(e) = eframe::run_native("ShopMuse", native_options, Box::new(move |_cc| Box::new(app)))
        {
            error!("Failed to run GUI: {e}");
            return Err(anyhow::anyhow!("GUI execution failed: {e}"));
        }
    }

    #[cfg(not(feature = "ui"))]
    {
        let _ = catalog;
        tracing::warn!("UI feature not enabled, nothing to run");
    }

    info!("ShopMuse shutting down");
    Ok(())
}

fn init_logging_from_env() -> Result<()> {
    let log_dir = directories::ProjectDirs::from("com", "shopmuse", "shopmuse")
        .map(|dirs| dirs.data_dir().join("logs"))
        .unwrap_or_else(|| std::path::PathBuf::from("logs"));

    let logging_config = LoggingConfig {
        level: std::env::var("SHOPMUSE_LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
        file_enabled: true,
        console_enabled: true,
        max_files: 5,
        log_directory: log_dir,
    };

    init_logging(&logging_config)
}
