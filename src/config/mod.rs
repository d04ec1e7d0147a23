use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::info;

use crate::logging::LoggingConfig;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub assistant: AssistantConfig,
    pub ui: UiConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssistantConfig {
    /// Lower bound of the simulated thinking delay
    pub reply_delay_min_ms: u64,
    /// Upper bound of the simulated thinking delay
    pub reply_delay_max_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    pub window_width: f32,
    pub window_height: f32,
    pub enable_dark_mode: bool,
    pub chat_panel_width: f32,
    /// How many chat messages the panel renders (history itself is unbounded)
    pub chat_history_limit: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            assistant: AssistantConfig {
                reply_delay_min_ms: 1000,
                reply_delay_max_ms: 2000,
            },
            ui: UiConfig {
                window_width: 1200.0,
                window_height: 800.0,
                enable_dark_mode: true,
                chat_panel_width: 360.0,
                chat_history_limit: 100,
            },
            logging: LoggingConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from the default location, writing defaults on
    /// first run
    pub async fn load() -> Result<Self> {
        let config_path = get_config_path();

        if config_path.exists() {
            Self::load_from_file(&config_path).await
        } else {
            info!("No configuration file found, using defaults");
            let config = Self::default();
            config.save().await?;
            Ok(config)
        }
    }

    /// Load configuration from a specific file
    pub async fn load_from_file<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let content = tokio::fs::read_to_string(path).await?;
        let config: AppConfig = toml::from_str(&content)?;

        config.validate()?;

        info!("Configuration loaded successfully");
        Ok(config)
    }

    /// Save configuration to the default location
    pub async fn save(&self) -> Result<()> {
        let config_path = get_config_path();

        if let Some(parent) = config_path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let content = toml::to_string_pretty(self)?;
        tokio::fs::write(&config_path, content).await?;

        info!("Configuration saved to: {}", config_path.display());
        Ok(())
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.assistant.reply_delay_min_ms > self.assistant.reply_delay_max_ms {
            return Err(anyhow::anyhow!(
                "Assistant reply_delay_min_ms must be <= reply_delay_max_ms"
            ));
        }

        if self.ui.window_width <= 0.0 || self.ui.window_height <= 0.0 {
            return Err(anyhow::anyhow!("UI window dimensions must be > 0"));
        }

        if self.ui.chat_history_limit == 0 {
            return Err(anyhow::anyhow!("UI chat_history_limit must be > 0"));
        }

        Ok(())
    }
}

/// Get the configuration file path
fn get_config_path() -> PathBuf {
    directories::ProjectDirs::from("com", "shopmuse", "shopmuse")
        .map(|dirs| dirs.config_dir().join("config.toml"))
        .unwrap_or_else(|| {
            std::env::current_dir()
                .unwrap_or_default()
                .join("config.toml")
        })
}

/// Environment-based configuration overrides
pub struct ConfigOverrides;

impl ConfigOverrides {
    /// Apply environment variable overrides to configuration
    pub fn apply(config: &mut AppConfig) {
        if let Ok(level) = std::env::var("SHOPMUSE_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Ok(min_str) = std::env::var("SHOPMUSE_REPLY_DELAY_MIN_MS") {
            if let Ok(min) = min_str.parse::<u64>() {
                config.assistant.reply_delay_min_ms = min;
            }
        }

        if let Ok(max_str) = std::env::var("SHOPMUSE_REPLY_DELAY_MAX_MS") {
            if let Ok(max) = max_str.parse::<u64>() {
                config.assistant.reply_delay_max_ms = max;
            }
        }

        if let Ok(width_str) = std::env::var("SHOPMUSE_WINDOW_WIDTH") {
            if let Ok(width) = width_str.parse::<f32>() {
                config.ui.window_width = width;
            }
        }

        if let Ok(height_str) = std::env::var("SHOPMUSE_WINDOW_HEIGHT") {
            if let Ok(height) = height_str.parse::<f32>() {
                config.ui.window_height = height;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_validates() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_inverted_delay_bounds_rejected() {
        let mut config = AppConfig::default();
        config.assistant.reply_delay_min_ms = 3000;
        config.assistant.reply_delay_max_ms = 1000;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_history_limit_rejected() {
        let mut config = AppConfig::default();
        config.ui.chat_history_limit = 0;
        assert!(config.validate().is_err());
    }

    #[tokio::test]
    async fn test_toml_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let config = AppConfig::default();
        let content = toml::to_string_pretty(&config).unwrap();
        tokio::fs::write(&path, content).await.unwrap();

        let loaded = AppConfig::load_from_file(&path).await.unwrap();
        assert_eq!(
            loaded.assistant.reply_delay_min_ms,
            config.assistant.reply_delay_min_ms
        );
        assert_eq!(loaded.ui.chat_history_limit, config.ui.chat_history_limit);
        assert_eq!(loaded.logging.level, config.logging.level);
    }
}
