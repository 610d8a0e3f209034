// src/core/config.rs
use crate::core::constants::{DEFAULT_LOG_LEVEL, DEFAULT_PROMPT};
use crate::core::prelude::*;
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::path::Path;

// TOML Configuration Structure
#[derive(Debug, Serialize, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    general: GeneralConfig,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeneralConfig {
    #[serde(default = "default_log_level")]
    log_level: String,
    #[serde(default = "default_prompt")]
    prompt: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            prompt: default_prompt(),
        }
    }
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.into()
}
fn default_prompt() -> String {
    DEFAULT_PROMPT.into()
}

#[derive(Debug, Clone)]
pub struct Config {
    config_path: Option<String>,
    pub log_level: String,
    pub prompt: String,
}

impl Config {
    /// Loads the first readable config file, creating a default one when none
    /// exists. Falls back to built-in defaults if the file cannot be written.
    pub async fn load() -> Result<Self> {
        for path in crate::setup::setup_toml::get_config_paths() {
            if path.exists() {
                match Self::from_file(&path).await {
                    Ok(config) => {
                        Self::log_startup(&config);
                        return Ok(config);
                    }
                    Err(e) => log::warn!("Skipping config {}: {}", path.display(), e),
                }
            }
        }

        match crate::setup::setup_toml::ensure_config_exists().await {
            Ok(path) => {
                let config = Self::from_file(&path).await?;
                Self::log_startup(&config);
                Ok(config)
            }
            Err(e) => {
                log::warn!("Using built-in defaults: {}", e);
                Ok(Self::default())
            }
        }
    }

    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = tokio::fs::read_to_string(&path)
            .await
            .map_err(AppError::Io)?;
        let mut config = Self::from_toml_str(&content)?;
        config.config_path = Some(path.as_ref().to_string_lossy().into_owned());
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: ConfigFile =
            toml::from_str(content).map_err(|e| AppError::Config(format!("TOML: {}", e)))?;

        let log_level = if Self::parse_level(&file.general.log_level).is_some() {
            file.general.log_level
        } else {
            log::warn!(
                "Unknown log level '{}', using '{}'",
                file.general.log_level,
                DEFAULT_LOG_LEVEL
            );
            DEFAULT_LOG_LEVEL.into()
        };

        Ok(Self {
            config_path: None,
            log_level,
            prompt: file.general.prompt,
        })
    }

    pub async fn save(&self) -> Result<()> {
        let Some(path) = &self.config_path else {
            return Ok(());
        };

        let file = ConfigFile {
            general: GeneralConfig {
                log_level: self.log_level.clone(),
                prompt: self.prompt.clone(),
            },
        };

        let content = toml::to_string_pretty(&file)
            .map_err(|e| AppError::Config(format!("TOML: {}", e)))?;

        if let Some(parent) = std::path::PathBuf::from(path).parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(AppError::Io)?;
        }

        tokio::fs::write(path, content).await.map_err(AppError::Io)
    }

    pub fn config_path(&self) -> Option<&str> {
        self.config_path.as_deref()
    }

    pub fn log_filter(&self) -> LevelFilter {
        Self::parse_level(&self.log_level).unwrap_or(LevelFilter::Info)
    }

    fn parse_level(level: &str) -> Option<LevelFilter> {
        match level.trim().to_lowercase().as_str() {
            "off" => Some(LevelFilter::Off),
            "error" => Some(LevelFilter::Error),
            "warn" | "warning" => Some(LevelFilter::Warn),
            "info" => Some(LevelFilter::Info),
            "debug" => Some(LevelFilter::Debug),
            "trace" => Some(LevelFilter::Trace),
            _ => None,
        }
    }

    fn log_startup(config: &Config) {
        if let Some(path) = config.config_path() {
            log::debug!("Config loaded from {}", path);
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            config_path: None,
            log_level: DEFAULT_LOG_LEVEL.into(),
            prompt: DEFAULT_PROMPT.into(),
        }
    }
}
