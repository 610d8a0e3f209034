// src/setup/setup_toml.rs
use crate::core::prelude::*;
use std::path::PathBuf;
use tokio::fs;

pub const CONFIG_DIR: &str = ".contact-clear";
pub const CONFIG_FILE: &str = "config.toml";

const DEFAULT_CONFIG: &str = r#"[general]
# error | warn | info | debug | trace (RUST_LOG overrides this)
log_level = "info"
prompt = "> "
"#;

/// Writes the default config next to the executable unless it already exists.
pub async fn ensure_config_exists() -> Result<PathBuf> {
    let exe_path = std::env::current_exe().map_err(AppError::Io)?;
    let base_dir = exe_path
        .parent()
        .ok_or_else(|| AppError::Config("executable has no parent directory".into()))?;

    let config_dir = base_dir.join(CONFIG_DIR);
    if !config_dir.exists() {
        fs::create_dir_all(&config_dir)
            .await
            .map_err(AppError::Io)?;
        log::debug!("Created config directory {}", config_dir.display());
    }

    let config_path = config_dir.join(CONFIG_FILE);
    if !config_path.exists() {
        fs::write(&config_path, DEFAULT_CONFIG)
            .await
            .map_err(AppError::Io)?;
        log::info!("Wrote default config to {}", config_path.display());
    }

    Ok(config_path)
}

pub fn get_config_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(CONFIG_DIR).join(CONFIG_FILE)];
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(base_dir) = exe_path.parent() {
            paths.push(base_dir.join(CONFIG_DIR).join(CONFIG_FILE));
        }
    }
    paths
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn working_directory_is_searched_first() {
        let paths = get_config_paths();
        assert_eq!(paths[0], PathBuf::from(".contact-clear/config.toml"));
    }

    #[test]
    fn default_config_is_valid() {
        let config = Config::from_toml_str(DEFAULT_CONFIG).expect("default parses");
        assert_eq!(config.log_level, "info");
        assert_eq!(config.prompt, "> ");
    }
}
