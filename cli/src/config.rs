// SPDX-License-Identifier: MIT OR Apache-2.0

//! CLI configuration stored as TOML

use anyhow::{Context, Result};
use directories::ProjectDirs;
use goban_core::GameConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CliConfig {
    #[serde(default = "default_board_size")]
    pub board_size: u8,
    #[serde(default = "default_black_name")]
    pub black_name: String,
    #[serde(default = "default_white_name")]
    pub white_name: String,
    /// Print game events as JSON lines instead of text
    #[serde(default)]
    pub json: bool,
}

fn default_board_size() -> u8 {
    19
}

fn default_black_name() -> String {
    "Black".to_string()
}

fn default_white_name() -> String {
    "White".to_string()
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            board_size: default_board_size(),
            black_name: default_black_name(),
            white_name: default_white_name(),
            json: false,
        }
    }
}

impl CliConfig {
    /// Settings for a new game session
    pub fn game_config(&self) -> GameConfig {
        GameConfig {
            board_size: self.board_size,
            black_name: self.black_name.clone(),
            white_name: self.white_name.clone(),
        }
    }
}

pub fn get_config_path() -> Result<PathBuf> {
    let proj_dirs = ProjectDirs::from("io", "goban", "goban")
        .context("Failed to determine config directory")?;

    Ok(proj_dirs.config_dir().join("config.toml"))
}

/// Load the configuration.
///
/// An explicit `path` must exist. Without one, the platform config file is
/// used, and created with defaults on first run.
pub fn load_config(path: Option<&Path>) -> Result<CliConfig> {
    if let Some(path) = path {
        return read_config(path);
    }

    let config_path = get_config_path().context("Failed to determine config path")?;

    if !config_path.exists() {
        tracing::info!("Config file not found, creating default at: {}", config_path.display());
        let default_config = CliConfig::default();
        save_config(&default_config, &config_path)?;
        return Ok(default_config);
    }

    read_config(&config_path)
}

fn read_config(path: &Path) -> Result<CliConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    toml::from_str::<CliConfig>(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

pub fn save_config(config: &CliConfig, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).context("Failed to create config directory")?;
    }

    let toml_content = toml::to_string_pretty(config).context("Failed to serialize config")?;

    fs::write(path, toml_content)
        .with_context(|| format!("Failed to write config file: {}", path.display()))?;

    tracing::info!("Saved config to: {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = CliConfig::default();
        assert_eq!(config.board_size, 19);
        assert_eq!(config.black_name, "Black");
        assert!(!config.json);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let config: CliConfig = toml::from_str("board_size = 9\nwhite_name = \"Sai\"\n").unwrap();
        assert_eq!(config.board_size, 9);
        assert_eq!(config.white_name, "Sai");
        assert_eq!(config.black_name, "Black");
    }

    #[test]
    fn test_load_save_config() -> Result<()> {
        let temp_dir = tempdir()?;
        let config_path = temp_dir.path().join("nested").join("config.toml");

        let config = CliConfig {
            board_size: 13,
            json: true,
            ..CliConfig::default()
        };
        save_config(&config, &config_path)?;

        assert_eq!(load_config(Some(config_path.as_path()))?, config);
        Ok(())
    }

    #[test]
    fn test_explicit_missing_file_is_an_error() {
        let temp_dir = tempdir().unwrap();
        assert!(load_config(Some(temp_dir.path().join("missing.toml").as_path())).is_err());
    }
}
