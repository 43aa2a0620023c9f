use std::path::PathBuf;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::error::AcrofindError;

/// When to emit ANSI styling.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// User configuration loaded from `~/.config/acrofind/config.toml`.
///
/// All fields have sensible defaults so the config file is optional.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Config {
    /// Prepend the winning score to each match line.
    #[serde(default)]
    pub show_scores: bool,
    #[serde(default)]
    pub color: ColorMode,
}

impl Config {
    pub fn load() -> Result<Self, AcrofindError> {
        let config_path = Self::config_path();
        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)
                .map_err(|e| AcrofindError::ConfigRead(Box::new(e)))?;
            toml::from_str(&content).map_err(|e| AcrofindError::ConfigRead(Box::new(e)))
        } else {
            Ok(Self::default())
        }
    }

    pub fn config_path() -> PathBuf {
        Self::project_dirs().config_dir().join("config.toml")
    }

    fn project_dirs() -> ProjectDirs {
        ProjectDirs::from("", "", "acrofind").expect("could not determine project directories")
    }
}
