use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use minesweep_core::{Difficulty, StartTile};
use serde::{Deserialize, Serialize};

/// Preferences read from the optional settings file, command line arguments override them.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub(crate) struct Settings {
    /// Skips the menu when set
    pub difficulty: Option<Difficulty>,
    pub first_click: StartTile,
    pub seed: Option<u64>,
}

impl Settings {
    pub fn load(path: &Path) -> Result<Self> {
        let text =
            fs::read_to_string(path).with_context(|| format!("Could not read settings from {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("Invalid settings in {}", path.display()))
    }

    pub fn parse(text: &str) -> Result<Self> {
        let settings: Self = toml::from_str(text)?;
        if let Some(Difficulty::Custom(config)) = settings.difficulty {
            config.validate()?;
        }
        Ok(settings)
    }
}
