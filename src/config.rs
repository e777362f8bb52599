use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::coach::DEFAULT_FREE_DAILY_LIMIT;
use crate::error::Result;
use crate::planner::DEFAULT_BODY_FAT_PERCENT;
use crate::units::UnitPreferences;

/// Application settings, read from a JSON file. Every field has a default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    #[serde(default)]
    pub units: UnitPreferences,

    #[serde(default = "default_free_daily_ai_limit")]
    pub free_daily_ai_limit: u32,

    #[serde(default = "default_store_path")]
    pub store_path: PathBuf,

    #[serde(default = "default_body_fat_percent")]
    pub default_body_fat_percent: f64,
}

fn default_free_daily_ai_limit() -> u32 {
    DEFAULT_FREE_DAILY_LIMIT
}

fn default_store_path() -> PathBuf {
    PathBuf::from("snapfit_state.json")
}

fn default_body_fat_percent() -> f64 {
    DEFAULT_BODY_FAT_PERCENT
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            units: UnitPreferences::default(),
            free_daily_ai_limit: default_free_daily_ai_limit(),
            store_path: default_store_path(),
            default_body_fat_percent: default_body_fat_percent(),
        }
    }
}

impl AppConfig {
    /// Load from `path`; a missing file gives the defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}
