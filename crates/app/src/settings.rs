//! Dashboard settings persistence.
//!
//! A small JSON file next to the binary; missing or malformed files fall
//! back to defaults so the dashboard always starts.

use std::fs;
use std::path::Path;

use dashcore::types::DetailLevel;
use serde::{Deserialize, Serialize};

pub const SETTINGS_FILE: &str = "mecanum_dash.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashSettings {
    /// Whether the twist term contributes to the sampled curves.
    pub detail_level: DetailLevel,
    /// Draw the reference grid behind the vehicle scene.
    pub show_scene_grid: bool,
}

impl Default for DashSettings {
    fn default() -> Self {
        DashSettings {
            detail_level: DetailLevel::Detailed,
            show_scene_grid: true,
        }
    }
}

impl DashSettings {
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(text) => match serde_json::from_str(&text) {
                Ok(settings) => settings,
                Err(err) => {
                    log::warn!("malformed settings file {}: {err}", path.display());
                    DashSettings::default()
                }
            },
            Err(_) => DashSettings::default(),
        }
    }

    pub fn save(&self, path: &Path) {
        match serde_json::to_string_pretty(self) {
            Ok(text) => {
                if let Err(err) = fs::write(path, text) {
                    log::error!("failed to save settings to {}: {err}", path.display());
                }
            }
            Err(err) => log::error!("failed to serialize settings: {err}"),
        }
    }
}
