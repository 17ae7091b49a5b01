//! Settings file: engine and display configuration in one JSON document
//!
//! Every field is optional; missing sections fall back to their defaults.
//!
//! ```json
//! {
//!   "engine": { "invalid_entry": "reject", "average": { "method": "volume", "n_periods": 5 } },
//!   "display": { "blank_text": "-", "ratio_decimals": 4 }
//! }
//! ```

use crate::display::DisplayConfig;
use crate::error::SettingsError;
use crate::grid::EngineConfig;
use log::info;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub engine: EngineConfig,

    #[serde(default)]
    pub display: DisplayConfig,
}

impl Settings {
    pub fn from_json_str(text: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn from_json_path<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let settings = Self::from_json_str(&fs::read_to_string(path)?)?;
        info!("Loaded settings from {}", path.display());
        Ok(settings)
    }
}
