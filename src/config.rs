use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};
use crate::render::RenderParams;
use crate::tiling::TilingParams;

/// Combined settings for generating and drawing a tiling.
///
/// Every field has a default, so a partial JSON document is accepted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub tiling: TilingParams,
    pub render: RenderParams,
}

impl Config {
    /// Parses a configuration from JSON text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a valid configuration document.
    pub fn from_json_str(text: &str) -> Result<Self> {
        let config = serde_json::from_str(text).map_err(ConfigError::from)?;
        Ok(config)
    }

    /// Serializes the configuration as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json_string(&self) -> Result<String> {
        let text = serde_json::to_string_pretty(self).map_err(ConfigError::from)?;
        Ok(text)
    }
}
