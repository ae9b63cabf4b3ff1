//! lucent.toml handling
//!
//! ```toml
//! [defaults]
//! size = 32
//! color = "#334155"
//! stroke_width = 1.5
//! absolute_stroke_width = true
//! class = "icon"
//!
//! [render]
//! pixels = 128
//! current_color = "#000000"
//! ```

use anyhow::{Context, Result};
use lucent_core::IconConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default file name looked up in the working directory
pub const CONFIG_FILE: &str = "lucent.toml";

/// Contents of lucent.toml
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LucentConfig {
    /// Default icon configuration (middle level of the fallback chain)
    #[serde(default)]
    pub defaults: IconConfig,
    #[serde(default)]
    pub render: RenderConfig,
}

/// Rasterization settings for `lucent render`
#[derive(Debug, Deserialize, Serialize)]
pub struct RenderConfig {
    /// Output width and height in pixels
    #[serde(default = "default_pixels")]
    pub pixels: u32,
    /// Color substituted for `currentColor`
    #[serde(default = "default_current_color")]
    pub current_color: String,
}

fn default_pixels() -> u32 {
    96
}

fn default_current_color() -> String {
    "#000000".to_string()
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            pixels: default_pixels(),
            current_color: default_current_color(),
        }
    }
}

impl LucentConfig {
    /// Load lucent.toml
    ///
    /// With an explicit path the file must exist. Otherwise `lucent.toml` in
    /// `dir` is used when present, and built-in defaults when not.
    pub fn load(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        let path = match explicit {
            Some(path) => {
                if !path.exists() {
                    anyhow::bail!("Config file {} does not exist", path.display());
                }
                path.to_path_buf()
            }
            None => {
                let path = dir.join(CONFIG_FILE);
                if !path.exists() {
                    tracing::debug!("no {} in {}, using defaults", CONFIG_FILE, dir.display());
                    return Ok(Self::default());
                }
                path
            }
        };

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config = Self::from_toml(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;

        tracing::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }
}
