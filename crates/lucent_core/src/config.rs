//! Default icon configuration
//!
//! Visual parameters resolve through three levels:
//! 1. explicit [`IconProps`](crate::IconProps)
//! 2. an [`IconConfig`] (either passed in or the process-wide one)
//! 3. the hard-coded fallbacks below

use std::sync::RwLock;

use serde::{Deserialize, Serialize};

/// Natural width and height of every icon's viewBox
pub const VIEWBOX_SIZE: f32 = 24.0;

pub const DEFAULT_SIZE: f32 = 24.0;
pub const DEFAULT_COLOR: &str = "currentColor";
pub const DEFAULT_STROKE_WIDTH: f32 = 2.0;
pub const DEFAULT_ABSOLUTE_STROKE_WIDTH: bool = false;

/// Attributes every mounted canvas carries before props are applied
pub const ROOT_ATTRIBUTES: &[(&str, &str)] = &[
    ("xmlns", "http://www.w3.org/2000/svg"),
    ("viewBox", "0 0 24 24"),
    ("fill", "none"),
    ("stroke-linecap", "round"),
    ("stroke-linejoin", "round"),
];

/// Default-configuration object
///
/// Every field is optional; unset fields fall through to the constants.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct IconConfig {
    pub size: Option<f32>,
    pub color: Option<String>,
    pub stroke_width: Option<f32>,
    pub absolute_stroke_width: Option<bool>,
    /// Extra class appended after the built-in icon classes
    pub class: Option<String>,
}

impl IconConfig {
    /// A config with no fields set
    pub const EMPTY: IconConfig = IconConfig {
        size: None,
        color: None,
        stroke_width: None,
        absolute_stroke_width: None,
        class: None,
    };

    pub fn size(mut self, size: f32) -> Self {
        self.size = Some(size);
        self
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn stroke_width(mut self, width: f32) -> Self {
        self.stroke_width = Some(width);
        self
    }

    pub fn absolute_stroke_width(mut self, absolute: bool) -> Self {
        self.absolute_stroke_width = Some(absolute);
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    /// Field-wise merge where `over` wins wherever it is set
    pub fn merge(&self, over: &IconConfig) -> IconConfig {
        IconConfig {
            size: over.size.or(self.size),
            color: over.color.clone().or_else(|| self.color.clone()),
            stroke_width: over.stroke_width.or(self.stroke_width),
            absolute_stroke_width: over.absolute_stroke_width.or(self.absolute_stroke_width),
            class: over.class.clone().or_else(|| self.class.clone()),
        }
    }

    /// Whether no field is set
    pub fn is_empty(&self) -> bool {
        self == &Self::EMPTY
    }
}

static GLOBAL_CONFIG: RwLock<IconConfig> = RwLock::new(IconConfig::EMPTY);

/// Snapshot of the process-wide default configuration
pub fn global_config() -> IconConfig {
    match GLOBAL_CONFIG.read() {
        Ok(guard) => guard.clone(),
        Err(poisoned) => poisoned.into_inner().clone(),
    }
}

/// Replace the process-wide default configuration
pub fn set_global_config(config: IconConfig) {
    tracing::debug!(?config, "installing global icon config");
    match GLOBAL_CONFIG.write() {
        Ok(mut guard) => *guard = config,
        Err(poisoned) => *poisoned.into_inner() = config,
    }
}

/// Clear the process-wide default configuration
pub fn reset_global_config() {
    set_global_config(IconConfig::EMPTY);
}
