//! Configuration for the swatch widget.
//!
//! The host page may embed a JSON document in a
//! `<script type="application/json" id="swatchtip-config">` element to
//! override element ids, placement offsets or the notice duration. Every
//! field is optional; missing fields fall back to the defaults below.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use swatchtip_core::constants::{
    FLIP_GAP, NOTICE_DURATION_MS, TOOLTIP_OFFSET_X, TOOLTIP_OFFSET_Y, VIEWPORT_MARGIN,
};
use swatchtip_core::{EdgePolicy, Point, TooltipLayout};
use thiserror::Error;

/// Id of the script element holding the JSON configuration.
pub const CONFIG_ELEMENT_ID: &str = "swatchtip-config";

/// Current configuration format version.
/// Increment this when making breaking changes to the config format.
pub const CONFIG_VERSION: u32 = 1;

/// Errors while reading the configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// JSON parsing error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration written for a newer format
    #[error("Unsupported config version {found} (expected at most {supported})")]
    UnsupportedVersion {
        /// Version found in the document
        found: u32,
        /// Newest version this build understands
        supported: u32,
    },
}

/// Log level setting for the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Show only errors
    Error,
    /// Show errors and warnings
    #[default]
    Warn,
    /// Show errors, warnings, and info messages
    Info,
    /// Show debug-level logging
    Debug,
    /// Show all log messages including trace
    Trace,
}

impl LogLevel {
    /// Convert to the log crate's Level.
    pub fn to_level(self) -> log::Level {
        match self {
            LogLevel::Error => log::Level::Error,
            LogLevel::Warn => log::Level::Warn,
            LogLevel::Info => log::Level::Info,
            LogLevel::Debug => log::Level::Debug,
            LogLevel::Trace => log::Level::Trace,
        }
    }
}

/// Complete widget configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    /// Version of the configuration format
    pub version: u32,

    /// Console log verbosity
    pub log_level: LogLevel,

    /// How the widget finds its elements on the page
    pub selectors: Selectors,

    /// Tooltip placement
    pub layout: LayoutConfig,

    /// Copy confirmation
    pub notice: NoticeConfig,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            log_level: LogLevel::default(),
            selectors: Selectors::default(),
            layout: LayoutConfig::default(),
            notice: NoticeConfig::default(),
        }
    }
}

impl WidgetConfig {
    /// Parse a configuration document.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: WidgetConfig = serde_json::from_str(json)?;
        if config.version > CONFIG_VERSION {
            return Err(ConfigError::UnsupportedVersion {
                found: config.version,
                supported: CONFIG_VERSION,
            });
        }
        Ok(config)
    }
}

/// Element ids, selectors, attribute and class names used on the host page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Selectors {
    /// Id of the color tooltip panel
    pub color_tooltip: String,
    /// Id of the hex value region
    pub hex_value: String,
    /// Id of the RGB value region
    pub rgb_value: String,
    /// Id of the HSV value region
    pub hsv_value: String,
    /// Id of the description tooltip panel
    pub description_tooltip: String,
    /// Id of the description text region
    pub description_text: String,
    /// Id of the copy confirmation element
    pub copy_notice: String,
    /// CSS selector matching swatch elements
    pub swatch: String,
    /// CSS selector for the info trigger, relative to a swatch
    pub info_trigger: String,
    /// Attribute holding a swatch's color
    pub color_attribute: String,
    /// Attribute holding a swatch's description
    pub description_attribute: String,
    /// Class toggled on a visible tooltip
    pub visible_class: String,
    /// Class toggled on the visible copy confirmation
    pub notice_class: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            color_tooltip: "color-tooltip".to_string(),
            hex_value: "hex-value".to_string(),
            rgb_value: "rgb-value".to_string(),
            hsv_value: "hsv-value".to_string(),
            description_tooltip: "description-tooltip".to_string(),
            description_text: "description-text".to_string(),
            copy_notice: "copy-notification".to_string(),
            swatch: ".color-box".to_string(),
            info_trigger: ".info-icon".to_string(),
            color_attribute: "data-color".to_string(),
            description_attribute: "data-description".to_string(),
            visible_class: "visible".to_string(),
            notice_class: "show".to_string(),
        }
    }
}

/// Tooltip placement relative to the pointer and the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub offset_x: f64,
    pub offset_y: f64,
    /// Minimum gap to the viewport edges
    pub edge_margin: f64,
    /// Extra gap when pushed back from the right or bottom edge
    pub flip_gap: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            offset_x: TOOLTIP_OFFSET_X,
            offset_y: TOOLTIP_OFFSET_Y,
            edge_margin: VIEWPORT_MARGIN,
            flip_gap: FLIP_GAP,
        }
    }
}

impl LayoutConfig {
    pub fn tooltip_layout(&self) -> TooltipLayout {
        TooltipLayout {
            offset: Point::new(self.offset_x, self.offset_y),
            edges: EdgePolicy {
                margin: self.edge_margin,
                flip_gap: self.flip_gap,
            },
        }
    }
}

/// Copy confirmation settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NoticeConfig {
    /// Display time in milliseconds
    pub duration_ms: u64,
}

impl Default for NoticeConfig {
    fn default() -> Self {
        Self {
            duration_ms: NOTICE_DURATION_MS,
        }
    }
}

impl NoticeConfig {
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }
}
