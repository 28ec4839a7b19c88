//! swatchtip - Color swatch inspection widget for the browser
//!
//! Hovering a swatch shows its hex, RGB and HSV values next to the pointer,
//! an optional info icon shows a description, and clicking copies the hex
//! code. The interaction logic lives in `swatchtip_core`; this crate holds
//! the configuration and the WASM binding to the page.

pub mod config;

pub use config::{ConfigError, LogLevel, WidgetConfig};

#[cfg(target_arch = "wasm32")]
mod dom;

// WASM entry point
#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(target_arch = "wasm32")]
pub use wasm::*;
