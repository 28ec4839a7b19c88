//! swatchtip_core - Platform-independent logic for the swatch inspection widget
//!
//! Everything in this crate runs on the host as well as in the browser.
//! The DOM, the clipboard and timers are reached through small traits
//! ([`TooltipSurface`], [`ClipboardBackend`], [`NoticeSurface`], [`Timer`])
//! so the interaction rules can be exercised without a browser.

pub mod clipboard;
pub mod color;
pub mod constants;
pub mod controller;
pub mod error;
pub mod geometry;
pub mod notice;
pub mod tooltip;

#[cfg(test)]
mod testing;

pub use clipboard::{ClipboardBackend, write_text};
pub use color::{ColorInfo, Hsv, Rgb, bare_hex, parse_color, rgb_to_hsv};
pub use controller::{Controller, SwatchRecord, copy_to_clipboard};
pub use error::ClipboardError;
pub use geometry::{EdgePolicy, Point, Rect, Size, clamp_to_viewport};
pub use notice::{CopyNotice, NoticeSurface, Timer};
pub use tooltip::{Tooltip, TooltipLayout, TooltipState, TooltipSurface};
