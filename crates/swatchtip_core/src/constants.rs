//! Centralized constants for swatchtip_core
//!
//! Defaults for tooltip placement and the copy notice. The browser binding
//! can override all of them through its configuration.

// =============================================================================
// Tooltip placement
// =============================================================================

/// Horizontal offset from the pointer to the tooltip's left edge
pub const TOOLTIP_OFFSET_X: f64 = 15.0;

/// Vertical offset from the pointer to the tooltip's top edge
pub const TOOLTIP_OFFSET_Y: f64 = -10.0;

/// Minimum distance kept between a tooltip and the viewport edges
pub const VIEWPORT_MARGIN: f64 = 10.0;

/// Extra distance used when a tooltip is pushed back from the right or bottom edge
pub const FLIP_GAP: f64 = 20.0;

// =============================================================================
// Copy notice
// =============================================================================

/// How long the copy confirmation stays visible, in milliseconds
pub const NOTICE_DURATION_MS: u64 = 2000;
