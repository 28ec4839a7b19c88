//! Interaction rules for color swatches.
//!
//! The [`Controller`] owns the two tooltip singletons and maps swatch events
//! onto them. Every swatch is described by a [`SwatchRecord`]; the browser
//! binding calls the same handler methods for all swatches and passes the
//! record of the one under the pointer.

use crate::clipboard::{ClipboardBackend, write_text};
use crate::color::{ColorInfo, bare_hex};
use crate::geometry::Point;
use crate::notice::{CopyNotice, NoticeSurface, Timer};
use crate::tooltip::{Tooltip, TooltipLayout, TooltipSurface};

/// What the widget knows about one swatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwatchRecord {
    /// Color identifier, `#RRGGBB`
    pub color: String,
    /// Text for the description tooltip
    pub description: Option<String>,
}

impl SwatchRecord {
    pub fn new(color: impl Into<String>) -> Self {
        Self {
            color: color.into(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// The text written to the clipboard when the swatch is clicked.
    pub fn copy_text(&self) -> &str {
        bare_hex(&self.color)
    }
}

/// Sequences the color and description tooltips.
pub struct Controller<S> {
    color: Tooltip<S>,
    description: Option<Tooltip<S>>,
}

impl<S: TooltipSurface> Controller<S> {
    /// Create a controller. The description tooltip is optional because not
    /// every host page provides one.
    pub fn new(color_surface: S, description_surface: Option<S>, layout: TooltipLayout) -> Self {
        let color = Tooltip::new("color", color_surface, layout, |identifier| {
            ColorInfo::from_identifier(identifier).map(|info| info.lines())
        });
        let description = description_surface.map(|surface| {
            Tooltip::new("description", surface, layout, |text| {
                Some(vec![text.to_string()])
            })
        });
        Self { color, description }
    }

    /// Pointer entered the swatch.
    pub fn swatch_entered(&mut self, swatch: &SwatchRecord, at: Point, over_info: bool) {
        if !over_info {
            self.color.show(at, &swatch.color);
        }
    }

    /// Pointer moved within the swatch. Only tracks an already visible tooltip.
    pub fn swatch_moved(&mut self, swatch: &SwatchRecord, at: Point, over_info: bool) {
        if self.color.is_visible() && !over_info {
            self.color.show(at, &swatch.color);
        }
    }

    /// Pointer left the swatch. `still_inside` is true when it moved onto a
    /// descendant of the swatch, in which case the tooltip stays.
    pub fn swatch_left(&mut self, still_inside: bool) {
        if !still_inside {
            self.color.hide();
        }
    }

    /// Pointer entered the swatch's info trigger.
    pub fn info_entered(&mut self, swatch: &SwatchRecord, at: Point) {
        self.color.hide();
        if let (Some(tooltip), Some(text)) = (&mut self.description, &swatch.description) {
            tooltip.show(at, text);
        }
    }

    pub fn info_moved(&mut self, swatch: &SwatchRecord, at: Point) {
        if let (Some(tooltip), Some(text)) = (&mut self.description, &swatch.description)
            && tooltip.is_visible()
        {
            tooltip.show(at, text);
        }
    }

    pub fn info_left(&mut self) {
        if let Some(tooltip) = &mut self.description {
            tooltip.hide();
        }
    }

    /// Scroll or resize: positions are stale, hide everything.
    pub fn viewport_changed(&mut self) {
        self.color.hide();
        self.info_left();
    }

    pub fn color_tooltip(&self) -> &Tooltip<S> {
        &self.color
    }

    pub fn description_tooltip(&self) -> Option<&Tooltip<S>> {
        self.description.as_ref()
    }
}

/// Copy `text` and confirm with the notice on success.
pub async fn copy_to_clipboard<B, N, T>(
    text: &str,
    clipboard: &B,
    notice: Option<&CopyNotice<N, T>>,
) -> bool
where
    B: ClipboardBackend,
    N: NoticeSurface,
    T: Timer,
{
    let copied = write_text(clipboard, text).await;
    if copied && let Some(notice) = notice {
        notice.show();
    }
    copied
}
