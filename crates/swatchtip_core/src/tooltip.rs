//! Floating tooltip presenter that follows the pointer.
//!
//! A [`Tooltip`] owns one panel on the page (through [`TooltipSurface`]) and a
//! content renderer that turns the hovered item into display lines. The
//! color tooltip and the description tooltip are two instances of the same
//! presenter with different renderers.
//!
//! State machine: hidden -> visible -> hidden. Hiding keeps the last
//! content and position; nothing reads them while hidden.

use crate::constants::{TOOLTIP_OFFSET_X, TOOLTIP_OFFSET_Y};
use crate::geometry::{EdgePolicy, Point, Rect, Size, clamp_to_viewport};

/// The page-side panel a tooltip draws into.
pub trait TooltipSurface {
    /// Write the display lines into the panel's text regions, in order.
    fn set_lines(&self, lines: &[String]);

    /// Move the panel's top-left corner.
    fn place(&self, position: Point);

    /// Bounding box of the panel as currently rendered.
    fn bounds(&self) -> Rect;

    /// Size of the visible viewport.
    fn viewport(&self) -> Size;

    /// Show or hide the panel.
    fn set_visible(&self, visible: bool);
}

/// Turns tooltip content into display lines; `None` means there is nothing to show.
pub type ContentRenderer = Box<dyn Fn(&str) -> Option<Vec<String>>>;

/// Placement settings shared by all tooltips.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TooltipLayout {
    /// Offset from the pointer to the panel's top-left corner
    pub offset: Point,
    /// Viewport edge handling
    pub edges: EdgePolicy,
}

impl Default for TooltipLayout {
    fn default() -> Self {
        Self {
            offset: Point::new(TOOLTIP_OFFSET_X, TOOLTIP_OFFSET_Y),
            edges: EdgePolicy::default(),
        }
    }
}

/// Observable state of a tooltip.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TooltipState {
    pub visible: bool,
    /// Pointer position of the last show
    pub anchor: Point,
    /// Panel position after clamping
    pub position: Point,
    pub lines: Vec<String>,
}

/// A pointer-following tooltip bound to one panel.
pub struct Tooltip<S> {
    name: &'static str,
    surface: S,
    renderer: ContentRenderer,
    layout: TooltipLayout,
    state: TooltipState,
}

impl<S: TooltipSurface> Tooltip<S> {
    /// Create a hidden tooltip.
    ///
    /// `name` only appears in log output.
    pub fn new<F>(name: &'static str, surface: S, layout: TooltipLayout, renderer: F) -> Self
    where
        F: Fn(&str) -> Option<Vec<String>> + 'static,
    {
        Self {
            name,
            surface,
            renderer: Box::new(renderer),
            layout,
            state: TooltipState::default(),
        }
    }

    /// Render `content` and show the panel next to `at`.
    ///
    /// Returns `false` and leaves everything untouched when the renderer
    /// has nothing to show.
    pub fn show(&mut self, at: Point, content: &str) -> bool {
        let Some(lines) = (self.renderer)(content) else {
            log::trace!("{} tooltip: nothing to render for {:?}", self.name, content);
            return false;
        };

        self.surface.set_lines(&lines);

        let desired = at.offset(self.layout.offset);
        self.surface.place(desired);
        self.surface.set_visible(true);

        let position = clamp_to_viewport(
            desired,
            self.surface.bounds(),
            self.surface.viewport(),
            self.layout.edges,
        );
        if position != desired {
            self.surface.place(position);
        }

        if !self.state.visible {
            log::debug!("{} tooltip shown at {:?}", self.name, position);
        }

        self.state = TooltipState {
            visible: true,
            anchor: at,
            position,
            lines,
        };
        true
    }

    /// Hide the panel.
    pub fn hide(&mut self) {
        if self.state.visible {
            log::debug!("{} tooltip hidden", self.name);
        }
        self.surface.set_visible(false);
        self.state.visible = false;
    }

    pub fn is_visible(&self) -> bool {
        self.state.visible
    }

    pub fn state(&self) -> &TooltipState {
        &self.state
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockSurface;

    fn echo_tooltip(surface: MockSurface) -> Tooltip<MockSurface> {
        Tooltip::new("test", surface, TooltipLayout::default(), |content| {
            (!content.is_empty()).then(|| vec![content.to_string()])
        })
    }

    #[test]
    fn test_show_places_at_pointer_offset() {
        let surface = MockSurface::new(Size::new(200.0, 100.0), Size::new(800.0, 600.0));
        let mut tooltip = echo_tooltip(surface.clone());

        assert!(tooltip.show(Point::new(100.0, 100.0), "hello"));

        assert!(tooltip.is_visible());
        assert_eq!(tooltip.state().position, Point::new(115.0, 90.0));
        assert_eq!(tooltip.state().anchor, Point::new(100.0, 100.0));
        assert_eq!(surface.position(), Point::new(115.0, 90.0));
        assert_eq!(surface.lines(), vec!["hello".to_string()]);
        assert!(surface.visible());
    }

    #[test]
    fn test_show_clamps_against_right_edge() {
        let surface = MockSurface::new(Size::new(200.0, 100.0), Size::new(800.0, 600.0));
        let mut tooltip = echo_tooltip(surface.clone());

        tooltip.show(Point::new(685.0, 100.0), "hello");

        // desired left 700, right edge 900
        assert_eq!(surface.position(), Point::new(700.0 - (900.0 - 800.0 + 20.0), 90.0));
    }

    #[test]
    fn test_show_with_nothing_to_render_is_noop() {
        let surface = MockSurface::new(Size::new(200.0, 100.0), Size::new(800.0, 600.0));
        let mut tooltip = echo_tooltip(surface.clone());

        assert!(!tooltip.show(Point::new(10.0, 10.0), ""));

        assert!(!tooltip.is_visible());
        assert!(!surface.visible());
        assert_eq!(surface.placements(), 0);
    }

    #[test]
    fn test_hide_keeps_stale_content() {
        let surface = MockSurface::new(Size::new(200.0, 100.0), Size::new(800.0, 600.0));
        let mut tooltip = echo_tooltip(surface.clone());

        tooltip.show(Point::new(100.0, 100.0), "hello");
        tooltip.hide();

        assert!(!tooltip.is_visible());
        assert!(!surface.visible());
        assert_eq!(tooltip.state().lines, vec!["hello".to_string()]);
        assert_eq!(tooltip.state().position, Point::new(115.0, 90.0));
    }

    #[test]
    fn test_custom_layout_offset() {
        let surface = MockSurface::new(Size::new(50.0, 20.0), Size::new(800.0, 600.0));
        let layout = TooltipLayout {
            offset: Point::new(0.0, 30.0),
            ..TooltipLayout::default()
        };
        let mut tooltip = Tooltip::new("test", surface.clone(), layout, |c| Some(vec![c.into()]));

        tooltip.show(Point::new(40.0, 40.0), "x");

        assert_eq!(surface.position(), Point::new(40.0, 70.0));
    }
}
