//! Tooltip panel backed by positioned page elements.

use swatchtip_core::{Point, Rect, Size, TooltipSurface};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, Window};

use super::{DomError, element_by_id};

/// A tooltip panel with one text region per display line.
pub struct DomTooltip {
    window: Window,
    panel: HtmlElement,
    regions: Vec<Element>,
    visible_class: String,
}

impl DomTooltip {
    /// Look up the panel and its text regions by id.
    pub fn locate(
        window: &Window,
        document: &Document,
        panel_id: &str,
        region_ids: &[&str],
        visible_class: &str,
    ) -> Result<Self, DomError> {
        let panel = element_by_id(document, panel_id)?
            .dyn_into::<HtmlElement>()
            .map_err(|_| DomError::NotHtmlElement(panel_id.to_string()))?;
        let regions = region_ids
            .iter()
            .map(|id| element_by_id(document, id))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            window: window.clone(),
            panel,
            regions,
            visible_class: visible_class.to_string(),
        })
    }

    fn set_style(&self, property: &str, value: f64) {
        if let Err(e) = self
            .panel
            .style()
            .set_property(property, &format!("{}px", value))
        {
            log::warn!("Failed to set tooltip {}: {:?}", property, e);
        }
    }
}

fn pixels(value: Result<JsValue, JsValue>) -> f64 {
    value.ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
}

impl TooltipSurface for DomTooltip {
    fn set_lines(&self, lines: &[String]) {
        for (region, line) in self.regions.iter().zip(lines) {
            region.set_text_content(Some(line));
        }
    }

    fn place(&self, position: Point) {
        self.set_style("left", position.x);
        self.set_style("top", position.y);
    }

    fn bounds(&self) -> Rect {
        let rect = self.panel.get_bounding_client_rect();
        Rect::new(rect.left(), rect.top(), rect.width(), rect.height())
    }

    fn viewport(&self) -> Size {
        Size::new(
            pixels(self.window.inner_width()),
            pixels(self.window.inner_height()),
        )
    }

    fn set_visible(&self, visible: bool) {
        let classes = self.panel.class_list();
        let result = if visible {
            classes.add_1(&self.visible_class)
        } else {
            classes.remove_1(&self.visible_class)
        };
        if let Err(e) = result {
            log::warn!("Failed to toggle tooltip visibility: {:?}", e);
        }
    }
}
