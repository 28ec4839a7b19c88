//! Browser implementations of the core traits and the event wiring.
//!
//! Everything here talks to the page through web_sys and only builds for
//! wasm32.

mod binding;
mod clipboard;
mod error;
mod notice;
mod tooltip;

pub use binding::initialize;
pub use clipboard::DomClipboard;
pub use error::DomError;
pub use notice::{BrowserTimer, DomNotice};
pub use tooltip::DomTooltip;

use web_sys::{Document, Element, Window};

use crate::config::{CONFIG_ELEMENT_ID, ConfigError, WidgetConfig};

pub(crate) fn window() -> Result<Window, DomError> {
    web_sys::window().ok_or(DomError::NoWindow)
}

pub(crate) fn document(window: &Window) -> Result<Document, DomError> {
    window.document().ok_or(DomError::NoDocument)
}

pub(crate) fn element_by_id(document: &Document, id: &str) -> Result<Element, DomError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| DomError::MissingElement(id.to_string()))
}

/// Read the embedded configuration. A page without one gets the defaults.
pub fn read_config(document: &Document) -> Result<WidgetConfig, ConfigError> {
    match document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|element| element.text_content())
    {
        Some(json) => WidgetConfig::from_json(&json),
        None => Ok(WidgetConfig::default()),
    }
}
