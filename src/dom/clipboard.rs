//! Clipboard access through `navigator.clipboard` with an `execCommand` fallback.

use js_sys::Reflect;
use swatchtip_core::{ClipboardBackend, ClipboardError};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Clipboard, Document, HtmlDocument, HtmlTextAreaElement, Window};

use super::error::describe;

pub struct DomClipboard {
    window: Window,
    document: Document,
}

impl DomClipboard {
    pub fn new(window: &Window, document: &Document) -> Self {
        Self {
            window: window.clone(),
            document: document.clone(),
        }
    }
}

fn scratch_error(value: JsValue) -> ClipboardError {
    ClipboardError::Scratch(describe(&value))
}

impl ClipboardBackend for DomClipboard {
    type Scratch = HtmlTextAreaElement;

    async fn write_async(&self, text: &str) -> Result<(), ClipboardError> {
        // navigator.clipboard is undefined outside secure contexts
        let clipboard = Reflect::get(&self.window.navigator(), &JsValue::from_str("clipboard"))
            .map_err(|e| ClipboardError::Rejected(describe(&e)))?;
        if clipboard.is_undefined() || clipboard.is_null() {
            return Err(ClipboardError::Unavailable);
        }

        let clipboard: Clipboard = clipboard.unchecked_into();
        JsFuture::from(clipboard.write_text(text))
            .await
            .map_err(|e| ClipboardError::Rejected(describe(&e)))?;
        Ok(())
    }

    fn attach_scratch(&self, text: &str) -> Result<Self::Scratch, ClipboardError> {
        let scratch = self
            .document
            .create_element("textarea")
            .map_err(scratch_error)?
            .dyn_into::<HtmlTextAreaElement>()
            .map_err(|_| ClipboardError::Scratch("created element is not a textarea".into()))?;
        scratch.set_value(text);

        let style = scratch.style();
        for (property, value) in [
            ("position", "fixed"),
            ("left", "-999999px"),
            ("top", "-999999px"),
        ] {
            style.set_property(property, value).map_err(scratch_error)?;
        }

        let body = self
            .document
            .body()
            .ok_or_else(|| ClipboardError::Scratch("document has no body".into()))?;
        body.append_child(&scratch).map_err(scratch_error)?;
        Ok(scratch)
    }

    fn copy_selection(&self, scratch: &Self::Scratch) -> Result<(), ClipboardError> {
        scratch.focus().map_err(scratch_error)?;
        scratch.select();

        let document = self
            .document
            .dyn_ref::<HtmlDocument>()
            .ok_or_else(|| ClipboardError::Scratch("document does not support execCommand".into()))?;
        match document.exec_command("copy") {
            Ok(true) => Ok(()),
            Ok(false) => Err(ClipboardError::CommandRefused),
            Err(e) => Err(ClipboardError::Rejected(describe(&e))),
        }
    }

    fn detach_scratch(&self, scratch: Self::Scratch) {
        scratch.remove();
    }
}
