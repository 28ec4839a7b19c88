//! Copy confirmation element and `setTimeout`-based timer.

use std::time::Duration;

use swatchtip_core::{NoticeSurface, Timer};
use wasm_bindgen::prelude::*;
use web_sys::{Element, Window};

/// The copy confirmation, shown by toggling a class.
#[derive(Clone)]
pub struct DomNotice {
    element: Element,
    class: String,
}

impl DomNotice {
    pub fn new(element: Element, class: &str) -> Self {
        Self {
            element,
            class: class.to_string(),
        }
    }
}

impl NoticeSurface for DomNotice {
    fn set_visible(&self, visible: bool) {
        let classes = self.element.class_list();
        let result = if visible {
            classes.add_1(&self.class)
        } else {
            classes.remove_1(&self.class)
        };
        if let Err(e) = result {
            log::warn!("Failed to toggle copy notice: {:?}", e);
        }
    }
}

/// One-shot timers on the window's event loop.
pub struct BrowserTimer {
    window: Window,
}

impl BrowserTimer {
    pub fn new(window: &Window) -> Self {
        Self {
            window: window.clone(),
        }
    }
}

impl Timer for BrowserTimer {
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) {
        let millis = i32::try_from(delay.as_millis()).unwrap_or(i32::MAX);
        // The closure frees itself after its single call
        let callback = Closure::once_into_js(move || task());
        if let Err(e) = self
            .window
            .set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), millis)
        {
            log::warn!("Failed to schedule timer: {:?}", e);
        }
    }
}
