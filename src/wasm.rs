use wasm_bindgen::prelude::*;
use web_sys::Event;

use crate::config::{LogLevel, WidgetConfig};
use crate::dom::{self, DomError};

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    if let Err(e) = when_ready(boot) {
        web_sys::console::error_1(&format!("swatchtip failed to start: {}", e).into());
    }
}

/// Run `task` once the document has been parsed.
fn when_ready(task: fn()) -> Result<(), DomError> {
    let document = dom::document(&dom::window()?)?;
    if document.ready_state() != "loading" {
        task();
        return Ok(());
    }

    let closure = Closure::once(move |_event: Event| task());
    document
        .add_event_listener_with_callback("DOMContentLoaded", closure.as_ref().unchecked_ref())?;
    closure.forget(); // Don't drop the closure
    Ok(())
}

fn boot() {
    // The logger may not be installed yet, report straight to the console
    if let Err(e) = try_boot() {
        web_sys::console::error_1(&format!("swatchtip initialization failed: {}", e).into());
    }
}

fn try_boot() -> Result<(), DomError> {
    let window = dom::window()?;
    let document = dom::document(&window)?;

    let (config, config_error) = match dom::read_config(&document) {
        Ok(config) => (config, None),
        Err(e) => (WidgetConfig::default(), Some(e)),
    };

    init_logging(config.log_level);
    if let Some(e) = config_error {
        log::warn!("Ignoring invalid configuration: {}", e);
    }

    dom::initialize(&window, &document, &config)?;
    Ok(())
}

fn init_logging(level: LogLevel) {
    if console_log::init_with_level(level.to_level()).is_err() {
        web_sys::console::warn_1(&"swatchtip: logger was already initialized".into());
    }
}
