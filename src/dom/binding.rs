//! Event wiring between the page and the controller.
//!
//! Each swatch element becomes a [`BoundSwatch`]; one [`Handlers`] value
//! holding the shared controller, clipboard and notice is cloned into every
//! listener.

use std::cell::RefCell;
use std::rc::Rc;

use swatchtip_core::{Controller, CopyNotice, Point, SwatchRecord, copy_to_clipboard};
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Event, EventTarget, MouseEvent, Node, Window};

use super::{BrowserTimer, DomClipboard, DomError, DomNotice, DomTooltip, element_by_id};
use crate::config::{Selectors, WidgetConfig};

/// A swatch element together with its record.
struct BoundSwatch {
    record: SwatchRecord,
    element: Element,
    info: Option<Element>,
}

impl BoundSwatch {
    fn from_element(element: Element, selectors: &Selectors) -> Option<Self> {
        let Some(color) = element.get_attribute(&selectors.color_attribute) else {
            log::warn!(
                "Skipping swatch without a {} attribute",
                selectors.color_attribute
            );
            return None;
        };

        let record = SwatchRecord {
            color,
            description: element.get_attribute(&selectors.description_attribute),
        };
        let info = element
            .query_selector(&selectors.info_trigger)
            .unwrap_or_else(|e| {
                log::warn!("Invalid info trigger selector: {:?}", e);
                None
            });

        Some(Self {
            record,
            element,
            info,
        })
    }

    /// Whether the pointer is over the info trigger.
    fn over_info(&self, document: &Document, event: &MouseEvent) -> bool {
        let Some(info) = &self.info else {
            return false;
        };
        document
            .element_from_point(event.client_x() as f32, event.client_y() as f32)
            .is_some_and(|hit| info.contains(Some(&hit)))
    }

    /// Whether the pointer left onto an element still inside the swatch.
    fn left_onto_descendant(&self, event: &MouseEvent) -> bool {
        event
            .related_target()
            .and_then(|target| target.dyn_into::<Node>().ok())
            .is_some_and(|node| self.element.contains(Some(&node)))
    }
}

fn pointer(event: &MouseEvent) -> Point {
    Point::new(f64::from(event.page_x()), f64::from(event.page_y()))
}

/// Listener state shared by every swatch.
#[derive(Clone)]
struct Handlers {
    document: Document,
    controller: Rc<RefCell<Controller<DomTooltip>>>,
    clipboard: Rc<DomClipboard>,
    notice: Option<Rc<CopyNotice<DomNotice, BrowserTimer>>>,
}

impl Handlers {
    fn bind(&self, swatch: &Rc<BoundSwatch>) -> Result<(), DomError> {
        let element = &swatch.element;
        self.listen(element, "mouseenter", swatch, Handlers::swatch_entered)?;
        self.listen(element, "mousemove", swatch, Handlers::swatch_moved)?;
        self.listen(element, "mouseleave", swatch, Handlers::swatch_left)?;
        self.listen(element, "click", swatch, Handlers::swatch_clicked)?;

        if let Some(info) = &swatch.info {
            self.listen(info, "mouseenter", swatch, Handlers::info_entered)?;
            self.listen(info, "mousemove", swatch, Handlers::info_moved)?;
            self.listen(info, "mouseleave", swatch, Handlers::info_left)?;
        }
        Ok(())
    }

    fn bind_viewport(&self, window: &Window) -> Result<(), DomError> {
        for kind in ["scroll", "resize"] {
            let controller = Rc::clone(&self.controller);
            let closure = Closure::wrap(Box::new(move |_event: Event| {
                controller.borrow_mut().viewport_changed();
            }) as Box<dyn FnMut(Event)>);
            window.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())?;
            closure.forget(); // Listeners live as long as the page
        }
        Ok(())
    }

    fn listen<F>(
        &self,
        target: &EventTarget,
        kind: &str,
        swatch: &Rc<BoundSwatch>,
        handler: F,
    ) -> Result<(), DomError>
    where
        F: Fn(&Handlers, &BoundSwatch, &MouseEvent) + 'static,
    {
        let handlers = self.clone();
        let swatch = Rc::clone(swatch);
        let closure = Closure::wrap(Box::new(move |event: MouseEvent| {
            handler(&handlers, &swatch, &event);
        }) as Box<dyn FnMut(MouseEvent)>);
        target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())?;
        closure.forget(); // Listeners live as long as the page
        Ok(())
    }

    fn swatch_entered(&self, swatch: &BoundSwatch, event: &MouseEvent) {
        let over_info = swatch.over_info(&self.document, event);
        self.controller
            .borrow_mut()
            .swatch_entered(&swatch.record, pointer(event), over_info);
    }

    fn swatch_moved(&self, swatch: &BoundSwatch, event: &MouseEvent) {
        let over_info = swatch.over_info(&self.document, event);
        self.controller
            .borrow_mut()
            .swatch_moved(&swatch.record, pointer(event), over_info);
    }

    fn swatch_left(&self, swatch: &BoundSwatch, event: &MouseEvent) {
        let still_inside = swatch.left_onto_descendant(event);
        self.controller.borrow_mut().swatch_left(still_inside);
    }

    fn swatch_clicked(&self, swatch: &BoundSwatch, event: &MouseEvent) {
        if swatch.over_info(&self.document, event) {
            return;
        }

        let text = swatch.record.copy_text().to_string();
        let clipboard = Rc::clone(&self.clipboard);
        let notice = self.notice.clone();
        wasm_bindgen_futures::spawn_local(async move {
            copy_to_clipboard(&text, clipboard.as_ref(), notice.as_deref()).await;
        });
    }

    fn info_entered(&self, swatch: &BoundSwatch, event: &MouseEvent) {
        event.stop_propagation();
        self.controller
            .borrow_mut()
            .info_entered(&swatch.record, pointer(event));
    }

    fn info_moved(&self, swatch: &BoundSwatch, event: &MouseEvent) {
        event.stop_propagation();
        self.controller
            .borrow_mut()
            .info_moved(&swatch.record, pointer(event));
    }

    fn info_left(&self, _swatch: &BoundSwatch, event: &MouseEvent) {
        event.stop_propagation();
        self.controller.borrow_mut().info_left();
    }
}

/// Locate the widget's elements, bind every swatch and the viewport listeners.
///
/// The color tooltip is required. The description tooltip and the copy
/// confirmation are optional; without them the matching features stay off.
/// Returns the number of swatches bound.
pub fn initialize(
    window: &Window,
    document: &Document,
    config: &WidgetConfig,
) -> Result<usize, DomError> {
    let selectors = &config.selectors;

    let color = DomTooltip::locate(
        window,
        document,
        &selectors.color_tooltip,
        &[
            selectors.hex_value.as_str(),
            selectors.rgb_value.as_str(),
            selectors.hsv_value.as_str(),
        ],
        &selectors.visible_class,
    )?;

    let description = DomTooltip::locate(
        window,
        document,
        &selectors.description_tooltip,
        &[selectors.description_text.as_str()],
        &selectors.visible_class,
    )
    .inspect_err(|e| log::info!("Description tooltip disabled: {}", e))
    .ok();

    let notice = element_by_id(document, &selectors.copy_notice)
        .inspect_err(|e| log::warn!("Copy confirmation disabled: {}", e))
        .ok()
        .map(|element| {
            Rc::new(CopyNotice::with_duration(
                DomNotice::new(element, &selectors.notice_class),
                BrowserTimer::new(window),
                config.notice.duration(),
            ))
        });

    let handlers = Handlers {
        document: document.clone(),
        controller: Rc::new(RefCell::new(Controller::new(
            color,
            description,
            config.layout.tooltip_layout(),
        ))),
        clipboard: Rc::new(DomClipboard::new(window, document)),
        notice,
    };

    let nodes = document.query_selector_all(&selectors.swatch)?;
    let mut bound = 0;
    for index in 0..nodes.length() {
        let Some(element) = nodes
            .item(index)
            .and_then(|node| node.dyn_into::<Element>().ok())
        else {
            continue;
        };
        let Some(swatch) = BoundSwatch::from_element(element, selectors) else {
            continue;
        };
        handlers.bind(&Rc::new(swatch))?;
        bound += 1;
    }

    handlers.bind_viewport(window)?;

    log::info!("Bound {} color swatches", bound);
    Ok(bound)
}
