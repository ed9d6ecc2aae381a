// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::string::ToString;
use core::cell::RefCell;

use kurbo::{Point, Vec2};
use understory_pinch_zoom::{
    InvalidTarget, ListenerTable, PinchZoom, PinchZoomConfig, PinchZoomDebugInfo, PinchZoomError,
    TouchEvent, TouchEventKind, TouchList, TouchPoint,
};
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::{AddEventListenerOptions, Element, HtmlElement};

use crate::host::WebImageHost;

type TouchListener = Closure<dyn FnMut(web_sys::TouchEvent)>;

/// A [`PinchZoom`] engine bound to the touch events of an image's container.
///
/// Listeners are registered non-passive so the engine can suppress native
/// scrolling and zooming while it tracks a gesture. Dropping the binding
/// removes them.
#[derive(Debug)]
pub struct WebPinchZoom {
    engine: Rc<RefCell<PinchZoom<WebImageHost>>>,
    container: HtmlElement,
    listeners: ListenerTable<TouchListener>,
}

impl WebPinchZoom {
    /// Attaches to `element`, which must be a loaded image inside a container.
    ///
    /// Construction errors surface as a JavaScript `TypeError`.
    pub fn attach(element: &Element, config: PinchZoomConfig) -> Result<Self, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))?;
        let engine =
            PinchZoom::new(WebImageHost::new(window, element), config).map_err(to_js)?;
        let container = engine
            .host()
            .container()
            .cloned()
            .ok_or_else(|| to_js(InvalidTarget::Detached.into()))?;

        let mut binding = Self {
            engine: Rc::new(RefCell::new(engine)),
            container,
            listeners: ListenerTable::new(),
        };
        for kind in TouchEventKind::ALL {
            binding.bind(kind)?;
        }
        Ok(binding)
    }

    /// Re-measures after the container was resized or the image changed.
    pub fn update(&self) -> Result<(), JsValue> {
        self.engine.borrow_mut().update().map_err(to_js)
    }

    /// Abandons a gesture whose touches were lost.
    pub fn cancel(&self) -> Result<(), JsValue> {
        self.engine.borrow_mut().cancel().map_err(to_js)
    }

    /// Snapshot of the engine state.
    pub fn debug_info(&self) -> Result<PinchZoomDebugInfo, JsValue> {
        self.engine.borrow().debug_info().map_err(to_js)
    }

    /// Unbinds every listener and destroys the engine.
    pub fn destroy(&mut self) -> Result<(), JsValue> {
        self.unbind_all();
        self.engine.borrow_mut().destroy().map_err(to_js)
    }

    fn bind(&mut self, kind: TouchEventKind) -> Result<(), JsValue> {
        let engine = Rc::clone(&self.engine);
        let container = self.container.clone();
        let listener = Closure::wrap(Box::new(move |event: web_sys::TouchEvent| {
            let touches = convert_event(&event, container_origin(&container));
            // A listener firing while the engine is borrowed would be re-entrant.
            let Ok(mut engine) = engine.try_borrow_mut() else {
                return;
            };
            if let Ok(response) = engine.handle(kind, &touches) {
                if response.prevent_default {
                    event.prevent_default();
                }
                if response.stop_propagation {
                    event.stop_propagation();
                }
            }
        }) as Box<dyn FnMut(_)>);

        let options = AddEventListenerOptions::new();
        options.set_passive(false);
        self.container
            .add_event_listener_with_callback_and_add_event_listener_options(
                kind.event_name(),
                listener.as_ref().unchecked_ref(),
                &options,
            )?;
        self.listeners.insert(kind, listener);
        Ok(())
    }

    fn unbind_all(&mut self) {
        for (kind, listener) in self.listeners.drain() {
            let _ = self.container.remove_event_listener_with_callback(
                kind.event_name(),
                listener.as_ref().unchecked_ref(),
            );
        }
    }
}

impl Drop for WebPinchZoom {
    fn drop(&mut self) {
        self.unbind_all();
    }
}

fn to_js(err: PinchZoomError) -> JsValue {
    js_sys::TypeError::new(&err.to_string()).into()
}

/// Viewport position of the container's padding edge, the frame the image is
/// positioned in.
fn container_origin(container: &HtmlElement) -> Vec2 {
    let rect = container.get_bounding_client_rect();
    Vec2::new(
        rect.left() + f64::from(container.client_left()),
        rect.top() + f64::from(container.client_top()),
    )
}

fn convert_list(list: &web_sys::TouchList, origin: Vec2) -> TouchList {
    (0..list.length())
        .filter_map(|index| list.item(index))
        .map(|touch| {
            let client = Point::new(f64::from(touch.client_x()), f64::from(touch.client_y()));
            TouchPoint::new(i64::from(touch.identifier()), client - origin)
        })
        .collect()
}

fn convert_event(event: &web_sys::TouchEvent, origin: Vec2) -> TouchEvent {
    TouchEvent {
        time: event.time_stamp(),
        touches: convert_list(&event.touches(), origin),
        target_touches: convert_list(&event.target_touches(), origin),
        changed_touches: convert_list(&event.changed_touches(), origin),
    }
}
