//! Browser Host
//!
//! [`EventHost`] backed by the real DOM through `web-sys`.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, EventTarget, KeyboardEvent, MouseEvent, Touch, TouchEvent};

use crate::{
    BoundingRect, BridgeError, BridgeResult, EventHost, KeyboardInputEvent, Listener,
    PositionedEvent, TouchListEvent,
};

fn js_error(context: &str, value: JsValue) -> BridgeError {
    BridgeError::Host(format!("{}: {:?}", context, value))
}

fn element_rect(target: Option<EventTarget>) -> Option<BoundingRect> {
    let element = target?.dyn_into::<Element>().ok()?;
    let rect = element.get_bounding_client_rect();
    Some(BoundingRect::from_xywh(rect.x(), rect.y(), rect.width(), rect.height()))
}

impl PositionedEvent for MouseEvent {
    fn client_x(&self) -> f64 {
        MouseEvent::client_x(self) as f64
    }

    fn client_y(&self) -> f64 {
        MouseEvent::client_y(self) as f64
    }

    fn target_rect(&self) -> Option<BoundingRect> {
        element_rect(self.target())
    }
}

impl PositionedEvent for Touch {
    fn client_x(&self) -> f64 {
        Touch::client_x(self) as f64
    }

    fn client_y(&self) -> f64 {
        Touch::client_y(self) as f64
    }

    fn target_rect(&self) -> Option<BoundingRect> {
        element_rect(Touch::target(self))
    }
}

impl TouchListEvent for TouchEvent {
    type Touch = Touch;

    fn changed_touches(&self) -> Vec<Touch> {
        let list = TouchEvent::changed_touches(self);
        (0..list.length()).filter_map(|index| list.get(index)).collect()
    }
}

impl KeyboardInputEvent for KeyboardEvent {
    fn code(&self) -> String {
        KeyboardEvent::code(self)
    }

    fn key(&self) -> String {
        KeyboardEvent::key(self)
    }
}

/// Install a listener on an event target.
///
/// The closure is leaked: DOM listeners live as long as their target.
fn listen<E: JsCast + 'static>(
    target: &EventTarget,
    event_name: &str,
    mut listener: Listener<E>,
) -> BridgeResult<()> {
    let name = event_name.to_string();
    let closure = Closure::wrap(Box::new(move |event: web_sys::Event| match event.dyn_into::<E>() {
        Ok(event) => listener(&event),
        Err(_) => tracing::trace!(event = %name, "unexpected event interface, dropped"),
    }) as Box<dyn FnMut(web_sys::Event)>);

    target
        .add_event_listener_with_callback(event_name, closure.as_ref().unchecked_ref())
        .map_err(|err| js_error("addEventListener failed", err))?;
    closure.forget();
    Ok(())
}

/// Host over a browser document
#[derive(Debug, Clone)]
pub struct WebHost {
    document: Document,
}

impl WebHost {
    /// Use the current window's document
    pub fn new() -> BridgeResult<Self> {
        let document = web_sys::window()
            .ok_or_else(|| BridgeError::Host("no global window".to_string()))?
            .document()
            .ok_or_else(|| BridgeError::Host("window has no document".to_string()))?;
        Ok(Self::with_document(document))
    }

    pub fn with_document(document: Document) -> Self {
        Self { document }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }
}

impl EventHost for WebHost {
    type Target = Element;
    type MouseEvent = MouseEvent;
    type TouchEvent = TouchEvent;
    type KeyboardEvent = KeyboardEvent;

    fn add_target_listener(
        &self,
        target: &Element,
        event_name: &str,
        listener: Listener<MouseEvent>,
    ) -> BridgeResult<()> {
        listen(target, event_name, listener)
    }

    fn add_touch_listener(
        &self,
        target: &Element,
        event_name: &str,
        listener: Listener<TouchEvent>,
    ) -> BridgeResult<()> {
        listen(target, event_name, listener)
    }

    fn add_document_listener(
        &self,
        event_name: &str,
        listener: Listener<KeyboardEvent>,
    ) -> BridgeResult<()> {
        listen(&self.document, event_name, listener)
    }

    fn supports_pointer_events(&self) -> bool {
        supports_pointer_events()
    }
}

/// Whether the browser exposes `PointerEvent`
#[wasm_bindgen(js_name = supportsPointerEvents)]
pub fn supports_pointer_events() -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    js_sys::Reflect::get(&window, &JsValue::from_str("PointerEvent"))
        .map(|value| !value.is_undefined())
        .unwrap_or(false)
}
