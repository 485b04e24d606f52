//! Forwarding
//!
//! Turns native events into gate payloads. Coordinates are always relative
//! to the event target's bounding rect, never to the viewport.

use std::rc::Rc;

use evgate_events::{EventFamily, normalize_physical_key};

use crate::{
    CallbackId, EventGates, KeyPayload, KeyboardInputEvent, PayloadLayout, PointerPayload,
    PositionedEvent, TouchListEvent,
};

/// Normalizes native events and calls the consumer's gates
pub struct Forwarder<G: ?Sized> {
    gates: Rc<G>,
    layout: PayloadLayout,
}

impl<G: ?Sized> Clone for Forwarder<G> {
    fn clone(&self) -> Self {
        Self {
            gates: Rc::clone(&self.gates),
            layout: self.layout,
        }
    }
}

impl<G: EventGates + ?Sized> Forwarder<G> {
    pub fn new(gates: Rc<G>, layout: PayloadLayout) -> Self {
        Self { gates, layout }
    }

    /// Consumer gates
    pub fn gates(&self) -> &G {
        &self.gates
    }

    /// Payload layout in use
    pub fn layout(&self) -> PayloadLayout {
        self.layout
    }

    /// Build the payload for a positioned event, `None` if the target has no
    /// bounding rect
    pub fn pointer_payload<E: PositionedEvent + ?Sized>(
        &self,
        event: &E,
        event_type: u32,
        callback_id: CallbackId,
    ) -> Option<PointerPayload> {
        let rect = event.target_rect()?;
        let (x, y) = rect.relative(event.client_x(), event.client_y());
        Some(PointerPayload {
            callback_id,
            event_type: self.layout.event_type(event_type),
            x,
            y,
        })
    }

    /// Forward a click, mouse, pointer or single touch point event.
    ///
    /// Returns whether a gate was called.
    pub fn forward_positioned<E: PositionedEvent + ?Sized>(
        &self,
        family: EventFamily,
        event: &E,
        event_type: u32,
        callback_id: CallbackId,
    ) -> bool {
        let Some(payload) = self.pointer_payload(event, event_type, callback_id) else {
            tracing::debug!(%family, %callback_id, "event target has no bounding rect, dropped");
            return false;
        };

        match family {
            EventFamily::Click => self.gates.click_event_gate(payload),
            EventFamily::Mouse => self.gates.mouse_event_gate(payload),
            EventFamily::Touch => self.gates.touch_event_gate(payload),
            EventFamily::Pointer => self.gates.pointer_event_gate(payload),
            EventFamily::Keyboard => {
                tracing::debug!(%callback_id, "keyboard events carry no coordinates, dropped");
                return false;
            }
        }
        true
    }

    pub fn forward_click<E: PositionedEvent + ?Sized>(&self, event: &E, event_type: u32, callback_id: CallbackId) -> bool {
        self.forward_positioned(EventFamily::Click, event, event_type, callback_id)
    }

    pub fn forward_mouse<E: PositionedEvent + ?Sized>(&self, event: &E, event_type: u32, callback_id: CallbackId) -> bool {
        self.forward_positioned(EventFamily::Mouse, event, event_type, callback_id)
    }

    pub fn forward_pointer<E: PositionedEvent + ?Sized>(&self, event: &E, event_type: u32, callback_id: CallbackId) -> bool {
        self.forward_positioned(EventFamily::Pointer, event, event_type, callback_id)
    }

    /// Forward every changed touch as its own event, in list order.
    ///
    /// Each touch is measured against its own target. Returns the number of
    /// gate calls.
    pub fn forward_touch<E: TouchListEvent + ?Sized>(&self, event: &E, event_type: u32, callback_id: CallbackId) -> usize {
        // No preventDefault here, the browser must still synthesize clicks
        let mut forwarded = 0;
        for touch in event.changed_touches() {
            if self.forward_positioned(EventFamily::Touch, &touch, event_type, callback_id) {
                forwarded += 1;
            }
        }
        forwarded
    }

    /// Forward a keyboard event.
    ///
    /// Keys without a [`PhysicalKey`](evgate_events::PhysicalKey) are
    /// dropped: an undefined key would corrupt the consumer's key state.
    pub fn forward_keyboard<E: KeyboardInputEvent + ?Sized>(&self, event: &E, event_type: u32, callback_id: CallbackId) -> bool {
        let code = event.code();
        let key = event.key();
        let Some(physical) = normalize_physical_key(Some(code.as_str()), Some(key.as_str())) else {
            tracing::trace!(code = %code, key = %key, %callback_id, "unrecognized key, dropped");
            return false;
        };

        self.gates.keyboard_event_gate(KeyPayload {
            callback_id,
            event_type: self.layout.event_type(event_type),
            key: physical,
        });
        true
    }
}
