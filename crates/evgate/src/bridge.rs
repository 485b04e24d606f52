//! Event Bridge
//!
//! Registration entry points called by the consumer.

use std::borrow::Cow;
use std::rc::Rc;

use evgate_events::{EventFamily, resolve_event_name};

use crate::{
    BridgeConfig, BridgeError, BridgeResult, CallbackId, DuplicatePolicy, EventGates, EventHost,
    Forwarder, ListenerScope, Registration, RegistrationLedger,
};

/// Installs native listeners on a host and forwards their events to the
/// consumer's gates.
///
/// Each registration installs exactly one listener. The listener captures
/// the event type and callback id by value; they cannot change afterwards.
/// Listeners are never removed by the bridge.
pub struct EventBridge<H: EventHost, G: EventGates + ?Sized + 'static> {
    host: H,
    forwarder: Forwarder<G>,
    config: BridgeConfig,
    ledger: RegistrationLedger<H::Target>,
}

impl<H: EventHost, G: EventGates + 'static> EventBridge<H, G> {
    /// Create a bridge that owns its gates
    pub fn new(host: H, gates: G, config: BridgeConfig) -> Self {
        Self::with_shared_gates(host, Rc::new(gates), config)
    }
}

impl<H: EventHost, G: EventGates + ?Sized + 'static> EventBridge<H, G> {
    /// Create a bridge with gates shared with the caller
    pub fn with_shared_gates(host: H, gates: Rc<G>, config: BridgeConfig) -> Self {
        Self {
            host,
            forwarder: Forwarder::new(gates, config.payload),
            config,
            ledger: RegistrationLedger::new(),
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn config(&self) -> &BridgeConfig {
        &self.config
    }

    /// Registrations made so far
    pub fn registrations(&self) -> &RegistrationLedger<H::Target> {
        &self.ledger
    }

    /// Whether the host dispatches pointer events. Consumers fall back to
    /// mouse and touch listeners when it does not.
    pub fn supports_pointer_events(&self) -> bool {
        self.host.supports_pointer_events()
    }

    /// Listen for a mouse event on a target
    pub fn register_mouse_listener(
        &mut self,
        event_type: u32,
        target: &H::Target,
        callback_id: CallbackId,
    ) -> BridgeResult<Registration<H::Target>> {
        self.register_positioned(EventFamily::Mouse, event_type, target, callback_id)
    }

    /// Listen for a click event on a target
    pub fn register_click_listener(
        &mut self,
        event_type: u32,
        target: &H::Target,
        callback_id: CallbackId,
    ) -> BridgeResult<Registration<H::Target>> {
        self.register_positioned(EventFamily::Click, event_type, target, callback_id)
    }

    /// Listen for a pointer event on a target
    pub fn register_pointer_listener(
        &mut self,
        event_type: u32,
        target: &H::Target,
        callback_id: CallbackId,
    ) -> BridgeResult<Registration<H::Target>> {
        self.register_positioned(EventFamily::Pointer, event_type, target, callback_id)
    }

    /// Listen for a touch event on a target.
    ///
    /// Every changed touch of a native event is forwarded separately.
    pub fn register_touch_listener(
        &mut self,
        event_type: u32,
        target: &H::Target,
        callback_id: CallbackId,
    ) -> BridgeResult<Registration<H::Target>> {
        let event_name = self.admit(EventFamily::Touch, event_type, Some(target), callback_id)?;

        let forwarder = self.forwarder.clone();
        self.host.add_touch_listener(
            target,
            &event_name,
            Box::new(move |event: &H::TouchEvent| {
                forwarder.forward_touch(event, event_type, callback_id);
            }),
        )?;

        Ok(self.record(EventFamily::Touch, event_type, event_name, Some(target.clone()), callback_id))
    }

    /// Listen for a keyboard event.
    ///
    /// Keyboard listeners always attach at document scope, so events from
    /// any focused element reach them.
    pub fn register_keyboard_listener(
        &mut self,
        event_type: u32,
        callback_id: CallbackId,
    ) -> BridgeResult<Registration<H::Target>> {
        let event_name = self.admit(EventFamily::Keyboard, event_type, None, callback_id)?;

        let forwarder = self.forwarder.clone();
        self.host.add_document_listener(
            &event_name,
            Box::new(move |event: &H::KeyboardEvent| {
                forwarder.forward_keyboard(event, event_type, callback_id);
            }),
        )?;

        Ok(self.record(EventFamily::Keyboard, event_type, event_name, None, callback_id))
    }

    fn register_positioned(
        &mut self,
        family: EventFamily,
        event_type: u32,
        target: &H::Target,
        callback_id: CallbackId,
    ) -> BridgeResult<Registration<H::Target>> {
        let event_name = self.admit(family, event_type, Some(target), callback_id)?;

        let forwarder = self.forwarder.clone();
        self.host.add_target_listener(
            target,
            &event_name,
            Box::new(move |event: &H::MouseEvent| {
                forwarder.forward_positioned(family, event, event_type, callback_id);
            }),
        )?;

        Ok(self.record(family, event_type, event_name, Some(target.clone()), callback_id))
    }

    /// Check gate capabilities and duplicate policy, then resolve the
    /// platform event name. `target` is `None` for document scope.
    fn admit(
        &self,
        family: EventFamily,
        event_type: u32,
        target: Option<&H::Target>,
        callback_id: CallbackId,
    ) -> BridgeResult<Cow<'static, str>> {
        if !self.forwarder.gates().capabilities().contains(family) {
            return Err(BridgeError::GateUnavailable(family));
        }

        if self.config.duplicates == DuplicatePolicy::Reject
            && self.ledger.contains(family, event_type, target, callback_id)
        {
            tracing::warn!(%family, event_type, %callback_id, "duplicate registration rejected");
            return Err(BridgeError::DuplicateRegistration {
                family,
                event_type,
                callback_id,
            });
        }

        Ok(resolve_event_name(family, event_type))
    }

    fn record(
        &mut self,
        family: EventFamily,
        event_type: u32,
        event_name: Cow<'static, str>,
        target: Option<H::Target>,
        callback_id: CallbackId,
    ) -> Registration<H::Target> {
        let scope = match target {
            Some(_) => ListenerScope::Element,
            None => ListenerScope::Document,
        };
        tracing::debug!(%family, event_type, event = %event_name, %callback_id, "listener registered");

        let registration = Registration {
            family,
            event_type,
            event_name,
            scope,
            target,
            callback_id,
        };
        self.ledger.record(registration.clone());
        registration
    }
}
