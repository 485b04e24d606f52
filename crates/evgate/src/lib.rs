//! evgate
//!
//! Event bridge between the browser DOM and a WebAssembly consumer.
//!
//! The consumer cannot listen to DOM events itself. It asks the bridge to
//! register listeners by sending small integer codes, and receives every
//! event back as plain numbers through its gates, tagged with the callback id
//! it chose at registration time.
//!
//! ```text
//! consumer ── register_*(code, target, callback_id) ──▶ EventBridge
//!                                                          │ resolve name
//!                                                          ▼
//!                                                     EventHost listener
//!                                                          │ on event: normalize
//!                                                          ▼
//! consumer ◀── *_event_gate(callback_id, code, x, y) ── Forwarder
//! ```
//!
//! Hosts:
//! - [`HeadlessDocument`]: in-memory element tree, works anywhere
//! - `WebHost`: `web-sys` host, only on `wasm32`

mod error;
mod config;
mod geometry;
mod gates;
mod host;
mod forward;
mod registration;
mod bridge;
mod headless;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use error::{BridgeError, BridgeResult};
pub use config::{BridgeConfig, PayloadLayout, DuplicatePolicy};
pub use geometry::BoundingRect;
pub use gates::{EventGates, FnGates, GateSet, KeyPayload, PointerPayload};
pub use host::{EventHost, KeyboardInputEvent, Listener, PositionedEvent, TouchListEvent};
pub use forward::Forwarder;
pub use registration::{ListenerScope, Registration, RegistrationLedger};
pub use bridge::EventBridge;
pub use headless::{
    ElementId, HeadlessDocument, HeadlessKeyboardEvent, HeadlessMouseEvent, HeadlessTouch,
    HeadlessTouchEvent,
};

// Re-export the tables so consumers need a single dependency
pub use evgate_events as events;
pub use evgate_events::{EventFamily, PhysicalKey};

use std::fmt;

/// Opaque registration handle chosen by the consumer.
///
/// The bridge never interprets it and echoes it unchanged on every event
/// forwarded for that registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct CallbackId(pub usize);

impl CallbackId {
    /// Raw value
    pub const fn get(self) -> usize {
        self.0
    }
}

impl From<usize> for CallbackId {
    fn from(value: usize) -> Self {
        Self(value)
    }
}

impl fmt::Display for CallbackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
