//! evgate Events
//!
//! Fixed numeric tables for browser input events.
//!
//! Features:
//! - Event families and per-family event type codes
//! - Physical key codes (layout independent)
//! - Code to platform event name resolution
//! - Physical key normalization with legacy `key` fallback
//!
//! Every table is a plain `#[repr(u8)]` enum, so codes are stable and the
//! mapping cannot change at runtime.

#[macro_use]
mod macros;

mod family;
mod tables;
mod keys;
mod names;
mod normalize;
mod pointer;

pub use family::EventFamily;
pub use tables::{
    EventCode, KeyEventType, ClickEventType, MouseEventType, TouchEventType, PointerEventType,
    symbolic_name, code_for_name,
};
pub use keys::PhysicalKey;
pub use names::{resolve_event_name, placeholder_name, is_placeholder_name, parse_event_name};
pub use normalize::{normalize_physical_key, legacy_key};
pub use pointer::PointerAction;

/// Table lookup error
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EventsError {
    #[error("Unknown {table} code: {code}")]
    UnknownCode { table: &'static str, code: u32 },

    #[error("Unknown {table} name: {name:?}")]
    UnknownName { table: &'static str, name: String },
}
