//! Host Abstraction
//!
//! Abstract interface for the environment that owns DOM targets and
//! dispatches native events. Implementations:
//! - `HeadlessDocument`: in-memory element tree
//! - `WebHost`: the browser DOM through `web-sys` (wasm32 only)

use crate::{BoundingRect, BridgeResult};

/// Native listener callback
pub type Listener<E> = Box<dyn FnMut(&E)>;

/// A native event, or touch point, with viewport coordinates
pub trait PositionedEvent {
    /// X relative to the viewport
    fn client_x(&self) -> f64;

    /// Y relative to the viewport
    fn client_y(&self) -> f64;

    /// Bounding rect of the event's target, `None` when the target is not an
    /// element
    fn target_rect(&self) -> Option<BoundingRect>;
}

/// A native touch event
pub trait TouchListEvent {
    type Touch: PositionedEvent;

    /// Touches that changed in this event, in list order
    fn changed_touches(&self) -> Vec<Self::Touch>;
}

/// A native keyboard event.
///
/// Both fields are empty strings when the browser does not provide them.
pub trait KeyboardInputEvent {
    /// Physical key identifier (`KeyboardEvent.code`)
    fn code(&self) -> String;

    /// Logical key value (`KeyboardEvent.key`)
    fn key(&self) -> String;
}

/// Environment the bridge installs listeners into.
///
/// Installed listeners belong to their target. There is no removal: a
/// listener stops firing when its target is destroyed.
pub trait EventHost {
    /// Element reference passed in by the consumer. Equality identifies
    /// the same element.
    type Target: Clone + PartialEq;

    /// Event type for click, mouse and pointer listeners
    type MouseEvent: PositionedEvent + 'static;

    type TouchEvent: TouchListEvent + 'static;

    type KeyboardEvent: KeyboardInputEvent + 'static;

    /// Add a click, mouse or pointer listener to a target
    fn add_target_listener(
        &self,
        target: &Self::Target,
        event_name: &str,
        listener: Listener<Self::MouseEvent>,
    ) -> BridgeResult<()>;

    /// Add a touch listener to a target
    fn add_touch_listener(
        &self,
        target: &Self::Target,
        event_name: &str,
        listener: Listener<Self::TouchEvent>,
    ) -> BridgeResult<()>;

    /// Add a keyboard listener at document scope
    fn add_document_listener(
        &self,
        event_name: &str,
        listener: Listener<Self::KeyboardEvent>,
    ) -> BridgeResult<()>;

    /// Whether the host dispatches pointer events
    fn supports_pointer_events(&self) -> bool;
}
