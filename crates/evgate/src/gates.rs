//! Consumer Gates
//!
//! The gates are the consumer's entry points. The bridge is constructed with
//! them explicitly; it never looks them up globally.

use std::fmt;

use evgate_events::{EventFamily, PhysicalKey};

use crate::CallbackId;

/// Arguments forwarded for click, mouse, touch and pointer events
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerPayload {
    pub callback_id: CallbackId,
    /// `None` when the bridge runs with [`PayloadLayout::CallbackOnly`](crate::PayloadLayout::CallbackOnly)
    pub event_type: Option<u32>,
    /// X relative to the target's bounding rect
    pub x: f32,
    /// Y relative to the target's bounding rect
    pub y: f32,
}

/// Arguments forwarded for keyboard events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPayload {
    pub callback_id: CallbackId,
    pub event_type: Option<u32>,
    pub key: PhysicalKey,
}

/// Set of families a consumer has gates for
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct GateSet(u8);

impl GateSet {
    /// No gates
    pub const NONE: GateSet = GateSet(0);

    /// Every family
    pub const ALL: GateSet = GateSet(0b1_1111);

    const fn bit(family: EventFamily) -> u8 {
        match family {
            EventFamily::Keyboard => 1 << 0,
            EventFamily::Click => 1 << 1,
            EventFamily::Mouse => 1 << 2,
            EventFamily::Touch => 1 << 3,
            EventFamily::Pointer => 1 << 4,
        }
    }

    /// Add a family
    pub const fn with(self, family: EventFamily) -> Self {
        Self(self.0 | Self::bit(family))
    }

    pub const fn contains(self, family: EventFamily) -> bool {
        self.0 & Self::bit(family) != 0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Families in the set
    pub fn families(self) -> impl Iterator<Item = EventFamily> {
        EventFamily::ALL.into_iter().filter(move |family| self.contains(*family))
    }
}

impl FromIterator<EventFamily> for GateSet {
    fn from_iter<I: IntoIterator<Item = EventFamily>>(iter: I) -> Self {
        iter.into_iter().fold(Self::NONE, Self::with)
    }
}

impl fmt::Debug for GateSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.families()).finish()
    }
}

/// Consumer entry points.
///
/// Gates return nothing; forwarding is fire-and-forget. A panic inside a
/// gate is not caught by the bridge and reaches the host's top-level handler.
pub trait EventGates {
    /// Families this consumer accepts. Registering any other family fails.
    fn capabilities(&self) -> GateSet {
        GateSet::ALL
    }

    fn click_event_gate(&self, payload: PointerPayload);

    fn mouse_event_gate(&self, payload: PointerPayload);

    /// Called once per changed touch point
    fn touch_event_gate(&self, payload: PointerPayload);

    fn pointer_event_gate(&self, payload: PointerPayload);

    fn keyboard_event_gate(&self, payload: KeyPayload);
}

type PointerGate = Box<dyn Fn(PointerPayload)>;
type KeyGate = Box<dyn Fn(KeyPayload)>;

/// Gates assembled from closures.
///
/// Only the gates that were provided are advertised in
/// [`capabilities`](EventGates::capabilities).
#[derive(Default)]
pub struct FnGates {
    click: Option<PointerGate>,
    mouse: Option<PointerGate>,
    touch: Option<PointerGate>,
    pointer: Option<PointerGate>,
    keyboard: Option<KeyGate>,
}

impl FnGates {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_click(mut self, gate: impl Fn(PointerPayload) + 'static) -> Self {
        self.click = Some(Box::new(gate));
        self
    }

    pub fn on_mouse(mut self, gate: impl Fn(PointerPayload) + 'static) -> Self {
        self.mouse = Some(Box::new(gate));
        self
    }

    pub fn on_touch(mut self, gate: impl Fn(PointerPayload) + 'static) -> Self {
        self.touch = Some(Box::new(gate));
        self
    }

    pub fn on_pointer(mut self, gate: impl Fn(PointerPayload) + 'static) -> Self {
        self.pointer = Some(Box::new(gate));
        self
    }

    pub fn on_keyboard(mut self, gate: impl Fn(KeyPayload) + 'static) -> Self {
        self.keyboard = Some(Box::new(gate));
        self
    }

    fn call_pointer(gate: &Option<PointerGate>, family: EventFamily, payload: PointerPayload) {
        match gate {
            Some(gate) => gate(payload),
            None => tracing::trace!(%family, "no gate, event discarded"),
        }
    }
}

impl EventGates for FnGates {
    fn capabilities(&self) -> GateSet {
        let mut set = GateSet::NONE;
        if self.keyboard.is_some() {
            set = set.with(EventFamily::Keyboard);
        }
        if self.click.is_some() {
            set = set.with(EventFamily::Click);
        }
        if self.mouse.is_some() {
            set = set.with(EventFamily::Mouse);
        }
        if self.touch.is_some() {
            set = set.with(EventFamily::Touch);
        }
        if self.pointer.is_some() {
            set = set.with(EventFamily::Pointer);
        }
        set
    }

    fn click_event_gate(&self, payload: PointerPayload) {
        Self::call_pointer(&self.click, EventFamily::Click, payload);
    }

    fn mouse_event_gate(&self, payload: PointerPayload) {
        Self::call_pointer(&self.mouse, EventFamily::Mouse, payload);
    }

    fn touch_event_gate(&self, payload: PointerPayload) {
        Self::call_pointer(&self.touch, EventFamily::Touch, payload);
    }

    fn pointer_event_gate(&self, payload: PointerPayload) {
        Self::call_pointer(&self.pointer, EventFamily::Pointer, payload);
    }

    fn keyboard_event_gate(&self, payload: KeyPayload) {
        match &self.keyboard {
            Some(gate) => gate(payload),
            None => tracing::trace!(family = %EventFamily::Keyboard, "no gate, event discarded"),
        }
    }
}
