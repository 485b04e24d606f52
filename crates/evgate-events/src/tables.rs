//! Event Type Tables
//!
//! One table per [`EventFamily`]. Codes are small integers starting at zero
//! and never change once published, the WASM side stores them as raw numbers.

use std::fmt;

use crate::EventFamily;

/// A per-family event type code
pub trait EventCode: Copy + Eq + fmt::Debug + fmt::Display + 'static {
    /// Family this table belongs to
    const FAMILY: EventFamily;

    /// Every member in code order
    fn all() -> &'static [Self];

    /// Numeric code
    fn code(self) -> u32;

    /// Symbolic name
    fn name(self) -> &'static str;

    /// Platform event name used for listener registration
    fn event_name(self) -> &'static str;

    /// Look up a member by numeric code
    fn from_code(code: u32) -> Option<Self>;

    /// Look up a member by symbolic name
    fn from_name(name: &str) -> Option<Self>;
}

macro_rules! impl_event_code {
    ($ty:ident, $family:expr) => {
        impl EventCode for $ty {
            const FAMILY: EventFamily = $family;

            fn all() -> &'static [Self] {
                $ty::ALL
            }

            fn code(self) -> u32 {
                $ty::code(self)
            }

            fn name(self) -> &'static str {
                $ty::name(self)
            }

            fn event_name(self) -> &'static str {
                $ty::event_name(self)
            }

            fn from_code(code: u32) -> Option<Self> {
                $ty::from_code(code)
            }

            fn from_name(name: &str) -> Option<Self> {
                $ty::from_name(name)
            }
        }
    };
}

code_table! {
    /// Keyboard event types.
    /// Has a one-to-one correspondence to browser events.
    pub enum KeyEventType {
        KeyDown = 0,
        KeyPress = 1,
        KeyUp = 2,
    }
}

code_table! {
    /// Click event types.
    /// Has a one-to-one correspondence to browser events.
    pub enum ClickEventType {
        LeftClick = 0,
        RightClick = 1,
        DoubleClick = 2,
    }
}

code_table! {
    /// Mouse event types.
    /// Has a one-to-one correspondence to browser events.
    pub enum MouseEventType {
        Up = 0,
        Down = 1,
        Move = 2,
        Enter = 3,
        Leave = 4,
    }
}

code_table! {
    /// Touch event types.
    /// Has a one-to-one correspondence to browser events.
    pub enum TouchEventType {
        Start = 0,
        End = 1,
        Move = 2,
        Cancel = 3,
    }
}

code_table! {
    /// Pointer event types.
    /// Has a one-to-one correspondence to browser events.
    pub enum PointerEventType {
        Down = 0,
        Up = 1,
        Move = 2,
        Enter = 3,
        Leave = 4,
        Cancel = 5,
    }
}

impl_event_code!(KeyEventType, EventFamily::Keyboard);
impl_event_code!(ClickEventType, EventFamily::Click);
impl_event_code!(MouseEventType, EventFamily::Mouse);
impl_event_code!(TouchEventType, EventFamily::Touch);
impl_event_code!(PointerEventType, EventFamily::Pointer);

fn name_of<T: EventCode>(code: u32) -> Option<&'static str> {
    T::from_code(code).map(T::name)
}

fn code_of<T: EventCode>(name: &str) -> Option<u32> {
    T::from_name(name).map(T::code)
}

/// Symbolic name of a raw code within a family
pub fn symbolic_name(family: EventFamily, code: u32) -> Option<&'static str> {
    match family {
        EventFamily::Keyboard => name_of::<KeyEventType>(code),
        EventFamily::Click => name_of::<ClickEventType>(code),
        EventFamily::Mouse => name_of::<MouseEventType>(code),
        EventFamily::Touch => name_of::<TouchEventType>(code),
        EventFamily::Pointer => name_of::<PointerEventType>(code),
    }
}

/// Raw code of a symbolic name within a family
pub fn code_for_name(family: EventFamily, name: &str) -> Option<u32> {
    match family {
        EventFamily::Keyboard => code_of::<KeyEventType>(name),
        EventFamily::Click => code_of::<ClickEventType>(name),
        EventFamily::Mouse => code_of::<MouseEventType>(name),
        EventFamily::Touch => code_of::<TouchEventType>(name),
        EventFamily::Pointer => code_of::<PointerEventType>(name),
    }
}
