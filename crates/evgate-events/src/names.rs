//! Event Name Resolution
//!
//! Maps event type codes to the platform event names passed to
//! `addEventListener`. Sending the code instead of the string avoids copying
//! strings between WASM linear memory and the JS heap.

use std::borrow::Cow;

use crate::{
    ClickEventType, EventCode, EventFamily, KeyEventType, MouseEventType, PointerEventType,
    TouchEventType,
};

const PLACEHOLDER_SUFFIX: &str = " not implemented";

impl KeyEventType {
    /// Platform event name
    pub const fn event_name(self) -> &'static str {
        match self {
            Self::KeyDown => "keydown",
            Self::KeyPress => "keypress",
            Self::KeyUp => "keyup",
        }
    }
}

impl ClickEventType {
    /// Platform event name
    pub const fn event_name(self) -> &'static str {
        match self {
            Self::LeftClick => "click",
            Self::RightClick => "contextmenu",
            Self::DoubleClick => "dblclick",
        }
    }
}

impl MouseEventType {
    /// Platform event name
    pub const fn event_name(self) -> &'static str {
        match self {
            Self::Up => "mouseup",
            Self::Down => "mousedown",
            Self::Move => "mousemove",
            Self::Enter => "mouseenter",
            Self::Leave => "mouseleave",
        }
    }
}

impl TouchEventType {
    /// Platform event name
    pub const fn event_name(self) -> &'static str {
        match self {
            Self::Start => "touchstart",
            Self::End => "touchend",
            Self::Move => "touchmove",
            Self::Cancel => "touchcancel",
        }
    }
}

impl PointerEventType {
    /// Platform event name
    pub const fn event_name(self) -> &'static str {
        match self {
            Self::Down => "pointerdown",
            Self::Up => "pointerup",
            Self::Move => "pointermove",
            Self::Enter => "pointerenter",
            Self::Leave => "pointerleave",
            Self::Cancel => "pointercancel",
        }
    }
}

fn lookup<T: EventCode>(code: u32) -> Option<&'static str> {
    T::from_code(code).map(T::event_name)
}

/// Resolve the platform event name for a raw code.
///
/// Unknown codes do not fail. The result is a placeholder naming the family
/// and the raw code, so a registration can still go ahead and the mistake
/// shows up in the listener list and the log.
pub fn resolve_event_name(family: EventFamily, code: u32) -> Cow<'static, str> {
    let resolved = match family {
        EventFamily::Keyboard => lookup::<KeyEventType>(code),
        EventFamily::Click => lookup::<ClickEventType>(code),
        EventFamily::Mouse => lookup::<MouseEventType>(code),
        EventFamily::Touch => lookup::<TouchEventType>(code),
        EventFamily::Pointer => lookup::<PointerEventType>(code),
    };

    match resolved {
        Some(name) => Cow::Borrowed(name),
        None => {
            let placeholder = placeholder_name(family, code);
            tracing::warn!(%family, code, "{}", placeholder);
            Cow::Owned(placeholder)
        }
    }
}

/// Diagnostic name used for codes without a platform event
pub fn placeholder_name(family: EventFamily, code: u32) -> String {
    format!("{} Event #{}{}", family, code, PLACEHOLDER_SUFFIX)
}

/// Check if a name came from [`placeholder_name`]
pub fn is_placeholder_name(name: &str) -> bool {
    name.ends_with(PLACEHOLDER_SUFFIX)
}

fn reverse<T: EventCode>(name: &str) -> Option<(EventFamily, u32)> {
    T::all()
        .iter()
        .find(|member| member.event_name() == name)
        .map(|member| (T::FAMILY, member.code()))
}

/// Find the family and code that resolve to a platform event name
pub fn parse_event_name(name: &str) -> Option<(EventFamily, u32)> {
    reverse::<KeyEventType>(name)
        .or_else(|| reverse::<ClickEventType>(name))
        .or_else(|| reverse::<MouseEventType>(name))
        .or_else(|| reverse::<TouchEventType>(name))
        .or_else(|| reverse::<PointerEventType>(name))
}
