//! Unified Pointer Actions
//!
//! Touch, mouse, click and pointer events are all handled to ensure maximal
//! compatibility across browsers and devices. A consumer that does not care
//! which family an event came from converts it to a [`PointerAction`].

use crate::{ClickEventType, MouseEventType, PointerEventType, TouchEventType};

/// Family independent pointer action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerAction {
    PrimaryClick,
    SecondaryClick,
    DoubleClick,
    Down,
    Up,
    Move,
    Enter,
    Leave,
}

impl From<ClickEventType> for PointerAction {
    fn from(value: ClickEventType) -> Self {
        match value {
            ClickEventType::LeftClick => Self::PrimaryClick,
            ClickEventType::RightClick => Self::SecondaryClick,
            ClickEventType::DoubleClick => Self::DoubleClick,
        }
    }
}

impl From<MouseEventType> for PointerAction {
    fn from(value: MouseEventType) -> Self {
        match value {
            MouseEventType::Up => Self::Up,
            MouseEventType::Down => Self::Down,
            MouseEventType::Move => Self::Move,
            MouseEventType::Enter => Self::Enter,
            MouseEventType::Leave => Self::Leave,
        }
    }
}

impl From<TouchEventType> for PointerAction {
    fn from(value: TouchEventType) -> Self {
        match value {
            TouchEventType::Start => Self::Down,
            TouchEventType::End => Self::Up,
            TouchEventType::Move => Self::Move,
            TouchEventType::Cancel => Self::Leave,
        }
    }
}

impl From<PointerEventType> for PointerAction {
    fn from(value: PointerEventType) -> Self {
        match value {
            PointerEventType::Down => Self::Down,
            PointerEventType::Up => Self::Up,
            PointerEventType::Move => Self::Move,
            PointerEventType::Enter => Self::Enter,
            PointerEventType::Leave | PointerEventType::Cancel => Self::Leave,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_touch_maps_to_pointer_lifecycle() {
        assert_eq!(PointerAction::from(TouchEventType::Start), PointerAction::Down);
        assert_eq!(PointerAction::from(TouchEventType::Cancel), PointerAction::Leave);
    }

    #[test]
    fn test_cancel_is_leave() {
        assert_eq!(PointerAction::from(PointerEventType::Cancel), PointerAction::Leave);
        assert_eq!(PointerAction::from(ClickEventType::RightClick), PointerAction::SecondaryClick);
    }
}
