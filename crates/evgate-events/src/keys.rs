//! Physical Keys
//!
//! A set of common keys that have the same representation on all platforms.
//! The names match the W3C `KeyboardEvent.code` values, so a `code` string
//! can be looked up directly with [`PhysicalKey::from_name`].
//!
//! Digits, numpad digits and letters occupy contiguous code ranges.

code_table! {
    /// Layout independent keyboard key
    pub enum PhysicalKey {
        Escape = 0,
        ArrowDown = 1,
        ArrowLeft = 2,
        ArrowRight = 3,
        ArrowUp = 4,
        End = 5,
        Home = 6,
        PageDown = 7,
        PageUp = 8,
        Enter = 9,
        Tab = 10,
        Backspace = 11,
        Delete = 12,
        Space = 13,
        AltLeft = 14,
        AltRight = 15,
        ShiftLeft = 16,
        ShiftRight = 17,
        Digit0 = 18,
        Digit1 = 19,
        Digit2 = 20,
        Digit3 = 21,
        Digit4 = 22,
        Digit5 = 23,
        Digit6 = 24,
        Digit7 = 25,
        Digit8 = 26,
        Digit9 = 27,
        Numpad0 = 28,
        Numpad1 = 29,
        Numpad2 = 30,
        Numpad3 = 31,
        Numpad4 = 32,
        Numpad5 = 33,
        Numpad6 = 34,
        Numpad7 = 35,
        Numpad8 = 36,
        Numpad9 = 37,
        KeyA = 38,
        KeyB = 39,
        KeyC = 40,
        KeyD = 41,
        KeyE = 42,
        KeyF = 43,
        KeyG = 44,
        KeyH = 45,
        KeyI = 46,
        KeyJ = 47,
        KeyK = 48,
        KeyL = 49,
        KeyM = 50,
        KeyN = 51,
        KeyO = 52,
        KeyP = 53,
        KeyQ = 54,
        KeyR = 55,
        KeyS = 56,
        KeyT = 57,
        KeyU = 58,
        KeyV = 59,
        KeyW = 60,
        KeyX = 61,
        KeyY = 62,
        KeyZ = 63,
    }
}

impl PhysicalKey {
    /// Digit row key for `0..=9`
    pub fn digit(n: u32) -> Option<Self> {
        if n > 9 {
            return None;
        }
        Self::from_code(Self::Digit0.code() + n)
    }

    /// Numpad key for `0..=9`
    pub fn numpad(n: u32) -> Option<Self> {
        if n > 9 {
            return None;
        }
        Self::from_code(Self::Numpad0.code() + n)
    }

    /// Letter key, case insensitive
    pub fn letter(c: char) -> Option<Self> {
        if !c.is_ascii_alphabetic() {
            return None;
        }
        let offset = c.to_ascii_uppercase() as u32 - 'A' as u32;
        Self::from_code(Self::KeyA.code() + offset)
    }

    /// Check if this is a modifier key
    pub fn is_modifier(self) -> bool {
        matches!(
            self,
            Self::AltLeft | Self::AltRight | Self::ShiftLeft | Self::ShiftRight
        )
    }
}
