//! Event Families

use std::fmt;

/// Closed set of input event categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventFamily {
    Keyboard,
    Click,
    Mouse,
    Touch,
    Pointer,
}

impl EventFamily {
    /// All families
    pub const ALL: [EventFamily; 5] = [
        Self::Keyboard,
        Self::Click,
        Self::Mouse,
        Self::Touch,
        Self::Pointer,
    ];

    /// Human readable family name
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Keyboard => "Keyboard",
            Self::Click => "Click",
            Self::Mouse => "Mouse",
            Self::Touch => "Touch",
            Self::Pointer => "Pointer",
        }
    }

    /// Whether events of this family carry target-relative coordinates
    pub const fn is_positional(self) -> bool {
        !matches!(self, Self::Keyboard)
    }
}

impl fmt::Display for EventFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
