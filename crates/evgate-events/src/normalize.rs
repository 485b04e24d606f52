//! Physical Key Normalization
//!
//! Resolves a keyboard event to a [`PhysicalKey`]. The `code` field is
//! preferred. Older browsers that don't support `code` only provide `key`,
//! which is converted with best effort and may not consider keyboard layouts
//! perfectly.

use crate::PhysicalKey;

/// Best-effort translation of a logical `key` value to a physical key.
///
/// Covers space, the left Alt/Shift keys, digits and ASCII letters in both
/// cases. Other values return `None`.
pub fn legacy_key(key: &str) -> Option<PhysicalKey> {
    match key {
        " " => Some(PhysicalKey::Space),
        "Alt" => Some(PhysicalKey::AltLeft),
        "Shift" => Some(PhysicalKey::ShiftLeft),
        _ => {
            let mut chars = key.chars();
            let (Some(c), None) = (chars.next(), chars.next()) else {
                return None;
            };
            match c {
                '0'..='9' => PhysicalKey::digit(c as u32 - '0' as u32),
                'a'..='z' | 'A'..='Z' => PhysicalKey::letter(c),
                _ => None,
            }
        }
    }
}

/// Resolve the physical key of a keyboard event.
///
/// Empty strings count as missing fields. Named keys such as `Escape` or
/// `ArrowUp` have the same `key` and `code` value and resolve through either
/// field. `None` means the event must not be forwarded.
pub fn normalize_physical_key(code: Option<&str>, key: Option<&str>) -> Option<PhysicalKey> {
    if let Some(found) = code
        .filter(|code| !code.is_empty())
        .and_then(PhysicalKey::from_name)
    {
        return Some(found);
    }

    let key = key.filter(|key| !key.is_empty())?;
    legacy_key(key).or_else(|| PhysicalKey::from_name(key))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_preferred() {
        assert_eq!(normalize_physical_key(Some("KeyA"), Some("q")), Some(PhysicalKey::KeyA));
        assert_eq!(normalize_physical_key(Some("Numpad4"), Some("4")), Some(PhysicalKey::Numpad4));
    }

    #[test]
    fn test_key_fallback() {
        assert_eq!(
            normalize_physical_key(None, Some("a")),
            normalize_physical_key(Some("KeyA"), None)
        );
        assert_eq!(normalize_physical_key(Some(""), Some("A")), Some(PhysicalKey::KeyA));
        assert_eq!(normalize_physical_key(None, Some(" ")), Some(PhysicalKey::Space));
        assert_eq!(normalize_physical_key(None, Some("Shift")), Some(PhysicalKey::ShiftLeft));
        assert_eq!(normalize_physical_key(None, Some("Alt")), Some(PhysicalKey::AltLeft));
        assert_eq!(normalize_physical_key(None, Some("0")), Some(PhysicalKey::Digit0));
        assert_eq!(normalize_physical_key(None, Some("9")), Some(PhysicalKey::Digit9));
    }

    #[test]
    fn test_named_key_fallback() {
        assert_eq!(normalize_physical_key(None, Some("Escape")), Some(PhysicalKey::Escape));
        assert_eq!(normalize_physical_key(None, Some("ArrowLeft")), Some(PhysicalKey::ArrowLeft));
    }

    #[test]
    fn test_unknown_code_falls_back_to_key() {
        assert_eq!(normalize_physical_key(Some("F13"), Some("b")), Some(PhysicalKey::KeyB));
        assert_eq!(normalize_physical_key(Some("F13"), Some("F13")), None);
    }

    #[test]
    fn test_unrecognized() {
        assert_eq!(normalize_physical_key(None, Some("Ω")), None);
        assert_eq!(normalize_physical_key(None, Some("Control")), None);
        assert_eq!(normalize_physical_key(None, None), None);
        assert_eq!(normalize_physical_key(Some(""), Some("")), None);
        assert_eq!(legacy_key("ab"), None);
    }
}
