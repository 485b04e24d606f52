//! Edge case tests for evgate-events
//!
//! Table boundaries, placeholder names and key fallback coverage.

use evgate_events::*;

// ============================================================================
// TABLE BOUNDARIES
// ============================================================================

#[test]
fn test_every_family_round_trips_through_names() {
    for family in EventFamily::ALL {
        let mut code = 0;
        while let Some(name) = symbolic_name(family, code) {
            assert_eq!(code_for_name(family, name), Some(code), "{family}::{name}");
            code += 1;
        }
        assert!(code > 0, "{family} table is empty");
    }
}

#[test]
fn test_max_code_is_unmapped() {
    for family in EventFamily::ALL {
        assert_eq!(symbolic_name(family, u32::MAX), None);
        let name = resolve_event_name(family, u32::MAX);
        assert!(name.contains(&u32::MAX.to_string()));
        assert!(name.contains(family.as_str()));
        assert!(is_placeholder_name(&name));
    }
}

#[test]
fn test_resolved_names_parse_back() {
    for family in EventFamily::ALL {
        for code in 0..6 {
            let name = resolve_event_name(family, code);
            if is_placeholder_name(&name) {
                assert_eq!(parse_event_name(&name), None);
            } else {
                assert_eq!(parse_event_name(&name), Some((family, code)));
            }
        }
    }
}

#[test]
fn test_unknown_name_error_message() {
    let err = "Hover".parse::<MouseEventType>().unwrap_err();
    assert_eq!(err.to_string(), "Unknown MouseEventType name: \"Hover\"");
}

#[test]
fn test_codes_convert_to_u32() {
    let raw: u32 = TouchEventType::Move.into();
    assert_eq!(raw, 2);
    assert_eq!(TouchEventType::try_from(raw).map(TouchEventType::event_name), Ok("touchmove"));
}

// ============================================================================
// KEY NORMALIZATION
// ============================================================================

#[test]
fn test_every_letter_both_cases() {
    for c in 'a'..='z' {
        let lower = normalize_physical_key(None, Some(&c.to_string()));
        let upper = normalize_physical_key(None, Some(&c.to_ascii_uppercase().to_string()));
        let code = format!("Key{}", c.to_ascii_uppercase());
        assert_eq!(lower, normalize_physical_key(Some(&code), None));
        assert_eq!(lower, upper);
        assert!(lower.is_some());
    }
}

#[test]
fn test_every_code_name_resolves_to_itself() {
    for key in PhysicalKey::ALL {
        assert_eq!(normalize_physical_key(Some(key.name()), None), Some(*key));
    }
}

#[test]
fn test_non_ascii_keys_are_absent() {
    for key in ["Ω", "é", "ß", "日", "🚀", "Dead", "Unidentified"] {
        assert_eq!(normalize_physical_key(None, Some(key)), None, "{key}");
    }
}

#[test]
fn test_shift_right_only_via_code() {
    assert_eq!(normalize_physical_key(Some("ShiftRight"), Some("Shift")), Some(PhysicalKey::ShiftRight));
    assert_eq!(normalize_physical_key(None, Some("Shift")), Some(PhysicalKey::ShiftLeft));
}
