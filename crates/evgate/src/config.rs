//! Bridge Configuration

use serde::{Deserialize, Serialize};

/// Shape of the payload handed to the gates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayloadLayout {
    /// Callback id, event type code, then the event arguments
    #[default]
    WithEventType,
    /// Callback id and event arguments only. The consumer knows the event
    /// type from the registration the callback id belongs to.
    CallbackOnly,
}

impl PayloadLayout {
    /// Event type field for a forwarded payload
    pub const fn event_type(self, code: u32) -> Option<u32> {
        match self {
            Self::WithEventType => Some(code),
            Self::CallbackOnly => None,
        }
    }
}

/// What happens when the same (family, event type, callback id) is
/// registered twice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePolicy {
    /// Install another independent listener; the consumer sees each event
    /// once per registration
    #[default]
    Allow,
    /// Fail the registration and install nothing
    Reject,
}

/// Bridge configuration options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BridgeConfig {
    /// Payload shape passed to the gates
    pub payload: PayloadLayout,

    /// Duplicate registration handling
    pub duplicates: DuplicatePolicy,
}

impl BridgeConfig {
    /// Create with default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the payload layout
    pub fn with_payload(mut self, payload: PayloadLayout) -> Self {
        self.payload = payload;
        self
    }

    /// Set the duplicate registration policy
    pub fn with_duplicates(mut self, duplicates: DuplicatePolicy) -> Self {
        self.duplicates = duplicates;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = BridgeConfig::default();
        assert_eq!(config.payload, PayloadLayout::WithEventType);
        assert_eq!(config.duplicates, DuplicatePolicy::Allow);
    }

    #[test]
    fn test_payload_event_type() {
        assert_eq!(PayloadLayout::WithEventType.event_type(3), Some(3));
        assert_eq!(PayloadLayout::CallbackOnly.event_type(3), None);
    }

    #[test]
    fn test_from_json() {
        let config: BridgeConfig = serde_json::from_str(r#"{ "payload": "callback_only" }"#).unwrap();
        assert_eq!(config.payload, PayloadLayout::CallbackOnly);
        assert_eq!(config.duplicates, DuplicatePolicy::Allow);

        let config: BridgeConfig = serde_json::from_str(r#"{ "duplicates": "reject" }"#).unwrap();
        assert_eq!(config, BridgeConfig::new().with_duplicates(DuplicatePolicy::Reject));
    }
}
