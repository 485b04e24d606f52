//! Bridge Errors

use evgate_events::EventFamily;

use crate::CallbackId;

/// Registration error
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BridgeError {
    #[error("Consumer provides no {0} gate")]
    GateUnavailable(EventFamily),

    #[error("Duplicate {family} registration: event type {event_type}, callback {callback_id}")]
    DuplicateRegistration {
        family: EventFamily,
        event_type: u32,
        callback_id: CallbackId,
    },

    #[error("Host error: {0}")]
    Host(String),
}

/// Result type for bridge operations
pub type BridgeResult<T> = Result<T, BridgeError>;
