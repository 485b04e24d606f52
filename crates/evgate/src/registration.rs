//! Registrations
//!
//! Record of every listener the bridge installed. The listeners themselves
//! belong to the host; the ledger only remembers what was asked for.

use std::borrow::Cow;

use evgate_events::{EventFamily, is_placeholder_name};

use crate::CallbackId;

/// Where a listener is attached
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListenerScope {
    /// On the target element passed by the consumer
    Element,
    /// On the document
    Document,
}

/// One installed listener
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration<T> {
    pub family: EventFamily,
    pub event_type: u32,
    /// Platform event name the listener was installed for
    pub event_name: Cow<'static, str>,
    pub scope: ListenerScope,
    /// Element the listener sits on, `None` at document scope
    pub target: Option<T>,
    pub callback_id: CallbackId,
}

impl<T> Registration<T> {
    /// Listener was installed under a placeholder name and will never fire
    pub fn is_inert(&self) -> bool {
        is_placeholder_name(&self.event_name)
    }
}

impl<T: PartialEq> Registration<T> {
    fn matches(&self, family: EventFamily, event_type: u32, target: Option<&T>, callback_id: CallbackId) -> bool {
        self.family == family
            && self.event_type == event_type
            && self.callback_id == callback_id
            && self.target.as_ref() == target
    }
}

/// Registration storage
#[derive(Debug)]
pub struct RegistrationLedger<T> {
    entries: Vec<Registration<T>>,
}

impl<T> Default for RegistrationLedger<T> {
    fn default() -> Self {
        Self { entries: Vec::new() }
    }
}

impl<T: PartialEq> RegistrationLedger<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a registration
    pub fn record(&mut self, registration: Registration<T>) {
        self.entries.push(registration);
    }

    /// Check if a (family, event type, target, callback id) was registered
    /// before. `target` is `None` for document scope listeners.
    pub fn contains(&self, family: EventFamily, event_type: u32, target: Option<&T>, callback_id: CallbackId) -> bool {
        self.entries
            .iter()
            .any(|entry| entry.matches(family, event_type, target, callback_id))
    }

    /// Number of listeners installed for a (family, event type, target,
    /// callback id)
    pub fn count(&self, family: EventFamily, event_type: u32, target: Option<&T>, callback_id: CallbackId) -> usize {
        self.entries
            .iter()
            .filter(|entry| entry.matches(family, event_type, target, callback_id))
            .count()
    }

    /// Registrations that forward to a callback id
    pub fn for_callback(&self, callback_id: CallbackId) -> impl Iterator<Item = &Registration<T>> {
        self.entries.iter().filter(move |entry| entry.callback_id == callback_id)
    }

    /// All registrations in installation order
    pub fn entries(&self) -> &[Registration<T>] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registration(family: EventFamily, event_type: u32, callback: usize, name: &'static str) -> Registration<u32> {
        Registration {
            family,
            event_type,
            event_name: Cow::Borrowed(name),
            scope: ListenerScope::Element,
            target: Some(1),
            callback_id: CallbackId(callback),
        }
    }

    #[test]
    fn test_ledger_counts() {
        let mut ledger = RegistrationLedger::new();
        ledger.record(registration(EventFamily::Click, 0, 1, "click"));
        ledger.record(registration(EventFamily::Click, 0, 1, "click"));
        ledger.record(registration(EventFamily::Mouse, 2, 1, "mousemove"));

        assert_eq!(ledger.len(), 3);
        assert_eq!(ledger.count(EventFamily::Click, 0, Some(&1), CallbackId(1)), 2);
        assert!(ledger.contains(EventFamily::Mouse, 2, Some(&1), CallbackId(1)));
        assert!(!ledger.contains(EventFamily::Mouse, 2, Some(&1), CallbackId(2)));
        assert_eq!(ledger.for_callback(CallbackId(1)).count(), 3);
    }

    #[test]
    fn test_ledger_keyed_by_target() {
        let mut ledger = RegistrationLedger::new();
        ledger.record(registration(EventFamily::Click, 0, 1, "click"));

        assert!(!ledger.contains(EventFamily::Click, 0, Some(&2), CallbackId(1)));
        assert!(!ledger.contains(EventFamily::Click, 0, None, CallbackId(1)));
        assert_eq!(ledger.count(EventFamily::Click, 0, Some(&2), CallbackId(1)), 0);

        ledger.record(Registration {
            scope: ListenerScope::Document,
            target: None,
            ..registration(EventFamily::Keyboard, 0, 1, "keydown")
        });
        assert!(ledger.contains(EventFamily::Keyboard, 0, None, CallbackId(1)));
    }

    #[test]
    fn test_inert_registration() {
        let inert = Registration {
            event_name: Cow::Owned("Mouse Event #12 not implemented".to_string()),
            ..registration(EventFamily::Mouse, 12, 1, "")
        };
        assert!(inert.is_inert());
        assert!(!registration(EventFamily::Mouse, 0, 1, "mouseup").is_inert());
    }
}
