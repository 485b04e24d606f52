//! Headless Host
//!
//! In-memory implementation of [`EventHost`] for running the bridge outside
//! a browser. Provides:
//! - An element tree with bounding rects
//! - Bubbling dispatch from a target to its ancestors
//! - Document scope keyboard listeners
//!
//! Listeners are snapshotted before a dispatch starts, so listeners added
//! while an event is being handled only see later events.

use std::cell::RefCell;
use std::rc::Rc;

use crate::{
    BoundingRect, BridgeError, BridgeResult, EventHost, KeyboardInputEvent, Listener,
    PositionedEvent, TouchListEvent,
};

/// Element handle (index into the document's element list)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementId(u32);

impl ElementId {
    fn for_index(index: usize) -> BridgeResult<Self> {
        u32::try_from(index)
            .map(Self)
            .map_err(|_| BridgeError::Host(format!("element limit reached at {}", index)))
    }

    fn index(self) -> usize {
        self.0 as usize
    }
}

/// Mouse, click or pointer event
#[derive(Debug, Clone, PartialEq)]
pub struct HeadlessMouseEvent {
    pub target: ElementId,
    pub client_x: f64,
    pub client_y: f64,
    target_rect: Option<BoundingRect>,
}

impl PositionedEvent for HeadlessMouseEvent {
    fn client_x(&self) -> f64 {
        self.client_x
    }

    fn client_y(&self) -> f64 {
        self.client_y
    }

    fn target_rect(&self) -> Option<BoundingRect> {
        self.target_rect
    }
}

/// Single touch point
#[derive(Debug, Clone, PartialEq)]
pub struct HeadlessTouch {
    pub target: ElementId,
    pub client_x: f64,
    pub client_y: f64,
    target_rect: Option<BoundingRect>,
}

impl PositionedEvent for HeadlessTouch {
    fn client_x(&self) -> f64 {
        self.client_x
    }

    fn client_y(&self) -> f64 {
        self.client_y
    }

    fn target_rect(&self) -> Option<BoundingRect> {
        self.target_rect
    }
}

/// Touch event
#[derive(Debug, Clone, PartialEq)]
pub struct HeadlessTouchEvent {
    pub changed_touches: Vec<HeadlessTouch>,
}

impl TouchListEvent for HeadlessTouchEvent {
    type Touch = HeadlessTouch;

    fn changed_touches(&self) -> Vec<HeadlessTouch> {
        self.changed_touches.clone()
    }
}

/// Keyboard event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadlessKeyboardEvent {
    pub target: Option<ElementId>,
    pub code: String,
    pub key: String,
}

impl KeyboardInputEvent for HeadlessKeyboardEvent {
    fn code(&self) -> String {
        self.code.clone()
    }

    fn key(&self) -> String {
        self.key.clone()
    }
}

type Shared<E> = Rc<RefCell<Listener<E>>>;

#[derive(Debug)]
struct ElementNode {
    parent: Option<ElementId>,
    rect: BoundingRect,
    attached: bool,
}

struct TargetListener<E> {
    target: ElementId,
    event_name: String,
    listener: Shared<E>,
}

#[derive(Default)]
struct DocumentState {
    elements: Vec<ElementNode>,
    mouse_listeners: Vec<TargetListener<HeadlessMouseEvent>>,
    touch_listeners: Vec<TargetListener<HeadlessTouchEvent>>,
    document_listeners: Vec<(String, Shared<HeadlessKeyboardEvent>)>,
    pointer_events: bool,
}

impl DocumentState {
    fn node(&self, id: ElementId) -> BridgeResult<&ElementNode> {
        self.elements
            .get(id.index())
            .ok_or_else(|| BridgeError::Host(format!("unknown element {:?}", id)))
    }

    fn is_attached(&self, id: ElementId) -> bool {
        self.elements.get(id.index()).is_some_and(|node| node.attached)
    }

    /// Target followed by its ancestors
    fn propagation_path(&self, target: ElementId) -> Vec<ElementId> {
        let mut path = Vec::new();
        let mut current = Some(target);
        while let Some(id) = current {
            path.push(id);
            current = self.elements.get(id.index()).and_then(|node| node.parent);
        }
        path
    }

    fn rect_of(&self, id: ElementId) -> Option<BoundingRect> {
        self.elements
            .get(id.index())
            .filter(|node| node.attached)
            .map(|node| node.rect)
    }
}

fn collect<E>(listeners: &[TargetListener<E>], path: &[ElementId], event_name: &str) -> Vec<Shared<E>> {
    path.iter()
        .flat_map(|id| {
            listeners
                .iter()
                .filter(move |entry| entry.target == *id && entry.event_name == event_name)
        })
        .map(|entry| Rc::clone(&entry.listener))
        .collect()
}

fn invoke<E>(listeners: Vec<Shared<E>>, event: &E) -> usize {
    let mut invoked = 0;
    for listener in listeners {
        match listener.try_borrow_mut() {
            Ok(mut listener) => {
                (*listener)(event);
                invoked += 1;
            }
            Err(_) => tracing::trace!("listener is already running, skipped"),
        }
    }
    invoked
}

/// In-memory document.
///
/// Cloning yields another handle to the same document.
#[derive(Clone)]
pub struct HeadlessDocument {
    state: Rc<RefCell<DocumentState>>,
}

impl Default for HeadlessDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl HeadlessDocument {
    /// Create an empty document that supports pointer events
    pub fn new() -> Self {
        let state = DocumentState {
            pointer_events: true,
            ..Default::default()
        };
        Self {
            state: Rc::new(RefCell::new(state)),
        }
    }

    /// Create a document without pointer event support
    pub fn without_pointer_events() -> Self {
        let document = Self::new();
        document.state.borrow_mut().pointer_events = false;
        document
    }

    /// Add an element
    pub fn create_element(&self, parent: Option<ElementId>, rect: BoundingRect) -> BridgeResult<ElementId> {
        let mut state = self.state.borrow_mut();
        if let Some(parent) = parent {
            state.node(parent)?;
        }
        let id = ElementId::for_index(state.elements.len())?;
        state.elements.push(ElementNode {
            parent,
            rect,
            attached: true,
        });
        Ok(id)
    }

    /// Move or resize an element
    pub fn set_rect(&self, id: ElementId, rect: BoundingRect) -> BridgeResult<()> {
        let mut state = self.state.borrow_mut();
        state.node(id)?;
        state.elements[id.index()].rect = rect;
        Ok(())
    }

    /// Bounding rect of an attached element
    pub fn rect(&self, id: ElementId) -> Option<BoundingRect> {
        self.state.borrow().rect_of(id)
    }

    /// Detach an element and its descendants.
    ///
    /// Their listeners are dropped; events never reach them again.
    pub fn remove_element(&self, id: ElementId) -> BridgeResult<()> {
        let mut state = self.state.borrow_mut();
        state.node(id)?;

        let removed: Vec<ElementId> = (0..)
            .zip(&state.elements)
            .map(|(index, _)| ElementId(index))
            .filter(|candidate| state.propagation_path(*candidate).contains(&id))
            .collect();
        for element in &removed {
            state.elements[element.index()].attached = false;
        }
        state.mouse_listeners.retain(|entry| !removed.contains(&entry.target));
        state.touch_listeners.retain(|entry| !removed.contains(&entry.target));
        Ok(())
    }

    /// Number of installed listeners
    pub fn listener_count(&self) -> usize {
        let state = self.state.borrow();
        state.mouse_listeners.len() + state.touch_listeners.len() + state.document_listeners.len()
    }

    /// Event names listened for on an element
    pub fn listeners_on(&self, id: ElementId) -> Vec<String> {
        let state = self.state.borrow();
        state
            .mouse_listeners
            .iter()
            .map(|entry| (entry.target, &entry.event_name))
            .chain(state.touch_listeners.iter().map(|entry| (entry.target, &entry.event_name)))
            .filter(|(target, _)| *target == id)
            .map(|(_, name)| name.clone())
            .collect()
    }

    /// Event names listened for at document scope
    pub fn document_listeners(&self) -> Vec<String> {
        let state = self.state.borrow();
        state.document_listeners.iter().map(|(name, _)| name.clone()).collect()
    }

    /// Dispatch a mouse, click or pointer event at viewport coordinates.
    ///
    /// Bubbles from the target to the root. Returns the number of listeners
    /// invoked.
    pub fn dispatch_mouse(&self, event_name: &str, target: ElementId, client_x: f64, client_y: f64) -> usize {
        let (listeners, event) = {
            let state = self.state.borrow();
            if !state.is_attached(target) {
                return 0;
            }
            let path = state.propagation_path(target);
            let event = HeadlessMouseEvent {
                target,
                client_x,
                client_y,
                target_rect: state.rect_of(target),
            };
            (collect(&state.mouse_listeners, &path, event_name), event)
        };
        invoke(listeners, &event)
    }

    /// Dispatch a touch event.
    ///
    /// `touches` are the changed touches as (target, client x, client y).
    /// The event is dispatched on the first touch's target.
    pub fn dispatch_touch(&self, event_name: &str, touches: &[(ElementId, f64, f64)]) -> usize {
        let Some(&(target, _, _)) = touches.first() else {
            return 0;
        };

        let (listeners, event) = {
            let state = self.state.borrow();
            if !state.is_attached(target) {
                return 0;
            }
            let path = state.propagation_path(target);
            let changed_touches = touches
                .iter()
                .map(|&(target, client_x, client_y)| HeadlessTouch {
                    target,
                    client_x,
                    client_y,
                    target_rect: state.rect_of(target),
                })
                .collect();
            (
                collect(&state.touch_listeners, &path, event_name),
                HeadlessTouchEvent { changed_touches },
            )
        };
        invoke(listeners, &event)
    }

    /// Dispatch a keyboard event from a focused element, or from the
    /// document itself when `target` is `None`.
    ///
    /// Keyboard events bubble up to the document, where the listeners sit.
    pub fn dispatch_key(&self, event_name: &str, target: Option<ElementId>, code: &str, key: &str) -> usize {
        let listeners: Vec<_> = {
            let state = self.state.borrow();
            if target.is_some_and(|target| !state.is_attached(target)) {
                return 0;
            }
            state
                .document_listeners
                .iter()
                .filter(|(name, _)| name == event_name)
                .map(|(_, listener)| Rc::clone(listener))
                .collect()
        };

        let event = HeadlessKeyboardEvent {
            target,
            code: code.to_string(),
            key: key.to_string(),
        };
        invoke(listeners, &event)
    }

    fn ensure_attached(&self, target: ElementId) -> BridgeResult<()> {
        if self.state.borrow().is_attached(target) {
            Ok(())
        } else {
            Err(BridgeError::Host(format!("element {:?} is not attached", target)))
        }
    }
}

impl EventHost for HeadlessDocument {
    type Target = ElementId;
    type MouseEvent = HeadlessMouseEvent;
    type TouchEvent = HeadlessTouchEvent;
    type KeyboardEvent = HeadlessKeyboardEvent;

    fn add_target_listener(
        &self,
        target: &ElementId,
        event_name: &str,
        listener: Listener<HeadlessMouseEvent>,
    ) -> BridgeResult<()> {
        self.ensure_attached(*target)?;
        self.state.borrow_mut().mouse_listeners.push(TargetListener {
            target: *target,
            event_name: event_name.to_string(),
            listener: Rc::new(RefCell::new(listener)),
        });
        Ok(())
    }

    fn add_touch_listener(
        &self,
        target: &ElementId,
        event_name: &str,
        listener: Listener<HeadlessTouchEvent>,
    ) -> BridgeResult<()> {
        self.ensure_attached(*target)?;
        self.state.borrow_mut().touch_listeners.push(TargetListener {
            target: *target,
            event_name: event_name.to_string(),
            listener: Rc::new(RefCell::new(listener)),
        });
        Ok(())
    }

    fn add_document_listener(
        &self,
        event_name: &str,
        listener: Listener<HeadlessKeyboardEvent>,
    ) -> BridgeResult<()> {
        self.state
            .borrow_mut()
            .document_listeners
            .push((event_name.to_string(), Rc::new(RefCell::new(listener))));
        Ok(())
    }

    fn supports_pointer_events(&self) -> bool {
        self.state.borrow().pointer_events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn rect(x: f64, y: f64) -> BoundingRect {
        BoundingRect::from_xywh(x, y, 100.0, 100.0)
    }

    #[test]
    fn test_bubbling_dispatch() {
        let document = HeadlessDocument::new();
        let root = document.create_element(None, rect(0.0, 0.0)).unwrap();
        let child = document.create_element(Some(root), rect(10.0, 10.0)).unwrap();

        let seen = Rc::new(Cell::new(None));
        let sink = seen.clone();
        document
            .add_target_listener(&root, "click", Box::new(move |event: &HeadlessMouseEvent| {
                sink.set(Some((event.target, event.target_rect())));
            }))
            .unwrap();

        assert_eq!(document.dispatch_mouse("click", child, 20.0, 20.0), 1);
        assert_eq!(seen.get(), Some((child, Some(rect(10.0, 10.0)))));
        assert_eq!(document.dispatch_mouse("dblclick", child, 20.0, 20.0), 0);
    }

    #[test]
    fn test_removed_element_stops_listening() {
        let document = HeadlessDocument::new();
        let root = document.create_element(None, rect(0.0, 0.0)).unwrap();
        let child = document.create_element(Some(root), rect(0.0, 0.0)).unwrap();
        document.add_target_listener(&child, "mousemove", Box::new(|_: &HeadlessMouseEvent| {})).unwrap();
        assert_eq!(document.listener_count(), 1);

        document.remove_element(root).unwrap();
        assert_eq!(document.listener_count(), 0);
        assert_eq!(document.dispatch_mouse("mousemove", child, 1.0, 1.0), 0);
        assert!(document.rect(child).is_none());
        assert!(document.add_target_listener(&child, "mouseup", Box::new(|_: &HeadlessMouseEvent| {})).is_err());
    }

    #[test]
    fn test_unknown_parent() {
        let document = HeadlessDocument::new();
        assert!(matches!(
            document.create_element(Some(ElementId(4)), rect(0.0, 0.0)),
            Err(BridgeError::Host(_))
        ));
    }

    #[test]
    fn test_listener_added_during_dispatch_waits() {
        let document = HeadlessDocument::new();
        let inner = document.clone();
        document
            .add_document_listener("keydown", Box::new(move |_: &HeadlessKeyboardEvent| {
                inner.add_document_listener("keydown", Box::new(|_: &HeadlessKeyboardEvent| {})).unwrap();
            }))
            .unwrap();

        assert_eq!(document.dispatch_key("keydown", None, "KeyA", "a"), 1);
        assert_eq!(document.dispatch_key("keydown", None, "KeyA", "a"), 2);
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn test_element_id_overflow() {
        assert_eq!(ElementId::for_index(7).unwrap(), ElementId(7));
        assert_eq!(ElementId::for_index(u32::MAX as usize).unwrap(), ElementId(u32::MAX));
        assert!(matches!(
            ElementId::for_index(u32::MAX as usize + 1),
            Err(BridgeError::Host(_))
        ));
    }

    #[test]
    fn test_pointer_support_flag() {
        assert!(HeadlessDocument::new().supports_pointer_events());
        assert!(!HeadlessDocument::without_pointer_events().supports_pointer_events());
    }
}
