//! Named-topic publish/subscribe.
//!
//! Listeners are stored per topic in registration order, and that order is
//! a guaranteed contract: `emit` invokes every listener registered at emit
//! time, in order, over a snapshot — subscribing or removing during an
//! emission never affects the pass already in flight. A one-shot listener
//! unregisters itself *before* it runs, so it fires at most once even if
//! the emission re-enters its own topic.
//!
//! The bus is a cheaply cloneable handle over shared interior state, so
//! listeners can capture a handle back to the bus they live on.

#[cfg(test)]
#[path = "bus_test.rs"]
mod bus_test;

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::input::{KeyEvent, PointerEvent};

/// Topic names emitted by the engine.
pub mod topics {
    /// The primary drawing surface became available.
    pub const CANVAS: &str = "canvas";
    /// The host's input system became available.
    pub const INPUT: &str = "input";
    /// The host finished booting.
    pub const READY: &str = "ready";
    /// The canvas was resized.
    pub const RESIZE: &str = "resize";
    /// A frame completed.
    pub const DRAW: &str = "draw";
    /// The background layer is on the primary surface and the minimap layer
    /// is about to be composited; listeners may draw in between.
    pub const DRAW_BACKGROUND: &str = "draw.background";
    /// The player marker appeared after a frame without one.
    pub const SPAWN: &str = "spawn";
    /// The player marker disappeared after a frame with one.
    pub const DEATH: &str = "death";

    pub const PRE_MOUSE_MOVE: &str = "pre.mouse.move";
    pub const MOUSE_MOVE: &str = "mouse.move";
    pub const PRE_MOUSE_DOWN: &str = "pre.mouse.down";
    pub const MOUSE_DOWN: &str = "mouse.down";
    pub const PRE_MOUSE_UP: &str = "pre.mouse.up";
    pub const MOUSE_UP: &str = "mouse.up";
    pub const PRE_KEY_DOWN: &str = "pre.key.down";
    pub const KEY_DOWN: &str = "key.down";
    pub const PRE_KEY_UP: &str = "pre.key.up";
    pub const KEY_UP: &str = "key.up";
}

/// Payload delivered to listeners.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Payload {
    /// Lifecycle topics carry no data.
    #[default]
    None,
    /// Mouse topics carry the gated pointer event.
    Pointer(PointerEvent),
    /// Key topics carry the gated key event.
    Key(KeyEvent),
}

/// Handle identifying one registered listener on one topic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Callback = Rc<RefCell<dyn FnMut(&Payload)>>;

struct Listener {
    id: ListenerId,
    once: bool,
    cb: Callback,
}

#[derive(Default)]
struct Inner {
    topics: HashMap<String, Vec<Listener>>,
    next_id: u64,
}

/// Cloneable handle to a shared event bus.
#[derive(Clone, Default)]
pub struct EventBus {
    inner: Rc<RefCell<Inner>>,
}

impl EventBus {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `cb` under `topic`. Listeners fire in registration order.
    pub fn on(&self, topic: &str, cb: impl FnMut(&Payload) + 'static) -> ListenerId {
        self.subscribe(topic, cb, false)
    }

    /// Register `cb` to fire at most once, then unregister itself.
    pub fn once(&self, topic: &str, cb: impl FnMut(&Payload) + 'static) -> ListenerId {
        self.subscribe(topic, cb, true)
    }

    fn subscribe(&self, topic: &str, cb: impl FnMut(&Payload) + 'static, once: bool) -> ListenerId {
        let mut inner = self.inner.borrow_mut();
        inner.next_id += 1;
        let id = ListenerId(inner.next_id);
        inner
            .topics
            .entry(topic.to_string())
            .or_default()
            .push(Listener { id, once, cb: Rc::new(RefCell::new(cb)) });
        id
    }

    /// Remove one listener. A topic left without listeners is dropped
    /// entirely rather than kept as an empty set.
    pub fn remove(&self, topic: &str, id: ListenerId) {
        self.try_remove(topic, id);
    }

    /// Remove one listener, reporting whether it was still registered.
    fn try_remove(&self, topic: &str, id: ListenerId) -> bool {
        let mut inner = self.inner.borrow_mut();
        let Some(listeners) = inner.topics.get_mut(topic) else {
            return false;
        };
        let before = listeners.len();
        listeners.retain(|l| l.id != id);
        let removed = listeners.len() != before;
        if listeners.is_empty() {
            inner.topics.remove(topic);
        }
        removed
    }

    /// Remove a topic and every listener registered under it.
    pub fn remove_topic(&self, topic: &str) {
        self.inner.borrow_mut().topics.remove(topic);
    }

    /// Invoke every listener currently registered for `topic`, in
    /// registration order, over a snapshot taken now.
    pub fn emit(&self, topic: &str, payload: &Payload) {
        let snapshot: Vec<(ListenerId, bool, Callback)> = {
            let inner = self.inner.borrow();
            match inner.topics.get(topic) {
                Some(listeners) => listeners
                    .iter()
                    .map(|l| (l.id, l.once, Rc::clone(&l.cb)))
                    .collect(),
                None => return,
            }
        };
        for (id, once, cb) in snapshot {
            // A one-shot listener unregisters before running; if a nested
            // emission already consumed it, it must not run again.
            if once && !self.try_remove(topic, id) {
                continue;
            }
            (cb.borrow_mut())(payload);
        }
    }

    /// Number of listeners currently registered for `topic`.
    #[must_use]
    pub fn listener_count(&self, topic: &str) -> usize {
        self.inner.borrow().topics.get(topic).map_or(0, Vec::len)
    }
}
