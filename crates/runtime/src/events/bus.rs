//! Synchronous, re-entrant publish/subscribe channel.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use super::{Event, EventKind};

/// Subscriber callback. Receives the bus so it can publish re-entrantly.
pub type Callback = Rc<dyn Fn(&EventBus, &Event)>;

/// Handle returned by [`EventBus::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

struct Subscriber {
    id: SubscriptionId,
    callback: Callback,
}

#[derive(Default)]
struct BusInner {
    subscribers: RefCell<HashMap<EventKind, Vec<Subscriber>>>,
    history: RefCell<Vec<Event>>,
    next_id: Cell<u64>,
}

/// Per-session event bus.
///
/// Cloning yields another handle to the same bus. Dispatch is synchronous and
/// depth-first: an event published from inside a callback is recorded and
/// fully delivered before the outer `publish` returns.
///
/// Each dispatch pass works on a snapshot of the subscriber list taken when
/// the pass starts. Subscribing or unsubscribing from a callback is safe and
/// takes effect from the next `publish`.
#[derive(Clone, Default)]
pub struct EventBus {
    inner: Rc<BusInner>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `callback` for `kind`. Callbacks run in subscription order.
    pub fn subscribe<F>(&self, kind: EventKind, callback: F) -> SubscriptionId
    where
        F: Fn(&EventBus, &Event) + 'static,
    {
        let id = SubscriptionId(self.inner.next_id.get());
        self.inner.next_id.set(id.0 + 1);
        self.inner
            .subscribers
            .borrow_mut()
            .entry(kind)
            .or_default()
            .push(Subscriber {
                id,
                callback: Rc::new(callback),
            });
        id
    }

    /// Removes a subscription. Returns `false` if it was not registered for `kind`.
    pub fn unsubscribe(&self, kind: EventKind, id: SubscriptionId) -> bool {
        let mut subscribers = self.inner.subscribers.borrow_mut();
        let Some(list) = subscribers.get_mut(&kind) else {
            return false;
        };
        let before = list.len();
        list.retain(|subscriber| subscriber.id != id);
        before != list.len()
    }

    /// Records `event` and delivers it to every current subscriber of its kind.
    pub fn publish(&self, event: Event) {
        let kind = event.kind();
        self.inner.history.borrow_mut().push(event.clone());

        let callbacks: Vec<Callback> = self
            .inner
            .subscribers
            .borrow()
            .get(&kind)
            .map(|list| list.iter().map(|s| Rc::clone(&s.callback)).collect())
            .unwrap_or_default();

        if callbacks.is_empty() {
            tracing::trace!(target: "runtime::events", %kind, "no subscribers");
            return;
        }

        tracing::trace!(
            target: "runtime::events",
            %kind,
            subscribers = callbacks.len(),
            "dispatching"
        );
        for callback in callbacks {
            callback(self, &event);
        }
    }

    /// Published events in publish order, optionally filtered by kind.
    pub fn history(&self, kind: Option<EventKind>) -> Vec<Event> {
        let history = self.inner.history.borrow();
        match kind {
            Some(kind) => history.iter().filter(|e| e.kind() == kind).cloned().collect(),
            None => history.clone(),
        }
    }

    /// Number of recorded events of `kind`.
    pub fn count(&self, kind: EventKind) -> usize {
        self.inner
            .history
            .borrow()
            .iter()
            .filter(|e| e.kind() == kind)
            .count()
    }

    pub fn history_len(&self) -> usize {
        self.inner.history.borrow().len()
    }

    pub fn clear_history(&self) {
        self.inner.history.borrow_mut().clear();
    }

    pub fn subscriber_count(&self, kind: EventKind) -> usize {
        self.inner
            .subscribers
            .borrow()
            .get(&kind)
            .map_or(0, Vec::len)
    }
}

impl fmt::Debug for EventBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let subscribers: usize = self.inner.subscribers.borrow().values().map(Vec::len).sum();
        f.debug_struct("EventBus")
            .field("subscribers", &subscribers)
            .field("history_len", &self.history_len())
            .finish()
    }
}
