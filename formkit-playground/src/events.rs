//! Named events with JSON payloads.

use std::collections::HashMap;

use serde_json::Value;
use tracing::trace;

/// Emitted after the schema or data changed; payload is the new state.
pub const STATE_CHANGED: &str = "state.changed";
/// Emitted after the editor selection changed; payload is `{"selection": id}`.
pub const SELECTION_CHANGED: &str = "selection.changed";
/// Emitted once by `destroy`, before listeners are dropped.
pub const DESTROY: &str = "destroy";

/// Handle returned by [`EventBus::on`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Handler = Box<dyn FnMut(&Value) + Send>;

#[derive(Default)]
pub struct EventBus {
    next_id: u64,
    listeners: HashMap<String, Vec<(ListenerId, Handler)>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe `handler` to `event`. Handlers run in subscription order.
    pub fn on<F>(&mut self, event: &str, handler: F) -> ListenerId
    where
        F: FnMut(&Value) + Send + 'static,
    {
        self.next_id += 1;
        let id = ListenerId(self.next_id);
        self.listeners
            .entry(event.to_string())
            .or_default()
            .push((id, Box::new(handler)));
        id
    }

    /// Unsubscribe; returns whether the listener existed.
    pub fn off(&mut self, event: &str, id: ListenerId) -> bool {
        let Some(handlers) = self.listeners.get_mut(event) else {
            return false;
        };
        let before = handlers.len();
        handlers.retain(|(listener, _)| *listener != id);
        before != handlers.len()
    }

    pub fn emit(&mut self, event: &str, payload: &Value) {
        let Some(handlers) = self.listeners.get_mut(event) else {
            return;
        };
        trace!(event, listeners = handlers.len(), "emit");
        for (_, handler) in handlers.iter_mut() {
            handler(payload);
        }
    }

    pub fn clear(&mut self) {
        self.listeners.clear();
    }

    pub fn listener_count(&self, event: &str) -> usize {
        self.listeners.get(event).map_or(0, Vec::len)
    }
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let counts: HashMap<&str, usize> = self
            .listeners
            .iter()
            .map(|(event, handlers)| (event.as_str(), handlers.len()))
            .collect();
        f.debug_struct("EventBus").field("listeners", &counts).finish()
    }
}
