use crate::surface::types::{EventHandler, EventKind, ListenerId, PointerEvent, Surface};
use parking_lot::Mutex as ParkingMutex;
use std::collections::HashMap;

/// In-process surface with synchronous listener dispatch.
///
/// Embeddings forward host pointer events through [`SimSurface::dispatch`];
/// tests use it to script event sequences. Handlers run to completion inside
/// `dispatch`, so no callback can fire after `remove_listener` returns.
pub struct SimSurface {
    name: String,
    listeners: ParkingMutex<Listeners>,
}

#[derive(Default)]
struct Listeners {
    next_id: u64,
    by_kind: HashMap<EventKind, Vec<(ListenerId, EventHandler)>>,
}

impl SimSurface {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            listeners: ParkingMutex::new(Listeners::default()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Deliver an event to every listener registered for its kind.
    pub fn dispatch(&self, event: &PointerEvent) {
        // Handlers are cloned out of the lock so they may re-enter the
        // surface without deadlocking.
        let handlers: Vec<EventHandler> = {
            let listeners = self.listeners.lock();
            listeners
                .by_kind
                .get(&event.kind())
                .map(|list| list.iter().map(|(_, handler)| handler.clone()).collect())
                .unwrap_or_default()
        };

        for handler in handlers {
            handler(event);
        }
    }

    /// Number of listeners currently registered for `kind`.
    pub fn listener_count(&self, kind: EventKind) -> usize {
        self.listeners
            .lock()
            .by_kind
            .get(&kind)
            .map_or(0, |list| list.len())
    }
}

impl Surface for SimSurface {
    fn add_listener(&self, kind: EventKind, handler: EventHandler) -> ListenerId {
        let mut listeners = self.listeners.lock();
        listeners.next_id += 1;
        let id = ListenerId::new(listeners.next_id);
        listeners.by_kind.entry(kind).or_default().push((id, handler));
        tracing::trace!(surface = %self.name, ?kind, ?id, "listener added");
        id
    }

    fn remove_listener(&self, kind: EventKind, id: ListenerId) {
        let mut listeners = self.listeners.lock();
        if let Some(list) = listeners.by_kind.get_mut(&kind) {
            list.retain(|(listener_id, _)| *listener_id != id);
        }
        tracing::trace!(surface = %self.name, ?kind, ?id, "listener removed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn counting_handler(counter: Arc<AtomicUsize>) -> EventHandler {
        Arc::new(move |_event| {
            counter.fetch_add(1, Ordering::SeqCst);
        })
    }

    #[test]
    fn dispatch_reaches_only_matching_kind() {
        let surface = SimSurface::new("test");
        let moves = Arc::new(AtomicUsize::new(0));
        let clicks = Arc::new(AtomicUsize::new(0));
        surface.add_listener(EventKind::Move, counting_handler(moves.clone()));
        surface.add_listener(EventKind::Click, counting_handler(clicks.clone()));

        surface.dispatch(&PointerEvent::Move { x: 1, y: 2 });
        surface.dispatch(&PointerEvent::Move { x: 3, y: 4 });

        assert_eq!(moves.load(Ordering::SeqCst), 2);
        assert_eq!(clicks.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn removed_listener_is_never_invoked_again() {
        let surface = SimSurface::new("test");
        let hits = Arc::new(AtomicUsize::new(0));
        let id = surface.add_listener(EventKind::Move, counting_handler(hits.clone()));

        surface.dispatch(&PointerEvent::Move { x: 0, y: 0 });
        surface.remove_listener(EventKind::Move, id);
        surface.dispatch(&PointerEvent::Move { x: 0, y: 0 });

        assert_eq!(hits.load(Ordering::SeqCst), 1);
        assert_eq!(surface.listener_count(EventKind::Move), 0);
    }

    #[test]
    fn removal_targets_only_the_given_registration() {
        let surface = SimSurface::new("test");
        let first = Arc::new(AtomicUsize::new(0));
        let second = Arc::new(AtomicUsize::new(0));
        let first_id = surface.add_listener(EventKind::Click, counting_handler(first.clone()));
        surface.add_listener(EventKind::Click, counting_handler(second.clone()));

        surface.remove_listener(EventKind::Click, first_id);
        surface.dispatch(&PointerEvent::Click {
            x: 0,
            y: 0,
            button: crate::surface::MouseButton::Primary,
        });

        assert_eq!(first.load(Ordering::SeqCst), 0);
        assert_eq!(second.load(Ordering::SeqCst), 1);
    }
}
