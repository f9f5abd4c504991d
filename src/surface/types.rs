use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Kinds of pointer events a surface can deliver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EventKind {
    Move,
    Click,
}

/// Pointer buttons as reported by the host environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MouseButton {
    Primary,
    Secondary,
    Middle,
    Other(u8),
}

impl MouseButton {
    /// Whether this is the main (left) button, the only one tracked for
    /// clicks.
    pub fn is_primary(self) -> bool {
        matches!(self, MouseButton::Primary)
    }
}

/// One pointer notification delivered by a surface.
///
/// Positions are surface-relative pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum PointerEvent {
    Move { x: i32, y: i32 },
    Click { x: i32, y: i32, button: MouseButton },
}

impl PointerEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            PointerEvent::Move { .. } => EventKind::Move,
            PointerEvent::Click { .. } => EventKind::Click,
        }
    }
}

/// Opaque handle to a listener registration, used for symmetric removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

impl ListenerId {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn raw(self) -> u64 {
        self.0
    }
}

/// Event callback registered on a surface.
pub type EventHandler = Arc<dyn Fn(&PointerEvent) + Send + Sync>;

/// An observed source of pointer events.
///
/// This is the seam to the host environment: something that can hold
/// per-event-kind listeners and deliver [`PointerEvent`]s to them
/// synchronously. After `remove_listener` returns, the removed handler is
/// never invoked again.
pub trait Surface: Send + Sync {
    fn add_listener(&self, kind: EventKind, handler: EventHandler) -> ListenerId;

    fn remove_listener(&self, kind: EventKind, id: ListenerId);
}

/// One or more observation targets.
///
/// A single surface normalizes to a one-element set, mirroring how callers
/// may pass either one target or a list.
#[derive(Clone)]
pub struct SurfaceSet(pub(crate) Vec<Arc<dyn Surface>>);

impl SurfaceSet {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Arc<dyn Surface>> for SurfaceSet {
    fn from(surface: Arc<dyn Surface>) -> Self {
        SurfaceSet(vec![surface])
    }
}

impl From<Vec<Arc<dyn Surface>>> for SurfaceSet {
    fn from(surfaces: Vec<Arc<dyn Surface>>) -> Self {
        SurfaceSet(surfaces)
    }
}
