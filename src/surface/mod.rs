//! Observed surfaces and the pointer events they deliver
//!
//! A [`Surface`] is the tracker's view of the host environment: a place to
//! register and unregister per-event-kind handlers. [`SimSurface`] is an
//! in-process implementation with synchronous dispatch.

pub mod sim;
pub mod types;

pub use sim::SimSurface;
pub use types::{EventHandler, EventKind, ListenerId, MouseButton, PointerEvent, Surface, SurfaceSet};
