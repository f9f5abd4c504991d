//! Pointer activity capture.
//!
//! Records user pointer activity (mouse movement and left clicks) on one or
//! more observed surfaces, producing a compact time-ordered sequence of
//! positional samples for later analysis (replay, heuristic bot detection,
//! UX analytics).
//!
//! The crate is a thin event-capture utility: a [`Tracker`] attaches and
//! detaches handlers on [`Surface`]s, throttles high-frequency motion events,
//! timestamps each sample relative to the previous one and serializes samples
//! into simple delimited text records (`"<x>,<y>,<gapMs>,<marker>"`).
//!
//! ```
//! use std::sync::Arc;
//! use pointer_tracker::{PointerEvent, SimSurface, Surface, Tracker, TrackerConfig};
//!
//! let surface = Arc::new(SimSurface::new("canvas"));
//! let mut tracker = Tracker::new(
//!     Arc::clone(&surface) as Arc<dyn Surface>,
//!     TrackerConfig::default(),
//! )?;
//!
//! tracker.start()?;
//! surface.dispatch(&PointerEvent::Move { x: 12, y: 34 });
//! tracker.stop();
//!
//! assert_eq!(tracker.events().len(), 1);
//! # Ok::<(), pointer_tracker::TrackerError>(())
//! ```
//!
//! Transmission, persistence and replay of the captured log are left to
//! callers.

pub mod clock;
pub mod error;
pub mod surface;
pub mod tracking;

pub use clock::{Clock, SystemClock};
pub use error::{TrackerError, TrackerResult};
pub use surface::{
    EventHandler, EventKind, ListenerId, MouseButton, PointerEvent, SimSurface, Surface,
    SurfaceSet,
};
pub use tracking::{Sample, SampleKind, Tracker, TrackerConfig, DEFAULT_THROTTLE_INTERVAL_MS};
