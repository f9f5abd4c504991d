//! Pointer activity tracking
//!
//! Implements the [`Tracker`] that records throttled mouse movement and
//! primary-button clicks from observed surfaces into a time-ordered sample
//! log.

pub mod throttle;
pub mod tracker;
pub mod types;

pub use throttle::ThrottleGate;
pub use tracker::Tracker;
pub use types::{Sample, SampleKind, TrackerConfig, DEFAULT_THROTTLE_INTERVAL_MS};
