//! Wall-clock time source

use std::time::{SystemTime, UNIX_EPOCH};

/// Millisecond wall-clock time source.
///
/// The tracker only ever compares and subtracts these values, so any
/// non-decreasing millisecond counter works. Kept behind a trait so tests can
/// drive the tracker with a scripted clock.
pub trait Clock: Send + Sync {
    /// Current time in epoch milliseconds.
    ///
    /// Expected to be non-decreasing; the tracker clamps gaps rather than
    /// trusting it.
    fn now_ms(&self) -> u64;
}

/// System wall clock (epoch milliseconds).
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as u64
    }
}
