/// Timestamp-comparison gate suppressing motion samples that arrive faster
/// than a configured minimum spacing.
///
/// Rejected events are dropped entirely, not queued or coalesced.
#[derive(Debug, Clone)]
pub struct ThrottleGate {
    interval_ms: u64,
    last_accepted_ms: Option<u64>,
}

impl ThrottleGate {
    pub fn new(interval_ms: u64) -> Self {
        Self {
            interval_ms,
            last_accepted_ms: None,
        }
    }

    /// Accepts the first event after a reset unconditionally, then any event
    /// at least `interval_ms` after the last accepted one. Accepting updates
    /// the gate; rejecting leaves it untouched.
    pub fn accept(&mut self, now_ms: u64) -> bool {
        match self.last_accepted_ms {
            Some(last) if now_ms.saturating_sub(last) < self.interval_ms => false,
            _ => {
                self.last_accepted_ms = Some(now_ms);
                true
            }
        }
    }

    /// Forget the last accepted timestamp so the next event passes.
    pub fn reset(&mut self) {
        self.last_accepted_ms = None;
    }
}
