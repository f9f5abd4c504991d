use crate::clock::{Clock, SystemClock};
use crate::error::{TrackerError, TrackerResult};
use crate::surface::{EventHandler, EventKind, ListenerId, PointerEvent, Surface, SurfaceSet};
use crate::tracking::throttle::ThrottleGate;
use crate::tracking::types::{Sample, SampleKind, TrackerConfig};
use parking_lot::Mutex as ParkingMutex;
use std::sync::Arc;

/// Log state shared with the event handlers.
struct Inner {
    samples: Vec<Sample>,
    last_sample_ms: u64,
    gate: ThrottleGate,
}

impl Inner {
    fn record(&mut self, x: i32, y: i32, now_ms: u64, kind: SampleKind) {
        // A skewed clock would make the gap negative; clamp to zero instead.
        let gap_ms = now_ms.saturating_sub(self.last_sample_ms);
        self.last_sample_ms = now_ms;

        let sample = Sample { x, y, gap_ms, kind };
        tracing::debug!(%sample, "sample recorded");
        self.samples.push(sample);
    }
}

struct Registration {
    surface_index: usize,
    kind: EventKind,
    id: ListenerId,
}

/// Captures throttled mouse movement and primary-button clicks from a set of
/// observed surfaces into an append-only in-memory log.
///
/// The log holds serializable [`Sample`]s in chronological order, each
/// timestamped relative to the previous one. It is cleared on every
/// [`start`](Tracker::start) and survives [`stop`](Tracker::stop);
/// [`destroy`](Tracker::destroy) releases the surfaces for good.
pub struct Tracker {
    surfaces: Vec<Arc<dyn Surface>>,
    enabled: bool,
    destroyed: bool,
    inner: Arc<ParkingMutex<Inner>>,
    clock: Arc<dyn Clock>,
    // Built once in `new` so removal stays symmetric with registration.
    move_handler: EventHandler,
    click_handler: EventHandler,
    registrations: Vec<Registration>,
}

impl Tracker {
    /// Create a tracker over one or more surfaces, using the system clock.
    ///
    /// Fails with [`TrackerError::InvalidConfiguration`] when the surface set
    /// is empty.
    pub fn new(surfaces: impl Into<SurfaceSet>, config: TrackerConfig) -> TrackerResult<Self> {
        Self::with_clock(surfaces, config, Arc::new(SystemClock))
    }

    /// Create a tracker with an explicit time source.
    pub fn with_clock(
        surfaces: impl Into<SurfaceSet>,
        config: TrackerConfig,
        clock: Arc<dyn Clock>,
    ) -> TrackerResult<Self> {
        let SurfaceSet(surfaces) = surfaces.into();
        if surfaces.is_empty() {
            return Err(TrackerError::InvalidConfiguration(
                "at least one surface is required".to_string(),
            ));
        }

        let inner = Arc::new(ParkingMutex::new(Inner {
            samples: Vec::new(),
            last_sample_ms: 0,
            gate: ThrottleGate::new(config.throttle_interval_ms),
        }));

        let move_handler: EventHandler = {
            let inner = Arc::clone(&inner);
            let clock = Arc::clone(&clock);
            Arc::new(move |event| {
                if let PointerEvent::Move { x, y } = *event {
                    tracing::trace!(x, y, "motion event");
                    let now_ms = clock.now_ms();
                    let mut state = inner.lock();
                    if !state.gate.accept(now_ms) {
                        tracing::trace!(x, y, "motion event dropped by throttle");
                        return;
                    }
                    state.record(x, y, now_ms, SampleKind::Move);
                }
            })
        };

        let click_handler: EventHandler = {
            let inner = Arc::clone(&inner);
            let clock = Arc::clone(&clock);
            Arc::new(move |event| {
                if let PointerEvent::Click { x, y, button } = *event {
                    tracing::trace!(x, y, ?button, "click event");
                    if !button.is_primary() {
                        return;
                    }
                    // Clicks bypass the throttle gate.
                    let now_ms = clock.now_ms();
                    inner.lock().record(x, y, now_ms, SampleKind::Click);
                }
            })
        };

        Ok(Self {
            surfaces,
            enabled: false,
            destroyed: false,
            inner,
            clock,
            move_handler,
            click_handler,
            registrations: Vec::new(),
        })
    }

    /// Begin tracking: clear the log, stamp the session start time and
    /// register motion and click handlers on every observed surface.
    ///
    /// No-op when already tracking. Fails with
    /// [`TrackerError::InvalidState`] after [`destroy`](Tracker::destroy).
    pub fn start(&mut self) -> TrackerResult<()> {
        if self.destroyed {
            return Err(TrackerError::InvalidState(
                "tracker has been destroyed".to_string(),
            ));
        }
        if self.enabled {
            return Ok(());
        }
        self.enabled = true;

        let now_ms = self.clock.now_ms();
        {
            let mut state = self.inner.lock();
            state.samples.clear();
            state.last_sample_ms = now_ms;
            state.gate.reset();
        }

        for (surface_index, surface) in self.surfaces.iter().enumerate() {
            let move_id = surface.add_listener(EventKind::Move, Arc::clone(&self.move_handler));
            let click_id = surface.add_listener(EventKind::Click, Arc::clone(&self.click_handler));
            self.registrations.push(Registration {
                surface_index,
                kind: EventKind::Move,
                id: move_id,
            });
            self.registrations.push(Registration {
                surface_index,
                kind: EventKind::Click,
                id: click_id,
            });
        }

        tracing::info!(surfaces = self.surfaces.len(), "pointer tracking started");
        Ok(())
    }

    /// Stop tracking and unregister all handlers. The log survives.
    ///
    /// No-op when already stopped. Once this returns, no further handler
    /// invocation can occur; delivery is synchronous per surface.
    pub fn stop(&mut self) {
        if !self.enabled {
            return;
        }
        self.enabled = false;

        for registration in self.registrations.drain(..) {
            self.surfaces[registration.surface_index]
                .remove_listener(registration.kind, registration.id);
        }

        let state = self.inner.lock();
        let clicks = state
            .samples
            .iter()
            .filter(|sample| sample.kind == SampleKind::Click)
            .count();
        tracing::info!(
            moves = state.samples.len() - clicks,
            clicks,
            "pointer tracking stopped"
        );
    }

    /// Stop tracking and release the observed surfaces for good.
    ///
    /// Irreversible: a destroyed tracker rejects [`start`](Tracker::start).
    pub fn destroy(&mut self) {
        self.stop();
        self.surfaces.clear();
        self.destroyed = true;
        tracing::info!("pointer tracker destroyed");
    }

    /// Whether tracking is currently active.
    pub fn is_tracking(&self) -> bool {
        self.enabled
    }

    /// Serialized snapshot of the log, in insertion order. Does not clear.
    pub fn events(&self) -> Vec<String> {
        self.inner
            .lock()
            .samples
            .iter()
            .map(|sample| sample.to_string())
            .collect()
    }

    /// Structured snapshot of the log, in insertion order.
    pub fn samples(&self) -> Vec<Sample> {
        self.inner.lock().samples.clone()
    }

    /// Empty the log in place. Tracking state and timestamps are untouched.
    pub fn clear_events(&self) {
        self.inner.lock().samples.clear();
    }
}
