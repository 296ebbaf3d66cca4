//! Frame-timing telemetry: rolling averages and the host-facing snapshot.
//!
//! Every view tracks its own raw `frametime` / `fps` from wall-clock deltas;
//! [`Telemetry`] smooths the root view's numbers over a small window so the
//! host's stats overlay doesn't flicker.

#[cfg(test)]
#[path = "telemetry_test.rs"]
mod telemetry_test;

use std::collections::VecDeque;

use serde::Serialize;

use crate::consts::TELEMETRY_WINDOW;

/// Fixed-capacity numeric smoothing window, most recent value first.
#[derive(Debug, Clone)]
pub struct RollingAverage {
    values: VecDeque<f64>,
    capacity: usize,
}

impl RollingAverage {
    /// Create a window holding at most `capacity` values. `capacity` must be
    /// at least 1.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self { values: VecDeque::with_capacity(capacity), capacity }
    }

    /// Record a value, evicting the oldest once the window is full.
    pub fn put(&mut self, value: f64) {
        self.values.push_front(value);
        self.values.truncate(self.capacity);
    }

    /// Arithmetic mean of the currently held values.
    ///
    /// Calling this before any `put` is a precondition violation and yields
    /// NaN; it is not defended against.
    #[must_use]
    pub fn get(&self) -> f64 {
        let sum: f64 = self.values.iter().sum();
        sum / self.values.len() as f64
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Raw per-view frame timing, updated at the end of each render.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameTiming {
    /// Milliseconds the last render of this view took, children included.
    pub frametime: f64,
    /// Instantaneous frames per second from the delta between renders.
    pub fps: f64,
    last_frame_ms: f64,
}

impl FrameTiming {
    pub(crate) fn mark_frame(&mut self, start_ms: f64, end_ms: f64) {
        self.frametime = end_ms - start_ms;
        self.fps = 1000.0 / (end_ms - self.last_frame_ms);
        self.last_frame_ms = end_ms;
    }
}

/// Smoothed engine-level timing fed from the root view after each render.
#[derive(Debug, Clone)]
pub struct Telemetry {
    fps: RollingAverage,
    frametime: RollingAverage,
}

impl Telemetry {
    #[must_use]
    pub fn new() -> Self {
        Self {
            fps: RollingAverage::new(TELEMETRY_WINDOW),
            frametime: RollingAverage::new(TELEMETRY_WINDOW),
        }
    }

    /// Fold one frame's timing into the smoothing windows.
    pub fn record(&mut self, timing: &FrameTiming) {
        self.fps.put(timing.fps);
        self.frametime.put(timing.frametime);
    }

    /// Smoothed snapshot for the host, or `None` before the first frame.
    #[must_use]
    pub fn snapshot(&self) -> Option<TelemetrySnapshot> {
        if self.fps.is_empty() {
            return None;
        }
        Some(TelemetrySnapshot {
            fps: self.fps.get(),
            frametime_ms: self.frametime.get(),
        })
    }

    /// Snapshot serialized as JSON for a host stats overlay, `"null"` before
    /// the first frame.
    #[must_use]
    pub fn to_json(&self) -> String {
        match self.snapshot() {
            Some(snapshot) => serde_json::to_string(&snapshot).unwrap_or_else(|_| "null".to_owned()),
            None => "null".to_owned(),
        }
    }
}

impl Default for Telemetry {
    fn default() -> Self {
        Self::new()
    }
}

/// Host-facing smoothed timing numbers.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct TelemetrySnapshot {
    /// Smoothed frames per second.
    pub fps: f64,
    /// Smoothed render duration in milliseconds.
    pub frametime_ms: f64,
}
