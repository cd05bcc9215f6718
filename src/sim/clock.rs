//! Frame clock
//!
//! Turns host frame timestamps (milliseconds) into a clamped simulation step
//! so a stalled or suspended tab can't produce one huge jump.

/// Clamped delta-time source
#[derive(Debug, Clone)]
pub struct FrameClock {
    last_ms: Option<f64>,
    max_dt: f32,
}

impl FrameClock {
    /// A negative or NaN `max_dt` collapses to zero
    pub fn new(max_dt: f32) -> Self {
        Self {
            last_ms: None,
            max_dt: max_dt.max(0.0),
        }
    }

    /// Re-anchor so the next delta is measured from `timestamp_ms`
    pub fn anchor(&mut self, timestamp_ms: f64) {
        self.last_ms = Some(timestamp_ms);
    }

    /// Seconds since the previous timestamp, clamped to `[0, max_dt]`
    pub fn delta(&mut self, timestamp_ms: f64) -> f32 {
        let dt = match self.last_ms {
            Some(last) => ((timestamp_ms - last) / 1000.0) as f32,
            None => 0.0,
        };
        self.last_ms = Some(timestamp_ms);
        dt.clamp(0.0, self.max_dt)
    }
}
