//! Release velocity estimation
//!
//! Hosts whose platform does not report a release velocity can feed every
//! movement sample through a [`VelocityTracker`] and read the smoothed
//! velocity when the finger lifts.

/// Smoothing factor for the exponential moving average
const SMOOTHING: f32 = 0.3;

/// Samples further apart than this reset the estimate (seconds)
const MAX_SAMPLE_GAP: f32 = 0.5;

/// Interval assumed for a first sample when the touch-down time is unknown (one 60fps frame)
const FIRST_SAMPLE_INTERVAL: f32 = 1.0 / 60.0;

/// Exponentially smoothed velocity from timestamped deltas
#[derive(Clone, Copy, Debug, Default)]
pub struct VelocityTracker {
    velocity: f32,
    touch_ms: Option<f64>,
    last_time_ms: Option<f64>,
}

impl VelocityTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a gesture with the finger landing at `time_ms`
    pub fn begin(&mut self, time_ms: f64) {
        self.reset();
        self.touch_ms = Some(time_ms);
    }

    /// Record a movement of `delta` units at `time_ms` milliseconds
    pub fn record(&mut self, delta: f32, time_ms: f64) {
        match self.last_time_ms {
            Some(last) => {
                let dt = ((time_ms - last) / 1000.0) as f32;
                if dt > 0.0 && dt < MAX_SAMPLE_GAP {
                    let instant = delta / dt;
                    self.velocity = self.velocity * (1.0 - SMOOTHING) + instant * SMOOTHING;
                } else if dt >= MAX_SAMPLE_GAP {
                    // Finger paused: earlier motion no longer describes the flick
                    self.velocity = delta / dt;
                }
            }
            None => {
                let since_touch = self
                    .touch_ms
                    .map(|touch| ((time_ms - touch) / 1000.0) as f32)
                    .filter(|dt| *dt > 0.0)
                    .unwrap_or(FIRST_SAMPLE_INTERVAL);
                self.velocity = delta / since_touch;
            }
        }
        self.last_time_ms = Some(time_ms);
    }

    /// Current estimate in units per second
    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    /// Read the estimate, decayed to zero if the finger rested before lifting
    pub fn release(&mut self, time_ms: f64) -> f32 {
        let velocity = match self.last_time_ms {
            Some(last) if ((time_ms - last) / 1000.0) as f32 >= MAX_SAMPLE_GAP => 0.0,
            Some(_) => self.velocity,
            None => 0.0,
        };
        self.reset();
        velocity
    }

    pub fn reset(&mut self) {
        self.velocity = 0.0;
        self.touch_ms = None;
        self.last_time_ms = None;
    }
}
