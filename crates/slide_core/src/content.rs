//! In-memory content host
//!
//! A [`ContentHost`] without any rendering: it keeps a scroll offset, knows
//! whether a finger is down and estimates release velocity from the finger
//! samples it is fed. Used by the gesture simulator and by tests.

use crate::host::ContentHost;
use crate::velocity::VelocityTracker;

#[derive(Clone, Debug, Default)]
pub struct MemoryContent {
    offset_y: f32,
    tracking: bool,
    tracker: VelocityTracker,
    resets: usize,
}

impl MemoryContent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Finger down at `time_ms`
    pub fn touch_down(&mut self, time_ms: f64) {
        self.tracking = true;
        self.tracker.begin(time_ms);
        tracing::trace!("content: touch down at {:.0}ms", time_ms);
    }

    /// Finger moved by `finger_dy` points in screen space (down is positive)
    ///
    /// Returns the new content offset. Moving the finger up pushes the
    /// content up, so the offset changes by `-finger_dy`.
    pub fn drag(&mut self, finger_dy: f32, time_ms: f64) -> f32 {
        if !self.tracking {
            self.touch_down(time_ms);
        }
        self.tracker.record(finger_dy, time_ms);
        self.offset_y -= finger_dy;
        self.offset_y
    }

    /// Finger lifted; returns the release velocity in screen space
    pub fn release(&mut self, time_ms: f64) -> f32 {
        self.tracking = false;
        self.tracker.release(time_ms)
    }

    /// Apply the momentum target offset decided at drag end
    pub fn settle_offset(&mut self, target_offset: f32) {
        self.offset_y = target_offset;
    }

    /// How many times the panel forced the offset back to zero
    pub fn reset_count(&self) -> usize {
        self.resets
    }
}

impl ContentHost for MemoryContent {
    fn offset_y(&self) -> f32 {
        self.offset_y
    }

    fn reset_offset(&mut self) {
        self.offset_y = 0.0;
        self.resets += 1;
    }

    fn is_tracking(&self) -> bool {
        self.tracking
    }
}
