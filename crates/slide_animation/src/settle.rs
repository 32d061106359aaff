//! Settle animator
//!
//! Drives a single value (a panel height) toward a target with a spring
//! shaped from a duration and damping hint. The animator is ticked by the
//! host frame loop and can be interrupted at any point, reporting the value
//! that was on screen at that moment.

use crate::spring::{SettleSpring, SpringParams};

/// Shortest spring response the animator will build; keeps RK4 stable at 60fps
const MIN_RESPONSE: f32 = 0.05;

/// Largest integration step, long frames are split into sub-steps
const MAX_STEP: f32 = 1.0 / 120.0;

/// Result of advancing the animator by one frame
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnimationTick {
    /// Nothing is running
    Idle,
    /// Still moving toward the target
    Running,
    /// Reached the target during this tick
    Finished,
}

/// Spring-backed animator for settle transitions
#[derive(Clone, Debug)]
pub struct SettleAnimator {
    value: f32,
    spring: Option<SettleSpring>,
}

impl SettleAnimator {
    pub fn new(initial: f32) -> Self {
        Self {
            value: initial,
            spring: None,
        }
    }

    /// Value currently presented on screen
    pub fn value(&self) -> f32 {
        self.value
    }

    /// Target of the running animation, if any
    pub fn target(&self) -> Option<f32> {
        self.spring.map(|s| s.target())
    }

    pub fn is_animating(&self) -> bool {
        self.spring.is_some()
    }

    /// Jump to a value, cancelling any running animation
    pub fn set_immediate(&mut self, value: f32) {
        self.spring = None;
        self.value = value;
    }

    /// Start animating from the current value toward `target`
    ///
    /// `duration` is used as the spring response, `damping_ratio` shapes
    /// overshoot and `initial_velocity` (units per second) launches the spring
    /// so the motion continues whatever gesture preceded it. A non-positive
    /// duration jumps straight to the target.
    pub fn animate_to(
        &mut self,
        target: f32,
        duration: f32,
        damping_ratio: f32,
        initial_velocity: f32,
    ) {
        if duration.is_nan() || duration <= 0.0 {
            tracing::trace!("settle: zero duration, jumping to {:.1}", target);
            self.set_immediate(target);
            return;
        }

        let params = SpringParams::from_response(duration.max(MIN_RESPONSE), damping_ratio);
        let spring = SettleSpring::launch(params, self.value, target, initial_velocity);

        tracing::trace!(
            "settle: {:.1} -> {:.1} over {:.3}s (zeta={:.2}, v0={:.1})",
            self.value,
            target,
            duration,
            damping_ratio,
            initial_velocity
        );
        self.spring = Some(spring);
    }

    /// Stop the running animation, leaving the value where it is
    ///
    /// Returns the presented value if an animation was interrupted.
    pub fn interrupt(&mut self) -> Option<f32> {
        self.spring.take().map(|_| self.value)
    }

    /// Advance by `dt` seconds
    pub fn tick(&mut self, dt: f32) -> AnimationTick {
        let Some(spring) = self.spring.as_mut() else {
            return AnimationTick::Idle;
        };

        let mut remaining = dt.max(0.0);
        while remaining > 0.0 {
            let step = remaining.min(MAX_STEP);
            spring.step(step);
            remaining -= step;
        }

        if spring.is_at_rest() {
            self.value = spring.target();
            self.spring = None;
            AnimationTick::Finished
        } else {
            self.value = spring.value();
            AnimationTick::Running
        }
    }
}
