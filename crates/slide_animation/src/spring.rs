//! Settle spring
//!
//! A unit-mass spring phrased the way settle requests arrive: a response
//! time, a damping ratio and the velocity the finger left behind. The state
//! is kept as displacement from the target so the rest check and the
//! integration both work in panel points.

use std::f32::consts::TAU;

/// Rest tolerance never drops below this, even for tiny moves (points)
const MIN_REST_DISTANCE: f32 = 0.1;

/// Rest tolerance never exceeds this, a half point is invisible on a panel edge
const MAX_REST_DISTANCE: f32 = 0.5;

/// Share of the travel used as rest tolerance between the two bounds
const REST_SHARE: f32 = 0.002;

/// Below this speed (points per second) the edge reads as still
const REST_SPEED: f32 = 5.0;

/// Natural frequency and damping ratio of a settle
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringParams {
    /// Undamped angular frequency (rad/s)
    pub omega: f32,
    /// 1.0 is critical, lower overshoots
    pub damping_ratio: f32,
}

impl SpringParams {
    /// `response` is the period of the undamped oscillation in seconds
    pub fn from_response(response: f32, damping_ratio: f32) -> Self {
        Self {
            omega: TAU / response,
            damping_ratio,
        }
    }

    fn acceleration(&self, displacement: f32, velocity: f32) -> f32 {
        let omega = self.omega;
        -omega * omega * displacement - 2.0 * self.damping_ratio * omega * velocity
    }
}

/// Spring carrying a panel height from where it was released to a snap
#[derive(Clone, Copy, Debug)]
pub struct SettleSpring {
    params: SpringParams,
    target: f32,
    displacement: f32,
    velocity: f32,
    rest_distance: f32,
}

impl SettleSpring {
    /// Start at `from`, heading for `target`, already moving at `velocity`
    pub fn launch(params: SpringParams, from: f32, target: f32, velocity: f32) -> Self {
        let travel = (target - from).abs();
        Self {
            params,
            target,
            displacement: from - target,
            velocity,
            rest_distance: (travel * REST_SHARE).clamp(MIN_REST_DISTANCE, MAX_REST_DISTANCE),
        }
    }

    pub fn value(&self) -> f32 {
        self.target + self.displacement
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    /// Close enough to the target and slow enough to snap onto it
    pub fn is_at_rest(&self) -> bool {
        self.displacement.abs() < self.rest_distance && self.velocity.abs() < REST_SPEED
    }

    /// Advance by `dt` seconds (classic fourth-order Runge-Kutta)
    pub fn step(&mut self, dt: f32) {
        if self.is_at_rest() {
            self.displacement = 0.0;
            self.velocity = 0.0;
            return;
        }

        let (x0, v0) = (self.displacement, self.velocity);
        let derive = |x: f32, v: f32| (v, self.params.acceleration(x, v));

        let (dx1, dv1) = derive(x0, v0);
        let (dx2, dv2) = derive(x0 + dx1 * dt / 2.0, v0 + dv1 * dt / 2.0);
        let (dx3, dv3) = derive(x0 + dx2 * dt / 2.0, v0 + dv2 * dt / 2.0);
        let (dx4, dv4) = derive(x0 + dx3 * dt, v0 + dv3 * dt);

        self.displacement = x0 + dt / 6.0 * (dx1 + 2.0 * (dx2 + dx3) + dx4);
        self.velocity = v0 + dt / 6.0 * (dv1 + 2.0 * (dv2 + dv3) + dv4);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: f32 = 1.0 / 60.0;

    /// Highest value reached while running for `frames`
    fn peak(spring: &mut SettleSpring, frames: usize) -> f32 {
        let mut peak = spring.value();
        for _ in 0..frames {
            spring.step(FRAME);
            peak = peak.max(spring.value());
        }
        peak
    }

    #[test]
    fn test_critical_settle_does_not_overshoot() {
        let params = SpringParams::from_response(0.3, 1.0);
        let mut spring = SettleSpring::launch(params, 400.0, 900.0, 0.0);

        let peak = peak(&mut spring, 120);

        assert!(peak <= 900.0 + MAX_REST_DISTANCE);
        assert!(spring.is_at_rest());
        assert_eq!(spring.value(), 900.0);
    }

    #[test]
    fn test_light_damping_overshoots() {
        let params = SpringParams::from_response(0.3, 0.5);
        let mut spring = SettleSpring::launch(params, 400.0, 900.0, 0.0);

        assert!(peak(&mut spring, 60) > 920.0);
    }

    #[test]
    fn test_release_velocity_carries_forward() {
        let params = SpringParams::from_response(0.4, 1.0);
        let mut resting = SettleSpring::launch(params, 400.0, 700.0, 0.0);
        let mut launched = SettleSpring::launch(params, 400.0, 700.0, 2000.0);

        for _ in 0..3 {
            resting.step(FRAME);
            launched.step(FRAME);
        }

        assert!(launched.value() > resting.value());
    }

    #[test]
    fn test_rest_tolerance_scales_with_travel() {
        let params = SpringParams::from_response(0.3, 1.0);

        // 0.3pt short of a 10pt move is still visible motion
        let mut short = SettleSpring::launch(params, 10.0, 0.0, 0.0);
        short.displacement = 0.3;
        assert!(!short.is_at_rest());

        // The same gap on a 500pt move is not
        let mut long = SettleSpring::launch(params, 500.0, 0.0, 0.0);
        long.displacement = 0.3;
        assert!(long.is_at_rest());
    }

    #[test]
    fn test_large_steps_stay_bounded() {
        let params = SpringParams::from_response(0.3, 1.0);
        let mut spring = SettleSpring::launch(params, 0.0, 1000.0, 0.0);

        for _ in 0..100 {
            spring.step(0.05);
            assert!(spring.value() < 2000.0);
            assert!(spring.value() > -500.0);
        }
    }
}
