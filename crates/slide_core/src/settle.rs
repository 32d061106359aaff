//! Settle decision
//!
//! Picks the snap position a released panel travels to and shapes the
//! animation that gets it there. Fast releases mid-flight follow the
//! direction of motion to the adjacent position; everything else snaps to
//! the nearer position of the enclosing pair.

use crate::config::PanelConfig;
use crate::host::HeightAnimation;
use crate::snap::{SnapHeights, SnapPosition};

/// Which rule chose the target
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SettleReason {
    /// Release speed above the threshold, target follows the motion
    Fling,
    /// Slow release or resting at an endpoint, nearest position wins
    Nearest,
    /// All positions share one height
    Degenerate,
}

/// Outcome of a settle decision
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SettleDecision {
    pub target: SnapPosition,
    pub animation: HeightAnimation,
    pub reason: SettleReason,
}

/// Decide where a panel released at `height` with `velocity_y` comes to rest
///
/// `velocity_y` is the release velocity in screen space (points/second, y
/// down): positive moves toward collapse, negative toward expansion. Callers
/// must pass finite values.
pub fn resolve_settle(
    snaps: &SnapHeights,
    height: f32,
    velocity_y: f32,
    config: &PanelConfig,
) -> SettleDecision {
    let Some(progress) = snaps.progress(height) else {
        let target = snaps.lowest_position();
        return SettleDecision {
            target,
            animation: HeightAnimation {
                target: snaps.height(target),
                duration: config.default_duration,
                damping_hint: config.settle_damping,
                initial_velocity: 0.0,
            },
            reason: SettleReason::Degenerate,
        };
    };

    let speed = velocity_y.abs();
    if speed > config.velocity_threshold && progress > 0.0 && progress < 1.0 {
        let target = if velocity_y > 0.0 {
            snaps.next_below(height)
        } else {
            snaps.next_above(height)
        };
        let target_height = snaps.height(target);
        let remaining = (target_height - height).abs();

        // speed > threshold >= 0, so the division is safe
        let duration = (remaining / speed).min(config.max_duration);
        let damping_hint = (config.settle_damping * (config.velocity_threshold / speed).sqrt())
            .max(config.fling_min_damping);

        tracing::debug!(
            "settle: fling {:.0}pt/s at progress {:.3} -> {:.1} in {:.3}s",
            velocity_y,
            progress,
            target_height,
            duration
        );

        return SettleDecision {
            target,
            animation: HeightAnimation {
                target: target_height,
                duration,
                damping_hint,
                initial_velocity: -velocity_y,
            },
            reason: SettleReason::Fling,
        };
    }

    let (lower, upper) = snaps.bracket(height);
    let span = snaps.height(upper) - snaps.height(lower);
    let target = if span > 0.0 && (height - snaps.height(lower)) / span >= 0.5 {
        upper
    } else {
        lower
    };

    tracing::debug!(
        "settle: nearest at progress {:.3} (v={:.0}pt/s) -> {:.1}",
        progress,
        velocity_y,
        snaps.height(target)
    );

    SettleDecision {
        target,
        animation: HeightAnimation {
            target: snaps.height(target),
            duration: config.default_duration,
            damping_hint: config.settle_damping,
            initial_velocity: 0.0,
        },
        reason: SettleReason::Nearest,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snap::{SnapCatalog, SnapPoint};

    fn two_stop() -> (SnapHeights, PanelConfig) {
        let config = PanelConfig::default()
            .snap_points([SnapPoint::new("min", 0.4), SnapPoint::new("max", 0.9)])
            .velocity_threshold(100.0);
        let (catalog, _) = config.validate().unwrap();
        (catalog.resolve(1000.0), config)
    }

    #[test]
    fn test_fling_toward_expansion() {
        let (snaps, config) = two_stop();
        let decision = resolve_settle(&snaps, 650.0, -150.0, &config);

        assert_eq!(decision.reason, SettleReason::Fling);
        assert_eq!(decision.target, snaps.highest_position());
        assert_eq!(decision.animation.target, 900.0);
        assert_eq!(decision.animation.initial_velocity, 150.0);
        // 250pt left at 150pt/s is longer than the cap
        assert_eq!(decision.animation.duration, config.max_duration);
    }

    #[test]
    fn test_fling_duration_from_remaining_distance() {
        let (snaps, config) = two_stop();
        let decision = resolve_settle(&snaps, 500.0, 1000.0, &config);

        assert_eq!(decision.animation.target, 400.0);
        assert!((decision.animation.duration - 0.1).abs() < 1e-6);
        assert!(decision.animation.damping_hint < config.settle_damping);
        assert!(decision.animation.damping_hint >= config.fling_min_damping);
    }

    #[test]
    fn test_zero_velocity_picks_nearest() {
        let (snaps, config) = two_stop();
        let decision = resolve_settle(&snaps, 500.0, 0.0, &config);

        assert_eq!(decision.reason, SettleReason::Nearest);
        assert_eq!(decision.animation.target, 400.0);
        assert_eq!(decision.animation.duration, config.default_duration);
        assert_eq!(decision.animation.initial_velocity, 0.0);
    }

    #[test]
    fn test_half_progress_resolves_to_max() {
        let (snaps, config) = two_stop();
        let decision = resolve_settle(&snaps, 650.0, 50.0, &config);
        assert_eq!(decision.animation.target, 900.0);

        let decision = resolve_settle(&snaps, 649.0, -50.0, &config);
        assert_eq!(decision.animation.target, 400.0);
    }

    #[test]
    fn test_threshold_flips_target() {
        let (snaps, config) = two_stop();
        // Progress 0.3, released upward at increasing speed
        for (velocity, expected) in [(-50.0, 400.0), (-100.0, 400.0), (-101.0, 900.0), (-900.0, 900.0)] {
            let decision = resolve_settle(&snaps, 550.0, velocity, &config);
            assert_eq!(decision.animation.target, expected, "velocity {velocity}");
        }
    }

    #[test]
    fn test_fast_release_at_endpoint_stays() {
        let (snaps, config) = two_stop();
        let decision = resolve_settle(&snaps, 900.0, -2000.0, &config);
        assert_eq!(decision.reason, SettleReason::Nearest);
        assert_eq!(decision.animation.target, 900.0);

        let decision = resolve_settle(&snaps, 400.0, 2000.0, &config);
        assert_eq!(decision.animation.target, 400.0);
    }

    #[test]
    fn test_any_height_resolves_to_a_catalog_height() {
        let (snaps, config) = two_stop();
        let mut height = 400.0;
        while height <= 900.0 {
            let target = resolve_settle(&snaps, height, 0.0, &config).animation.target;
            assert!(target == 400.0 || target == 900.0, "height {height} -> {target}");
            height += 7.3;
        }
    }

    #[test]
    fn test_degenerate_catalog_short_circuits() {
        let config = PanelConfig::default();
        let snaps = SnapCatalog::default().resolve(0.0);
        let decision = resolve_settle(&snaps, 0.0, -500.0, &config);

        assert_eq!(decision.reason, SettleReason::Degenerate);
        assert_eq!(decision.animation.target, 0.0);
        assert!(decision.animation.duration.is_finite());
    }

    #[test]
    fn test_three_stop_fling_moves_one_step() {
        let config = PanelConfig::three_stop();
        let (catalog, _) = config.validate().unwrap();
        let snaps = catalog.resolve(1000.0);

        // Resting exactly on `min` and flung upward: next stop is `max`
        let decision = resolve_settle(&snaps, 500.0, -800.0, &config);
        assert_eq!(catalog.name(decision.target), "max");

        // Between close and min, flung downward: `close`
        let decision = resolve_settle(&snaps, 300.0, 800.0, &config);
        assert_eq!(catalog.name(decision.target), "close");

        // Slow release between min and max picks the nearer of that pair
        let decision = resolve_settle(&snaps, 600.0, 0.0, &config);
        assert_eq!(catalog.name(decision.target), "min");
    }

    #[test]
    fn test_stretched_release_returns_to_endpoint() {
        let (snaps, config) = two_stop();
        let decision = resolve_settle(&snaps, 980.0, -600.0, &config);
        assert_eq!(decision.animation.target, 900.0);

        let decision = resolve_settle(&snaps, 320.0, 600.0, &config);
        assert_eq!(decision.animation.target, 400.0);
    }
}
