//! Panel configuration
//!
//! Every tuning constant of the panel lives here and is passed to the
//! controller at construction. Configurations deserialize from TOML with
//! every field optional, falling back to [`PanelConfig::default`].

use serde::{Deserialize, Serialize};

use crate::error::{PanelError, Result};
use crate::snap::{SnapCatalog, SnapPoint, SnapPosition};

/// Rubber-band behaviour past the lowest and highest positions
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StretchConfig {
    /// Furthest the panel may travel past an endpoint, as a fraction of container height
    pub max_overshoot: f32,
    /// Fraction of finger travel applied once past an endpoint (0.0-1.0)
    pub resistance: f32,
}

impl Default for StretchConfig {
    fn default() -> Self {
        Self {
            max_overshoot: 0.13,
            resistance: 0.3,
        }
    }
}

/// Configuration for a snapping panel
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelConfig {
    /// Snap positions, lowest first
    pub snap_points: Vec<SnapPoint>,
    /// Position the panel moves to when presented
    pub initial_snap: String,
    /// Release speed (points/second) above which a fling picks the target
    pub velocity_threshold: f32,
    /// Settle duration for position-based snaps (seconds)
    pub default_duration: f32,
    /// Upper bound on fling settle duration (seconds)
    pub max_duration: f32,
    /// Damping ratio for position-based settles (1.0 = no overshoot)
    pub settle_damping: f32,
    /// Lowest damping ratio a fast fling may produce
    pub fling_min_damping: f32,
    /// Rubber-band stretching past the endpoints, disabled when absent
    pub stretch: Option<StretchConfig>,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            snap_points: vec![SnapPoint::new("min", 0.5), SnapPoint::new("max", 0.8)],
            initial_snap: "min".to_string(),
            velocity_threshold: 100.0,
            default_duration: 0.3,
            max_duration: 0.6,
            settle_damping: 1.0,
            fling_min_damping: 0.7,
            stretch: None,
        }
    }
}

impl PanelConfig {
    /// Three positions: fully closed, half and expanded
    pub fn three_stop() -> Self {
        Self {
            snap_points: vec![
                SnapPoint::new("close", 0.0),
                SnapPoint::new("min", 0.5),
                SnapPoint::new("max", 0.8),
            ],
            ..Default::default()
        }
    }

    /// Replace the snap positions (lowest first)
    pub fn snap_points(mut self, points: impl IntoIterator<Item = SnapPoint>) -> Self {
        self.snap_points = points.into_iter().collect();
        self
    }

    /// Set the position used by `present()`
    pub fn initial_snap(mut self, name: impl Into<String>) -> Self {
        self.initial_snap = name.into();
        self
    }

    /// Set the fling velocity threshold in points/second
    pub fn velocity_threshold(mut self, threshold: f32) -> Self {
        self.velocity_threshold = threshold;
        self
    }

    /// Set default and maximum settle durations in seconds
    pub fn durations(mut self, default_duration: f32, max_duration: f32) -> Self {
        self.default_duration = default_duration;
        self.max_duration = max_duration;
        self
    }

    /// Enable rubber-band stretching
    pub fn stretch(mut self, stretch: StretchConfig) -> Self {
        self.stretch = Some(stretch);
        self
    }

    /// Check every setting and build the snap catalog
    ///
    /// Returns the catalog together with the resolved initial position.
    pub fn validate(&self) -> Result<(SnapCatalog, SnapPosition)> {
        let catalog = SnapCatalog::new(self.snap_points.iter().cloned())?;
        let initial = catalog.lookup(&self.initial_snap)?;

        if !self.velocity_threshold.is_finite() || self.velocity_threshold < 0.0 {
            return Err(PanelError::InvalidThreshold(self.velocity_threshold));
        }

        for (field, value) in [
            ("default duration", self.default_duration),
            ("max duration", self.max_duration),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(PanelError::InvalidDuration { field, value });
            }
        }

        for (field, value) in [
            ("settle damping", self.settle_damping),
            ("fling minimum damping", self.fling_min_damping),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(PanelError::InvalidDamping { field, value });
            }
        }

        if let Some(stretch) = self.stretch {
            if !stretch.max_overshoot.is_finite() || stretch.max_overshoot < 0.0 {
                return Err(PanelError::InvalidStretch(format!(
                    "max overshoot {} must be a non-negative fraction",
                    stretch.max_overshoot
                )));
            }
            if !(0.0..=1.0).contains(&stretch.resistance) {
                return Err(PanelError::InvalidStretch(format!(
                    "resistance {} must be within [0, 1]",
                    stretch.resistance
                )));
            }
        }

        Ok((catalog, initial))
    }
}
