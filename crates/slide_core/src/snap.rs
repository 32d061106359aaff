//! Snap positions
//!
//! A [`SnapCatalog`] is the validated, strictly ordered list of named
//! positions a panel may rest at. Positions are fractions of the container
//! height; [`SnapHeights`] holds them resolved against a concrete container
//! and answers the geometric questions the controller asks while dragging
//! and settling.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::{PanelError, Result};

/// A named snap position, expressed as a fraction of the container height
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SnapPoint {
    pub name: String,
    pub fraction: f32,
}

impl SnapPoint {
    pub fn new(name: impl Into<String>, fraction: f32) -> Self {
        Self {
            name: name.into(),
            fraction,
        }
    }
}

/// Index of a position within a [`SnapCatalog`], ordered lowest to highest
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SnapPosition(usize);

impl SnapPosition {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Where the panel sits relative to the catalog
///
/// Derived on demand from the current height, never stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InFlightClassification {
    /// Height equals this position's height exactly
    AtSnap(SnapPosition),
    /// Somewhere between (or, when stretching, beyond) catalog heights
    Progressing,
}

/// Validated, strictly ascending set of snap positions
#[derive(Clone, Debug, PartialEq)]
pub struct SnapCatalog {
    points: SmallVec<[SnapPoint; 4]>,
}

impl SnapCatalog {
    /// Validate and build a catalog from positions listed lowest first
    pub fn new(points: impl IntoIterator<Item = SnapPoint>) -> Result<Self> {
        let points: SmallVec<[SnapPoint; 4]> = points.into_iter().collect();

        if points.len() < 2 {
            return Err(PanelError::TooFewSnapPoints(points.len()));
        }

        for (i, point) in points.iter().enumerate() {
            if !point.fraction.is_finite() || !(0.0..=1.0).contains(&point.fraction) {
                return Err(PanelError::FractionOutOfRange {
                    name: point.name.clone(),
                    fraction: point.fraction,
                });
            }
            if points[..i].iter().any(|p| p.name == point.name) {
                return Err(PanelError::DuplicateName(point.name.clone()));
            }
        }

        for pair in points.windows(2) {
            if pair[1].fraction <= pair[0].fraction {
                return Err(PanelError::NotMonotonic {
                    lower: pair[0].name.clone(),
                    lower_fraction: pair[0].fraction,
                    upper: pair[1].name.clone(),
                    upper_fraction: pair[1].fraction,
                });
            }
        }

        Ok(Self { points })
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn lowest(&self) -> SnapPosition {
        SnapPosition(0)
    }

    pub fn highest(&self) -> SnapPosition {
        SnapPosition(self.points.len() - 1)
    }

    /// Find a position by name
    pub fn position(&self, name: &str) -> Option<SnapPosition> {
        self.points.iter().position(|p| p.name == name).map(SnapPosition)
    }

    /// Find a position by name, failing with [`PanelError::UnknownSnap`]
    pub fn lookup(&self, name: &str) -> Result<SnapPosition> {
        self.position(name)
            .ok_or_else(|| PanelError::UnknownSnap(name.to_string()))
    }

    pub fn name(&self, position: SnapPosition) -> &str {
        &self.points[position.0].name
    }

    pub fn fraction(&self, position: SnapPosition) -> f32 {
        self.points[position.0].fraction
    }

    pub fn points(&self) -> impl Iterator<Item = &SnapPoint> {
        self.points.iter()
    }

    /// Resolve every position against a container height
    pub fn resolve(&self, container_height: f32) -> SnapHeights {
        SnapHeights {
            heights: self
                .points
                .iter()
                .map(|p| p.fraction * container_height)
                .collect(),
        }
    }
}

impl Default for SnapCatalog {
    fn default() -> Self {
        Self {
            points: SmallVec::from_vec(vec![
                SnapPoint::new("min", 0.5),
                SnapPoint::new("max", 0.8),
            ]),
        }
    }
}

/// Snap heights resolved for one container size, ascending
#[derive(Clone, Debug, PartialEq)]
pub struct SnapHeights {
    heights: SmallVec<[f32; 4]>,
}

impl SnapHeights {
    pub fn height(&self, position: SnapPosition) -> f32 {
        self.heights[position.0]
    }

    pub fn lowest(&self) -> f32 {
        self.heights[0]
    }

    pub fn highest(&self) -> f32 {
        self.heights[self.heights.len() - 1]
    }

    pub fn lowest_position(&self) -> SnapPosition {
        SnapPosition(0)
    }

    pub fn highest_position(&self) -> SnapPosition {
        SnapPosition(self.heights.len() - 1)
    }

    /// Travel between the lowest and highest position
    pub fn distance(&self) -> f32 {
        self.highest() - self.lowest()
    }

    /// Normalized height between lowest (0) and highest (1)
    ///
    /// `None` when the catalog collapses to a single height.
    pub fn progress(&self, height: f32) -> Option<f32> {
        let distance = self.distance();
        if distance > 0.0 {
            Some((height - self.lowest()) / distance)
        } else {
            None
        }
    }

    pub fn clamp(&self, height: f32) -> f32 {
        height.clamp(self.lowest(), self.highest())
    }

    pub fn classify(&self, height: f32) -> InFlightClassification {
        match self.heights.iter().position(|&h| h == height) {
            Some(i) => InFlightClassification::AtSnap(SnapPosition(i)),
            None => InFlightClassification::Progressing,
        }
    }

    /// First position strictly above `height`, or the highest
    pub fn next_above(&self, height: f32) -> SnapPosition {
        self.heights
            .iter()
            .position(|&h| h > height)
            .map(SnapPosition)
            .unwrap_or_else(|| self.highest_position())
    }

    /// Last position strictly below `height`, or the lowest
    pub fn next_below(&self, height: f32) -> SnapPosition {
        self.heights
            .iter()
            .rposition(|&h| h < height)
            .map(SnapPosition)
            .unwrap_or_else(|| self.lowest_position())
    }

    /// Adjacent pair `(lower, upper)` enclosing `height`
    ///
    /// Heights outside the catalog bracket to the nearest endpoint twice. A
    /// height sitting exactly on a position is the lower end of its pair,
    /// except for the highest which is the upper end.
    pub fn bracket(&self, height: f32) -> (SnapPosition, SnapPosition) {
        let last = self.heights.len() - 1;
        if height <= self.lowest() {
            return (SnapPosition(0), SnapPosition(0));
        }
        if height >= self.highest() {
            return (SnapPosition(last), SnapPosition(last));
        }
        let upper = self.next_above(height);
        (SnapPosition(upper.0 - 1), upper)
    }

    pub fn iter(&self) -> impl Iterator<Item = (SnapPosition, f32)> + '_ {
        self.heights
            .iter()
            .enumerate()
            .map(|(i, &h)| (SnapPosition(i), h))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn min_max(min: f32, max: f32) -> Result<SnapCatalog> {
        SnapCatalog::new([SnapPoint::new("min", min), SnapPoint::new("max", max)])
    }

    fn close_min_max(close: f32, min: f32, max: f32) -> Result<SnapCatalog> {
        SnapCatalog::new([
            SnapPoint::new("close", close),
            SnapPoint::new("min", min),
            SnapPoint::new("max", max),
        ])
    }

    #[test]
    fn test_rejects_single_position() {
        let err = SnapCatalog::new([SnapPoint::new("only", 0.5)]).unwrap_err();
        assert_eq!(err, PanelError::TooFewSnapPoints(1));
    }

    #[test]
    fn test_rejects_non_monotonic() {
        let err = min_max(0.8, 0.5).unwrap_err();
        assert!(matches!(err, PanelError::NotMonotonic { .. }));

        let err = min_max(0.5, 0.5).unwrap_err();
        assert!(matches!(err, PanelError::NotMonotonic { .. }));
    }

    #[test]
    fn test_rejects_bad_fraction_and_duplicates() {
        assert!(matches!(
            min_max(0.5, 1.2),
            Err(PanelError::FractionOutOfRange { .. })
        ));
        assert!(matches!(
            min_max(f32::NAN, 0.8),
            Err(PanelError::FractionOutOfRange { .. })
        ));
        assert_eq!(
            SnapCatalog::new([SnapPoint::new("a", 0.2), SnapPoint::new("a", 0.6)]),
            Err(PanelError::DuplicateName("a".to_string()))
        );
    }

    #[test]
    fn test_lookup_by_name() {
        let catalog = close_min_max(0.0, 0.5, 0.8).unwrap();
        assert_eq!(catalog.lookup("min").unwrap().index(), 1);
        assert_eq!(catalog.name(catalog.highest()), "max");
        assert_eq!(
            catalog.lookup("half"),
            Err(PanelError::UnknownSnap("half".to_string()))
        );
    }

    #[test]
    fn test_resolved_geometry() {
        let heights = min_max(0.4, 0.9).unwrap().resolve(1000.0);
        assert_eq!(heights.lowest(), 400.0);
        assert_eq!(heights.highest(), 900.0);
        assert_eq!(heights.progress(650.0), Some(0.5));
        assert_eq!(heights.clamp(1200.0), 900.0);
        assert_eq!(heights.clamp(-10.0), 400.0);
    }

    #[test]
    fn test_classify_exact_heights_only() {
        let heights = min_max(0.4, 0.9).unwrap().resolve(1000.0);
        assert_eq!(
            heights.classify(900.0),
            InFlightClassification::AtSnap(heights.highest_position())
        );
        assert_eq!(heights.classify(899.5), InFlightClassification::Progressing);
    }

    #[test]
    fn test_bracket_and_neighbours() {
        let heights = close_min_max(0.1, 0.5, 0.8)
            .unwrap()
            .resolve(1000.0);

        let (lower, upper) = heights.bracket(300.0);
        assert_eq!((lower.index(), upper.index()), (0, 1));

        // Exactly on `min`: it is the lower end of the (min, max) pair
        let (lower, upper) = heights.bracket(500.0);
        assert_eq!((lower.index(), upper.index()), (1, 2));

        let (lower, upper) = heights.bracket(800.0);
        assert_eq!((lower.index(), upper.index()), (2, 2));

        assert_eq!(heights.next_above(500.0).index(), 2);
        assert_eq!(heights.next_below(500.0).index(), 0);
        assert_eq!(heights.next_above(900.0).index(), 2);
        assert_eq!(heights.next_below(50.0).index(), 0);
    }

    #[test]
    fn test_degenerate_container_has_no_progress() {
        let heights = SnapCatalog::default().resolve(0.0);
        assert_eq!(heights.distance(), 0.0);
        assert_eq!(heights.progress(0.0), None);
    }
}
