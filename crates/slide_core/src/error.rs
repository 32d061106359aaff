//! Panel error types

use thiserror::Error;

/// Configuration errors, raised when a panel is built or resized
///
/// Gesture handling itself never fails; every gesture-time edge case
/// resolves to a deterministic height.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PanelError {
    /// Fewer than two snap positions were configured
    #[error("Snap catalog needs at least two positions, got {0}")]
    TooFewSnapPoints(usize),

    /// A snap fraction is not a finite value in [0, 1]
    #[error("Snap position '{name}' has fraction {fraction}, expected a value in [0, 1]")]
    FractionOutOfRange { name: String, fraction: f32 },

    /// Snap positions are not strictly increasing
    #[error("Snap position '{upper}' ({upper_fraction}) must sit above '{lower}' ({lower_fraction})")]
    NotMonotonic {
        lower: String,
        lower_fraction: f32,
        upper: String,
        upper_fraction: f32,
    },

    /// Two snap positions share a name
    #[error("Duplicate snap position name '{0}'")]
    DuplicateName(String),

    /// A snap position was looked up by a name the catalog does not hold
    #[error("Unknown snap position '{0}'")]
    UnknownSnap(String),

    /// A duration setting is not a positive finite number
    #[error("Invalid {field}: {value}s")]
    InvalidDuration { field: &'static str, value: f32 },

    /// Velocity threshold is negative or not finite
    #[error("Invalid velocity threshold: {0}")]
    InvalidThreshold(f32),

    /// A damping ratio is not a positive finite number
    #[error("Invalid {field}: {value}")]
    InvalidDamping { field: &'static str, value: f32 },

    /// Stretch configuration is out of range
    #[error("Invalid stretch configuration: {0}")]
    InvalidStretch(String),

    /// Container height is negative or not finite
    #[error("Invalid container height: {0}")]
    InvalidContainerHeight(f32),
}

/// Result type for panel operations
pub type Result<T> = std::result::Result<T, PanelError>;
