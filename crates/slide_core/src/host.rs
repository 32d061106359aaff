//! Collaborator contracts
//!
//! The controller talks to exactly two capabilities: the scrollable content
//! it steals drags from, and the presentation layer that puts heights on
//! screen. Neither knows about snap semantics.

/// Scrollable content hosted inside the panel
pub trait ContentHost {
    /// Current vertical content offset, positive when content is pushed up
    fn offset_y(&self) -> f32;

    /// Force the content offset back to zero
    fn reset_offset(&mut self);

    /// Whether a finger is currently down on the content
    fn is_tracking(&self) -> bool;
}

/// Settle animation request
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeightAnimation {
    /// Height to end on, always a catalog height
    pub target: f32,
    /// Seconds
    pub duration: f32,
    /// Damping ratio for the settle curve (1.0 = no overshoot)
    pub damping_hint: f32,
    /// Height velocity at launch in points/second, positive when growing
    pub initial_velocity: f32,
}

/// Presentation layer receiving height commands
pub trait PanelPresenter {
    /// Apply a height right away, used on every live-drag frame
    fn set_height_immediate(&mut self, height: f32);

    /// Start a settle animation; completion is reported back asynchronously
    fn animate_height(&mut self, animation: HeightAnimation);

    /// Stop the running animation
    ///
    /// Returns the height on screen when an animation was cut short, `None`
    /// when nothing was running.
    fn interrupt(&mut self) -> Option<f32>;
}
