//! Panel state machine and state records
//!
//! The panel moves through three phases:
//!
//! ```text
//! Idle --DRAG_START--> Dragging --DRAG_END--> Settling --SETTLED--> Idle
//!  |                                             ^   |
//!  +----------------SETTLE_START-----------------+   +--INTERRUPTED--> Idle
//! ```
//!
//! A touch that lands while settling first interrupts the animation (back to
//! `Idle`) and then starts a fresh drag, so `Dragging` is never entered
//! directly from `Settling`.

use std::hash::Hash;

use crate::snap::SnapPosition;

/// Trait for FSM state types
pub trait StateTransitions:
    Clone + Copy + PartialEq + Eq + Hash + Send + Sync + std::fmt::Debug + 'static
{
    /// Handle an event and return the new state, or None if no transition
    fn on_event(&self, event: u32) -> Option<Self>;
}

/// Events driving [`PanelPhase`]
pub mod panel_events {
    /// Finger went down on the content (or its first tracked scroll arrived)
    pub const DRAG_START: u32 = 1;
    /// Finger lifted, settle decision made
    pub const DRAG_END: u32 = 2;
    /// Programmatic move to a snap position
    pub const SETTLE_START: u32 = 3;
    /// Presentation layer finished the settle animation
    pub const SETTLED: u32 = 4;
    /// Running drag or animation cut short
    pub const INTERRUPTED: u32 = 5;
}

/// Interaction phase of the panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PanelPhase {
    /// Resting on a snap position
    #[default]
    Idle,
    /// Following the finger
    Dragging,
    /// Animating toward the committed snap position
    Settling,
}

impl PanelPhase {
    pub fn is_dragging(&self) -> bool {
        matches!(self, PanelPhase::Dragging)
    }

    pub fn is_settling(&self) -> bool {
        matches!(self, PanelPhase::Settling)
    }
}

impl StateTransitions for PanelPhase {
    fn on_event(&self, event: u32) -> Option<Self> {
        use panel_events::*;

        match (self, event) {
            (PanelPhase::Idle, DRAG_START) => Some(PanelPhase::Dragging),
            (PanelPhase::Idle, SETTLE_START) => Some(PanelPhase::Settling),

            (PanelPhase::Dragging, DRAG_END) => Some(PanelPhase::Settling),
            (PanelPhase::Dragging, INTERRUPTED) => Some(PanelPhase::Idle),

            // Retargeting an animation keeps settling
            (PanelPhase::Settling, SETTLE_START) => None,
            (PanelPhase::Settling, SETTLED) => Some(PanelPhase::Idle),
            (PanelPhase::Settling, INTERRUPTED) => Some(PanelPhase::Idle),

            _ => None,
        }
    }
}

/// Mutable panel record owned by the controller
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanelState {
    /// Height the panel occupies (committed target while settling)
    pub current_height: f32,
    /// Last committed settle target
    pub current_snap: SnapPosition,
    pub phase: PanelPhase,
}

impl PanelState {
    pub fn new(height: f32, snap: SnapPosition) -> Self {
        Self {
            current_height: height,
            current_snap: snap,
            phase: PanelPhase::Idle,
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.phase.is_dragging()
    }

    /// Apply an FSM event, returning true if the phase changed
    pub fn apply(&mut self, event: u32) -> bool {
        match self.phase.on_event(event) {
            Some(next) => {
                tracing::debug!("panel phase {:?} -> {:?}", self.phase, next);
                self.phase = next;
                true
            }
            None => false,
        }
    }
}

/// Per-gesture record, alive from drag start to drag end
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragSession {
    /// Panel height when the drag began
    pub base_height: f32,
    /// Accumulated finger translation in screen space (down is positive)
    pub translation: f32,
    /// Whether any scroll event of this gesture moved the panel
    pub consumed: bool,
}

impl DragSession {
    pub fn new(base_height: f32) -> Self {
        Self {
            base_height,
            translation: 0.0,
            consumed: false,
        }
    }

    /// Fold a consumed content offset into the translation
    ///
    /// Content offsets grow as the finger moves up, screen translation grows
    /// as it moves down, so the sign flips.
    pub fn absorb(&mut self, content_offset: f32) {
        self.translation -= content_offset;
        self.consumed = true;
    }

    /// Move the anchor so the finger asks for `height` from here on
    pub fn rebase(&mut self, height: f32) {
        self.translation = self.base_height - height;
    }

    /// Height the finger asks for, before clamping
    pub fn raw_height(&self) -> f32 {
        self.base_height - self.translation
    }
}
