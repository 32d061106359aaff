//! Slide Core
//!
//! Interaction core of a snapping bottom panel whose height follows the drag
//! gesture of the scrollable content inside it.
//!
//! # Architecture
//!
//! - [`PanelController`] - owns the panel height, arbitrates every scroll
//!   event between panel and content, and picks the settle target on release
//! - [`ContentHost`] - the scrollable content the controller steals drags from
//! - [`PanelPresenter`] - the presentation layer receiving height commands
//!
//! # Example
//!
//! ```
//! use slide_core::prelude::*;
//!
//! let mut panel = PanelController::new(
//!     PanelConfig::default(),
//!     1000.0,
//!     MemoryContent::new(),
//!     RecordingPresenter::new(),
//! )?;
//! panel.present();
//! panel.on_animation_complete();
//!
//! // Finger pushes the content up by 120pt: the panel grows instead
//! assert_eq!(panel.on_scroll(120.0, true), ScrollDisposition::Consumed);
//! assert_eq!(panel.height(), 620.0);
//!
//! // Released slowly: nearest position wins
//! let mut target_offset = 0.0;
//! panel.on_drag_end(0.0, &mut target_offset);
//! assert_eq!(panel.current_snap_name(), "min");
//! # Ok::<(), PanelError>(())
//! ```

pub mod config;
pub mod content;
pub mod controller;
mod error;
pub mod host;
pub mod presenter;
pub mod settle;
pub mod snap;
pub mod state;
pub mod velocity;

pub use config::{PanelConfig, StretchConfig};
pub use content::MemoryContent;
pub use controller::{PanelController, ScrollDisposition};
pub use error::{PanelError, Result};
pub use host::{ContentHost, HeightAnimation, PanelPresenter};
pub use presenter::{AnimatedPresenter, PresenterCommand, RecordingPresenter};
pub use settle::{resolve_settle, SettleDecision, SettleReason};
pub use snap::{InFlightClassification, SnapCatalog, SnapHeights, SnapPoint, SnapPosition};
pub use state::{panel_events, DragSession, PanelPhase, PanelState, StateTransitions};
pub use velocity::VelocityTracker;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::config::{PanelConfig, StretchConfig};
    pub use crate::content::MemoryContent;
    pub use crate::controller::{PanelController, ScrollDisposition};
    pub use crate::error::{PanelError, Result};
    pub use crate::host::{ContentHost, HeightAnimation, PanelPresenter};
    pub use crate::presenter::{AnimatedPresenter, RecordingPresenter};
    pub use crate::snap::{SnapCatalog, SnapPoint, SnapPosition};
    pub use crate::state::PanelPhase;
}
