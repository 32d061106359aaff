//! Panel controller
//!
//! Owns the panel's height, turns the content's scroll stream into live
//! height changes while a finger is down, and decides where the panel comes
//! to rest when it lifts.
//!
//! # Arbitration
//!
//! Every tracked scroll event is either consumed by the panel (height moves,
//! content offset is forced back to zero) or passed through so the content
//! scrolls. Resting fully expanded, only collapsing pulls are consumed;
//! resting fully collapsed, only expanding pushes are. Anywhere else the
//! panel takes every event.
//!
//! # Sign conventions
//!
//! Scroll offsets use content coordinates: positive when the content is
//! pushed up (finger moving up). Release velocities use screen coordinates:
//! positive when the finger moves down, toward collapse.

use crate::config::PanelConfig;
use crate::error::{PanelError, Result};
use crate::host::{ContentHost, HeightAnimation, PanelPresenter};
use crate::settle::{resolve_settle, SettleDecision};
use crate::snap::{InFlightClassification, SnapCatalog, SnapHeights, SnapPosition};
use crate::state::{panel_events, DragSession, PanelPhase, PanelState};

/// What happened to a scroll event
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollDisposition {
    /// The panel moved and the content offset was reset
    Consumed,
    /// The content keeps the offset and scrolls normally
    PassedThrough,
}

/// Interaction controller for a snapping bottom panel
pub struct PanelController<H, P> {
    config: PanelConfig,
    catalog: SnapCatalog,
    snaps: SnapHeights,
    initial: SnapPosition,
    container_height: f32,
    state: PanelState,
    session: Option<DragSession>,
    host: H,
    presenter: P,
}

impl<H: ContentHost, P: PanelPresenter> PanelController<H, P> {
    /// Build a controller, failing on any invalid setting
    ///
    /// The panel starts resting on its lowest position; call
    /// [`present`](Self::present) to move it to the configured initial one.
    pub fn new(config: PanelConfig, container_height: f32, host: H, presenter: P) -> Result<Self> {
        let (catalog, initial) = config.validate()?;
        check_container_height(container_height)?;

        let snaps = catalog.resolve(container_height);
        let lowest = catalog.lowest();
        let state = PanelState::new(snaps.height(lowest), lowest);

        tracing::debug!(
            "panel: {} snap positions over {:.0}pt container",
            catalog.len(),
            container_height
        );

        Ok(Self {
            config,
            catalog,
            snaps,
            initial,
            container_height,
            state,
            session: None,
            host,
            presenter,
        })
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn config(&self) -> &PanelConfig {
        &self.config
    }

    pub fn catalog(&self) -> &SnapCatalog {
        &self.catalog
    }

    pub fn snap_heights(&self) -> &SnapHeights {
        &self.snaps
    }

    pub fn container_height(&self) -> f32 {
        self.container_height
    }

    pub fn state(&self) -> &PanelState {
        &self.state
    }

    pub fn height(&self) -> f32 {
        self.state.current_height
    }

    pub fn phase(&self) -> PanelPhase {
        self.state.phase
    }

    pub fn current_snap(&self) -> SnapPosition {
        self.state.current_snap
    }

    /// Name of the last committed snap position
    pub fn current_snap_name(&self) -> &str {
        self.catalog.name(self.state.current_snap)
    }

    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    pub fn classification(&self) -> InFlightClassification {
        self.snaps.classify(self.state.current_height)
    }

    /// Normalized height between lowest (0) and highest (1)
    pub fn progress(&self) -> Option<f32> {
        self.snaps.progress(self.state.current_height)
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Show the panel: place it and animate to the initial position
    pub fn present(&mut self) -> HeightAnimation {
        self.presenter.set_height_immediate(self.state.current_height);
        self.settle_to(self.initial)
    }

    /// Animate to the lowest position, abandoning any drag
    pub fn dismiss(&mut self) -> HeightAnimation {
        self.settle_to(self.catalog.lowest())
    }

    /// Animate to a named snap position, interrupting any drag or settle
    pub fn move_to(&mut self, name: &str) -> Result<HeightAnimation> {
        let position = self.catalog.lookup(name)?;
        Ok(self.settle_to(position))
    }

    /// Re-resolve snap heights for a new container size
    pub fn set_container_height(&mut self, container_height: f32) -> Result<()> {
        check_container_height(container_height)?;
        self.container_height = container_height;
        self.snaps = self.catalog.resolve(container_height);

        let committed = self.snaps.height(self.state.current_snap);
        match self.state.phase {
            PanelPhase::Idle => {
                self.state.current_height = committed;
                self.presenter.set_height_immediate(committed);
            }
            PanelPhase::Settling => {
                let animation = self.plain_animation(committed);
                self.state.current_height = committed;
                self.presenter.animate_height(animation);
            }
            // The next scroll event re-clamps against the new range
            PanelPhase::Dragging => {}
        }

        tracing::debug!(
            "panel: container resized to {:.0}pt, committed height {:.1}",
            container_height,
            committed
        );
        Ok(())
    }

    /// The presentation layer finished the settle animation
    pub fn on_animation_complete(&mut self) {
        if self.state.apply(panel_events::SETTLED) {
            tracing::debug!(
                "panel: settled on '{}' at {:.1}",
                self.current_snap_name(),
                self.state.current_height
            );
        }
    }

    // =========================================================================
    // Gesture input
    // =========================================================================

    /// A finger went down on the content
    ///
    /// A running settle animation is interrupted and the drag continues from
    /// the height that was on screen.
    pub fn begin_drag(&mut self) {
        if self.state.is_dragging() {
            return;
        }
        self.cancel_motion();
        self.state.apply(panel_events::DRAG_START);
        self.session = Some(DragSession::new(self.state.current_height));
        tracing::debug!("panel: drag started at {:.1}", self.state.current_height);
    }

    /// Arbitration: whether the panel takes a scroll event at `offset_y`
    pub fn should_consume(&self, offset_y: f32) -> bool {
        match self.classification() {
            InFlightClassification::AtSnap(p) if p == self.snaps.highest_position() => {
                offset_y < 0.0
            }
            InFlightClassification::AtSnap(p) if p == self.snaps.lowest_position() => {
                offset_y > 0.0
            }
            _ => true,
        }
    }

    /// The content's scroll offset changed
    pub fn on_scroll(&mut self, offset_y: f32, is_tracking: bool) -> ScrollDisposition {
        if !offset_y.is_finite() {
            tracing::warn!("panel: ignoring non-finite scroll offset {}", offset_y);
            return ScrollDisposition::PassedThrough;
        }
        if !is_tracking {
            return ScrollDisposition::PassedThrough;
        }

        self.begin_drag();

        if !self.should_consume(offset_y) {
            tracing::trace!(
                "panel: offset {:.1} passed through at {:.1}",
                offset_y,
                self.state.current_height
            );
            return ScrollDisposition::PassedThrough;
        }

        let Some(session) = self.session.as_mut() else {
            return ScrollDisposition::PassedThrough;
        };
        session.absorb(offset_y);
        let requested = session.raw_height();
        let raw = self.reachable_raw(requested);
        // Finger travel past the reachable range is dropped
        if let Some(session) = self.session.as_mut() {
            session.rebase(raw);
        }

        let before = self.state.current_height;
        let height = self.constrain(raw);
        self.state.current_height = height;
        self.host.reset_offset();
        self.presenter.set_height_immediate(height);

        tracing::trace!(
            "panel: offset {:.1} consumed, height {:.1} -> {:.1} (raw {:.1})",
            offset_y,
            before,
            height,
            raw
        );
        ScrollDisposition::Consumed
    }

    /// The finger lifted with `velocity_y` (screen space, points/second)
    ///
    /// When the panel owned any part of the gesture, `target_offset` is
    /// rewritten to zero so the content does not fling on its own.
    pub fn on_drag_end(&mut self, velocity_y: f32, target_offset: &mut f32) -> SettleDecision {
        // A touch that never scrolled still interrupts and re-settles
        self.begin_drag();
        let consumed = self.session.take().is_some_and(|s| s.consumed);
        if consumed {
            *target_offset = 0.0;
        }

        let velocity_y = if velocity_y.is_finite() {
            velocity_y
        } else {
            tracing::warn!("panel: non-finite release velocity {}, using 0", velocity_y);
            0.0
        };

        let decision = resolve_settle(
            &self.snaps,
            self.state.current_height,
            velocity_y,
            &self.config,
        );
        self.commit(decision.target, decision.animation, panel_events::DRAG_END);
        decision
    }

    // =========================================================================
    // Internal
    // =========================================================================

    /// Finger position limited to where it still changes the presented height
    fn reachable_raw(&self, raw: f32) -> f32 {
        let (lowest, highest) = (self.snaps.lowest(), self.snaps.highest());
        match self.config.stretch {
            Some(stretch) if stretch.resistance > 0.0 => {
                let reach = stretch.max_overshoot * self.container_height / stretch.resistance;
                let floor = (lowest - reach).max(lowest - lowest / stretch.resistance);
                raw.clamp(floor, highest + reach)
            }
            _ => self.snaps.clamp(raw),
        }
    }

    fn constrain(&self, raw: f32) -> f32 {
        let (lowest, highest) = (self.snaps.lowest(), self.snaps.highest());
        let Some(stretch) = self.config.stretch else {
            return self.snaps.clamp(raw);
        };

        let limit = stretch.max_overshoot * self.container_height;
        if raw > highest {
            highest + ((raw - highest) * stretch.resistance).min(limit)
        } else if raw < lowest {
            (lowest - ((lowest - raw) * stretch.resistance).min(limit)).max(0.0)
        } else {
            raw
        }
    }

    fn plain_animation(&self, target: f32) -> HeightAnimation {
        HeightAnimation {
            target,
            duration: self.config.default_duration,
            damping_hint: self.config.settle_damping,
            initial_velocity: 0.0,
        }
    }

    fn settle_to(&mut self, position: SnapPosition) -> HeightAnimation {
        self.cancel_motion();
        let animation = self.plain_animation(self.snaps.height(position));
        self.commit(position, animation, panel_events::SETTLE_START)
    }

    fn commit(
        &mut self,
        position: SnapPosition,
        animation: HeightAnimation,
        event: u32,
    ) -> HeightAnimation {
        self.state.current_snap = position;
        self.state.current_height = animation.target;
        self.state.apply(event);
        self.presenter.animate_height(animation);
        tracing::debug!(
            "panel: committed '{}' at {:.1} ({:.3}s)",
            self.catalog.name(position),
            animation.target,
            animation.duration
        );
        animation
    }

    /// Stop any drag or settle, keeping whatever height is on screen
    fn cancel_motion(&mut self) {
        match self.state.phase {
            PanelPhase::Idle => return,
            PanelPhase::Dragging => {
                self.session = None;
            }
            PanelPhase::Settling => match self.presenter.interrupt() {
                Some(presented) if presented.is_finite() => {
                    tracing::debug!(
                        "panel: settle toward {:.1} interrupted at {:.1}",
                        self.state.current_height,
                        presented
                    );
                    self.state.current_height = presented;
                }
                Some(presented) => {
                    tracing::warn!(
                        "panel: presenter reported height {}, keeping target",
                        presented
                    );
                }
                None => {}
            },
        }
        self.state.apply(panel_events::INTERRUPTED);
    }
}

fn check_container_height(height: f32) -> Result<()> {
    if height.is_finite() && height >= 0.0 {
        Ok(())
    } else {
        Err(PanelError::InvalidContainerHeight(height))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StretchConfig;
    use crate::content::MemoryContent;
    use crate::host::ContentHost;
    use crate::presenter::{PresenterCommand, RecordingPresenter};
    use crate::settle::SettleReason;
    use crate::snap::SnapPoint;

    type TestController = PanelController<MemoryContent, RecordingPresenter>;

    /// min 400, max 900 in a 1000pt container, threshold 100pt/s
    fn config() -> PanelConfig {
        PanelConfig::default()
            .snap_points([SnapPoint::new("min", 0.4), SnapPoint::new("max", 0.9)])
            .velocity_threshold(100.0)
    }

    fn controller_with(config: PanelConfig) -> TestController {
        PanelController::new(config, 1000.0, MemoryContent::new(), RecordingPresenter::new())
            .unwrap()
    }

    fn controller() -> TestController {
        controller_with(config())
    }

    /// Feed a finger movement through the content and into the controller
    fn drag(panel: &mut TestController, finger_dy: f32, time_ms: f64) -> ScrollDisposition {
        let offset = panel.host_mut().drag(finger_dy, time_ms);
        let tracking = panel.host().is_tracking();
        panel.on_scroll(offset, tracking)
    }

    fn rest_at(panel: &mut TestController, name: &str) {
        panel.move_to(name).unwrap();
        panel.presenter_mut().finish();
        panel.on_animation_complete();
        assert_eq!(panel.phase(), PanelPhase::Idle);
    }

    #[test]
    fn test_rejects_bad_container() {
        let result = PanelController::new(
            config(),
            f32::NAN,
            MemoryContent::new(),
            RecordingPresenter::new(),
        );
        assert!(matches!(result, Err(PanelError::InvalidContainerHeight(_))));
    }

    #[test]
    fn test_present_animates_to_initial_snap() {
        let mut panel = controller_with(PanelConfig::three_stop());
        assert_eq!(panel.height(), 0.0);

        let animation = panel.present();
        assert_eq!(animation.target, 500.0);
        assert_eq!(panel.current_snap_name(), "min");
        assert_eq!(panel.phase(), PanelPhase::Settling);
        assert_eq!(
            panel.presenter().commands[0],
            PresenterCommand::SetHeight(0.0)
        );

        panel.on_animation_complete();
        assert_eq!(panel.phase(), PanelPhase::Idle);
    }

    #[test]
    fn test_live_drag_clamps_at_highest() {
        let mut panel = controller();
        panel.host_mut().touch_down(0.0);

        // Finger travels 800pt up: 400 would become 1200
        for step in 1..=10 {
            drag(&mut panel, -80.0, step as f64 * 16.0);
            assert!(panel.height() <= 900.0);
            assert!(panel.height() >= 400.0);
        }

        assert_eq!(panel.height(), 900.0);
        assert!(panel.state().is_dragging());
    }

    #[test]
    fn test_reversal_after_overshoot_moves_at_once() {
        let mut panel = controller();

        // Far past max: the panel pins at 900
        panel.on_scroll(1000.0, true);
        assert_eq!(panel.height(), 900.0);

        assert_eq!(panel.on_scroll(-200.0, true), ScrollDisposition::Consumed);
        assert_eq!(panel.height(), 700.0);

        // Same below min
        panel.on_scroll(-1000.0, true);
        assert_eq!(panel.height(), 400.0);
        panel.on_scroll(50.0, true);
        assert_eq!(panel.height(), 450.0);
    }

    #[test]
    fn test_stretch_reversal_leaves_overshoot_at_once() {
        let mut panel = controller_with(config().stretch(StretchConfig {
            max_overshoot: 0.05,
            resistance: 0.5,
        }));

        // Pinned at the 50pt cap, with far more finger travel than it takes
        panel.on_scroll(2000.0, true);
        assert_eq!(panel.height(), 950.0);

        // 40pt back at half resistance
        panel.on_scroll(-40.0, true);
        assert_eq!(panel.height(), 930.0);
    }

    #[test]
    fn test_huge_offsets_stay_in_bounds() {
        let mut panel = controller();
        panel.on_scroll(1.0e6, true);
        assert_eq!(panel.height(), 900.0);
        panel.on_scroll(-1.0e7, true);
        assert_eq!(panel.height(), 400.0);
    }

    #[test]
    fn test_consumed_scroll_resets_content() {
        let mut panel = controller();
        panel.host_mut().touch_down(0.0);

        assert_eq!(drag(&mut panel, -30.0, 16.0), ScrollDisposition::Consumed);
        assert_eq!(panel.height(), 430.0);
        assert_eq!(panel.host().offset_y(), 0.0);
        assert_eq!(
            panel.presenter().last(),
            Some(PresenterCommand::SetHeight(430.0))
        );

        // Offsets are reset every event, so they never double-apply
        drag(&mut panel, -20.0, 32.0);
        assert_eq!(panel.height(), 450.0);
    }

    #[test]
    fn test_arbitration_at_highest() {
        let mut panel = controller();
        rest_at(&mut panel, "max");
        assert_eq!(
            panel.classification(),
            InFlightClassification::AtSnap(panel.snap_heights().highest_position())
        );

        assert!(!panel.should_consume(15.0));
        assert!(!panel.should_consume(0.0));
        assert!(panel.should_consume(-15.0));

        assert_eq!(panel.on_scroll(15.0, true), ScrollDisposition::PassedThrough);
        assert_eq!(panel.height(), 900.0);

        assert_eq!(panel.on_scroll(-15.0, true), ScrollDisposition::Consumed);
        assert_eq!(panel.height(), 885.0);
    }

    #[test]
    fn test_arbitration_at_lowest() {
        let panel = controller();
        assert_eq!(
            panel.classification(),
            InFlightClassification::AtSnap(panel.snap_heights().lowest_position())
        );
        assert!(panel.should_consume(15.0));
        assert!(!panel.should_consume(-15.0));
    }

    #[test]
    fn test_content_scrolls_while_expanded() {
        let mut panel = controller();
        rest_at(&mut panel, "max");
        panel.host_mut().touch_down(0.0);

        // Scroll the list down, then back up to its top: all pass through
        drag(&mut panel, -100.0, 16.0);
        drag(&mut panel, 60.0, 32.0);
        assert_eq!(panel.height(), 900.0);
        assert_eq!(panel.host().offset_y(), 40.0);

        // Past the top of the list the panel takes over
        drag(&mut panel, 40.0, 48.0);
        assert_eq!(panel.host().offset_y(), 0.0);
        assert_eq!(panel.height(), 900.0);
        assert_eq!(drag(&mut panel, 50.0, 64.0), ScrollDisposition::Consumed);
        assert_eq!(panel.height(), 850.0);
    }

    #[test]
    fn test_untracked_scroll_is_ignored() {
        let mut panel = controller();
        assert_eq!(panel.on_scroll(50.0, false), ScrollDisposition::PassedThrough);
        assert_eq!(panel.height(), 400.0);
        assert_eq!(panel.phase(), PanelPhase::Idle);
    }

    #[test]
    fn test_fling_expands_from_half() {
        let mut panel = controller();
        panel.on_scroll(250.0, true);
        assert_eq!(panel.height(), 650.0);
        assert_eq!(panel.progress(), Some(0.5));

        let mut target_offset = 120.0;
        let decision = panel.on_drag_end(-150.0, &mut target_offset);

        assert_eq!(decision.reason, SettleReason::Fling);
        assert_eq!(panel.height(), 900.0);
        assert_eq!(panel.current_snap_name(), "max");
        assert_eq!(target_offset, 0.0);
        assert_eq!(panel.phase(), PanelPhase::Settling);
        assert!(panel.session().is_none());
        assert_eq!(
            panel.presenter().last(),
            Some(PresenterCommand::Animate(decision.animation))
        );

        panel.on_animation_complete();
        assert_eq!(panel.phase(), PanelPhase::Idle);
    }

    #[test]
    fn test_slow_release_collapses() {
        let mut panel = controller();
        panel.on_scroll(100.0, true);
        assert_eq!(panel.height(), 500.0);

        let mut target_offset = 0.0;
        let decision = panel.on_drag_end(0.0, &mut target_offset);

        assert_eq!(decision.reason, SettleReason::Nearest);
        assert_eq!(panel.height(), 400.0);
        assert_eq!(panel.current_snap_name(), "min");
    }

    #[test]
    fn test_pass_through_gesture_keeps_content_momentum() {
        let mut panel = controller();
        rest_at(&mut panel, "max");
        panel.on_scroll(80.0, true);

        let mut target_offset = 300.0;
        panel.on_drag_end(-900.0, &mut target_offset);

        assert_eq!(target_offset, 300.0);
        assert_eq!(panel.height(), 900.0);
    }

    #[test]
    fn test_touch_interrupts_settle_at_presented_height() {
        let mut panel = controller();
        panel.move_to("max").unwrap();
        panel.presenter_mut().presented = Some(720.0);

        panel.begin_drag();
        assert_eq!(panel.phase(), PanelPhase::Dragging);
        assert_eq!(panel.height(), 720.0);
        assert_eq!(panel.session().map(|s| s.base_height), Some(720.0));
        assert!(panel
            .presenter()
            .commands
            .contains(&PresenterCommand::Interrupt));

        panel.on_scroll(30.0, true);
        assert_eq!(panel.height(), 750.0);

        // A late completion from the cancelled animation is ignored
        panel.on_animation_complete();
        assert_eq!(panel.phase(), PanelPhase::Dragging);
    }

    #[test]
    fn test_tap_during_settle_resettles() {
        let mut panel = controller();
        panel.move_to("max").unwrap();
        panel.presenter_mut().presented = Some(700.0);

        let mut target_offset = 0.0;
        let decision = panel.on_drag_end(0.0, &mut target_offset);

        assert_eq!(decision.animation.target, 900.0);
        assert_eq!(panel.height(), 900.0);
    }

    #[test]
    fn test_non_finite_input_never_reaches_presenter() {
        let mut panel = controller();
        assert_eq!(
            panel.on_scroll(f32::NAN, true),
            ScrollDisposition::PassedThrough
        );
        panel.on_scroll(120.0, true);

        let mut target_offset = 0.0;
        let decision = panel.on_drag_end(f32::INFINITY, &mut target_offset);
        assert_eq!(decision.animation.target, 400.0);

        for command in &panel.presenter().commands {
            match command {
                PresenterCommand::SetHeight(h) => assert!(h.is_finite()),
                PresenterCommand::Animate(a) => {
                    assert!(a.target.is_finite() && a.duration.is_finite());
                    assert!(a.damping_hint.is_finite() && a.initial_velocity.is_finite());
                }
                PresenterCommand::Interrupt => {}
            }
        }
    }

    #[test]
    fn test_move_to_unknown_name() {
        let mut panel = controller();
        assert_eq!(
            panel.move_to("half"),
            Err(PanelError::UnknownSnap("half".to_string()))
        );
    }

    #[test]
    fn test_dismiss_abandons_drag() {
        let mut panel = controller();
        panel.on_scroll(300.0, true);
        assert!(panel.state().is_dragging());

        let animation = panel.dismiss();
        assert_eq!(animation.target, 400.0);
        assert!(panel.session().is_none());
        assert_eq!(panel.phase(), PanelPhase::Settling);
    }

    #[test]
    fn test_resize_resnaps_idle_panel() {
        let mut panel = controller();
        rest_at(&mut panel, "max");

        panel.set_container_height(800.0).unwrap();
        assert_eq!(panel.height(), 720.0);
        assert_eq!(
            panel.presenter().last(),
            Some(PresenterCommand::SetHeight(720.0))
        );

        assert!(panel.set_container_height(-1.0).is_err());
    }

    #[test]
    fn test_degenerate_container_settles_without_nan() {
        let mut panel = PanelController::new(
            config(),
            0.0,
            MemoryContent::new(),
            RecordingPresenter::new(),
        )
        .unwrap();

        panel.on_scroll(50.0, true);
        let mut target_offset = 0.0;
        let decision = panel.on_drag_end(-500.0, &mut target_offset);

        assert_eq!(decision.reason, SettleReason::Degenerate);
        assert_eq!(panel.height(), 0.0);
    }

    #[test]
    fn test_stretch_rubber_bands_past_highest() {
        let mut panel = controller_with(config().stretch(StretchConfig {
            max_overshoot: 0.05,
            resistance: 0.5,
        }));

        // Raw 1000: 100 past max at half resistance
        panel.on_scroll(600.0, true);
        assert_eq!(panel.height(), 950.0);

        // Capped at 5% of the container
        panel.on_scroll(200.0, true);
        assert_eq!(panel.height(), 950.0);

        let mut target_offset = 0.0;
        panel.on_drag_end(0.0, &mut target_offset);
        assert_eq!(panel.height(), 900.0);
    }

    #[test]
    fn test_stretch_below_lowest() {
        let mut panel = controller_with(config().stretch(StretchConfig {
            max_overshoot: 0.1,
            resistance: 0.3,
        }));

        panel.on_scroll(-100.0, true);
        // At lowest, a collapsing pull is the content's
        assert_eq!(panel.height(), 400.0);

        panel.on_scroll(50.0, true);
        panel.on_scroll(-150.0, true);
        // Raw 300: 100 below min at 0.3 resistance
        assert!((panel.height() - 370.0).abs() < 1e-3);
    }
}
