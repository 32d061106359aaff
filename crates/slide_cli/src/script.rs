//! Gesture scripts
//!
//! A script is a TOML list of `[[steps]]`, each tagged with an `action`:
//!
//! ```toml
//! [[steps]]
//! action = "touch"
//!
//! [[steps]]
//! action = "drag"
//! dy = -40.0    # finger travel in points, screen space (down is positive)
//! ms = 16.0     # time since the previous sample
//!
//! [[steps]]
//! action = "release"
//!
//! [[steps]]
//! action = "wait"
//! ms = 400.0
//! ```
//!
//! The [`Simulation`] replays it against a [`PanelController`] backed by an
//! in-memory content host and the spring settle animator.

use anyhow::{Context, Result};
use serde::Deserialize;
use slide_animation::AnimationTick;
use slide_core::{
    AnimatedPresenter, ContentHost, MemoryContent, PanelController, PanelPhase, ScrollDisposition,
};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

use crate::config::SlideConfig;

/// Longest the simulation waits for a trailing animation (ms)
const DRAIN_LIMIT_MS: f64 = 5000.0;

fn default_sample_ms() -> f64 {
    16.0
}

/// One scripted input
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Step {
    /// Finger down on the content
    Touch,
    /// Finger moves by `dy` points
    Drag {
        dy: f32,
        #[serde(default = "default_sample_ms")]
        ms: f64,
    },
    /// Finger lifts
    Release {
        #[serde(default)]
        ms: f64,
    },
    /// Let frames run
    Wait { ms: f64 },
    /// Programmatic move to a named position
    MoveTo { snap: String },
    /// Container resized (rotation, split view)
    Resize { height: f32 },
}

/// A parsed gesture script
#[derive(Debug, Clone, Deserialize)]
pub struct GestureScript {
    #[serde(default)]
    pub name: Option<String>,
    pub steps: Vec<Step>,
}

impl GestureScript {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("Failed to parse {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}

/// Where the panel ended up
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub height: f32,
    pub snap: String,
    pub phase: PanelPhase,
    pub elapsed_ms: f64,
    pub consumed: usize,
    pub passed_through: usize,
}

/// Replays scripts against a panel
pub struct Simulation {
    panel: PanelController<MemoryContent, AnimatedPresenter>,
    clock_ms: f64,
    frame_ms: f64,
    consumed: usize,
    passed_through: usize,
}

impl Simulation {
    /// Build a panel from the configuration and present it
    pub fn new(config: &SlideConfig) -> Result<Self> {
        let panel = PanelController::new(
            config.panel.clone(),
            config.screen.container_height,
            MemoryContent::new(),
            AnimatedPresenter::new(0.0),
        )?;

        let mut sim = Self {
            panel,
            clock_ms: 0.0,
            frame_ms: 1000.0 / f64::from(config.screen.frame_rate.max(1)),
            consumed: 0,
            passed_through: 0,
        };

        let animation = sim.panel.present();
        info!(
            "presented: moving to '{}' ({:.1}pt)",
            sim.panel.current_snap_name(),
            animation.target
        );
        sim.drain();
        Ok(sim)
    }

    pub fn panel(&self) -> &PanelController<MemoryContent, AnimatedPresenter> {
        &self.panel
    }

    /// Run every step, then let trailing animations finish
    pub fn run(&mut self, script: &GestureScript) -> Result<Outcome> {
        if let Some(name) = &script.name {
            info!("running script '{}'", name);
        }
        for (i, step) in script.steps.iter().enumerate() {
            self.step(step)
                .with_context(|| format!("Step {} ({:?}) failed", i + 1, step))?;
        }
        self.drain();
        Ok(self.outcome())
    }

    pub fn outcome(&self) -> Outcome {
        Outcome {
            height: self.panel.height(),
            snap: self.panel.current_snap_name().to_string(),
            phase: self.panel.phase(),
            elapsed_ms: self.clock_ms,
            consumed: self.consumed,
            passed_through: self.passed_through,
        }
    }

    fn step(&mut self, step: &Step) -> Result<()> {
        match step {
            Step::Touch => {
                self.panel.host_mut().touch_down(self.clock_ms);
                self.panel.begin_drag();
                info!("touch at {:.1}pt", self.panel.height());
            }
            Step::Drag { dy, ms } => {
                self.advance(*ms);
                let clock = self.clock_ms;
                let offset = self.panel.host_mut().drag(*dy, clock);
                let tracking = self.panel.host().is_tracking();
                match self.panel.on_scroll(offset, tracking) {
                    ScrollDisposition::Consumed => self.consumed += 1,
                    ScrollDisposition::PassedThrough => self.passed_through += 1,
                }
                debug!(
                    "drag {:+.1}: panel {:.1}pt, content offset {:.1}",
                    dy,
                    self.panel.height(),
                    self.panel.host().offset_y()
                );
            }
            Step::Release { ms } => {
                self.advance(*ms);
                let clock = self.clock_ms;
                let velocity = self.panel.host_mut().release(clock);
                let mut target_offset = self.panel.host().offset_y();
                let decision = self.panel.on_drag_end(velocity, &mut target_offset);
                self.panel.host_mut().settle_offset(target_offset);
                info!(
                    "release at {:.0}pt/s: {:?} -> '{}' ({:.1}pt, {:.3}s, damping {:.2})",
                    velocity,
                    decision.reason,
                    self.panel.current_snap_name(),
                    decision.animation.target,
                    decision.animation.duration,
                    decision.animation.damping_hint
                );
            }
            Step::Wait { ms } => self.advance(*ms),
            Step::MoveTo { snap } => {
                let animation = self.panel.move_to(snap)?;
                info!("move to '{}' ({:.1}pt)", snap, animation.target);
            }
            Step::Resize { height } => {
                self.panel.set_container_height(*height)?;
                info!("resized to {:.0}pt", height);
            }
        }
        Ok(())
    }

    /// Let `ms` of wall time pass, ticking the animator frame by frame
    fn advance(&mut self, ms: f64) {
        let end = self.clock_ms + ms.max(0.0);
        while self.clock_ms < end {
            let dt = self.frame_ms.min(end - self.clock_ms);
            self.clock_ms += dt;
            if self.panel.presenter_mut().tick((dt / 1000.0) as f32) == AnimationTick::Finished {
                self.panel.on_animation_complete();
                debug!(
                    "settled on '{}' at {:.0}ms",
                    self.panel.current_snap_name(),
                    self.clock_ms
                );
            }
        }
    }

    fn drain(&mut self) {
        let deadline = self.clock_ms + DRAIN_LIMIT_MS;
        while self.panel.presenter().is_animating() && self.clock_ms < deadline {
            self.advance(self.frame_ms);
        }
    }
}
