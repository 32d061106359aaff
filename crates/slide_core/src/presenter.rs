//! Presenters
//!
//! [`AnimatedPresenter`] puts heights on screen through the spring settle
//! animator and is ticked by the host's frame loop. [`RecordingPresenter`]
//! only records commands, for assertions and logging.

use slide_animation::{AnimationTick, SettleAnimator};

use crate::host::{HeightAnimation, PanelPresenter};

/// Presenter backed by [`SettleAnimator`]
#[derive(Clone, Debug)]
pub struct AnimatedPresenter {
    animator: SettleAnimator,
}

impl AnimatedPresenter {
    pub fn new(initial_height: f32) -> Self {
        Self {
            animator: SettleAnimator::new(initial_height),
        }
    }

    /// Height currently on screen
    pub fn presented_height(&self) -> f32 {
        self.animator.value()
    }

    pub fn is_animating(&self) -> bool {
        self.animator.is_animating()
    }

    /// Advance the running animation by `dt` seconds
    ///
    /// When this returns [`AnimationTick::Finished`] the host must notify the
    /// controller with `on_animation_complete()`.
    pub fn tick(&mut self, dt: f32) -> AnimationTick {
        self.animator.tick(dt)
    }
}

impl PanelPresenter for AnimatedPresenter {
    fn set_height_immediate(&mut self, height: f32) {
        self.animator.set_immediate(height);
    }

    fn animate_height(&mut self, animation: HeightAnimation) {
        self.animator.animate_to(
            animation.target,
            animation.duration,
            animation.damping_hint,
            animation.initial_velocity,
        );
    }

    fn interrupt(&mut self) -> Option<f32> {
        self.animator.interrupt()
    }
}

/// A command received by [`RecordingPresenter`]
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PresenterCommand {
    SetHeight(f32),
    Animate(HeightAnimation),
    Interrupt,
}

/// Presenter that records every command
///
/// `presented` stands in for the on-screen height reported on interrupt;
/// set it to simulate an animation caught mid-flight.
#[derive(Clone, Debug, Default)]
pub struct RecordingPresenter {
    pub commands: Vec<PresenterCommand>,
    pub presented: Option<f32>,
    animating: bool,
}

impl RecordingPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> Option<PresenterCommand> {
        self.commands.last().copied()
    }

    pub fn animations(&self) -> impl Iterator<Item = &HeightAnimation> {
        self.commands.iter().filter_map(|c| match c {
            PresenterCommand::Animate(a) => Some(a),
            _ => None,
        })
    }

    /// Mark the current animation as finished
    pub fn finish(&mut self) {
        self.animating = false;
    }
}

impl PanelPresenter for RecordingPresenter {
    fn set_height_immediate(&mut self, height: f32) {
        self.animating = false;
        self.commands.push(PresenterCommand::SetHeight(height));
    }

    fn animate_height(&mut self, animation: HeightAnimation) {
        self.animating = true;
        self.commands.push(PresenterCommand::Animate(animation));
    }

    fn interrupt(&mut self) -> Option<f32> {
        self.commands.push(PresenterCommand::Interrupt);
        if std::mem::take(&mut self.animating) {
            self.presented
        } else {
            None
        }
    }
}
