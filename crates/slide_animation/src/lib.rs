//! Slide Animation System
//!
//! Spring physics and the settle animator used to present panel motion.
//!
//! # Features
//!
//! - **Settle Springs**: RK4 springs described by duration, damping ratio and launch velocity
//! - **Interruptible**: The settle animator reports its presented value when cut short

pub mod settle;
pub mod spring;

pub use settle::{AnimationTick, SettleAnimator};
pub use spring::{SettleSpring, SpringParams};
