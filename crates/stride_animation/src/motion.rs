//! Smoothed motion state
//!
//! Every animated quantity is a [`MotionAxis`]: an input-driven `target` and a
//! `current` value that chases it by a fixed fraction of the remaining gap
//! each frame. There is no time delta involved; the approach rate is
//! frame-rate dependent.

use serde::Serialize;
use stride_core::Vec2;

use crate::values::Interpolate;

/// Per-frame smoothing factor for the background layer
pub const BACKGROUND_SMOOTHING: f32 = 0.08;

/// Per-frame smoothing factor for the foreground subject
pub const SUBJECT_SMOOTHING: f32 = 0.12;

/// One smoothed scalar
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MotionAxis {
    pub target: f32,
    pub current: f32,
}

impl MotionAxis {
    pub const fn new(target: f32, current: f32) -> Self {
        Self { target, current }
    }

    /// Distance still to cover
    pub fn remaining(&self) -> f32 {
        self.target - self.current
    }
}

/// Advance `axis` one frame towards its target
///
/// `next.current = current + (target - current) * smoothing`. A smoothing of
/// `0.0` holds the current value, `1.0` snaps to the target.
pub fn advance(axis: MotionAxis, smoothing: f32) -> MotionAxis {
    MotionAxis {
        target: axis.target,
        current: axis.current.lerp(&axis.target, smoothing),
    }
}

/// A pair of axes moved together
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AxisPair {
    pub x: MotionAxis,
    pub y: MotionAxis,
}

impl AxisPair {
    pub fn set_target(&mut self, target: Vec2) {
        self.x.target = target.x;
        self.y.target = target.y;
    }

    pub fn target(&self) -> Vec2 {
        Vec2::new(self.x.target, self.y.target)
    }

    pub fn current(&self) -> Vec2 {
        Vec2::new(self.x.current, self.y.current)
    }

    /// Advance both axes with the same smoothing
    pub fn step(&mut self, smoothing: f32) {
        self.x = advance(self.x, smoothing);
        self.y = advance(self.y, smoothing);
    }

    pub fn clear_target(&mut self) {
        self.set_target(Vec2::ZERO);
    }
}

/// Motion state of the parallax effect
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MotionState {
    pub background: AxisPair,
    pub subject: AxisPair,
}

impl MotionState {
    /// Zero every target; current values keep easing from where they are
    pub fn reset_targets(&mut self) {
        self.background.clear_target();
        self.subject.clear_target();
    }

    pub fn targets_are_zero(&self) -> bool {
        self.background.target() == Vec2::ZERO && self.subject.target() == Vec2::ZERO
    }

    pub fn snapshot(&self) -> MotionSnapshot {
        MotionSnapshot {
            background_x: self.background.x.current,
            background_y: self.background.y.current,
            subject_x: self.subject.x.current,
            subject_y: self.subject.y.current,
        }
    }
}

/// Current values of the parallax effect, as exposed to diagnostics
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct MotionSnapshot {
    pub background_x: f32,
    pub background_y: f32,
    pub subject_x: f32,
    pub subject_y: f32,
}
