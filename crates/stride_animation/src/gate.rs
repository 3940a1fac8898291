//! Lifecycle gate
//!
//! Decides whether the pointer-driven parallax loop may run, from three
//! signals fixed at startup (touch capability, reduced-motion preference,
//! breakpoint width) plus the viewport width, which changes on resize.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{MotionError, Result};

/// Default breakpoint below which the viewport counts as small
pub const DEFAULT_BREAKPOINT_WIDTH: f32 = 480.0;

/// Device and accessibility signals, injected once at startup
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionEnvironment {
    /// The primary pointer is coarse (touch)
    pub coarse_pointer: bool,
    /// The user asked for reduced motion
    pub reduced_motion: bool,
    pub breakpoint_width: f32,
}

impl Default for MotionEnvironment {
    fn default() -> Self {
        Self {
            coarse_pointer: false,
            reduced_motion: false,
            breakpoint_width: DEFAULT_BREAKPOINT_WIDTH,
        }
    }
}

impl MotionEnvironment {
    pub fn with_coarse_pointer(mut self, coarse: bool) -> Self {
        self.coarse_pointer = coarse;
        self
    }

    pub fn with_reduced_motion(mut self, reduced: bool) -> Self {
        self.reduced_motion = reduced;
        self
    }

    pub fn with_breakpoint_width(mut self, width: f32) -> Self {
        self.breakpoint_width = width;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !self.breakpoint_width.is_finite() || self.breakpoint_width <= 0.0 {
            return Err(MotionError::InvalidBreakpoint(self.breakpoint_width));
        }
        Ok(())
    }
}

/// State of a gated animation path
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GateState {
    Stopped,
    Running,
}

impl GateState {
    pub fn from_running(running: bool) -> Self {
        if running {
            GateState::Running
        } else {
            GateState::Stopped
        }
    }
}

/// Tracks the small/large viewport classification and turns its changes
/// into loop transitions
#[derive(Clone, Debug)]
pub struct LifecycleGate {
    env: MotionEnvironment,
    small: bool,
}

impl LifecycleGate {
    pub fn new(env: MotionEnvironment, viewport_width: f32) -> Self {
        Self {
            small: viewport_width < env.breakpoint_width,
            env,
        }
    }

    pub fn environment(&self) -> &MotionEnvironment {
        &self.env
    }

    pub fn is_small(&self) -> bool {
        self.small
    }

    /// Whether the loop should start at initialization
    pub fn initial_state(&self, has_animated_entity: bool) -> GateState {
        GateState::from_running(!self.small && !self.env.reduced_motion && has_animated_entity)
    }

    /// Whether pointer events may update parallax targets
    pub fn allows_pointer_sampling(&self) -> bool {
        !self.small && !self.env.coarse_pointer && !self.env.reduced_motion
    }

    /// Whether scroll events may shift the background
    pub fn allows_scroll_shift(&self) -> bool {
        !self.env.reduced_motion
    }

    /// Re-classify the viewport after a resize
    ///
    /// Returns the state the loop should move to when the width crossed the
    /// breakpoint, or `None` when nothing should change. Crossing into small
    /// always stops; crossing back into large restarts only on a fine
    /// pointer without the reduced-motion preference.
    pub fn on_resize(&mut self, viewport_width: f32) -> Option<GateState> {
        let small = viewport_width < self.env.breakpoint_width;
        if small == self.small {
            return None;
        }
        self.small = small;
        debug!(
            "LifecycleGate: viewport {} crossed breakpoint {} (small = {})",
            viewport_width, self.env.breakpoint_width, small
        );

        if small {
            Some(GateState::Stopped)
        } else if !self.env.coarse_pointer && !self.env.reduced_motion {
            Some(GateState::Running)
        } else {
            None
        }
    }
}
