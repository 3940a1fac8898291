//! Diagnostics handle for external inspection and testing

use crate::motion::MotionSnapshot;
use crate::parallax::ParallaxEngine;

/// Start/stop control plus a view of the current motion values
pub trait Diagnostics {
    fn start(&mut self);
    fn stop(&mut self);
    fn is_running(&self) -> bool;
    fn current_values(&self) -> MotionSnapshot;
}

impl Diagnostics for ParallaxEngine {
    fn start(&mut self) {
        ParallaxEngine::start(self)
    }

    fn stop(&mut self) {
        ParallaxEngine::stop(self)
    }

    fn is_running(&self) -> bool {
        ParallaxEngine::is_running(self)
    }

    fn current_values(&self) -> MotionSnapshot {
        self.snapshot()
    }
}
