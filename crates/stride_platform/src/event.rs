//! Event loop and platform events

use crate::error::PlatformError;
use crate::input::InputEvent;

/// Event loop abstraction
///
/// Hosts (a browser shell, a headless runner) implement this trait to feed
/// events to the motion engine.
pub trait EventLoop {
    /// Run the event loop
    ///
    /// The handler is called for each event and returns a `ControlFlow`
    /// to indicate whether to continue or exit.
    fn run<F>(self, handler: F) -> Result<(), PlatformError>
    where
        F: FnMut(Event) -> ControlFlow;
}

/// Control flow after handling an event
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ControlFlow {
    /// Continue running the event loop
    #[default]
    Continue,
    /// Exit the event loop
    Exit,
}

/// Platform events
#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    /// Viewport-related event
    Window(WindowEvent),
    /// Pointer or scroll input
    Input(InputEvent),
    /// Page lifecycle event
    Lifecycle(LifecycleEvent),
    /// Display frame - time to advance the frame loops
    Frame {
        /// Host frame counter
        frame: u64,
        /// Host timestamp in milliseconds
        time_ms: f64,
    },
}

/// Viewport events
#[derive(Clone, Debug, PartialEq)]
pub enum WindowEvent {
    /// Viewport was resized
    Resized {
        /// New width in logical pixels
        width: f32,
        /// New height in logical pixels
        height: f32,
    },
    /// Device pixel ratio changed
    ScaleFactorChanged {
        /// New scale factor
        scale_factor: f32,
    },
}

/// Page lifecycle events
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LifecycleEvent {
    /// Page content is ready
    Ready,
    /// Page is about to be torn down
    BeforeUnload,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_control_flow_default() {
        assert_eq!(ControlFlow::default(), ControlFlow::Continue);
    }
}
