//! Stride Platform Abstraction Layer
//!
//! Platform-agnostic events a host delivers to the motion engine: viewport
//! changes, pointer and scroll input, lifecycle signals, and display frames.
//!
//! # Example
//!
//! ```ignore
//! use stride_platform::*;
//!
//! event_loop.run(|event| {
//!     match event {
//!         Event::Frame { frame, time_ms } => {
//!             // advance both loops
//!         }
//!         Event::Lifecycle(LifecycleEvent::BeforeUnload) => {
//!             return ControlFlow::Exit;
//!         }
//!         _ => {}
//!     }
//!     ControlFlow::Continue
//! })?;
//! ```

mod error;
mod event;
mod input;
mod viewport;

// Re-export all public types
pub use error::{PlatformError, Result};
pub use event::{ControlFlow, Event, EventLoop, LifecycleEvent, WindowEvent};
pub use input::InputEvent;
pub use viewport::Viewport;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{PlatformError, Result};
    pub use crate::event::{ControlFlow, Event, EventLoop, LifecycleEvent, WindowEvent};
    pub use crate::input::InputEvent;
    pub use crate::viewport::Viewport;
}
