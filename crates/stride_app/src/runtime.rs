//! Headless runtime primitives for deterministic frame execution.

use stride_platform::{ControlFlow, Event, EventLoop, PlatformError};

/// Configuration for deterministic headless frame execution.
#[derive(Debug, Clone, Copy)]
pub struct HeadlessRunConfig {
    /// Number of frames to execute.
    pub max_frames: u32,
    /// Logical milliseconds between frames.
    pub tick_ms: u64,
}

impl Default for HeadlessRunConfig {
    fn default() -> Self {
        Self {
            max_frames: 1,
            tick_ms: 16,
        }
    }
}

/// Fixed-step frame clock.
#[derive(Debug, Clone, Copy)]
pub struct FrameClock {
    tick_ms: u64,
    frame: u64,
}

impl FrameClock {
    pub fn new(tick_ms: u64) -> Self {
        Self { tick_ms, frame: 0 }
    }

    /// Produce the next frame event.
    pub fn next_event(&mut self) -> Event {
        let event = Event::Frame {
            frame: self.frame,
            time_ms: self.elapsed_ms() as f64,
        };
        self.frame += 1;
        event
    }

    /// Frames produced so far.
    pub fn elapsed_frames(&self) -> u64 {
        self.frame
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.tick_ms.saturating_mul(self.frame)
    }
}

/// Deterministic headless event loop emitting a fixed frame budget.
pub struct HeadlessRuntime {
    cfg: HeadlessRunConfig,
}

impl HeadlessRuntime {
    pub fn new(cfg: HeadlessRunConfig) -> Self {
        Self { cfg }
    }
}

impl EventLoop for HeadlessRuntime {
    fn run<F>(self, mut handler: F) -> Result<(), PlatformError>
    where
        F: FnMut(Event) -> ControlFlow,
    {
        if self.cfg.max_frames == 0 {
            return Err(PlatformError::EventLoop(
                "headless max_frames must be > 0".to_string(),
            ));
        }
        if self.cfg.tick_ms == 0 {
            return Err(PlatformError::EventLoop(
                "headless tick_ms must be > 0".to_string(),
            ));
        }

        let mut clock = FrameClock::new(self.cfg.tick_ms);
        for _ in 0..self.cfg.max_frames {
            if handler(clock.next_event()) == ControlFlow::Exit {
                break;
            }
        }

        Ok(())
    }
}
