//! Stride Motion Engine
//!
//! Frame-by-frame state for two page effects: a pointer/scroll driven
//! parallax and an independent drifting-particle simulation.
//!
//! # Features
//!
//! - **Motion State**: `{target, current}` axes advanced by exponential smoothing
//! - **Input Sampling**: pointer and scroll positions mapped to parallax targets
//! - **Frame Scheduler**: a start/stop-able cooperative per-frame loop, reused
//!   by both effects
//! - **Lifecycle Gate**: viewport, touch and reduced-motion gating of the parallax loop
//! - **Particles**: a fixed pool of recycled triangles rendered every frame
//! - **Diagnostics**: start/stop/inspect the parallax loop from the outside

pub mod diagnostics;
pub mod error;
pub mod gate;
pub mod motion;
pub mod parallax;
pub mod particles;
pub mod sampler;
pub mod scheduler;
pub mod values;

pub use diagnostics::Diagnostics;
pub use error::{MotionError, Result};
pub use gate::{GateState, LifecycleGate, MotionEnvironment};
pub use motion::{advance, AxisPair, MotionAxis, MotionSnapshot, MotionState};
pub use parallax::{
    LayerTransform, ParallaxEngine, ParallaxTargets, ParallaxTask, PresentationTarget,
    RecordedTarget,
};
pub use particles::{
    Particle, ParticleColors, ParticleConfig, ParticlePool, ParticleSystem, SimulationBounds,
    SpawnRegion, ValueRange,
};
pub use sampler::{PointerSample, SampledTargets};
pub use scheduler::{FrameInfo, FrameScheduler, FrameTask};
pub use values::Interpolate;
