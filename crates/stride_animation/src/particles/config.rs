//! Particle configuration

use rand::Rng;
use serde::{Deserialize, Serialize};
use stride_core::Color;

use crate::error::{MotionError, Result};

/// Half-open `[min, max)` range sampled uniformly
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ValueRange {
    pub min: f32,
    pub max: f32,
}

impl ValueRange {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f32 {
        self.min + rng.gen::<f32>() * (self.max - self.min)
    }

    /// Inclusive containment check, mostly for assertions
    pub fn contains(&self, value: f32) -> bool {
        value >= self.min && value <= self.max
    }

    fn validate(&self, field: &'static str) -> Result<()> {
        if !self.min.is_finite() || !self.max.is_finite() {
            return Err(MotionError::NonFinite(field));
        }
        if self.min > self.max {
            return Err(MotionError::InvalidRange {
                field,
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
}

/// Where particles (re)appear
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpawnRegion {
    pub x: ValueRange,
    pub y: ValueRange,
}

impl Default for SpawnRegion {
    fn default() -> Self {
        Self {
            x: ValueRange::new(0.0, 250.0),
            y: ValueRange::new(200.0, 300.0),
        }
    }
}

/// Exit edges of the simulation space
///
/// A particle above `top` or right of `right` is recycled.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimulationBounds {
    pub top: f32,
    pub right: f32,
}

impl Default for SimulationBounds {
    fn default() -> Self {
        Self {
            top: -20.0,
            right: 300.0,
        }
    }
}

/// Gradient colors; opacity comes from each particle
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ParticleColors {
    pub start: [u8; 3],
    pub end: [u8; 3],
    /// End stop alpha relative to the particle opacity
    pub end_alpha_factor: f32,
}

impl Default for ParticleColors {
    fn default() -> Self {
        Self {
            start: [255, 233, 175],
            end: [212, 173, 86],
            end_alpha_factor: 0.8,
        }
    }
}

impl ParticleColors {
    pub fn start_color(&self, opacity: f32) -> Color {
        let [r, g, b] = self.start;
        Color::rgba8(r, g, b, opacity)
    }

    pub fn end_color(&self, opacity: f32) -> Color {
        let [r, g, b] = self.end;
        Color::rgba8(r, g, b, opacity * self.end_alpha_factor)
    }
}

/// Particle system configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParticleConfig {
    /// Pool size, fixed for the lifetime of the system
    pub count: usize,
    pub spawn: SpawnRegion,
    pub bounds: SimulationBounds,
    pub size: ValueRange,
    /// Upward speed per frame
    pub speed_y: ValueRange,
    /// Rightward speed per frame
    pub speed_x: ValueRange,
    /// Angular velocity in radians per frame
    pub rotation_speed: ValueRange,
    pub opacity: ValueRange,
    pub colors: ParticleColors,
    /// Seed for reproducible runs; entropy when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Keep the particle loop stopped under reduced motion
    pub gate_on_reduced_motion: bool,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            count: 20,
            spawn: SpawnRegion::default(),
            bounds: SimulationBounds::default(),
            size: ValueRange::new(3.0, 7.0),
            speed_y: ValueRange::new(0.1, 0.35),
            speed_x: ValueRange::new(0.05, 0.2),
            rotation_speed: ValueRange::new(-0.005, 0.005),
            opacity: ValueRange::new(0.4, 0.8),
            colors: ParticleColors::default(),
            seed: None,
            gate_on_reduced_motion: false,
        }
    }
}

impl ParticleConfig {
    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_bounds(mut self, bounds: SimulationBounds) -> Self {
        self.bounds = bounds;
        self
    }

    pub fn with_spawn(mut self, spawn: SpawnRegion) -> Self {
        self.spawn = spawn;
        self
    }

    pub fn with_gate_on_reduced_motion(mut self, gate: bool) -> Self {
        self.gate_on_reduced_motion = gate;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.count == 0 {
            return Err(MotionError::EmptyPool);
        }

        self.spawn.x.validate("spawn.x")?;
        self.spawn.y.validate("spawn.y")?;
        self.size.validate("size")?;
        self.speed_y.validate("speed_y")?;
        self.speed_x.validate("speed_x")?;
        self.rotation_speed.validate("rotation_speed")?;
        self.opacity.validate("opacity")?;

        if !self.bounds.top.is_finite() || !self.bounds.right.is_finite() {
            return Err(MotionError::NonFinite("bounds"));
        }
        if self.bounds.right <= 0.0 {
            return Err(MotionError::InvalidBounds(format!(
                "right edge must be positive, got {}",
                self.bounds.right
            )));
        }
        if self.spawn.x.min > self.bounds.right || self.spawn.y.max < self.bounds.top {
            return Err(MotionError::InvalidBounds(
                "spawn region lies entirely outside the simulation space".to_string(),
            ));
        }
        Ok(())
    }
}
