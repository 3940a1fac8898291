//! Particle subsystem
//!
//! A fixed pool of small triangles drifting up and to the right across a
//! drawing surface. Particles that leave the simulation space are recycled
//! in place with fresh random state; the pool never grows or shrinks.
//!
//! # Example
//!
//! ```
//! use stride_animation::{FrameInfo, FrameScheduler, ParticleConfig, ParticleSystem};
//! use stride_paint::PaintContext;
//!
//! let config = ParticleConfig::default().with_seed(7);
//! let system = ParticleSystem::new(config, PaintContext::new(300.0, 300.0)).unwrap();
//! let mut scheduler = FrameScheduler::new("particles", system);
//!
//! scheduler.start();
//! scheduler.on_frame(&FrameInfo::new(0, 0.0));
//! assert_eq!(scheduler.task().surface().fill_count(), 20);
//! ```

mod config;
mod particle;

pub use config::*;
pub use particle::*;

use rand::rngs::StdRng;
use rand::SeedableRng;
use stride_core::{Brush, DrawContext, Transform};
use stride_paint::gradient::diagonal;
use stride_paint::triangle;
use tracing::{debug, trace};

use crate::error::Result;
use crate::scheduler::{FrameInfo, FrameTask};

/// Fixed-length, ordered particle collection
#[derive(Clone, Debug)]
pub struct ParticlePool {
    particles: Vec<Particle>,
}

impl ParticlePool {
    fn spawn(config: &ParticleConfig, rng: &mut StdRng) -> Self {
        let particles = (0..config.count)
            .map(|_| Particle::spawn(config, rng))
            .collect();
        Self { particles }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter()
    }

    pub fn as_slice(&self) -> &[Particle] {
        &self.particles
    }

    /// Mutable access to the particles; the length cannot change
    pub fn as_mut_slice(&mut self) -> &mut [Particle] {
        &mut self.particles
    }
}

/// Particle simulation bound to a drawing surface
pub struct ParticleSystem<S: DrawContext> {
    config: ParticleConfig,
    pool: ParticlePool,
    rng: StdRng,
    surface: S,
    recycled: u64,
    frames: u64,
}

impl<S: DrawContext> ParticleSystem<S> {
    /// Validate `config` and spawn the pool
    pub fn new(config: ParticleConfig, surface: S) -> Result<Self> {
        config.validate()?;

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let pool = ParticlePool::spawn(&config, &mut rng);
        debug!(
            "ParticleSystem: spawned {} particles (seed {:?})",
            pool.len(),
            config.seed
        );

        Ok(Self {
            config,
            pool,
            rng,
            surface,
            recycled: 0,
            frames: 0,
        })
    }

    pub fn config(&self) -> &ParticleConfig {
        &self.config
    }

    pub fn pool(&self) -> &ParticlePool {
        &self.pool
    }

    pub fn pool_mut(&mut self) -> &mut ParticlePool {
        &mut self.pool
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Total particles recycled so far
    pub fn recycled(&self) -> u64 {
        self.recycled
    }

    /// Frames simulated so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// One full frame: clear, then advance and draw each particle in order
    ///
    /// Returns how many particles were recycled this frame.
    pub fn step(&mut self) -> usize {
        let bounds = self.surface.viewport_size().to_rect();
        self.surface.clear_rect(bounds);

        let mut recycled = 0;
        for (index, particle) in self.pool.particles.iter_mut().enumerate() {
            if particle.update(&self.config, &mut self.rng) {
                trace!("ParticleSystem: recycled particle {}", index);
                recycled += 1;
            }
            draw_particle(&mut self.surface, particle, &self.config.colors);
        }
        self.recycled += recycled as u64;
        self.frames += 1;
        recycled
    }
}

impl<S: DrawContext> FrameTask for ParticleSystem<S> {
    fn tick(&mut self, _frame: &FrameInfo) {
        self.step();
    }
}

/// Rotated triangle at the particle position, filled with its gradient
fn draw_particle<S: DrawContext>(surface: &mut S, particle: &Particle, colors: &ParticleColors) {
    surface.save();
    surface.push_transform(Transform::translate(particle.position.x, particle.position.y));
    surface.push_transform(Transform::rotate(particle.angle));

    let gradient = diagonal(
        particle.size,
        colors.start_color(particle.opacity),
        colors.end_color(particle.opacity),
    );
    surface.fill_path(&triangle(particle.size), Brush::Gradient(gradient));
    surface.restore();
}
