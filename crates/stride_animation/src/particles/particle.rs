//! Individual particle state

use std::f32::consts::TAU;

use rand::Rng;
use stride_core::{Point, Vec2};

use super::config::{ParticleConfig, SimulationBounds};

/// A drifting, rotating triangle
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub position: Point,
    pub size: f32,
    /// Per-frame displacement; negative `y` is upward
    pub velocity: Vec2,
    /// Rotation in radians
    pub angle: f32,
    /// Rotation per frame in radians
    pub angular_velocity: f32,
    pub opacity: f32,
}

impl Particle {
    /// Fresh randomized particle inside the spawn region
    pub fn spawn<R: Rng + ?Sized>(config: &ParticleConfig, rng: &mut R) -> Self {
        let x = config.spawn.x.sample(rng);
        let y = config.spawn.y.sample(rng);
        let size = config.size.sample(rng);
        let speed_y = config.speed_y.sample(rng);
        let speed_x = config.speed_x.sample(rng);
        let angle = rng.gen::<f32>() * TAU;
        let angular_velocity = config.rotation_speed.sample(rng);
        let opacity = config.opacity.sample(rng);

        Self {
            position: Point::new(x, y),
            size,
            velocity: Vec2::new(speed_x, -speed_y),
            angle,
            angular_velocity,
            opacity,
        }
    }

    /// Reinitialize in place
    pub fn respawn<R: Rng + ?Sized>(&mut self, config: &ParticleConfig, rng: &mut R) {
        *self = Self::spawn(config, rng);
    }

    /// Advance one frame of linear motion and rotation
    pub fn advance(&mut self) {
        self.position.x += self.velocity.x;
        self.position.y += self.velocity.y;
        self.angle += self.angular_velocity;
    }

    pub fn is_out_of_bounds(&self, bounds: &SimulationBounds) -> bool {
        self.position.y < bounds.top || self.position.x > bounds.right
    }

    /// Advance, then recycle if the particle left the simulation space
    ///
    /// Returns `true` if the particle was recycled.
    pub fn update<R: Rng + ?Sized>(&mut self, config: &ParticleConfig, rng: &mut R) -> bool {
        self.advance();
        if self.is_out_of_bounds(&config.bounds) {
            self.respawn(config, rng);
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_spawn_within_configured_ranges() {
        let config = ParticleConfig::default();
        let mut rng = StdRng::seed_from_u64(1);

        for _ in 0..500 {
            let p = Particle::spawn(&config, &mut rng);
            assert!(config.spawn.x.contains(p.position.x));
            assert!(config.spawn.y.contains(p.position.y));
            assert!(config.size.contains(p.size));
            assert!(config.speed_x.contains(p.velocity.x));
            assert!(config.speed_y.contains(-p.velocity.y));
            assert!(config.opacity.contains(p.opacity));
            assert!(p.angle >= 0.0 && p.angle <= TAU);
            assert!(p.velocity.y < 0.0 && p.velocity.x > 0.0);
        }
    }

    #[test]
    fn test_advance_moves_up_and_right() {
        let config = ParticleConfig::default();
        let mut rng = StdRng::seed_from_u64(2);
        let mut p = Particle::spawn(&config, &mut rng);
        let before = p;

        p.advance();

        assert!(p.position.x > before.position.x);
        assert!(p.position.y < before.position.y);
        assert!((p.angle - (before.angle + before.angular_velocity)).abs() < 1e-6);
    }

    #[test]
    fn test_exit_top_recycles_into_spawn_region() {
        let config = ParticleConfig::default();
        let mut rng = StdRng::seed_from_u64(3);
        let mut p = Particle::spawn(&config, &mut rng);
        p.position = Point::new(100.0, -25.0);

        assert!(p.update(&config, &mut rng));
        assert!(config.spawn.x.contains(p.position.x));
        assert!(config.spawn.y.contains(p.position.y));
    }

    #[test]
    fn test_exit_right_recycles_into_spawn_region() {
        let config = ParticleConfig::default();
        let mut rng = StdRng::seed_from_u64(4);
        let mut p = Particle::spawn(&config, &mut rng);
        p.position = Point::new(301.0, 150.0);

        assert!(p.update(&config, &mut rng));
        assert!(config.spawn.x.contains(p.position.x));
        assert!(config.spawn.y.contains(p.position.y));
    }

    #[test]
    fn test_in_bounds_particle_is_kept() {
        let config = ParticleConfig::default();
        let mut rng = StdRng::seed_from_u64(5);
        let mut p = Particle::spawn(&config, &mut rng);
        p.position = Point::new(150.0, 100.0);
        let size = p.size;

        assert!(!p.update(&config, &mut rng));
        assert_eq!(p.size, size);
    }
}
