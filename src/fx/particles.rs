//! Particle network
//!
//! A fixed-size swarm of drifting points that bounce off the canvas edges.
//! Every unordered pair closer than the connection distance is linked.
//!
//! Link search is O(n²) per frame. That is fine for tens of particles and is
//! the reason the count is capped by `Density` rather than scaled with the
//! viewport.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::consts::*;
use crate::settings::Settings;

/// Swarm parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleConfig {
    pub count: usize,
    pub connection_distance: f32,
    /// Per-axis velocity is drawn from (-speed/2, speed/2)
    pub speed: f32,
    pub min_radius: f32,
    pub max_radius: f32,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            count: PARTICLE_COUNT,
            connection_distance: CONNECTION_DISTANCE,
            speed: PARTICLE_SPEED,
            min_radius: PARTICLE_MIN_RADIUS,
            max_radius: PARTICLE_MAX_RADIUS,
        }
    }
}

impl ParticleConfig {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            count: settings.particle_count(),
            connection_distance: settings.connection_distance,
            speed: settings.particle_speed,
            min_radius: settings.particle_min_radius,
            max_radius: settings.particle_max_radius.max(settings.particle_min_radius),
        }
    }
}

/// A single point in the swarm
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl Particle {
    /// Random particle inside `size`
    pub fn random(rng: &mut Pcg32, size: Vec2, config: &ParticleConfig) -> Self {
        let pos = Vec2::new(rng.random::<f32>() * size.x, rng.random::<f32>() * size.y);
        let vel = Vec2::new(
            (rng.random::<f32>() - 0.5) * config.speed,
            (rng.random::<f32>() - 0.5) * config.speed,
        );
        let radius =
            config.min_radius + rng.random::<f32>() * (config.max_radius - config.min_radius);
        Self { pos, vel, radius }
    }

    /// Advance one frame; reflect velocity on the axis that left the bounds.
    /// Position is not clamped, so a particle may sit just outside for a frame.
    pub fn update(&mut self, size: Vec2) {
        self.pos += self.vel;

        if self.pos.x < 0.0 || self.pos.x > size.x {
            self.vel.x = -self.vel.x;
        }
        if self.pos.y < 0.0 || self.pos.y > size.y {
            self.vel.y = -self.vel.y;
        }
    }
}

/// Connection between two nearby particles
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Link {
    pub a: Vec2,
    pub b: Vec2,
    pub distance: f32,
    /// 1 at zero distance, 0 at the connection distance; used as line width
    pub strength: f32,
}

/// The whole swarm plus its canvas extent
#[derive(Debug, Clone)]
pub struct ParticleField {
    config: ParticleConfig,
    size: Vec2,
    particles: Vec<Particle>,
    rng: Pcg32,
}

impl ParticleField {
    /// Empty field; call `resize` once the canvas has a size
    pub fn new(config: ParticleConfig, seed: u64) -> Self {
        Self {
            config,
            size: Vec2::ZERO,
            particles: Vec::with_capacity(config.count),
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Set canvas extent and regenerate every particle
    pub fn resize(&mut self, width: f32, height: f32) {
        self.size = Vec2::new(width.max(0.0), height.max(0.0));
        self.particles.clear();
        for _ in 0..self.config.count {
            let p = Particle::random(&mut self.rng, self.size, &self.config);
            self.particles.push(p);
        }
        log::debug!(
            "Particle field reset: {} particles in {}x{}",
            self.particles.len(),
            self.size.x,
            self.size.y
        );
    }

    /// Advance every particle one frame
    pub fn step(&mut self) {
        let size = self.size;
        for p in &mut self.particles {
            p.update(size);
        }
    }

    /// All pairs closer than the connection distance
    pub fn links(&self) -> impl Iterator<Item = Link> + '_ {
        let threshold = self.config.connection_distance;
        self.particles.iter().enumerate().flat_map(move |(i, a)| {
            self.particles[i + 1..].iter().filter_map(move |b| {
                let distance = a.pos.distance(b.pos);
                (distance < threshold).then(|| Link {
                    a: a.pos,
                    b: b.pos,
                    distance,
                    strength: 1.0 - distance / threshold,
                })
            })
        })
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn config(&self) -> &ParticleConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn field(count: usize, w: f32, h: f32) -> ParticleField {
        let mut field = ParticleField::new(
            ParticleConfig {
                count,
                ..Default::default()
            },
            12345,
        );
        field.resize(w, h);
        field
    }

    #[test]
    fn test_resize_regenerates_inside_bounds() {
        let f = field(60, 800.0, 600.0);
        assert_eq!(f.particles().len(), 60);
        for p in f.particles() {
            assert!((0.0..=800.0).contains(&p.pos.x));
            assert!((0.0..=600.0).contains(&p.pos.y));
            assert!(p.vel.x.abs() <= PARTICLE_SPEED / 2.0);
            assert!(p.vel.y.abs() <= PARTICLE_SPEED / 2.0);
            assert!(p.radius >= PARTICLE_MIN_RADIUS && p.radius < PARTICLE_MAX_RADIUS);
        }
    }

    #[test]
    fn test_resize_discards_old_particles() {
        let mut f = field(10, 800.0, 600.0);
        let before = f.particles().to_vec();
        f.resize(200.0, 100.0);
        assert_eq!(f.particles().len(), 10);
        assert_ne!(before, f.particles());
        for p in f.particles() {
            assert!(p.pos.x <= 200.0 && p.pos.y <= 100.0);
        }
    }

    #[test]
    fn test_reflects_at_edge() {
        let mut p = Particle {
            pos: Vec2::new(99.9, 50.0),
            vel: Vec2::new(0.25, 0.0),
            radius: 1.0,
        };
        let size = Vec2::new(100.0, 100.0);
        p.update(size);
        // Overshoots by one step, velocity already reversed
        assert!(p.pos.x > 100.0);
        assert!(p.vel.x < 0.0);
        p.update(size);
        assert!(p.pos.x <= 100.0);
    }

    #[test]
    fn test_reflects_at_zero() {
        let mut p = Particle {
            pos: Vec2::new(50.0, 0.1),
            vel: Vec2::new(0.0, -0.25),
            radius: 1.0,
        };
        p.update(Vec2::new(100.0, 100.0));
        assert!(p.vel.y > 0.0);
    }

    #[test]
    fn test_links_threshold_and_strength() {
        let mut f = field(0, 500.0, 500.0);
        f.particles = vec![
            Particle { pos: Vec2::new(0.0, 0.0), vel: Vec2::ZERO, radius: 1.0 },
            Particle { pos: Vec2::new(75.0, 0.0), vel: Vec2::ZERO, radius: 1.0 },
            Particle { pos: Vec2::new(400.0, 0.0), vel: Vec2::ZERO, radius: 1.0 },
        ];
        let links: Vec<_> = f.links().collect();
        assert_eq!(links.len(), 1);
        assert!((links[0].distance - 75.0).abs() < 1e-4);
        assert!((links[0].strength - 0.5).abs() < 1e-4);
    }

    #[test]
    fn test_links_are_unordered_pairs() {
        let mut f = field(0, 10.0, 10.0);
        f.particles = (0..4)
            .map(|i| Particle { pos: Vec2::new(i as f32, 0.0), vel: Vec2::ZERO, radius: 1.0 })
            .collect();
        // 4 choose 2
        assert_eq!(f.links().count(), 6);
    }

    #[test]
    fn test_zero_size_canvas() {
        let mut f = field(5, 0.0, 0.0);
        f.step();
        assert_eq!(f.particles().len(), 5);
    }

    proptest! {
        #[test]
        fn prop_particles_stay_near_bounds(
            seed in any::<u64>(),
            w in 50.0f32..2000.0,
            h in 50.0f32..2000.0,
            frames in 1usize..2000,
        ) {
            let mut f = ParticleField::new(ParticleConfig { count: 20, ..Default::default() }, seed);
            f.resize(w, h);
            let slack = f.config().speed;
            for _ in 0..frames {
                f.step();
            }
            for p in f.particles() {
                prop_assert!(p.pos.x >= -slack && p.pos.x <= w + slack);
                prop_assert!(p.pos.y >= -slack && p.pos.y <= h + slack);
            }
        }
    }
}
