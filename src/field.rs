// The particle field: a fixed-size collection of glowing shapes that drifts,
// wraps around the viewport and is redrawn every display frame.
// The field owns no timers. The host calls `ParticleField::advance` once per
// frame and `ParticleField::perturb` on a slower interval, and rebuilds the
// field through `ParticleField::resize` when the viewport changes.

use crate::config::FieldConfig;
use crate::error::FieldError;
use crate::particle::Particle;
use crate::renderer::Renderer;
use crate::surface::Surface;
use rand::Rng;

#[derive(Clone, Debug)]
pub struct ParticleField {
    width: f64,
    height: f64,
    config: FieldConfig,
    particles: Vec<Particle>,
}

impl ParticleField {
    /// Builds a fresh field for a `width` x `height` viewport.
    pub fn build<R: Rng + ?Sized>(width: f64, height: f64, config: FieldConfig, rng: &mut R) -> Self {
        let mut field = ParticleField {
            width,
            height,
            config,
            particles: Vec::new(),
        };
        field.populate(rng);
        field
    }

    fn populate<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let count = self.config.particle_count(self.width);
        self.particles.clear();
        self.particles.reserve(count);
        for _ in 0..count {
            let p = Particle::spawn(&self.config, self.width, self.height, rng);
            self.particles.push(p);
        }
    }

    /// Takes the new viewport size and throws every particle away for a new set.
    pub fn resize<R: Rng + ?Sized>(&mut self, width: f64, height: f64, rng: &mut R) {
        self.width = width;
        self.height = height;
        self.populate(rng);
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Moves every particle one frame forward and wraps the ones that left.
    pub fn step<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let (width, height) = (self.width, self.height);
        for p in &mut self.particles {
            p.integrate();
            p.wrap(&self.config, width, height, rng);
        }
    }

    /// One display frame: wash, move, draw shapes, draw connections.
    ///
    /// Particles are moved even when drawing fails, so a broken surface never
    /// freezes the simulation.
    pub fn advance<S, R>(&mut self, surface: &mut S, rng: &mut R) -> Result<(), FieldError>
    where
        S: Surface + ?Sized,
        R: Rng + ?Sized,
    {
        let washed = Renderer::new(surface, &self.config).clear_screen(self.width, self.height);
        self.step(rng);
        washed?;

        let mut renderer = Renderer::new(surface, &self.config);
        renderer.render_particles(&self.particles)?;
        renderer.render_connections(&self.particles)
    }

    /// Small random nudge to every velocity and alpha.
    pub fn perturb<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for p in &mut self.particles {
            p.perturb(&self.config, rng);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::particle::ShapeKind;
    use crate::surface::recording::{Call, RecordingSurface};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn field(width: f64, height: f64, seed: u64) -> ParticleField {
        let mut rng = StdRng::seed_from_u64(seed);
        ParticleField::build(width, height, FieldConfig::default(), &mut rng)
    }

    #[test]
    fn count_follows_viewport_width() {
        assert_eq!(field(1200.0, 800.0, 1).len(), 20);
        assert_eq!(field(3000.0, 800.0, 1).len(), 50);
        assert_eq!(field(375.0, 667.0, 1).len(), 20);
    }

    #[test]
    fn build_is_repeatable_in_count_and_seedable() {
        let a = field(1920.0, 1080.0, 7);
        let b = field(1920.0, 1080.0, 8);
        assert_eq!(a.len(), b.len());
        assert_ne!(a.particles(), b.particles());

        let c = field(1920.0, 1080.0, 7);
        assert_eq!(a.particles(), c.particles());
    }

    #[test]
    fn fresh_particles_are_in_range() {
        let f = field(2400.0, 900.0, 13);
        for p in f.particles() {
            assert!(p.size() >= 18.0 && p.size() < 62.0);
            assert!(p.alpha() >= 0.08 && p.alpha() < 0.24);
            assert!(p.hue() >= 190 && p.hue() < 300);
            assert!(p.pos[0] >= -50.0 && p.pos[0] < 2450.0);
            assert!(p.pos[1] >= -50.0 && p.pos[1] < 950.0);
        }
    }

    #[test]
    fn resize_rebuilds_everything() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut f = ParticleField::build(1200.0, 800.0, FieldConfig::default(), &mut rng);
        let before = f.particles().to_vec();
        f.resize(3000.0, 1000.0, &mut rng);
        assert_eq!(f.len(), 50);
        assert_eq!((f.width(), f.height()), (3000.0, 1000.0));
        assert!(before.iter().all(|old| !f.particles().contains(old)));
    }

    #[test]
    fn particle_past_right_margin_wraps_on_next_step() {
        let mut f = field(1200.0, 800.0, 2);
        f.particles_mut()[0] =
            Particle::new([1200.0 + 130.0, 300.0], [0.3, 0.0], 20.0, ShapeKind::Square, 240);
        let mut rng = StdRng::seed_from_u64(99);
        f.step(&mut rng);
        let x = f.particles()[0].pos[0];
        assert!(x >= -80.0 && x <= -6.0, "x = {}", x);
    }

    #[test]
    fn identity_survives_many_frames_and_perturbations() {
        let mut f = field(1600.0, 900.0, 31);
        let identity: Vec<_> = f
            .particles()
            .iter()
            .map(|p| (p.size(), p.kind(), p.hue(), p.rotation_vel()))
            .collect();
        let mut rng = StdRng::seed_from_u64(32);
        let mut surface = RecordingSurface::new();
        for frame in 0..600 {
            f.advance(&mut surface, &mut rng).unwrap();
            if frame % 60 == 0 {
                f.perturb(&mut rng);
            }
            surface.calls.clear();
        }
        let after: Vec<_> = f
            .particles()
            .iter()
            .map(|p| (p.size(), p.kind(), p.hue(), p.rotation_vel()))
            .collect();
        assert_eq!(identity, after);
        for p in f.particles() {
            assert!(p.alpha() >= 0.05 && p.alpha() <= 0.32);
        }
    }

    #[test]
    fn positions_stay_near_the_viewport() {
        let mut f = field(800.0, 600.0, 17);
        for p in f.particles_mut() {
            p.vel = [3.0, -2.5];
        }
        let mut rng = StdRng::seed_from_u64(18);
        for _ in 0..2000 {
            f.step(&mut rng);
            for p in f.particles() {
                assert!(p.pos[0] >= -123.0 && p.pos[0] <= 800.0 + 123.0);
                assert!(p.pos[1] >= -123.0 && p.pos[1] <= 600.0 + 123.0);
            }
        }
    }

    #[test]
    fn advance_draws_wash_then_every_particle() {
        let mut f = field(1200.0, 800.0, 3);
        let mut rng = StdRng::seed_from_u64(3);
        let mut surface = RecordingSurface::new();
        f.advance(&mut surface, &mut rng).unwrap();

        assert_eq!(surface.calls[0], Call::ClearRect(0.0, 0.0, 1200.0, 800.0));
        assert_eq!(surface.count(|c| *c == Call::Save), f.len());
        assert_eq!(surface.count(|c| *c == Call::Restore), f.len());
        assert_eq!(surface.count(|c| matches!(c, Call::Translate(..))), f.len());

        let mut expected_links = 0;
        for (i, a) in f.particles().iter().enumerate() {
            for b in &f.particles()[i + 1..] {
                if a.distance_to(b) < 140.0 {
                    expected_links += 1;
                }
            }
        }
        // one stroke per shape outline plus one per link
        assert_eq!(
            surface.count(|c| *c == Call::DoStroke),
            f.len() + expected_links
        );
    }

    #[test]
    fn failed_frame_still_moves_particles() {
        let mut f = field(1200.0, 800.0, 6);
        for p in f.particles_mut() {
            p.vel = [1.0, 1.0];
        }
        let before: Vec<_> = f.particles().iter().map(|p| p.pos).collect();
        let mut rng = StdRng::seed_from_u64(6);
        let mut surface = RecordingSurface::new();
        surface.fail_arcs = true;
        let _ = f.advance(&mut surface, &mut rng);
        for (p, old) in f.particles().iter().zip(before) {
            assert_ne!(p.pos, old);
        }
    }
}
