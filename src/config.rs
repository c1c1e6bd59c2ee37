// Numeric table for the particle field.
// Every bound used when spawning, wrapping, perturbing and drawing particles
// lives here, so tests can reason about the same numbers the field uses.

use crate::color::Color;
use rand::Rng;
use std::f64::consts::PI;

/// Half-open sampling range `[min, max)`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Bounds {
    pub min: f64,
    pub max: f64,
}

impl Bounds {
    pub const fn new(min: f64, max: f64) -> Self {
        Bounds { min, max }
    }

    /// Uniform sample in `[min, max)`. A degenerate range always yields `min`.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        if self.max > self.min {
            rng.gen_range(self.min, self.max)
        } else {
            self.min
        }
    }

    pub fn clamp(&self, value: f64) -> f64 {
        value.max(self.min).min(self.max)
    }
}

#[cfg(test)]
impl Bounds {
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value < self.max
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct FieldConfig {
    /// Viewport width per particle.
    pub spacing: f64,
    pub min_particles: usize,
    /// How far past each edge particles may spawn.
    pub spawn_margin: f64,
    /// How far past each edge particles may drift before wrapping.
    pub wrap_margin: f64,
    /// Distance inside the opposite edge a wrapped particle reappears at.
    pub wrap_inset: Bounds,

    pub velocity_x: Bounds,
    pub velocity_y: Bounds,
    pub rotation: Bounds,
    pub rotation_velocity: Bounds,
    pub size: Bounds,
    /// Integer hues, `[min, max)`.
    pub hue: (u32, u32),
    pub alpha: Bounds,
    /// Closed range alpha is held in after creation.
    pub alpha_limits: Bounds,

    pub jitter_x: Bounds,
    pub jitter_y: Bounds,
    pub jitter_alpha: Bounds,
    pub perturb_interval_ms: i32,

    pub link_distance: f64,
    pub link_opacity: f64,
    pub link_width: f64,
    pub link_color: Color,

    pub glow_blur: f64,
    pub outline_width: f64,
    pub backdrop: (Color, Color),
}

impl Default for FieldConfig {
    fn default() -> Self {
        FieldConfig {
            spacing: 60.0,
            min_particles: 20,
            spawn_margin: 50.0,
            wrap_margin: 120.0,
            wrap_inset: Bounds::new(6.0, 80.0),

            velocity_x: Bounds::new(-0.4, 0.4),
            velocity_y: Bounds::new(-0.15, 0.15),
            rotation: Bounds::new(0.0, PI * 2.0),
            rotation_velocity: Bounds::new(-0.004, 0.004),
            size: Bounds::new(18.0, 62.0),
            hue: (190, 300),
            alpha: Bounds::new(0.08, 0.24),
            alpha_limits: Bounds::new(0.05, 0.32),

            jitter_x: Bounds::new(-0.02, 0.02),
            jitter_y: Bounds::new(-0.01, 0.01),
            jitter_alpha: Bounds::new(-0.02, 0.02),
            perturb_interval_ms: 4200,

            link_distance: 140.0,
            link_opacity: 0.07,
            link_width: 0.8,
            link_color: Color::from_u32(0x40ff_ffff),

            glow_blur: 18.0,
            outline_width: 1.4,
            backdrop: (Color::rgba(24, 24, 36, 0.05), Color::rgba(16, 26, 32, 0.08)),
        }
    }
}

impl FieldConfig {
    /// Number of particles for a viewport of the given width.
    pub fn particle_count(&self, viewport_width: f64) -> usize {
        let by_width = (viewport_width / self.spacing).floor();
        if by_width.is_finite() && by_width > self.min_particles as f64 {
            by_width as usize
        } else {
            self.min_particles
        }
    }

    pub fn sample_hue<R: Rng + ?Sized>(&self, rng: &mut R) -> u32 {
        let (min, max) = self.hue;
        if max > min {
            rng.gen_range(min, max)
        } else {
            min
        }
    }

    /// Opacity of the line joining two particles `distance` apart, or `None`
    /// when they are too far apart to be linked.
    pub fn link_alpha(&self, distance: f64) -> Option<f64> {
        if distance < self.link_distance {
            Some(self.link_opacity * (1.0 - distance / self.link_distance))
        } else {
            None
        }
    }
}
