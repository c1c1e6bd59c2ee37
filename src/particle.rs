// Single glowing shape: position, velocity and rotation evolve every frame,
// alpha drifts on the perturbation timer, everything else is fixed at spawn

use crate::config::FieldConfig;
use rand::Rng;
use vecmath::Vector2;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ShapeKind {
    Circle,
    Square,
    Triangle,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 3] = [ShapeKind::Circle, ShapeKind::Square, ShapeKind::Triangle];

    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> ShapeKind {
        ShapeKind::ALL[rng.gen_range(0, ShapeKind::ALL.len())]
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub pos: Vector2<f64>,
    pub vel: Vector2<f64>,
    pub rotation: f64,
    alpha: f64,
    size: f64,
    kind: ShapeKind,
    rotation_vel: f64,
    hue: u32,
}

impl Particle {
    pub fn new(pos: Vector2<f64>, vel: Vector2<f64>, size: f64, kind: ShapeKind, hue: u32) -> Particle {
        Particle {
            pos,
            vel,
            rotation: 0.0,
            alpha: 0.16,
            size,
            kind,
            rotation_vel: 0.0,
            hue,
        }
    }

    // Sampled somewhere in the viewport extended by the spawn margin on every side
    pub fn spawn<R: Rng + ?Sized>(config: &FieldConfig, width: f64, height: f64, rng: &mut R) -> Particle {
        let margin = config.spawn_margin;
        let x = sample_span(-margin, width + margin, rng);
        let y = sample_span(-margin, height + margin, rng);
        let kind = ShapeKind::random(rng);
        let size = config.size.sample(rng);
        Particle {
            pos: [x, y],
            vel: [config.velocity_x.sample(rng), config.velocity_y.sample(rng)],
            rotation: config.rotation.sample(rng),
            alpha: config.alpha.sample(rng),
            size,
            kind,
            rotation_vel: config.rotation_velocity.sample(rng),
            hue: config.sample_hue(rng),
        }
    }

    pub fn with_spin(mut self, rotation: f64, rotation_vel: f64) -> Particle {
        self.rotation = rotation;
        self.rotation_vel = rotation_vel;
        self
    }

    pub fn with_alpha(mut self, alpha: f64) -> Particle {
        self.alpha = alpha;
        self
    }

    pub fn size(&self) -> f64 {
        self.size
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    pub fn rotation_vel(&self) -> f64 {
        self.rotation_vel
    }

    pub fn hue(&self) -> u32 {
        self.hue
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    pub fn integrate(&mut self) {
        self.pos = vecmath::vec2_add(self.pos, self.vel);
        self.rotation += self.rotation_vel;
    }

    // Moves a particle that drifted past the margin over to the opposite edge,
    // a little inside it so it does not pop in right at the boundary
    pub fn wrap<R: Rng + ?Sized>(&mut self, config: &FieldConfig, width: f64, height: f64, rng: &mut R) {
        let margin = config.wrap_margin;
        if self.pos[0] < -margin {
            self.pos[0] = width + config.wrap_inset.sample(rng);
        }
        if self.pos[0] > width + margin {
            self.pos[0] = -config.wrap_inset.sample(rng);
        }
        if self.pos[1] < -margin {
            self.pos[1] = height + config.wrap_inset.sample(rng);
        }
        if self.pos[1] > height + margin {
            self.pos[1] = -config.wrap_inset.sample(rng);
        }
    }

    pub fn perturb<R: Rng + ?Sized>(&mut self, config: &FieldConfig, rng: &mut R) {
        self.vel[0] += config.jitter_x.sample(rng);
        self.vel[1] += config.jitter_y.sample(rng);
        self.alpha = config.alpha_limits.clamp(self.alpha + config.jitter_alpha.sample(rng));
    }

    pub fn distance_to(&self, other: &Particle) -> f64 {
        glm::distance(
            &glm::vec2(self.pos[0], self.pos[1]),
            &glm::vec2(other.pos[0], other.pos[1]),
        )
    }
}

fn sample_span<R: Rng + ?Sized>(min: f64, max: f64, rng: &mut R) -> f64 {
    if max > min {
        rng.gen_range(min, max)
    } else {
        min
    }
}
