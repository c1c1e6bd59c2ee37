// Renderer that turns the particle field into surface calls: the translucent
// backdrop wash, one glowing shape per particle, and the faint lines between
// particles that are close to each other.

use crate::color::Color;
use crate::config::FieldConfig;
use crate::error::FieldError;
use crate::particle::{Particle, ShapeKind};
use crate::surface::{LinearGradient, Paint, Surface};
use std::f64::consts::PI;

pub struct Renderer<'a, S: Surface + ?Sized> {
    pub surface: &'a mut S,
    pub config: &'a FieldConfig,
}

impl<'a, S: Surface + ?Sized> Renderer<'a, S> {
    pub fn new(surface: &'a mut S, config: &'a FieldConfig) -> Self {
        Renderer { surface, config }
    }

    // Not a hard clear: the wash leaves the previous frames faintly visible as trails
    pub fn clear_screen(&mut self, width: f64, height: f64) -> Result<(), FieldError> {
        self.surface.clear_rect(0.0, 0.0, width, height);
        let (from, to) = self.config.backdrop;
        let wash = LinearGradient::new([0.0, 0.0], [width, height])
            .stop(0.0, from)
            .stop(1.0, to);
        self.surface.set_fill(&Paint::Linear(wash))?;
        self.surface.fill_rect(0.0, 0.0, width, height);
        Ok(())
    }

    pub fn render_particle(&mut self, p: &Particle) -> Result<(), FieldError> {
        self.surface.save();
        let drawn = self.draw_shape(p);
        self.surface.restore();
        drawn
    }

    fn draw_shape(&mut self, p: &Particle) -> Result<(), FieldError> {
        let hue = p.hue();
        let size = p.size();
        self.surface.set_global_alpha(p.alpha());
        self.surface.translate(p.pos[0], p.pos[1])?;
        self.surface.rotate(p.rotation)?;

        self.surface
            .set_shadow(Color::hsla(hue, 85, 70, 0.8), self.config.glow_blur);

        let fill = LinearGradient::new([-size, -size], [size, size])
            .stop(0.0, Color::hsla(hue, 85, 65, 0.45))
            .stop(1.0, Color::hsla(hue + 18, 75, 45, 0.2));
        self.surface.set_fill(&Paint::Linear(fill))?;
        self.surface.set_stroke(
            &Paint::Solid(Color::hsla(hue, 85, 65, 0.15)),
            self.config.outline_width,
        )?;

        self.surface.begin_path();
        match p.kind() {
            ShapeKind::Circle => {
                self.surface.arc(0.0, 0.0, size * 0.6, 0.0, PI * 2.0)?;
            }
            ShapeKind::Square => {
                self.surface
                    .rect(-size * 0.6, -size * 0.6, size * 1.2, size * 1.2);
            }
            ShapeKind::Triangle => {
                let r = size * 0.9;
                self.surface.move_to(0.0, -r * 0.65);
                self.surface.line_to(r * 0.6, r * 0.55);
                self.surface.line_to(-r * 0.6, r * 0.55);
                self.surface.close_path();
            }
        }
        self.surface.fill();
        self.surface.stroke();
        Ok(())
    }

    pub fn render_particles(&mut self, particles: &[Particle]) -> Result<(), FieldError> {
        for p in particles {
            self.render_particle(p)?;
        }
        Ok(())
    }

    // Every unordered pair is checked, n stays in the tens so O(n^2) is fine
    pub fn render_connections(&mut self, particles: &[Particle]) -> Result<(), FieldError> {
        for (i, a) in particles.iter().enumerate() {
            for b in &particles[i + 1..] {
                let alpha = match self.config.link_alpha(a.distance_to(b)) {
                    Some(alpha) => alpha,
                    None => continue,
                };
                self.surface.begin_path();
                self.surface.move_to(a.pos[0], a.pos[1]);
                self.surface.line_to(b.pos[0], b.pos[1]);
                self.surface.set_stroke(
                    &Paint::Solid(self.config.link_color.with_alpha(alpha)),
                    self.config.link_width,
                )?;
                self.surface.stroke();
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::recording::{Call, RecordingSurface};

    fn at(x: f64, y: f64, kind: ShapeKind) -> Particle {
        Particle::new([x, y], [0.0, 0.0], 40.0, kind, 220).with_alpha(0.2)
    }

    #[test]
    fn clear_screen_washes_instead_of_wiping() {
        let config = FieldConfig::default();
        let mut surface = RecordingSurface::new();
        Renderer::new(&mut surface, &config)
            .clear_screen(1200.0, 800.0)
            .unwrap();
        assert_eq!(surface.calls[0], Call::ClearRect(0.0, 0.0, 1200.0, 800.0));
        match &surface.calls[1] {
            Call::Fill(Paint::Linear(g)) => {
                assert_eq!(g.from, [0.0, 0.0]);
                assert_eq!(g.to, [1200.0, 800.0]);
                assert_eq!(g.stops[0].1.to_css(), "rgba(24,24,36,0.05)");
                assert_eq!(g.stops[1].1.to_css(), "rgba(16,26,32,0.08)");
            }
            other => panic!("expected gradient fill, got {:?}", other),
        }
        assert_eq!(surface.calls[2], Call::FillRect(0.0, 0.0, 1200.0, 800.0));
    }

    #[test]
    fn circle_uses_arc_of_sixty_percent() {
        let config = FieldConfig::default();
        let mut surface = RecordingSurface::new();
        Renderer::new(&mut surface, &config)
            .render_particle(&at(100.0, 50.0, ShapeKind::Circle))
            .unwrap();
        assert!(surface
            .calls
            .contains(&Call::Arc(0.0, 0.0, 40.0 * 0.6, 0.0, PI * 2.0)));
        assert_eq!(surface.calls.first(), Some(&Call::Save));
        assert_eq!(surface.calls.last(), Some(&Call::Restore));
        assert!(surface.calls.contains(&Call::Translate(100.0, 50.0)));
        assert!(surface.calls.contains(&Call::GlobalAlpha(0.2)));
    }

    #[test]
    fn square_and_triangle_geometry() {
        let config = FieldConfig::default();
        let mut surface = RecordingSurface::new();
        {
            let mut renderer = Renderer::new(&mut surface, &config);
            renderer
                .render_particle(&at(0.0, 0.0, ShapeKind::Square))
                .unwrap();
            renderer
                .render_particle(&at(0.0, 0.0, ShapeKind::Triangle))
                .unwrap();
        }
        assert!(surface
            .calls
            .contains(&Call::Rect(-40.0 * 0.6, -40.0 * 0.6, 40.0 * 1.2, 40.0 * 1.2)));
        let r = 40.0 * 0.9;
        assert!(surface.calls.contains(&Call::MoveTo(0.0, -r * 0.65)));
        assert!(surface.calls.contains(&Call::LineTo(r * 0.6, r * 0.55)));
        assert!(surface.calls.contains(&Call::LineTo(-r * 0.6, r * 0.55)));
        assert_eq!(surface.count(|c| *c == Call::ClosePath), 1);
    }

    #[test]
    fn glow_gradient_and_outline_follow_hue() {
        let config = FieldConfig::default();
        let mut surface = RecordingSurface::new();
        Renderer::new(&mut surface, &config)
            .render_particle(&at(0.0, 0.0, ShapeKind::Circle))
            .unwrap();
        assert!(surface
            .calls
            .contains(&Call::Shadow(Color::hsla(220, 85, 70, 0.8), 18.0)));
        let fill = surface.calls.iter().find_map(|c| match c {
            Call::Fill(Paint::Linear(g)) => Some(g.clone()),
            _ => None,
        });
        let fill = fill.expect("gradient fill");
        assert_eq!(fill.from, [-40.0, -40.0]);
        assert_eq!(fill.to, [40.0, 40.0]);
        assert_eq!(fill.stops[0], (0.0, Color::hsla(220, 85, 65, 0.45)));
        assert_eq!(fill.stops[1], (1.0, Color::hsla(238, 75, 45, 0.2)));
        assert!(surface.calls.contains(&Call::Stroke(
            Paint::Solid(Color::hsla(220, 85, 65, 0.15)),
            1.4
        )));
    }

    #[test]
    fn failed_draw_still_restores_paint_state() {
        let config = FieldConfig::default();
        let mut surface = RecordingSurface::new();
        surface.fail_arcs = true;
        let result =
            Renderer::new(&mut surface, &config).render_particle(&at(0.0, 0.0, ShapeKind::Circle));
        assert!(result.is_err());
        assert_eq!(surface.count(|c| *c == Call::Save), 1);
        assert_eq!(surface.calls.last(), Some(&Call::Restore));
    }

    #[test]
    fn connections_only_for_close_pairs() {
        let config = FieldConfig::default();
        let particles = vec![
            at(0.0, 0.0, ShapeKind::Circle),
            at(70.0, 0.0, ShapeKind::Square),
            at(1000.0, 0.0, ShapeKind::Triangle),
            at(0.0, 140.0, ShapeKind::Circle),
        ];
        let mut surface = RecordingSurface::new();
        Renderer::new(&mut surface, &config)
            .render_connections(&particles)
            .unwrap();

        let strokes: Vec<_> = surface
            .calls
            .iter()
            .filter_map(|c| match c {
                Call::Stroke(Paint::Solid(color), width) => Some((*color, *width)),
                _ => None,
            })
            .collect();
        // (0,1) at 70 and (1,3) at ~156 > 140, (0,3) exactly 140 is not linked
        assert_eq!(strokes.len(), 1);
        assert_eq!(strokes[0].1, 0.8);
        assert_eq!(strokes[0].0.to_css_rounded(), "rgba(64,255,255,0.035)");
        assert!(surface.calls.contains(&Call::MoveTo(0.0, 0.0)));
        assert!(surface.calls.contains(&Call::LineTo(70.0, 0.0)));
    }
}
