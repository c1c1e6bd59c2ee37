// The 2D drawing collaborator.
// The field only ever talks to a `Surface`; the browser canvas implements
// it in `canvas.rs` and tests use a surface that records calls.

use crate::color::Color;
use crate::error::FieldError;

#[derive(Clone, Debug, PartialEq)]
pub struct LinearGradient {
    pub from: [f64; 2],
    pub to: [f64; 2],
    pub stops: Vec<(f32, Color)>,
}

impl LinearGradient {
    pub fn new(from: [f64; 2], to: [f64; 2]) -> Self {
        LinearGradient {
            from,
            to,
            stops: Vec::with_capacity(2),
        }
    }

    pub fn stop(mut self, offset: f32, color: Color) -> Self {
        self.stops.push((offset, color));
        self
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Paint {
    Solid(Color),
    Linear(LinearGradient),
}

/// Subset of the canvas 2D API the background draws with.
pub trait Surface {
    fn save(&mut self);
    fn restore(&mut self);
    fn set_global_alpha(&mut self, alpha: f64);
    fn translate(&mut self, x: f64, y: f64) -> Result<(), FieldError>;
    fn rotate(&mut self, angle: f64) -> Result<(), FieldError>;
    fn set_shadow(&mut self, color: Color, blur: f64);
    fn set_fill(&mut self, paint: &Paint) -> Result<(), FieldError>;
    fn set_stroke(&mut self, paint: &Paint, line_width: f64) -> Result<(), FieldError>;

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64);
    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64);

    fn begin_path(&mut self);
    fn arc(&mut self, x: f64, y: f64, radius: f64, start: f64, end: f64) -> Result<(), FieldError>;
    fn rect(&mut self, x: f64, y: f64, width: f64, height: f64);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    fn close_path(&mut self);
    fn fill(&mut self);
    fn stroke(&mut self);
}
