// Surface implementation over the browser's 2D canvas context, plus the helper
// for pulling that context out of a canvas element

use crate::color::Color;
use crate::error::FieldError;
use crate::surface::{Paint, Surface};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

pub fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, FieldError> {
    canvas
        .get_context("2d")?
        .ok_or_else(|| FieldError::Unsupported(String::from("2d canvas context")))?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| FieldError::Unsupported(String::from("2d canvas context")))
}

pub struct CanvasSurface<'a> {
    context: &'a CanvasRenderingContext2d,
}

impl<'a> CanvasSurface<'a> {
    pub fn new(context: &'a CanvasRenderingContext2d) -> Self {
        CanvasSurface { context }
    }

    fn style(&self, paint: &Paint) -> Result<JsValue, FieldError> {
        match paint {
            Paint::Solid(color) => Ok(JsValue::from_str(&color.to_css_rounded())),
            Paint::Linear(g) => {
                let gradient = self
                    .context
                    .create_linear_gradient(g.from[0], g.from[1], g.to[0], g.to[1]);
                for (offset, color) in &g.stops {
                    gradient.add_color_stop(*offset, &color.to_css())?;
                }
                Ok(gradient.into())
            }
        }
    }
}

impl<'a> Surface for CanvasSurface<'a> {
    fn save(&mut self) {
        self.context.save();
    }

    fn restore(&mut self) {
        self.context.restore();
    }

    fn set_global_alpha(&mut self, alpha: f64) {
        self.context.set_global_alpha(alpha);
    }

    fn translate(&mut self, x: f64, y: f64) -> Result<(), FieldError> {
        Ok(self.context.translate(x, y)?)
    }

    fn rotate(&mut self, angle: f64) -> Result<(), FieldError> {
        Ok(self.context.rotate(angle)?)
    }

    fn set_shadow(&mut self, color: Color, blur: f64) {
        self.context.set_shadow_color(&color.to_css());
        self.context.set_shadow_blur(blur);
    }

    #[allow(deprecated)]
    fn set_fill(&mut self, paint: &Paint) -> Result<(), FieldError> {
        let style = self.style(paint)?;
        self.context.set_fill_style(&style);
        Ok(())
    }

    #[allow(deprecated)]
    fn set_stroke(&mut self, paint: &Paint, line_width: f64) -> Result<(), FieldError> {
        let style = self.style(paint)?;
        self.context.set_stroke_style(&style);
        self.context.set_line_width(line_width);
        Ok(())
    }

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.context.clear_rect(x, y, width, height);
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.context.fill_rect(x, y, width, height);
    }

    fn begin_path(&mut self) {
        self.context.begin_path();
    }

    fn arc(&mut self, x: f64, y: f64, radius: f64, start: f64, end: f64) -> Result<(), FieldError> {
        Ok(self.context.arc(x, y, radius, start, end)?)
    }

    fn rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.context.rect(x, y, width, height);
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.context.move_to(x, y);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.context.line_to(x, y);
    }

    fn close_path(&mut self) {
        self.context.close_path();
    }

    fn fill(&mut self) {
        self.context.fill();
    }

    fn stroke(&mut self) {
        self.context.stroke();
    }
}
