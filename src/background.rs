// The animated page background: a particle field bound to a canvas, redrawn
// every frame, perturbed on a slow interval and rebuilt whenever the window
// is resized.

use crate::canvas::{self, CanvasSurface};
use crate::config::FieldConfig;
use crate::error::FieldError;
use crate::field::ParticleField;
use crate::scheduler;
use crate::utils::{FirstTime, Timer};
use rand::rngs::ThreadRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

pub const CANVAS_ID: &str = "bg-shapes";

#[wasm_bindgen]
pub struct ShapeField {
    field: ParticleField,
    rng: ThreadRng,
}

#[wasm_bindgen]
impl ShapeField {
    #[wasm_bindgen(constructor)]
    pub fn new(width: f64, height: f64) -> ShapeField {
        let mut rng = rand::thread_rng();
        let field = ParticleField::build(width, height, FieldConfig::default(), &mut rng);
        ShapeField { field, rng }
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.field.resize(width, height, &mut self.rng);
        if cfg!(debug_assertions) {
            log!(
                "background rebuilt for {}x{} with {} shapes",
                width,
                height,
                self.field.len()
            );
        }
    }

    pub fn frame(&mut self, ctx: &CanvasRenderingContext2d) -> Result<(), JsValue> {
        let _timer = Timer::new("ShapeField::frame");
        let mut surface = CanvasSurface::new(ctx);
        self.field
            .advance(&mut surface, &mut self.rng)
            .map_err(JsValue::from)
    }

    pub fn perturb(&mut self) {
        self.field.perturb(&mut self.rng);
    }

    pub fn particle_count(&self) -> usize {
        self.field.len()
    }

    pub fn width(&self) -> f64 {
        self.field.width()
    }

    pub fn height(&self) -> f64 {
        self.field.height()
    }
}

impl ShapeField {
    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    pub fn perturb_interval_ms(&self) -> i32 {
        self.field.config().perturb_interval_ms
    }
}

fn viewport(window: &Window) -> Result<(f64, f64), FieldError> {
    let width = window.inner_width()?.as_f64();
    let height = window.inner_height()?.as_f64();
    match (width, height) {
        (Some(w), Some(h)) => Ok((w, h)),
        _ => Err(FieldError::Unsupported(String::from("numeric viewport size"))),
    }
}

fn fit_canvas(canvas: &HtmlCanvasElement, width: f64, height: f64) {
    canvas.set_width(width as u32);
    canvas.set_height(height as u32);
}

/// Starts the background on the canvas with the given id. Nothing runs when
/// the canvas or its 2D context is missing.
#[wasm_bindgen]
pub fn mount_background(canvas_id: &str) -> Result<(), JsValue> {
    mount(canvas_id).map_err(JsValue::from)
}

pub fn mount(canvas_id: &str) -> Result<(), FieldError> {
    let window = scheduler::window()?;
    let document = window
        .document()
        .ok_or_else(|| FieldError::Unsupported(String::from("no document")))?;
    let canvas = document
        .get_element_by_id(canvas_id)
        .ok_or_else(|| FieldError::MissingElement(canvas_id.to_owned()))?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| FieldError::Unsupported(format!("'{}' is not a canvas", canvas_id)))?;
    let ctx = canvas::context_2d(&canvas)?;

    let (width, height) = viewport(&window)?;
    fit_canvas(&canvas, width, height);
    let shapes = Rc::new(RefCell::new(ShapeField::new(width, height)));
    log!(
        "background started with {} shapes",
        shapes.borrow().particle_count()
    );

    {
        let shapes = shapes.clone();
        let window_for_resize = window.clone();
        let on_resize = Closure::wrap(Box::new(move || {
            match viewport(&window_for_resize) {
                Ok((w, h)) => {
                    fit_canvas(&canvas, w, h);
                    shapes.borrow_mut().resize(w, h);
                }
                Err(e) => warn!("resize ignored: {}", e),
            }
        }) as Box<dyn FnMut()>);
        window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())?;
        on_resize.forget();
    }

    let interval = shapes.borrow().perturb_interval_ms();
    {
        let shapes = shapes.clone();
        scheduler::every(interval, move || shapes.borrow_mut().perturb())?;
    }

    let mut first_failure = FirstTime::new();
    scheduler::each_frame(move || {
        if let Err(e) = shapes.borrow_mut().frame(&ctx) {
            if first_failure.check() {
                warn!("background frame skipped, further failures are not logged: {:?}", e);
            }
        }
        true
    })
}
