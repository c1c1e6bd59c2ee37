#[macro_use]
mod utils;

extern crate nalgebra_glm as glm;

pub mod background;
pub mod canvas;
pub mod color;
pub mod config;
pub mod error;
pub mod field;
pub mod page;
pub mod particle;
pub mod pulse;
pub mod renderer;
pub mod scheduler;
pub mod surface;
pub mod typewriter;

pub use background::{mount_background, ShapeField};
pub use color::Color;
pub use config::{Bounds, FieldConfig};
pub use error::FieldError;
pub use field::ParticleField;
pub use particle::{Particle, ShapeKind};
pub use surface::{LinearGradient, Paint, Surface};

use wasm_bindgen::prelude::*;

// When the `wee_alloc` feature is enabled, use `wee_alloc` as the global
// allocator.
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen]
pub fn initialize() {
    utils::set_panic_hook();
    page::mount_all();
}
