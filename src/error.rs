// Error type shared by the canvas surface and the page mounts.
// Nothing here ever reaches the user: failures are logged to the console and
// the affected effect simply does not run.

use std::fmt;
use wasm_bindgen::JsValue;

/// Errors raised while wiring effects to the page or drawing a frame.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldError {
    /// A DOM element the effect needs is not on the page.
    MissingElement(String),
    /// The host lacks something the effect needs (window, 2D context, ...).
    Unsupported(String),
    /// A browser call threw.
    Host(String),
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldError::MissingElement(id) => write!(f, "element '{}' not found", id),
            FieldError::Unsupported(what) => write!(f, "unsupported: {}", what),
            FieldError::Host(msg) => write!(f, "browser call failed: {}", msg),
        }
    }
}

impl std::error::Error for FieldError {}

impl From<JsValue> for FieldError {
    fn from(value: JsValue) -> Self {
        FieldError::Host(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

impl From<FieldError> for JsValue {
    fn from(e: FieldError) -> Self {
        JsValue::from_str(&e.to_string())
    }
}
