// Thin wrappers over the window's frame and timer primitives.
// Callbacks live for the lifetime of the page, so their closures are leaked
// with `forget` (or owned by the frame loop itself).

use crate::error::FieldError;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Window;

pub fn window() -> Result<Window, FieldError> {
    web_sys::window().ok_or_else(|| FieldError::Unsupported(String::from("no global window")))
}

/// Calls `tick` once per display refresh for as long as it returns `true`.
/// The callback re-registers itself every frame. Once `tick` says stop, the
/// closure is dropped from a zero-delay timeout, since it cannot free itself
/// while it is still running.
pub fn each_frame<F>(mut tick: F) -> Result<(), FieldError>
where
    F: FnMut() -> bool + 'static,
{
    // The closure needs a handle to itself to request the next frame, so it is
    // stored behind an Rc and created before anything references it.
    let f: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let g = f.clone();

    *g.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !tick() {
            let slot = f.clone();
            if let Err(e) = after(0, move || drop(slot.borrow_mut().take())) {
                warn!("finished frame loop not released: {}", e);
            }
            return;
        }
        if let Err(e) = request_frame(&f) {
            warn!("frame loop stopped: {}", e);
        }
    }) as Box<dyn FnMut()>));

    request_frame(&g)
}

fn request_frame(slot: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) -> Result<(), FieldError> {
    let slot = slot.borrow();
    let callback = slot
        .as_ref()
        .ok_or_else(|| FieldError::Unsupported(String::from("frame callback released")))?;
    window()?.request_animation_frame(callback.as_ref().unchecked_ref())?;
    Ok(())
}

/// Calls `tick` every `interval_ms` milliseconds, forever.
pub fn every<F>(interval_ms: i32, tick: F) -> Result<i32, FieldError>
where
    F: FnMut() + 'static,
{
    let callback = Closure::wrap(Box::new(tick) as Box<dyn FnMut()>);
    let handle = window()?.set_interval_with_callback_and_timeout_and_arguments_0(
        callback.as_ref().unchecked_ref(),
        interval_ms,
    )?;
    callback.forget();
    Ok(handle)
}

/// Calls `done` once, `delay_ms` milliseconds from now.
pub fn after<F>(delay_ms: i32, done: F) -> Result<i32, FieldError>
where
    F: FnOnce() + 'static,
{
    let callback = Closure::once_into_js(done);
    let handle = window()?.set_timeout_with_callback_and_timeout_and_arguments_0(
        callback.unchecked_ref(),
        delay_ms,
    )?;
    Ok(handle)
}
