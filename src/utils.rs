// Console helpers: panic hook, log macros and a scoped console timer.
// Everything here is a no-op off wasm32 so the simulation can be unit tested natively.

pub fn set_panic_hook() {
    // When the `console_error_panic_hook` feature is enabled, we can call the
    // `set_panic_hook` function at least once during initialization, and then
    // we will get better error messages if our code ever panics.
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

macro_rules! log {
    ( $( $t:tt )* ) => {
        $crate::utils::console_log(&format!( $( $t )* ))
    };
}

macro_rules! warn {
    ( $( $t:tt )* ) => {
        $crate::utils::console_warn(&format!( $( $t )* ))
    };
}

#[cfg(target_arch = "wasm32")]
pub fn console_log(message: &str) {
    web_sys::console::log_1(&message.into());
}

#[cfg(not(target_arch = "wasm32"))]
pub fn console_log(_message: &str) {}

#[cfg(target_arch = "wasm32")]
pub fn console_warn(message: &str) {
    web_sys::console::warn_1(&message.into());
}

#[cfg(not(target_arch = "wasm32"))]
pub fn console_warn(_message: &str) {}

pub struct Timer<'a> {
    name: &'a str,
}

impl<'a> Timer<'a> {
    pub fn new(name: &'a str) -> Timer<'a> {
        #[cfg(target_arch = "wasm32")]
        web_sys::console::time_with_label(name);
        Timer { name }
    }
}

impl<'a> Drop for Timer<'a> {
    fn drop(&mut self) {
        #[cfg(target_arch = "wasm32")]
        web_sys::console::time_end_with_label(self.name);
        #[cfg(not(target_arch = "wasm32"))]
        let _ = self.name;
    }
}

/// Latches on the first call. Used to report a failure that repeats every
/// frame only once.
#[derive(Default, Debug)]
pub struct FirstTime {
    seen: bool,
}

impl FirstTime {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn check(&mut self) -> bool {
        !std::mem::replace(&mut self.seen, true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_time_only_once() {
        let mut first = FirstTime::new();
        assert!(first.check());
        assert!(!first.check());
        assert!(!first.check());
    }

    #[test]
    fn log_macros_are_silent_off_the_browser() {
        log!("{} shapes", 3);
        warn!("frame skipped: {:?}", "IndexSizeError");
        let _timer = Timer::new("native");
    }
}
