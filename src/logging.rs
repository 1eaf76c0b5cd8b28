//! Console logging
//!
//! On `wasm32` messages go to the browser console through `web_sys::console`.
//! Host builds (unit tests) compile the macros down to argument checks only.

#[cfg(target_arch = "wasm32")]
pub fn log(message: &str) {
    web_sys::console::log_1(&message.into());
}

#[cfg(target_arch = "wasm32")]
pub fn debug(message: &str) {
    web_sys::console::debug_1(&message.into());
}

#[cfg(not(target_arch = "wasm32"))]
pub fn log(_message: &str) {}

#[cfg(not(target_arch = "wasm32"))]
pub fn debug(_message: &str) {}

#[macro_export]
macro_rules! console_log {
    ($($arg:tt)*) => {
        $crate::logging::log(&format!($($arg)*))
    };
}

#[macro_export]
macro_rules! console_debug {
    ($($arg:tt)*) => {
        $crate::logging::debug(&format!($($arg)*))
    };
}
