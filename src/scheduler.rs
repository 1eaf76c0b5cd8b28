//! Frame scheduling
//!
//! The animator never loops on its own: it hands one callback at a time to a
//! `FrameScheduler`, which invokes it with a millisecond timestamp on the
//! next frame.

use wasm_bindgen::prelude::*;

use crate::error::{Result, ScrollError};

/// Frame interval used when `requestAnimationFrame` is unavailable
pub const FALLBACK_FRAME_MS: i32 = 1000 / 60;

pub type FrameCallback = Box<dyn FnOnce(f64)>;

pub trait FrameScheduler {
    /// Run `callback` once on the next frame
    fn request_frame(&self, callback: FrameCallback) -> Result<()>;
}

/// Schedules on the browser window, preferring `requestAnimationFrame`
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserScheduler;

impl BrowserScheduler {
    pub fn new() -> Self {
        Self
    }

    /// Current time on the clock `requestAnimationFrame` timestamps use
    pub fn now() -> Result<f64> {
        let window = web_sys::window()
            .ok_or_else(|| ScrollError::Scheduler("no global window".to_string()))?;
        Self::performance(&window).map(|performance| performance.now())
    }

    fn performance(window: &web_sys::Window) -> Result<web_sys::Performance> {
        window
            .performance()
            .ok_or_else(|| ScrollError::Scheduler("window.performance is unavailable".to_string()))
    }
}

impl FrameScheduler for BrowserScheduler {
    fn request_frame(&self, callback: FrameCallback) -> Result<()> {
        let window = web_sys::window()
            .ok_or_else(|| ScrollError::Scheduler("no global window".to_string()))?;

        // Shared so a failed `requestAnimationFrame` can fall back to a timer.
        let slot = std::rc::Rc::new(std::cell::RefCell::new(Some(callback)));

        let raf_slot = slot.clone();
        let raf_callback = Closure::once_into_js(move |timestamp: f64| {
            let callback = raf_slot.borrow_mut().take();
            if let Some(callback) = callback {
                callback(timestamp);
            }
        });
        let raf_function: &js_sys::Function = raf_callback.unchecked_ref();
        if window.request_animation_frame(raf_function).is_ok() {
            return Ok(());
        }

        crate::console_debug!("requestAnimationFrame unavailable, using {}ms timer", FALLBACK_FRAME_MS);

        // Timer frames stamp with `performance.now()`, the same time origin
        // as `requestAnimationFrame`, so a run never mixes clocks.
        let performance = Self::performance(&window)?;
        let timer_callback = Closure::once_into_js(move || {
            let callback = slot.borrow_mut().take();
            if let Some(callback) = callback {
                callback(performance.now());
            }
        });
        let timer_function: &js_sys::Function = timer_callback.unchecked_ref();
        window
            .set_timeout_with_callback_and_timeout_and_arguments_0(timer_function, FALLBACK_FRAME_MS)
            .map(|_| ())
            .map_err(|e| ScrollError::Scheduler(format!("{:?}", e)))
    }
}
