use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

pub mod animation;
pub mod config;
pub mod dom;
pub mod error;
pub mod logging;
pub mod scheduler;

pub use animation::{ease, Easing, RunState, ScrollAnimator, ScrollMode, ScrollRun};
pub use config::AnimatorConfig;
pub use dom::{DomNode, ScrollElement};
pub use error::ScrollError;
pub use scheduler::{BrowserScheduler, FrameScheduler};

/// Initialize panic hook for better error messages
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Create an animator from `{ animate?, duration? }`; missing options fall
/// back to `easeOut` and 0.5 seconds
#[wasm_bindgen(js_name = createAnimator)]
pub fn create_animator(options: JsValue) -> Result<AnimatorHandle, JsValue> {
    AnimatorHandle::new(options)
}

/// Scroll animator exposed to JavaScript
#[wasm_bindgen]
pub struct AnimatorHandle {
    animator: ScrollAnimator<DomNode>,
}

#[wasm_bindgen]
impl AnimatorHandle {
    #[wasm_bindgen(constructor)]
    pub fn new(options: JsValue) -> Result<AnimatorHandle, JsValue> {
        let config = AnimatorConfig::from_js(&options)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self::with_config(config))
    }

    /// Create from a YAML options document (`animate`, `duration`)
    #[wasm_bindgen(js_name = fromYaml)]
    pub fn from_yaml(yaml: &str) -> Result<AnimatorHandle, JsValue> {
        let config = AnimatorConfig::from_yaml(yaml)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self::with_config(config))
    }

    /// Scroll the element's container to the top
    #[wasm_bindgen]
    pub fn top(&self, element: Option<HtmlElement>) -> Result<bool, JsValue> {
        let node = element.map(DomNode::from);
        self.animator
            .top(node.as_ref())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Scroll the element's container to the bottom
    #[wasm_bindgen]
    pub fn bottom(&self, element: Option<HtmlElement>) -> Result<bool, JsValue> {
        let node = element.map(DomNode::from);
        self.animator
            .bottom(node.as_ref())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Scroll until the element's top reaches the container's top
    #[wasm_bindgen]
    pub fn section(&self, element: Option<HtmlElement>) -> Result<bool, JsValue> {
        let node = element.map(DomNode::from);
        self.animator
            .section(node.as_ref())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Stop the active run where it is
    #[wasm_bindgen]
    pub fn cancel(&self) {
        self.animator.cancel();
    }

    #[wasm_bindgen(js_name = isRunning)]
    pub fn is_running(&self) -> bool {
        self.animator.is_running()
    }

    /// Duration in seconds
    #[wasm_bindgen(getter)]
    pub fn duration(&self) -> f64 {
        self.animator.config().duration
    }

    /// Easing curve name
    #[wasm_bindgen(getter)]
    pub fn curve(&self) -> String {
        self.animator.config().animate.name().to_string()
    }
}

impl AnimatorHandle {
    fn with_config(config: AnimatorConfig) -> Self {
        Self {
            animator: ScrollAnimator::new(config, Rc::new(BrowserScheduler::new())),
        }
    }
}
