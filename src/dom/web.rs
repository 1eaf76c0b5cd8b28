use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use super::ScrollElement;

/// A real DOM element
#[derive(Debug, Clone)]
pub struct DomNode(pub HtmlElement);

impl From<HtmlElement> for DomNode {
    fn from(element: HtmlElement) -> Self {
        Self(element)
    }
}

impl ScrollElement for DomNode {
    fn offset_parent(&self) -> Option<Self> {
        self.0
            .offset_parent()
            .and_then(|parent| parent.dyn_into::<HtmlElement>().ok())
            .map(DomNode)
    }

    fn offset_top(&self) -> f64 {
        self.0.offset_top() as f64
    }

    fn offset_height(&self) -> f64 {
        self.0.offset_height() as f64
    }

    fn scroll_top(&self) -> f64 {
        self.0.scroll_top() as f64
    }

    fn set_scroll_top(&self, value: f64) {
        self.0.set_scroll_top(value.round() as i32);
    }

    fn client_height(&self) -> f64 {
        self.0.client_height() as f64
    }

    fn scroll_height(&self) -> f64 {
        self.0.scroll_height() as f64
    }

    fn is_document_body(&self) -> bool {
        web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.body())
            .map(|body| self.0.is_same_node(Some(&body)))
            .unwrap_or(false)
    }

    fn window_inner_height(&self) -> f64 {
        web_sys::window()
            .and_then(|window| window.inner_height().ok())
            .and_then(|height| height.as_f64())
            .unwrap_or(0.0)
    }

    fn is_same(&self, other: &Self) -> bool {
        self.0.is_same_node(Some(&other.0))
    }
}
