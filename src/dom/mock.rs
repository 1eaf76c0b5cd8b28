//! In-memory element tree for unit tests

use std::cell::RefCell;
use std::rc::Rc;

use super::{max_scroll_top, ScrollElement};

#[derive(Debug, Default)]
struct MockNode {
    parent: Option<MockElement>,
    offset_top: f64,
    offset_height: f64,
    scroll_top: f64,
    client_height: f64,
    scroll_height: f64,
    is_body: bool,
    inner_height: f64,
    writes: Vec<f64>,
}

/// Shared handle to a mock node, cloned the way DOM references are
#[derive(Debug, Clone)]
pub struct MockElement(Rc<RefCell<MockNode>>);

impl MockElement {
    fn from_node(node: MockNode) -> Self {
        Self(Rc::new(RefCell::new(node)))
    }

    /// Scrollable element with `scroll_height` content in a `client_height` box
    pub fn container(scroll_height: f64, client_height: f64) -> Self {
        Self::from_node(MockNode {
            scroll_height,
            client_height,
            offset_height: client_height,
            ..Default::default()
        })
    }

    /// Document body with `content_height` content in an `inner_height` window
    pub fn body(content_height: f64, inner_height: f64) -> Self {
        Self::from_node(MockNode {
            client_height: content_height,
            scroll_height: content_height,
            offset_height: content_height,
            is_body: true,
            inner_height,
            ..Default::default()
        })
    }

    pub fn child(parent: &MockElement, offset_top: f64, offset_height: f64) -> Self {
        Self::from_node(MockNode {
            parent: Some(parent.clone()),
            offset_top,
            offset_height,
            client_height: offset_height,
            scroll_height: offset_height,
            ..Default::default()
        })
    }

    /// Element with no offset parent (detached or `display: none`)
    pub fn detached() -> Self {
        Self::from_node(MockNode::default())
    }

    /// Place the scroll offset directly, bypassing the write log
    pub fn scroll_to(&self, value: f64) {
        self.0.borrow_mut().scroll_top = value;
    }

    /// Every value the animator wrote, after rounding and clamping
    pub fn writes(&self) -> Vec<f64> {
        self.0.borrow().writes.clone()
    }
}

impl ScrollElement for MockElement {
    fn offset_parent(&self) -> Option<Self> {
        self.0.borrow().parent.clone()
    }

    fn offset_top(&self) -> f64 {
        self.0.borrow().offset_top
    }

    fn offset_height(&self) -> f64 {
        self.0.borrow().offset_height
    }

    fn scroll_top(&self) -> f64 {
        self.0.borrow().scroll_top
    }

    // Browsers store whole pixels and clamp to the scrollable range.
    fn set_scroll_top(&self, value: f64) {
        let max = max_scroll_top(self).max(0.0);
        let value = value.round().clamp(0.0, max);
        let mut node = self.0.borrow_mut();
        node.scroll_top = value;
        node.writes.push(value);
    }

    fn client_height(&self) -> f64 {
        self.0.borrow().client_height
    }

    fn scroll_height(&self) -> f64 {
        self.0.borrow().scroll_height
    }

    fn is_document_body(&self) -> bool {
        self.0.borrow().is_body
    }

    fn window_inner_height(&self) -> f64 {
        self.0.borrow().inner_height
    }

    fn is_same(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}
