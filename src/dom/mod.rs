//! Element geometry used by the scroll animator
//!
//! `ScrollElement` exposes the handful of DOM layout properties the
//! animator reads and writes, so the stepping logic runs the same against
//! real `HtmlElement`s and in-memory test trees.

pub mod web;

#[cfg(test)]
pub mod mock;

pub use web::DomNode;

/// Layout properties of an element taking part in a scroll animation
pub trait ScrollElement: Clone {
    /// Nearest positioned ancestor, if any
    fn offset_parent(&self) -> Option<Self>;
    /// Distance from the top edge of the offset parent
    fn offset_top(&self) -> f64;
    /// Rendered height including borders
    fn offset_height(&self) -> f64;
    fn scroll_top(&self) -> f64;
    fn set_scroll_top(&self, value: f64);
    fn client_height(&self) -> f64;
    fn scroll_height(&self) -> f64;
    /// Whether this is the document's `<body>`
    fn is_document_body(&self) -> bool;
    /// Height of the window viewport
    fn window_inner_height(&self) -> f64;
    /// Node identity
    fn is_same(&self, other: &Self) -> bool;
}

/// Visible height of the container
pub fn view_height<E: ScrollElement>(container: &E) -> f64 {
    if container.is_document_body() {
        container.window_inner_height()
    } else {
        container.client_height()
    }
}

/// Total scrollable height of the container
pub fn container_height<E: ScrollElement>(container: &E) -> f64 {
    if container.is_document_body() {
        container.client_height()
    } else {
        container.scroll_height()
    }
}

/// Largest scroll offset the container can reach
pub fn max_scroll_top<E: ScrollElement>(container: &E) -> f64 {
    container_height(container) - view_height(container)
}

/// Offset of `element`'s top edge from the top of `container`.
///
/// Walks the offset-parent chain summing `offset_top` until the container
/// is reached. Elements outside the container sum to the chain's root.
pub fn offset_top_within<E: ScrollElement>(element: &E, container: &E) -> f64 {
    let mut offset = 0.0;
    let mut current = element.clone();

    loop {
        offset += current.offset_top();
        match current.offset_parent() {
            Some(parent) if parent.is_same(container) => break,
            Some(parent) => current = parent,
            None => break,
        }
    }

    offset
}
