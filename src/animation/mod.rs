//! Scroll animation
//!
//! Eased scrolling of a container toward the top, the bottom, or a child
//! section, one step per animation frame.

mod animator;
mod easing;
mod scroll_run;

pub use animator::ScrollAnimator;
pub use easing::{ease, Easing};
pub use scroll_run::{RunState, ScrollMode, ScrollRun, SCROLL_EPSILON};
