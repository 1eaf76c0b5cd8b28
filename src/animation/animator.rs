//! Scroll animator handle
//!
//! Exposes the `top`, `bottom` and `section` entry points. Each call builds
//! a fresh `ScrollRun` and drives it through the frame scheduler. Only one
//! run is active per animator: starting a run supersedes the previous one,
//! which stops on its next frame without writing.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use super::scroll_run::{RunState, ScrollMode, ScrollRun};
use crate::config::AnimatorConfig;
use crate::dom::ScrollElement;
use crate::error::{Result, ScrollError};
use crate::scheduler::FrameScheduler;
use crate::{console_debug, console_log};

pub struct ScrollAnimator<E: ScrollElement + 'static> {
    config: AnimatorConfig,
    scheduler: Rc<dyn FrameScheduler>,
    /// Resolved from the first target's offset parent, then reused
    container: RefCell<Option<E>>,
    /// Token of the run allowed to write, if any
    active: Rc<Cell<Option<u64>>>,
    last_token: Cell<u64>,
}

impl<E: ScrollElement + 'static> ScrollAnimator<E> {
    pub fn new(config: AnimatorConfig, scheduler: Rc<dyn FrameScheduler>) -> Self {
        Self {
            config,
            scheduler,
            container: RefCell::new(None),
            active: Rc::new(Cell::new(None)),
            last_token: Cell::new(0),
        }
    }

    pub fn config(&self) -> &AnimatorConfig {
        &self.config
    }

    /// The cached scroll container, once an entry point has resolved it
    pub fn container(&self) -> Option<E> {
        self.container.borrow().clone()
    }

    pub fn is_running(&self) -> bool {
        self.active.get().is_some()
    }

    /// Stop the active run, leaving the scroll offset where it is
    pub fn cancel(&self) {
        if let Some(token) = self.active.take() {
            console_debug!("scroll run {} cancelled", token);
        }
    }

    /// Animate the container to scroll offset 0
    pub fn top(&self, element: Option<&E>) -> Result<bool> {
        self.start(ScrollMode::Top, element)
    }

    /// Animate the container to its largest scroll offset
    pub fn bottom(&self, element: Option<&E>) -> Result<bool> {
        self.start(ScrollMode::Bottom, element)
    }

    /// Animate the container until `element`'s top is aligned with its top
    pub fn section(&self, element: Option<&E>) -> Result<bool> {
        self.start(ScrollMode::Section, element)
    }

    /// Returns `Ok(false)` when already at rest, `Ok(true)` once a run is scheduled
    fn start(&self, mode: ScrollMode, element: Option<&E>) -> Result<bool> {
        let element = element.ok_or(ScrollError::MissingElement)?;
        let container = self.resolve_container(element)?;

        let run = ScrollRun::new(
            mode,
            element.clone(),
            container,
            self.config.animate,
            self.config.duration,
        );

        // The newest call wins even when there is nothing to animate.
        self.cancel();

        if run.at_rest() {
            return Ok(false);
        }

        let token = self.last_token.get() + 1;
        self.last_token.set(token);
        self.active.set(Some(token));
        console_debug!("scroll run {} ({}) toward {}", token, run.mode().name(), run.target_offset());

        schedule(run, token, self.active.clone(), self.scheduler.clone()).map_err(|e| {
            self.active.set(None);
            e
        })?;

        Ok(true)
    }

    fn resolve_container(&self, element: &E) -> Result<E> {
        let mut cached = self.container.borrow_mut();
        if let Some(container) = cached.as_ref() {
            return Ok(container.clone());
        }

        let container = element.offset_parent().ok_or(ScrollError::NoContainer)?;
        *cached = Some(container.clone());
        Ok(container)
    }
}

fn schedule<E: ScrollElement + 'static>(
    mut run: ScrollRun<E>,
    token: u64,
    active: Rc<Cell<Option<u64>>>,
    scheduler: Rc<dyn FrameScheduler>,
) -> Result<()> {
    let next = scheduler.clone();

    scheduler.request_frame(Box::new(move |timestamp| {
        if active.get() != Some(token) {
            run.cancel();
            console_debug!("scroll run {} superseded", token);
            return;
        }

        match run.step(timestamp) {
            RunState::Stopped => {
                active.set(None);
                console_debug!("scroll run {} settled", token);
            }
            RunState::Idle | RunState::Running => {
                if let Err(e) = schedule(run, token, active.clone(), next) {
                    active.set(None);
                    console_log!("scroll run {} aborted: {}", token, e);
                }
            }
        }
    }))
}
