//! A single scroll animation run
//!
//! A run is created per entry-point call and owns all timing state, so
//! runs never share a start timestamp or initial offset. The host scheduler
//! calls `step` once per frame until the run reports `RunState::Stopped`.

use super::easing::{ease, Easing};
use crate::dom::{self, ScrollElement};

/// Scroll offsets closer than this are treated as equal
pub const SCROLL_EPSILON: f64 = 0.5;

/// Where a run is heading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollMode {
    /// Scroll offset 0
    Top,
    /// Largest reachable scroll offset
    Bottom,
    /// Align the target element's top with the container's top
    Section,
}

impl ScrollMode {
    pub fn name(&self) -> &'static str {
        match self {
            ScrollMode::Top => "top",
            ScrollMode::Bottom => "bottom",
            ScrollMode::Section => "section",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunState {
    #[default]
    Idle,
    Running,
    Stopped,
}

fn same_offset(a: f64, b: f64) -> bool {
    (a - b).abs() < SCROLL_EPSILON
}

/// Timing and geometry for one run
#[derive(Debug, Clone)]
pub struct ScrollRun<E> {
    mode: ScrollMode,
    target: E,
    container: E,
    easing: Easing,
    /// Duration in seconds
    duration: f64,
    /// Frame timestamp (ms) of the first stepped frame
    start_timestamp: Option<f64>,
    /// Container scroll offset at the first stepped frame
    initial_offset: Option<f64>,
    /// Progress reached by the last step (0.0 to 1.0)
    progress: f64,
    state: RunState,
}

impl<E: ScrollElement> ScrollRun<E> {
    pub fn new(mode: ScrollMode, target: E, container: E, easing: Easing, duration: f64) -> Self {
        Self {
            mode,
            target,
            container,
            easing,
            duration,
            start_timestamp: None,
            initial_offset: None,
            progress: 0.0,
            state: RunState::Idle,
        }
    }

    pub fn mode(&self) -> ScrollMode {
        self.mode
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    /// Fraction of the duration covered by the last step
    pub fn elapsed_fraction(&self) -> f64 {
        self.progress
    }

    /// Scroll offset this run is heading for, from current geometry
    pub fn target_offset(&self) -> f64 {
        match self.mode {
            ScrollMode::Top => 0.0,
            ScrollMode::Bottom => dom::max_scroll_top(&self.container),
            ScrollMode::Section => dom::offset_top_within(&self.target, &self.container),
        }
    }

    /// Whether the stop condition for this run's mode holds
    pub fn at_rest(&self) -> bool {
        let scroll_y = self.container.scroll_top();

        match self.mode {
            ScrollMode::Top => same_offset(scroll_y, 0.0),
            ScrollMode::Bottom => same_offset(scroll_y, dom::max_scroll_top(&self.container)),
            ScrollMode::Section => {
                let offset_y = dom::offset_top_within(&self.target, &self.container);
                let height = self.target.offset_height();
                let container_height = dom::container_height(&self.container);

                let at_top = same_offset(scroll_y, offset_y);
                let at_bottom = same_offset(scroll_y, dom::max_scroll_top(&self.container));
                let is_last = same_offset(offset_y + height, container_height);

                at_top || (at_bottom && is_last)
            }
        }
    }

    /// Advance the run to frame `timestamp` (milliseconds)
    pub fn step(&mut self, timestamp: f64) -> RunState {
        if self.state == RunState::Stopped {
            return RunState::Stopped;
        }

        // A saturated run has already written its final offset; if the
        // container clamped it, the geometric condition can never hold.
        if self.at_rest() || self.progress >= 1.0 {
            self.finish();
            return self.state;
        }

        self.scroll_toward(timestamp, self.target_offset());
        self.state = RunState::Running;
        self.state
    }

    /// Stop without further writes
    pub fn cancel(&mut self) {
        self.finish();
    }

    fn finish(&mut self) {
        self.start_timestamp = None;
        self.initial_offset = None;
        self.state = RunState::Stopped;
    }

    fn scroll_toward(&mut self, timestamp: f64, offset_y: f64) {
        let container = &self.container;
        let initial = *self.initial_offset.get_or_insert_with(|| container.scroll_top());
        let start = *self.start_timestamp.get_or_insert(timestamp);

        let progress = (timestamp - start) / 1000.0;
        let t = (progress / self.duration).clamp(0.0, 1.0);
        let v = ease(t, self.duration, self.easing);
        let distance = offset_y - initial;

        self.progress = t;
        self.container.set_scroll_top(initial + distance * v);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::mock::MockElement;

    fn bottom_run(container: &MockElement) -> ScrollRun<MockElement> {
        let target = MockElement::child(container, 0.0, 50.0);
        ScrollRun::new(ScrollMode::Bottom, target, container.clone(), Easing::EaseOut, 0.5)
    }

    #[test]
    fn test_new_run_is_idle() {
        let container = MockElement::container(1000.0, 400.0);
        let run = bottom_run(&container);
        assert_eq!(run.state(), RunState::Idle);
        assert_eq!(run.mode(), ScrollMode::Bottom);
        assert_eq!(run.elapsed_fraction(), 0.0);
        assert_eq!(run.target_offset(), 600.0);
    }

    #[test]
    fn test_top_at_rest_stops_on_first_step() {
        let container = MockElement::container(1000.0, 400.0);
        let target = MockElement::child(&container, 0.0, 50.0);
        let mut run = ScrollRun::new(ScrollMode::Top, target, container.clone(), Easing::EaseOut, 0.5);

        assert!(run.at_rest());
        assert_eq!(run.step(0.0), RunState::Stopped);
        assert!(container.writes().is_empty());
    }

    #[test]
    fn test_bottom_trajectory() {
        let container = MockElement::container(1000.0, 400.0);
        let mut run = bottom_run(&container);

        let mut timestamp = 1000.0;
        let mut frames = 0;
        while run.step(timestamp) != RunState::Stopped {
            timestamp += 16.0;
            frames += 1;
            assert!(frames < 100, "run should stop");
        }

        let writes = container.writes();
        assert_eq!(writes.first(), Some(&0.0));
        assert_eq!(writes.last(), Some(&600.0));
        for pair in writes.windows(2) {
            assert!(pair[1] >= pair[0], "scroll should never move backwards");
        }
        assert_eq!(container.scroll_top(), 600.0);
    }

    #[test]
    fn test_first_frame_captures_start() {
        let container = MockElement::container(1000.0, 400.0);
        let mut run = bottom_run(&container);

        assert_eq!(run.step(5000.0), RunState::Running);
        // No time has elapsed on the first frame
        assert_eq!(container.scroll_top(), 0.0);

        run.step(5250.0);
        assert!((run.elapsed_fraction() - 0.5).abs() < 1e-9);
        // easeOut(0.5) = 0.75
        assert_eq!(container.scroll_top(), 450.0);
    }

    #[test]
    fn test_trajectory_keeps_initial_offset() {
        let container = MockElement::container(1000.0, 400.0);
        container.scroll_to(200.0);
        let target = MockElement::child(&container, 0.0, 50.0);
        let mut run = ScrollRun::new(ScrollMode::Top, target, container.clone(), Easing::EaseOut, 1.0);

        run.step(0.0);
        run.step(500.0);
        // 200 - 200 * 0.75
        assert_eq!(container.scroll_top(), 50.0);
        run.step(1000.0);
        assert_eq!(container.scroll_top(), 0.0);
        assert_eq!(run.step(1016.0), RunState::Stopped);
    }

    #[test]
    fn test_section_at_top_stops() {
        let container = MockElement::container(1000.0, 400.0);
        let section = MockElement::child(&container, 300.0, 200.0);
        container.scroll_to(300.0);
        let mut run = ScrollRun::new(ScrollMode::Section, section, container.clone(), Easing::EaseOut, 0.5);

        assert!(run.at_rest());
        assert_eq!(run.step(0.0), RunState::Stopped);
    }

    #[test]
    fn test_section_last_element_stops_at_bottom() {
        let container = MockElement::container(1000.0, 400.0);
        // Last section: 800 + 200 == 1000, but its top can never reach 800
        let section = MockElement::child(&container, 800.0, 200.0);
        container.scroll_to(600.0);
        let run = ScrollRun::new(ScrollMode::Section, section, container, Easing::EaseOut, 0.5);

        assert!(run.at_rest());
    }

    #[test]
    fn test_section_not_last_keeps_running_at_bottom() {
        let container = MockElement::container(1000.0, 400.0);
        let section = MockElement::child(&container, 700.0, 100.0);
        container.scroll_to(600.0);
        let run = ScrollRun::new(ScrollMode::Section, section, container, Easing::EaseOut, 0.5);

        assert!(!run.at_rest());
    }

    #[test]
    fn test_saturated_run_stops_when_clamped() {
        let container = MockElement::container(1000.0, 400.0);
        let section = MockElement::child(&container, 700.0, 100.0);
        let mut run = ScrollRun::new(ScrollMode::Section, section, container.clone(), Easing::EaseOut, 0.5);

        run.step(0.0);
        assert_eq!(run.step(600.0), RunState::Running);
        // The container clamps the write at its maximum offset
        assert_eq!(container.scroll_top(), 600.0);
        assert_eq!(run.step(616.0), RunState::Stopped);
    }

    #[test]
    fn test_cancel_stops_without_writes() {
        let container = MockElement::container(1000.0, 400.0);
        let mut run = bottom_run(&container);

        run.step(0.0);
        let writes = container.writes().len();
        run.cancel();
        assert_eq!(run.step(100.0), RunState::Stopped);
        assert_eq!(container.writes().len(), writes);
    }
}
