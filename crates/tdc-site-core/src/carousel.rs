//! Hero carousel state machine.
//!
//! One slide is active at all times; the indicator at the same position (if
//! there is one) is the only active indicator. A repeating timer advances
//! the slide and wraps; indicators jump directly.

use crate::scheduler::Scheduler;
use std::cell::RefCell;
use std::rc::Rc;
use tracing::debug;

/// Interval from a `data-interval` attribute, falling back to `default_ms`
/// unless the attribute starts with a positive integer (`"3000"`, `"3000ms"`).
pub fn parse_interval(attr: Option<&str>, default_ms: u32) -> u32 {
    let Some(raw) = attr else {
        return default_ms;
    };
    let raw = raw.trim_start();
    let digits = raw
        .strip_prefix('+')
        .unwrap_or(raw)
        .split(|c: char| !c.is_ascii_digit())
        .next()
        .unwrap_or("");
    match digits.parse::<u32>() {
        Ok(ms) if ms > 0 => ms,
        _ => default_ms,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselState {
    len: usize,
    current: usize,
}

impl CarouselState {
    /// `None` for a carousel without slides.
    pub fn new(len: usize) -> Option<Self> {
        (len > 0).then_some(Self { len, current: 0 })
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn advance(&mut self) -> usize {
        self.current = (self.current + 1) % self.len;
        self.current
    }

    pub fn jump(&mut self, index: usize) -> Option<usize> {
        if index >= self.len {
            return None;
        }
        self.current = index;
        Some(index)
    }
}

pub trait CarouselView {
    fn set_slide_active(&self, index: usize, active: bool);
    fn set_indicator_active(&self, index: usize, active: bool);
}

struct Inner<V> {
    state: CarouselState,
    indicators: usize,
    view: V,
}

impl<V: CarouselView> Inner<V> {
    fn render(&self) {
        let current = self.state.current();
        for i in 0..self.state.len() {
            self.view.set_slide_active(i, i == current);
        }
        for i in 0..self.indicators {
            self.view.set_indicator_active(i, i == current);
        }
    }
}

/// Shared handle used by indicator listeners.
pub struct CarouselControl<V> {
    inner: Rc<RefCell<Inner<V>>>,
}

impl<V> Clone for CarouselControl<V> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<V: CarouselView> CarouselControl<V> {
    pub fn current(&self) -> usize {
        self.inner.borrow().state.current()
    }

    pub fn jump(&self, index: usize) {
        let mut inner = self.inner.borrow_mut();
        if inner.state.jump(index).is_some() {
            inner.render();
            debug!(index, "carousel jumped");
        }
    }

    fn advance(&self) {
        let mut inner = self.inner.borrow_mut();
        let index = inner.state.advance();
        inner.render();
        debug!(index, "carousel advanced");
    }
}

/// A running carousel. Dropping it (or calling `dispose`) stops rotation.
pub struct Carousel<V, S: Scheduler> {
    control: CarouselControl<V>,
    timer: Option<S::Handle>,
}

impl<V: CarouselView + 'static, S: Scheduler> Carousel<V, S> {
    /// Shows slide 0 and starts rotating. `None` when there are no slides.
    pub fn start(
        view: V,
        slides: usize,
        indicators: usize,
        interval_ms: u32,
        scheduler: &S,
    ) -> Option<Self> {
        let state = CarouselState::new(slides)?;
        let inner = Inner {
            state,
            indicators,
            view,
        };
        inner.render();
        let control = CarouselControl {
            inner: Rc::new(RefCell::new(inner)),
        };

        let ticker = control.clone();
        let timer = scheduler.every(interval_ms, Box::new(move || ticker.advance()));
        debug!(slides, indicators, interval_ms, "carousel started");

        Some(Self {
            control,
            timer: Some(timer),
        })
    }

    pub fn control(&self) -> CarouselControl<V> {
        self.control.clone()
    }

    pub fn current(&self) -> usize {
        self.control.current()
    }

    pub fn jump(&self, index: usize) {
        self.control.jump(index)
    }

    pub fn is_running(&self) -> bool {
        self.timer.is_some()
    }

    pub fn dispose(&mut self) {
        self.timer.take();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ManualScheduler;

    #[derive(Default)]
    struct Marks {
        slides: RefCell<Vec<bool>>,
        dots: RefCell<Vec<bool>>,
    }

    #[derive(Clone, Default)]
    struct Recorder(Rc<Marks>);

    impl Recorder {
        fn with(slides: usize, dots: usize) -> Self {
            let r = Recorder::default();
            *r.0.slides.borrow_mut() = vec![false; slides];
            *r.0.dots.borrow_mut() = vec![false; dots];
            r
        }

        fn active_slides(&self) -> Vec<usize> {
            active(&self.0.slides.borrow())
        }

        fn active_dots(&self) -> Vec<usize> {
            active(&self.0.dots.borrow())
        }
    }

    fn active(marks: &[bool]) -> Vec<usize> {
        marks
            .iter()
            .enumerate()
            .filter_map(|(i, on)| on.then_some(i))
            .collect()
    }

    impl CarouselView for Recorder {
        fn set_slide_active(&self, index: usize, active: bool) {
            self.0.slides.borrow_mut()[index] = active;
        }

        fn set_indicator_active(&self, index: usize, active: bool) {
            self.0.dots.borrow_mut()[index] = active;
        }
    }

    #[test]
    fn interval_attribute_parsing() {
        assert_eq!(parse_interval(None, 5000), 5000);
        assert_eq!(parse_interval(Some("3000"), 5000), 3000);
        assert_eq!(parse_interval(Some(" 1200ms"), 5000), 1200);
        assert_eq!(parse_interval(Some("0"), 5000), 5000);
        assert_eq!(parse_interval(Some("-200"), 5000), 5000);
        assert_eq!(parse_interval(Some("fast"), 5000), 5000);
        assert_eq!(parse_interval(Some(""), 5000), 5000);
    }

    #[test]
    fn default_interval_advances_and_wraps() {
        let clock = ManualScheduler::default();
        let view = Recorder::with(3, 3);
        let carousel = Carousel::start(view.clone(), 3, 3, 5000, &clock).unwrap();

        assert_eq!(carousel.current(), 0);
        assert_eq!(view.active_slides(), vec![0]);
        assert_eq!(view.active_dots(), vec![0]);

        clock.advance(5000);
        assert_eq!(carousel.current(), 1);
        assert_eq!(view.active_slides(), vec![1]);
        assert_eq!(view.active_dots(), vec![1]);

        clock.advance(10_000);
        assert_eq!(carousel.current(), 0);
        assert_eq!(view.active_slides(), vec![0]);
    }

    #[test]
    fn indicator_jumps_from_any_index() {
        let clock = ManualScheduler::default();
        let view = Recorder::with(3, 3);
        let carousel = Carousel::start(view.clone(), 3, 3, 5000, &clock).unwrap();

        clock.advance(5000);
        carousel.control().jump(2);
        assert_eq!(carousel.current(), 2);
        assert_eq!(view.active_slides(), vec![2]);
        assert_eq!(view.active_dots(), vec![2]);

        carousel.jump(7);
        assert_eq!(carousel.current(), 2);
    }

    #[test]
    fn works_without_indicators() {
        let clock = ManualScheduler::default();
        let view = Recorder::with(2, 0);
        let carousel = Carousel::start(view.clone(), 2, 0, 1000, &clock).unwrap();
        clock.advance(1000);
        assert_eq!(carousel.current(), 1);
        assert!(view.active_dots().is_empty());
    }

    #[test]
    fn no_slides_means_no_carousel() {
        let clock = ManualScheduler::default();
        assert!(Carousel::start(Recorder::default(), 0, 0, 1000, &clock).is_none());
        assert_eq!(clock.pending(), 0);
    }

    #[test]
    fn instances_keep_separate_timers() {
        let clock = ManualScheduler::default();
        let fast_view = Recorder::with(3, 0);
        let slow_view = Recorder::with(3, 0);
        let fast = Carousel::start(fast_view, 3, 0, 1000, &clock).unwrap();
        let slow = Carousel::start(slow_view, 3, 0, 3000, &clock).unwrap();

        clock.advance(2000);
        assert_eq!(fast.current(), 2);
        assert_eq!(slow.current(), 0);
    }

    #[test]
    fn dispose_stops_rotation() {
        let clock = ManualScheduler::default();
        let mut carousel = Carousel::start(Recorder::with(3, 0), 3, 0, 1000, &clock).unwrap();
        carousel.dispose();
        assert!(!carousel.is_running());
        clock.advance(5000);
        assert_eq!(carousel.current(), 0);
    }
}
