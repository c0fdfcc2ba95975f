//! One-shot reveal of images as they scroll into view.

use tracing::debug;

pub trait RevealView {
    /// Put the element in its pre-reveal state (`reveal`).
    fn mark_pending(&self, index: usize);
    /// Add the revealed classes (`reveal-in`, `fade-up`).
    fn mark_revealed(&self, index: usize);
    /// Stop observing the element.
    fn unobserve(&self, index: usize);
}

pub struct RevealAnimator<V> {
    view: V,
    threshold: f64,
    revealed: Vec<bool>,
}

impl<V: RevealView> RevealAnimator<V> {
    pub fn new(view: V, count: usize, threshold: f64) -> Self {
        for i in 0..count {
            view.mark_pending(i);
        }
        Self {
            view,
            threshold,
            revealed: vec![false; count],
        }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.get(index).copied().unwrap_or(false)
    }

    pub fn remaining(&self) -> usize {
        self.revealed.iter().filter(|r| !**r).count()
    }

    /// Feeds one intersection entry. Returns `true` only on the transition.
    pub fn on_intersection(&mut self, index: usize, ratio: f64, is_intersecting: bool) -> bool {
        let Some(done) = self.revealed.get_mut(index) else {
            return false;
        };
        if *done || !is_intersecting || ratio < self.threshold {
            return false;
        }
        *done = true;
        self.view.mark_revealed(index);
        self.view.unobserve(index);
        debug!(index, ratio, "element revealed");
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Recorder {
        log: RefCell<Vec<(&'static str, usize)>>,
    }

    impl RevealView for &Recorder {
        fn mark_pending(&self, index: usize) {
            self.log.borrow_mut().push(("pending", index));
        }

        fn mark_revealed(&self, index: usize) {
            self.log.borrow_mut().push(("revealed", index));
        }

        fn unobserve(&self, index: usize) {
            self.log.borrow_mut().push(("unobserve", index));
        }
    }

    #[test]
    fn every_element_starts_pending() {
        let rec = Recorder::default();
        let animator = RevealAnimator::new(&rec, 2, 0.15);
        assert_eq!(*rec.log.borrow(), vec![("pending", 0), ("pending", 1)]);
        assert_eq!(animator.remaining(), 2);
    }

    #[test]
    fn reveals_exactly_once() {
        let rec = Recorder::default();
        let mut animator = RevealAnimator::new(&rec, 1, 0.15);
        rec.log.borrow_mut().clear();

        assert!(animator.on_intersection(0, 0.20, true));
        assert!(!animator.on_intersection(0, 0.90, true));
        assert!(animator.is_revealed(0));
        assert_eq!(*rec.log.borrow(), vec![("revealed", 0), ("unobserve", 0)]);
    }

    #[test]
    fn below_threshold_or_leaving_does_nothing() {
        let rec = Recorder::default();
        let mut animator = RevealAnimator::new(&rec, 1, 0.15);
        assert!(!animator.on_intersection(0, 0.05, true));
        assert!(!animator.on_intersection(0, 0.0, false));
        assert!(!animator.is_revealed(0));
        assert_eq!(animator.remaining(), 1);
    }
}
