//! Mobile navigation toggling.
//!
//! Triggers and panels are paired by position; callers must hand over
//! equally long, consistently ordered collections.

use tracing::debug;

pub trait MenuView {
    /// Swap the panel between its `closed` and `opened` classes.
    fn set_panel_open(&self, index: usize, open: bool);
    /// Mirror the panel state on the trigger's `aria-expanded`.
    fn set_trigger_expanded(&self, index: usize, expanded: bool);
}

pub struct MobileMenu<V> {
    view: V,
    open: Vec<bool>,
}

impl<V: MenuView> MobileMenu<V> {
    /// `initially_open[i]` is whether panel `i` already carries `opened`.
    pub fn new(view: V, initially_open: Vec<bool>) -> Self {
        Self {
            view,
            open: initially_open,
        }
    }

    pub fn len(&self) -> usize {
        self.open.len()
    }

    pub fn is_empty(&self) -> bool {
        self.open.is_empty()
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open.get(index).copied().unwrap_or(false)
    }

    /// Returns the new state, or `None` for an unpaired trigger.
    pub fn toggle(&mut self, index: usize) -> Option<bool> {
        let slot = self.open.get_mut(index)?;
        *slot = !*slot;
        let open = *slot;
        self.view.set_panel_open(index, open);
        self.view.set_trigger_expanded(index, open);
        debug!(index, open, "mobile menu toggled");
        Some(open)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;

    #[derive(Default)]
    struct Recorder {
        panels: RefCell<HashMap<usize, bool>>,
        expanded: RefCell<HashMap<usize, bool>>,
    }

    impl MenuView for &Recorder {
        fn set_panel_open(&self, index: usize, open: bool) {
            self.panels.borrow_mut().insert(index, open);
        }

        fn set_trigger_expanded(&self, index: usize, expanded: bool) {
            self.expanded.borrow_mut().insert(index, expanded);
        }
    }

    #[test]
    fn repeated_clicks_alternate_and_keep_aria_in_sync() {
        let rec = Recorder::default();
        let mut menu = MobileMenu::new(&rec, vec![false, false]);

        for click in 1..=5 {
            let open = menu.toggle(1).unwrap();
            assert_eq!(open, click % 2 == 1);
            assert_eq!(rec.panels.borrow()[&1], open);
            assert_eq!(rec.expanded.borrow()[&1], open);
        }
        assert!(!menu.is_open(0));
        assert!(!rec.panels.borrow().contains_key(&0));
    }

    #[test]
    fn starts_from_markup_state() {
        let rec = Recorder::default();
        let mut menu = MobileMenu::new(&rec, vec![true]);
        assert_eq!(menu.toggle(0), Some(false));
        assert_eq!(rec.expanded.borrow()[&0], false);
    }

    #[test]
    fn unpaired_trigger_is_ignored() {
        let rec = Recorder::default();
        let mut menu = MobileMenu::new(&rec, vec![false]);
        assert_eq!(menu.toggle(3), None);
        assert!(rec.panels.borrow().is_empty());
    }
}
