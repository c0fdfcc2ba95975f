//! Category filter over the tour cards.
//!
//! Card and section visibility is recomputed from the active filter on every
//! change; nothing but the filter value itself is stored.

use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FilterValue {
    #[default]
    All,
    Tag(String),
}

impl FilterValue {
    /// A button without `data-filter`, or with `all`, shows everything.
    pub fn from_attr(attr: Option<&str>) -> Self {
        match attr.map(str::trim) {
            None | Some("") | Some("all") => FilterValue::All,
            Some(tag) => FilterValue::Tag(tag.to_owned()),
        }
    }

    pub fn admits(&self, category: Option<&str>) -> bool {
        match self {
            FilterValue::All => true,
            FilterValue::Tag(tag) => category == Some(tag.as_str()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Visibility {
    pub cards: Vec<bool>,
    pub sections_collapsed: Vec<bool>,
}

/// `sections[j]` lists the indices of the cards inside section `j`.
pub fn derive(filter: &FilterValue, cards: &[Option<String>], sections: &[Vec<usize>]) -> Visibility {
    let cards: Vec<bool> = cards.iter().map(|c| filter.admits(c.as_deref())).collect();
    let sections_collapsed = sections
        .iter()
        .map(|members| !members.iter().any(|&i| cards.get(i).copied().unwrap_or(false)))
        .collect();
    Visibility {
        cards,
        sections_collapsed,
    }
}

pub trait FilterView {
    fn set_card_visible(&self, index: usize, visible: bool);
    fn set_section_collapsed(&self, index: usize, collapsed: bool);
    /// Toggles `active` and `aria-pressed` together.
    fn set_button_active(&self, index: usize, active: bool);
}

pub struct CategoryFilter<V> {
    view: V,
    buttons: Vec<FilterValue>,
    cards: Vec<Option<String>>,
    sections: Vec<Vec<usize>>,
    active: FilterValue,
}

impl<V: FilterView> CategoryFilter<V> {
    /// Starts on `all`: every card shown, no section collapsed.
    pub fn new(
        view: V,
        buttons: Vec<FilterValue>,
        cards: Vec<Option<String>>,
        sections: Vec<Vec<usize>>,
    ) -> Self {
        let filter = Self {
            view,
            buttons,
            cards,
            sections,
            active: FilterValue::All,
        };
        filter.render();
        filter
    }

    pub fn active(&self) -> &FilterValue {
        &self.active
    }

    pub fn visibility(&self) -> Visibility {
        derive(&self.active, &self.cards, &self.sections)
    }

    /// Handles a click on button `index`.
    pub fn select(&mut self, index: usize) {
        let Some(value) = self.buttons.get(index).cloned() else {
            return;
        };
        for i in 0..self.buttons.len() {
            self.view.set_button_active(i, i == index);
        }
        debug!(?value, "category filter selected");
        self.active = value;
        self.render();
    }

    fn render(&self) {
        let vis = self.visibility();
        for (i, visible) in vis.cards.iter().enumerate() {
            self.view.set_card_visible(i, *visible);
        }
        for (j, collapsed) in vis.sections_collapsed.iter().enumerate() {
            self.view.set_section_collapsed(j, *collapsed);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::BTreeMap;

    #[derive(Default)]
    struct Recorder {
        cards: RefCell<BTreeMap<usize, bool>>,
        collapsed: RefCell<BTreeMap<usize, bool>>,
        buttons: RefCell<BTreeMap<usize, bool>>,
    }

    impl FilterView for &Recorder {
        fn set_card_visible(&self, index: usize, visible: bool) {
            self.cards.borrow_mut().insert(index, visible);
        }

        fn set_section_collapsed(&self, index: usize, collapsed: bool) {
            self.collapsed.borrow_mut().insert(index, collapsed);
        }

        fn set_button_active(&self, index: usize, active: bool) {
            self.buttons.borrow_mut().insert(index, active);
        }
    }

    fn tags(list: &[&str]) -> Vec<Option<String>> {
        list.iter().map(|t| Some((*t).to_owned())).collect()
    }

    #[test]
    fn attr_parsing() {
        assert_eq!(FilterValue::from_attr(None), FilterValue::All);
        assert_eq!(FilterValue::from_attr(Some("all")), FilterValue::All);
        assert_eq!(FilterValue::from_attr(Some("wine")), FilterValue::Tag("wine".into()));
    }

    #[test]
    fn initial_state_shows_everything() {
        let rec = Recorder::default();
        let filter = CategoryFilter::new(
            &rec,
            vec![FilterValue::All, FilterValue::Tag("a".into())],
            tags(&["a", "a", "b"]),
            vec![vec![0, 1], vec![2]],
        );
        assert_eq!(filter.active(), &FilterValue::All);
        assert!(rec.cards.borrow().values().all(|v| *v));
        assert!(rec.collapsed.borrow().values().all(|c| !*c));
        assert!(rec.buttons.borrow().is_empty());
    }

    #[test]
    fn selecting_a_tag_hides_other_cards_and_collapses_empty_sections() {
        let rec = Recorder::default();
        let mut filter = CategoryFilter::new(
            &rec,
            vec![
                FilterValue::All,
                FilterValue::Tag("a".into()),
                FilterValue::Tag("b".into()),
            ],
            tags(&["a", "a", "b"]),
            vec![vec![0, 1], vec![2]],
        );

        filter.select(1);
        let visible: Vec<usize> = rec
            .cards
            .borrow()
            .iter()
            .filter_map(|(i, v)| v.then_some(*i))
            .collect();
        assert_eq!(visible, vec![0, 1]);
        assert_eq!(rec.collapsed.borrow()[&0], false);
        assert_eq!(rec.collapsed.borrow()[&1], true);
        assert_eq!(
            *rec.buttons.borrow(),
            BTreeMap::from([(0, false), (1, true), (2, false)])
        );

        filter.select(0);
        assert!(rec.cards.borrow().values().all(|v| *v));
        assert_eq!(rec.collapsed.borrow()[&1], false);
    }

    #[test]
    fn uncategorised_cards_only_show_under_all() {
        let vis = derive(
            &FilterValue::Tag("a".into()),
            &[None, Some("a".into())],
            &[vec![0], vec![]],
        );
        assert_eq!(vis.cards, vec![false, true]);
        assert_eq!(vis.sections_collapsed, vec![true, true]);
    }
}
