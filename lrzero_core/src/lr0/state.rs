use std::slice;

use crate::Item;

/// Index of a state in the canonical collection
pub type StateId = usize;

/// The state every parse starts in
pub const START_STATE: StateId = 0;

/// LR(0) item set
///
/// Items are kept sorted and free of duplicates, so two states holding the same items compare
/// (and hash) equal no matter in which order the items were discovered.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct State {
    items: Vec<Item>,
}

impl State {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bring a collection of items into canonical form
    pub fn from_items<I>(items: I) -> Self
    where
        I: IntoIterator<Item = Item>,
    {
        let mut items: Vec<Item> = items.into_iter().collect();
        items.sort();
        items.dedup();
        Self { items }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn iter(&self) -> slice::Iter<'_, Item> {
        self.items.iter()
    }

    pub fn contains(&self, item: &Item) -> bool {
        self.items.binary_search(item).is_ok()
    }

    pub fn is_superset(&self, other: &State) -> bool {
        other.iter().all(|item| self.contains(item))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// An empty state stands for "no transition"
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<'a> IntoIterator for &'a State {
    type Item = &'a Item;
    type IntoIter = slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
