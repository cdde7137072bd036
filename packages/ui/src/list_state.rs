//! # List view state
//!
//! Every view that shows a fetched collection (own recipes, community feed,
//! search results, comments) keeps a [`ListState`]:
//!
//! | Field | Initial | After success | After failure |
//! |-------|---------|---------------|---------------|
//! | `loading` | `true` | `false` | `false` |
//! | `error` | `false` | `false` | `true` |
//! | `items` | empty | the response | unchanged |
//!
//! Each load takes a [`LoadTicket`] from [`ListState::begin`]. Only the
//! newest ticket may settle the state, so a slow response to a superseded
//! search cannot overwrite the results of a later one.
//!
//! After a successful mutation the list is patched in place with
//! [`ListState::insert`], [`ListState::replace`] or [`ListState::remove`]
//! instead of being reloaded.

use api::{Comment, Recipe};

/// Items with a stable identity, used to patch lists in place.
pub trait Keyed {
    fn key(&self) -> &str;
}

impl Keyed for Recipe {
    fn key(&self) -> &str {
        &self.id
    }
}

impl Keyed for Comment {
    fn key(&self) -> &str {
        &self.id
    }
}

/// Identifies one issued load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct LoadTicket(u64);

#[derive(Debug, Clone, PartialEq)]
pub struct ListState<T> {
    items: Vec<T>,
    loading: bool,
    error: bool,
    generation: u64,
}

impl<T> Default for ListState<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loading: true,
            error: false,
            generation: 0,
        }
    }
}

/// What a list view should render.
#[derive(Debug, PartialEq)]
pub enum ListView<'a, T> {
    Loading,
    Failed,
    Empty,
    Items(&'a [T]),
}

impl<T> ListState<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a new load as in flight. Any earlier ticket becomes stale.
    pub fn begin(&mut self) -> LoadTicket {
        self.generation += 1;
        self.loading = true;
        self.error = false;
        LoadTicket(self.generation)
    }

    /// Apply the outcome of the load identified by `ticket`.
    ///
    /// Returns `false` and leaves the state untouched when a newer load has
    /// been issued since.
    pub fn settle<E>(&mut self, ticket: LoadTicket, result: Result<Vec<T>, E>) -> bool {
        if ticket.0 != self.generation {
            return false;
        }
        match result {
            Ok(items) => {
                self.items = items;
                self.error = false;
            }
            Err(_) => self.error = true,
        }
        self.loading = false;
        true
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn has_error(&self) -> bool {
        self.error
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn view(&self) -> ListView<'_, T> {
        if self.loading {
            ListView::Loading
        } else if self.error {
            ListView::Failed
        } else if self.items.is_empty() {
            ListView::Empty
        } else {
            ListView::Items(&self.items)
        }
    }
}

impl<T: Keyed> ListState<T> {
    /// Append a newly created item.
    pub fn insert(&mut self, item: T) {
        self.items.push(item);
    }

    /// Swap in an updated item with the same key. Returns whether it was found.
    pub fn replace(&mut self, item: T) -> bool {
        match self.items.iter_mut().find(|existing| existing.key() == item.key()) {
            Some(slot) => {
                *slot = item;
                true
            }
            None => false,
        }
    }

    /// Drop the item with `key`, returning it.
    pub fn remove(&mut self, key: &str) -> Option<T> {
        let index = self.items.iter().position(|item| item.key() == key)?;
        Some(self.items.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Item(&'static str, u32);

    impl Keyed for Item {
        fn key(&self) -> &str {
            self.0
        }
    }

    fn loaded(items: Vec<Item>) -> ListState<Item> {
        let mut state = ListState::new();
        let ticket = state.begin();
        assert!(state.settle::<()>(ticket, Ok(items)));
        state
    }

    #[test]
    fn test_starts_loading() {
        let state = ListState::<Item>::new();
        assert!(state.is_loading());
        assert!(!state.has_error());
        assert_eq!(state.view(), ListView::Loading);
    }

    #[test]
    fn test_success_renders_exactly_the_response() {
        let state = loaded(vec![Item("a", 1), Item("b", 2)]);
        assert!(!state.is_loading());
        assert_eq!(state.view(), ListView::Items(&[Item("a", 1), Item("b", 2)][..]));
    }

    #[test]
    fn test_success_with_no_items_is_empty() {
        let state = loaded(Vec::new());
        assert_eq!(state.view(), ListView::Empty);
    }

    #[test]
    fn test_failure_keeps_last_known_items() {
        let mut state = loaded(vec![Item("a", 1)]);
        let ticket = state.begin();
        assert!(state.is_loading());
        assert!(state.settle(ticket, Err("offline")));

        assert!(!state.is_loading());
        assert!(state.has_error());
        assert_eq!(state.view(), ListView::Failed);
        assert_eq!(state.items(), &[Item("a", 1)]);
    }

    #[test]
    fn test_first_load_failure_leaves_items_empty() {
        let mut state = ListState::<Item>::new();
        let ticket = state.begin();
        state.settle(ticket, Err("offline"));
        assert!(state.items().is_empty());
        assert_eq!(state.view(), ListView::Failed);
    }

    #[test]
    fn test_begin_clears_previous_error() {
        let mut state = ListState::<Item>::new();
        let ticket = state.begin();
        state.settle(ticket, Err(()));
        state.begin();
        assert!(!state.has_error());
        assert!(state.is_loading());
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut state = ListState::new();
        let pasta = state.begin();
        let pizza = state.begin();

        assert!(state.settle::<()>(pizza, Ok(vec![Item("pizza", 1)])));
        assert!(!state.settle::<()>(pasta, Ok(vec![Item("pasta", 1)])));

        assert_eq!(state.items(), &[Item("pizza", 1)]);
    }

    #[test]
    fn test_stale_response_does_not_end_newer_load() {
        let mut state = ListState::<Item>::new();
        let old = state.begin();
        let _new = state.begin();
        assert!(!state.settle(old, Err(())));
        assert!(state.is_loading());
        assert!(!state.has_error());
    }

    #[test]
    fn test_patch_in_place() {
        let mut state = loaded(vec![Item("a", 1), Item("b", 2)]);

        state.insert(Item("c", 3));
        assert!(state.replace(Item("a", 10)));
        assert!(!state.replace(Item("zzz", 0)));
        assert_eq!(state.remove("b"), Some(Item("b", 2)));
        assert_eq!(state.remove("b"), None);

        assert_eq!(state.items(), &[Item("a", 10), Item("c", 3)]);
    }
}
