//! Page State Stores
//!
//! Each page keeps its records in a [`RecordSet`] inside a
//! `reactive_stores::Store` for field-level reactivity.

use reactive_stores::Store;

use crate::feedback::DialogState;
use crate::models::{Keyed, Post, RecipeSummary};

/// Identifies one list fetch. Only the newest ticket may replace records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket(u64);

/// Ordered records of one page, mutated by whole-list replacement or by
/// removal/update of a single key
#[derive(Debug, Clone, PartialEq)]
pub struct RecordSet<T> {
    records: Vec<T>,
    generation: u64,
    loaded: bool,
    settled: bool,
}

impl<T> Default for RecordSet<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            generation: 0,
            loaded: false,
            settled: false,
        }
    }
}

impl<T: Keyed> RecordSet<T> {
    /// Start a fetch; any earlier ticket becomes stale
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.generation += 1;
        FetchTicket(self.generation)
    }

    /// Replace all records with a fetch result. Returns false (and keeps the
    /// current records) when `ticket` is stale.
    pub fn replace(&mut self, ticket: FetchTicket, records: Vec<T>) -> bool {
        if ticket.0 != self.generation {
            return false;
        }
        self.records = records;
        self.loaded = true;
        self.settled = true;
        true
    }

    /// Record that the fetch for `ticket` failed. Records stay as they were;
    /// returns false when the ticket is stale.
    pub fn mark_failed(&mut self, ticket: FetchTicket) -> bool {
        if ticket.0 != self.generation {
            return false;
        }
        self.settled = true;
        true
    }

    /// Remove the record with `key`, leaving every other record in place
    pub fn remove(&mut self, key: &str) -> Option<T> {
        let index = self.records.iter().position(|r| r.key() == key)?;
        Some(self.records.remove(index))
    }

    /// Apply `f` to the record with `key`. Returns false if absent.
    pub fn update(&mut self, key: &str, f: impl FnOnce(&mut T)) -> bool {
        match self.records.iter_mut().find(|r| r.key() == key) {
            Some(record) => {
                f(record);
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.records.iter().any(|r| r.key() == key)
    }

    pub fn records(&self) -> &[T] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// True once any fetch has been applied
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// True once any fetch has finished, successfully or not
    pub fn is_settled(&self) -> bool {
        self.settled
    }
}

/// Admin page: all recipes plus its dialog
#[derive(Clone, Debug, Default, Store)]
pub struct AdminState {
    pub recipes: RecordSet<RecipeSummary>,
    pub dialog: DialogState,
}

/// Bookmarks page: bookmarked posts plus its dialog
#[derive(Clone, Debug, Default, Store)]
pub struct BookmarksState {
    pub posts: RecordSet<Post>,
    pub dialog: DialogState,
}

pub type AdminStore = Store<AdminState>;
pub type BookmarksStore = Store<BookmarksState>;
