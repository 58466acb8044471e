//! In-memory list state for management screens.
//!
//! DESIGN
//! ======
//! Screens fetch the whole collection once and narrow it locally. The rows
//! on screen are always `items` filtered by the screen's [`RowFilter`], in
//! fetch order; row actions patch `items` only after the remote write
//! succeeded.

#[cfg(test)]
#[path = "listing_test.rs"]
mod listing_test;

use std::rc::Rc;

use leptos::prelude::*;
use records::Record;
use uuid::Uuid;

use super::fetch::{FetchTracker, Settle};
use crate::net::{BackendError, SharedBackend, fetch_all};

/// Search and filter predicate for one screen.
pub trait RowFilter<T> {
    /// Whether `row` passes the search text and every selected filter.
    fn matches(&self, row: &T) -> bool;

    /// Reset search and filters so every row matches.
    fn clear(&mut self);
}

/// Fetched rows plus loading/error flags.
#[derive(Clone, Debug, PartialEq)]
pub struct ListState<T> {
    pub items: Vec<T>,
    pub loading: bool,
    pub error: Option<String>,
}

impl<T> Default for ListState<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loading: true,
            error: None,
        }
    }
}

impl<T: Record> Settle for ListState<T> {
    type Value = Vec<T>;

    fn settle_with(&mut self, result: Result<Vec<T>, BackendError>) {
        self.replace(result);
    }
}

impl<T: Record> ListState<T> {
    /// Store a fetch outcome. A failed fetch keeps nothing.
    pub fn replace(&mut self, result: Result<Vec<T>, BackendError>) {
        self.loading = false;
        match result {
            Ok(items) => {
                self.items = items;
                self.error = None;
            }
            Err(e) => {
                self.items.clear();
                self.error = Some(e.to_string());
            }
        }
    }

    /// Rows passing `filter`, in fetch order.
    pub fn visible<F: RowFilter<T>>(&self, filter: &F) -> Vec<T> {
        self.items.iter().filter(|row| filter.matches(row)).cloned().collect()
    }

    /// Apply `edit` to the row with `id`. Returns whether a row was found.
    pub fn patch(&mut self, id: Uuid, edit: impl FnOnce(&mut T)) -> bool {
        match self.items.iter_mut().find(|row| row.id() == id) {
            Some(row) => {
                edit(row);
                true
            }
            None => false,
        }
    }

    /// Drop the row with `id`.
    pub fn remove(&mut self, id: Uuid) {
        self.items.retain(|row| row.id() != id);
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.items.len()
    }
}

/// "Showing X of Y" counter text.
#[must_use]
pub fn showing_label(shown: usize, total: usize, noun: &str) -> String {
    format!("Showing {shown} of {total} {noun}")
}

/// Empty-table message telling "nothing stored" apart from "nothing matches".
#[must_use]
pub fn empty_message(total: usize, noun: &str) -> String {
    if total == 0 {
        format!("No {noun} yet.")
    } else {
        format!("No {noun} match your search or filters.")
    }
}

/// Case-insensitive substring match of `needle` in any of `fields`.
/// A blank needle matches everything. Otherwise the needle is matched as
/// typed, surrounding spaces included.
#[must_use]
pub fn matches_search(needle: &str, fields: &[&str]) -> bool {
    if needle.trim().is_empty() {
        return true;
    }
    let needle = needle.to_lowercase();
    fields.iter().any(|field| field.to_lowercase().contains(&needle))
}

/// Fetch `T`'s collection on mount and again whenever `reload` is bumped.
///
/// Responses that arrive after a newer reload was issued are dropped.
pub fn use_list<T>(backend: SharedBackend, reload: RwSignal<u32>) -> RwSignal<ListState<T>>
where
    T: Record + Send + Sync,
{
    let state = RwSignal::new(ListState::default());
    let tracker = Rc::new(FetchTracker::default());

    Effect::new(move |_| {
        reload.track();
        let tag = tracker.issue();
        state.update(|s| {
            s.loading = true;
            s.error = None;
        });
        let backend = SharedBackend::clone(&backend);
        let tracker = Rc::clone(&tracker);
        leptos::task::spawn_local(async move {
            let result = fetch_all::<T>(backend.as_ref()).await;
            if let Err(e) = &result {
                leptos::logging::error!("loading {}: {e}", T::TABLE.name());
            }
            state.maybe_update(|s| tracker.settle_if_current(tag, s, result));
        });
    });

    state
}
