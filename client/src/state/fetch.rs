//! Fetch-on-mount state with stale-response protection.
//!
//! DESIGN
//! ======
//! Every request is tagged by a per-instance [`FetchTracker`]. When a
//! dependency changes while an older request is still in flight, the older
//! response arrives with an outdated tag and is dropped, so a slow early
//! request can never overwrite a newer result. Nothing is retried or
//! cancelled.

#[cfg(test)]
#[path = "fetch_test.rs"]
mod fetch_test;

use std::cell::Cell;
use std::future::Future;
use std::rc::Rc;

use leptos::prelude::*;

use crate::net::BackendError;

/// `{data, is_loading, error}` for one fetched value.
#[derive(Clone, Debug, PartialEq)]
pub struct FetchState<T> {
    pub data: Option<T>,
    pub is_loading: bool,
    pub error: Option<String>,
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        Self {
            data: None,
            is_loading: true,
            error: None,
        }
    }
}

impl<T> FetchState<T> {
    /// A request has been issued.
    pub fn begin(&mut self) {
        self.is_loading = true;
        self.error = None;
    }

    /// Record the outcome: exactly one of `data` or `error` ends up set.
    pub fn settle(&mut self, result: Result<T, BackendError>) {
        self.is_loading = false;
        match result {
            Ok(value) => {
                self.data = Some(value);
                self.error = None;
            }
            Err(e) => {
                self.data = None;
                self.error = Some(e.to_string());
            }
        }
    }
}

/// State that absorbs the outcome of one request.
pub trait Settle {
    type Value;

    fn settle_with(&mut self, result: Result<Self::Value, BackendError>);
}

impl<T> Settle for FetchState<T> {
    type Value = T;

    fn settle_with(&mut self, result: Result<T, BackendError>) {
        self.settle(result);
    }
}

/// Sequence number of one issued request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestTag(u64);

/// Issues monotonically increasing request tags for one fetch instance.
#[derive(Debug, Default)]
pub struct FetchTracker {
    latest: Cell<u64>,
}

impl FetchTracker {
    /// Tag a new request; it becomes the only current one.
    pub fn issue(&self) -> RequestTag {
        let next = self.latest.get() + 1;
        self.latest.set(next);
        RequestTag(next)
    }

    #[must_use]
    pub fn is_current(&self, tag: RequestTag) -> bool {
        tag.0 == self.latest.get()
    }

    /// Apply `result` to `state` only if `tag` is still the latest request.
    /// Returns whether `state` changed.
    pub fn settle_if_current<S: Settle>(
        &self,
        tag: RequestTag,
        state: &mut S,
        result: Result<S::Value, BackendError>,
    ) -> bool {
        if !self.is_current(tag) {
            leptos::logging::log!("discarded stale response {tag:?}");
            return false;
        }
        state.settle_with(result);
        true
    }
}

/// Run `producer` whenever `deps` changes and expose the result as a signal.
///
/// `deps` is tracked reactively; reading a signal inside it re-runs the
/// fetch when that signal changes.
pub fn use_fetch<D, T, F, Fut>(deps: impl Fn() -> D + 'static, producer: F) -> RwSignal<FetchState<T>>
where
    D: 'static,
    T: Send + Sync + 'static,
    F: Fn(D) -> Fut + 'static,
    Fut: Future<Output = Result<T, BackendError>> + 'static,
{
    let state = RwSignal::new(FetchState::default());
    let tracker = Rc::new(FetchTracker::default());

    Effect::new(move |_| {
        let input = deps();
        let tag = tracker.issue();
        state.update(FetchState::begin);
        let pending = producer(input);
        let tracker = Rc::clone(&tracker);
        leptos::task::spawn_local(async move {
            let result = pending.await;
            state.maybe_update(|s| tracker.settle_if_current(tag, s, result));
        });
    });

    state
}
