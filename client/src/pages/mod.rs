//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (fetching, navigation, alerts)
//! and delegates rendering details to `components`. Public pages live at the
//! top level; the admin console lives under [`admin`].

pub mod admin;
pub mod blog;
pub mod destinations;
pub mod forgot_password;
pub mod home;
pub mod login;
pub mod reset_password;
pub mod tours;
pub mod travel_info;

use leptos::prelude::*;
use records::Record;

use crate::net::{BackendError, SharedBackend, fetch_all, fetch_where};
use crate::state::fetch::use_fetch;

/// Outcome of one collection read, `None` while in flight.
pub type Rows<T> = Signal<Option<Result<Vec<T>, BackendError>>>;

/// Fetch `T`'s collection once, optionally narrowed to `column = value`.
///
/// The section rendering it decides what a failure looks like, so the
/// backend error is kept rather than flattened to a message.
pub(crate) fn use_rows<T>(backend: SharedBackend, only: Option<(&'static str, &'static str)>) -> Rows<T>
where
    T: Record + Send + Sync,
{
    let state = use_fetch(
        || (),
        move |()| {
            let backend = SharedBackend::clone(&backend);
            async move {
                let rows = match only {
                    Some((column, value)) => fetch_where::<T>(backend.as_ref(), column, value).await,
                    None => fetch_all::<T>(backend.as_ref()).await,
                };
                Ok::<_, BackendError>(rows)
            }
        },
    );
    Signal::derive(move || state.with(|s| s.data.clone()))
}
