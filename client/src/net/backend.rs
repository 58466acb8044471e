//! Backend seam shared by every screen.
//!
//! DESIGN
//! ======
//! Screens never reach for a global client. They pull a [`SharedBackend`]
//! out of Leptos context and call the typed helpers below, which decode
//! every row into its [`Record`] type at the boundary. Tests swap in an
//! in-memory implementation of the same trait.
//!
//! ERROR HANDLING
//! ==============
//! All operations return [`BackendError`]. Callers surface the message
//! inline or through an alert; nothing here panics.

#[cfg(test)]
#[path = "backend_test.rs"]
mod backend_test;

use std::sync::Arc;

use async_trait::async_trait;
use records::{Record, Table};
use serde_json::Value;
use uuid::Uuid;

/// Failure talking to the hosted backend.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BackendError {
    #[error("request failed: {0}")]
    Request(String),
    #[error("{message}")]
    Status { status: u16, message: String },
    #[error("unexpected response: {0}")]
    Decode(String),
    #[error("not signed in")]
    Unauthorized,
    #[error("backend is only reachable from the browser")]
    Unavailable,
}

/// An authenticated session returned by sign-in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub access_token: String,
    pub user_id: Uuid,
    pub email: String,
}

/// Sort direction for [`Query::order`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Asc,
    Desc,
}

/// Read parameters for a `select`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Query {
    pub select: String,
    pub order: Option<(String, Direction)>,
    pub eq: Option<(String, String)>,
    pub limit: Option<usize>,
}

impl Query {
    /// Select `columns` with no ordering, filter or limit.
    #[must_use]
    pub fn new(columns: &str) -> Self {
        Self {
            select: columns.to_owned(),
            order: None,
            eq: None,
            limit: None,
        }
    }

    /// The default read for a record type: its columns, newest first.
    #[must_use]
    pub fn for_record<T: Record>() -> Self {
        Self::new(T::SELECT).order("created_at", Direction::Desc)
    }

    #[must_use]
    pub fn order(mut self, column: &str, direction: Direction) -> Self {
        self.order = Some((column.to_owned(), direction));
        self
    }

    #[must_use]
    pub fn eq(mut self, column: &str, value: &str) -> Self {
        self.eq = Some((column.to_owned(), value.to_owned()));
        self
    }

    #[must_use]
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// Remote row storage plus the identity service.
#[async_trait(?Send)]
pub trait Backend: Send + Sync {
    /// Read rows from `table`.
    async fn select(&self, table: Table, query: &Query) -> Result<Vec<Value>, BackendError>;

    /// Insert one row and return it as stored.
    async fn insert(&self, table: Table, row: Value) -> Result<Value, BackendError>;

    /// Patch the row with primary key `id`.
    async fn update(&self, table: Table, id: Uuid, patch: Value) -> Result<(), BackendError>;

    /// Delete the row with primary key `id`.
    async fn delete(&self, table: Table, id: Uuid) -> Result<(), BackendError>;

    async fn sign_in(&self, email: &str, password: &str) -> Result<Session, BackendError>;

    async fn sign_out(&self) -> Result<(), BackendError>;

    /// Ask the identity service to mail a reset link pointing at `redirect_to`.
    async fn reset_password_for_email(&self, email: &str, redirect_to: &str) -> Result<(), BackendError>;

    /// Change the password of the current (recovery) session.
    async fn update_password(&self, password: &str) -> Result<(), BackendError>;

    /// Whether the current session belongs to an administrator.
    async fn is_admin(&self) -> Result<bool, BackendError>;
}

/// Backend handle stored in Leptos context.
pub type SharedBackend = Arc<dyn Backend>;

fn decode<T: Record>(row: Value) -> Result<T, BackendError> {
    serde_json::from_value(row).map_err(|e| BackendError::Decode(format!("{}: {e}", T::TABLE.name())))
}

/// Fetch every row of `T`'s table, newest first.
///
/// # Errors
///
/// Propagates the remote failure, or [`BackendError::Decode`] when a row
/// does not match `T`.
pub async fn fetch_all<T: Record>(backend: &dyn Backend) -> Result<Vec<T>, BackendError> {
    let rows = backend.select(T::TABLE, &Query::for_record::<T>()).await?;
    rows.into_iter().map(decode).collect()
}

/// Fetch rows of `T` whose `column` equals `value`.
///
/// # Errors
///
/// Same as [`fetch_all`].
pub async fn fetch_where<T: Record>(backend: &dyn Backend, column: &str, value: &str) -> Result<Vec<T>, BackendError> {
    let query = Query::for_record::<T>().eq(column, value);
    let rows = backend.select(T::TABLE, &query).await?;
    rows.into_iter().map(decode).collect()
}

/// Insert `payload` into `T`'s table and decode the stored row.
///
/// # Errors
///
/// Same as [`fetch_all`].
pub async fn create<T: Record>(backend: &dyn Backend, payload: Value) -> Result<T, BackendError> {
    decode(backend.insert(T::TABLE, payload).await?)
}

/// Patch one row of `T`'s table.
///
/// # Errors
///
/// Propagates the remote failure.
pub async fn update_row<T: Record>(backend: &dyn Backend, id: Uuid, patch: Value) -> Result<(), BackendError> {
    backend.update(T::TABLE, id, patch).await
}

/// Delete one row of `T`'s table.
///
/// # Errors
///
/// Propagates the remote failure.
pub async fn delete_row<T: Record>(backend: &dyn Backend, id: Uuid) -> Result<(), BackendError> {
    backend.delete(T::TABLE, id).await
}
