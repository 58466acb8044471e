//! In-memory backend for state-machine tests.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use records::Table;
use serde_json::Value;
use uuid::Uuid;

use super::backend::{Backend, BackendError, Query, Session, SharedBackend};

/// One recorded call against the mock.
#[derive(Clone, Debug, PartialEq)]
pub enum Call {
    Select(Table),
    Insert(Table, Value),
    Update(Table, Uuid, Value),
    Delete(Table, Uuid),
    SignIn(String),
    SignOut,
    ResetPasswordForEmail(String, String),
    UpdatePassword(String),
    IsAdmin,
}

#[derive(Default)]
struct MockState {
    tables: HashMap<Table, Vec<Value>>,
    failing_tables: HashMap<Table, BackendError>,
    fail_writes: Option<BackendError>,
    sign_in_error: Option<BackendError>,
    reset_error: Option<BackendError>,
    update_password_error: Option<BackendError>,
    admin: Option<Result<bool, BackendError>>,
    signed_in: bool,
    calls: Vec<Call>,
}

/// Backend that keeps tables in memory and records every call.
#[derive(Clone, Default)]
pub struct MockBackend {
    state: Arc<Mutex<MockState>>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().expect("mock state poisoned")
    }

    /// Seed `table` with `rows`.
    pub fn with_rows(self, table: Table, rows: Vec<Value>) -> Self {
        self.lock().tables.insert(table, rows);
        self
    }

    /// Make reads of `table` fail.
    pub fn failing(self, table: Table, error: BackendError) -> Self {
        self.lock().failing_tables.insert(table, error);
        self
    }

    /// Make every insert/update/delete fail.
    pub fn failing_writes(self, error: BackendError) -> Self {
        self.lock().fail_writes = Some(error);
        self
    }

    pub fn rejecting_sign_in(self, error: BackendError) -> Self {
        self.lock().sign_in_error = Some(error);
        self
    }

    pub fn rejecting_reset(self, error: BackendError) -> Self {
        self.lock().reset_error = Some(error);
        self
    }

    pub fn rejecting_password_update(self, error: BackendError) -> Self {
        self.lock().update_password_error = Some(error);
        self
    }

    /// Answer `is_admin` with `answer`.
    pub fn with_admin(self, answer: Result<bool, BackendError>) -> Self {
        self.lock().admin = Some(answer);
        self
    }

    pub fn shared(&self) -> SharedBackend {
        Arc::new(self.clone())
    }

    pub fn calls(&self) -> Vec<Call> {
        self.lock().calls.clone()
    }

    /// Number of insert/update/delete calls issued.
    pub fn write_count(&self) -> usize {
        self.lock()
            .calls
            .iter()
            .filter(|c| matches!(c, Call::Insert(..) | Call::Update(..) | Call::Delete(..)))
            .count()
    }

    pub fn rows(&self, table: Table) -> Vec<Value> {
        self.lock().tables.get(&table).cloned().unwrap_or_default()
    }

    pub fn is_signed_in(&self) -> bool {
        self.lock().signed_in
    }
}

fn row_id(row: &Value) -> Option<Uuid> {
    row.get("id").and_then(Value::as_str).and_then(|s| s.parse().ok())
}

#[async_trait(?Send)]
impl Backend for MockBackend {
    async fn select(&self, table: Table, query: &Query) -> Result<Vec<Value>, BackendError> {
        let mut state = self.lock();
        state.calls.push(Call::Select(table));
        if let Some(err) = state.failing_tables.get(&table) {
            return Err(err.clone());
        }
        let rows = state.tables.get(&table).cloned().unwrap_or_default();
        let rows = rows.into_iter().filter(|row| match &query.eq {
            Some((column, value)) => row.get(column).is_some_and(|v| match v {
                Value::String(s) => s == value,
                other => other.to_string() == *value,
            }),
            None => true,
        });
        Ok(match query.limit {
            Some(n) => rows.take(n).collect(),
            None => rows.collect(),
        })
    }

    async fn insert(&self, table: Table, row: Value) -> Result<Value, BackendError> {
        let mut state = self.lock();
        state.calls.push(Call::Insert(table, row.clone()));
        if let Some(err) = &state.fail_writes {
            return Err(err.clone());
        }
        let mut stored = row;
        if let Value::Object(map) = &mut stored {
            map.entry("id").or_insert_with(|| Value::String(Uuid::new_v4().to_string()));
        }
        state.tables.entry(table).or_default().push(stored.clone());
        Ok(stored)
    }

    async fn update(&self, table: Table, id: Uuid, patch: Value) -> Result<(), BackendError> {
        let mut state = self.lock();
        state.calls.push(Call::Update(table, id, patch.clone()));
        if let Some(err) = &state.fail_writes {
            return Err(err.clone());
        }
        let rows = state.tables.entry(table).or_default();
        if let Some(Value::Object(row)) = rows.iter_mut().find(|r| row_id(r) == Some(id)) {
            if let Value::Object(fields) = patch {
                row.extend(fields);
            }
        }
        Ok(())
    }

    async fn delete(&self, table: Table, id: Uuid) -> Result<(), BackendError> {
        let mut state = self.lock();
        state.calls.push(Call::Delete(table, id));
        if let Some(err) = &state.fail_writes {
            return Err(err.clone());
        }
        state.tables.entry(table).or_default().retain(|r| row_id(r) != Some(id));
        Ok(())
    }

    async fn sign_in(&self, email: &str, _password: &str) -> Result<Session, BackendError> {
        let mut state = self.lock();
        state.calls.push(Call::SignIn(email.to_owned()));
        if let Some(err) = &state.sign_in_error {
            return Err(err.clone());
        }
        state.signed_in = true;
        Ok(Session {
            access_token: "mock-token".to_owned(),
            user_id: Uuid::nil(),
            email: email.to_owned(),
        })
    }

    async fn sign_out(&self) -> Result<(), BackendError> {
        let mut state = self.lock();
        state.calls.push(Call::SignOut);
        state.signed_in = false;
        Ok(())
    }

    async fn reset_password_for_email(&self, email: &str, redirect_to: &str) -> Result<(), BackendError> {
        let mut state = self.lock();
        state
            .calls
            .push(Call::ResetPasswordForEmail(email.to_owned(), redirect_to.to_owned()));
        state.reset_error.clone().map_or(Ok(()), Err)
    }

    async fn update_password(&self, password: &str) -> Result<(), BackendError> {
        let mut state = self.lock();
        state.calls.push(Call::UpdatePassword(password.to_owned()));
        state.update_password_error.clone().map_or(Ok(()), Err)
    }

    async fn is_admin(&self) -> Result<bool, BackendError> {
        let mut state = self.lock();
        state.calls.push(Call::IsAdmin);
        state.admin.clone().unwrap_or(Ok(false))
    }
}

/// Minimal valid rows for seeding the mock.
pub mod fixture {
    use serde_json::{Value, json};
    use uuid::Uuid;

    /// Deterministic id for row `n`.
    pub fn id(n: u32) -> Uuid {
        format!("00000000-0000-4000-8000-{n:012}").parse().expect("fixture id")
    }

    pub fn tour(n: u32, title: &str, category: &str) -> Value {
        json!({
            "id": id(n),
            "title": title,
            "slug": records::slugify(title),
            "description": format!("{title} through northern Tanzania."),
            "category": category,
            "difficulty": "moderate",
            "duration": 3,
            "price_usd": 1200.0,
            "images": [format!("https://img.example/{n}-a.jpg"), format!("https://img.example/{n}-b.jpg")],
            "featured": false,
            "active": true
        })
    }

    pub fn blog(n: u32, title: &str, published: bool) -> Value {
        json!({"id": id(n), "title": title, "slug": records::slugify(title), "category": "Safari", "published": published})
    }

    pub fn destination(n: u32, name: &str, category: &str) -> Value {
        json!({"id": id(n), "name": name, "slug": records::slugify(name), "category": category, "featured_image": format!("https://img.example/d{n}.jpg")})
    }

    pub fn travel_info(n: u32, title: &str, category: &str) -> Value {
        json!({"id": id(n), "title": title, "slug": records::slugify(title), "category": category})
    }

    pub fn booking(n: u32, customer: &str, status: &str) -> Value {
        json!({
            "id": id(n),
            "email": format!("guest{n}@example.com"),
            "participants": 2,
            "total_amount": 2400.0,
            "status": status,
            "profiles": {"full_name": customer, "email": null},
            "tour_packages": {"title": "Serengeti Migration"}
        })
    }

    pub fn payment(n: u32, amount: f64, status: &str) -> Value {
        json!({"id": id(n), "amount": amount, "status": status})
    }

    pub fn review(n: u32, title: &str, verified: bool) -> Value {
        json!({"id": id(n), "rating": 5, "title": title, "content": "Great guides.", "verified": verified})
    }

    pub fn inquiry(n: u32, name: &str, status: &str) -> Value {
        json!({"id": id(n), "name": name, "email": "guest@example.com", "subject": "Group booking", "message": "Hello", "status": status})
    }

    pub fn profile(n: u32, full_name: &str) -> Value {
        json!({"id": id(n), "full_name": full_name, "email": format!("user{n}@example.com")})
    }
}
