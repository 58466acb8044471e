//! PostgREST + GoTrue implementation of [`Backend`].
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): every call returns [`BackendError::Unavailable`] since
//! the hosted backend is only reachable with the visitor's own session.
//!
//! SESSION
//! =======
//! The access token lives in memory and is mirrored to `localStorage` so an
//! admin session survives a reload. A password-recovery link lands on
//! `/reset-password#access_token=...&type=recovery`; that token is adopted
//! on construction so `update_password` can run.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "rest_test.rs"]
mod rest_test;

use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;
use records::Table;
use serde_json::Value;
use uuid::Uuid;

use super::backend::{Backend, BackendError, Direction, Query, Session};
use super::config::BackendConfig;

#[cfg(feature = "hydrate")]
const SESSION_KEY: &str = "safari_session";

/// Query-string pairs for a row read.
#[cfg(any(test, feature = "hydrate"))]
fn select_params(query: &Query) -> Vec<(&str, String)> {
    let mut params = vec![("select", query.select.clone())];
    if let Some((column, direction)) = &query.order {
        let dir = match direction {
            Direction::Asc => "asc",
            Direction::Desc => "desc",
        };
        params.push(("order", format!("{column}.{dir}")));
    }
    if let Some((column, value)) = &query.eq {
        params.push((column.as_str(), format!("eq.{value}")));
    }
    if let Some(limit) = query.limit {
        params.push(("limit", limit.to_string()));
    }
    params
}

/// Filter pair selecting one row by primary key.
#[cfg(any(test, feature = "hydrate"))]
fn id_filter(id: Uuid) -> [(&'static str, String); 1] {
    [("id", format!("eq.{id}"))]
}

/// Best human-readable message from an error body.
#[cfg(any(test, feature = "hydrate"))]
fn error_message(status: u16, body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|json| {
            ["msg", "message", "error_description", "error"]
                .iter()
                .find_map(|key| json.get(*key).and_then(Value::as_str).map(str::to_owned))
        })
        .unwrap_or_else(|| format!("request failed with status {status}"))
}

/// Access token carried by a recovery link fragment.
#[cfg(any(test, feature = "hydrate"))]
fn token_from_fragment(fragment: &str) -> Option<String> {
    fragment
        .trim_start_matches('#')
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == "access_token")
        .map(|(_, value)| value.to_owned())
        .filter(|token| !token.is_empty())
}

#[cfg(any(test, feature = "hydrate"))]
#[derive(serde::Deserialize)]
struct TokenResponse {
    access_token: String,
    user: TokenUser,
}

#[cfg(any(test, feature = "hydrate"))]
#[derive(serde::Deserialize)]
struct TokenUser {
    id: Uuid,
    #[serde(default)]
    email: String,
}

#[cfg(any(test, feature = "hydrate"))]
impl From<TokenResponse> for Session {
    fn from(resp: TokenResponse) -> Self {
        Self {
            access_token: resp.access_token,
            user_id: resp.user.id,
            email: resp.user.email,
        }
    }
}

/// HTTP backend for a hosted PostgREST/GoTrue stack.
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
pub struct RestBackend {
    config: BackendConfig,
    session: RwLock<Option<Session>>,
}

impl RestBackend {
    #[must_use]
    pub fn new(config: BackendConfig) -> Self {
        let backend = Self {
            config,
            session: RwLock::new(None),
        };
        #[cfg(feature = "hydrate")]
        backend.restore_session();
        backend
    }

    #[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
    fn session(&self) -> Option<Session> {
        self.session.read().unwrap_or_else(PoisonError::into_inner).clone()
    }

    #[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
    fn set_session(&self, session: Option<Session>) {
        #[cfg(feature = "hydrate")]
        store::save(session.as_ref().map(|s| s.access_token.as_str()));
        *self.session.write().unwrap_or_else(PoisonError::into_inner) = session;
    }

    #[cfg(feature = "hydrate")]
    fn restore_session(&self) {
        let recovery = web_sys::window()
            .and_then(|w| w.location().hash().ok())
            .and_then(|hash| token_from_fragment(&hash));
        let token = recovery.or_else(store::load);
        if let Some(access_token) = token {
            self.set_session(Some(Session {
                access_token,
                user_id: Uuid::nil(),
                email: String::new(),
            }));
        }
    }

    #[cfg(feature = "hydrate")]
    fn authorize(&self, builder: gloo_net::http::RequestBuilder) -> gloo_net::http::RequestBuilder {
        let token = self.session().map(|s| s.access_token);
        let bearer = format!("Bearer {}", token.as_deref().unwrap_or(self.config.anon_key()));
        builder
            .header("apikey", self.config.anon_key())
            .header("Authorization", &bearer)
    }
}

#[cfg(feature = "hydrate")]
mod store {
    use super::SESSION_KEY;

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }

    pub(super) fn load() -> Option<String> {
        storage()?.get_item(SESSION_KEY).ok().flatten()
    }

    pub(super) fn save(token: Option<&str>) {
        let Some(storage) = storage() else {
            return;
        };
        let outcome = match token {
            Some(token) => storage.set_item(SESSION_KEY, token),
            None => storage.remove_item(SESSION_KEY),
        };
        if let Err(err) = outcome {
            leptos::logging::warn!("session storage write failed: {err:?}");
        }
    }
}

#[cfg(feature = "hydrate")]
fn transport(err: gloo_net::Error) -> BackendError {
    BackendError::Request(err.to_string())
}

#[cfg(feature = "hydrate")]
async fn checked(resp: gloo_net::http::Response) -> Result<gloo_net::http::Response, BackendError> {
    if resp.ok() {
        return Ok(resp);
    }
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    if status == 401 {
        return Err(BackendError::Unauthorized);
    }
    Err(BackendError::Status {
        status,
        message: error_message(status, &body),
    })
}

#[cfg(feature = "hydrate")]
#[async_trait(?Send)]
impl Backend for RestBackend {
    async fn select(&self, table: Table, query: &Query) -> Result<Vec<Value>, BackendError> {
        let url = self.config.rest_url(table.name());
        let resp = self
            .authorize(gloo_net::http::Request::get(&url))
            .query(select_params(query))
            .send()
            .await
            .map_err(transport)?;
        checked(resp).await?.json().await.map_err(|e| BackendError::Decode(e.to_string()))
    }

    async fn insert(&self, table: Table, row: Value) -> Result<Value, BackendError> {
        let url = self.config.rest_url(table.name());
        let resp = self
            .authorize(gloo_net::http::Request::post(&url))
            .header("Prefer", "return=representation")
            .json(&row)
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?;
        let mut rows: Vec<Value> = checked(resp)
            .await?
            .json()
            .await
            .map_err(|e| BackendError::Decode(e.to_string()))?;
        if rows.is_empty() {
            return Err(BackendError::Decode("insert returned no row".to_owned()));
        }
        Ok(rows.swap_remove(0))
    }

    async fn update(&self, table: Table, id: Uuid, patch: Value) -> Result<(), BackendError> {
        let url = self.config.rest_url(table.name());
        let resp = self
            .authorize(gloo_net::http::Request::patch(&url))
            .query(id_filter(id))
            .json(&patch)
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?;
        checked(resp).await.map(|_| ())
    }

    async fn delete(&self, table: Table, id: Uuid) -> Result<(), BackendError> {
        let url = self.config.rest_url(table.name());
        let resp = self
            .authorize(gloo_net::http::Request::delete(&url))
            .query(id_filter(id))
            .send()
            .await
            .map_err(transport)?;
        checked(resp).await.map(|_| ())
    }

    async fn sign_in(&self, email: &str, password: &str) -> Result<Session, BackendError> {
        let url = self.config.auth_url("token");
        let body = serde_json::json!({ "email": email, "password": password });
        let resp = gloo_net::http::Request::post(&url)
            .header("apikey", self.config.anon_key())
            .query([("grant_type", "password")])
            .json(&body)
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?;
        let token: TokenResponse = checked(resp)
            .await?
            .json()
            .await
            .map_err(|e| BackendError::Decode(e.to_string()))?;
        let session = Session::from(token);
        self.set_session(Some(session.clone()));
        Ok(session)
    }

    async fn sign_out(&self) -> Result<(), BackendError> {
        if self.session().is_none() {
            return Ok(());
        }
        let url = self.config.auth_url("logout");
        let result = self.authorize(gloo_net::http::Request::post(&url)).send().await;
        self.set_session(None);
        checked(result.map_err(transport)?).await.map(|_| ())
    }

    async fn reset_password_for_email(&self, email: &str, redirect_to: &str) -> Result<(), BackendError> {
        let url = self.config.auth_url("recover");
        let resp = gloo_net::http::Request::post(&url)
            .header("apikey", self.config.anon_key())
            .query([("redirect_to", redirect_to)])
            .json(&serde_json::json!({ "email": email }))
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?;
        checked(resp).await.map(|_| ())
    }

    async fn update_password(&self, password: &str) -> Result<(), BackendError> {
        if self.session().is_none() {
            return Err(BackendError::Unauthorized);
        }
        let url = self.config.auth_url("user");
        let resp = self
            .authorize(gloo_net::http::Request::put(&url))
            .json(&serde_json::json!({ "password": password }))
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?;
        checked(resp).await.map(|_| ())
    }

    async fn is_admin(&self) -> Result<bool, BackendError> {
        if self.session().is_none() {
            return Ok(false);
        }
        let url = self.config.rpc_url("is_admin");
        let resp = self
            .authorize(gloo_net::http::Request::post(&url))
            .json(&serde_json::json!({}))
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?;
        checked(resp).await?.json().await.map_err(|e| BackendError::Decode(e.to_string()))
    }
}

#[cfg(not(feature = "hydrate"))]
#[async_trait(?Send)]
impl Backend for RestBackend {
    async fn select(&self, _table: Table, _query: &Query) -> Result<Vec<Value>, BackendError> {
        Err(BackendError::Unavailable)
    }

    async fn insert(&self, _table: Table, _row: Value) -> Result<Value, BackendError> {
        Err(BackendError::Unavailable)
    }

    async fn update(&self, _table: Table, _id: Uuid, _patch: Value) -> Result<(), BackendError> {
        Err(BackendError::Unavailable)
    }

    async fn delete(&self, _table: Table, _id: Uuid) -> Result<(), BackendError> {
        Err(BackendError::Unavailable)
    }

    async fn sign_in(&self, _email: &str, _password: &str) -> Result<Session, BackendError> {
        Err(BackendError::Unavailable)
    }

    async fn sign_out(&self) -> Result<(), BackendError> {
        self.set_session(None);
        Ok(())
    }

    async fn reset_password_for_email(&self, _email: &str, _redirect_to: &str) -> Result<(), BackendError> {
        Err(BackendError::Unavailable)
    }

    async fn update_password(&self, _password: &str) -> Result<(), BackendError> {
        Err(BackendError::Unavailable)
    }

    async fn is_admin(&self) -> Result<bool, BackendError> {
        Err(BackendError::Unavailable)
    }
}
