//! Backend endpoint configuration.
//!
//! The URL and public anon key are baked in at build time from
//! `SAFARI_BACKEND_URL` and `SAFARI_BACKEND_ANON_KEY`, the same way the
//! WASM bundle is built once per environment.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

const LOCAL_URL: &str = "http://127.0.0.1:54321";

/// Why the build-time configuration could not be used.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} was not set at build time")]
    Missing(&'static str),
    #[error("backend url must start with http:// or https://, got {0:?}")]
    InvalidUrl(String),
}

/// Where the hosted backend lives and the key that identifies this site.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BackendConfig {
    url: String,
    anon_key: String,
}

impl BackendConfig {
    /// Validate and normalize a URL/key pair.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when either value is missing or the URL has
    /// no http(s) scheme.
    pub fn resolve(url: Option<&str>, anon_key: Option<&str>) -> Result<Self, ConfigError> {
        let url = url
            .map(str::trim)
            .filter(|u| !u.is_empty())
            .ok_or(ConfigError::Missing("SAFARI_BACKEND_URL"))?;
        let anon_key = anon_key
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .ok_or(ConfigError::Missing("SAFARI_BACKEND_ANON_KEY"))?;
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::InvalidUrl(url.to_owned()));
        }
        Ok(Self {
            url: url.trim_end_matches('/').to_owned(),
            anon_key: anon_key.to_owned(),
        })
    }

    /// Configuration captured by the compiler from the build environment.
    ///
    /// # Errors
    ///
    /// See [`BackendConfig::resolve`].
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::resolve(option_env!("SAFARI_BACKEND_URL"), option_env!("SAFARI_BACKEND_ANON_KEY"))
    }

    /// Local development stack with no key.
    #[must_use]
    pub fn local() -> Self {
        Self {
            url: LOCAL_URL.to_owned(),
            anon_key: String::new(),
        }
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    #[must_use]
    pub fn anon_key(&self) -> &str {
        &self.anon_key
    }

    /// Row endpoint for `table`.
    #[must_use]
    pub fn rest_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{table}", self.url)
    }

    /// Stored-procedure endpoint.
    #[must_use]
    pub fn rpc_url(&self, function: &str) -> String {
        format!("{}/rest/v1/rpc/{function}", self.url)
    }

    /// Identity-service endpoint, e.g. `token?grant_type=password`.
    #[must_use]
    pub fn auth_url(&self, path: &str) -> String {
        format!("{}/auth/v1/{path}", self.url)
    }
}
