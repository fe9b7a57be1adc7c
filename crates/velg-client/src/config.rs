//! Client configuration.
//!
//! Loaded from environment variables with defaults that point at a local
//! backend. The lookup is injectable so tests never touch the process
//! environment.

use std::time::Duration;

use crate::error::ClientError;

/// Default API root.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/api/v1";

/// Default prefix of anonymous read endpoints.
pub const DEFAULT_PUBLIC_PREFIX: &str = "/public";

/// Default per-request timeout in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// Where and how the client reaches the platform API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// API root, without a trailing slash (e.g. `http://localhost:8000/api/v1`).
    pub base_url: String,
    /// Path segment inserted before public read paths.
    pub public_prefix: String,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            public_prefix: DEFAULT_PUBLIC_PREFIX.to_owned(),
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
        }
    }
}

impl ClientConfig {
    /// Config for an API root, other fields at their defaults.
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_owned(),
            ..Self::default()
        }
    }

    /// Load configuration from environment variables.
    ///
    /// Optional variables:
    /// - `VELG_API_URL` -- API root (default `http://localhost:8000/api/v1`)
    /// - `VELG_PUBLIC_PREFIX` -- public read prefix (default `/public`)
    /// - `VELG_REQUEST_TIMEOUT_MS` -- request timeout (default 30000)
    pub fn from_env() -> Result<Self, ClientError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ClientError> {
        let mut config = Self::default();
        config.apply_overrides(lookup)?;
        Ok(config)
    }

    /// Overwrite fields from `VELG_API_URL`, `VELG_PUBLIC_PREFIX` and
    /// `VELG_REQUEST_TIMEOUT_MS`. Unset or blank variables leave the
    /// current value alone.
    pub fn apply_overrides(
        &mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<(), ClientError> {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        if let Some(url) = var("VELG_API_URL") {
            let base_url = url.trim().trim_end_matches('/');
            if base_url.is_empty() {
                return Err(ClientError::Config("VELG_API_URL is empty".to_owned()));
            }
            base_url.clone_into(&mut self.base_url);
        }
        if let Some(prefix) = var("VELG_PUBLIC_PREFIX") {
            self.public_prefix = prefix;
        }
        if let Some(ms) = var("VELG_REQUEST_TIMEOUT_MS") {
            let ms: u64 = ms.trim().parse().map_err(|e| {
                ClientError::Config(format!("invalid VELG_REQUEST_TIMEOUT_MS: {e}"))
            })?;
            self.timeout = Duration::from_millis(ms);
        }
        Ok(())
    }
}
