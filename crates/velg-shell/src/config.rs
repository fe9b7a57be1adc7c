//! Shell configuration.
//!
//! Read from an optional YAML file (`velg.yaml`, or the path in
//! `VELG_CONFIG`), then overridden by `VELG_*` environment variables.
//! Every field has a default, so running with neither is valid.
//!
//! ```yaml
//! api_url: https://velgarien.example.org/api/v1
//! public_prefix: /public
//! request_timeout_ms: 15000
//! locale: de
//! log_format: json
//! ```
//!
//! The API settings go through [`ClientConfig::apply_overrides`], so the
//! shell and the library read `VELG_API_URL`, `VELG_PUBLIC_PREFIX` and
//! `VELG_REQUEST_TIMEOUT_MS` the same way.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use velg_client::config::{DEFAULT_BASE_URL, DEFAULT_PUBLIC_PREFIX, DEFAULT_TIMEOUT_MS};
use velg_client::{ClientConfig, ClientError};

/// File read when `VELG_CONFIG` is unset.
pub const DEFAULT_CONFIG_PATH: &str = "velg.yaml";

const DEFAULT_LOCALE: &str = "en";

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file {path}: {source}")]
    Io {
        /// File that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        #[from]
        source: serde_yml::Error,
    },

    /// An API setting override is unusable.
    #[error(transparent)]
    Client(#[from] ClientError),

    /// A shell setting override is unusable.
    #[error("invalid {name}: {reason}")]
    Invalid {
        /// Variable name.
        name: &'static str,
        /// What was wrong.
        reason: String,
    },
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Pretty,
    /// One JSON object per line.
    Json,
}

impl LogFormat {
    fn parse(value: &str) -> Result<Self, ConfigError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "pretty" | "text" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            other => Err(ConfigError::Invalid {
                name: "VELG_LOG_FORMAT",
                reason: format!("unknown format `{other}`"),
            }),
        }
    }
}

/// On-disk layout of `velg.yaml`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ConfigFile {
    api_url: String,
    public_prefix: String,
    request_timeout_ms: u64,
    access_token: Option<String>,
    locale: String,
    log_format: LogFormat,
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_BASE_URL.to_owned(),
            public_prefix: DEFAULT_PUBLIC_PREFIX.to_owned(),
            request_timeout_ms: DEFAULT_TIMEOUT_MS,
            access_token: None,
            locale: DEFAULT_LOCALE.to_owned(),
            log_format: LogFormat::Pretty,
        }
    }
}

impl From<ConfigFile> for ShellConfig {
    fn from(file: ConfigFile) -> Self {
        Self {
            client: ClientConfig {
                public_prefix: file.public_prefix,
                timeout: Duration::from_millis(file.request_timeout_ms),
                ..ClientConfig::with_base_url(&file.api_url)
            },
            access_token: file.access_token,
            locale: file.locale,
            log_format: file.log_format,
        }
    }
}

/// Everything the shell needs to start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellConfig {
    /// HTTP client settings.
    pub client: ClientConfig,
    /// Bearer token; anonymous when absent.
    pub access_token: Option<String>,
    /// Display locale tag.
    pub locale: String,
    /// Log output format.
    pub log_format: LogFormat,
}

impl Default for ShellConfig {
    fn default() -> Self {
        ConfigFile::default().into()
    }
}

impl ShellConfig {
    /// Load from the process environment and the file it points at.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_with(|name| std::env::var(name).ok())
    }

    /// Load through an arbitrary variable lookup.
    ///
    /// A missing file is not an error when the path was not given
    /// explicitly through `VELG_CONFIG`.
    pub fn load_with(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let explicit = lookup("VELG_CONFIG");
        let path = PathBuf::from(explicit.as_deref().unwrap_or(DEFAULT_CONFIG_PATH));
        let mut config = if explicit.is_some() || path.exists() {
            Self::from_file(&path)?
        } else {
            Self::default()
        };
        config.apply_env_overrides(lookup)?;
        Ok(config)
    }

    /// Parse a YAML file without applying overrides.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&contents)
    }

    /// Parse a YAML string without applying overrides. An empty document
    /// yields the defaults.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let file: ConfigFile = serde_yml::from_str(yaml)?;
        Ok(file.into())
    }

    /// Apply `VELG_*` overrides. Blank values are ignored.
    pub fn apply_env_overrides(
        &mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<(), ConfigError> {
        self.client.apply_overrides(&lookup)?;

        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        if let Some(token) = var("VELG_ACCESS_TOKEN") {
            self.access_token = Some(token);
        }
        if let Some(locale) = var("VELG_LOCALE") {
            self.locale = locale;
        }
        if let Some(format) = var("VELG_LOG_FORMAT") {
            self.log_format = LogFormat::parse(&format)?;
        }
        Ok(())
    }
}
