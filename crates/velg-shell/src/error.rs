//! Error types for the shell binary.

use velg_client::ClientError;
use velg_types::ApiError;

use crate::config::ConfigError;

/// Errors that end a shell run.
#[derive(Debug, thiserror::Error)]
pub enum ShellError {
    /// Configuration file or environment is invalid.
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    /// The HTTP client could not be built.
    #[error("client error: {0}")]
    Client(#[from] ClientError),

    /// The simulation index could not be loaded.
    #[error("failed to load simulations: {0}")]
    Load(#[source] ApiError),
}
