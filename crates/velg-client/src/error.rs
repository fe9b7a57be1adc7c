//! Error types for building the API client.
//!
//! Request failures are not Rust errors: they travel as
//! [`velg_types::ApiError`] values inside [`velg_types::ApiResponse`].
//! [`ClientError`] only covers setting the client up.

/// Errors that can occur while configuring or constructing the client.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Configuration is invalid.
    #[error("config error: {0}")]
    Config(String),

    /// The underlying HTTP client could not be built.
    #[error("http client error: {source}")]
    Http {
        /// The underlying `reqwest` error.
        #[from]
        source: reqwest::Error,
    },
}
