//! The uniform result shape of every API call.
//!
//! The backend wraps payloads as `{ "success": true, "data": ... }` and
//! failures as `{ "code": ..., "message": ... }` (or `detail` for framework
//! errors). On the client side every call resolves to an
//! [`ApiResponse<T>`]: ordinary failures are values, never panics.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Error code for transport failures (connection refused, DNS, timeout).
pub const NETWORK_ERROR: &str = "NETWORK_ERROR";

/// Error code for a 2xx response whose payload does not match the expected shape.
pub const INVALID_RESPONSE: &str = "INVALID_RESPONSE";

/// Error code for a request body that could not be encoded.
pub const INVALID_REQUEST: &str = "INVALID_REQUEST";

/// Error code the backend uses for expired or missing credentials.
pub const HTTP_401: &str = "HTTP_401";

/// Error code the backend uses for insufficient permissions.
pub const HTTP_403: &str = "HTTP_403";

/// Result of one API call: the decoded payload or a structured error.
pub type ApiResponse<T> = Result<T, ApiError>;

/// A structured API failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS, thiserror::Error)]
#[ts(export, export_to = "bindings/")]
#[error("{code}: {message}")]
pub struct ApiError {
    /// Machine-readable code, e.g. `HTTP_404` or `NETWORK_ERROR`.
    pub code: String,
    /// Human-readable message, shown to the user on the default path.
    pub message: String,
}

/// Coarse classification of an [`ApiError`] code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The request never got a response.
    Network,
    /// Authentication expired or missing.
    Unauthorized,
    /// Authenticated but not allowed.
    Forbidden,
    /// Anything else; the server message is shown as-is.
    Other,
}

impl ApiError {
    /// Build an error from a code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    /// Build an error for a non-2xx status without a server-supplied code.
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        Self::new(format!("HTTP_{status}"), message)
    }

    /// Build a transport failure.
    pub fn network(message: impl Into<String>) -> Self {
        Self::new(NETWORK_ERROR, message)
    }

    /// Build a decoding failure for a malformed success body.
    pub fn invalid_response(message: impl Into<String>) -> Self {
        Self::new(INVALID_RESPONSE, message)
    }

    /// Build an encoding failure for an outgoing body.
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(INVALID_REQUEST, message)
    }

    /// Classify the code.
    pub fn kind(&self) -> ErrorKind {
        match self.code.as_str() {
            NETWORK_ERROR => ErrorKind::Network,
            HTTP_401 => ErrorKind::Unauthorized,
            HTTP_403 => ErrorKind::Forbidden,
            _ => ErrorKind::Other,
        }
    }
}

/// Pagination metadata attached to list responses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct PaginationMeta {
    /// Items in this page.
    #[serde(default)]
    pub count: u64,
    /// Items across all pages.
    pub total: u64,
    /// Page size requested.
    pub limit: u32,
    /// Offset requested.
    pub offset: u32,
}

/// One page of a list, in backend order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct PaginatedResponse<T> {
    /// Items, in the order the backend returned them.
    pub data: Vec<T>,
    /// Pagination metadata.
    pub meta: PaginationMeta,
}

impl<T> PaginatedResponse<T> {
    /// Whether more items exist past this page.
    pub fn has_more(&self) -> bool {
        u64::from(self.meta.offset).saturating_add(self.data.len() as u64) < self.meta.total
    }
}
