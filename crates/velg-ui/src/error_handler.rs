//! Turns API errors into user-visible actions.
//!
//! This is the only place an error code becomes a toast or a redirect.
//! Services hand errors through unchanged and views call
//! [`ErrorHandler::handle_api_error`] on whatever they get back.

use tracing::{info, warn};
use velg_types::{ApiError, ErrorKind};

use crate::bus::{Route, ToastType, UiBus};

const SESSION_EXPIRED: &str = "Session expired. Redirecting to login.";
const ACCESS_DENIED: &str = "Access denied. You do not have permission for this action.";
const CONNECTION_LOST: &str = "Connection lost. Please check your network and try again.";
const UNEXPECTED: &str = "An unexpected error occurred.";

/// Maps [`ApiError`] codes to toasts and navigation on a [`UiBus`].
#[derive(Debug, Clone)]
pub struct ErrorHandler {
    bus: UiBus,
}

impl ErrorHandler {
    /// Create a handler publishing to `bus`.
    pub const fn new(bus: UiBus) -> Self {
        Self { bus }
    }

    /// Emit exactly one toast for `error`, plus a login redirect when the
    /// session has expired.
    pub fn handle_api_error(&self, error: &ApiError) {
        match error.kind() {
            ErrorKind::Unauthorized => {
                info!(code = %error.code, "session expired, redirecting to login");
                self.bus.show_toast(SESSION_EXPIRED, ToastType::Warning);
                self.bus.navigate(Route::login());
            }
            ErrorKind::Forbidden => {
                warn!(code = %error.code, message = %error.message, "access denied");
                self.bus.show_toast(ACCESS_DENIED, ToastType::Error);
            }
            ErrorKind::Network => {
                warn!(code = %error.code, message = %error.message, "connection lost");
                self.bus.show_toast(CONNECTION_LOST, ToastType::Error);
            }
            ErrorKind::Other => {
                warn!(code = %error.code, message = %error.message, "api error shown to user");
                let message = if error.message.is_empty() {
                    UNEXPECTED
                } else {
                    error.message.as_str()
                };
                self.bus.show_toast(message, ToastType::Error);
            }
        }
    }
}
