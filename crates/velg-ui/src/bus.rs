//! Process-wide UI notification bus.
//!
//! [`UiBus`] broadcasts [`UiEvent`]s to every listener: the toast display
//! renders [`UiEvent::Toast`], the router follows [`UiEvent::Navigate`].
//! Publishing with no listener attached is not an error.

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

/// Capacity of the event channel.
///
/// A listener that falls further behind receives
/// [`broadcast::error::RecvError::Lagged`] and skips to the newest event.
const BUS_CAPACITY: usize = 64;

/// Route of the login page.
pub const LOGIN_ROUTE: &str = "#/login";

/// Severity of a toast.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastType {
    /// Completed action.
    Success,
    /// Failed action.
    Error,
    /// Something needs attention.
    Warning,
    /// Neutral information.
    #[default]
    Info,
}

/// A user-visible notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toast {
    /// Text shown to the user.
    pub message: String,
    /// Severity.
    #[serde(rename = "type")]
    pub kind: ToastType,
}

/// A client-side route.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Route(pub String);

impl Route {
    /// The login page.
    pub fn login() -> Self {
        Self(LOGIN_ROUTE.to_owned())
    }

    /// The route as a string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Events carried by the bus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", content = "detail", rename_all = "snake_case")]
pub enum UiEvent {
    /// Show a toast.
    Toast(Toast),
    /// Navigate to a route.
    Navigate(Route),
}

/// Broadcast channel for [`UiEvent`]s.
///
/// Cloning is cheap and every clone publishes to the same listeners.
#[derive(Debug, Clone)]
pub struct UiBus {
    tx: broadcast::Sender<UiEvent>,
}

impl UiBus {
    /// Create a bus with no listeners.
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(BUS_CAPACITY);
        Self { tx }
    }

    /// Attach a listener.
    pub fn subscribe(&self) -> broadcast::Receiver<UiEvent> {
        self.tx.subscribe()
    }

    /// Publish an event, returning how many listeners received it.
    pub fn publish(&self, event: UiEvent) -> usize {
        // send fails only when nobody is listening.
        self.tx.send(event).unwrap_or(0)
    }

    /// Publish a toast.
    pub fn show_toast(&self, message: impl Into<String>, kind: ToastType) -> usize {
        self.publish(UiEvent::Toast(Toast {
            message: message.into(),
            kind,
        }))
    }

    /// Publish a navigation.
    pub fn navigate(&self, route: Route) -> usize {
        self.publish(UiEvent::Navigate(route))
    }
}

impl Default for UiBus {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn publishing_without_listeners_is_fine() {
        let bus = UiBus::new();
        assert_eq!(bus.show_toast("saved", ToastType::Success), 0);
    }

    #[test]
    fn every_listener_receives_the_event() {
        let bus = UiBus::new();
        let mut a = bus.subscribe();
        let mut b = bus.subscribe();
        assert_eq!(bus.navigate(Route::login()), 2);
        assert_eq!(a.try_recv().ok(), Some(UiEvent::Navigate(Route::login())));
        assert_eq!(b.try_recv().ok(), Some(UiEvent::Navigate(Route::login())));
    }

    #[test]
    fn toast_serializes_like_the_browser_event() {
        let event = UiEvent::Toast(Toast {
            message: String::from("Saved"),
            kind: ToastType::Success,
        });
        let json = serde_json::to_value(&event).ok();
        assert_eq!(
            json,
            Some(serde_json::json!({
                "event": "toast",
                "detail": { "message": "Saved", "type": "success" }
            }))
        );
    }
}
