//! Error-code to toast mapping, observed from a bus listener.

#![allow(clippy::unwrap_used)]

use tokio::sync::broadcast::Receiver;
use velg_types::ApiError;
use velg_ui::{ErrorHandler, Route, Toast, ToastType, UiBus, UiEvent};

fn handler() -> (ErrorHandler, Receiver<UiEvent>) {
    let bus = UiBus::new();
    let rx = bus.subscribe();
    (ErrorHandler::new(bus), rx)
}

fn drain(rx: &mut Receiver<UiEvent>) -> Vec<UiEvent> {
    std::iter::from_fn(|| rx.try_recv().ok()).collect()
}

fn toasts(events: &[UiEvent]) -> Vec<&Toast> {
    events
        .iter()
        .filter_map(|e| match e {
            UiEvent::Toast(t) => Some(t),
            UiEvent::Navigate(_) => None,
        })
        .collect()
}

#[test]
fn unauthorized_warns_once_and_redirects() {
    let (handler, mut rx) = handler();
    handler.handle_api_error(&ApiError::new("HTTP_401", "token expired"));

    let events = drain(&mut rx);
    let shown = toasts(&events);
    assert_eq!(shown.len(), 1);
    assert_eq!(shown.first().unwrap().kind, ToastType::Warning);
    assert!(events.contains(&UiEvent::Navigate(Route::login())));
    assert_eq!(events.len(), 2);
}

#[test]
fn forbidden_is_one_error_toast_without_redirect() {
    let (handler, mut rx) = handler();
    handler.handle_api_error(&ApiError::new("HTTP_403", "nope"));

    let events = drain(&mut rx);
    assert_eq!(events.len(), 1);
    let toast = toasts(&events).into_iter().next().unwrap();
    assert_eq!(toast.kind, ToastType::Error);
    assert!(toast.message.starts_with("Access denied"));
}

#[test]
fn network_failure_reports_connection_lost() {
    let (handler, mut rx) = handler();
    handler.handle_api_error(&ApiError::network("connection refused"));

    let events = drain(&mut rx);
    assert_eq!(events.len(), 1);
    let toast = toasts(&events).into_iter().next().unwrap();
    assert_eq!(toast.kind, ToastType::Error);
    assert!(toast.message.starts_with("Connection lost"));
}

#[test]
fn unknown_codes_show_the_server_message() {
    let (handler, mut rx) = handler();
    handler.handle_api_error(&ApiError::new("HTTP_999", "custom"));

    let events = drain(&mut rx);
    assert_eq!(
        events,
        vec![UiEvent::Toast(Toast {
            message: String::from("custom"),
            kind: ToastType::Error,
        })]
    );
}

#[test]
fn empty_message_falls_back_to_generic_text() {
    let (handler, mut rx) = handler();
    handler.handle_api_error(&ApiError::new("SLUG_TAKEN", ""));

    let events = drain(&mut rx);
    let shown = toasts(&events);
    assert_eq!(shown.len(), 1);
    assert_eq!(shown.first().unwrap().message, "An unexpected error occurred.");
}

#[test]
fn no_listener_is_not_an_error() {
    ErrorHandler::new(UiBus::new()).handle_api_error(&ApiError::new("HTTP_401", ""));
}
