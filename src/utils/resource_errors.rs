use leptos::{ev, logging};
use leptos_use::{use_event_listener, use_window};

/// Logs resources that fail to load. Console-only; nothing is retried.
pub fn attach_resource_error_logger() {
    _ = use_event_listener(use_window(), ev::error, |evt| {
        logging::warn!("resource loading error: {} {}", evt.filename(), evt.message());
    });
}
