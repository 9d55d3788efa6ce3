use leptos::logging;
use leptos::prelude::*;
use wasm_bindgen::JsValue;

use crate::consts::SITE_INFO;

/// One-time console diagnostics, run on page mount.
pub fn log_startup_diagnostics() {
    logging::log!(
        "{} hosted on {} ({})",
        SITE_INFO.project,
        SITE_INFO.service,
        SITE_INFO.feature
    );

    match serde_wasm_bindgen::to_value(&SITE_INFO) {
        Ok(info) => web_sys::console::table_1(&info),
        Err(e) => logging::error!("failed to serialize site info: {}", e),
    }

    log_load_time();
    log_service_worker_support();
}

fn log_load_time() {
    let Some(perf) = window().performance() else {
        logging::warn!("performance API unavailable, skipping load time log");
        return;
    };
    logging::log!("page loaded in {}ms", perf.now().round());
    logging::log!("navigation type: {}", perf.navigation().type_());
}

/// Feature detection only; no service worker is registered.
fn log_service_worker_support() {
    let navigator = JsValue::from(window().navigator());
    let supported =
        js_sys::Reflect::has(&navigator, &JsValue::from_str("serviceWorker")).unwrap_or(false);
    if supported {
        logging::log!("service worker support detected (registration not enabled)");
    }
}
