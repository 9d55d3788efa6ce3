use codee::string::FromToStringCodec;
use leptos::prelude::*;
use leptos_use::storage::use_local_storage;

/// Anonymous id attached to analytics payloads, minted once per browser and
/// kept in local storage across page views.
pub fn visitor_id_get_or_init(key: &str) -> String {
    let (visitor_id, set_visitor_id, _) = use_local_storage::<String, FromToStringCodec>(key);
    let current = visitor_id.get_untracked();
    if current.is_empty() {
        let fresh = uuid::Uuid::new_v4().to_string();
        set_visitor_id.set(fresh.clone());
        fresh
    } else {
        current
    }
}
