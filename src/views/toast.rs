// ============================================================================
// TOASTS - Transient notifications in a container outside #app
// ============================================================================

use wasm_bindgen::prelude::*;
use gloo_timers::callback::Timeout;
use web_sys::Element;
use crate::config::CONFIG;
use crate::dom::{document, get_element_by_id, ElementBuilder};
use crate::state::Notifications;

const CONTAINER_ID: &str = "toast-container";

/// The container survives full re-renders of #app
fn container() -> Result<Element, JsValue> {
    if let Some(existing) = get_element_by_id(CONTAINER_ID) {
        return Ok(existing);
    }
    let body = document()
        .and_then(|doc| doc.body())
        .ok_or_else(|| JsValue::from_str("No body"))?;
    let created = ElementBuilder::new("div")?
        .id(CONTAINER_ID)?
        .class("toast-container")
        .build();
    body.append_child(&created)?;
    Ok(created)
}

/// Show every queued notification, each removed after the configured delay
pub fn flush_toasts(notifications: &Notifications) -> Result<(), JsValue> {
    let pending = notifications.drain();
    if pending.is_empty() {
        return Ok(());
    }

    let container = container()?;
    for notification in pending {
        let toast = ElementBuilder::new("div")?
            .class(&format!("toast {}", notification.severity.css_class()))
            .attr("data-toast-id", &notification.id.to_string())?
            .text(&notification.message)
            .build();
        container.append_child(&toast)?;

        Timeout::new(CONFIG.toast_duration_ms, move || toast.remove()).forget();
    }
    Ok(())
}
