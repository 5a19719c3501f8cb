// ============================================================================
// APP - Owns the state and mounts the views into #app
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use gloo_timers::callback::Timeout;
use crate::dom::{append_child, get_element_by_id, set_inner_html};
use crate::state::AppState;
use crate::utils::load_language;
use crate::views::{flush_toasts, render_app, ViewContext};

pub struct App {
    ctx: ViewContext,
    root: Element,
}

impl App {
    pub fn new() -> Result<Self, JsValue> {
        let root = get_element_by_id("app")
            .ok_or_else(|| JsValue::from_str("No #app element found"))?;

        let state = AppState::new(load_language());
        log::info!("🌐 [APP] Language: {}", state.lang());

        // Batch state changes into one re-render per tick
        state.subscribe_to_changes(move || {
            Timeout::new(0, move || {
                crate::rerender_app();
            })
            .forget();
        });

        let toasts = state.notifications.clone();
        state.notifications.subscribe(move || {
            let toasts = toasts.clone();
            Timeout::new(0, move || {
                if let Err(e) = flush_toasts(&toasts) {
                    log::error!("❌ [TOAST] {:?}", e);
                }
            })
            .forget();
        });

        Ok(Self {
            ctx: ViewContext::new(state),
            root,
        })
    }

    pub fn render(&self) -> Result<(), JsValue> {
        set_inner_html(&self.root, "");
        let view = render_app(&self.ctx)?;
        append_child(&self.root, &view)?;
        flush_toasts(&self.ctx.state.notifications)
    }
}
