// ============================================================================
// ORCHESTRA ATTENDANCE - FRONTEND MVVM (PURE RUST)
// ============================================================================
// - Views: functions that render DOM (no logic)
// - ViewModels: UI logic over the state
// - Services: API communication only
// - State: Rc<RefCell> state shared by everything above
// - Models: structures exchanged with the backend
// ============================================================================

mod config;
mod error;
mod models;
mod services;
mod viewmodels;
mod state;
mod dom;
mod views;
mod utils;
mod app;

use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use wasm_logger::Config;
use crate::app::App;
use crate::config::CONFIG;

thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    // No logger at all when logging is disabled
    if let Some(level) = CONFIG.effective_log_level().to_level() {
        wasm_logger::init(Config::new(level));
    }
    log::info!("🚀 [APP] Orchestra attendance client starting");

    let app = App::new()?;
    app.render()?;

    APP.with(|cell| {
        *cell.borrow_mut() = Some(app);
    });

    Ok(())
}

/// Full re-render of the mounted app
pub fn rerender_app() {
    APP.with(|cell| match cell.try_borrow() {
        Ok(app) => match app.as_ref() {
            Some(app) => {
                if let Err(e) = app.render() {
                    log::error!("❌ [APP] Re-render failed: {:?}", e);
                }
            }
            None => log::warn!("⚠️ [APP] Re-render before the app was mounted"),
        },
        Err(_) => log::warn!("⚠️ [APP] Re-render skipped, app busy"),
    });
}
