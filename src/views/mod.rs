pub mod context;
pub mod login;
pub mod header;
pub mod attendance;
pub mod data_tables;
pub mod reports;
pub mod toast;

pub use context::ViewContext;
pub use login::render_login;
pub use header::{render_header, render_navigation};
pub use attendance::render_attendance;
pub use data_tables::render_data;
pub use reports::render_reports;
pub use toast::flush_toasts;

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::ElementBuilder;
use crate::state::Screen;

/// Whole page for the current state: login screen, or header + active screen
pub fn render_app(ctx: &ViewContext) -> Result<Element, JsValue> {
    if !ctx.state.auth.is_logged_in() {
        return render_login(ctx);
    }

    let screen = match ctx.state.current_screen() {
        Screen::Attendance => render_attendance(ctx)?,
        Screen::Data => render_data(ctx)?,
        Screen::Reports => render_reports(ctx)?,
    };

    Ok(ElementBuilder::new("div")?
        .id("main-screen")?
        .class(if ctx.state.is_loading() { "main-screen loading" } else { "main-screen" })
        .child(render_header(ctx)?)?
        .child(render_navigation(ctx)?)?
        .child(screen)?
        .build())
}
