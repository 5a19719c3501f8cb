// ============================================================================
// HEADER + NAVIGATION
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{on_click, ElementBuilder};
use crate::state::Screen;
use crate::utils::{other_language, save_language};
use crate::views::ViewContext;

pub fn render_header(ctx: &ViewContext) -> Result<Element, JsValue> {
    let user_name = ctx.state.auth.marker_name();

    let language = ElementBuilder::new("button")?
        .class("btn-language")
        .text(&ctx.t("language_toggle"))
        .build();
    {
        let state = ctx.state.clone();
        on_click(&language, move |_| {
            let next = other_language(&state.lang());
            save_language(next);
            state.set_language(next);
        })?;
    }

    let logout = ElementBuilder::new("button")?
        .id("logout-btn")?
        .class("btn-logout")
        .text(&ctx.t("logout"))
        .build();
    {
        let vm = ctx.session();
        on_click(&logout, move |_| {
            vm.logout();
            if let Some(window) = web_sys::window() {
                let _ = window.location().reload();
            }
        })?;
    }

    Ok(ElementBuilder::new("header")?
        .class("app-header")
        .child(ElementBuilder::new("h1")?.text(&ctx.t("app_title")).build())?
        .child(
            ElementBuilder::new("span")?
                .id("current-user")?
                .text(&ctx.tf("user_suffix", &[&user_name]))
                .build(),
        )?
        .child(language)?
        .child(logout)?
        .build())
}

pub fn render_navigation(ctx: &ViewContext) -> Result<Element, JsValue> {
    let current = ctx.state.current_screen();
    let nav = ElementBuilder::new("nav")?.class("main-nav").build();

    for screen in Screen::ALL {
        let class = if screen == current { "nav-btn active" } else { "nav-btn" };
        let button = ElementBuilder::new("button")?
            .class(class)
            .text(&ctx.t(screen.label_key()))
            .build();
        let state = ctx.state.clone();
        on_click(&button, move |_| state.set_screen(screen))?;
        nav.append_child(&button)?;
    }

    Ok(nav)
}
