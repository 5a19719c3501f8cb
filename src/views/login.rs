// ============================================================================
// LOGIN VIEW
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;
use crate::dom::{input_value_by_id, on_click, on_keyup, ElementBuilder};
use crate::views::ViewContext;

const USERNAME_ID: &str = "username";
const PASSWORD_ID: &str = "password";

fn submit(ctx: &ViewContext) {
    let username = input_value_by_id(USERNAME_ID);
    let password = input_value_by_id(PASSWORD_ID);
    let vm = ctx.session();
    spawn_local(async move {
        // Outcome is reported through notifications
        let _ = vm.login(&username, &password).await;
    });
}

pub fn render_login(ctx: &ViewContext) -> Result<Element, JsValue> {
    let username = ElementBuilder::new("input")?
        .id(USERNAME_ID)?
        .attr("type", "text")?
        .attr("autocomplete", "username")?
        .attr("placeholder", &ctx.t("username"))?
        .build();

    let password = ElementBuilder::new("input")?
        .id(PASSWORD_ID)?
        .attr("type", "password")?
        .attr("autocomplete", "current-password")?
        .attr("placeholder", &ctx.t("password"))?
        .build();
    {
        let ctx = ctx.clone();
        on_keyup(&password, move |e| {
            if e.key() == "Enter" {
                submit(&ctx);
            }
        })?;
    }

    let button = ElementBuilder::new("button")?
        .id("login-btn")?
        .class("btn-primary")
        .text(&ctx.t("login"))
        .build();
    {
        let ctx = ctx.clone();
        on_click(&button, move |_| submit(&ctx))?;
    }

    let error = ElementBuilder::new("p")?
        .id("login-error")?
        .class("login-error")
        .text(&ctx.state.auth.get_login_error().unwrap_or_default())
        .build();

    Ok(ElementBuilder::new("div")?
        .id("login-screen")?
        .class("login-screen")
        .child(ElementBuilder::new("h1")?.text(&ctx.t("app_title")).build())?
        .child(username)?
        .child(password)?
        .child(button)?
        .child(error)?
        .build())
}
