// ============================================================================
// ELEMENT HELPERS - Basic DOM access
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlInputElement, HtmlSelectElement, Window};

pub fn window() -> Option<Window> {
    web_sys::window()
}

pub fn document() -> Option<Document> {
    window()?.document()
}

pub fn get_element_by_id(id: &str) -> Option<Element> {
    document()?.get_element_by_id(id)
}

pub fn create_element(tag: &str) -> Result<Element, JsValue> {
    document()
        .ok_or_else(|| JsValue::from_str("No document"))
        .and_then(|doc| doc.create_element(tag))
}

pub fn set_inner_html(element: &Element, html: &str) {
    element.set_inner_html(html);
}

pub fn append_child(parent: &Element, child: &Element) -> Result<(), JsValue> {
    parent.append_child(child).map(|_| ())
}

/// Current value of the <input> that fired the event
pub fn input_value(event: &Event) -> Option<String> {
    event
        .target()?
        .dyn_into::<HtmlInputElement>()
        .ok()
        .map(|input| input.value())
}

/// Current value of the <select> that fired the event
pub fn select_value(event: &Event) -> Option<String> {
    event
        .target()?
        .dyn_into::<HtmlSelectElement>()
        .ok()
        .map(|select| select.value())
}

/// Value of an <input> looked up by id ("" when missing)
pub fn input_value_by_id(id: &str) -> String {
    get_element_by_id(id)
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
        .map(|input| input.value())
        .unwrap_or_default()
}

/// Open the native file picker behind a hidden <input type=file>
pub fn click_element_by_id(id: &str) {
    if let Some(el) = get_element_by_id(id).and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok()) {
        el.click();
    }
}
