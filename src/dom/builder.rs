// ============================================================================
// ELEMENT BUILDER - Builder pattern for creating elements
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{append_child, create_element};

pub struct ElementBuilder {
    element: Element,
}

impl ElementBuilder {
    pub fn new(tag: &str) -> Result<Self, JsValue> {
        Ok(Self {
            element: create_element(tag)?,
        })
    }

    /// Replace the class list
    pub fn class(self, class: &str) -> Self {
        self.element.set_class_name(class);
        self
    }

    pub fn id(self, id: &str) -> Result<Self, JsValue> {
        self.element.set_attribute("id", id)?;
        Ok(self)
    }

    pub fn text(self, text: &str) -> Self {
        self.element.set_text_content(Some(text));
        self
    }

    pub fn child(self, child: Element) -> Result<Self, JsValue> {
        append_child(&self.element, &child)?;
        Ok(self)
    }

    pub fn attr(self, name: &str, value: &str) -> Result<Self, JsValue> {
        self.element.set_attribute(name, value)?;
        Ok(self)
    }

    /// Set a boolean attribute (disabled, checked, selected) when `on`
    pub fn flag(self, name: &str, on: bool) -> Result<Self, JsValue> {
        if on {
            self.element.set_attribute(name, "")?;
        }
        Ok(self)
    }

    pub fn build(self) -> Element {
        self.element
    }
}
