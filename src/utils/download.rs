// ============================================================================
// DOWNLOAD - Save bytes as a file through a temporary <a download>
// ============================================================================

use js_sys::{Array, Uint8Array};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

pub fn download_bytes(bytes: &[u8], filename: &str, mime: &str) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;
    let document = window.document().ok_or_else(|| JsValue::from_str("No document"))?;
    let body = document.body().ok_or_else(|| JsValue::from_str("No body"))?;

    let parts = Array::of1(&Uint8Array::from(bytes));
    let options = BlobPropertyBag::new();
    options.set_type(mime);
    let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options)?;
    let url = Url::create_object_url_with_blob(&blob)?;

    let anchor = document
        .create_element("a")?
        .dyn_into::<HtmlAnchorElement>()?;
    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor.style().set_property("display", "none")?;

    body.append_child(&anchor)?;
    anchor.click();
    Url::revoke_object_url(&url)?;
    anchor.remove();

    log::info!("💾 [CSV] Downloaded {} ({} bytes)", filename, bytes.len());
    Ok(())
}
