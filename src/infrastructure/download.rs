use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

use crate::domain::errors::AppError;

fn browser_error(context: &str, e: JsValue) -> AppError {
    AppError::BrowserError(format!("{}: {:?}", context, e))
}

/// Offers `content` as a file download through a hidden, temporary anchor
pub fn trigger_text_download(file_name: &str, content: &str, mime_type: &str) -> Result<(), AppError> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| AppError::BrowserError("Document not available".to_string()))?;
    let body = document
        .body()
        .ok_or_else(|| AppError::BrowserError("Body not available".to_string()))?;

    let parts = js_sys::Array::of1(&JsValue::from_str(content));
    let options = BlobPropertyBag::new();
    options.set_type(mime_type);
    let blob = Blob::new_with_str_sequence_and_options(&parts, &options)
        .map_err(|e| browser_error("creating blob", e))?;
    let url = Url::create_object_url_with_blob(&blob).map_err(|e| browser_error("creating object URL", e))?;

    let link = document
        .create_element("a")
        .map_err(|e| browser_error("creating anchor", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|_| AppError::BrowserError("anchor is not an HtmlAnchorElement".to_string()))?;
    link.set_href(&url);
    link.set_download(file_name);
    link.style()
        .set_property("visibility", "hidden")
        .map_err(|e| browser_error("hiding anchor", e))?;

    body.append_child(&link).map_err(|e| browser_error("attaching anchor", e))?;
    link.click();
    let detached = body.remove_child(&link).map(|_| ()).map_err(|e| browser_error("detaching anchor", e));
    let revoked = Url::revoke_object_url(&url).map_err(|e| browser_error("revoking object URL", e));
    detached.and(revoked)
}
