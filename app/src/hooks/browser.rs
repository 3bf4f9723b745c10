//! Browser side effects: file download and clipboard.

#[cfg(feature = "web")]
use wasm_bindgen::prelude::*;

/// Offers `content` as a file download.
#[cfg(feature = "web")]
pub fn download_text(file_name: &str, content: &str, mime: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window")?;
    let document = window.document().ok_or("No document")?;

    let parts = js_sys::Array::of1(&JsValue::from_str(content));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type(mime);
    let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options)
        .map_err(|e| format!("Blob creation failed: {:?}", e))?;
    let url = web_sys::Url::create_object_url_with_blob(&blob)
        .map_err(|e| format!("Object URL failed: {:?}", e))?;

    let anchor: web_sys::HtmlAnchorElement = document
        .create_element("a")
        .map_err(|e| format!("Anchor creation failed: {:?}", e))?
        .dyn_into()
        .map_err(|_| "Not an anchor element")?;
    anchor.set_href(&url);
    anchor.set_download(file_name);
    anchor.click();

    web_sys::Url::revoke_object_url(&url).map_err(|e| format!("Revoke failed: {:?}", e))?;
    Ok(())
}

/// Writes `text` to the clipboard. Completion is not awaited.
#[cfg(feature = "web")]
pub fn copy_to_clipboard(text: &str) -> Result<(), String> {
    use js_sys::Reflect;

    let window = web_sys::window().ok_or("No window")?;
    let clipboard = Reflect::get(&window.navigator(), &JsValue::from_str("clipboard"))
        .map_err(|_| "Clipboard not available")?;
    if clipboard.is_undefined() {
        return Err("Clipboard not available".to_string());
    }

    let write_text: js_sys::Function = Reflect::get(&clipboard, &JsValue::from_str("writeText"))
        .map_err(|_| "No writeText method")?
        .dyn_into()
        .map_err(|_| "writeText is not a function")?;
    write_text
        .call1(&clipboard, &JsValue::from_str(text))
        .map_err(|e| format!("writeText failed: {:?}", e))?;
    Ok(())
}

#[cfg(not(feature = "web"))]
pub fn download_text(_file_name: &str, _content: &str, _mime: &str) -> Result<(), String> {
    Err("Downloads only available in web mode".to_string())
}

#[cfg(not(feature = "web"))]
pub fn copy_to_clipboard(_text: &str) -> Result<(), String> {
    Err("Clipboard only available in web mode".to_string())
}
