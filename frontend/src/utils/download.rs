use wasm_bindgen::JsCast;

fn bytes_to_blob(bytes: &[u8], mime: &str) -> Result<web_sys::Blob, String> {
    let array = js_sys::Array::new();
    array.push(&js_sys::Uint8Array::from(bytes));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type(mime);
    web_sys::Blob::new_with_u8_array_sequence_and_options(&array, &options)
        .map_err(|_| "Failed to create blob".to_string())
}

/// Object URL for in-page display. The caller owns it and should revoke it.
pub fn object_url(bytes: &[u8], mime: &str) -> Result<String, String> {
    let blob = bytes_to_blob(bytes, mime)?;
    web_sys::Url::create_object_url_with_blob(&blob)
        .map_err(|_| "Failed to create object URL".to_string())
}

pub fn revoke_object_url(url: &str) {
    let _ = web_sys::Url::revoke_object_url(url);
}

pub fn trigger_download(file_name: &str, bytes: &[u8], mime: &str) -> Result<(), String> {
    let url = object_url(bytes, mime)?;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or("No document")?;
    let element = document
        .create_element("a")
        .map_err(|_| "Failed to create link".to_string())?;
    let a = element
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(|_| "Failed to cast anchor".to_string())?;
    a.set_href(&url);
    a.set_download(file_name);
    a.style().set_property("display", "none").ok();
    document
        .body()
        .ok_or("No body")?
        .append_child(&a)
        .map_err(|_| "Append failed".to_string())?;
    a.click();
    a.remove();
    revoke_object_url(&url);
    log::info!("downloaded {} ({} bytes)", file_name, bytes.len());
    Ok(())
}

/// Reads a picked file fully into memory.
pub async fn read_file_bytes(file: &web_sys::File) -> Result<Vec<u8>, String> {
    let buffer = wasm_bindgen_futures::JsFuture::from(file.array_buffer())
        .await
        .map_err(|_| "Failed to read file".to_string())?;
    Ok(js_sys::Uint8Array::new(&buffer).to_vec())
}
