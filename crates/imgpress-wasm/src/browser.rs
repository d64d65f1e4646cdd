//! Browser plumbing: reading `File`s, object URLs and "save as".

use futures::future::try_join_all;
use imgpress_core::{is_image_media_type, CandidateFile, PreviewItem};
use js_sys::{Array, Uint8Array};
use tracing::warn;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, BlobPropertyBag, File, FileList, HtmlAnchorElement, Url};

/// The image files of a selection, in selection order.
pub(crate) fn image_files(files: &FileList) -> Vec<File> {
    (0..files.length())
        .filter_map(|index| files.get(index))
        .filter(|file| is_image_media_type(&file.type_()))
        .collect()
}

/// Read every file concurrently. Resolves once all reads finish; any failed
/// read rejects the whole batch.
pub(crate) async fn read_files(files: Vec<File>) -> Result<Vec<CandidateFile>, JsValue> {
    try_join_all(files.into_iter().map(read_file)).await
}

async fn read_file(file: File) -> Result<CandidateFile, JsValue> {
    let buffer = JsFuture::from(file.array_buffer()).await?;
    let bytes = Uint8Array::new(&buffer).to_vec();
    Ok(CandidateFile::new(file.name(), file.type_(), bytes))
}

/// Wrap bytes in a `Blob` and return an object URL for it.
pub(crate) fn object_url(bytes: &[u8], media_type: &str) -> Result<String, JsValue> {
    let parts = Array::of1(&Uint8Array::from(bytes));
    let options = BlobPropertyBag::new();
    options.set_type(media_type);

    let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options)?;
    Url::create_object_url_with_blob(&blob)
}

/// One object URL per preview, in order. If any URL cannot be created the
/// ones already made are revoked and the error is returned.
pub(crate) fn object_urls(previews: &[PreviewItem]) -> Result<Vec<String>, JsValue> {
    let mut urls = Vec::with_capacity(previews.len());
    for item in previews {
        match object_url(&item.bytes, item.media_type.as_str()) {
            Ok(url) => urls.push(url),
            Err(err) => {
                revoke_object_urls(urls);
                return Err(err);
            }
        }
    }
    Ok(urls)
}

/// Release URLs that no preview uses any more.
pub(crate) fn revoke_object_urls(urls: impl IntoIterator<Item = String>) {
    for url in urls {
        if let Err(err) = Url::revoke_object_url(&url) {
            warn!(url = %url, error = ?err, "failed to revoke object URL");
        }
    }
}

/// Click a temporary `<a download>` so the browser saves `url` as `file_name`.
pub(crate) fn trigger_download(url: &str, file_name: &str) -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| JsValue::from_str("No document available"))?;
    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("Document has no body"))?;

    let anchor: HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
    anchor.set_href(url);
    anchor.set_download(file_name);

    body.append_child(&anchor)?;
    anchor.click();
    body.remove_child(&anchor)?;
    Ok(())
}
