//! Media type bindings.

use wasm_bindgen::prelude::*;

/// Whether intake would accept a file with this `File.type`.
#[wasm_bindgen]
pub fn is_image_media_type(value: &str) -> bool {
    imgpress_core::is_image_media_type(value)
}

/// Sniff an image type from its magic bytes, e.g. `"image/png"`.
/// Returns `undefined` for unrecognized content.
#[wasm_bindgen]
pub fn detect_format(bytes: &[u8]) -> Option<String> {
    imgpress_core::detect_format(bytes).map(|media| media.as_str().to_string())
}
