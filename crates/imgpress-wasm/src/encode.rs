//! Stateless re-encoding bindings.
//!
//! These mirror what [`JsSession::compress`](crate::JsSession::compress)
//! does per item, for callers that manage their own state.
//!
//! ```typescript
//! import { reencode, quality_fraction } from '@imgpress/wasm';
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const smaller = reencode(bytes, file.type, 30); // quality 0.70
//! ```

use imgpress_core::{CompressPercent, MediaType};
use wasm_bindgen::prelude::*;

use crate::types::compress_error;

/// Re-encode image bytes at a compression percentage.
///
/// `percent` is rounded and clamped to 1-100. The output keeps the declared
/// media type when an encoder exists for it (JPEG, PNG, WebP) and is PNG
/// otherwise. JPEG and WebP output shrink as the percentage rises.
#[wasm_bindgen]
pub fn reencode(bytes: &[u8], media_type: &str, percent: f64) -> Result<Vec<u8>, JsValue> {
    let fraction = CompressPercent::from_f64(percent).quality_fraction();
    imgpress_core::reencode("input", bytes, &MediaType::from(media_type), fraction)
        .map_err(compress_error)
}

/// `1 - percent / 100`: 30 gives 0.70, 100 gives 0.0. Out-of-range input
/// clamps first, so 300 gives 0.0 rather than wrapping.
#[wasm_bindgen]
pub fn quality_fraction(percent: f64) -> f64 {
    CompressPercent::from_f64(percent).quality_fraction()
}

/// Byte size as `"x.xx KB"`.
#[wasm_bindgen]
pub fn format_kilobytes(size: usize) -> String {
    imgpress_core::format_kilobytes(size)
}
