//! Lossy WebP encoding through libwebp.

use super::types::{validate, EncodeError};

/// Encode RGBA pixel data to lossy WebP bytes.
///
/// `quality` is on the same 1-100 scale as JPEG and is clamped to it.
pub fn encode_webp(
    pixels: &[u8],
    width: u32,
    height: u32,
    quality: u8,
) -> Result<Vec<u8>, EncodeError> {
    validate(pixels, width, height, 4)?;

    let quality = f32::from(quality.clamp(1, 100));
    let encoded = ::webp::Encoder::from_rgba(pixels, width, height)
        .encode_simple(false, quality)
        .map_err(|err| EncodeError::EncodingFailed(format!("WebP: {err:?}")))?;

    Ok(encoded.to_vec())
}
