//! Lossless PNG encoding.
//!
//! Canvas serialization ignores the quality argument for PNG, and so does
//! this encoder.

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};

use super::types::{validate, EncodeError};

/// Encode RGBA pixel data to PNG bytes.
pub fn encode_png(pixels: &[u8], width: u32, height: u32) -> Result<Vec<u8>, EncodeError> {
    validate(pixels, width, height, 4)?;

    let mut out = Vec::new();
    PngEncoder::new(&mut out).write_image(pixels, width, height, ExtendedColorType::Rgba8)?;
    Ok(out)
}
