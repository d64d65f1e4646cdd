//! Error type shared by the encoders.

use thiserror::Error;

/// Errors that can occur while serializing a bitmap.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Pixel data length doesn't match expected dimensions
    #[error("Invalid pixel data: expected {expected} bytes, got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },

    /// Width or height is zero
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// The underlying codec failed
    #[error("Encoding failed: {0}")]
    EncodingFailed(String),
}

/// Check dimensions and buffer length before handing pixels to a codec.
pub(crate) fn validate(
    pixels: &[u8],
    width: u32,
    height: u32,
    channels: usize,
) -> Result<(), EncodeError> {
    if width == 0 || height == 0 {
        return Err(EncodeError::InvalidDimensions { width, height });
    }

    let expected = (width as usize) * (height as usize) * channels;
    if pixels.len() != expected {
        return Err(EncodeError::InvalidPixelData {
            expected,
            actual: pixels.len(),
        });
    }

    Ok(())
}

impl From<image::ImageError> for EncodeError {
    fn from(err: image::ImageError) -> Self {
        EncodeError::EncodingFailed(err.to_string())
    }
}
