//! Decoded bitmaps and decode failures.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DecodeError {
    /// Empty input, or bytes no enabled codec claims.
    #[error("Invalid or unsupported image format")]
    InvalidFormat,

    /// The codec recognized the format but could not read the data.
    #[error("Corrupted or incomplete image file: {0}")]
    CorruptedFile(String),
}

/// An upright RGBA bitmap at the image's natural size, the in-memory
/// stand-in for a canvas the image was drawn onto.
#[derive(Debug, Clone)]
pub struct DecodedImage {
    pub width: u32,
    pub height: u32,
    /// Row-major, 4 bytes per pixel, straight (non-premultiplied) alpha.
    pub pixels: Vec<u8>,
}

impl DecodedImage {
    pub fn from_rgba_image(img: image::RgbaImage) -> Self {
        let (width, height) = img.dimensions();
        Self {
            width,
            height,
            pixels: img.into_raw(),
        }
    }

    /// Flatten onto an opaque black backdrop, for encoders without alpha.
    ///
    /// Matches what a canvas does when asked for JPEG: transparent areas
    /// come out black and partial alpha darkens the colour proportionally.
    pub fn to_rgb_pixels(&self) -> Vec<u8> {
        self.pixels
            .chunks_exact(4)
            .flat_map(|px| {
                let alpha = u16::from(px[3]);
                let over_black = |c: u8| ((u16::from(c) * alpha + 127) / 255) as u8;
                [over_black(px[0]), over_black(px[1]), over_black(px[2])]
            })
            .collect()
    }
}
