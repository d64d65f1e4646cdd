//! Bitmap serialization for the re-encode pass.
//!
//! [`encode_image`] is the equivalent of asking a canvas for a blob of a
//! given type at a given quality fraction. The codec comes from
//! [`OutputFormat::for_media_type`]; JPEG and WebP honour the fraction,
//! PNG ignores it.

mod format;
mod jpeg;
mod png;
mod types;
mod webp;

pub use format::OutputFormat;
pub use jpeg::encode_jpeg;
pub use png::encode_png;
pub use types::EncodeError;
pub use self::webp::encode_webp;

use crate::decode::DecodedImage;
use crate::quality::encoder_quality;

/// Serialize a bitmap with the given codec.
///
/// `fraction` is the canvas-style quality in [0, 1]; PNG ignores it.
pub fn encode_image(
    image: &DecodedImage,
    format: OutputFormat,
    fraction: f64,
) -> Result<Vec<u8>, EncodeError> {
    match format {
        OutputFormat::Jpeg => encode_jpeg(
            &image.to_rgb_pixels(),
            image.width,
            image.height,
            encoder_quality(fraction),
        ),
        OutputFormat::Png => encode_png(&image.pixels, image.width, image.height),
        OutputFormat::WebP => encode_webp(
            &image.pixels,
            image.width,
            image.height,
            encoder_quality(fraction),
        ),
    }
}
