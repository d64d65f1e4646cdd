//! Image decoding for the re-encode pass.
//!
//! Turns the stored bytes of a preview back into an RGBA bitmap at its
//! natural resolution. Supported inputs are whatever the `image` crate was
//! built with: JPEG, PNG, WebP, GIF and BMP.

mod reader;
mod types;

pub use reader::decode_image;
pub use types::{DecodeError, DecodedImage};
