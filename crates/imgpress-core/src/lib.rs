//! imgpress core - client-side image re-encoding
//!
//! This crate holds everything the browser tool does that is not browser
//! plumbing: deciding which files are images, turning the compression slider
//! into an encoder quality, decoding and re-encoding bitmaps, and the
//! [`Session`] controller that owns the preview sequence.
//!
//! # Module Structure
//!
//! - `media` - media type classification and magic-byte sniffing
//! - `quality` - the 1-100 compression percentage and derived fraction
//! - `decode` - bytes to RGBA bitmap, EXIF orientation applied
//! - `encode` - bitmap to JPEG / PNG / WebP bytes
//! - `compress` - the decode + encode pipeline over previews
//! - `session` - intake, compress and download for one page session

pub mod compress;
pub mod config;
pub mod decode;
pub mod encode;
pub mod error;
pub mod media;
pub mod preview;
pub mod quality;
pub mod session;

#[cfg(test)]
mod test_support;

pub use compress::{reencode, reencode_all, reencode_item};
pub use config::SessionOptions;
pub use error::CompressError;
pub use media::{detect_format, is_image_media_type, MediaType};
pub use preview::{CandidateFile, Download, PreviewItem};
pub use quality::{format_kilobytes, quality_fraction, CompressPercent, DEFAULT_PERCENT};
pub use session::Session;
