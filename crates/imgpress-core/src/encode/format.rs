//! Output codec selection.

use serde::{Deserialize, Serialize};

use crate::media::MediaType;

/// The codec a preview is serialized with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Lossy, honors the quality fraction.
    Jpeg,
    /// Lossless, quality is ignored.
    Png,
    /// Lossy, honors the quality fraction.
    WebP,
}

impl OutputFormat {
    /// Pick the codec for a declared media type.
    ///
    /// Types without an encoder fall back to PNG, which is what canvas
    /// serialization does for unsupported types.
    pub fn for_media_type(media_type: &MediaType) -> Self {
        match media_type.essence().as_str() {
            "image/jpeg" | "image/jpg" | "image/pjpeg" => OutputFormat::Jpeg,
            "image/webp" => OutputFormat::WebP,
            _ => OutputFormat::Png,
        }
    }

    /// Whether the quality fraction changes the output.
    pub fn is_lossy(self) -> bool {
        matches!(self, OutputFormat::Jpeg | OutputFormat::WebP)
    }
}
