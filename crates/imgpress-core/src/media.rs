//! Media type classification and content sniffing.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The declared MIME type of a file, such as `image/png`.
///
/// The declared string is kept verbatim so a re-encoded file carries exactly
/// the type it arrived with. Comparisons go through [`MediaType::essence`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MediaType(String);

impl MediaType {
    pub const PNG: &'static str = "image/png";
    pub const JPEG: &'static str = "image/jpeg";
    pub const WEBP: &'static str = "image/webp";
    pub const GIF: &'static str = "image/gif";
    pub const BMP: &'static str = "image/bmp";

    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// The declared string, unchanged.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Lowercased type/subtype with any parameters stripped.
    pub fn essence(&self) -> String {
        self.0
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase()
    }

    /// Whether the file should be accepted by intake.
    pub fn is_image(&self) -> bool {
        is_image_media_type(&self.0)
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for MediaType {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for MediaType {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// True for any `image/*` type. An empty type is not an image.
pub fn is_image_media_type(value: &str) -> bool {
    value
        .trim_start()
        .get(..6)
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case("image/"))
}

/// Identify an image from its leading magic bytes.
pub fn detect_format(bytes: &[u8]) -> Option<MediaType> {
    const PNG_SIGNATURE: &[u8] = &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

    let kind = if bytes.starts_with(PNG_SIGNATURE) {
        MediaType::PNG
    } else if bytes.starts_with(&[0xFF, 0xD8, 0xFF]) {
        MediaType::JPEG
    } else if bytes.len() >= 12 && &bytes[0..4] == b"RIFF" && &bytes[8..12] == b"WEBP" {
        MediaType::WEBP
    } else if bytes.starts_with(b"GIF87a") || bytes.starts_with(b"GIF89a") {
        MediaType::GIF
    } else if bytes.len() >= 14 && bytes.starts_with(b"BM") {
        MediaType::BMP
    } else {
        return None;
    };

    Some(MediaType::new(kind))
}
