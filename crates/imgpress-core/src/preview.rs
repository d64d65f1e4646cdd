//! Preview items and the files they are built from.

use crate::media::MediaType;
use crate::quality::format_kilobytes;

/// A user-selected file before intake filtering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateFile {
    pub name: String,
    pub media_type: MediaType,
    pub bytes: Vec<u8>,
}

impl CandidateFile {
    pub fn new(name: impl Into<String>, media_type: impl Into<MediaType>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            media_type: media_type.into(),
            bytes,
        }
    }
}

/// One image as currently shown: its original name and declared type, and
/// its current encoded bytes (original or re-encoded).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewItem {
    pub name: String,
    pub media_type: MediaType,
    pub bytes: Vec<u8>,
}

impl PreviewItem {
    /// Current encoded size in bytes.
    pub fn size(&self) -> usize {
        self.bytes.len()
    }

    pub fn size_kb(&self) -> f64 {
        self.size() as f64 / 1024.0
    }

    /// Display line, e.g. `photo.png (488.28 KB)`.
    pub fn caption(&self) -> String {
        format!("{} ({})", self.name, format_kilobytes(self.size()))
    }

    /// Same name and type, new bytes.
    pub(crate) fn with_bytes(&self, bytes: Vec<u8>) -> Self {
        Self {
            name: self.name.clone(),
            media_type: self.media_type.clone(),
            bytes,
        }
    }
}

impl From<CandidateFile> for PreviewItem {
    fn from(file: CandidateFile) -> Self {
        Self {
            name: file.name,
            media_type: file.media_type,
            bytes: file.bytes,
        }
    }
}

/// What a "save as" needs: the file name and the bytes to write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Download {
    pub file_name: String,
    pub media_type: MediaType,
    pub bytes: Vec<u8>,
}

impl From<&PreviewItem> for Download {
    fn from(item: &PreviewItem) -> Self {
        Self {
            file_name: item.name.clone(),
            media_type: item.media_type.clone(),
            bytes: item.bytes.clone(),
        }
    }
}
