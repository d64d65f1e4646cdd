//! Errors surfaced by a compression session.

use thiserror::Error;

use crate::decode::DecodeError;
use crate::encode::EncodeError;

/// Why a compress request did not replace the previews.
///
/// Every variant leaves the session exactly as it was before the call.
#[derive(Debug, Error)]
pub enum CompressError {
    /// The current batch was already compressed once.
    #[error("Images were already compressed; select new files to compress again")]
    AlreadyCompressed,

    /// There are no previews to compress.
    #[error("No images to compress")]
    NothingToCompress,

    /// One item's bytes could not be decoded; the whole batch is abandoned.
    #[error("Failed to decode {name}: {source}")]
    Decode { name: String, source: DecodeError },

    /// One item could not be serialized; the whole batch is abandoned.
    #[error("Failed to encode {name}: {source}")]
    Encode { name: String, source: EncodeError },
}
