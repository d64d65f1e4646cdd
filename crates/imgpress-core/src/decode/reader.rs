//! Bytes to upright bitmap.

use std::io::Cursor;

use exif::{In, Reader, Tag};
use image::{DynamicImage, ImageReader};

use super::{DecodeError, DecodedImage};

/// Decode any enabled image format, honouring its EXIF orientation.
///
/// The format is sniffed from the content, never taken from the declared
/// media type, so a mislabeled file still decodes. Orientation is applied
/// because a browser draws an `<img>` upright before its pixels reach a
/// canvas.
pub fn decode_image(bytes: &[u8]) -> Result<DecodedImage, DecodeError> {
    if bytes.is_empty() {
        return Err(DecodeError::InvalidFormat);
    }

    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;
    if reader.format().is_none() {
        return Err(DecodeError::InvalidFormat);
    }

    let img = reader
        .decode()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    let upright = orient(img, exif_orientation(bytes));
    Ok(DecodedImage::from_rgba_image(upright.into_rgba8()))
}

/// The EXIF Orientation tag (1-8), or 1 when absent or unreadable.
fn exif_orientation(bytes: &[u8]) -> u32 {
    Reader::new()
        .read_from_container(&mut Cursor::new(bytes))
        .ok()
        .and_then(|exif| {
            exif.get_field(Tag::Orientation, In::PRIMARY)
                .and_then(|field| field.value.get_uint(0))
        })
        .unwrap_or(1)
}

/// Undo the camera rotation/mirroring named by an EXIF orientation value.
/// See https://exiftool.org/TagNames/EXIF.html
fn orient(img: DynamicImage, orientation: u32) -> DynamicImage {
    match orientation {
        2 => img.fliph(),
        3 => img.rotate180(),
        4 => img.flipv(),
        5 => img.rotate90().fliph(),
        6 => img.rotate90(),
        7 => img.rotate270().fliph(),
        8 => img.rotate270(),
        _ => img,
    }
}
