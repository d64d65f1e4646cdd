//! The re-encode pipeline: decode, redraw at native size, serialize.

use tracing::debug;

use crate::decode::decode_image;
use crate::encode::{encode_image, OutputFormat};
use crate::error::CompressError;
use crate::media::MediaType;
use crate::preview::PreviewItem;

/// Re-encode one file's bytes at the given quality fraction.
///
/// `name` is only used to label errors.
pub fn reencode(
    name: &str,
    bytes: &[u8],
    media_type: &MediaType,
    fraction: f64,
) -> Result<Vec<u8>, CompressError> {
    let image = decode_image(bytes).map_err(|source| CompressError::Decode {
        name: name.to_string(),
        source,
    })?;

    let format = OutputFormat::for_media_type(media_type);
    let encoded = encode_image(&image, format, fraction).map_err(|source| CompressError::Encode {
        name: name.to_string(),
        source,
    })?;

    debug!(
        file = name,
        ?format,
        lossy = format.is_lossy(),
        width = image.width,
        height = image.height,
        before = bytes.len(),
        after = encoded.len(),
        "re-encoded image"
    );

    Ok(encoded)
}

/// Re-encode a single preview, keeping its name and media type.
pub fn reencode_item(item: &PreviewItem, fraction: f64) -> Result<PreviewItem, CompressError> {
    reencode(&item.name, &item.bytes, &item.media_type, fraction).map(|bytes| item.with_bytes(bytes))
}

/// Re-encode every preview. Either all items come back, or the first
/// failure does and nothing is produced.
pub fn reencode_all(items: &[PreviewItem], fraction: f64) -> Result<Vec<PreviewItem>, CompressError> {
    items
        .iter()
        .map(|item| reencode_item(item, fraction))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preview::CandidateFile;
    use crate::test_support::{jpeg_bytes, png_bytes};
    use image::ImageEncoder;

    #[test]
    fn test_reencode_png_stays_png() {
        let out = reencode("a.png", &png_bytes(10, 10), &"image/png".into(), 0.7).unwrap();
        assert_eq!(crate::media::detect_format(&out).unwrap().as_str(), "image/png");
    }

    #[test]
    fn test_reencode_jpeg_lower_fraction_is_smaller() {
        let source = jpeg_bytes(64, 64);
        let media = MediaType::from("image/jpeg");

        let heavy = reencode("a.jpg", &source, &media, 0.05).unwrap();
        let light = reencode("a.jpg", &source, &media, 0.95).unwrap();
        assert!(heavy.len() < light.len());
    }

    #[test]
    fn test_reencode_webp_follows_slider() {
        use crate::encode::encode_webp;
        use crate::quality::quality_fraction;

        let noise: Vec<u8> = (0..64u32 * 64 * 4)
            .map(|i| if i % 4 == 3 { 255 } else { (i.wrapping_mul(2_654_435_761) >> 24) as u8 })
            .collect();
        let source = encode_webp(&noise, 64, 64, 100).unwrap();
        let media = MediaType::from("image/webp");

        let light = reencode("n.webp", &source, &media, quality_fraction(1)).unwrap();
        let heavy = reencode("n.webp", &source, &media, quality_fraction(100)).unwrap();

        assert_ne!(light, heavy);
        assert!(light.len() > heavy.len(), "1%={}, 100%={}", light.len(), heavy.len());
        assert_eq!(crate::media::detect_format(&heavy).unwrap().as_str(), "image/webp");
    }

    #[test]
    fn test_reencode_jpeg_flattens_transparency_to_black() {
        let clear = image::RgbaImage::from_pixel(8, 8, image::Rgba([255, 255, 255, 0]));
        let mut png = Vec::new();
        image::codecs::png::PngEncoder::new(&mut png)
            .write_image(clear.as_raw(), 8, 8, image::ExtendedColorType::Rgba8)
            .unwrap();

        let jpeg = reencode("clear.jpg", &png, &"image/jpeg".into(), 0.99).unwrap();
        let decoded = image::load_from_memory(&jpeg).unwrap().into_rgb8();
        assert!(decoded.pixels().all(|px| px.0.iter().all(|&c| c < 8)));
    }

    #[test]
    fn test_reencode_gif_falls_back_to_png_bytes() {
        let out = reencode("a.gif", &png_bytes(4, 4), &"image/gif".into(), 0.5).unwrap();
        assert_eq!(crate::media::detect_format(&out).unwrap().as_str(), "image/png");
    }

    #[test]
    fn test_reencode_garbage_names_file() {
        let err = reencode("broken.png", b"not an image", &"image/png".into(), 0.7).unwrap_err();
        match err {
            CompressError::Decode { name, .. } => assert_eq!(name, "broken.png"),
            other => panic!("expected decode error, got {other:?}"),
        }
    }

    #[test]
    fn test_reencode_all_is_all_or_nothing() {
        let good = PreviewItem::from(CandidateFile::new("ok.png", "image/png", png_bytes(4, 4)));
        let bad = PreviewItem::from(CandidateFile::new("bad.png", "image/png", vec![1, 2, 3]));

        assert!(reencode_all(&[good.clone(), bad], 0.7).is_err());

        let out = reencode_all(&[good.clone(), good], 0.7).unwrap();
        assert_eq!(out.len(), 2);
        assert!(out.iter().all(|item| item.name == "ok.png"));
    }
}
