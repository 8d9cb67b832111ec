// SPDX-FileCopyrightText: The tagsmith authors
// SPDX-License-Identifier: AGPL-3.0-or-later

use image::{
    DynamicImage, GenericImageView as _, ImageFormat, codecs::jpeg::JpegEncoder,
    imageops::FilterType,
};
use lofty::picture::MimeType;

use crate::{Error, Result};

/// Maximum edge length of an embedded cover image in pixels.
///
/// Tagging software and renderers choke on absurdly large pictures long
/// before any byte limit is reached.
pub const MAX_COVER_DIMENSION: u32 = 10_000;

/// Maximum size in bytes of a picture embedded into an Ogg-family stream.
///
/// The picture is base64-wrapped into a `METADATA_BLOCK_PICTURE` comment on
/// write, and comment values larger than this are rejected by common
/// players.
#[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub const OGG_COVER_MAX_DATA_SIZE: usize = (2.93 * 1024.0 * 1024.0) as usize;

const MIN_JPEG_QUALITY: u8 = 10;
const INITIAL_JPEG_QUALITY: u8 = 100;
// Resampling already discards detail, so start the search lower.
const INITIAL_JPEG_QUALITY_RESIZED: u8 = 85;

/// Shrinks an image until it fits both a dimension and a byte budget.
///
/// Input bytes that already fit the byte budget are returned unchanged,
/// regardless of their dimensions or encoding. Otherwise the image is
/// resampled to fit within `max_dimension` x `max_dimension` (preserving the
/// aspect ratio) and re-encoded as JPEG, lowering the quality step by step
/// until the output fits into `max_data_size`. The byte budget is best
/// effort: if even the minimum quality exceeds it the oversized output is
/// returned instead of an error.
///
/// # Errors
///
/// Fails with [`Error::UnsupportedImageFormat`] if the input bytes cannot be
/// decoded and with [`Error::UnsupportedColorEncoding`] if an input that
/// needs re-compression is neither JPEG nor PNG.
pub fn normalize(image_data: &[u8], max_dimension: u32, max_data_size: usize) -> Result<Vec<u8>> {
    let format = image::guess_format(image_data).map_err(Error::UnsupportedImageFormat)?;
    let image = image::load_from_memory_with_format(image_data, format)
        .map_err(Error::UnsupportedImageFormat)?;

    if image_data.len() <= max_data_size {
        return Ok(image_data.to_vec());
    }

    let image = match format {
        ImageFormat::Jpeg => image,
        // JPEG re-encoding requires discarding the alpha channel.
        ImageFormat::Png => DynamicImage::ImageRgb8(image.to_rgb8()),
        unsupported => {
            return Err(Error::UnsupportedColorEncoding(unsupported));
        }
    };

    let (width, height) = image.dimensions();
    let (image, mut quality) = if width > max_dimension || height > max_dimension {
        log::debug!("Resampling oversized {width}x{height} image to fit {max_dimension} px");
        let resized = image.resize(max_dimension, max_dimension, FilterType::Lanczos3);
        (resized, INITIAL_JPEG_QUALITY_RESIZED)
    } else {
        (image, INITIAL_JPEG_QUALITY)
    };

    let mut encoded = encode_jpeg(&image, quality)?;
    while encoded.len() > max_data_size && quality > MIN_JPEG_QUALITY {
        quality -= 1;
        log::debug!(
            "Re-encoding {len} byte image with quality {quality}",
            len = encoded.len()
        );
        encoded = encode_jpeg(&image, quality)?;
    }
    Ok(encoded)
}

fn encode_jpeg(image: &DynamicImage, quality: u8) -> Result<Vec<u8>> {
    let mut encoded = Vec::new();
    let encoder = JpegEncoder::new_with_quality(&mut encoded, quality);
    image.write_with_encoder(encoder)?;
    Ok(encoded)
}

/// Detects the MIME type of encoded image bytes.
pub(crate) fn sniff_mime_type(image_data: &[u8]) -> Result<MimeType> {
    let format = image::guess_format(image_data).map_err(Error::UnsupportedImageFormat)?;
    let mime_type = match format {
        ImageFormat::Jpeg => MimeType::Jpeg,
        ImageFormat::Png => MimeType::Png,
        ImageFormat::Gif => MimeType::Gif,
        ImageFormat::Bmp => MimeType::Bmp,
        ImageFormat::Tiff => MimeType::Tiff,
        other => MimeType::Unknown(other.to_mime_type().to_owned()),
    };
    Ok(mime_type)
}
