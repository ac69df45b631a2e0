//! PNG decoding into RGBA card images.

use std::io::Cursor;

use image::{DynamicImage, ImageDecoder, ImageError, ImageReader};

use super::{AlphaPolicy, CardImage, DecodeError};

/// Decode a PNG (or any enabled format) from bytes into RGBA8.
///
/// # Arguments
///
/// * `bytes` - Raw image file bytes
/// * `policy` - What to do when the source has no alpha channel
///
/// # Errors
///
/// Returns `DecodeError::InvalidFormat` if the format is not recognized,
/// `DecodeError::CorruptedFile` if decoding fails, and
/// `DecodeError::MissingAlpha` for an opaque source under
/// `AlphaPolicy::Require`.
pub fn decode_png(bytes: &[u8], policy: AlphaPolicy) -> Result<CardImage, DecodeError> {
    let img = read_image(bytes)?;

    if !img.color().has_alpha() && policy == AlphaPolicy::Require {
        return Err(DecodeError::MissingAlpha);
    }

    // into_rgba8 fills alpha with 255 for opaque sources
    Ok(CardImage::from_rgba_image(img.into_rgba8()))
}

/// Report whether the encoded image carries an alpha channel.
///
/// Only the header is inspected; pixel data is not decoded.
pub fn has_alpha(bytes: &[u8]) -> Result<bool, DecodeError> {
    let decoder = reader(bytes)?
        .into_decoder()
        .map_err(map_image_error)?;
    Ok(decoder.color_type().has_alpha())
}

fn reader(bytes: &[u8]) -> Result<ImageReader<Cursor<&[u8]>>, DecodeError> {
    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    if reader.format().is_none() {
        return Err(DecodeError::InvalidFormat);
    }
    Ok(reader)
}

fn read_image(bytes: &[u8]) -> Result<DynamicImage, DecodeError> {
    reader(bytes)?.decode().map_err(map_image_error)
}

fn map_image_error(err: ImageError) -> DecodeError {
    match err {
        ImageError::Unsupported(_) => DecodeError::InvalidFormat,
        other => DecodeError::CorruptedFile(other.to_string()),
    }
}
