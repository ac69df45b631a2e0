//! Crop to content and re-pad with a proportional transparent border.
//!
//! Trimming never resamples. The crop is an exact pixel copy and the new
//! border is constant RGBA (0, 0, 0, 0).

use crate::decode::{CardImage, CHANNELS};
use crate::NormalizeError;

use super::BoundingBox;

/// Absorbs float noise such as `30.0 * 0.1 == 3.0000000000000004`.
const FRACTION_EPSILON: f64 = 1e-9;

/// Border size for one axis: `ceil(len * fraction)`.
///
/// # Errors
///
/// * `InvalidConfig` if `fraction` is negative or not finite, or the border
///   does not fit in a `u32`
///
/// # Example
///
/// ```
/// use cardfit_core::transform::proportional_padding;
///
/// assert_eq!(proportional_padding(103, 0.1).unwrap(), 11);
/// assert_eq!(proportional_padding(30, 0.1).unwrap(), 3);
/// assert_eq!(proportional_padding(5, 0.0).unwrap(), 0);
/// ```
pub fn proportional_padding(len: u32, fraction: f64) -> Result<u32, NormalizeError> {
    if !fraction.is_finite() || fraction < 0.0 {
        return Err(NormalizeError::InvalidConfig(format!(
            "padding fraction must be a non-negative number, got {fraction}"
        )));
    }
    if len == 0 || fraction == 0.0 {
        return Ok(0);
    }

    let pad = (len as f64 * fraction - FRACTION_EPSILON).ceil().max(0.0);
    if pad > u32::MAX as f64 {
        return Err(NormalizeError::InvalidConfig(format!(
            "padding fraction {fraction} gives a border wider than {} pixels",
            u32::MAX
        )));
    }
    Ok(pad as u32)
}

/// Width or height after adding `pad` on both sides.
fn padded_len(len: u32, pad: u32) -> Option<u32> {
    pad.checked_mul(2).and_then(|both| len.checked_add(both))
}

/// RGBA buffer length for a `width` x `height` image, if addressable.
fn byte_len(width: u32, height: u32) -> Option<usize> {
    let len = (width as u64)
        .checked_mul(height as u64)?
        .checked_mul(CHANNELS as u64)?;
    usize::try_from(len).ok()
}

/// Copy the pixels inside `bounds` into a new image.
///
/// # Errors
///
/// * `InvalidImage` if the image is empty or not RGBA
/// * `DegenerateBoundingBox` if the box is empty or leaves the image
pub fn crop_to_bounds(image: &CardImage, bounds: &BoundingBox) -> Result<CardImage, NormalizeError> {
    image.validate()?;
    bounds.check_within(image.width, image.height)?;

    let out_width = bounds.width();
    let out_height = bounds.height();
    let src_stride = image.stride();
    let row_len = out_width as usize * CHANNELS;

    let mut output = Vec::with_capacity(row_len * out_height as usize);
    for y in bounds.top..bounds.bottom {
        let start = y as usize * src_stride + bounds.left as usize * CHANNELS;
        output.extend_from_slice(&image.pixels[start..start + row_len]);
    }

    Ok(CardImage::new(out_width, out_height, output))
}

/// Surround the image with a transparent border.
///
/// `pad_x` columns are added on both the left and the right, `pad_y` rows on
/// both the top and the bottom. Content pixels are copied unchanged.
///
/// # Errors
///
/// * `InvalidImage` if the image is empty or not RGBA, or the padded size
///   does not fit in memory addressing
pub fn pad_uniform(image: &CardImage, pad_x: u32, pad_y: u32) -> Result<CardImage, NormalizeError> {
    image.validate()?;

    if pad_x == 0 && pad_y == 0 {
        return Ok(image.clone());
    }

    let dims = padded_len(image.width, pad_x)
        .zip(padded_len(image.height, pad_y))
        .filter(|&(w, h)| byte_len(w, h).is_some());
    let Some((out_width, out_height)) = dims else {
        return Err(NormalizeError::InvalidImage {
            reason: format!(
                "padding {}x{} by ({pad_x}, {pad_y}) per side overflows the image size",
                image.width, image.height
            ),
        });
    };
    let mut output = CardImage::transparent(out_width, out_height);

    let src_stride = image.stride();
    let dst_stride = output.stride();
    // Copy per row using slice copies
    for row in 0..image.height as usize {
        let src = &image.pixels[row * src_stride..(row + 1) * src_stride];
        let dst_offset = (row + pad_y as usize) * dst_stride + pad_x as usize * CHANNELS;
        output.pixels[dst_offset..dst_offset + src_stride].copy_from_slice(src);
    }

    Ok(output)
}

/// Crop to `bounds`, then pad each axis by `ceil(cropped_len * fraction)`.
///
/// Output height is `h + 2 * ceil(h * fraction)` and output width is
/// `w + 2 * ceil(w * fraction)`, where `h` and `w` are the box dimensions.
///
/// # Example
///
/// ```ignore
/// let bounds = find_content_bounds(&card, 1)?;
/// let trimmed = trim_to_content(&card, &bounds, 0.1)?;
/// ```
pub fn trim_to_content(
    image: &CardImage,
    bounds: &BoundingBox,
    fraction: f64,
) -> Result<CardImage, NormalizeError> {
    let cropped = crop_to_bounds(image, bounds)?;
    let pad_y = proportional_padding(cropped.height, fraction)?;
    let pad_x = proportional_padding(cropped.width, fraction)?;
    pad_uniform(&cropped, pad_x, pad_y)
}


// ============================================================================
// Property-Based Tests
// ============================================================================
