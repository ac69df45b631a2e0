//! Content bounding box detection.
//!
//! Content is any pixel with alpha > 0. Color channels are ignored.
//!
//! # Coordinate System
//!
//! Boxes are half-open: rows `top..bottom`, columns `left..right`.
//! Origin is the top-left corner.

use serde::{Deserialize, Serialize};

use crate::decode::{CardImage, CHANNELS};
use crate::NormalizeError;

/// Axis-aligned pixel rectangle, half-open on bottom and right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundingBox {
    /// First row inside the box.
    pub top: u32,
    /// One past the last row inside the box.
    pub bottom: u32,
    /// First column inside the box.
    pub left: u32,
    /// One past the last column inside the box.
    pub right: u32,
}

impl BoundingBox {
    pub fn new(top: u32, bottom: u32, left: u32, right: u32) -> Self {
        Self {
            top,
            bottom,
            left,
            right,
        }
    }

    /// Number of rows covered (0 for an empty box).
    pub fn height(&self) -> u32 {
        self.bottom.saturating_sub(self.top)
    }

    /// Number of columns covered (0 for an empty box).
    pub fn width(&self) -> u32 {
        self.right.saturating_sub(self.left)
    }

    pub fn contains(&self, x: u32, y: u32) -> bool {
        (self.left..self.right).contains(&x) && (self.top..self.bottom).contains(&y)
    }

    pub fn is_degenerate(&self) -> bool {
        self.bottom <= self.top || self.right <= self.left
    }

    /// Grow by `slack` pixels on every side, clamped to a `width` x `height` canvas.
    pub fn expand(&self, slack: u32, width: u32, height: u32) -> Self {
        Self {
            top: self.top.saturating_sub(slack).min(height),
            bottom: self.bottom.saturating_add(slack).min(height),
            left: self.left.saturating_sub(slack).min(width),
            right: self.right.saturating_add(slack).min(width),
        }
    }

    /// Ensure the box is non-empty and lies within a `width` x `height` image.
    pub fn check_within(&self, width: u32, height: u32) -> Result<(), NormalizeError> {
        if self.is_degenerate() || self.bottom > height || self.right > width {
            return Err(NormalizeError::DegenerateBoundingBox {
                top: self.top,
                bottom: self.bottom,
                left: self.left,
                right: self.right,
            });
        }
        Ok(())
    }
}

/// Find the smallest box containing every pixel with alpha > 0.
///
/// No slack is applied.
///
/// # Errors
///
/// * `InvalidImage` if the image is empty or not RGBA
/// * `NoVisibleContent` if every pixel is fully transparent
pub fn find_tight_bounds(image: &CardImage) -> Result<BoundingBox, NormalizeError> {
    image.validate()?;

    let stride = image.stride();
    let height = image.height as usize;
    let width = image.width as usize;

    let row_visible = |y: &usize| {
        image.pixels[y * stride..(y + 1) * stride]
            .chunks_exact(CHANNELS)
            .any(|px| px[3] > 0)
    };

    let top = (0..height)
        .find(row_visible)
        .ok_or(NormalizeError::NoVisibleContent)?;
    let bottom = (top..height)
        .rev()
        .find(row_visible)
        .ok_or(NormalizeError::NoVisibleContent)?
        + 1;

    // Only rows inside top..bottom can hold content
    let col_visible =
        |x: &usize| (top..bottom).any(|y| image.pixels[y * stride + x * CHANNELS + 3] > 0);

    let left = (0..width)
        .find(col_visible)
        .ok_or(NormalizeError::NoVisibleContent)?;
    let right = (left..width)
        .rev()
        .find(col_visible)
        .ok_or(NormalizeError::NoVisibleContent)?
        + 1;

    Ok(BoundingBox::new(
        top as u32,
        bottom as u32,
        left as u32,
        right as u32,
    ))
}

/// Find the content box and grow it by `slack` pixels on every side.
///
/// The slack keeps anti-aliased edge pixels from being clipped. The result
/// is clamped to the image bounds.
///
/// # Errors
///
/// * `InvalidImage` if the image is empty or not RGBA
/// * `NoVisibleContent` if every pixel is fully transparent
/// * `DegenerateBoundingBox` if the clamped box is empty
pub fn find_content_bounds(image: &CardImage, slack: u32) -> Result<BoundingBox, NormalizeError> {
    let bounds = find_tight_bounds(image)?.expand(slack, image.width, image.height);
    bounds.check_within(image.width, image.height)?;
    Ok(bounds)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Transparent canvas with opaque pixels in the given inclusive rectangle.
    fn card_with_content(
        width: u32,
        height: u32,
        rows: std::ops::RangeInclusive<u32>,
        cols: std::ops::RangeInclusive<u32>,
    ) -> CardImage {
        let mut img = CardImage::transparent(width, height);
        let stride = img.stride();
        for y in rows {
            for x in cols.clone() {
                let idx = y as usize * stride + x as usize * CHANNELS;
                img.pixels[idx..idx + CHANNELS].copy_from_slice(&[200, 50, 50, 255]);
            }
        }
        img
    }

    #[test]
    fn test_tight_bounds_rectangle() {
        let img = card_with_content(100, 200, 50..=150, 20..=80);
        let bounds = find_tight_bounds(&img).unwrap();
        assert_eq!(bounds, BoundingBox::new(50, 151, 20, 81));
        assert_eq!(bounds.height(), 101);
        assert_eq!(bounds.width(), 61);
    }

    #[test]
    fn test_content_bounds_with_slack() {
        // 200 rows x 100 columns, content rows 50-150 and columns 20-80
        let img = card_with_content(100, 200, 50..=150, 20..=80);
        let bounds = find_content_bounds(&img, 1).unwrap();
        assert_eq!(bounds, BoundingBox::new(49, 152, 19, 82));
    }

    #[test]
    fn test_slack_clamped_at_edges() {
        let img = card_with_content(10, 10, 0..=9, 0..=9);
        let bounds = find_content_bounds(&img, 1).unwrap();
        assert_eq!(bounds, BoundingBox::new(0, 10, 0, 10));
    }

    #[test]
    fn test_large_slack_clamped() {
        let img = card_with_content(10, 8, 3..=4, 3..=4);
        let bounds = find_content_bounds(&img, 100).unwrap();
        assert_eq!(bounds, BoundingBox::new(0, 8, 0, 10));
    }

    #[test]
    fn test_zero_slack_matches_tight() {
        let img = card_with_content(30, 30, 5..=7, 11..=12);
        assert_eq!(
            find_content_bounds(&img, 0).unwrap(),
            find_tight_bounds(&img).unwrap()
        );
    }

    #[test]
    fn test_single_pixel() {
        let img = card_with_content(5, 5, 2..=2, 3..=3);
        assert_eq!(
            find_tight_bounds(&img).unwrap(),
            BoundingBox::new(2, 3, 3, 4)
        );
    }

    #[test]
    fn test_faint_alpha_counts_as_content() {
        let mut img = CardImage::transparent(4, 4);
        // (1, 2) with alpha 1
        let idx = 2 * img.stride() + CHANNELS + 3;
        img.pixels[idx] = 1;
        assert_eq!(
            find_tight_bounds(&img).unwrap(),
            BoundingBox::new(2, 3, 1, 2)
        );
    }

    #[test]
    fn test_color_without_alpha_is_not_content() {
        let mut img = CardImage::transparent(4, 4);
        for px in img.pixels.chunks_exact_mut(CHANNELS) {
            px[0] = 255;
            px[1] = 255;
            px[2] = 255;
        }
        assert_eq!(
            find_tight_bounds(&img),
            Err(NormalizeError::NoVisibleContent)
        );
    }

    #[test]
    fn test_fully_transparent_is_error() {
        let img = CardImage::transparent(20, 20);
        assert_eq!(
            find_content_bounds(&img, 1),
            Err(NormalizeError::NoVisibleContent)
        );
    }

    #[test]
    fn test_invalid_image_rejected() {
        let img = CardImage {
            width: 2,
            height: 2,
            pixels: vec![255u8; 2 * 2 * 3],
        };
        assert!(matches!(
            find_content_bounds(&img, 1),
            Err(NormalizeError::InvalidImage { .. })
        ));
    }

    #[test]
    fn test_disjoint_blobs() {
        let mut img = card_with_content(40, 40, 2..=3, 2..=3);
        let stride = img.stride();
        let idx = 30 * stride + 35 * CHANNELS;
        img.pixels[idx + 3] = 255;

        assert_eq!(
            find_tight_bounds(&img).unwrap(),
            BoundingBox::new(2, 31, 2, 36)
        );
    }

    #[test]
    fn test_check_within() {
        assert!(BoundingBox::new(0, 5, 0, 5).check_within(5, 5).is_ok());
        assert!(BoundingBox::new(3, 3, 0, 5).check_within(5, 5).is_err());
        assert!(BoundingBox::new(0, 5, 4, 2).check_within(5, 5).is_err());
        assert!(BoundingBox::new(0, 6, 0, 5).check_within(5, 5).is_err());
    }

    #[test]
    fn test_contains() {
        let b = BoundingBox::new(1, 3, 2, 4);
        assert!(b.contains(2, 1));
        assert!(b.contains(3, 2));
        assert!(!b.contains(4, 2));
        assert!(!b.contains(2, 3));
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Strategy for an image size plus a list of visible pixel positions in it.
    fn visible_pixels_strategy() -> impl Strategy<Value = (u32, u32, Vec<(u32, u32)>)> {
        (1u32..=40, 1u32..=40).prop_flat_map(|(w, h)| {
            (
                Just(w),
                Just(h),
                prop::collection::vec((0..w, 0..h), 1..=8),
            )
        })
    }

    fn build(width: u32, height: u32, visible: &[(u32, u32)]) -> CardImage {
        let mut img = CardImage::transparent(width, height);
        let stride = img.stride();
        for &(x, y) in visible {
            img.pixels[y as usize * stride + x as usize * CHANNELS + 3] = 255;
        }
        img
    }

    proptest! {
        /// Property: Every visible pixel lies inside the tight box.
        #[test]
        fn prop_tight_box_contains_all_content(
            (width, height, visible) in visible_pixels_strategy(),
        ) {
            let img = build(width, height, &visible);
            let bounds = find_tight_bounds(&img).unwrap();

            for &(x, y) in &visible {
                prop_assert!(bounds.contains(x, y), "({}, {}) outside {:?}", x, y, bounds);
            }
        }

        /// Property: Each edge of the tight box touches a visible pixel.
        #[test]
        fn prop_tight_box_is_minimal(
            (width, height, visible) in visible_pixels_strategy(),
        ) {
            let img = build(width, height, &visible);
            let bounds = find_tight_bounds(&img).unwrap();

            prop_assert!(visible.iter().any(|&(_, y)| y == bounds.top));
            prop_assert!(visible.iter().any(|&(_, y)| y + 1 == bounds.bottom));
            prop_assert!(visible.iter().any(|&(x, _)| x == bounds.left));
            prop_assert!(visible.iter().any(|&(x, _)| x + 1 == bounds.right));
        }

        /// Property: Slack boxes are valid and contain the tight box.
        #[test]
        fn prop_slack_box_within_image(
            (width, height, visible) in visible_pixels_strategy(),
            slack in 0u32..=5,
        ) {
            let img = build(width, height, &visible);
            let tight = find_tight_bounds(&img).unwrap();
            let bounds = find_content_bounds(&img, slack).unwrap();

            prop_assert!(bounds.top <= tight.top && bounds.left <= tight.left);
            prop_assert!(bounds.bottom >= tight.bottom && bounds.right >= tight.right);
            prop_assert!(bounds.bottom <= height && bounds.right <= width);
            prop_assert!(!bounds.is_degenerate());
        }
    }
}
