//! Region match ratio
//!
//! Exact per-pixel comparison of two images over a rectangle

use super::region::Rectangle;
use crate::error::RegionError;
use image::RgbaImage;

/// Pick the comparison region for a candidate.
///
/// Without an explicit rectangle the candidate's full bounds are used, and the
/// reference is compared over those same coordinates.
pub fn resolve_region(explicit: Option<Rectangle>, candidate: &RgbaImage) -> Rectangle {
    explicit.unwrap_or_else(|| Rectangle::full_bounds(candidate.width(), candidate.height()))
}

/// Fraction of pixels in `region` that are exactly equal (all four channels)
/// in `reference` and `candidate`.
///
/// # Returns
/// A ratio in `[0.0, 1.0]`, or a `RegionError` when the region is empty or
/// reaches outside either image.
pub fn compute_match_ratio(
    reference: &RgbaImage,
    candidate: &RgbaImage,
    region: Rectangle,
) -> Result<f64, RegionError> {
    if region.is_empty() {
        return Err(RegionError::Empty {
            x: region.x,
            y: region.y,
            end_x: region.end_x,
            end_y: region.end_y,
        });
    }
    region.check_within("reference", reference.width(), reference.height())?;
    region.check_within("candidate", candidate.width(), candidate.height())?;

    let (matches, total) = region
        .coordinates()
        .fold((0_u64, 0_u64), |(matches, total), (x, y)| {
            let same = reference.get_pixel(x, y) == candidate.get_pixel(x, y);
            (matches + same as u64, total + 1)
        });

    log::debug!("Region {}: {}/{} pixels equal", region, matches, total);

    Ok(matches as f64 / total as f64)
}
