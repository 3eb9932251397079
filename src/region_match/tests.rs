//! Property checks for region matching over generated images

use crate::region_match::{Rectangle, compute_match_ratio, resolve_region};
use image::{DynamicImage, Rgb, RgbImage, Rgba, RgbaImage};

/// Deterministic pseudo-random pattern so checks cover varied pixel data
fn pattern(width: u32, height: u32, seed: u32) -> RgbaImage {
    RgbaImage::from_fn(width, height, |x, y| {
        let v = (x.wrapping_mul(73) ^ y.wrapping_mul(151) ^ seed.wrapping_mul(2654435761)) % 4;
        Rgba([v as u8 * 60, 0, 255 - v as u8 * 60, 255])
    })
}

#[test]
fn test_self_match_is_one_for_every_region() {
    let img = pattern(12, 9, 3);
    let regions = [
        Rectangle::full_bounds(12, 9),
        Rectangle::new(0, 0, 1, 1),
        Rectangle::new(5, 2, 12, 9),
        Rectangle::new(11, 8, 12, 9),
    ];

    for region in regions {
        let ratio = compute_match_ratio(&img, &img, region).unwrap();
        assert_eq!(ratio, 1.0, "region {region} should match itself");
    }
}

#[test]
fn test_ratio_stays_within_unit_interval() {
    let reference = pattern(10, 10, 1);
    for seed in 2..12 {
        let candidate = pattern(10, 10, seed);
        let region = resolve_region(None, &candidate);
        let ratio = compute_match_ratio(&reference, &candidate, region).unwrap();
        assert!(
            (0.0..=1.0).contains(&ratio),
            "seed {seed} produced ratio {ratio}"
        );
    }
}

#[test]
fn test_rgb_and_opaque_rgba_compare_equal() {
    let rgb = RgbImage::from_fn(5, 5, |x, y| Rgb([x as u8, y as u8, 9]));
    let rgba = RgbaImage::from_fn(5, 5, |x, y| Rgba([x as u8, y as u8, 9, 255]));

    let from_rgb = DynamicImage::ImageRgb8(rgb).to_rgba8();
    let ratio = compute_match_ratio(&from_rgb, &rgba, Rectangle::full_bounds(5, 5)).unwrap();
    assert_eq!(ratio, 1.0);
}

#[test]
fn test_explicit_region_ignores_differences_outside() {
    let reference = pattern(20, 20, 4);
    let mut candidate = pattern(20, 20, 5);
    // Copy the reference into the top-left 10x10 block of the candidate
    for (x, y) in Rectangle::new(0, 0, 10, 10).coordinates() {
        candidate.put_pixel(x, y, *reference.get_pixel(x, y));
    }

    let inside = compute_match_ratio(&reference, &candidate, "0:0:10:10".parse().unwrap()).unwrap();
    assert_eq!(inside, 1.0);

    let whole = compute_match_ratio(&reference, &candidate, Rectangle::full_bounds(20, 20)).unwrap();
    assert!(whole < 1.0);
}
