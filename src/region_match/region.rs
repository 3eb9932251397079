//! Comparison rectangle parsing and bounds checking

use crate::error::{ArgumentError, RegionError};
use std::fmt;
use std::str::FromStr;

/// Rectangular pixel range used for comparison.
///
/// `end_x` and `end_y` are exclusive end coordinates, not a width and height:
/// the rectangle `10:20:40:50` covers columns 10..40 and rows 20..50.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rectangle {
    pub x: u32,
    pub y: u32,
    pub end_x: u32,
    pub end_y: u32,
}

impl Rectangle {
    pub fn new(x: u32, y: u32, end_x: u32, end_y: u32) -> Self {
        Self { x, y, end_x, end_y }
    }

    /// Rectangle covering a whole image
    pub fn full_bounds(width: u32, height: u32) -> Self {
        Self::new(0, 0, width, height)
    }

    /// Number of pixels covered (0 for inverted or degenerate rectangles)
    pub fn pixel_count(&self) -> u64 {
        let columns = self.end_x.saturating_sub(self.x) as u64;
        let rows = self.end_y.saturating_sub(self.y) as u64;
        columns * rows
    }

    pub fn is_empty(&self) -> bool {
        self.pixel_count() == 0
    }

    /// Check that every coordinate of the rectangle is addressable in an image
    /// of the given dimensions. `image` names the image in the error message.
    pub fn check_within(
        &self,
        image: &'static str,
        width: u32,
        height: u32,
    ) -> Result<(), RegionError> {
        if self.end_x > width || self.end_y > height {
            return Err(RegionError::OutOfBounds {
                image,
                x: self.x,
                y: self.y,
                end_x: self.end_x,
                end_y: self.end_y,
                width,
                height,
            });
        }
        Ok(())
    }

    /// Row-major iterator over every `(x, y)` inside the rectangle
    pub fn coordinates(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        (self.y..self.end_y).flat_map(move |y| (self.x..self.end_x).map(move |x| (x, y)))
    }
}

impl fmt::Display for Rectangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}:{}", self.x, self.y, self.end_x, self.end_y)
    }
}

/// Parse the `X:Y:W:H` command line format
impl FromStr for Rectangle {
    type Err = ArgumentError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: String| ArgumentError::InvalidRectangle {
            value: value.to_string(),
            reason,
        };

        let parts: Vec<&str> = value.split(':').collect();
        if parts.len() != 4 {
            return Err(invalid(format!(
                "expected 4 colon-separated values, found {}",
                parts.len()
            )));
        }

        let mut coords = [0_u32; 4];
        for (slot, part) in coords.iter_mut().zip(&parts) {
            *slot = part
                .trim()
                .parse::<u32>()
                .map_err(|e| invalid(format!("'{}' is not a non-negative integer ({e})", part)))?;
        }

        let [x, y, end_x, end_y] = coords;
        if x >= end_x || y >= end_y {
            return Err(invalid(format!(
                "start must be before end (X < W and Y < H), got X={x} W={end_x} Y={y} H={end_y}"
            )));
        }

        Ok(Self::new(x, y, end_x, end_y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rectangle() {
        let rect: Rectangle = "10:20:40:50".parse().unwrap();
        assert_eq!(rect, Rectangle::new(10, 20, 40, 50));
        assert_eq!(rect.pixel_count(), 30 * 30);
    }

    #[test]
    fn test_parse_rectangle_allows_whitespace() {
        let rect: Rectangle = " 0: 0 :3:2".parse().unwrap();
        assert_eq!(rect, Rectangle::new(0, 0, 3, 2));
    }

    #[test]
    fn test_parse_rectangle_wrong_arity() {
        let err = "1:2:3".parse::<Rectangle>().unwrap_err();
        assert!(matches!(err, ArgumentError::InvalidRectangle { .. }));
        assert!("1:2:3:4:5".parse::<Rectangle>().is_err());
    }

    #[test]
    fn test_parse_rectangle_rejects_negative_and_text() {
        assert!("-1:0:10:10".parse::<Rectangle>().is_err());
        assert!("a:0:10:10".parse::<Rectangle>().is_err());
        assert!("0:0:10:1.5".parse::<Rectangle>().is_err());
    }

    #[test]
    fn test_parse_rectangle_rejects_inverted() {
        assert!("10:0:10:5".parse::<Rectangle>().is_err());
        assert!("0:8:10:5".parse::<Rectangle>().is_err());
    }

    #[test]
    fn test_check_within() {
        let rect = Rectangle::new(0, 0, 10, 10);
        assert!(rect.check_within("reference", 10, 10).is_ok());

        let err = rect.check_within("candidate", 9, 10).unwrap_err();
        assert_eq!(
            err,
            RegionError::OutOfBounds {
                image: "candidate",
                x: 0,
                y: 0,
                end_x: 10,
                end_y: 10,
                width: 9,
                height: 10,
            }
        );
    }

    #[test]
    fn test_coordinates_row_major() {
        let rect = Rectangle::new(1, 1, 3, 3);
        let coords: Vec<_> = rect.coordinates().collect();
        assert_eq!(coords, vec![(1, 1), (2, 1), (1, 2), (2, 2)]);
    }

    #[test]
    fn test_display_round_trips_cli_format() {
        let rect = Rectangle::new(10, 20, 40, 50);
        assert_eq!(rect.to_string(), "10:20:40:50");
    }
}
