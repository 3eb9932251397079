//! Region matching: exact pixel comparison of two images over a rectangle
//!
//! Both images are compared as 8-bit RGBA, so an RGB source and an RGBA
//! source with opaque alpha compare equal pixel for pixel.

pub mod matcher;
pub mod region;

#[cfg(test)]
mod tests;

pub use matcher::{compute_match_ratio, resolve_region};
pub use region::Rectangle;
