//! Run configuration built once from the command line

use crate::region_match::Rectangle;
use std::path::PathBuf;

/// Read-only settings for one comparison run
#[derive(Debug, Clone, PartialEq)]
pub struct Options {
    /// Image every candidate is compared to
    pub reference_image: PathBuf,
    /// Fixed comparison rectangle; `None` compares each candidate's full bounds
    pub rectangle: Option<Rectangle>,
    /// Folder holding the candidate images
    pub comparison_folder: PathBuf,
    /// Destination for matches. Required whenever `match_threshold` is non-zero
    pub output_folder: Option<PathBuf>,
    /// Output filename template with `<o>` and `<e>` tokens
    pub output_filename: Option<String>,
    /// Match ratio a candidate must exceed (0.0 to 1.0). 0.0 disables relocation
    pub match_threshold: f64,
    /// Copy matches instead of moving them
    pub copy: bool,
    /// Debug-level logging
    pub debug: bool,
}

impl Options {
    pub fn new(reference_image: impl Into<PathBuf>, comparison_folder: impl Into<PathBuf>) -> Self {
        Self {
            reference_image: reference_image.into(),
            rectangle: None,
            comparison_folder: comparison_folder.into(),
            output_folder: None,
            output_filename: None,
            match_threshold: 0.0,
            copy: false,
            debug: false,
        }
    }

    /// Whether any candidate can be relocated in this run
    pub fn relocation_enabled(&self) -> bool {
        self.match_threshold != 0.0
    }

    /// Threshold decision: strictly above a non-zero threshold
    pub fn is_match(&self, match_ratio: f64) -> bool {
        self.relocation_enabled() && match_ratio > self.match_threshold
    }

    /// Short description of the relocate action for console output
    pub fn action_name(&self) -> &'static str {
        if self.copy { "copied" } else { "moved" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_threshold(match_threshold: f64) -> Options {
        Options {
            match_threshold,
            ..Options::new("ref.png", "candidates")
        }
    }

    #[test]
    fn test_zero_threshold_never_matches() {
        let options = with_threshold(0.0);
        assert!(!options.relocation_enabled());
        assert!(!options.is_match(1.0));
        assert!(!options.is_match(0.5));
    }

    #[test]
    fn test_threshold_is_strict() {
        let options = with_threshold(0.75);
        assert!(!options.is_match(0.75));
        assert!(options.is_match(0.75 + f64::EPSILON));
        assert!(!options.is_match(0.5));
    }

    #[test]
    fn test_action_name() {
        let mut options = with_threshold(0.5);
        assert_eq!(options.action_name(), "moved");
        options.copy = true;
        assert_eq!(options.action_name(), "copied");
    }
}
