use std::path::PathBuf;
use thiserror::Error;

/// A specialized `Result` type for fatal comparer operations.
pub type ComparerResult<T> = Result<T, ComparerError>;

/// Errors that stop the whole run before or at the start of a batch.
#[derive(Debug, Error)]
pub enum ComparerError {
    #[error(transparent)]
    Argument(#[from] ArgumentError),

    #[error("Failed to load reference image {path:?}: {source}")]
    ReferenceImage {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("Failed to read comparison folder {path:?}: {source}")]
    ComparisonFolder {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Missing or malformed command line input.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ArgumentError {
    #[error("Invalid rectangle '{value}': {reason}. Expected format X:Y:W:H, e.g. 10:20:40:50")]
    InvalidRectangle { value: String, reason: String },

    #[error("Invalid match threshold '{value}': {reason}")]
    InvalidThreshold { value: String, reason: String },

    #[error("Missing argument. You need to specify Output-Folder when a match threshold is set.")]
    MissingOutputFolder,
}

/// A candidate file that could not be read or decoded as an image.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("Failed to read {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Not a supported image {path:?}: {source}")]
    Image {
        path: PathBuf,
        source: image::ImageError,
    },
}

/// A region that cannot be compared for a given pair of images.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RegionError {
    #[error(
        "Region [{x},{y} -> {end_x},{end_y}] exceeds the {image} image bounds ({width}x{height})"
    )]
    OutOfBounds {
        image: &'static str,
        x: u32,
        y: u32,
        end_x: u32,
        end_y: u32,
        width: u32,
        height: u32,
    },

    #[error("Region [{x},{y} -> {end_x},{end_y}] contains no pixels")]
    Empty { x: u32, y: u32, end_x: u32, end_y: u32 },
}

/// A move or copy into the output folder that did not happen.
#[derive(Debug, Error)]
pub enum RelocateError {
    #[error("No output folder configured for a matched file")]
    MissingOutputFolder,

    #[error("Destination {path:?} already exists")]
    DestinationExists { path: PathBuf },

    #[error("Failed to {action} {from:?} to {to:?}: {source}")]
    Io {
        action: &'static str,
        from: PathBuf,
        to: PathBuf,
        source: std::io::Error,
    },
}

impl ComparerError {
    /// Process exit code for this error: 2 for bad input, 1 for runtime failures.
    pub fn exit_code(&self) -> i32 {
        match self {
            ComparerError::Argument(_) => 2,
            ComparerError::ReferenceImage { .. } | ComparerError::ComparisonFolder { .. } => 1,
        }
    }
}
