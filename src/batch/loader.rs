//! Load pass: list the comparison folder and decode every candidate up front

use crate::error::{ComparerError, ComparerResult, DecodeError};
use image::RgbaImage;
use std::fs;
use std::path::{Path, PathBuf};

/// A decoded candidate image and the file it came from
#[derive(Debug, Clone)]
pub struct Candidate {
    pub path: PathBuf,
    pub image: RgbaImage,
}

impl Candidate {
    /// File name without the folder, for display and templating
    pub fn file_name(&self) -> String {
        display_name(&self.path)
    }
}

/// Result of the load pass over a comparison folder
#[derive(Debug, Default)]
pub struct LoadedCandidates {
    pub candidates: Vec<Candidate>,
    pub skipped: Vec<(PathBuf, DecodeError)>,
}

pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Decode the reference image as 8-bit RGBA
pub fn load_reference(path: &Path) -> ComparerResult<RgbaImage> {
    let image = image::open(path).map_err(|source| ComparerError::ReferenceImage {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!(
        "Reference image {} loaded ({}x{})",
        path.display(),
        image.width(),
        image.height()
    );
    Ok(image.to_rgba8())
}

/// Regular files directly inside `folder`, sorted by path.
///
/// Sub-directories are not descended into.
pub fn list_candidate_files(folder: &Path) -> ComparerResult<Vec<PathBuf>> {
    let folder_error = |source: std::io::Error| ComparerError::ComparisonFolder {
        path: folder.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in fs::read_dir(folder).map_err(folder_error)? {
        let entry = entry.map_err(folder_error)?;
        let path = entry.path();
        if path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Read a file fully into memory and decode it, guessing the format from its content
pub fn decode_candidate(path: &Path) -> Result<Candidate, DecodeError> {
    let bytes = fs::read(path).map_err(|source| DecodeError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let image = image::load_from_memory(&bytes).map_err(|source| DecodeError::Image {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(Candidate {
        path: path.to_path_buf(),
        image: image.to_rgba8(),
    })
}

/// Decode every file of the comparison folder. Undecodable files are logged
/// and collected in `skipped`; they never abort the pass.
pub fn load_candidates(folder: &Path) -> ComparerResult<LoadedCandidates> {
    let mut loaded = LoadedCandidates::default();

    for path in list_candidate_files(folder)? {
        match decode_candidate(&path) {
            Ok(candidate) => {
                log::info!("File found: {}", candidate.file_name());
                loaded.candidates.push(candidate);
            }
            Err(e) => {
                log::warn!("Ignoring: {} ({})", display_name(&path), e);
                loaded.skipped.push((path, e));
            }
        }
    }

    log::debug!(
        "Load pass: {} candidates decoded, {} ignored",
        loaded.candidates.len(),
        loaded.skipped.len()
    );
    Ok(loaded)
}
