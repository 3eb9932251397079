//! Batch driver: compare every candidate to the reference and relocate matches

use super::loader::{self, Candidate};
use super::relocate::{apply_template, relocate};
use crate::config::Options;
use crate::error::{ComparerResult, DecodeError, RegionError, RelocateError};
use crate::region_match::{compute_match_ratio, resolve_region};
use image::RgbaImage;
use std::path::PathBuf;

/// Fixed-width separator printed before each candidate report
pub const DIVIDER_WIDTH: usize = 40;

/// Match ratio computed for one candidate
#[derive(Debug, Clone, PartialEq)]
pub struct MatchResult {
    pub file_name: String,
    /// Fraction of equal pixels, 0.0 to 1.0
    pub match_ratio: f64,
}

impl MatchResult {
    pub fn match_percent(&self) -> f64 {
        self.match_ratio * 100.0
    }
}

/// What happened to an evaluated candidate after the threshold decision
#[derive(Debug)]
pub enum Relocation {
    /// Below the threshold, or relocation disabled
    NotMatched,
    Relocated(PathBuf),
    Failed(RelocateError),
}

#[derive(Debug)]
pub enum CandidateOutcome {
    /// Could not be decoded during the load pass
    Skipped {
        file_name: String,
        error: DecodeError,
    },
    /// Decoded, but the comparison region does not fit
    RegionFailed {
        file_name: String,
        error: RegionError,
    },
    Evaluated {
        result: MatchResult,
        relocation: Relocation,
    },
}

impl CandidateOutcome {
    pub fn file_name(&self) -> &str {
        match self {
            CandidateOutcome::Skipped { file_name, .. }
            | CandidateOutcome::RegionFailed { file_name, .. } => file_name,
            CandidateOutcome::Evaluated { result, .. } => &result.file_name,
        }
    }
}

/// Per-candidate outcomes of one run, skipped files first, then evaluations
/// in listing order
#[derive(Debug, Default)]
pub struct BatchReport {
    pub outcomes: Vec<CandidateOutcome>,
}

impl BatchReport {
    pub fn evaluated(&self) -> impl Iterator<Item = &MatchResult> {
        self.outcomes.iter().filter_map(|outcome| match outcome {
            CandidateOutcome::Evaluated { result, .. } => Some(result),
            _ => None,
        })
    }

    pub fn evaluated_count(&self) -> usize {
        self.evaluated().count()
    }

    pub fn relocated_count(&self) -> usize {
        self.count(|outcome| {
            matches!(
                outcome,
                CandidateOutcome::Evaluated {
                    relocation: Relocation::Relocated(_),
                    ..
                }
            )
        })
    }

    pub fn skipped_count(&self) -> usize {
        self.count(|outcome| matches!(outcome, CandidateOutcome::Skipped { .. }))
    }

    /// Region failures plus failed moves/copies
    pub fn failed_count(&self) -> usize {
        self.count(|outcome| {
            matches!(
                outcome,
                CandidateOutcome::RegionFailed { .. }
                    | CandidateOutcome::Evaluated {
                        relocation: Relocation::Failed(_),
                        ..
                    }
            )
        })
    }

    pub fn find(&self, file_name: &str) -> Option<&CandidateOutcome> {
        self.outcomes
            .iter()
            .find(|outcome| outcome.file_name() == file_name)
    }

    fn count(&self, predicate: impl Fn(&CandidateOutcome) -> bool) -> usize {
        self.outcomes.iter().filter(|&outcome| predicate(outcome)).count()
    }

    /// One-line summary for the end of a run
    pub fn summary(&self) -> String {
        format!(
            "{} compared, {} relocated, {} ignored, {} failed",
            self.evaluated_count(),
            self.relocated_count(),
            self.skipped_count(),
            self.failed_count()
        )
    }
}

/// Runs one comparison batch for a fixed set of options
pub struct BatchDriver<'a> {
    options: &'a Options,
    reference: RgbaImage,
}

impl<'a> BatchDriver<'a> {
    /// Load the reference image. Fails when it cannot be decoded.
    pub fn new(options: &'a Options) -> ComparerResult<Self> {
        let reference = loader::load_reference(&options.reference_image)?;
        Ok(Self::with_reference(options, reference))
    }

    pub fn with_reference(options: &'a Options, reference: RgbaImage) -> Self {
        Self { options, reference }
    }

    /// Decode every candidate, then compare them one by one.
    ///
    /// Only an unreadable comparison folder is fatal. Decode, region and
    /// relocation failures are recorded per candidate.
    pub fn run(&self) -> ComparerResult<BatchReport> {
        let loaded = loader::load_candidates(&self.options.comparison_folder)?;
        let mut report = BatchReport::default();

        for (path, error) in loaded.skipped {
            report.outcomes.push(CandidateOutcome::Skipped {
                file_name: loader::display_name(&path),
                error,
            });
        }

        for candidate in &loaded.candidates {
            report.outcomes.push(self.evaluate(candidate));
        }

        Ok(report)
    }

    /// Compare one candidate, print its result and relocate it on a match
    pub fn evaluate(&self, candidate: &Candidate) -> CandidateOutcome {
        let file_name = candidate.file_name();
        let region = resolve_region(self.options.rectangle, &candidate.image);

        println!("{}", "-".repeat(DIVIDER_WIDTH));
        let match_ratio = match compute_match_ratio(&self.reference, &candidate.image, region) {
            Ok(ratio) => ratio,
            Err(error) => {
                println!("Image: {}", file_name);
                log::error!("❌ Cannot compare {}: {}", file_name, error);
                return CandidateOutcome::RegionFailed { file_name, error };
            }
        };

        let result = MatchResult {
            file_name,
            match_ratio,
        };
        println!("Image: {}", result.file_name);
        println!("Match %: {}", result.match_percent());

        let relocation = if self.options.is_match(match_ratio) {
            self.relocate_match(candidate)
        } else {
            Relocation::NotMatched
        };

        CandidateOutcome::Evaluated { result, relocation }
    }

    fn relocate_match(&self, candidate: &Candidate) -> Relocation {
        let Some(output_folder) = self.options.output_folder.as_deref() else {
            let error = RelocateError::MissingOutputFolder;
            log::error!("❌ {}: {}", candidate.file_name(), error);
            return Relocation::Failed(error);
        };

        println!(
            "✅ Match found! Image is being {} to output folder.",
            self.options.action_name()
        );
        let output_name = apply_template(self.options.output_filename.as_deref(), &candidate.path);

        match relocate(&candidate.path, output_folder, &output_name, self.options.copy) {
            Ok(destination) => Relocation::Relocated(destination),
            Err(e) => {
                log::error!("❌ Something went wrong when relocating the file: {}", e);
                Relocation::Failed(e)
            }
        }
    }
}
