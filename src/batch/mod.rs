//! Batch processing of a comparison folder
//!
//! Candidates are decoded in one pass, compared against the reference one at
//! a time, and relocated when their match ratio is above the threshold.
//! Per-candidate failures are recorded in the report and never stop the batch.

pub mod driver;
pub mod loader;
pub mod relocate;


pub use driver::{BatchDriver, BatchReport, CandidateOutcome, MatchResult, Relocation};
pub use loader::Candidate;
pub use relocate::{apply_template, relocate};
