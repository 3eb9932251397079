pub mod args;
pub mod batch;
pub mod config;
pub mod error;
pub mod region_match;

pub use batch::{BatchDriver, BatchReport};
pub use config::Options;
pub use error::{ComparerError, ComparerResult};
pub use region_match::{Rectangle, compute_match_ratio};

/// Run a full comparison batch with validated options
pub fn run(options: &Options) -> ComparerResult<BatchReport> {
    let driver = BatchDriver::new(options)?;
    driver.run()
}
