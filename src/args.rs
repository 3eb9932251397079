use crate::config::Options;
use crate::error::ArgumentError;
use crate::region_match::Rectangle;
use clap::{CommandFactory, Parser};
use std::path::PathBuf;

const AFTER_HELP: &str = "\
EXAMPLES:
    image-comparer -r ref.png -f shots -o matches -m 95
    image-comparer -r ref.png -R 10:20:40:50 -f shots -o matches -m 99.5 -c
    image-comparer -r ref.png -f shots -o matches -O \"Joe - <o><e>\" -m 90";

/// Compare a reference image against a folder of images and move or copy
/// the ones that match.
#[derive(Parser, Debug)]
#[command(
    name = "image-comparer",
    version = env!("APP_VERSION_DISPLAY"),
    long_version = concat!(env!("APP_VERSION_DISPLAY"), " (built ", env!("APP_BUILD_YEAR"), ")"),
    about,
    after_help = AFTER_HELP
)]
pub struct Args {
    /// The reference all the other images are compared to
    #[arg(short = 'r', long = "Reference-Image", value_name = "PATH")]
    pub reference_image: PathBuf,

    /// The rectangular area to use when comparing the images.
    /// Format X:Y:W:H where W and H are the end column and end row (exclusive)
    #[arg(short = 'R', long = "Rectangle-Area", value_name = "X:Y:W:H")]
    pub rectangle_area: Option<Rectangle>,

    /// The folder of images to compare to the reference
    #[arg(short = 'f', long = "Comparison-Folder", value_name = "DIR")]
    pub comparison_folder: PathBuf,

    /// The output folder for all images above the match threshold
    #[arg(short = 'o', long = "Output-Folder", value_name = "DIR")]
    pub output_folder: Option<PathBuf>,

    /// The output filename. Variables: <o> original filename minus extension,
    /// <e> original extension. Example: "Joe - <o><e>"
    #[arg(short = 'O', long = "Output-Filename", value_name = "TEMPLATE")]
    pub output_filename: Option<String>,

    /// Percentage an image must exceed to be considered a match. 0 disables moving/copying
    #[arg(
        short = 'm',
        long = "Match-Threshold",
        visible_alias = "Match-Treshold",
        value_name = "PERCENT",
        default_value = "0",
        value_parser = parse_percent
    )]
    pub match_threshold: f64,

    /// Copy matches instead of moving them
    #[arg(short = 'c', long = "Copy")]
    pub copy: bool,

    /// Enable debug output
    #[arg(long)]
    pub debug: bool,
}

/// Parse a percentage in 0..=100 and return it as a fraction
pub fn parse_percent(value: &str) -> Result<f64, ArgumentError> {
    let invalid = |reason: &str| ArgumentError::InvalidThreshold {
        value: value.to_string(),
        reason: reason.to_string(),
    };

    let percent = value
        .trim()
        .parse::<f64>()
        .map_err(|_| invalid("not a number"))?;
    if !percent.is_finite() || !(0.0..=100.0).contains(&percent) {
        return Err(invalid("must be between 0 and 100"));
    }
    Ok(percent / 100.0)
}

/// Full help text, shown after any argument error
pub fn full_help() -> String {
    Args::command().render_help().to_string()
}

impl Args {
    /// Validate cross-argument rules and build the run configuration
    pub fn into_options(self) -> Result<Options, ArgumentError> {
        let options = Options {
            reference_image: self.reference_image,
            rectangle: self.rectangle_area,
            comparison_folder: self.comparison_folder,
            output_folder: self.output_folder,
            output_filename: self.output_filename,
            match_threshold: self.match_threshold,
            copy: self.copy,
            debug: self.debug,
        };

        if options.relocation_enabled() && options.output_folder.is_none() {
            return Err(ArgumentError::MissingOutputFolder);
        }
        Ok(options)
    }
}
