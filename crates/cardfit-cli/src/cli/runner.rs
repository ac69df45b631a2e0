use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use cardfit_core::decode::{decode_png, has_alpha};
use cardfit_core::encode::encode_card_png;
use cardfit_core::{needs_normalization, normalize_with_report, AlphaPolicy, NormalizeConfig};

use super::args::NormalizeArgs;
use super::errors::AppError;

/// What happened to one card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Run through the pipeline and re-encoded as RGBA.
    Normalized { width: u32, height: u32 },
    /// Already correctly shaped; source bytes copied through.
    Copied,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Normalized { width, height } => write!(f, "normalized to {width}x{height}"),
            Outcome::Copied => write!(f, "copied unchanged"),
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub normalized: usize,
    pub copied: usize,
    pub failed: usize,
}

impl Summary {
    pub fn total(&self) -> usize {
        self.normalized + self.copied + self.failed
    }

    fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Normalized { .. } => self.normalized += 1,
            Outcome::Copied => self.copied += 1,
        }
    }
}

/// Normalize a single card file and write the result.
///
/// Nothing is written unless every stage succeeds.
pub fn process_file(
    input: &Path,
    output: &Path,
    config: &NormalizeConfig,
    policy: AlphaPolicy,
) -> Result<Outcome, AppError> {
    let bytes = fs::read(input)?;
    let card = decode_png(&bytes, policy)?;
    debug!("Decoded {:?}: {}x{}", input, card.width, card.height);

    // Only sources that already carry alpha may be copied through
    if !needs_normalization(&card, config) && has_alpha(&bytes)? {
        debug!("No need to adjust {:?}, copying", input);
        fs::write(output, &bytes)?;
        return Ok(Outcome::Copied);
    }

    let report = normalize_with_report(&card, config)?;
    let png = encode_card_png(&report.image)?;
    fs::write(output, png)?;

    Ok(Outcome::Normalized {
        width: report.image.width,
        height: report.image.height,
    })
}

/// PNG files directly inside `dir`, sorted by name.
pub fn card_files(dir: &Path) -> Result<Vec<PathBuf>, AppError> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        let is_png = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("png"));
        if path.is_file() && is_png {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Normalize every card in `input_dir` into `output_dir`.
///
/// A failing card is logged and counted; the rest of the batch continues.
pub fn process_dir(
    input_dir: &Path,
    output_dir: &Path,
    config: &NormalizeConfig,
    policy: AlphaPolicy,
) -> Result<Summary, AppError> {
    fs::create_dir_all(output_dir)?;

    info!("Starting batch processing from directory: {:?}", input_dir);
    info!("Output directory: {:?}", output_dir);

    let mut summary = Summary::default();
    for path in card_files(input_dir)? {
        let Some(name) = path.file_name() else {
            continue;
        };
        let output = output_dir.join(name);

        match process_file(&path, &output, config, policy) {
            Ok(outcome) => {
                info!("{:?}: {}", name, outcome);
                summary.record(outcome);
            }
            Err(e) => {
                warn!("{}", AppError::for_card(&path, e));
                summary.failed += 1;
            }
        }
    }

    Ok(summary)
}

pub fn run_normalize(args: &NormalizeArgs) -> Result<Summary, AppError> {
    let config = args.resolve_config()?;
    let policy = args.alpha_policy();

    if !args.input.exists() {
        return Err(AppError::MissingInput {
            path: args.input.clone(),
        });
    }

    info!(
        "Target ratio {}, trim={}, padding={}, slack={}",
        config.target_ratio, config.trim, config.trim_padding_fraction, config.bbox_slack
    );

    let summary = if args.input.is_dir() {
        process_dir(&args.input, &args.output, &config, policy)?
    } else {
        let output = if args.output.is_dir() {
            match args.input.file_name() {
                Some(name) => args.output.join(name),
                None => args.output.clone(),
            }
        } else {
            args.output.clone()
        };

        let outcome = process_file(&args.input, &output, &config, policy)
            .map_err(|e| AppError::for_card(&args.input, e))?;
        info!("{:?}: {}", args.input, outcome);

        let mut summary = Summary::default();
        summary.record(outcome);
        summary
    };

    info!(
        "Done: {} normalized, {} copied, {} failed",
        summary.normalized, summary.copied, summary.failed
    );

    if summary.failed > 0 {
        return Err(AppError::BatchFailed {
            failed: summary.failed,
            total: summary.total(),
        });
    }
    Ok(summary)
}
