//! Command-line driver around `cardfit-core`.
//!
//! - `args` - clap definitions and config resolution
//! - `runner` - single-file and batch normalization
//! - `compare` - directory name comparison
//! - `errors` - CLI error type

pub mod args;
pub mod compare;
pub mod errors;
pub mod runner;

pub use args::{CliArgs, Command};
pub use errors::AppError;

pub fn run(args: CliArgs) -> Result<(), AppError> {
    match args.command {
        Command::Normalize(normalize) => runner::run_normalize(&normalize).map(|_| ()),
        Command::Compare { left, right } => compare::run_compare(&left, &right).map(|_| ()),
    }
}
