use std::path::PathBuf;

use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Decode error: {0}")]
    Decode(#[from] cardfit_core::decode::DecodeError),

    #[error("Encode error: {0}")]
    Encode(#[from] cardfit_core::encode::EncodeError),

    #[error("Normalize error: {0}")]
    Normalize(#[from] cardfit_core::NormalizeError),

    #[error("Config file error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Input does not exist: {}", path.display())]
    MissingInput { path: PathBuf },

    #[error("{}: {source}", path.display())]
    Card {
        path: PathBuf,
        #[source]
        source: Box<AppError>,
    },

    #[error("{failed} of {total} cards failed")]
    BatchFailed { failed: usize, total: usize },
}

impl AppError {
    /// Attach the card's path to an error from processing it.
    pub fn for_card(path: impl Into<PathBuf>, source: AppError) -> Self {
        AppError::Card {
            path: path.into(),
            source: Box::new(source),
        }
    }
}
