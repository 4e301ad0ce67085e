use std::io;

use thiserror::Error;

use crate::core::CalcError;

/// Top-level failures for the command-line entry points.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Calculation(#[from] CalcError),
}
