//! Error taxonomy for the usage-analysis pipeline
//!
//! Every failure is fatal: nothing in the pipeline catches these, they
//! propagate straight up to `main` and abort the run.

use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while loading, analyzing, or charting usage data
#[derive(Error, Debug)]
pub enum UsageError {
    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path:?}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("cannot compute the mean of an empty group")]
    EmptyGroup,

    #[error("need at least {needed} samples for a sample standard deviation, got {got}")]
    TooFewSamples { needed: usize, got: usize },

    #[error("standard error is zero, the t-statistic is undefined")]
    ZeroStandardError,

    #[error("chart rendering failed: {0}")]
    Render(String),
}

pub type Result<T> = std::result::Result<T, UsageError>;
