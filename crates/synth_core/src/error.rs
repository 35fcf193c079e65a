//! Error types for the synthetic graph generator.
//!
//! This module provides:
//! - `ConfigError`: Errors from configuration validation
//! - `OutputError`: Errors from shard-file creation and writing
//! - `GeneratorError`: Top-level error returned by a generation run

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Configuration validation errors.
///
/// These errors occur before any file I/O, when a [`crate::config::GeneratorConfig`]
/// is built or a generator is constructed from one.
///
/// # Variants
/// - `InvalidUserSplit`: `nusers` does not exceed `nvalidation`
/// - `InvalidShardCount`: zero shard file pairs requested
/// - `InvalidDimension`: zero-length latent vectors requested
/// - `InvalidParameter`: a statistical parameter is out of range
///
/// # Examples
/// ```
/// use synth_core::error::ConfigError;
///
/// let err = ConfigError::InvalidUserSplit { nusers: 2, nvalidation: 2 };
/// assert!(format!("{}", err).contains("nusers"));
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// User count must strictly exceed the per-item validation count,
    /// otherwise the degree distribution has no ranks to sample from.
    #[error("Invalid user split: nusers = {nusers} must exceed nvalidation = {nvalidation}")]
    InvalidUserSplit {
        /// Configured user count.
        nusers: u64,
        /// Configured per-item validation edge count.
        nvalidation: u64,
    },

    /// Shard file count outside valid range (must be at least 1).
    #[error("Invalid shard file count {0}: must be at least 1")]
    InvalidShardCount(u64),

    /// Latent dimension outside valid range (must be at least 1).
    #[error("Invalid latent dimension {0}: must be at least 1")]
    InvalidDimension(usize),

    /// Invalid parameter value with name and description.
    #[error("Invalid parameter '{name}': {value}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Description of the invalid value.
        value: String,
    },
}

/// Shard-output errors.
///
/// Directory creation, shard-file creation, and stream write/flush
/// failures are all fatal: a run that silently loses one shard's records
/// is not reproducible output.
#[derive(Error, Debug)]
pub enum OutputError {
    /// The output directory could not be created.
    #[error("Failed to create output directory '{}'", .path.display())]
    CreateDir {
        /// Directory that could not be created.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// A shard file could not be created.
    #[error("Failed to create shard file '{}'", .path.display())]
    CreateShard {
        /// Shard file that could not be created.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// A record could not be written to its shard stream.
    #[error("Failed to write rating record: {0}")]
    Write(#[from] io::Error),

    /// A shard stream could not be flushed on completion.
    #[error("Failed to flush shard files: {0}")]
    Flush(#[source] io::Error),
}

/// Top-level error type returned by [`crate::generator::Generator::run`].
#[derive(Error, Debug)]
pub enum GeneratorError {
    /// Configuration rejected before any generation work.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Shard output failed.
    #[error("Output error: {0}")]
    Output(#[from] OutputError),
}
