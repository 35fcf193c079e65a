//! Generator configuration.
//!
//! This module provides the configuration type and builder for a synthetic
//! rating-graph run. Every field carries the original tool's default, so
//! `GeneratorConfig::default()` reproduces the reference dataset exactly.

use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// Default output directory.
pub const DEFAULT_OUTPUT_DIR: &str = "synthetic_data";

/// Default number of training/validation shard file pairs.
pub const DEFAULT_NFILES: u64 = 5;

/// Default latent dimension D.
pub const DEFAULT_DIMENSION: usize = 20;

/// Default user count.
pub const DEFAULT_NUSERS: u64 = 1000;

/// Default movie (item) count.
pub const DEFAULT_NMOVIES: u64 = 10_000;

/// Default number of validation edges emitted per movie.
pub const DEFAULT_NVALIDATION: u64 = 2;

/// Default noise standard deviation (reserved, see [`GeneratorConfig::noise`]).
pub const DEFAULT_NOISE: f64 = 0.1;

/// Default standard deviation of latent factor entries.
pub const DEFAULT_STDEV: f64 = 2.0;

/// Default power-law exponent of the degree distribution.
pub const DEFAULT_ALPHA: f64 = 1.8;

/// Default PRNG seed. Runs with this seed reproduce the reference output.
pub const DEFAULT_SEED: u64 = 31413;

/// Synthetic rating-graph generator configuration.
///
/// Immutable configuration specifying the graph dimensions, the latent
/// model parameters, the degree distribution shape, and the shard layout.
/// Use [`GeneratorConfigBuilder`] to construct instances.
///
/// # Examples
///
/// ```rust
/// use synth_core::config::GeneratorConfig;
///
/// let config = GeneratorConfig::builder()
///     .nusers(100)
///     .nmovies(500)
///     .seed(42)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.nusers(), 100);
/// assert_eq!(config.nfiles(), 5);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeneratorConfig {
    /// Directory receiving the shard files.
    output_dir: PathBuf,
    /// Number of training/validation shard file pairs.
    nfiles: u64,
    /// Latent dimension D.
    dimension: usize,
    /// User count.
    nusers: u64,
    /// Movie count.
    nmovies: u64,
    /// Validation edges per movie.
    nvalidation: u64,
    /// Noise standard deviation (reserved).
    noise: f64,
    /// Standard deviation of latent factor entries.
    stdev: f64,
    /// Power-law exponent.
    alpha: f64,
    /// PRNG seed.
    seed: u64,
}

impl GeneratorConfig {
    /// Creates a new configuration builder with all fields at their defaults.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use synth_core::config::GeneratorConfig;
    ///
    /// let config = GeneratorConfig::builder().build().unwrap();
    /// assert_eq!(config.seed(), 31413);
    /// ```
    #[inline]
    pub fn builder() -> GeneratorConfigBuilder {
        GeneratorConfigBuilder::default()
    }

    /// Returns the output directory.
    #[inline]
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Returns the number of shard file pairs.
    #[inline]
    pub fn nfiles(&self) -> u64 {
        self.nfiles
    }

    /// Returns the latent dimension D.
    #[inline]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Returns the user count.
    #[inline]
    pub fn nusers(&self) -> u64 {
        self.nusers
    }

    /// Returns the movie count.
    #[inline]
    pub fn nmovies(&self) -> u64 {
        self.nmovies
    }

    /// Returns the number of validation edges emitted per movie.
    #[inline]
    pub fn nvalidation(&self) -> u64 {
        self.nvalidation
    }

    /// Returns the noise standard deviation.
    ///
    /// Reserved: the value is accepted and validated but ratings are exact
    /// dot products, with no noise term applied.
    #[inline]
    pub fn noise(&self) -> f64 {
        self.noise
    }

    /// Returns the standard deviation of latent factor entries.
    #[inline]
    pub fn stdev(&self) -> f64 {
        self.stdev
    }

    /// Returns the power-law exponent of the degree distribution.
    #[inline]
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Returns the PRNG seed.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - `nfiles` is 0
    /// - `dimension` is 0
    /// - `nusers` does not exceed `nvalidation`
    /// - `stdev` or `noise` is negative or non-finite
    /// - `alpha` is non-positive or non-finite
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.nfiles == 0 {
            return Err(ConfigError::InvalidShardCount(self.nfiles));
        }
        if self.dimension == 0 {
            return Err(ConfigError::InvalidDimension(self.dimension));
        }
        if self.nusers <= self.nvalidation {
            return Err(ConfigError::InvalidUserSplit {
                nusers: self.nusers,
                nvalidation: self.nvalidation,
            });
        }
        if !self.stdev.is_finite() || self.stdev < 0.0 {
            return Err(ConfigError::InvalidParameter {
                name: "stdev",
                value: format!("must be finite and non-negative, got {}", self.stdev),
            });
        }
        if !self.alpha.is_finite() || self.alpha <= 0.0 {
            return Err(ConfigError::InvalidParameter {
                name: "alpha",
                value: format!("must be finite and positive, got {}", self.alpha),
            });
        }
        if !self.noise.is_finite() || self.noise < 0.0 {
            return Err(ConfigError::InvalidParameter {
                name: "noise",
                value: format!("must be finite and non-negative, got {}", self.noise),
            });
        }
        Ok(())
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            nfiles: DEFAULT_NFILES,
            dimension: DEFAULT_DIMENSION,
            nusers: DEFAULT_NUSERS,
            nmovies: DEFAULT_NMOVIES,
            nvalidation: DEFAULT_NVALIDATION,
            noise: DEFAULT_NOISE,
            stdev: DEFAULT_STDEV,
            alpha: DEFAULT_ALPHA,
            seed: DEFAULT_SEED,
        }
    }
}

/// Builder for [`GeneratorConfig`].
///
/// Provides a fluent API with every field pre-set to its default, so only
/// deviations from the reference dataset need to be spelled out.
///
/// # Examples
///
/// ```rust
/// use synth_core::config::GeneratorConfig;
///
/// let config = GeneratorConfig::builder()
///     .output_dir("/tmp/ratings")
///     .nfiles(8)
///     .alpha(2.1)
///     .build()
///     .expect("valid config");
/// ```
#[derive(Clone, Debug, Default)]
pub struct GeneratorConfigBuilder {
    config: GeneratorConfig,
}

impl GeneratorConfigBuilder {
    /// Sets the output directory.
    #[inline]
    pub fn output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.config.output_dir = output_dir.into();
        self
    }

    /// Sets the number of training/validation shard file pairs.
    ///
    /// # Arguments
    ///
    /// * `nfiles` - Shard pair count, at least 1
    #[inline]
    pub fn nfiles(mut self, nfiles: u64) -> Self {
        self.config.nfiles = nfiles;
        self
    }

    /// Sets the latent dimension D.
    ///
    /// # Arguments
    ///
    /// * `dimension` - Factor vector length, at least 1
    #[inline]
    pub fn dimension(mut self, dimension: usize) -> Self {
        self.config.dimension = dimension;
        self
    }

    /// Sets the user count.
    #[inline]
    pub fn nusers(mut self, nusers: u64) -> Self {
        self.config.nusers = nusers;
        self
    }

    /// Sets the movie count.
    #[inline]
    pub fn nmovies(mut self, nmovies: u64) -> Self {
        self.config.nmovies = nmovies;
        self
    }

    /// Sets the number of validation edges emitted per movie.
    ///
    /// # Arguments
    ///
    /// * `nvalidation` - Validation edges per movie, strictly below `nusers`
    #[inline]
    pub fn nvalidation(mut self, nvalidation: u64) -> Self {
        self.config.nvalidation = nvalidation;
        self
    }

    /// Sets the noise standard deviation (reserved, not applied to ratings).
    #[inline]
    pub fn noise(mut self, noise: f64) -> Self {
        self.config.noise = noise;
        self
    }

    /// Sets the standard deviation of latent factor entries.
    #[inline]
    pub fn stdev(mut self, stdev: f64) -> Self {
        self.config.stdev = stdev;
        self
    }

    /// Sets the power-law exponent of the degree distribution.
    #[inline]
    pub fn alpha(mut self, alpha: f64) -> Self {
        self.config.alpha = alpha;
        self
    }

    /// Sets the PRNG seed.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if any field fails [`GeneratorConfig::validate`].
    pub fn build(self) -> Result<GeneratorConfig, ConfigError> {
        self.config.validate()?;
        Ok(self.config)
    }
}
