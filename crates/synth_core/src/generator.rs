//! Generation orchestration.
//!
//! This module provides the run driver for a full synthesis pass.
//!
//! # Overview
//!
//! The [`Generator`] coordinates:
//! 1. Configuration validation (before any filesystem work)
//! 2. Output directory and shard stream creation (via [`ShardedWriter`])
//! 3. Ground-truth model generation (via [`LatentModel`])
//! 4. Per-movie degree sampling (via [`DegreeSampler`]) and edge emission
//!
//! # Determinism
//!
//! All randomness flows through one [`SynthRng`] created at the start of
//! [`Generator::run`], and the user cursor is likewise run-local, so a
//! given configuration always produces byte-identical shard files, even
//! across repeated `run` calls on the same generator.

use std::fs;

use tracing::info;

use crate::config::GeneratorConfig;
use crate::error::{ConfigError, GeneratorError, OutputError};
use crate::model::{DegreeSampler, LatentModel};
use crate::rng::{SynthRng, UserWalk};
use crate::writer::ShardedWriter;

/// Summary of one completed synthesis run.
///
/// # Examples
///
/// ```rust
/// use synth_core::generator::GenerationReport;
///
/// let report = GenerationReport {
///     training_edges: 120,
///     validation_edges: 20,
/// };
/// assert_eq!(report.total_edges(), 140);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenerationReport {
    /// Training edges written across all shards.
    pub training_edges: u64,
    /// Validation edges written across all shards.
    pub validation_edges: u64,
}

impl GenerationReport {
    /// Returns the total number of edges written.
    #[inline]
    pub fn total_edges(&self) -> u64 {
        self.training_edges + self.validation_edges
    }
}

/// Synthetic rating-graph generator.
///
/// Owns a validated [`GeneratorConfig`] and drives the per-movie emission
/// loop against the shard streams.
///
/// # Examples
///
/// ```no_run
/// use synth_core::config::GeneratorConfig;
/// use synth_core::generator::Generator;
///
/// # fn main() -> Result<(), synth_core::error::GeneratorError> {
/// let config = GeneratorConfig::builder()
///     .output_dir("synthetic_data")
///     .nusers(100)
///     .nmovies(50)
///     .build()?;
///
/// let report = Generator::new(config)?.run()?;
/// println!("wrote {} edges", report.total_edges());
/// # Ok(())
/// # }
/// ```
pub struct Generator {
    /// Validated run configuration.
    config: GeneratorConfig,
}

impl Generator {
    /// Creates a generator from a configuration.
    ///
    /// Validation happens here, before any filesystem work: a rejected
    /// configuration never creates the output directory.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the configuration fails
    /// [`GeneratorConfig::validate`].
    pub fn new(config: GeneratorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Returns the generator configuration.
    #[inline]
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Runs a full synthesis pass and returns the edge counters.
    ///
    /// Creates the output directory if absent, truncates and rewrites the
    /// `2 * nfiles` shard files, and emits for every movie one sampled
    /// batch of training edges followed by `nvalidation` validation
    /// edges. The RNG and the user cursor are created here, so repeated
    /// calls rewrite identical bytes.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::Output`] when the directory, a shard
    /// file, or a stream write/flush fails. Any failure aborts the run;
    /// partially written shards are left behind for inspection.
    pub fn run(&self) -> Result<GenerationReport, GeneratorError> {
        let cfg = &self.config;

        info!(dir = %cfg.output_dir().display(), "Creating output directory");
        fs::create_dir_all(cfg.output_dir()).map_err(|source| OutputError::CreateDir {
            path: cfg.output_dir().to_path_buf(),
            source,
        })?;

        info!(nfiles = cfg.nfiles(), "Opening shard files");
        let mut writer = ShardedWriter::create(cfg.output_dir(), cfg.nfiles())?;

        let mut rng = SynthRng::from_seed(cfg.seed());

        info!(
            nusers = cfg.nusers(),
            nmovies = cfg.nmovies(),
            dimension = cfg.dimension(),
            "Generating latent factors"
        );
        let model = LatentModel::generate(
            cfg.nusers(),
            cfg.nmovies(),
            cfg.dimension(),
            cfg.stdev(),
            &mut rng,
        );

        let degrees = DegreeSampler::new(cfg.nusers(), cfg.nvalidation(), cfg.alpha())?;
        let mut walk = UserWalk::new(cfg.nusers());

        info!(nmovies = cfg.nmovies(), alpha = cfg.alpha(), "Sampling ratings");
        let mut report = GenerationReport::default();

        for movie_id in 0..cfg.nmovies() {
            let item_id = cfg.nusers() + movie_id;
            let out_degree = degrees.sample(&mut rng);

            for _ in 0..out_degree {
                let user_id = walk.next_user();
                let rating = model.rating(user_id, movie_id);
                writer.write_training(user_id, item_id, rating)?;
            }
            report.training_edges += out_degree;

            for _ in 0..cfg.nvalidation() {
                let user_id = walk.next_user();
                let rating = model.rating(user_id, movie_id);
                writer.write_validation(user_id, item_id, rating)?;
            }
            report.validation_edges += cfg.nvalidation();
        }

        writer.finish()?;

        info!(
            training_edges = report.training_edges,
            validation_edges = report.validation_edges,
            "Generation complete"
        );
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn test_config(dir: &Path) -> GeneratorConfig {
        GeneratorConfig::builder()
            .output_dir(dir)
            .nfiles(2)
            .dimension(3)
            .nusers(20)
            .nmovies(5)
            .nvalidation(2)
            .seed(31413)
            .build()
            .unwrap()
    }

    #[test]
    fn test_generator_creation() {
        let generator = Generator::new(GeneratorConfig::default()).unwrap();
        assert_eq!(generator.config().seed(), 31413);
    }

    #[test]
    fn test_invalid_split_fails_before_any_io() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("out");

        let result = GeneratorConfig::builder()
            .output_dir(&target)
            .nusers(2)
            .nvalidation(2)
            .build();

        assert!(matches!(result, Err(ConfigError::InvalidUserSplit { .. })));
        assert!(!target.exists());
    }

    #[test]
    fn test_run_writes_expected_counts() {
        let dir = tempfile::tempdir().unwrap();
        let generator = Generator::new(test_config(dir.path())).unwrap();

        let report = generator.run().unwrap();

        // 5 movies, 2 validation edges each.
        assert_eq!(report.validation_edges, 10);
        // Each movie draws a degree in [1, 18].
        assert!(report.training_edges >= 5);
        assert!(report.training_edges <= 5 * 18);
        assert_eq!(
            report.total_edges(),
            report.training_edges + report.validation_edges
        );

        for i in 0..2 {
            assert!(dir.path().join(format!("graph_{}.tsv", i)).is_file());
            assert!(dir.path().join(format!("graph_{}.tsv.validate", i)).is_file());
        }
    }

    #[test]
    fn test_repeated_runs_are_byte_identical() {
        let dir = tempfile::tempdir().unwrap();
        let generator = Generator::new(test_config(dir.path())).unwrap();

        let first = generator.run().unwrap();
        let snapshot: Vec<String> = (0..2)
            .flat_map(|i| {
                [
                    std::fs::read_to_string(dir.path().join(format!("graph_{}.tsv", i))).unwrap(),
                    std::fs::read_to_string(dir.path().join(format!("graph_{}.tsv.validate", i)))
                        .unwrap(),
                ]
            })
            .collect();

        let second = generator.run().unwrap();
        let rerun: Vec<String> = (0..2)
            .flat_map(|i| {
                [
                    std::fs::read_to_string(dir.path().join(format!("graph_{}.tsv", i))).unwrap(),
                    std::fs::read_to_string(dir.path().join(format!("graph_{}.tsv.validate", i)))
                        .unwrap(),
                ]
            })
            .collect();

        assert_eq!(first, second);
        assert_eq!(snapshot, rerun);
    }

    #[test]
    fn test_zero_movies_produces_empty_shards() {
        let dir = tempfile::tempdir().unwrap();
        let config = GeneratorConfig::builder()
            .output_dir(dir.path())
            .nfiles(1)
            .nusers(10)
            .nmovies(0)
            .build()
            .unwrap();

        let report = Generator::new(config).unwrap().run().unwrap();

        assert_eq!(report, GenerationReport::default());
        let content = std::fs::read_to_string(dir.path().join("graph_0.tsv")).unwrap();
        assert!(content.is_empty());
    }

    #[cfg(feature = "serde")]
    mod serde_tests {
        use super::*;

        #[test]
        fn test_report_serde_roundtrip() {
            let report = GenerationReport {
                training_edges: 120,
                validation_edges: 10,
            };

            let json = serde_json::to_string(&report).unwrap();
            let parsed: GenerationReport = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, report);
        }
    }
}
