//! Synthgen CLI - Synthetic Rating-Graph Generation
//!
//! Command-line front end for `synth_core`. Generates a bipartite
//! user/movie rating graph with known low-rank structure and writes it as
//! sharded TSV training/validation file pairs.
//!
//! # Usage
//!
//! ```text
//! synthgen --dir synthetic_data --nusers 1000 --nmovies 10000 --D 20
//! ```
//!
//! Every option defaults to the reference dataset's value, so a bare
//! `synthgen` reproduces the reference output byte for byte.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use synth_core::config::{self, GeneratorConfig};
use synth_core::generator::Generator;

/// Synthetic power-law rating-graph generator
#[derive(Parser, Debug)]
#[command(name = "synthgen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Output directory for the shard files
    #[arg(long, default_value = config::DEFAULT_OUTPUT_DIR)]
    dir: PathBuf,

    /// Number of training/validation shard file pairs
    #[arg(long, default_value_t = config::DEFAULT_NFILES)]
    nfiles: u64,

    /// Latent dimension of the ground-truth factors
    #[arg(long = "D", default_value_t = config::DEFAULT_DIMENSION)]
    dimension: usize,

    /// Number of users
    #[arg(long, default_value_t = config::DEFAULT_NUSERS)]
    nusers: u64,

    /// Number of movies
    #[arg(long, default_value_t = config::DEFAULT_NMOVIES)]
    nmovies: u64,

    /// Validation edges held out per movie
    #[arg(long, default_value_t = config::DEFAULT_NVALIDATION)]
    nvalidation: u64,

    /// Noise standard deviation (accepted for compatibility, not applied)
    #[arg(long, default_value_t = config::DEFAULT_NOISE)]
    noise: f64,

    /// Standard deviation of the latent factor entries
    #[arg(long, default_value_t = config::DEFAULT_STDEV)]
    stdev: f64,

    /// Power-law exponent of the degree distribution
    #[arg(long, default_value_t = config::DEFAULT_ALPHA)]
    alpha: f64,

    /// PRNG seed
    #[arg(long, default_value_t = config::DEFAULT_SEED)]
    seed: u64,
}

fn main() -> anyhow::Result<()> {
    // Initialise tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    let config = GeneratorConfig::builder()
        .output_dir(cli.dir)
        .nfiles(cli.nfiles)
        .dimension(cli.dimension)
        .nusers(cli.nusers)
        .nmovies(cli.nmovies)
        .nvalidation(cli.nvalidation)
        .noise(cli.noise)
        .stdev(cli.stdev)
        .alpha(cli.alpha)
        .seed(cli.seed)
        .build()
        .context("invalid generator options")?;

    info!(
        dir = %config.output_dir().display(),
        nusers = config.nusers(),
        nmovies = config.nmovies(),
        seed = config.seed(),
        "Starting synthetic rating-graph generation"
    );

    let generator = Generator::new(config)?;
    let report = generator
        .run()
        .context("synthetic graph generation failed")?;

    info!(
        training_edges = report.training_edges,
        validation_edges = report.validation_edges,
        "Wrote {} edges in total",
        report.total_edges()
    );

    Ok(())
}
