//! # Ground-Truth Statistical Model
//!
//! The synthetic graph is backed by two statistical objects generated once
//! per run and immutable afterwards:
//!
//! - [`LatentModel`]: per-user and per-movie latent factor vectors; a
//!   rating is the inner product of the two endpoints' vectors.
//! - [`DegreeSampler`]: a power-law distribution over out-degree ranks,
//!   sampled once per movie to decide how many training edges it receives.
//!
//! Both consume the shared [`crate::rng::SynthRng`] stream; factor
//! generation draws first (all users, then all movies), degree sampling
//! draws once per movie afterwards. That order is part of the
//! reproducibility contract.

mod degree;
mod factors;

// Public re-exports
pub use degree::{pdf_to_cdf, DegreeSampler};
pub use factors::{FactorMatrix, LatentModel};
