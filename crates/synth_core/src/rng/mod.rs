//! # Random Number Generation Infrastructure
//!
//! This module provides the two deterministic sequences the generator is
//! built on: a seeded pseudo-random stream and a quasi-random user walk.
//!
//! ## Design Rationale
//!
//! - **Reproducibility**: one seeded stream per run; given the same seed
//!   and the same call sequence, every draw is bit-identical across runs
//!   and across builds. The backing generator is pinned to ChaCha8 rather
//!   than `StdRng` precisely because `StdRng` makes no cross-version
//!   stream guarantee.
//! - **Single stream**: latent factor generation and degree sampling share
//!   one [`SynthRng`]; the consumption order is part of the output
//!   contract and must never be reordered.
//! - **Walk, not draw**: assigning each edge to a user uses an additive
//!   recurrence ([`UserWalk`]) instead of a PRNG draw, so edge assignment
//!   costs one add and one modulo and consumes no stream state.
//!
//! ## Module Structure
//!
//! - `prng`: Seeded PRNG wrapper ([`SynthRng`]) with uniform, Gaussian,
//!   and inverse-CDF multinomial draws
//! - `weyl`: Additive-recurrence cursor ([`UserWalk`]) over the user id
//!   space
//!
//! ## Usage Example
//!
//! ```rust
//! use synth_core::rng::{SynthRng, UserWalk};
//!
//! let mut rng = SynthRng::from_seed(31413);
//! let factor_entry = rng.gen_gaussian(0.0, 2.0);
//!
//! let mut walk = UserWalk::new(1000);
//! let user_id = walk.next_user();
//! assert!(user_id < 1000);
//! # let _ = factor_entry;
//! ```

mod prng;
mod weyl;

// Public re-exports
pub use prng::SynthRng;
pub use weyl::{UserWalk, USER_STRIDE};
