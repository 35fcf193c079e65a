//! Power-law out-degree sampling.
//!
//! Each movie's training edge count is drawn from a power-law
//! distribution over the rank range `[1, nusers - nvalidation]`: rank `i`
//! carries mass proportional to `i^(-alpha)`, so most movies receive few
//! edges and a small head receives many. The masses are normalised into a
//! cumulative table once per run; sampling is a single uniform draw plus
//! a binary search.

use crate::error::ConfigError;
use crate::rng::SynthRng;

/// Converts probability masses to a cumulative distribution in place.
///
/// Each mass is divided by the total and accumulated, leaving the final
/// entry at 1.0 up to floating rounding. Masses must be non-negative with
/// a positive total; an empty slice is a no-op.
///
/// # Examples
///
/// ```rust
/// use synth_core::model::pdf_to_cdf;
///
/// let mut masses = [2.0, 1.0, 1.0];
/// pdf_to_cdf(&mut masses);
/// assert_eq!(masses, [0.5, 0.75, 1.0]);
/// ```
pub fn pdf_to_cdf(pdf: &mut [f64]) {
    if pdf.is_empty() {
        return;
    }

    let total: f64 = pdf.iter().sum();
    debug_assert!(total > 0.0, "pdf_to_cdf requires a positive total mass");

    let mut acc = 0.0;
    for mass in pdf.iter_mut() {
        acc += *mass / total;
        *mass = acc;
    }
}

/// Power-law sampler for per-movie out-degrees.
///
/// Built once per run from `(nusers, nvalidation, alpha)`; construction
/// consumes no randomness, so it may happen anywhere relative to factor
/// generation without disturbing the stream.
///
/// # Examples
///
/// ```rust
/// use synth_core::model::DegreeSampler;
/// use synth_core::rng::SynthRng;
///
/// let sampler = DegreeSampler::new(100, 2, 1.8).unwrap();
/// let mut rng = SynthRng::from_seed(42);
///
/// let degree = sampler.sample(&mut rng);
/// assert!(degree >= 1 && degree <= 98);
/// ```
#[derive(Clone, Debug)]
pub struct DegreeSampler {
    /// Cumulative masses over degree ranks, `cdf[i]` covering degree `i + 1`.
    cdf: Vec<f64>,
}

impl DegreeSampler {
    /// Builds the cumulative degree table for the given configuration.
    ///
    /// Rank `i` (1-indexed) receives mass `i^(-alpha)` before
    /// normalisation; the table spans ranks `1..=nusers - nvalidation`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidUserSplit`] when `nusers` does not
    /// exceed `nvalidation`, which would leave the rank range empty.
    pub fn new(nusers: u64, nvalidation: u64, alpha: f64) -> Result<Self, ConfigError> {
        if nusers <= nvalidation {
            return Err(ConfigError::InvalidUserSplit {
                nusers,
                nvalidation,
            });
        }

        let nranks = (nusers - nvalidation) as usize;
        let mut cdf: Vec<f64> = (0..nranks)
            .map(|i| ((i + 1) as f64).powf(-alpha))
            .collect();
        pdf_to_cdf(&mut cdf);

        Ok(Self { cdf })
    }

    /// Returns the largest degree the sampler can produce.
    #[inline]
    pub fn max_degree(&self) -> u64 {
        self.cdf.len() as u64
    }

    /// Returns the cumulative degree table.
    #[inline]
    pub fn cdf(&self) -> &[f64] {
        &self.cdf
    }

    /// Draws one out-degree in `[1, max_degree()]`.
    ///
    /// Consumes exactly one uniform draw from the shared stream.
    #[inline]
    pub fn sample(&self, rng: &mut SynthRng) -> u64 {
        rng.multinomial_cdf(&self.cdf) as u64 + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn test_rejects_degenerate_split() {
        assert!(matches!(
            DegreeSampler::new(2, 2, 1.8),
            Err(ConfigError::InvalidUserSplit {
                nusers: 2,
                nvalidation: 2
            })
        ));
        assert!(matches!(
            DegreeSampler::new(1, 5, 1.8),
            Err(ConfigError::InvalidUserSplit { .. })
        ));
    }

    #[test]
    fn test_cdf_shape() {
        let sampler = DegreeSampler::new(12, 2, 1.8).unwrap();
        let cdf = sampler.cdf();

        assert_eq!(cdf.len(), 10);
        assert_eq!(sampler.max_degree(), 10);

        // Non-decreasing, ending at 1.
        for window in cdf.windows(2) {
            assert!(window[0] <= window[1]);
        }
        assert_relative_eq!(cdf[cdf.len() - 1], 1.0, epsilon = 1e-12);

        // First entry is the normalised rank-1 mass.
        let total: f64 = (1..=10).map(|i| (i as f64).powf(-1.8)).sum();
        assert_relative_eq!(cdf[0], 1.0 / total, epsilon = 1e-12);
    }

    #[test]
    fn test_zero_validation_uses_full_rank_range() {
        let sampler = DegreeSampler::new(10, 0, 1.8).unwrap();
        assert_eq!(sampler.max_degree(), 10);
    }

    #[test]
    fn test_sample_range() {
        let sampler = DegreeSampler::new(100, 2, 1.8).unwrap();
        let mut rng = SynthRng::from_seed(42);

        for _ in 0..10_000 {
            let degree = sampler.sample(&mut rng);
            assert!(degree >= 1, "Degree {} below minimum", degree);
            assert!(degree <= 98, "Degree {} above rank range", degree);
        }
    }

    #[test]
    fn test_single_rank_always_degree_one() {
        let sampler = DegreeSampler::new(3, 2, 1.8).unwrap();
        let mut rng = SynthRng::from_seed(42);

        for _ in 0..1_000 {
            assert_eq!(sampler.sample(&mut rng), 1);
        }
    }

    #[test]
    fn test_degree_distribution_follows_power_law() {
        let alpha = 1.8;
        let sampler = DegreeSampler::new(52, 2, alpha).unwrap();
        let mut rng = SynthRng::from_seed(42);

        let draws = 100_000usize;
        let mut counts = vec![0u64; sampler.max_degree() as usize + 1];
        for _ in 0..draws {
            counts[sampler.sample(&mut rng) as usize] += 1;
        }

        // Expected rank probabilities from the normalised masses.
        let total: f64 = (1..=50).map(|i| (i as f64).powf(-alpha)).sum();
        for rank in 1..=3usize {
            let expected = (rank as f64).powf(-alpha) / total;
            let observed = counts[rank] as f64 / draws as f64;
            assert!(
                (observed - expected).abs() < 0.01,
                "Rank {} frequency {:.4} deviates from expected {:.4}",
                rank,
                observed,
                expected
            );
        }

        // The rank-1 to rank-2 ratio recovers 2^alpha.
        let ratio = counts[1] as f64 / counts[2] as f64;
        assert_relative_eq!(ratio, 2f64.powf(alpha), max_relative = 0.1);
    }

    #[test]
    fn test_larger_alpha_concentrates_mass() {
        let flat = DegreeSampler::new(100, 0, 0.5).unwrap();
        let steep = DegreeSampler::new(100, 0, 3.0).unwrap();

        assert!(steep.cdf()[0] > flat.cdf()[0]);
    }

    #[test]
    fn test_pdf_to_cdf_empty_is_noop() {
        let mut empty: [f64; 0] = [];
        pdf_to_cdf(&mut empty);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Property test: Sampled degrees stay in `[1, nusers - nvalidation]`.
        #[test]
        fn prop_degree_in_rank_range(
            seed in any::<u64>(),
            (nusers, nvalidation) in (2..500u64).prop_flat_map(|n| (Just(n), 0..n)),
            alpha in 0.1..5.0f64,
        ) {
            let sampler = DegreeSampler::new(nusers, nvalidation, alpha).unwrap();
            let mut rng = SynthRng::from_seed(seed);

            for _ in 0..50 {
                let degree = sampler.sample(&mut rng);
                prop_assert!(degree >= 1);
                prop_assert!(degree <= nusers - nvalidation);
            }
        }
    }
}
