//! Latent factor matrices and the rating model.
//!
//! Users and movies each own a fixed-length real vector; the ground-truth
//! rating of a (user, movie) pair is the dot product of the two vectors.
//! Factors are stored in a single flat row-major buffer per entity class.

use crate::rng::SynthRng;

/// Dense matrix of latent factors, one row per entity.
///
/// Rows are stored contiguously in a flat `Vec<f64>` indexed
/// `[id * dimension + component]`. Entries are independent
/// Gaussian(0, stdev) draws, generated row by row so the stream
/// consumption order is fixed by construction.
#[derive(Clone, Debug)]
pub struct FactorMatrix {
    /// Length of each factor row.
    dimension: usize,
    /// Row-major factor entries, `len / dimension` rows.
    data: Vec<f64>,
}

impl FactorMatrix {
    /// Generates `count` factor rows of the given dimension.
    ///
    /// Draws `count * dimension` Gaussian(0, stdev) samples from the
    /// shared stream, row 0 first, each row left to right.
    ///
    /// # Arguments
    ///
    /// * `count` - Number of entities (rows)
    /// * `dimension` - Factor vector length, at least 1
    /// * `stdev` - Standard deviation of each entry
    /// * `rng` - Shared run stream
    pub fn generate(count: usize, dimension: usize, stdev: f64, rng: &mut SynthRng) -> Self {
        debug_assert!(dimension > 0, "factor rows must have at least one entry");

        let mut data = Vec::with_capacity(count * dimension);
        for _ in 0..count * dimension {
            data.push(rng.gen_gaussian(0.0, stdev));
        }

        Self { dimension, data }
    }

    /// Returns the number of factor rows.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len() / self.dimension
    }

    /// Returns `true` if the matrix has no rows.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the length of each factor row.
    #[inline]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Returns the factor row for the given entity id.
    ///
    /// # Panics
    ///
    /// Panics if `id >= len()`.
    #[inline]
    pub fn row(&self, id: usize) -> &[f64] {
        &self.data[id * self.dimension..(id + 1) * self.dimension]
    }
}

/// Ground-truth latent model: user factors plus movie factors.
///
/// # Examples
///
/// ```rust
/// use synth_core::model::LatentModel;
/// use synth_core::rng::SynthRng;
///
/// let mut rng = SynthRng::from_seed(42);
/// let model = LatentModel::generate(10, 5, 3, 2.0, &mut rng);
///
/// assert_eq!(model.users().len(), 10);
/// assert_eq!(model.movies().len(), 5);
/// let r = model.rating(0, 0);
/// assert!(r.is_finite());
/// ```
#[derive(Clone, Debug)]
pub struct LatentModel {
    /// One factor row per user id.
    users: FactorMatrix,
    /// One factor row per movie id.
    movies: FactorMatrix,
}

impl LatentModel {
    /// Generates the full latent model from the shared stream.
    ///
    /// All user rows are drawn first, in id order, then all movie rows in
    /// id order. This ordering is part of the reproducibility contract:
    /// it pins how much stream state factor generation consumes before
    /// the first degree draw.
    ///
    /// # Arguments
    ///
    /// * `nusers` - User count
    /// * `nmovies` - Movie count
    /// * `dimension` - Factor vector length, at least 1
    /// * `stdev` - Standard deviation of factor entries
    /// * `rng` - Shared run stream
    pub fn generate(
        nusers: u64,
        nmovies: u64,
        dimension: usize,
        stdev: f64,
        rng: &mut SynthRng,
    ) -> Self {
        let users = FactorMatrix::generate(nusers as usize, dimension, stdev, rng);
        let movies = FactorMatrix::generate(nmovies as usize, dimension, stdev, rng);
        Self { users, movies }
    }

    /// Returns the ground-truth rating for a (user, movie) pair.
    ///
    /// The rating is the exact dot product of the two factor rows; no
    /// noise, clamping, or rescaling is applied.
    ///
    /// # Panics
    ///
    /// Panics if either id is out of range.
    #[inline]
    pub fn rating(&self, user_id: u64, movie_id: u64) -> f64 {
        dot(self.users.row(user_id as usize), self.movies.row(movie_id as usize))
    }

    /// Returns the user factor matrix.
    #[inline]
    pub fn users(&self) -> &FactorMatrix {
        &self.users
    }

    /// Returns the movie factor matrix.
    #[inline]
    pub fn movies(&self) -> &FactorMatrix {
        &self.movies
    }
}

/// Dot product of two equal-length factor rows.
#[inline]
fn dot(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}
