//! Additive-recurrence walk over the user id space.
//!
//! Every emitted edge needs a user endpoint. Instead of spending a PRNG
//! draw per edge, the generator walks the ring `[0, nusers)` with a fixed
//! odd stride (a Weyl sequence): successive positions are spread
//! pseudo-uniformly across the id space, and the whole walk is determined
//! by `nusers` alone.

/// Additive stride of the user walk.
///
/// Knuth's multiplicative-hash prime 0x9E3779B1, near 2^32 / φ. Being
/// prime, it is coprime with every smaller user count, so the walk visits
/// the entire id space before repeating.
pub const USER_STRIDE: u64 = 2_654_435_761;

/// Deterministic cursor selecting the user endpoint of each edge.
///
/// The cursor starts at 0 and advances by [`USER_STRIDE`] modulo the user
/// count on every call, the advance happening before the value is used.
/// One walk is shared across training and validation edges and across all
/// items; it is never reset mid-run, so the sequence of visited users is
/// fully determined by the per-item degree draws.
///
/// The period is `nusers / gcd(nusers, USER_STRIDE)`.
///
/// # Examples
///
/// ```rust
/// use synth_core::rng::{UserWalk, USER_STRIDE};
///
/// let mut walk = UserWalk::new(10);
/// assert_eq!(walk.next_user(), USER_STRIDE % 10);
/// ```
#[derive(Clone, Debug)]
pub struct UserWalk {
    /// Current position in `[0, nusers)`.
    cursor: u64,
    /// Size of the user id space.
    nusers: u64,
}

impl UserWalk {
    /// Creates a walk over `[0, nusers)`, positioned before the first user.
    ///
    /// # Arguments
    ///
    /// * `nusers` - Size of the user id space, at least 1
    #[inline]
    pub fn new(nusers: u64) -> Self {
        debug_assert!(nusers > 0, "UserWalk requires a non-empty id space");
        Self { cursor: 0, nusers }
    }

    /// Advances the cursor and returns the user id for the next edge.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use synth_core::rng::UserWalk;
    ///
    /// let mut walk = UserWalk::new(7);
    /// for _ in 0..100 {
    ///     assert!(walk.next_user() < 7);
    /// }
    /// ```
    #[inline]
    pub fn next_user(&mut self) -> u64 {
        self.cursor = (self.cursor + USER_STRIDE) % self.nusers;
        self.cursor
    }
}
