//! Numeric facet

use crate::rng::RandomSource;

/// Numeric value generator bound to one random source
pub struct NumberFaker<'f> {
    rng: &'f mut RandomSource,
}

impl<'f> NumberFaker<'f> {
    pub(crate) fn new(rng: &'f mut RandomSource) -> Self {
        Self { rng }
    }

    /// Uniform integer in the inclusive range [low, high]
    ///
    /// One draw. Panics if `low > high` (see
    /// [`RandomSource::int_between`]).
    ///
    /// # Example
    /// ```
    /// use fakegen_core_rs::Faker;
    ///
    /// let mut f = Faker::with_seed(3);
    /// let amount = f.number().int_between(10_000, 100_000);
    /// assert!((10_000..=100_000).contains(&amount));
    /// ```
    pub fn int_between(&mut self, low: i64, high: i64) -> i64 {
        self.rng.int_between(low, high)
    }

    /// Uniform f64 in [0.0, 1.0). One draw.
    pub fn float(&mut self) -> f64 {
        self.rng.next_f64()
    }

    /// Uniform f64 in [low, high). One draw.
    ///
    /// # Panics
    /// Panics if `low > high`.
    pub fn float_between(&mut self, low: f64, high: f64) -> f64 {
        assert!(low <= high, "low must not exceed high");
        low + self.rng.next_f64() * (high - low)
    }

    /// Single decimal digit in [0, 9]. One draw.
    pub fn digit(&mut self) -> i64 {
        self.rng.int_between(0, 9)
    }
}
