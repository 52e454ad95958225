//! UUID facet
//!
//! Generates RFC 4122 version-4 identifiers from the deterministic stream.
//! The stock `Uuid::new_v4()` constructor draws from OS randomness, which
//! would break the determinism contract, so the sixteen bytes are drawn
//! from the generator's own source and only the layout work is delegated
//! to the `uuid` crate.

use uuid::Builder;

use crate::rng::RandomSource;

/// Version-4 UUID generator bound to one random source
pub struct UuidFaker<'f> {
    rng: &'f mut RandomSource,
}

impl<'f> UuidFaker<'f> {
    pub(crate) fn new(rng: &'f mut RandomSource) -> Self {
        Self { rng }
    }

    /// Generate a fake version-4 UUID string
    ///
    /// Draws 16 independent bytes, forces the version nibble to `4` and the
    /// variant bits to `10`, and formats as the canonical lowercase
    /// hyphenated 8-4-4-4-12 layout. Always 36 characters with hyphens at
    /// indices 8, 13, 18 and 23. Uniqueness is probabilistic, not checked.
    ///
    /// # Example
    /// ```
    /// use fakegen_core_rs::Faker;
    ///
    /// let mut f = Faker::with_seed(1);
    /// let id = f.uuid().v4();
    /// assert_eq!(id.len(), 36);
    /// assert_eq!(&id[14..15], "4");
    /// ```
    pub fn v4(&mut self) -> String {
        let mut bytes = [0u8; 16];
        self.rng.fill_bytes(&mut bytes);
        Builder::from_random_bytes(bytes)
            .into_uuid()
            .hyphenated()
            .to_string()
    }
}
