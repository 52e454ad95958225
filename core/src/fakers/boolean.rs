//! Boolean facet

use crate::rng::RandomSource;

/// Boolean generator bound to one random source
pub struct BooleanFaker<'f> {
    rng: &'f mut RandomSource,
}

impl<'f> BooleanFaker<'f> {
    pub(crate) fn new(rng: &'f mut RandomSource) -> Self {
        Self { rng }
    }

    /// Uniform boolean. One draw.
    pub fn value(&mut self) -> bool {
        self.rng.next_bool()
    }
}
