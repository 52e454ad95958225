//! Person-name facet

use crate::rng::RandomSource;

/// Fixed name catalogs. Wording carries no compatibility guarantee.
const FIRST_NAMES: &[&str] = &[
    "Ada", "Alan", "Barbara", "Claude", "Dennis", "Donald", "Edsger", "Frances", "Grace",
    "Hedy", "John", "Katherine", "Ken", "Leslie", "Linus", "Margaret", "Niklaus", "Radia",
    "Richard", "Rob", "Robin", "Sophie", "Tim", "Tony",
];

const LAST_NAMES: &[&str] = &[
    "Allen", "Baker", "Carter", "Diaz", "Evans", "Foster", "Gray", "Hayes", "Ingram",
    "Jensen", "Keller", "Lambert", "Mason", "Nolan", "Osborne", "Parker", "Quinn", "Reyes",
    "Sutton", "Turner", "Underwood", "Vaughn", "Walsh", "Yates",
];

/// Pick one first name. Exactly one draw.
pub(crate) fn pick_first_name(rng: &mut RandomSource) -> &'static str {
    let idx = rng.int_between(0, FIRST_NAMES.len() as i64 - 1) as usize;
    FIRST_NAMES[idx]
}

/// Pick one last name. Exactly one draw.
pub(crate) fn pick_last_name(rng: &mut RandomSource) -> &'static str {
    let idx = rng.int_between(0, LAST_NAMES.len() as i64 - 1) as usize;
    LAST_NAMES[idx]
}

/// Person-name generator bound to one random source
pub struct PersonFaker<'f> {
    rng: &'f mut RandomSource,
}

impl<'f> PersonFaker<'f> {
    pub(crate) fn new(rng: &'f mut RandomSource) -> Self {
        Self { rng }
    }

    /// A first name. One draw.
    pub fn first_name(&mut self) -> String {
        pick_first_name(self.rng).to_string()
    }

    /// A last name. One draw.
    pub fn last_name(&mut self) -> String {
        pick_last_name(self.rng).to_string()
    }

    /// "First Last". Two draws: first name, then last name.
    pub fn name(&mut self) -> String {
        let first = pick_first_name(self.rng);
        let last = pick_last_name(self.rng);
        format!("{} {}", first, last)
    }
}
