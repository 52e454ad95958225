//! Internet facet
//!
//! Emails, usernames and domains composed from the person-name catalogs so
//! the values look plausible without any locale data.

use crate::fakers::person::{pick_first_name, pick_last_name};
use crate::rng::RandomSource;

/// Fixed domain catalog. All reserved or documentation domains.
const DOMAINS: &[&str] = &[
    "example.com",
    "example.net",
    "example.org",
    "mail.example.com",
    "test.example.org",
];

/// Internet value generator bound to one random source
pub struct InternetFaker<'f> {
    rng: &'f mut RandomSource,
}

impl<'f> InternetFaker<'f> {
    pub(crate) fn new(rng: &'f mut RandomSource) -> Self {
        Self { rng }
    }

    /// A catalog domain. One draw.
    pub fn domain(&mut self) -> String {
        let idx = self.rng.int_between(0, DOMAINS.len() as i64 - 1) as usize;
        DOMAINS[idx].to_string()
    }

    /// "first.last@domain", lowercase. Three draws: first name, last name,
    /// domain.
    ///
    /// # Example
    /// ```
    /// use fakegen_core_rs::Faker;
    ///
    /// let mut f = Faker::with_seed(8);
    /// let email = f.internet().email();
    /// assert!(email.contains('@'));
    /// ```
    pub fn email(&mut self) -> String {
        let first = pick_first_name(self.rng).to_lowercase();
        let last = pick_last_name(self.rng).to_lowercase();
        let domain = self.domain();
        format!("{}.{}@{}", first, last, domain)
    }

    /// A lowercase name with a numeric suffix, e.g. "grace42". Two draws:
    /// name, then suffix in [1, 99].
    pub fn username(&mut self) -> String {
        let name = pick_first_name(self.rng).to_lowercase();
        let suffix = self.rng.int_between(1, 99);
        format!("{}{}", name, suffix)
    }
}
