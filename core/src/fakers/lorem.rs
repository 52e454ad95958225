//! Filler-word facet
//!
//! Lorem-style words for string fields. The record engine uses
//! [`pick_word`] for every plain string slot, so facet output and
//! struct-fill output stay draw-for-draw compatible.

use crate::rng::RandomSource;

/// Fixed word catalog. Wording carries no compatibility guarantee.
const WORDS: &[&str] = &[
    "alias", "aperiam", "aspernatur", "beatae", "commodi", "consequatur", "corporis", "culpa",
    "debitis", "dolores", "eligendi", "eveniet", "expedita", "facere", "fugiat", "harum",
    "impedit", "inventore", "labore", "magnam", "minima", "molestiae", "natus", "nemo",
    "obcaecati", "pariatur", "quaerat", "quidem", "ratione", "saepe", "tempora", "ullam",
    "veniam", "vitae", "voluptas", "zelus",
];

/// Pick one catalog word. Exactly one draw.
pub(crate) fn pick_word(rng: &mut RandomSource) -> &'static str {
    let idx = rng.int_between(0, WORDS.len() as i64 - 1) as usize;
    WORDS[idx]
}

/// Filler-word generator bound to one random source
pub struct LoremFaker<'f> {
    rng: &'f mut RandomSource,
}

impl<'f> LoremFaker<'f> {
    pub(crate) fn new(rng: &'f mut RandomSource) -> Self {
        Self { rng }
    }

    /// One filler word. Non-empty. One draw.
    pub fn word(&mut self) -> String {
        pick_word(self.rng).to_string()
    }

    /// `count` filler words, one draw each.
    pub fn words(&mut self, count: usize) -> Vec<String> {
        (0..count).map(|_| self.word()).collect()
    }

    /// A sentence of `word_count` words: capitalized, space-separated,
    /// terminated with a period. One draw per word.
    pub fn sentence(&mut self, word_count: usize) -> String {
        let mut out = String::new();
        for i in 0..word_count {
            let word = pick_word(self.rng);
            if i == 0 {
                let mut chars = word.chars();
                if let Some(first) = chars.next() {
                    out.extend(first.to_uppercase());
                    out.push_str(chars.as_str());
                }
            } else {
                out.push(' ');
                out.push_str(word);
            }
        }
        out.push('.');
        out
    }
}
