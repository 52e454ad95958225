//! Per-field fill configuration
//!
//! Configuration travels with the call, not the type: the caller supplies
//! a `FillOptions` alongside the target instead of annotating the struct
//! declaration. The one recognized option is the repetition count for
//! sequence fields.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Sequence length used when no repeat override matches.
pub const DEFAULT_REPEAT: usize = 3;

/// Caller-supplied options for one fill invocation
///
/// Repeat overrides are keyed by the dotted field path from the fill root:
/// `"tags"` for a root field, `"address.tags"` inside a nested record.
/// Paths match exactly; sequence elements share their field's path, so one
/// override governs every slot. An override naming a path the target does
/// not declare as a sequence field fails the fill before any mutation.
///
/// # Example
/// ```
/// use fakegen_core_rs::{record, Faker, FillOptions};
///
/// record! {
///     pub struct Post {
///         pub title: String,
///         pub tags: Vec<String>,
///     }
/// }
///
/// let options = FillOptions::new().repeat("tags", 5);
///
/// let mut f = Faker::with_seed(1);
/// let mut post = Post::default();
/// f.record().fill_with(&mut post, &options).unwrap();
/// assert_eq!(post.tags.len(), 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FillOptions {
    /// Fallback sequence length.
    default_repeat: usize,

    /// Per-path repeat overrides. BTreeMap keeps validation order stable.
    repeats: BTreeMap<String, usize>,
}

impl FillOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the repeat count for the sequence field at `path`
    pub fn repeat(mut self, path: impl Into<String>, count: usize) -> Self {
        self.repeats.insert(path.into(), count);
        self
    }

    /// Set the fallback sequence length (initially [`DEFAULT_REPEAT`])
    pub fn default_repeat(mut self, count: usize) -> Self {
        self.default_repeat = count;
        self
    }

    /// Resolve the repeat count for a sequence field path.
    pub(crate) fn repeat_for(&self, path: &str) -> usize {
        self.repeats.get(path).copied().unwrap_or(self.default_repeat)
    }

    /// Override paths, in stable order, for validation.
    pub(crate) fn paths(&self) -> impl Iterator<Item = &str> {
        self.repeats.keys().map(String::as_str)
    }
}

impl Default for FillOptions {
    fn default() -> Self {
        Self {
            default_repeat: DEFAULT_REPEAT,
            repeats: BTreeMap::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeat_for_falls_back_to_default() {
        let options = FillOptions::new().repeat("tags", 7);

        assert_eq!(options.repeat_for("tags"), 7);
        assert_eq!(options.repeat_for("other"), DEFAULT_REPEAT);
    }

    #[test]
    fn test_default_repeat_override() {
        let options = FillOptions::new().default_repeat(1);
        assert_eq!(options.repeat_for("anything"), 1);
    }

    #[test]
    fn test_paths_in_stable_order() {
        let options = FillOptions::new().repeat("b", 1).repeat("a", 2);
        let paths: Vec<&str> = options.paths().collect();
        assert_eq!(paths, vec!["a", "b"]);
    }
}
