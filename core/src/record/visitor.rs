//! Field visitor - the population core
//!
//! One `FieldVisitor` walks an entire record tree. [`Record`] impls call
//! the typed slot methods in declared field order; the visitor draws from
//! the shared source and writes values in place, recursing through nested
//! records and sequences depth-first. The same visitor type also runs the
//! pre-fill probe pass, which walks the schema without drawing or writing
//! so that validation failures leave both target and stream untouched.
//!
//! Value ranges written by the scalar methods:
//! - text: one non-empty catalog word
//! - integers: uniform in [0, 999_999], cast to the slot width
//! - floats: uniform in [0.0, 1000.0)
//! - booleans: uniform
//!
//! Every scalar slot consumes exactly one draw; a sequence consumes one
//! draw per slot (scalar elements) or the element's full draw sequence
//! (record elements).

use std::collections::BTreeSet;

use crate::fakers::lorem;
use crate::record::{FillError, FillOptions, Record, MAX_FILL_DEPTH};
use crate::rng::RandomSource;

/// Integer fill range. Fits every supported slot width.
const INT_LOW: i64 = 0;
const INT_HIGH: i64 = 999_999;

/// Float fill range upper bound (exclusive).
const FLOAT_SPAN: f64 = 1000.0;

/// Visitor carried through one fill (or probe) traversal
pub struct FieldVisitor<'a> {
    rng: &'a mut RandomSource,
    options: &'a FillOptions,
    /// Record name at the fill root, for error reporting.
    root: &'static str,
    /// Dotted path of the record currently being visited ("" at the root).
    path: String,
    depth: usize,
    /// Probe mode: collect sequence paths, check depth, draw and write
    /// nothing.
    probing: bool,
    seq_paths: BTreeSet<String>,
}

impl<'a> FieldVisitor<'a> {
    pub(crate) fn new(
        rng: &'a mut RandomSource,
        options: &'a FillOptions,
        root: &'static str,
        probing: bool,
    ) -> Self {
        Self {
            rng,
            options,
            root,
            path: String::new(),
            depth: 0,
            probing,
            seq_paths: BTreeSet::new(),
        }
    }

    pub(crate) fn into_seq_paths(self) -> BTreeSet<String> {
        self.seq_paths
    }

    /// Fill a string slot with one catalog word
    pub fn text(&mut self, name: &str, slot: &mut String) {
        if self.probing {
            return;
        }
        *slot = lorem::pick_word(self.rng).to_string();
        tracing::trace!(field = name, kind = "text", "filled");
    }

    /// Fill an i64 slot
    pub fn int_i64(&mut self, name: &str, slot: &mut i64) {
        if self.probing {
            return;
        }
        *slot = self.rng.int_between(INT_LOW, INT_HIGH);
        tracing::trace!(field = name, kind = "i64", "filled");
    }

    /// Fill an i32 slot
    pub fn int_i32(&mut self, name: &str, slot: &mut i32) {
        if self.probing {
            return;
        }
        *slot = self.rng.int_between(INT_LOW, INT_HIGH) as i32;
        tracing::trace!(field = name, kind = "i32", "filled");
    }

    /// Fill a u64 slot
    pub fn int_u64(&mut self, name: &str, slot: &mut u64) {
        if self.probing {
            return;
        }
        *slot = self.rng.int_between(INT_LOW, INT_HIGH) as u64;
        tracing::trace!(field = name, kind = "u64", "filled");
    }

    /// Fill a u32 slot
    pub fn int_u32(&mut self, name: &str, slot: &mut u32) {
        if self.probing {
            return;
        }
        *slot = self.rng.int_between(INT_LOW, INT_HIGH) as u32;
        tracing::trace!(field = name, kind = "u32", "filled");
    }

    /// Fill a usize slot
    pub fn int_usize(&mut self, name: &str, slot: &mut usize) {
        if self.probing {
            return;
        }
        *slot = self.rng.int_between(INT_LOW, INT_HIGH) as usize;
        tracing::trace!(field = name, kind = "usize", "filled");
    }

    /// Fill an f64 slot
    pub fn float_f64(&mut self, name: &str, slot: &mut f64) {
        if self.probing {
            return;
        }
        *slot = self.rng.next_f64() * FLOAT_SPAN;
        tracing::trace!(field = name, kind = "f64", "filled");
    }

    /// Fill an f32 slot
    pub fn float_f32(&mut self, name: &str, slot: &mut f32) {
        if self.probing {
            return;
        }
        *slot = (self.rng.next_f64() * FLOAT_SPAN) as f32;
        tracing::trace!(field = name, kind = "f32", "filled");
    }

    /// Fill a bool slot
    pub fn boolean(&mut self, name: &str, slot: &mut bool) {
        if self.probing {
            return;
        }
        *slot = self.rng.next_bool();
        tracing::trace!(field = name, kind = "bool", "filled");
    }

    /// Fill a string sequence; length from options, slots in order
    pub fn text_seq(&mut self, name: &str, slot: &mut Vec<String>) {
        let path = self.child_path(name);
        if self.probing {
            self.seq_paths.insert(path);
            return;
        }
        let count = self.options.repeat_for(&path);
        *slot = (0..count)
            .map(|_| lorem::pick_word(self.rng).to_string())
            .collect();
        tracing::trace!(field = %path, count, kind = "text_seq", "filled");
    }

    /// Fill an i64 sequence
    pub fn int_seq(&mut self, name: &str, slot: &mut Vec<i64>) {
        let path = self.child_path(name);
        if self.probing {
            self.seq_paths.insert(path);
            return;
        }
        let count = self.options.repeat_for(&path);
        *slot = (0..count)
            .map(|_| self.rng.int_between(INT_LOW, INT_HIGH))
            .collect();
        tracing::trace!(field = %path, count, kind = "int_seq", "filled");
    }

    /// Fill an f64 sequence
    pub fn float_seq(&mut self, name: &str, slot: &mut Vec<f64>) {
        let path = self.child_path(name);
        if self.probing {
            self.seq_paths.insert(path);
            return;
        }
        let count = self.options.repeat_for(&path);
        *slot = (0..count).map(|_| self.rng.next_f64() * FLOAT_SPAN).collect();
        tracing::trace!(field = %path, count, kind = "float_seq", "filled");
    }

    /// Fill a bool sequence
    pub fn bool_seq(&mut self, name: &str, slot: &mut Vec<bool>) {
        let path = self.child_path(name);
        if self.probing {
            self.seq_paths.insert(path);
            return;
        }
        let count = self.options.repeat_for(&path);
        *slot = (0..count).map(|_| self.rng.next_bool()).collect();
        tracing::trace!(field = %path, count, kind = "bool_seq", "filled");
    }

    /// Recurse into a nested record field
    pub fn nested<R: Record>(&mut self, name: &str, slot: &mut R) -> Result<(), FillError> {
        let saved = self.enter(name)?;
        let result = slot.visit_fields(self);
        self.leave(saved);
        result
    }

    /// Fill a sequence of nested records
    ///
    /// Each slot starts from `R::default()` and is filled in order, so the
    /// draw sequence of slot `n` precedes that of slot `n + 1`. All slots
    /// share the field's path for repeat-override purposes.
    pub fn nested_seq<R: Record + Default>(
        &mut self,
        name: &str,
        slot: &mut Vec<R>,
    ) -> Result<(), FillError> {
        let path = self.child_path(name);
        if self.probing {
            self.seq_paths.insert(path);
            // Probe one representative element: covers nested sequence
            // paths and bounds self-recursive record graphs.
            let mut element = R::default();
            let saved = self.enter(name)?;
            let result = element.visit_fields(self);
            self.leave(saved);
            return result;
        }

        let count = self.options.repeat_for(&path);
        tracing::trace!(field = %path, count, kind = "record_seq", "filling");
        let mut items = Vec::with_capacity(count);
        for _ in 0..count {
            let mut element = R::default();
            let saved = self.enter(name)?;
            let result = element.visit_fields(self);
            self.leave(saved);
            result?;
            items.push(element);
        }
        *slot = items;
        Ok(())
    }

    /// Record an intentionally untouched field
    ///
    /// Unsupported kinds are a silent skip by design: the field keeps
    /// whatever value it already holds, and nothing is reported through
    /// the API. The trace event is the only breadcrumb.
    pub fn skip(&mut self, name: &str) {
        if self.probing {
            return;
        }
        tracing::trace!(
            field = %self.child_path(name),
            "unsupported field kind, left untouched"
        );
    }

    fn child_path(&self, name: &str) -> String {
        if self.path.is_empty() {
            name.to_string()
        } else {
            format!("{}.{}", self.path, name)
        }
    }

    /// Push a path segment and check the depth bound. Returns the saved
    /// path length for [`Self::leave`].
    fn enter(&mut self, name: &str) -> Result<usize, FillError> {
        let saved = self.path.len();
        if !self.path.is_empty() {
            self.path.push('.');
        }
        self.path.push_str(name);
        self.depth += 1;

        if self.depth > MAX_FILL_DEPTH {
            let err = FillError::DepthLimitExceeded {
                record: self.root,
                path: self.path.clone(),
                max: MAX_FILL_DEPTH,
            };
            self.path.truncate(saved);
            self.depth -= 1;
            return Err(err);
        }
        Ok(saved)
    }

    fn leave(&mut self, saved: usize) {
        self.path.truncate(saved);
        self.depth -= 1;
    }
}
