//! Record population engine
//!
//! The deterministic core: walks a composite type's fields in declared
//! order and fills each with a type-appropriate fake value, drawing from
//! the one [`RandomSource`](crate::RandomSource) owned by the generator.
//! Consumption order is depth-first, left-to-right over the field list,
//! sequence slots in order before the next field. For a fixed target
//! type, seed and options, repeated fills from freshly seeded generators
//! produce field-for-field identical output.
//!
//! There is no runtime reflection in Rust, so the field walk is code the
//! compiler can see: a type implements [`Record`] by presenting its fields,
//! in declared order, to a [`FieldVisitor`]. The [`record!`](crate::record!)
//! macro writes both the struct and that impl from one declaration; the
//! trait can also be implemented by hand for full control (serde-style).
//!
//! Per-field configuration lives in [`FillOptions`], supplied by the caller
//! alongside the target rather than embedded in the type: the recognized
//! option is the repetition count for sequence fields, keyed by dotted path
//! from the fill root.
//!
//! Fields whose kind the engine cannot determine are left untouched. That
//! is a documented design choice, not an error: fixture structs often carry
//! handles or computed fields no generator could invent. Skips surface only
//! as `tracing` trace events.

mod macros;
mod options;
mod visitor;

pub use options::{FillOptions, DEFAULT_REPEAT};
pub use visitor::FieldVisitor;

use thiserror::Error;

use crate::rng::RandomSource;

/// Maximum field-nesting depth a fill will follow.
///
/// A record containing `Vec<Self>` describes an unbounded tree; the fill
/// would otherwise allocate forever. Sixteen levels is far beyond any
/// realistic fixture.
pub const MAX_FILL_DEPTH: usize = 16;

/// Errors that can occur when populating a record
///
/// Both variants are the same class of failure: the target, as described
/// by its schema and the supplied options, cannot be filled. A
/// non-composite target is unrepresentable here; the [`Record`] bound
/// rejects it at compile time.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FillError {
    /// A repeat override names a path the target does not declare as a
    /// sequence field. The options describe a different type than the
    /// target.
    #[error("invalid fill target `{record}`: no sequence field at path `{path}`")]
    UnknownSequencePath {
        record: &'static str,
        path: String,
    },

    /// The record graph nests past [`MAX_FILL_DEPTH`].
    #[error("invalid fill target `{record}`: nesting at `{path}` exceeds depth limit {max}")]
    DepthLimitExceeded {
        record: &'static str,
        path: String,
        max: usize,
    },
}

/// A composite type the engine can populate
///
/// Implementations present their fields to the visitor in declared order.
/// The field list must not depend on current field values: the engine
/// walks the schema twice (a validation probe, then the fill), and the
/// determinism contract assumes one fixed traversal per type.
///
/// Usually generated by [`record!`](crate::record!); a manual impl looks
/// like:
///
/// ```
/// use fakegen_core_rs::{Faker, FieldVisitor, FillError, Record};
///
/// #[derive(Default)]
/// struct Sensor {
///     label: String,
///     reading: f64,
///     calibration: Option<[f64; 3]>, // no generator for this; skipped
/// }
///
/// impl Record for Sensor {
///     const NAME: &'static str = "Sensor";
///
///     fn visit_fields(&mut self, v: &mut FieldVisitor<'_>) -> Result<(), FillError> {
///         v.text("label", &mut self.label);
///         v.float_f64("reading", &mut self.reading);
///         v.skip("calibration");
///         Ok(())
///     }
/// }
///
/// let mut f = Faker::with_seed(99);
/// let mut sensor = Sensor::default();
/// f.record().fill(&mut sensor).unwrap();
/// assert!(!sensor.label.is_empty());
/// assert!(sensor.calibration.is_none());
/// ```
pub trait Record {
    /// Type name used in error reporting.
    const NAME: &'static str;

    /// Present each field, in declared order, to the visitor.
    fn visit_fields(&mut self, v: &mut FieldVisitor<'_>) -> Result<(), FillError>;
}

/// Record-population facet bound to one random source
pub struct RecordFaker<'f> {
    rng: &'f mut RandomSource,
}

impl<'f> RecordFaker<'f> {
    pub(crate) fn new(rng: &'f mut RandomSource) -> Self {
        Self { rng }
    }

    /// Fill every supported field of `target` with default options
    ///
    /// # Example
    /// ```
    /// use fakegen_core_rs::{record, Faker};
    ///
    /// record! {
    ///     pub struct Customer {
    ///         pub name: String,
    ///         pub email: String,
    ///         pub id: String,
    ///     }
    /// }
    ///
    /// let mut f1 = Faker::with_seed(12345);
    /// let mut c1 = Customer::default();
    /// f1.record().fill(&mut c1).unwrap();
    ///
    /// let mut f2 = Faker::with_seed(12345);
    /// let mut c2 = Customer::default();
    /// f2.record().fill(&mut c2).unwrap();
    ///
    /// assert_eq!(c1, c2);
    /// ```
    pub fn fill<R: Record>(&mut self, target: &mut R) -> Result<(), FillError> {
        self.fill_with(target, &FillOptions::default())
    }

    /// Fill every supported field of `target`, honoring `options`
    ///
    /// Runs a probe pass over the schema first (no draws, no writes) to
    /// validate the repeat overrides and bound recursion. A failed fill
    /// therefore perturbs neither the target nor the random stream.
    pub fn fill_with<R: Record>(
        &mut self,
        target: &mut R,
        options: &FillOptions,
    ) -> Result<(), FillError> {
        let mut probe = FieldVisitor::new(&mut *self.rng, options, R::NAME, true);
        target.visit_fields(&mut probe)?;
        let seq_paths = probe.into_seq_paths();

        for path in options.paths() {
            if !seq_paths.contains(path) {
                return Err(FillError::UnknownSequencePath {
                    record: R::NAME,
                    path: path.to_string(),
                });
            }
        }

        tracing::trace!(record = R::NAME, "filling record");
        let mut visitor = FieldVisitor::new(&mut *self.rng, options, R::NAME, false);
        target.visit_fields(&mut visitor)
    }
}
