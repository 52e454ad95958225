//! Fakegen Core - Deterministic Synthetic-Data Engine
//!
//! Seeded generation of reproducible fake values (UUIDs, names, numbers,
//! strings) and recursive population of record types for tests and
//! fixtures.
//!
//! # Architecture
//!
//! - **rng**: deterministic random number generation (one stream per faker)
//! - **faker**: the generator owning the stream, with per-facet accessors
//! - **fakers**: primitive value facets (UUID, number, lorem, person, ...)
//! - **record**: the population engine for composite types
//! - **snapshot**: serializable stream state for pause/resume
//!
//! # Critical Invariants
//!
//! 1. All randomness flows through one `RandomSource` per faker
//! 2. Same seed + same call sequence → identical output, regardless of
//!    which facet issues each draw
//! 3. A faker is single-threaded by construction: facets borrow the
//!    source mutably
//!
//! # Example
//!
//! ```
//! use fakegen_core_rs::{record, Faker};
//!
//! record! {
//!     pub struct Customer {
//!         pub name: String,
//!         pub email: String,
//!         pub id: String,
//!     }
//! }
//!
//! let mut faker = Faker::with_seed(12345);
//! let mut customer = Customer::default();
//! faker.record().fill(&mut customer).unwrap();
//! assert!(!customer.name.is_empty());
//! ```

// Module declarations
pub mod faker;
pub mod fakers;
pub mod record;
pub mod rng;
pub mod snapshot;

// Re-exports for convenience
pub use faker::Faker;
pub use fakers::{
    boolean::BooleanFaker, internet::InternetFaker, lorem::LoremFaker, number::NumberFaker,
    person::PersonFaker, uuid::UuidFaker,
};
pub use record::{
    FieldVisitor, FillError, FillOptions, Record, RecordFaker, DEFAULT_REPEAT, MAX_FILL_DEPTH,
};
pub use rng::RandomSource;
pub use snapshot::{FakerSnapshot, SnapshotError};
