//! record! - struct declaration plus generated Record impl
//!
//! Declarative stand-in for the reflective field walk: the macro sees the
//! declared field list once, at compile time, and writes the
//! `visit_fields` body in the same order. Field kinds are recognized from
//! the literal type token:
//!
//! - `String`, `i64`, `i32`, `u64`, `u32`, `usize`, `f64`, `f32`, `bool`:
//!   scalar fill
//! - `Vec<String>`, `Vec<i64>`, `Vec<f64>`, `Vec<bool>`: scalar sequence
//! - `Vec<SomeRecord>`: sequence of nested records
//! - any other single-identifier type: nested record (a compile error if
//!   the type does not implement `Record`)
//! - anything else (`Option<_>`, maps, tuples, arrays, path-qualified
//!   types): silently skipped; the field keeps its prior value
//!
//! Types must be written as bare names (`Address`, not `crate::Address`);
//! a path-qualified type lands in the skip arm.

/// Declare a fillable record struct
///
/// Emits the struct (deriving `Debug`, `Clone`, `Default`, `PartialEq`)
/// and its [`Record`](crate::Record) impl.
///
/// # Example
/// ```
/// use fakegen_core_rs::{record, Faker, FillOptions};
///
/// record! {
///     pub struct Address {
///         pub street: String,
///         pub zip: String,
///     }
/// }
///
/// record! {
///     pub struct Order {
///         pub id: String,
///         pub quantity: i64,
///         pub shipping: Address,
///         pub tags: Vec<String>,
///     }
/// }
///
/// let mut f = Faker::with_seed(7);
/// let mut order = Order::default();
/// f.record()
///     .fill_with(&mut order, &FillOptions::new().repeat("tags", 2))
///     .unwrap();
///
/// assert!(!order.shipping.street.is_empty());
/// assert_eq!(order.tags.len(), 2);
/// ```
#[macro_export]
macro_rules! record {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $($body:tt)*
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq)]
        $vis struct $name {
            $($body)*
        }

        impl $crate::Record for $name {
            const NAME: &'static str = stringify!($name);

            #[allow(unused_variables)]
            fn visit_fields(
                &mut self,
                v: &mut $crate::FieldVisitor<'_>,
            ) -> ::core::result::Result<(), $crate::FillError> {
                let this = self;
                $crate::__record_fields!(this, v, $($body)*);
                ::core::result::Result::Ok(())
            }
        }
    };
}

/// Field muncher behind [`record!`]. One arm per recognized type token;
/// literal arms are tried before the catch-alls, so order matters.
#[doc(hidden)]
#[macro_export]
macro_rules! __record_fields {
    ($this:ident, $v:ident $(,)?) => {};

    ($this:ident, $v:ident, $(#[$m:meta])* $fvis:vis $f:ident : String $(, $($rest:tt)*)?) => {
        $v.text(stringify!($f), &mut $this.$f);
        $crate::__record_fields!($this, $v $(, $($rest)*)?);
    };
    ($this:ident, $v:ident, $(#[$m:meta])* $fvis:vis $f:ident : i64 $(, $($rest:tt)*)?) => {
        $v.int_i64(stringify!($f), &mut $this.$f);
        $crate::__record_fields!($this, $v $(, $($rest)*)?);
    };
    ($this:ident, $v:ident, $(#[$m:meta])* $fvis:vis $f:ident : i32 $(, $($rest:tt)*)?) => {
        $v.int_i32(stringify!($f), &mut $this.$f);
        $crate::__record_fields!($this, $v $(, $($rest)*)?);
    };
    ($this:ident, $v:ident, $(#[$m:meta])* $fvis:vis $f:ident : u64 $(, $($rest:tt)*)?) => {
        $v.int_u64(stringify!($f), &mut $this.$f);
        $crate::__record_fields!($this, $v $(, $($rest)*)?);
    };
    ($this:ident, $v:ident, $(#[$m:meta])* $fvis:vis $f:ident : u32 $(, $($rest:tt)*)?) => {
        $v.int_u32(stringify!($f), &mut $this.$f);
        $crate::__record_fields!($this, $v $(, $($rest)*)?);
    };
    ($this:ident, $v:ident, $(#[$m:meta])* $fvis:vis $f:ident : usize $(, $($rest:tt)*)?) => {
        $v.int_usize(stringify!($f), &mut $this.$f);
        $crate::__record_fields!($this, $v $(, $($rest)*)?);
    };
    ($this:ident, $v:ident, $(#[$m:meta])* $fvis:vis $f:ident : f64 $(, $($rest:tt)*)?) => {
        $v.float_f64(stringify!($f), &mut $this.$f);
        $crate::__record_fields!($this, $v $(, $($rest)*)?);
    };
    ($this:ident, $v:ident, $(#[$m:meta])* $fvis:vis $f:ident : f32 $(, $($rest:tt)*)?) => {
        $v.float_f32(stringify!($f), &mut $this.$f);
        $crate::__record_fields!($this, $v $(, $($rest)*)?);
    };
    ($this:ident, $v:ident, $(#[$m:meta])* $fvis:vis $f:ident : bool $(, $($rest:tt)*)?) => {
        $v.boolean(stringify!($f), &mut $this.$f);
        $crate::__record_fields!($this, $v $(, $($rest)*)?);
    };

    ($this:ident, $v:ident, $(#[$m:meta])* $fvis:vis $f:ident : Vec<String> $(, $($rest:tt)*)?) => {
        $v.text_seq(stringify!($f), &mut $this.$f);
        $crate::__record_fields!($this, $v $(, $($rest)*)?);
    };
    ($this:ident, $v:ident, $(#[$m:meta])* $fvis:vis $f:ident : Vec<i64> $(, $($rest:tt)*)?) => {
        $v.int_seq(stringify!($f), &mut $this.$f);
        $crate::__record_fields!($this, $v $(, $($rest)*)?);
    };
    ($this:ident, $v:ident, $(#[$m:meta])* $fvis:vis $f:ident : Vec<f64> $(, $($rest:tt)*)?) => {
        $v.float_seq(stringify!($f), &mut $this.$f);
        $crate::__record_fields!($this, $v $(, $($rest)*)?);
    };
    ($this:ident, $v:ident, $(#[$m:meta])* $fvis:vis $f:ident : Vec<bool> $(, $($rest:tt)*)?) => {
        $v.bool_seq(stringify!($f), &mut $this.$f);
        $crate::__record_fields!($this, $v $(, $($rest)*)?);
    };

    // Sequence of nested records.
    ($this:ident, $v:ident, $(#[$m:meta])* $fvis:vis $f:ident : Vec<$elem:ident> $(, $($rest:tt)*)?) => {
        $v.nested_seq(stringify!($f), &mut $this.$f)?;
        $crate::__record_fields!($this, $v $(, $($rest)*)?);
    };

    // Any other single-identifier type is a nested record.
    ($this:ident, $v:ident, $(#[$m:meta])* $fvis:vis $f:ident : $fty:ident $(, $($rest:tt)*)?) => {
        $v.nested(stringify!($f), &mut $this.$f)?;
        $crate::__record_fields!($this, $v $(, $($rest)*)?);
    };

    // Everything else is an unsupported kind: left untouched.
    ($this:ident, $v:ident, $(#[$m:meta])* $fvis:vis $f:ident : $fty:ty $(, $($rest:tt)*)?) => {
        $v.skip(stringify!($f));
        $crate::__record_fields!($this, $v $(, $($rest)*)?);
    };
}
