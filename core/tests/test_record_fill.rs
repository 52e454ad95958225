//! Tests for the record population engine
//!
//! Covers the determinism law, struct-fill completeness, the
//! sequence-length law, nested recursion, silent skips and the
//! invalid-target failures.

use fakegen_core_rs::{record, Faker, FillError, FillOptions, MAX_FILL_DEPTH};

record! {
    pub struct Customer {
        pub name: String,
        pub email: String,
        pub id: String,
    }
}

record! {
    pub struct ComplexRecord {
        pub string_field1: String,
        pub string_field2: String,
        pub int_field: i64,
        pub float_field: f64,
        pub bool_field: bool,
        pub string_array: Vec<String>,
    }
}

record! {
    pub struct Address {
        pub street: String,
        pub zip: String,
        pub lines: Vec<String>,
    }
}

record! {
    pub struct Order {
        pub id: String,
        pub quantity: i64,
        pub shipping: Address,
        pub items: Vec<Address>,
    }
}

record! {
    pub struct WithUnsupported {
        pub label: String,
        pub notes: Option<String>,
        pub lookup: std::collections::HashMap<String, i64>,
        pub count: u32,
    }
}

record! {
    pub struct Tree {
        pub label: String,
        pub children: Vec<Tree>,
    }
}

#[test]
fn test_determinism_simple_record() {
    let seed = 12345;

    let mut f1 = Faker::with_seed(seed);
    let mut c1 = Customer::default();
    f1.record().fill(&mut c1).unwrap();

    let mut f2 = Faker::with_seed(seed);
    let mut c2 = Customer::default();
    f2.record().fill(&mut c2).unwrap();

    assert_eq!(c1.name, c2.name, "Expected same name");
    assert_eq!(c1.email, c2.email, "Expected same email");
    assert_eq!(c1.id, c2.id, "Expected same id");
}

#[test]
fn test_determinism_with_multiple_field_kinds() {
    let seed = 98765;

    let mut f1 = Faker::with_seed(seed);
    let mut r1 = ComplexRecord::default();
    f1.record().fill(&mut r1).unwrap();

    let mut f2 = Faker::with_seed(seed);
    let mut r2 = ComplexRecord::default();
    f2.record().fill(&mut r2).unwrap();

    assert_eq!(r1, r2);
}

#[test]
fn test_fill_completeness_scalar_fields() {
    let mut f = Faker::with_seed(777);
    let mut r = ComplexRecord::default();
    f.record().fill(&mut r).unwrap();

    assert!(!r.string_field1.is_empty());
    assert!(!r.string_field2.is_empty());
    assert!((0..=999_999).contains(&r.int_field));
    assert!((0.0..1000.0).contains(&r.float_field));
    assert_eq!(r.string_array.len(), 3, "default repeat is 3");
    assert!(r.string_array.iter().all(|w| !w.is_empty()));
}

#[test]
fn test_sequence_length_law() {
    let mut f = Faker::with_seed(1);
    let mut r = ComplexRecord::default();
    let options = FillOptions::new().repeat("string_array", 7);
    f.record().fill_with(&mut r, &options).unwrap();
    assert_eq!(r.string_array.len(), 7);

    let mut r = ComplexRecord::default();
    let options = FillOptions::new().repeat("string_array", 0);
    f.record().fill_with(&mut r, &options).unwrap();
    assert!(r.string_array.is_empty());
}

#[test]
fn test_default_repeat_override() {
    let mut f = Faker::with_seed(1);
    let mut r = ComplexRecord::default();
    let options = FillOptions::new().default_repeat(5);
    f.record().fill_with(&mut r, &options).unwrap();
    assert_eq!(r.string_array.len(), 5);
}

#[test]
fn test_nested_record_fill() {
    let mut f = Faker::with_seed(2020);
    let mut order = Order::default();
    f.record().fill(&mut order).unwrap();

    assert!(!order.id.is_empty());
    assert!(!order.shipping.street.is_empty());
    assert!(!order.shipping.zip.is_empty());
    assert_eq!(order.shipping.lines.len(), 3);
    assert_eq!(order.items.len(), 3);
    for item in &order.items {
        assert!(!item.street.is_empty());
        assert_eq!(item.lines.len(), 3);
    }
}

#[test]
fn test_nested_paths_address_separately() {
    let mut f = Faker::with_seed(2020);
    let mut order = Order::default();
    let options = FillOptions::new()
        .repeat("shipping.lines", 1)
        .repeat("items", 2)
        .repeat("items.lines", 4);
    f.record().fill_with(&mut order, &options).unwrap();

    assert_eq!(order.shipping.lines.len(), 1);
    assert_eq!(order.items.len(), 2);
    for item in &order.items {
        assert_eq!(item.lines.len(), 4);
    }
}

#[test]
fn test_nested_determinism() {
    let mut f1 = Faker::with_seed(606);
    let mut o1 = Order::default();
    f1.record().fill(&mut o1).unwrap();

    let mut f2 = Faker::with_seed(606);
    let mut o2 = Order::default();
    f2.record().fill(&mut o2).unwrap();

    assert_eq!(o1, o2);
}

#[test]
fn test_unsupported_fields_left_untouched() {
    let mut f = Faker::with_seed(33);
    let mut r = WithUnsupported {
        notes: Some("keep me".to_string()),
        ..Default::default()
    };
    r.lookup.insert("existing".to_string(), 1);

    f.record().fill(&mut r).unwrap();

    // Supported fields were filled...
    assert!(!r.label.is_empty());
    // ...unsupported ones kept their prior values, silently.
    assert_eq!(r.notes.as_deref(), Some("keep me"));
    assert_eq!(r.lookup.len(), 1);
}

#[test]
fn test_unknown_option_path_is_invalid_target() {
    let mut f = Faker::with_seed(9);
    let mut r = ComplexRecord::default();
    let options = FillOptions::new().repeat("no_such_field", 4);

    let err = f.record().fill_with(&mut r, &options).unwrap_err();
    assert_eq!(
        err,
        FillError::UnknownSequencePath {
            record: "ComplexRecord",
            path: "no_such_field".to_string(),
        }
    );
}

#[test]
fn test_scalar_path_is_not_a_sequence() {
    // Overrides only apply to sequence fields; naming a scalar is the same
    // target/config mismatch as naming a missing field.
    let mut f = Faker::with_seed(9);
    let mut r = ComplexRecord::default();
    let options = FillOptions::new().repeat("int_field", 4);

    assert!(matches!(
        f.record().fill_with(&mut r, &options),
        Err(FillError::UnknownSequencePath { .. })
    ));
}

#[test]
fn test_failed_fill_is_total() {
    // A rejected fill must leave both the target and the stream untouched.
    let mut f = Faker::with_seed(4321);
    let mut r = ComplexRecord::default();
    let options = FillOptions::new().repeat("bogus", 1);
    assert!(f.record().fill_with(&mut r, &options).is_err());

    assert_eq!(r, ComplexRecord::default(), "target was mutated");

    // Stream position unchanged: next draw matches a fresh faker's first.
    let mut fresh = Faker::with_seed(4321);
    assert_eq!(f.uuid().v4(), fresh.uuid().v4(), "stream was consumed");
}

#[test]
fn test_self_recursive_record_rejected() {
    let mut f = Faker::with_seed(55);
    let mut tree = Tree::default();

    let err = f.record().fill(&mut tree).unwrap_err();
    assert!(matches!(
        err,
        FillError::DepthLimitExceeded { record: "Tree", max: MAX_FILL_DEPTH, .. }
    ));

    // Immediate and total: nothing was filled.
    assert_eq!(tree, Tree::default());
}

#[test]
fn test_fill_advances_the_shared_stream() {
    // Two fills from one faker continue one stream; they must not repeat.
    let mut f = Faker::with_seed(808);
    let mut first = ComplexRecord::default();
    let mut second = ComplexRecord::default();
    f.record().fill(&mut first).unwrap();
    f.record().fill(&mut second).unwrap();

    assert_ne!(first, second, "stream should advance between fills");
}
