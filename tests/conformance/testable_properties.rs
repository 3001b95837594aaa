//! Observable guarantees of typed containers and the pairing engine

use crate::common::{init_tracing, ints, item, registry};
use kollect::{Instance, Operation, PrimitiveKind, TypeConstraint, TypedContainer, Value};

// ============================================================================
// Constraint checks
// ============================================================================

#[test]
fn test_any_constraint_accepts_every_kind_of_value() {
    let registry = registry();
    let container = TypedContainer::new(TypeConstraint::Any);
    let values = vec![
        Value::Null,
        Value::Bool(true),
        Value::Int(-3),
        Value::Float(1.5),
        Value::from("text"),
        Value::Bytes(vec![0, 1, 2]),
        item(&registry, "TestItem", 1),
        Value::Array(vec![Value::Int(1)]),
    ];
    for value in &values {
        assert!(container.check_type(value), "rejected {:?}", value);
    }
}

#[test]
fn test_add_fails_without_changing_count() {
    init_tracing();
    let mut container = TypedContainer::integers();
    container.add(5).unwrap();
    assert_eq!(container.count(), 1);

    let err = container.add("5").unwrap_err();
    assert!(err.is_invalid_type());
    assert_eq!(container.count(), 1);
    assert_eq!(container.get(0), Some(&Value::Int(5)));
}

#[test]
fn test_check_type_for_primitive_kinds() {
    let cases = [
        (PrimitiveKind::Integer, Value::Int(1), true),
        (PrimitiveKind::Integer, Value::Float(1.0), false),
        (PrimitiveKind::Float, Value::Float(1.0), true),
        (PrimitiveKind::String, Value::from("1"), true),
        (PrimitiveKind::String, Value::Int(1), false),
        (PrimitiveKind::Bool, Value::Bool(false), true),
        (PrimitiveKind::Bytes, Value::Bytes(vec![1]), true),
    ];
    for (kind, value, expected) in cases {
        let container = TypedContainer::new(kind.into());
        assert_eq!(container.check_type(&value), expected, "{} vs {:?}", kind, value);
    }
}

#[test]
fn test_nominal_constraint_accepts_subclasses_and_implementors() {
    let registry = registry();
    let shape = registry.resolve("Shape").unwrap();
    let polygon = registry.resolve("Polygon").unwrap();
    let mut shapes = TypedContainer::objects(&shape);
    let mut polygons = TypedContainer::objects(&polygon);

    let square = Value::from(Instance::new(&registry.resolve("Square").unwrap()).unwrap());
    shapes.add(square.clone()).unwrap();
    polygons.add(square).unwrap();
    assert!(shapes.add(item(&registry, "TestItem", 1)).is_err());
}

// ============================================================================
// Bulk append
// ============================================================================

#[test]
fn test_add_all_keeps_items_before_failure() {
    let mut container = TypedContainer::integers();
    let err = container
        .add_all(vec![Value::Int(1), Value::Int(2), Value::from("bad")])
        .unwrap_err();

    match err {
        kollect::Error::InvalidType { operation, .. } => assert_eq!(operation, Operation::AddAll),
        e => panic!("unexpected error: {}", e),
    }
    assert_eq!(container.count(), 2);
}

// ============================================================================
// Chain
// ============================================================================

#[test]
fn test_chain_appends_when_constraints_equal() {
    let mut a = ints(&[1, 2]);
    let b = ints(&[3, 4]);
    a.chain(&b).unwrap();
    assert_eq!(a.values(), ints(&[1, 2, 3, 4]).values());
    assert_eq!(b.count(), 2);
}

#[test]
fn test_chain_rejects_subtype_constraint() {
    let registry = registry();
    let mut polygons = TypedContainer::objects(&registry.resolve("Polygon").unwrap());
    let squares = TypedContainer::objects(&registry.resolve("Square").unwrap());

    let err = polygons.chain(&squares).unwrap_err();
    assert!(err.is_invalid_type());
    assert_eq!(err.side(), Some(kollect::Side::Right));
}

#[test]
fn test_chain_rejects_mismatched_primitives() {
    let mut a = ints(&[1]);
    let err = a.chain(&TypedContainer::strings()).unwrap_err();
    assert!(err.to_string().contains("chain"));
    assert_eq!(a.count(), 1);
}

// ============================================================================
// Zip
// ============================================================================

#[test]
fn test_zip_takes_shorter_length_in_order() {
    let a = ints(&[1, 2, 3, 4]);
    let b = ints(&[10, 20, 30]);
    let paired = a.zip(&b).unwrap();

    assert_eq!(paired.count(), 3);
    let pairs: Vec<(i64, i64)> = paired
        .iter()
        .map(|pair| (pair.left().as_int().unwrap(), pair.right().as_int().unwrap()))
        .collect();
    assert_eq!(pairs, vec![(1, 10), (2, 20), (3, 30)]);
}

#[test]
fn test_unpair_reproduces_sources() {
    let a = ints(&[1, 2, 3]);
    let mut b = TypedContainer::strings();
    b.add_all(["x", "y", "z"]).unwrap();

    let (left, right) = a.zip(&b).unwrap().unpair().unwrap();
    assert_eq!(left, a);
    assert_eq!(right, b);
}

#[test]
fn test_rezip_after_map_violation_fails() {
    init_tracing();
    let mut a = ints(&[1, 2, 3]);
    let b = ints(&[4, 5, 6]);
    assert_eq!(a.zip(&b).unwrap().count(), 3);

    a.map(|value| if value == Value::Int(2) { Value::from("two") } else { value });
    assert_eq!(a.violations(), 1);

    let err = a.zip(&b).unwrap_err();
    assert!(err.is_invalid_type());
    assert_eq!(err.side(), Some(kollect::Side::Left));
}

// ============================================================================
// Partition, chunk, predicates
// ============================================================================

#[test]
fn test_partition_of_six_conserves_count_and_order() {
    let container = ints(&[1, 2, 3, 4, 5, 6]);
    let (small, large) = container.partition(|v| v.as_int().unwrap() <= 2 || v.as_int() == Some(5));

    assert_eq!(small.count() + large.count(), 6);
    assert_eq!(small.values(), ints(&[1, 2, 5]).values());
    assert_eq!(large.values(), ints(&[3, 4, 6]).values());
    assert_eq!(container.count(), 6);
}

#[test]
fn test_chunk_ten_into_five_pairs() {
    let values: Vec<i64> = (0..10).collect();
    let chunks = ints(&values).chunk(2, false).unwrap();

    assert_eq!(chunks.len(), 5);
    for (i, chunk) in chunks.iter().enumerate() {
        assert_eq!(chunk.count(), 2);
        assert_eq!(chunk.constraint(), &TypeConstraint::Primitive(PrimitiveKind::Integer));
        let expected = [i as i64 * 2, i as i64 * 2 + 1];
        assert_eq!(chunk.values(), ints(&expected).values());
    }
}

#[test]
fn test_chunk_size_zero_is_invalid() {
    let err = ints(&[1]).chunk(0, false).unwrap_err();
    assert!(matches!(err, kollect::Error::InvalidArgument(_)));
}

#[test]
fn test_all_and_any_on_empty_container() {
    let empty = TypedContainer::integers();
    assert!(empty.all(|_| false));
    assert!(!empty.any(|_| true));
}
