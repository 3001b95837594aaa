//! Behaviour policies loaded from TOML

use crate::common::{ints, item, registry};
use kollect::{
    AddAllMode, ChunkConstraint, CollectionPolicy, ContainerKind, TypedContainer, Value, ZipMode,
};

fn policy(toml: &str) -> CollectionPolicy {
    CollectionPolicy::from_toml_str(toml).unwrap()
}

#[test]
fn test_default_toml_matches_default_policy() {
    assert_eq!(policy(CollectionPolicy::default_toml()), CollectionPolicy::default());
    assert_eq!(policy(""), CollectionPolicy::default());
}

#[test]
fn test_policy_survives_toml_round_trip() {
    let original = CollectionPolicy::default()
        .with_add_all(AddAllMode::Atomic)
        .with_zip(ZipMode::Positional)
        .with_chunk_constraint(ChunkConstraint::Factory);
    let text = original.to_toml_string().unwrap();
    assert_eq!(policy(&text), original);
}

#[test]
fn test_bad_policy_text_is_config_error() {
    for text in ["zip = \"sideways\"", "unknown_key = 1", "add_all = "] {
        let err = CollectionPolicy::from_toml_str(text).unwrap_err();
        assert!(matches!(err, kollect::Error::Config(_)), "{}", text);
    }
}

#[test]
fn test_atomic_add_all_appends_nothing_on_failure() {
    let mut container = TypedContainer::integers().with_policy(policy("add_all = \"atomic\""));
    container.add(0).unwrap();

    let result = container.add_all(vec![Value::Int(1), Value::Int(2), Value::from("bad")]);
    assert!(result.is_err());
    assert_eq!(container.count(), 1);
}

#[test]
fn test_positional_zip_ignores_gaps() {
    let mut left = ints(&[1, 2, 3, 4]).with_policy(policy("zip = \"positional\""));
    left.filter(|v| v.as_int() != Some(2));
    let right = ints(&[10, 20, 30]);

    let paired = left.zip(&right).unwrap();
    let lefts: Vec<i64> = paired.iter().filter_map(|p| p.left().as_int()).collect();
    assert_eq!(lefts, vec![1, 3, 4]);

    let mut prefix_left = ints(&[1, 2, 3, 4]);
    prefix_left.filter(|v| v.as_int() != Some(2));
    assert_eq!(prefix_left.zip(&right).unwrap().count(), 1);
}

#[test]
fn test_factory_chunks_re_infer_constraint() {
    let registry = registry();
    let shape = registry.resolve("Shape").unwrap();
    let mut shapes = TypedContainer::objects(&shape)
        .with_policy(policy("chunk_constraint = \"factory\""));
    shapes.add(item(&registry, "Square", 1)).unwrap();
    shapes.add(item(&registry, "Polygon", 2)).unwrap();

    let chunks = shapes.chunk(1, true).unwrap();
    assert_eq!(chunks[0].kind(), ContainerKind::Object);
    assert_eq!(chunks[0].constraint().to_string(), "Square");
    assert_eq!(chunks[1].constraint().to_string(), "Polygon");
    assert!(chunks[1].exists(1));

    let inherited = TypedContainer::objects(&shape);
    assert_eq!(inherited.policy().chunk_constraint, ChunkConstraint::Inherit);
}
