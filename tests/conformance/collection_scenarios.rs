//! End-to-end usage with registered classes

use crate::common::{field_a, init_tracing, item, registry};
use kollect::{Collection, ContainerKind, Instance, TypeConstraint, TypedContainer, Value};

// ============================================================================
// Ownership
// ============================================================================

#[test]
fn test_clone_is_independent() {
    let registry = registry();
    let class = registry.resolve("TestItem").unwrap();
    let mut original = TypedContainer::objects(&class);
    original.add(item(&registry, "TestItem", 1)).unwrap();

    let mut copy = original.clone();
    copy.add(item(&registry, "TestItem", 2)).unwrap();
    copy.map(|value| match value {
        Value::Instance(instance) => {
            let a = instance.field("a").and_then(Value::as_int).unwrap_or(0);
            Value::from(instance.with_field("a", a * 100))
        }
        other => other,
    });

    assert_eq!(original.count(), 1);
    assert_eq!(field_a(original.get(0).unwrap()), 1);
    assert_eq!(field_a(copy.get(0).unwrap()), 100);
    assert_eq!(copy.count(), 2);
}

// ============================================================================
// Construction
// ============================================================================

#[test]
fn test_unknown_type_name_is_construction_error() {
    let registry = registry();
    let err = registry.constraint("NoSuchClass").unwrap_err();
    assert!(err.is_construction());
}

#[test]
fn test_type_names_resolve_to_constraints() {
    let registry = registry();
    assert!(registry.constraint("mixed").unwrap().is_any());
    assert_eq!(registry.constraint("int").unwrap().to_string(), "int");
    assert_eq!(registry.constraint("TestItem").unwrap().to_string(), "TestItem");
}

#[test]
fn test_object_container_requires_class() {
    let err = ContainerKind::Object
        .construct(TypeConstraint::Any)
        .unwrap_err();
    assert!(err.is_construction());

    let err = ContainerKind::Object
        .from_items(Vec::<Value>::new(), None)
        .unwrap_err();
    assert!(err.is_construction());
}

#[test]
fn test_factory_infers_class_from_first_item() {
    let registry = registry();
    let items = vec![item(&registry, "TestItem", 1), item(&registry, "TestItem", 2)];
    let mut container = ContainerKind::Object.from_items(items, None).unwrap();

    assert_eq!(container.kind(), ContainerKind::Object);
    assert_eq!(container.constraint().to_string(), "TestItem");
    assert!(container.add(item(&registry, "TestItem2", 3)).is_err());
}

#[test]
fn test_generic_factory_without_instances_accepts_anything() {
    let container = TypedContainer::from_items(vec![Value::Int(1), Value::from("a")], None).unwrap();
    assert!(container.constraint().is_any());
    assert_eq!(container.count(), 2);
}

// ============================================================================
// Combinator walkthrough
// ============================================================================

#[test]
fn test_filter_chain_and_chunk_of_strings() {
    init_tracing();
    let mut words = TypedContainer::strings();
    words
        .add_all(["a", "bb", "c", "dd", "e", "ff", "g", "hh", "i", "jj"])
        .unwrap();

    let groups = words.chunk(2, false).unwrap();
    assert_eq!(groups.len(), 5);
    let flattened: Vec<String> = groups
        .iter()
        .flat_map(|group| group.iter().filter_map(|v| v.as_str().map(str::to_owned)).collect::<Vec<_>>())
        .collect();
    assert_eq!(flattened, vec!["a", "bb", "c", "dd", "e", "ff", "g", "hh", "i", "jj"]);

    words.filter(|v| v.as_str().map_or(false, |s| s.len() == 2));
    assert_eq!(words.positions().collect::<Vec<_>>(), vec![1, 3, 5, 7, 9]);

    let mut tail = TypedContainer::strings();
    tail.add("kk").unwrap();
    words.chain(&tail).unwrap();
    assert_eq!(words.get(10), Some(&Value::from("kk")));
}

#[test]
fn test_reduce_fold_and_find_over_objects() {
    let registry = registry();
    let class = registry.resolve("TestItem").unwrap();
    let mut container = TypedContainer::objects(&class);
    for a in [3, 9, 4] {
        container
            .add(Instance::new(&class).unwrap().with_field("a", a))
            .unwrap();
    }

    let total = container.fold(0, |acc, value| acc + field_a(value));
    assert_eq!(total, 16);

    let largest = container
        .reduce(|best, value| if field_a(value) > field_a(&best) { value.clone() } else { best })
        .unwrap();
    assert_eq!(field_a(&largest), 9);

    assert_eq!(container.find(|v| field_a(v) > 3).map(field_a), Some(9));
}

#[test]
fn test_paired_provenance_serializes_to_json() {
    let registry = registry();
    let class = registry.resolve("TestItem").unwrap();
    let mut items = TypedContainer::objects(&class);
    items.add(item(&registry, "TestItem", 7)).unwrap();
    let mut counts = TypedContainer::integers();
    counts.add(1).unwrap();

    let paired = items.zip(&counts).unwrap();
    let json = serde_json::to_value(paired.provenance()).unwrap();
    assert_eq!(json["left"]["kind"], "Object");
    assert_eq!(json["right"]["kind"], "Integer");
    assert_eq!(json["right"]["constraint"]["Primitive"], "Integer");

    let pair = serde_json::to_value(paired.get(0).unwrap()).unwrap();
    assert_eq!(pair["right"]["Int"], 1);
}

// ============================================================================
// Compile-time collection
// ============================================================================

#[test]
fn test_generic_collection_zip_and_unzip() {
    let names: Collection<&str> = ["ada", "grace", "barbara"].into_iter().collect();
    let years: Collection<u32> = [1815, 1906].into_iter().collect();

    let paired = names.zip(&years);
    assert_eq!(paired.len(), 2);

    let (left, right) = paired.unzip();
    assert_eq!(left.iter().copied().collect::<Vec<_>>(), vec!["ada", "grace"]);
    assert_eq!(right.iter().copied().collect::<Vec<_>>(), vec![1815, 1906]);
}
