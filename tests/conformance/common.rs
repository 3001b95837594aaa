//! Shared helpers for conformance tests

use kollect::{Instance, TypeRegistry, TypedContainer, Value};

/// Install a test-writer subscriber once per process
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing_subscriber::filter::LevelFilter::DEBUG)
        .try_init();
}

/// Registry with `TestItem`, `TestItem2`, and a small shape hierarchy
pub fn registry() -> TypeRegistry {
    let mut registry = TypeRegistry::new();
    registry.define_class("TestItem", None, &[]).unwrap();
    registry.define_class("TestItem2", None, &[]).unwrap();
    registry.define_interface("Shape", &[]).unwrap();
    registry.define_class("Polygon", None, &["Shape"]).unwrap();
    registry.define_class("Square", Some("Polygon"), &[]).unwrap();
    registry
}

/// Instance of `class` with integer field `a`
pub fn item(registry: &TypeRegistry, class: &str, a: i64) -> Value {
    let class = registry.resolve(class).unwrap();
    Instance::new(&class).unwrap().with_field("a", a).into()
}

/// Read back field `a`
pub fn field_a(value: &Value) -> i64 {
    value
        .as_instance()
        .and_then(|instance| instance.field("a"))
        .and_then(Value::as_int)
        .unwrap()
}

/// Integer container holding `values`
pub fn ints(values: &[i64]) -> TypedContainer {
    let mut container = TypedContainer::integers();
    container.add_all(values.iter().copied()).unwrap();
    container
}
