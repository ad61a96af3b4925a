//! Tests for the binding registry

use std::any::TypeId;

use dix_infrastructure::di::BindingRegistry;

#[derive(Debug, Clone, PartialEq)]
struct Settings {
    url: String,
}

#[test]
fn test_lookup_returns_owned_copy() {
    let registry = BindingRegistry::new();
    registry.insert(
        Settings {
            url: "postgres://db".to_string(),
        },
        &["def"],
    );

    let mut first = registry
        .lookup(TypeId::of::<Settings>(), "def")
        .and_then(|v| v.downcast::<Settings>().ok())
        .expect("bound");
    first.url.push_str("/mutated");

    let second = registry
        .lookup(TypeId::of::<Settings>(), "def")
        .and_then(|v| v.downcast::<Settings>().ok())
        .expect("bound");
    assert_eq!(second.url, "postgres://db");
}

#[test]
fn test_namespaces_are_isolated() {
    let registry = BindingRegistry::new();
    registry.insert(100_i64, &["int100"]);

    assert!(registry.contains(TypeId::of::<i64>(), "int100"));
    assert!(!registry.contains(TypeId::of::<i64>(), "def"));
    assert!(registry.lookup(TypeId::of::<i64>(), "def").is_none());
}

#[test]
fn test_rebinding_overwrites() {
    let registry = BindingRegistry::new();
    registry.insert(1_u32, &["def"]);
    registry.insert(2_u32, &["def"]);

    let value = registry
        .lookup(TypeId::of::<u32>(), "def")
        .and_then(|v| v.downcast::<u32>().ok());
    assert_eq!(value.map(|v| *v), Some(2));
    assert_eq!(registry.len(), 1);
}

#[test]
fn test_multiple_namespaces_in_one_call() {
    let registry = BindingRegistry::new();
    registry.insert("shared".to_string(), &["b", "a"]);

    assert_eq!(registry.namespaces_of(TypeId::of::<String>()), ["a", "b"]);
    assert_eq!(registry.len(), 2);
    assert!(!registry.is_empty());
}

#[test]
fn test_types_are_keyed_separately() {
    let registry = BindingRegistry::new();
    registry.insert(5_i32, &["def"]);

    assert!(registry.lookup(TypeId::of::<i64>(), "def").is_none());
    let entry = registry.entry(TypeId::of::<i32>(), "def").expect("bound");
    assert_eq!(entry.type_name(), "i32");
}
