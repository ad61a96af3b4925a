//! Tests for the type field cache

use std::any::TypeId;
use std::sync::Arc;

use dix_domain::{Resolvable, record};
use dix_infrastructure::di::FieldCache;

record! {
    struct Service {
        name: String => "from:?",
        workers: usize => "from:?;namespace:workers",
        note: String,
    }
}

#[test]
fn test_fields_memoized_per_type() {
    let cache = FieldCache::new();
    let mut service = Service::zero();

    let first = cache.fields_of(&service.as_record().expect("record"));
    let second = cache.fields_of(&service.as_record().expect("record"));

    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(cache.len(), 1);
    assert!(cache.contains(TypeId::of::<Service>()));
}

#[test]
fn test_fields_in_declaration_order() {
    let cache = FieldCache::new();
    let mut service = Service::zero();
    let fields = cache.fields_of(&service.as_record().expect("record"));

    let names: Vec<&str> = fields.iter().map(|f| f.name()).collect();
    assert_eq!(names, ["name", "workers", "note"]);
    assert_eq!(fields[1].hint(), Some("from:?;namespace:workers"));
}

#[test]
fn test_clear_empties_cache() {
    let cache = FieldCache::new();
    let mut service = Service::zero();
    cache.fields_of(&service.as_record().expect("record"));

    cache.clear();
    assert!(cache.is_empty());
}
