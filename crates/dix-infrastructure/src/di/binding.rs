//! Binding registry
//!
//! Pre-built values keyed by (declared type, namespace). The registry owns
//! every stored value; each lookup hands out a fresh clone so callers can
//! never mutate a binding through a resolved value.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::Arc;

use dashmap::DashMap;
use dix_domain::Instance;

type StoredValue = Arc<dyn Any + Send + Sync>;

/// One bound value
#[derive(Clone)]
pub struct BindingEntry {
    type_name: &'static str,
    value: StoredValue,
    clone: fn(&(dyn Any + Send + Sync)) -> Option<Instance>,
}

impl BindingEntry {
    fn new<T: Clone + Send + Sync + 'static>(value: StoredValue) -> Self {
        Self {
            type_name: std::any::type_name::<T>(),
            value,
            clone: clone_erased::<T>,
        }
    }

    /// Qualified name of the bound type
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// An owned copy of the stored value
    pub fn instantiate(&self) -> Option<Instance> {
        (self.clone)(&*self.value)
    }
}

impl std::fmt::Debug for BindingEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BindingEntry")
            .field("type_name", &self.type_name)
            .finish()
    }
}

fn clone_erased<T: Clone + Send + Sync + 'static>(
    value: &(dyn Any + Send + Sync),
) -> Option<Instance> {
    value
        .downcast_ref::<T>()
        .map(|value| Box::new(value.clone()) as Instance)
}

/// Thread-safe registry of bound values
#[derive(Debug, Default)]
pub struct BindingRegistry {
    entries: DashMap<TypeId, HashMap<String, BindingEntry>>,
}

impl BindingRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `value` under each namespace, replacing existing entries
    pub fn insert<T: Clone + Send + Sync + 'static>(&self, value: T, namespaces: &[&str]) {
        let value: StoredValue = Arc::new(value);
        let entry = BindingEntry::new::<T>(value);
        let mut slots = self.entries.entry(TypeId::of::<T>()).or_default();
        for namespace in namespaces {
            slots.insert((*namespace).to_string(), entry.clone());
        }
    }

    /// An owned copy of the value bound for (`type_id`, `namespace`)
    pub fn lookup(&self, type_id: TypeId, namespace: &str) -> Option<Instance> {
        let entry = self.entry(type_id, namespace)?;
        entry.instantiate()
    }

    /// The entry bound for (`type_id`, `namespace`)
    pub fn entry(&self, type_id: TypeId, namespace: &str) -> Option<BindingEntry> {
        self.entries.get(&type_id)?.get(namespace).cloned()
    }

    pub fn contains(&self, type_id: TypeId, namespace: &str) -> bool {
        self.entries
            .get(&type_id)
            .is_some_and(|slots| slots.contains_key(namespace))
    }

    /// Namespaces holding a binding for `type_id`, sorted
    pub fn namespaces_of(&self, type_id: TypeId) -> Vec<String> {
        let mut namespaces: Vec<String> = self
            .entries
            .get(&type_id)
            .map(|slots| slots.keys().cloned().collect())
            .unwrap_or_default();
        namespaces.sort();
        namespaces
    }

    /// Total number of (type, namespace) entries
    pub fn len(&self) -> usize {
        self.entries.iter().map(|slots| slots.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
