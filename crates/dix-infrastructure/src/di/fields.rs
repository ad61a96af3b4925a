//! Type field cache
//!
//! Field tables are built from `Record::fields` the first time a record
//! type is injected and shared afterwards.

use std::any::TypeId;
use std::sync::Arc;

use dashmap::DashMap;
use dix_domain::{Field, RecordRef};

/// Memoized field tables keyed by record type
#[derive(Debug, Default)]
pub struct FieldCache {
    fields: DashMap<TypeId, Arc<[Field]>>,
}

impl FieldCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Field table of the record, in declaration order
    pub fn fields_of(&self, record: &RecordRef<'_>) -> Arc<[Field]> {
        if let Some(fields) = self.fields.get(&record.type_id()) {
            return Arc::clone(fields.value());
        }
        let described: Arc<[Field]> = record.describe().into();
        Arc::clone(self.fields.entry(record.type_id()).or_insert(described).value())
    }

    pub fn contains(&self, type_id: TypeId) -> bool {
        self.fields.contains_key(&type_id)
    }

    /// Number of cached record types
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn clear(&self) {
        self.fields.clear();
    }
}
