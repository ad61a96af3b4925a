//! Record port
//!
//! Composite types opt into field injection by implementing [`Record`]. The
//! field table is declared once per type with the [`Fields`] builder, next to
//! the type itself, instead of being discovered through annotations:
//!
//! ```
//! use dix_domain::{Fields, Kind, Record, RecordRef, Resolvable};
//!
//! #[derive(Default)]
//! struct Server {
//!     port: u16,
//!     name: String,
//! }
//!
//! impl Resolvable for Server {
//!     const KIND: Kind = Kind::Record;
//!
//!     fn zero() -> Self {
//!         Self::default()
//!     }
//!
//!     fn is_zero(&self) -> bool {
//!         self.port == 0 && self.name.is_empty()
//!     }
//!
//!     fn as_record(&mut self) -> Option<RecordRef<'_>> {
//!         Some(RecordRef::new(self))
//!     }
//! }
//!
//! impl Record for Server {
//!     fn fields(fields: &mut Fields<Self>) {
//!         fields
//!             .field("port", "from:?;namespace:http", |server| &mut server.port)
//!             .skip::<String>("name");
//!     }
//! }
//! ```
//!
//! The [`record!`](crate::record) macro generates both impls from a struct
//! declaration.

use std::any::{Any, TypeId};
use std::fmt;
use std::marker::PhantomData;

use super::resolvable::{Instance, Resolvable, TypeInfo};

/// A composite type whose hinted fields are resolved recursively
pub trait Record: Resolvable {
    /// Declare the fields in declaration order
    fn fields(fields: &mut Fields<Self>);
}

/// Builder for the field table of one record type
pub struct Fields<R> {
    fields: Vec<Field>,
    _record: PhantomData<fn() -> R>,
}

impl<R: Record> Fields<R> {
    pub(crate) fn new() -> Self {
        Self {
            fields: Vec::new(),
            _record: PhantomData,
        }
    }

    /// Declare a field resolved according to `hint`
    pub fn field<F: Resolvable>(
        &mut self,
        name: &'static str,
        hint: impl Into<String>,
        access: fn(&mut R) -> &mut F,
    ) -> &mut Self {
        self.fields.push(Field {
            name,
            type_name: std::any::type_name::<F>(),
            hint: Some(hint.into()),
            slot: Some(Box::new(Slot { access })),
        });
        self
    }

    /// Declare a field the engine never touches
    pub fn skip<F: ?Sized>(&mut self, name: &'static str) -> &mut Self {
        self.fields.push(Field {
            name,
            type_name: std::any::type_name::<F>(),
            hint: None,
            slot: None,
        });
        self
    }

    pub(crate) fn into_vec(self) -> Vec<Field> {
        self.fields
    }
}

/// Metadata and type-erased accessors of one record field
pub struct Field {
    name: &'static str,
    type_name: &'static str,
    hint: Option<String>,
    slot: Option<Box<dyn FieldSlot>>,
}

impl Field {
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Declared type of the field
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Hint descriptor, `None` for skipped fields
    pub fn hint(&self) -> Option<&str> {
        self.hint.as_deref()
    }

    /// Type handle of a resolvable field
    pub fn type_info(&self) -> Option<TypeInfo> {
        self.slot.as_ref().map(|slot| slot.type_info())
    }

    /// Whether the field of `record` still holds its zero value
    pub fn is_zero(&self, record: &mut dyn Any) -> bool {
        self.slot
            .as_ref()
            .is_some_and(|slot| slot.is_zero(record))
    }

    /// Write `value` into the field of `record`
    ///
    /// Returns `false` when either the record or the value is not of the
    /// expected type.
    pub fn assign(&self, record: &mut dyn Any, value: Instance) -> bool {
        self.slot
            .as_ref()
            .is_some_and(|slot| slot.assign(record, value))
    }
}

impl fmt::Debug for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("name", &self.name)
            .field("type_name", &self.type_name)
            .field("hint", &self.hint)
            .finish()
    }
}

/// Type-erased read/write access to one field
pub trait FieldSlot: Send + Sync {
    fn type_info(&self) -> TypeInfo;
    fn is_zero(&self, record: &mut dyn Any) -> bool;
    fn assign(&self, record: &mut dyn Any, value: Instance) -> bool;
}

struct Slot<R, F> {
    access: fn(&mut R) -> &mut F,
}

impl<R: Record, F: Resolvable> FieldSlot for Slot<R, F> {
    fn type_info(&self) -> TypeInfo {
        TypeInfo::of::<F>()
    }

    fn is_zero(&self, record: &mut dyn Any) -> bool {
        record
            .downcast_mut::<R>()
            .is_some_and(|record| (self.access)(record).is_zero())
    }

    fn assign(&self, record: &mut dyn Any, value: Instance) -> bool {
        let Some(record) = record.downcast_mut::<R>() else {
            return false;
        };
        match value.downcast::<F>() {
            Ok(value) => {
                *(self.access)(record) = *value;
                true
            }
            Err(_) => false,
        }
    }
}

/// Mutable view of a record value, handed to the injector
pub struct RecordRef<'a> {
    target: &'a mut dyn Any,
    type_id: TypeId,
    type_name: &'static str,
    describe: fn() -> Vec<Field>,
}

impl<'a> RecordRef<'a> {
    pub fn new<R: Record>(record: &'a mut R) -> Self {
        Self {
            target: record,
            type_id: TypeId::of::<R>(),
            type_name: std::any::type_name::<R>(),
            describe: describe::<R>,
        }
    }

    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    /// Qualified name of the record type
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Build the field table from the record's declaration
    pub fn describe(&self) -> Vec<Field> {
        (self.describe)()
    }

    /// The record value itself
    pub fn target(&mut self) -> &mut dyn Any {
        self.target
    }
}

fn describe<R: Record>() -> Vec<Field> {
    let mut fields = Fields::<R>::new();
    R::fields(&mut fields);
    fields.into_vec()
}
