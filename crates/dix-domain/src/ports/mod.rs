//! Domain ports
//!
//! The capabilities the resolution engine is written against.

pub mod provider;
pub mod record;
pub mod resolvable;

pub use provider::{Provider, SharedProvider};
pub use record::{Field, FieldSlot, Fields, Record, RecordRef};
pub use resolvable::{Instance, Kind, Resolvable, TypeInfo, instance_type_id};
