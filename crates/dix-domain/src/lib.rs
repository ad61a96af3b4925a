//! # dix Domain Layer
//!
//! Core types of the dix resolution engine, free of any registry or
//! synchronization concerns.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`error`] | Error taxonomy of resolution and configuration |
//! | [`constants`] | Hint mini-language keys and the default namespace |
//! | [`value_objects`] | `Hint` descriptor, resolution `Context` and path, `Channel` |
//! | [`ports`] | `Provider`, `Resolvable`, `Record` and the field table |
//!
//! The `record!` macro declares a struct together with its field table.

#[macro_use]
mod macros;

pub mod constants;
pub mod error;
pub mod ports;
pub mod value_objects;

pub use error::{Error, Result};
pub use ports::{
    Field, FieldSlot, Fields, Instance, Kind, Provider, Record, RecordRef, Resolvable,
    SharedProvider, TypeInfo, instance_type_id,
};
pub use value_objects::{Channel, Context, Hint, HintKeys, ResolutionPath};
