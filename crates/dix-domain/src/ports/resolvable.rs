//! Resolvable port
//!
//! Every type the engine can produce implements [`Resolvable`]. The trait
//! tells the engine which structural [`Kind`] the type has, what its zero
//! value is, and how to synthesize a default from a [`Hint`]. Records
//! additionally expose their field table through [`Resolvable::as_record`].
//!
//! The engine itself is type-erased: it moves values around as
//! [`Instance`]s and reaches back into the concrete type through the
//! function pointers captured in a [`TypeInfo`].
//!
//! | Kind | Implemented for | Synthesized as |
//! |------|-----------------|----------------|
//! | scalar | `bool`, integers, floats, `char`, `String`, `()` | zero value |
//! | interface | `Option<Arc<T>>` (trait objects, shared closures) | `None` |
//! | channel | [`Channel<T>`] | bounded channel of `chan_buf` |
//! | map | `HashMap`, `BTreeMap` | empty, pre-sized with `map_size` |
//! | sequence | `Vec<T>` | `slice_len` zeros, capacity `slice_cap` (both clamped to `HINT_SIZE_LIMIT`) |
//! | array | `[T; N]` | all zeros |
//! | pointer | `Box<T>`, `Option<Box<T>>` | box holding `T`'s zero |
//! | record | user structs, see [`Record`](super::record::Record) | zero value |

use std::any::{Any, TypeId};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::hash::{BuildHasher, Hash};
use std::sync::Arc;

use super::record::RecordRef;
use crate::value_objects::{Channel, Hint};

/// Type-erased value moved between providers, bindings and the engine
pub type Instance = Box<dyn Any + Send + Sync>;

/// Runtime type of the value behind an [`Instance`]
pub fn instance_type_id(value: &Instance) -> TypeId {
    (**value).type_id()
}

/// Structural kind of a resolvable type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Bool,
    Integer,
    Float,
    Char,
    Text,
    Unit,
    Interface,
    Channel,
    Map,
    Sequence,
    Array,
    Record,
    Pointer,
}

impl Kind {
    /// Kinds whose synthesized value is simply their zero value
    pub fn is_scalar(self) -> bool {
        matches!(
            self,
            Self::Bool
                | Self::Integer
                | Self::Float
                | Self::Char
                | Self::Text
                | Self::Unit
                | Self::Interface
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Integer => "integer",
            Self::Float => "float",
            Self::Char => "char",
            Self::Text => "text",
            Self::Unit => "unit",
            Self::Interface => "interface",
            Self::Channel => "channel",
            Self::Map => "map",
            Self::Sequence => "sequence",
            Self::Array => "array",
            Self::Record => "record",
            Self::Pointer => "pointer",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A type the resolution engine can produce
pub trait Resolvable: Sized + Send + Sync + 'static {
    /// Structural kind driving synthesis
    const KIND: Kind;

    /// The zero value, what a field holds before anything resolved it
    fn zero() -> Self;

    /// Whether this value is still the zero value
    ///
    /// Injection only ever writes fields for which this returns `true`.
    fn is_zero(&self) -> bool;

    /// Structural default honouring the container-sizing hints
    fn synthesize(hint: &Hint) -> Self {
        let _ = hint;
        Self::zero()
    }

    /// The record behind this value, if any
    ///
    /// Records return themselves; pointer kinds forward to their pointee.
    fn as_record(&mut self) -> Option<RecordRef<'_>> {
        None
    }
}

/// Type-erased handle to a [`Resolvable`] type
#[derive(Clone, Copy)]
pub struct TypeInfo {
    id: TypeId,
    name: &'static str,
    kind: Kind,
    synthesize: fn(&Hint) -> Instance,
    record: for<'a> fn(&'a mut Instance) -> Option<RecordRef<'a>>,
}

impl TypeInfo {
    /// Capture the handle of `T`
    pub fn of<T: Resolvable>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
            kind: T::KIND,
            synthesize: synthesize_erased::<T>,
            record: record_erased::<T>,
        }
    }

    pub fn id(&self) -> TypeId {
        self.id
    }

    /// Qualified type name
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// Synthesize a structural default
    pub fn synthesize(&self, hint: &Hint) -> Instance {
        (self.synthesize)(hint)
    }

    /// Reach the record behind an instance of this type
    pub fn record_of<'a>(&self, value: &'a mut Instance) -> Option<RecordRef<'a>> {
        (self.record)(value)
    }

    /// Whether the instance holds a value of this type
    pub fn matches(&self, value: &Instance) -> bool {
        instance_type_id(value) == self.id
    }
}

impl fmt::Debug for TypeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeInfo")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .finish()
    }
}

fn synthesize_erased<T: Resolvable>(hint: &Hint) -> Instance {
    Box::new(T::synthesize(hint))
}

fn record_erased<T: Resolvable>(value: &mut Instance) -> Option<RecordRef<'_>> {
    (**value).downcast_mut::<T>()?.as_record()
}

// ============================================================================
// Scalar kinds
// ============================================================================

macro_rules! impl_scalar {
    ($kind:ident => $($ty:ty),+ $(,)?) => {
        $(
            impl Resolvable for $ty {
                const KIND: Kind = Kind::$kind;

                fn zero() -> Self {
                    Self::default()
                }

                fn is_zero(&self) -> bool {
                    *self == Self::default()
                }
            }
        )+
    };
}

impl_scalar!(Bool => bool);
impl_scalar!(Integer => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_scalar!(Float => f32, f64);
impl_scalar!(Char => char);
impl_scalar!(Text => String);
impl_scalar!(Unit => ());

impl<T: ?Sized + Send + Sync + 'static> Resolvable for Option<Arc<T>> {
    const KIND: Kind = Kind::Interface;

    fn zero() -> Self {
        None
    }

    fn is_zero(&self) -> bool {
        self.is_none()
    }
}

// ============================================================================
// Container kinds
// ============================================================================

impl<T: Send + 'static> Resolvable for Channel<T> {
    const KIND: Kind = Kind::Channel;

    fn zero() -> Self {
        Channel::closed()
    }

    fn is_zero(&self) -> bool {
        !self.is_open()
    }

    fn synthesize(hint: &Hint) -> Self {
        Channel::bounded(hint.chan_buf())
    }
}

impl<K, V, S> Resolvable for HashMap<K, V, S>
where
    K: Eq + Hash + Send + Sync + 'static,
    V: Send + Sync + 'static,
    S: BuildHasher + Default + Send + Sync + 'static,
{
    const KIND: Kind = Kind::Map;

    fn zero() -> Self {
        HashMap::with_hasher(S::default())
    }

    fn is_zero(&self) -> bool {
        self.is_empty()
    }

    fn synthesize(hint: &Hint) -> Self {
        HashMap::with_capacity_and_hasher(hint.map_size(), S::default())
    }
}

impl<K, V> Resolvable for BTreeMap<K, V>
where
    K: Ord + Send + Sync + 'static,
    V: Send + Sync + 'static,
{
    const KIND: Kind = Kind::Map;

    fn zero() -> Self {
        BTreeMap::new()
    }

    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl<T: Resolvable> Resolvable for Vec<T> {
    const KIND: Kind = Kind::Sequence;

    fn zero() -> Self {
        Vec::new()
    }

    fn is_zero(&self) -> bool {
        self.is_empty()
    }

    fn synthesize(hint: &Hint) -> Self {
        let len = hint.slice_len();
        let mut sequence = Vec::with_capacity(hint.slice_cap().max(len));
        sequence.resize_with(len, T::zero);
        sequence
    }
}

impl<T: Resolvable, const N: usize> Resolvable for [T; N] {
    const KIND: Kind = Kind::Array;

    fn zero() -> Self {
        std::array::from_fn(|_| T::zero())
    }

    fn is_zero(&self) -> bool {
        self.iter().all(|element| element.is_zero())
    }
}

// ============================================================================
// Pointer kinds
// ============================================================================

impl<T: Resolvable> Resolvable for Box<T> {
    const KIND: Kind = Kind::Pointer;

    fn zero() -> Self {
        Box::new(T::zero())
    }

    fn is_zero(&self) -> bool {
        (**self).is_zero()
    }

    fn as_record(&mut self) -> Option<RecordRef<'_>> {
        (**self).as_record()
    }
}

impl<T: Resolvable> Resolvable for Option<Box<T>> {
    const KIND: Kind = Kind::Pointer;

    fn zero() -> Self {
        None
    }

    fn is_zero(&self) -> bool {
        self.is_none()
    }

    fn synthesize(_hint: &Hint) -> Self {
        Some(Box::new(T::zero()))
    }

    fn as_record(&mut self) -> Option<RecordRef<'_>> {
        self.as_deref_mut().and_then(|pointee| pointee.as_record())
    }
}
