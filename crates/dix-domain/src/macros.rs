//! Declarative record definitions
//!
//! `record!` declares a struct and implements [`Resolvable`](crate::Resolvable)
//! and [`Record`](crate::Record) for it. A field followed by `=> "hint"` is
//! resolved by the engine; any other field is left alone and must implement
//! `Default + PartialEq` so the record's zero value can be built and checked.
//!
//! ```
//! use dix_domain::{Resolvable, record};
//!
//! record! {
//!     #[derive(Debug)]
//!     pub struct Settings {
//!         pub retries: u32 => "from:?;namespace:retries",
//!         pub tags: Vec<String> => "from:?;slice_len:0;slice_cap:4",
//!         pub label: String,
//!     }
//! }
//!
//! let settings = Settings::zero();
//! assert!(settings.is_zero());
//! ```

/// Declare a struct whose hinted fields are resolved by the engine
#[macro_export]
macro_rules! record {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$field_meta:meta])*
                $field_vis:vis $field:ident : $field_ty:ty $(=> $hint:literal)?
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis struct $name {
            $(
                $(#[$field_meta])*
                $field_vis $field: $field_ty,
            )*
        }

        impl $crate::Resolvable for $name {
            const KIND: $crate::Kind = $crate::Kind::Record;

            fn zero() -> Self {
                Self {
                    $( $field: $crate::__record_zero!($field_ty $(, $hint)?), )*
                }
            }

            fn is_zero(&self) -> bool {
                true $( && $crate::__record_is_zero!(&self.$field, $field_ty $(, $hint)?) )*
            }

            fn as_record(&mut self) -> ::core::option::Option<$crate::RecordRef<'_>> {
                ::core::option::Option::Some($crate::RecordRef::new(self))
            }
        }

        impl $crate::Record for $name {
            #[allow(unused_variables)]
            fn fields(fields: &mut $crate::Fields<Self>) {
                $( $crate::__record_field!(fields, $name, $field, $field_ty $(, $hint)?); )*
            }
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __record_zero {
    ($ty:ty, $hint:literal) => {
        <$ty as $crate::Resolvable>::zero()
    };
    ($ty:ty) => {
        <$ty as ::core::default::Default>::default()
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __record_is_zero {
    ($value:expr, $ty:ty, $hint:literal) => {
        <$ty as $crate::Resolvable>::is_zero($value)
    };
    ($value:expr, $ty:ty) => {
        *$value == <$ty as ::core::default::Default>::default()
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __record_field {
    ($fields:ident, $owner:ident, $field:ident, $ty:ty, $hint:literal) => {{
        fn access(record: &mut $owner) -> &mut $ty {
            &mut record.$field
        }
        $fields.field(::core::stringify!($field), $hint, access);
    }};
    ($fields:ident, $owner:ident, $field:ident, $ty:ty) => {
        $fields.skip::<$ty>(::core::stringify!($field));
    };
}
