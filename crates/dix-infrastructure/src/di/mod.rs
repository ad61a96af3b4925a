//! Dependency resolution
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`container`] | `Container`: registration and the public resolve API |
//! | `resolver` | the provide / invoke / inject phases |
//! | [`binding`] | values keyed by (type, namespace) |
//! | [`provider`] | providers keyed by (symbol, namespace) |
//! | [`fields`] | memoized record field tables |
//! | [`pool`] | reusable hint descriptors |

pub mod binding;
pub mod container;
pub mod fields;
pub mod pool;
pub mod provider;
mod resolver;

pub use binding::{BindingEntry, BindingRegistry};
pub use container::Container;
pub use fields::FieldCache;
pub use pool::{HintPool, PooledHint};
pub use provider::ProviderRegistry;
