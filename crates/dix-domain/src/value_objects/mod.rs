//! Value objects
//!
//! Plain data carried through resolution calls.

pub mod channel;
pub mod context;
pub mod hint;
pub mod hint_keys;
pub mod path;

pub use channel::Channel;
pub use context::Context;
pub use hint::Hint;
pub use hint_keys::HintKeys;
pub use path::ResolutionPath;
