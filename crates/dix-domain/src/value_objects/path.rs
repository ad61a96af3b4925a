//! Resolution path
//!
//! The chain of record types currently being injected on one branch of the
//! resolution tree. Entering a record that is already on the chain is a
//! cycle. Extending the path clones it, so sibling fields never see each
//! other's entries. The path travels inside [`Context`](super::Context), so
//! a provider that resolves from the container continues the same branch.

use std::any::TypeId;
use std::fmt;

use crate::error::{Error, Result};

/// Record types on the current resolution branch, outermost first
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolutionPath {
    chain: Vec<(TypeId, &'static str)>,
}

impl ResolutionPath {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `type_id` is already being injected on this branch
    pub fn contains(&self, type_id: TypeId) -> bool {
        self.chain.iter().any(|(id, _)| *id == type_id)
    }

    /// The path extended with one more record type
    ///
    /// Fails with [`Error::CyclicDependency`] when the type is already on
    /// the path.
    pub fn enter(&self, type_id: TypeId, type_name: &'static str) -> Result<Self> {
        if self.contains(type_id) {
            return Err(Error::cyclic(type_name));
        }
        let mut chain = Vec::with_capacity(self.chain.len() + 1);
        chain.extend_from_slice(&self.chain);
        chain.push((type_id, type_name));
        Ok(Self { chain })
    }

    pub fn depth(&self) -> usize {
        self.chain.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }

    /// Type names, outermost first
    pub fn type_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.chain.iter().map(|(_, name)| *name)
    }
}

impl fmt::Display for ResolutionPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.type_names().collect();
        write!(f, "{}", names.join(" -> "))
    }
}
