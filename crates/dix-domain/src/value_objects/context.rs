//! Resolution context
//!
//! Carried through every resolution call and handed to providers. Providers
//! that do blocking or slow work can honour the cancellation token and
//! deadline. The context also carries the record types being injected on
//! the current branch; pass it on when resolving from inside a provider so
//! the cycle guard keeps working.

use std::any::TypeId;
use std::time::{Duration, Instant};

use tokio_util::sync::CancellationToken;

use super::path::ResolutionPath;
use crate::error::Result;

/// Ambient state of one top-level resolution request
#[derive(Debug, Clone, Default)]
pub struct Context {
    /// Cancellation signal shared with the caller
    token: CancellationToken,
    /// Point in time after which providers should give up
    deadline: Option<Instant>,
    /// Records being injected on this branch
    path: ResolutionPath,
}

impl Context {
    /// A context that is never cancelled and has no deadline
    pub fn background() -> Self {
        Self::default()
    }

    /// A context observing the given cancellation token
    pub fn with_token(token: CancellationToken) -> Self {
        Self {
            token,
            ..Self::default()
        }
    }

    /// Set a deadline relative to now
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.deadline = Some(Instant::now() + timeout);
        self
    }

    /// Set an absolute deadline
    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// A child context: cancelled with its parent, cancellable on its own
    pub fn child(&self) -> Self {
        Self {
            token: self.token.child_token(),
            deadline: self.deadline,
            path: self.path.clone(),
        }
    }

    /// This context with one more record type on its path
    ///
    /// Fails with [`Error::CyclicDependency`](crate::Error::CyclicDependency)
    /// when the type is already being injected on this branch.
    pub fn enter(&self, type_id: TypeId, type_name: &'static str) -> Result<Self> {
        Ok(Self {
            token: self.token.clone(),
            deadline: self.deadline,
            path: self.path.enter(type_id, type_name)?,
        })
    }

    pub fn path(&self) -> &ResolutionPath {
        &self.path
    }

    pub fn token(&self) -> &CancellationToken {
        &self.token
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Whether the caller cancelled the request
    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Whether the deadline has passed
    pub fn is_expired(&self) -> bool {
        self.deadline.is_some_and(|deadline| Instant::now() >= deadline)
    }

    /// Cancelled or expired
    pub fn is_done(&self) -> bool {
        self.is_cancelled() || self.is_expired()
    }
}
