//! Channel value object
//!
//! The channel kind of the resolver. A `Channel` starts out closed (its zero
//! value holds no endpoints); synthesis opens it as a bounded channel whose
//! capacity comes from the `chan_buf` hint. A capacity of 0 gives a
//! rendezvous channel.

use crossbeam_channel::{Receiver, Sender, bounded};

/// Sender and receiver ends of one bounded channel
#[derive(Debug)]
pub struct Channel<T> {
    ends: Option<(Sender<T>, Receiver<T>)>,
}

impl<T> Channel<T> {
    /// A channel with no endpoints
    pub fn closed() -> Self {
        Self { ends: None }
    }

    /// Open a bounded channel with the given capacity
    pub fn bounded(capacity: usize) -> Self {
        Self {
            ends: Some(bounded(capacity)),
        }
    }

    /// Whether endpoints exist
    pub fn is_open(&self) -> bool {
        self.ends.is_some()
    }

    /// Buffer capacity, `None` while closed
    pub fn capacity(&self) -> Option<usize> {
        self.ends
            .as_ref()
            .and_then(|(sender, _)| sender.capacity())
    }

    pub fn sender(&self) -> Option<&Sender<T>> {
        self.ends.as_ref().map(|(sender, _)| sender)
    }

    pub fn receiver(&self) -> Option<&Receiver<T>> {
        self.ends.as_ref().map(|(_, receiver)| receiver)
    }
}

impl<T> Default for Channel<T> {
    fn default() -> Self {
        Self::closed()
    }
}

// Cloning shares the endpoints, like copying a channel handle
impl<T> Clone for Channel<T> {
    fn clone(&self) -> Self {
        Self {
            ends: self.ends.clone(),
        }
    }
}
