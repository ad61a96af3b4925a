//! Hint pool
//!
//! Every resolution step needs a scratch [`Hint`]. The pool hands them out
//! behind a [`PooledHint`] guard that resets the hint and returns it when
//! dropped, so steady-state resolution does not allocate descriptors.

use std::ops::{Deref, DerefMut};
use std::sync::{Mutex, MutexGuard, PoisonError};

use dix_domain::Hint;

use crate::constants::HINT_POOL_CAPACITY;

/// Free list of reusable hints
#[derive(Debug)]
pub struct HintPool {
    free: Mutex<Vec<Hint>>,
    capacity: usize,
}

impl Default for HintPool {
    fn default() -> Self {
        Self::new(HINT_POOL_CAPACITY)
    }
}

impl HintPool {
    /// Create a pool retaining at most `capacity` idle hints
    pub fn new(capacity: usize) -> Self {
        Self {
            free: Mutex::new(Vec::with_capacity(capacity)),
            capacity,
        }
    }

    /// Take an empty hint, reusing an idle one when available
    pub fn acquire(&self) -> PooledHint<'_> {
        let hint = self.lock().pop().unwrap_or_else(Hint::new);
        PooledHint { hint, pool: self }
    }

    /// Number of idle hints waiting for reuse
    pub fn available(&self) -> usize {
        self.lock().len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    fn release(&self, mut hint: Hint) {
        hint.reset();
        let mut free = self.lock();
        if free.len() < self.capacity {
            free.push(hint);
        }
    }

    // A panic while holding the lock cannot leave the free list inconsistent
    fn lock(&self) -> MutexGuard<'_, Vec<Hint>> {
        self.free.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Exclusive handle to a pooled hint, returned to the pool on drop
#[derive(Debug)]
pub struct PooledHint<'a> {
    hint: Hint,
    pool: &'a HintPool,
}

impl Deref for PooledHint<'_> {
    type Target = Hint;

    fn deref(&self) -> &Hint {
        &self.hint
    }
}

impl DerefMut for PooledHint<'_> {
    fn deref_mut(&mut self) -> &mut Hint {
        &mut self.hint
    }
}

impl Drop for PooledHint<'_> {
    fn drop(&mut self) {
        self.pool.release(std::mem::take(&mut self.hint));
    }
}
