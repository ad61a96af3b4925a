//! Tests for the hint pool

use dix_domain::Hint;
use dix_infrastructure::di::HintPool;

#[test]
fn test_acquire_returns_empty_hint() {
    let pool = HintPool::new(4);
    let hint = pool.acquire();
    assert_eq!(*hint, Hint::new());
}

#[test]
fn test_dropped_hint_is_reset_and_reused() {
    let pool = HintPool::new(4);
    {
        let mut hint = pool.acquire();
        hint.unmarshal("from:?;namespace:x;slice_len:3;custom:1");
    }
    assert_eq!(pool.available(), 1);

    let hint = pool.acquire();
    assert_eq!(*hint, Hint::default());
    assert_eq!(pool.available(), 0);
}

#[test]
fn test_pool_retains_at_most_capacity() {
    let pool = HintPool::new(2);
    let held: Vec<_> = (0..5).map(|_| pool.acquire()).collect();
    assert_eq!(pool.available(), 0);

    drop(held);
    assert_eq!(pool.available(), 2);
    assert_eq!(pool.capacity(), 2);
}

#[test]
fn test_concurrent_guards_are_independent() {
    let pool = HintPool::new(4);
    let mut first = pool.acquire();
    let mut second = pool.acquire();
    first.unmarshal("namespace:a");
    second.unmarshal("namespace:b");

    assert_eq!(first.namespace(), "a");
    assert_eq!(second.namespace(), "b");
}
