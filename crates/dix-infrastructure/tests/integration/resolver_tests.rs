//! Tests for the invoke and inject phases

use std::borrow::Cow;
use std::collections::HashMap;
use std::sync::Arc;

use dix_domain::{Channel, Context, Error, HintKeys, Resolvable, record};
use dix_infrastructure::{Container, DixConfig};

trait Clock: Send + Sync {
    fn now(&self) -> u64;
}

#[derive(Debug)]
struct FixedClock(u64);

impl Clock for FixedClock {
    fn now(&self) -> u64 {
        self.0
    }
}

record! {
    #[derive(Debug, Clone)]
    pub struct Limits {
        pub soft: i64 => "from:?",
        pub hard: i64 => "from:?;namespace:int100",
    }
}

record! {
    #[derive(Debug)]
    pub struct Buffers {
        pub queue: Vec<u32> => "from:?;slice_len:3;slice_cap:16",
        pub events: Channel<String> => "from:?;chan_buf:5",
        pub index: HashMap<String, u8> => "from:?;map_size:8",
        pub slots: [u8; 4] => "from:?",
        pub untouched: Vec<u32>,
    }
}

record! {
    pub struct Node {
        pub limits: Limits => "from:?",
        pub boxed: Option<Box<Limits>> => "from:?",
        pub clock: Option<Arc<dyn Clock>> => "from:?",
        pub label: String => "from:unknown",
    }
}

record! {
    #[derive(Debug)]
    pub struct Empty {
        pub note: String,
    }
}

fn ctx() -> Context {
    Context::background()
}

// ============================================================================
// Invoke phase
// ============================================================================

#[test]
fn test_bindings_resolve_per_namespace() {
    let container = Container::new();
    container.bind(10_i64, &[]);
    container.bind(100_i64, &["int100"]);

    let limits: Limits = container.resolve(&ctx()).expect("resolved");
    assert_eq!(limits.soft, 10);
    assert_eq!(limits.hard, 100);
}

#[test]
fn test_missing_binding_synthesizes_zero() {
    let container = Container::new();
    container.bind(100_i64, &["int100"]);

    let limits: Limits = container.resolve(&ctx()).expect("resolved");
    assert_eq!(limits.soft, 0);
    assert_eq!(limits.hard, 100);
}

#[test]
fn test_scalar_root_resolution() {
    let container = Container::new();
    assert_eq!(container.resolve::<u8>(&ctx()).expect("zero"), 0);

    container.bind("hello".to_string(), &[]);
    assert_eq!(container.resolve::<String>(&ctx()).expect("bound"), "hello");
}

#[test]
fn test_resolve_with_selects_namespace() {
    let container = Container::new();
    container.bind(1_u16, &[]);
    container.bind(2_u16, &["other"]);

    assert_eq!(container.resolve_with::<u16>(&ctx(), "namespace:other").ok(), Some(2));
    assert_eq!(container.resolve_with::<u16>(&ctx(), "").ok(), Some(1));
}

#[test]
fn test_container_shapes_from_hints() {
    let container = Container::new();
    let buffers: Buffers = container.resolve(&ctx()).expect("resolved");

    assert_eq!(buffers.queue, vec![0, 0, 0]);
    assert!(buffers.queue.capacity() >= 16);
    assert_eq!(buffers.events.capacity(), Some(5));
    assert!(buffers.index.is_empty());
    assert!(buffers.index.capacity() >= 8);
    assert_eq!(buffers.slots, [0; 4]);
    assert!(buffers.untouched.is_empty());
}

#[test]
fn test_record_without_resolvable_fields_is_zero() {
    let container = Container::new();
    let empty: Empty = container.resolve(&ctx()).expect("resolved");
    assert!(empty.is_zero());
}

// ============================================================================
// Inject phase
// ============================================================================

#[test]
fn test_nested_records_and_pointers_are_injected() {
    let container = Container::new();
    container.bind(7_i64, &[]);
    container.bind(70_i64, &["int100"]);

    let node: Node = container.resolve(&ctx()).expect("resolved");
    assert_eq!(node.limits.soft, 7);
    assert_eq!(node.limits.hard, 70);

    let boxed = node.boxed.expect("pointer synthesized");
    assert_eq!(boxed.soft, 7);
    assert_eq!(boxed.hard, 70);
}

#[test]
fn test_unbound_interface_stays_none() {
    let container = Container::new();
    let node: Node = container.resolve(&ctx()).expect("resolved");
    assert!(node.clock.is_none());
}

#[test]
fn test_bound_interface_is_injected() {
    let container = Container::new();
    let clock: Option<Arc<dyn Clock>> = Some(Arc::new(FixedClock(1_700_000_000)));
    container.bind(clock, &[]);

    let node: Node = container.resolve(&ctx()).expect("resolved");
    assert_eq!(node.clock.map(|c| c.now()), Some(1_700_000_000));
}

#[test]
fn test_unknown_symbol_leaves_field_untouched() {
    let container = Container::new();
    container.bind("ignored".to_string(), &[]);

    let node: Node = container.resolve(&ctx()).expect("resolved");
    assert_eq!(node.label, "");
}

#[test]
fn test_bound_record_fields_are_filled_only_when_zero() {
    let container = Container::new();
    container.bind(5_i64, &[]);
    container.bind(50_i64, &["int100"]);
    container.bind(
        Limits {
            soft: 1,
            hard: 0,
        },
        &[],
    );

    let node: Node = container.resolve(&ctx()).expect("resolved");
    assert_eq!(node.limits.soft, 1);
    assert_eq!(node.limits.hard, 50);
}

#[test]
fn test_bound_value_is_not_mutated_by_injection() {
    let container = Container::new();
    container.bind(Limits { soft: 3, hard: 0 }, &[]);
    container.bind(30_i64, &["int100"]);

    let first: Limits = container.resolve(&ctx()).expect("resolved");
    assert_eq!(first.hard, 30);

    container.bind(31_i64, &["int100"]);
    let second: Limits = container.resolve(&ctx()).expect("resolved");
    assert_eq!(second.hard, 31);
}

// ============================================================================
// Container configuration
// ============================================================================

#[test]
fn test_custom_default_namespace() {
    let config = DixConfig {
        default_namespace: "main".to_string(),
        ..DixConfig::default()
    };
    let container = Container::with_config(&config);
    assert_eq!(container.default_namespace(), "main");

    container.bind(9_i64, &[]);
    assert!(container.bindings().contains(std::any::TypeId::of::<i64>(), "main"));

    let limits: Limits = container.resolve(&ctx()).expect("resolved");
    assert_eq!(limits.soft, 9);
}

record! {
    #[derive(Debug)]
    pub struct Renamed {
        pub soft: i64 => "src:auto;ns:limits",
        pub queue: Vec<u8> => "src:auto;len:2",
        pub from: String => "from:?",
    }
}

#[test]
fn test_renamed_hint_keys() {
    let config = DixConfig {
        hint_keys: HintKeys {
            symbol: Cow::Borrowed("src"),
            namespace: Cow::Borrowed("ns"),
            slice_len: Cow::Borrowed("len"),
            synthesize: Cow::Borrowed("auto"),
            ..HintKeys::default()
        },
        ..DixConfig::default()
    };
    let container = Container::with_config(&config);
    assert_eq!(container.hint_keys().symbol, "src");
    container.bind(44_i64, &["limits"]);
    container.bind("ignored".to_string(), &[]);

    let renamed: Renamed = container.resolve(&ctx()).expect("resolved");
    assert_eq!(renamed.soft, 44);
    assert_eq!(renamed.queue, vec![0, 0]);
    // `from` is an ordinary custom key under the renamed table
    assert!(renamed.from.is_empty());
}

#[test]
fn test_field_tables_are_cached_after_resolution() {
    let container = Container::new();
    let _: Node = container.resolve(&ctx()).expect("resolved");
    assert_eq!(container.field_cache().len(), 2);
}

#[test]
fn test_unresolved_root_is_an_error() {
    let container = Container::new();
    let error = container
        .resolve_with::<u8>(&ctx(), "from:nothing")
        .expect_err("no provider named nothing");
    assert!(matches!(error, Error::Unresolved { .. }));
}

#[test]
fn test_must_resolve_returns_value() {
    let container = Container::new();
    container.bind(4_i64, &[]);
    let limits: Limits = container.must_resolve(&ctx());
    assert_eq!(limits.soft, 4);
}
