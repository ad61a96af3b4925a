//! Tests for error context extensions

use dix_domain::Error;
use dix_infrastructure::ErrorContext;

#[test]
fn test_factory_context_wraps_source() {
    let result: Result<u16, _> = "not-a-port".parse::<u16>();
    let error = result.factory_context("parse port").expect_err("invalid");

    assert!(matches!(error, Error::Factory { source: Some(_), .. }));
    assert!(error.to_string().starts_with("Factory error: parse port:"));
}

#[test]
fn test_with_factory_context_is_lazy() {
    let ok: Result<u8, std::num::ParseIntError> = "7".parse();
    let value = ok
        .with_factory_context(|| -> String { panic!("context built for a success") })
        .expect("valid");
    assert_eq!(value, 7);
}

#[test]
fn test_config_context() {
    let io: Result<(), std::io::Error> = Err(std::io::Error::other("disk full"));
    let error = io.config_context("write config").expect_err("io failure");

    assert!(matches!(error, Error::Configuration { .. }));
    assert!(error.to_string().contains("disk full"));
}
