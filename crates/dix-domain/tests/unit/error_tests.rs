//! Tests for the domain error type

use dix_domain::Error;

#[test]
fn test_factory_error_message() {
    let error = Error::factory("connection refused");
    assert_eq!(error.to_string(), "Factory error: connection refused");
}

#[test]
fn test_factory_error_keeps_source() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing socket");
    let error = Error::factory_with_source("open failed", io);

    let source = std::error::Error::source(&error).map(ToString::to_string);
    assert_eq!(source.as_deref(), Some("missing socket"));
}

#[test]
fn test_field_injection_message_names_owner_field_and_type() {
    let error = Error::field_injection("app::Server", "port", "u16", Error::factory("boom"));
    let message = error.to_string();

    assert!(message.contains("app::Server"));
    assert!(message.contains("port: u16"));
    assert!(message.contains("Factory error: boom"));
}

#[test]
fn test_root_cause_walks_nested_injections() {
    let error = Error::field_injection(
        "Outer",
        "inner",
        "Inner",
        Error::field_injection("Inner", "outer", "Outer", Error::cyclic("Outer")),
    );

    assert!(matches!(
        error.root_cause(),
        Error::CyclicDependency { type_name } if type_name == "Outer"
    ));
    assert!(error.is_cyclic());
}

#[test]
fn test_is_cyclic_false_for_other_errors() {
    assert!(!Error::unresolved("u8").is_cyclic());
    assert!(!Error::field_injection("A", "b", "u8", Error::factory("x")).is_cyclic());
}

#[test]
fn test_type_mismatch_message() {
    let error = Error::type_mismatch("clock", "std::time::Duration");
    assert_eq!(
        error.to_string(),
        "Provider `clock` produced a value that is not a `std::time::Duration`"
    );
}

#[test]
fn test_configuration_error() {
    let error = Error::configuration("bad namespace");
    assert!(matches!(error, Error::Configuration { source: None, .. }));
    assert_eq!(error.to_string(), "Configuration error: bad namespace");
}

#[test]
fn test_generic_error() {
    let error = Error::generic("something else");
    assert_eq!(error.to_string(), "Generic error: something else");
}
