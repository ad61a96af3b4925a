//! Tests for record field tables and the `record!` macro

use std::any::TypeId;

use dix_domain::{Fields, Kind, Record, RecordRef, Resolvable, TypeInfo, record};

record! {
    #[derive(Debug, Clone)]
    pub struct Endpoint {
        pub host: String => "from:?;namespace:hosts",
        pub port: u16 => "from:port",
        pub tags: Vec<String> => "from:?;slice_len:2",
        pub label: String,
    }
}

record! {
    struct Wrapper {
        inner: Option<Box<Endpoint>> => "from:?",
    }
}

struct Manual {
    retries: u32,
    name: String,
}

impl Resolvable for Manual {
    const KIND: Kind = Kind::Record;

    fn zero() -> Self {
        Self {
            retries: 0,
            name: String::new(),
        }
    }

    fn is_zero(&self) -> bool {
        self.retries == 0 && self.name.is_empty()
    }

    fn as_record(&mut self) -> Option<RecordRef<'_>> {
        Some(RecordRef::new(self))
    }
}

impl Record for Manual {
    fn fields(fields: &mut Fields<Self>) {
        fields
            .field("retries", "from:?;namespace:retries", |m| &mut m.retries)
            .skip::<String>("name");
    }
}

#[test]
fn test_macro_zero_value() {
    let endpoint = Endpoint::zero();
    assert!(endpoint.is_zero());
    assert_eq!(endpoint.port, 0);
    assert!(endpoint.tags.is_empty());
    assert_eq!(<Endpoint as Resolvable>::KIND, Kind::Record);
}

#[test]
fn test_macro_is_zero_includes_plain_fields() {
    let mut endpoint = Endpoint::zero();
    endpoint.label = "primary".to_string();
    assert!(!endpoint.is_zero());
}

#[test]
fn test_macro_field_table_in_declaration_order() {
    let mut endpoint = Endpoint::zero();
    let record = endpoint.as_record().expect("records expose themselves");
    let fields = record.describe();

    let names: Vec<&str> = fields.iter().map(|f| f.name()).collect();
    assert_eq!(names, ["host", "port", "tags", "label"]);
    assert_eq!(fields[0].hint(), Some("from:?;namespace:hosts"));
    assert_eq!(fields[1].hint(), Some("from:port"));
    assert_eq!(fields[3].hint(), None);
    assert!(fields[3].type_info().is_none());
    assert_eq!(fields[1].type_name(), "u16");
}

#[test]
fn test_field_assign_and_is_zero() {
    let mut endpoint = Endpoint::zero();
    let fields = endpoint.as_record().expect("record").describe();
    let port = &fields[1];

    assert!(port.is_zero(&mut endpoint));
    assert!(port.assign(&mut endpoint, Box::new(8080_u16)));
    assert_eq!(endpoint.port, 8080);
    assert!(!port.is_zero(&mut endpoint));
}

#[test]
fn test_field_assign_rejects_wrong_type() {
    let mut endpoint = Endpoint::zero();
    let fields = endpoint.as_record().expect("record").describe();

    assert!(!fields[1].assign(&mut endpoint, Box::new(8080_i64)));
    assert_eq!(endpoint.port, 0);
}

#[test]
fn test_skipped_field_is_never_assignable() {
    let mut endpoint = Endpoint::zero();
    let fields = endpoint.as_record().expect("record").describe();
    let label = &fields[3];

    assert!(!label.is_zero(&mut endpoint));
    assert!(!label.assign(&mut endpoint, Box::new("x".to_string())));
}

#[test]
fn test_manual_record_builder() {
    let mut manual = Manual::zero();
    let record = manual.as_record().expect("record");
    assert_eq!(record.type_id(), TypeId::of::<Manual>());

    let fields = record.describe();
    assert_eq!(fields.len(), 2);
    assert_eq!(fields[0].name(), "retries");
    assert_eq!(fields[1].type_name(), std::any::type_name::<String>());
}

#[test]
fn test_record_reached_through_optional_box() {
    let info = TypeInfo::of::<Option<Box<Endpoint>>>();
    let mut value = info.synthesize(&dix_domain::Hint::synthesize());
    let record = info.record_of(&mut value).expect("pointee is a record");
    assert_eq!(record.type_id(), TypeId::of::<Endpoint>());
}

#[test]
fn test_nested_record_zero() {
    let wrapper = Wrapper::zero();
    assert!(wrapper.inner.is_none());
    assert!(wrapper.is_zero());
}
