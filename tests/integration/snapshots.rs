// Snapshot tests for composite literal output and error wording.

mod common;
use common::*;

use insta::assert_snapshot;
use litgen::{ImportSet, MapValue, SliceValue, StructValue, Value};

#[test]
fn composite_config_literal() {
    let value = Value::Struct(StructValue {
        name: "Config".to_string(),
        package: "app/config".to_string(),
        fields: vec![
            ("Name".to_string(), Value::Str("prod".to_string())),
            ("Replicas".to_string(), Value::Int(3)),
            (
                "Tags".to_string(),
                Value::Slice(SliceValue {
                    elem_type: "string".to_string(),
                    elements: vec![Value::Str("a".to_string()), Value::Str("b".to_string())],
                }),
            ),
            (
                "Limits".to_string(),
                Value::Map(MapValue {
                    key_type: "string".to_string(),
                    elem_type: "int".to_string(),
                    entries: vec![
                        (Value::Str("cpu".to_string()), Value::Int(4)),
                        (Value::Str("mem".to_string()), Value::Int(2048)),
                    ],
                }),
            ),
            ("Fallback".to_string(), Value::nil_pointer()),
        ],
    });

    let (literal, imports) = generate(&value);
    assert_snapshot!(literal, @r#"
config.Config{
    Name: "prod",
    Replicas: 3,
    Tags: []string{"a", "b"},
    Limits: map[string]int{"cpu": 4, "mem": 2048},
    Fallback: nil,
}
"#);
    assert!(imports.contains("app/config"));
}

#[test]
fn pointer_to_foreign_struct_literal() {
    let (literal, _) = generate(&Value::pointer_to(person()));
    assert_snapshot!(literal, @r#"
&models.Person{
    Name: "Bob",
    Age: 30,
}
"#);
}

#[test]
fn unsupported_func_message() {
    let mut imports = ImportSet::new();
    let err = generator()
        .generate(&Value::Func { is_nil: false }, &mut imports)
        .unwrap_err();
    assert_snapshot!(err.to_string(), @"function fields are not supported");
}

#[test]
fn invalid_value_message() {
    let mut imports = ImportSet::new();
    let err = generator().generate(&Value::Invalid, &mut imports).unwrap_err();
    assert_snapshot!(err.to_string(), @"invalid value provided");
}
