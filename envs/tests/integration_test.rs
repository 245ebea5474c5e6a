//! Integration tests

use envs::{BindError, Envs};
use serial_test::serial;
use std::collections::HashMap;
use std::env;
use std::rc::Rc;

#[derive(Debug, Default, PartialEq, Envs)]
struct TestConfig1 {
    #[envs("ENVS_TEST_INT")]
    pub int_val: i32,

    #[envs("ENVS_TEST_STRING")]
    pub string_val: String,

    #[envs("ENVS_TEST_BOOL")]
    pub bool_val: bool,
}

#[derive(Debug, Default, PartialEq, Envs)]
struct TestConfig2 {
    #[envs("ENVS_TEST_STRING")]
    pub string_val: String,

    #[envs("ENVS_TEST_ERROR")]
    pub error_val: String,
}

#[derive(Debug, Default, PartialEq, Envs)]
struct Unannotated {
    pub name: String,
    pub count: i64,
    pub ratios: Vec<f64>,
}

#[derive(Debug, Default, PartialEq, Envs)]
struct Database {
    #[envs("DB_URL")]
    pub url: String,

    #[envs("DB_POOL_SIZE")]
    pub pool_size: u32,
}

#[derive(Debug, Default, PartialEq, Envs)]
struct ServiceConfig {
    #[envs("SERVICE_NAME")]
    pub name: String,

    #[envs]
    pub primary: Database,

    #[envs("IGNORED_FOR_NESTED")]
    pub replica: Database,

    #[envs("-")]
    pub excluded: Database,

    pub unannotated: Database,
}

#[derive(Debug, Default, Envs)]
#[envs(prefix = "MYAPP_")]
struct PrefixedConfig {
    #[envs("PORT")]
    pub port: u16,

    #[envs = "DEBUG"]
    pub debug: bool,

    #[envs]
    pub database: Database,
}

#[derive(Debug, Default, Envs)]
struct WithUnsupported {
    #[envs("ENVS_TEST_STRING")]
    pub string_val: String,

    #[envs("ENVS_TEST_RATIO")]
    pub ratio: f64,
}

#[derive(Debug, Default, Envs)]
struct WithShared {
    #[envs("ENVS_TEST_STRING")]
    pub string_val: String,

    #[envs("ENVS_TEST_SHARED")]
    pub shared: Rc<String>,
}

#[derive(Debug, Default, Envs)]
struct Outer {
    #[envs]
    pub inner: WithShared,
}

#[derive(Debug, Default, Envs)]
struct Inner {
    #[envs("ENVS_TEST_INNER")]
    pub value: String,
}

#[derive(Debug, Default, Envs)]
struct PlainOuter {
    pub inner: Inner,
    pub label: String,
    pub samples: Vec<f64>,
}

#[derive(Debug, Default, Envs)]
struct PlainShared {
    pub inner: WithShared,
}

#[derive(Debug, Default, Envs)]
struct Generic<T> {
    #[envs("ENVS_TEST_GENERIC")]
    pub value: T,

    #[envs("ENVS_TEST_STRING")]
    pub name: String,
}

#[derive(Debug, Default, Envs)]
struct Counter {
    #[envs("ENVS_TEST_N")]
    pub n: i32,
}

fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn init_process_env() {
    env::set_var("ENVS_TEST_INT", "12345");
    env::set_var("ENVS_TEST_STRING", "string");
    env::set_var("ENVS_TEST_BOOL", "false");
    env::remove_var("ENVS_TEST_ERROR");
}

fn clear_process_env() {
    env::remove_var("ENVS_TEST_INT");
    env::remove_var("ENVS_TEST_STRING");
    env::remove_var("ENVS_TEST_BOOL");
}

#[test]
#[serial]
fn test_bind_from_process_env() {
    init_process_env();

    let mut config = TestConfig1::default();
    envs::bind(&mut config).unwrap();
    assert_eq!(
        config,
        TestConfig1 {
            int_val: 12345,
            string_val: "string".to_string(),
            bool_val: false,
        }
    );

    clear_process_env();
}

#[test]
#[serial]
fn test_missing_variable_keeps_zero_value() {
    init_process_env();

    let mut config = TestConfig2::default();
    config.bind_envs().unwrap();
    assert_eq!(
        config,
        TestConfig2 {
            string_val: "string".to_string(),
            error_val: String::new(),
        }
    );

    clear_process_env();
}

#[test]
#[serial]
fn test_invalid_integer_fails_and_keeps_prior_value() {
    env::set_var("ENVS_TEST_N", "not-a-number");

    let mut counter = Counter::default();
    let err = envs::bind(&mut counter).unwrap_err();
    match err {
        BindError::InvalidIntegerValue { key, value, .. } => {
            assert_eq!(key, "ENVS_TEST_N");
            assert_eq!(value, "not-a-number");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(counter.n, 0);

    env::remove_var("ENVS_TEST_N");
}

#[test]
fn test_unannotated_record_is_unchanged() {
    let mut config = Unannotated {
        name: "keep".to_string(),
        count: 3,
        ratios: vec![0.5],
    };
    let before = Unannotated {
        name: "keep".to_string(),
        count: 3,
        ratios: vec![0.5],
    };

    let env = vars(&[("NAME", "x"), ("COUNT", "9"), ("name", "x")]);
    envs::bind_with(&mut config, &env).unwrap();
    assert_eq!(config, before);
}

#[test]
fn test_defaults_survive_empty_values() {
    let mut config = TestConfig1 {
        int_val: 80,
        string_val: "default".to_string(),
        bool_val: true,
    };

    let env = vars(&[("ENVS_TEST_INT", ""), ("ENVS_TEST_STRING", "")]);
    envs::bind_with(&mut config, &env).unwrap();
    assert_eq!(config.int_val, 80);
    assert_eq!(config.string_val, "default");
    assert!(config.bool_val);
}

#[test]
fn test_non_true_boolean_becomes_false() {
    let mut config = TestConfig1 {
        bool_val: true,
        ..Default::default()
    };

    envs::bind_with(&mut config, &vars(&[("ENVS_TEST_BOOL", "1")])).unwrap();
    assert!(!config.bool_val);
}

#[test]
fn test_nested_records() {
    let mut config = ServiceConfig::default();
    let env = vars(&[
        ("SERVICE_NAME", "api"),
        ("DB_URL", "postgres://localhost/db"),
        ("DB_POOL_SIZE", "16"),
        ("IGNORED_FOR_NESTED", "value"),
    ]);

    envs::bind_with(&mut config, &env).unwrap();
    assert_eq!(config.name, "api");
    assert_eq!(config.primary.url, "postgres://localhost/db");
    assert_eq!(config.primary.pool_size, 16);
    assert_eq!(config.replica, config.primary);
    assert_eq!(config.excluded, Database::default());
    assert_eq!(config.unannotated, config.primary);
}

#[test]
fn test_nested_error_reports_path() {
    let mut config = ServiceConfig::default();
    let env = vars(&[("SERVICE_NAME", "api"), ("DB_POOL_SIZE", "many")]);

    let err = envs::bind_with(&mut config, &env).unwrap_err();
    assert!(matches!(err, BindError::Nested { ref field, .. } if field == "primary"));
    assert!(matches!(
        err.root_cause(),
        BindError::InvalidIntegerValue { key, .. } if key == "DB_POOL_SIZE"
    ));
    assert_eq!(config.name, "api");
}

#[test]
fn test_prefix_applies_to_own_fields_only() {
    let mut config = PrefixedConfig::default();
    let env = vars(&[
        ("MYAPP_PORT", "3000"),
        ("MYAPP_DEBUG", "true"),
        ("DB_URL", "postgres://localhost/db"),
        ("MYAPP_DB_URL", "wrong"),
    ]);

    envs::bind_with(&mut config, &env).unwrap();
    assert_eq!(config.port, 3000);
    assert!(config.debug);
    assert_eq!(config.database.url, "postgres://localhost/db");
}

#[test]
fn test_unsupported_field_fails_before_binding() {
    let mut config = WithUnsupported::default();
    let env = vars(&[("ENVS_TEST_STRING", "string"), ("ENVS_TEST_RATIO", "0.5")]);

    let err = envs::bind_with(&mut config, &env).unwrap_err();
    assert!(matches!(
        err,
        BindError::UnsupportedFieldType { ref field, type_name: "f64" } if field == "ratio"
    ));
    assert_eq!(config.string_val, "");
}

#[test]
fn test_shared_field_is_unassignable() {
    let mut config = Outer::default();
    let env = vars(&[("ENVS_TEST_STRING", "string"), ("ENVS_TEST_SHARED", "x")]);

    let err = envs::bind_with(&mut config, &env).unwrap_err();
    assert_eq!(err.path().as_deref(), Some("inner.shared"));
    assert!(matches!(err.root_cause(), BindError::UnassignableField { .. }));
    assert_eq!(config.inner.string_val, "");
}

#[test]
fn test_primitive_target_is_invalid() {
    let mut port: u16 = 8080;
    let err = envs::bind_with(&mut port, &vars(&[])).unwrap_err();
    assert!(matches!(err, BindError::InvalidTargetKind { .. }));
    assert_eq!(port, 8080);
}

#[test]
fn test_bind_twice_is_idempotent() {
    let env = vars(&[
        ("SERVICE_NAME", "api"),
        ("DB_URL", "postgres://localhost/db"),
    ]);

    let mut config = ServiceConfig::default();
    envs::bind_with(&mut config, &env).unwrap();
    let first = format!("{config:?}");
    envs::bind_with(&mut config, &env).unwrap();
    assert_eq!(format!("{config:?}"), first);
}

#[test]
fn test_unannotated_nested_record_is_bound() {
    let mut outer = PlainOuter {
        label: "keep".to_string(),
        ..Default::default()
    };
    let env = vars(&[("ENVS_TEST_INNER", "x"), ("label", "y")]);

    envs::bind_with(&mut outer, &env).unwrap();
    assert_eq!(outer.inner.value, "x");
    assert_eq!(outer.label, "keep");
}

#[test]
fn test_unannotated_nested_error_reports_path() {
    let mut outer = PlainShared::default();
    let env = vars(&[("ENVS_TEST_SHARED", "x")]);

    let err = envs::bind_with(&mut outer, &env).unwrap_err();
    assert_eq!(err.path().as_deref(), Some("inner.shared"));
}

#[test]
fn test_generic_field_types() {
    let env = vars(&[("ENVS_TEST_GENERIC", "42"), ("ENVS_TEST_STRING", "string")]);

    let mut number = Generic::<u64>::default();
    envs::bind_with(&mut number, &env).unwrap();
    assert_eq!(number.value, 42);
    assert_eq!(number.name, "string");

    let mut text = Generic::<String>::default();
    envs::bind_with(&mut text, &env).unwrap();
    assert_eq!(text.value, "42");
}
