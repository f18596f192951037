use std::path::PathBuf;

use envistry::{declarations, declare, ConfigError, ConfigStore, LoadOptions, ValueKind};
use serial_test::serial;

fn test_env_options() -> LoadOptions {
    LoadOptions {
        env_files: vec![PathBuf::from("test.env")],
    }
}

#[test]
#[serial]
fn test_load_from_env_file_and_defaults() {
    let store = ConfigStore::load_with_options(
        declarations![
            declare::string("STRING"),
            declare::string("STRING_DEFAULT").not_empty().default("string_default"),
            declare::string("STRING_NOT_EMPTY").not_empty(),
            declare::string_list("STRING_ARRAY"),
            declare::string_list("STRING_ARRAY_DEFAULT")
                .default(vec!["a".to_string(), "b".to_string()]),
            declare::string_list("STRING_ARRAY_NOT_EMPTY").not_empty(),
            declare::integer("INT"),
            declare::integer("INT_DEFAULT").default(43),
            declare::boolean("BOOL_TRUE"),
            declare::boolean("BOOL_FALSE"),
            declare::boolean("BOOL_DEFAULT_TRUE").default(true),
            declare::boolean("BOOL_DEFAULT_FALSE").default(false),
        ],
        &test_env_options(),
    )
    .expect("load should succeed");

    assert_eq!(store.string("STRING"), "string");
    assert_eq!(store.string("STRING_DEFAULT"), "string_default");
    assert_eq!(store.string("STRING_NOT_EMPTY"), "string_not_empty");

    assert_eq!(store.string_list("STRING_ARRAY"), ["foo", "bar"]);
    assert_eq!(store.string_list("STRING_ARRAY_DEFAULT"), ["a", "b"]);
    assert_eq!(store.string_list("STRING_ARRAY_NOT_EMPTY"), ["fizz", "buzz"]);

    assert_eq!(store.integer("INT"), 42);
    assert_eq!(store.integer("INT_DEFAULT"), 43);

    assert!(store.boolean("BOOL_TRUE"));
    assert!(!store.boolean("BOOL_FALSE"));
    assert!(store.boolean("BOOL_DEFAULT_TRUE"));
    assert!(!store.boolean("BOOL_DEFAULT_FALSE"));
}

#[test]
#[serial]
fn test_provided_reflects_environment_presence() {
    let store = ConfigStore::load_with_options(
        declarations![
            declare::string("STRING"),
            declare::integer("INT_DEFAULT").default(43),
        ],
        &test_env_options(),
    )
    .unwrap();

    assert!(
        store
            .descriptor(ValueKind::String, "STRING")
            .unwrap()
            .provided
    );
    assert!(
        !store
            .descriptor(ValueKind::Int, "INT_DEFAULT")
            .unwrap()
            .provided
    );
}

#[test]
#[serial]
fn test_missing_variable_without_default_fails() {
    let result = ConfigStore::load_with_options(
        declarations![declare::string("LOAD_TEST_NEVER_SET")],
        &test_env_options(),
    );

    assert_eq!(
        result.unwrap_err(),
        ConfigError::MissingVariable {
            key: "LOAD_TEST_NEVER_SET".to_string(),
        }
    );
}

#[test]
#[serial]
fn test_empty_value_with_not_empty_constraint_fails() {
    temp_env::with_vars([("LOAD_TEST_EMPTY", Some(""))], || {
        let result = ConfigStore::load_with_options(
            declarations![declare::string("LOAD_TEST_EMPTY").not_empty()],
            &test_env_options(),
        );

        assert_eq!(
            result.unwrap_err(),
            ConfigError::EmptyValue {
                key: "LOAD_TEST_EMPTY".to_string(),
            }
        );
    });
}

#[test]
#[serial]
fn test_invalid_bool_fails() {
    temp_env::with_vars([("LOAD_TEST_BOOL", Some("yes"))], || {
        let result = ConfigStore::load_with_options(
            declarations![declare::boolean("LOAD_TEST_BOOL")],
            &test_env_options(),
        );

        assert!(matches!(
            result.unwrap_err(),
            ConfigError::InvalidFormat { key, value, .. }
                if key == "LOAD_TEST_BOOL" && value == "yes"
        ));
    });
}

#[test]
#[serial]
fn test_invalid_int_fails() {
    temp_env::with_vars([("LOAD_TEST_INT", Some("forty-two"))], || {
        let result = ConfigStore::load_with_options(
            declarations![declare::integer("LOAD_TEST_INT")],
            &test_env_options(),
        );

        assert!(matches!(
            result.unwrap_err(),
            ConfigError::InvalidFormat { key, .. } if key == "LOAD_TEST_INT"
        ));
    });
}

#[test]
#[serial]
fn test_first_failure_aborts_and_publishes_nothing() {
    // The failing entry comes after a resolvable one; the whole load
    // still returns Err, so no store is observable at all.
    let result = ConfigStore::load_with_options(
        declarations![
            declare::string("STRING"),
            declare::string("LOAD_TEST_NEVER_SET"),
            declare::boolean("BOOL_TRUE"),
        ],
        &test_env_options(),
    );

    assert!(result.is_err());
}

#[test]
#[serial]
fn test_missing_env_file_is_non_fatal() {
    let options = LoadOptions {
        env_files: vec![PathBuf::from("does-not-exist.env")],
    };
    let store = ConfigStore::load_with_options(
        declarations![declare::integer("LOAD_TEST_FALLBACK").default(7)],
        &options,
    )
    .unwrap();

    assert_eq!(store.integer("LOAD_TEST_FALLBACK"), 7);
}

#[test]
#[serial]
fn test_env_wins_over_default() {
    temp_env::with_vars([("LOAD_TEST_OVERRIDE", Some("from-env"))], || {
        let store = ConfigStore::load_with_options(
            declarations![declare::string("LOAD_TEST_OVERRIDE").default("from-default")],
            &test_env_options(),
        )
        .unwrap();

        assert_eq!(store.string("LOAD_TEST_OVERRIDE"), "from-env");
        assert!(
            store
                .descriptor(ValueKind::String, "LOAD_TEST_OVERRIDE")
                .unwrap()
                .provided
        );
    });
}
