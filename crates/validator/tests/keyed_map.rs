//! End-to-end keyed-map schemas built from JSON inputs.

use pretty_assertions::assert_eq;
use serde_json::json;
use sift_validator::prelude::*;

fn input(json: serde_json::Value) -> Value {
    Value::from(json)
}

fn person() -> KeyedMap {
    KeyedMap::new()
        .required("name", of_type::<String>())
        .required("age", predicate(|age: &i64| (18..=99).contains(age)))
}

#[test]
fn empty_map_against_all_optional_schema() {
    let schema = KeyedMap::new()
        .optional("nickname", of_type::<String>())
        .optional_with_default("retries", 3, of_type::<i64>());

    assert_eq!(schema.validate(&input(json!({}))), Ok(input(json!({}))));
}

#[test]
fn empty_map_against_required_key() {
    let schema = KeyedMap::new().required("x", of_type::<i64>());
    let err = schema.validate(&input(json!({}))).unwrap_err();

    assert_eq!(err.kind, ErrorKind::MissingRequiredKey);
    assert_eq!(err.key.as_deref(), Some("x"));
    assert!(err.to_string().contains("'x'"));
}

#[test]
fn valid_person_round_trips() {
    let sue = input(json!({"name": "Sue", "age": 28}));
    assert_eq!(person().validate(&sue), Ok(sue.clone()));
}

#[test]
fn underage_person_fails_on_age() {
    let err = person()
        .validate(&input(json!({"name": "Sue", "age": 8})))
        .unwrap_err();

    assert_eq!(err.key.as_deref(), Some("age"));
    let cause = err.find(ErrorKind::PredicateFailure).unwrap();
    assert_eq!(cause.message, "predicate failed to validate");
}

#[test]
fn unknown_key_is_rejected_by_default() {
    let schema = KeyedMap::new().required("name", of_type::<String>());
    let err = schema
        .validate(&input(json!({"name": "Sue", "extra": 1})))
        .unwrap_err();

    assert_eq!(err.kind, ErrorKind::UnexpectedKeys);
    assert_eq!(err.param("keys"), Some("extra"));
}

#[test]
fn config_loaded_from_json_relaxes_unknown_keys() {
    let config = ValidatorConfig::from_json_str(r#"{"ignore_unknown_keys": true}"#).unwrap();
    let schema = KeyedMap::new()
        .required("name", of_type::<String>())
        .with_config(&config);

    assert_eq!(
        schema.validate(&input(json!({"name": "Sue", "extra": 1}))),
        Ok(input(json!({"name": "Sue"})))
    );
}

#[test]
fn config_loaded_from_json_disables_coercion() {
    let config = ValidatorConfig::from_json_str(r#"{"coercion": {"coerce": false}}"#).unwrap();
    let schema = KeyedMap::new()
        .required("n", Type::<i64>::with_config(&config))
        .with_config(&config);

    assert_eq!(schema.validate(&input(json!({"n": 5}))), Ok(input(json!({"n": 5}))));
    let err = schema.validate(&input(json!({"n": "5"}))).unwrap_err();
    assert_eq!(err.key.as_deref(), Some("n"));
    assert_eq!(err.causes[0].kind, ErrorKind::TypeMismatch);
}

#[test]
fn forbidden_key_inversion() {
    // a numeric id is forbidden; anything else under "id" passes through raw
    let schema = KeyedMap::new()
        .required("name", of_type::<String>())
        .forbidden("id", of_type_with::<i64>(CoercionPolicy::exact()));

    let err = schema
        .validate(&input(json!({"name": "Sue", "id": 7})))
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::KeyValidationFailed);
    assert_eq!(
        err.to_string(),
        "validation failed for key 'id' (positive match for forbidden key 'id')"
    );

    let raw = input(json!({"name": "Sue", "id": "seven"}));
    assert_eq!(schema.validate(&raw), Ok(raw.clone()));
}

#[test]
fn coerced_values_replace_inputs() {
    let schema = KeyedMap::new()
        .required("port", of_type::<i64>())
        .required("debug", of_type::<bool>())
        .required("label", of_type::<String>());

    let output = schema
        .validate(&input(json!({"port": "8080", "debug": "yes", "label": 12})))
        .unwrap();

    assert_eq!(output, input(json!({"port": 8080, "debug": true, "label": "12"})));
}

#[test]
fn nested_schemas_report_the_path() {
    let schema = KeyedMap::new()
        .required("owner", person())
        .optional("tags", list(["a".to_owned(), "b".to_owned()]));

    let err = schema
        .validate(&input(json!({"owner": {"name": "Sue", "age": 100}})))
        .unwrap_err();
    let path: Vec<&str> = err.flatten().iter().filter_map(|e| e.key.as_deref()).collect();
    assert_eq!(path, ["owner", "age"]);

    let err = schema
        .validate(&input(
            json!({"owner": {"name": "Sue", "age": 30}, "tags": ["a", "c"]}),
        ))
        .unwrap_err();
    assert_eq!(err.key.as_deref(), Some("tags"));
    assert_eq!(err.causes[0].kind, ErrorKind::SetMembershipFailure);
}

#[test]
fn input_is_not_mutated() {
    let schema = KeyedMap::new().required("n", of_type::<i64>());
    let original = input(json!({"n": "5"}));
    let snapshot = original.clone();

    let output = schema.validate(&original).unwrap();
    assert_eq!(original, snapshot);
    assert_ne!(output, original);
}

#[test]
fn errors_serialize_for_reporting() {
    let err = person()
        .validate(&input(json!({"name": "Sue", "age": 8})))
        .unwrap_err();
    let report = serde_json::to_value(&err).unwrap();

    assert_eq!(report["kind"], "key_validation_failed");
    assert_eq!(report["key"], "age");
    assert_eq!(report["causes"][0]["kind"], "predicate_failure");
}

#[test]
fn shared_schema_across_threads() {
    let schema = std::sync::Arc::new(person());
    let handles: Vec<_> = (18..26)
        .map(|age| {
            let schema = std::sync::Arc::clone(&schema);
            std::thread::spawn(move || {
                schema
                    .validate(&input(json!({"name": "Sue", "age": age})))
                    .is_ok()
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap());
    }
}
