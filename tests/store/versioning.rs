//! Field Versioning Tests
//!
//! Last-writer-wins by version:
//! - First write accepted at any version
//! - Later writes need a strictly greater version
//! - Rejected writes leave value and version untouched

use crate::common::*;

#[test]
fn uninitialized_field_read_fails() {
    let store = EntityStore::new();
    let field = field_of(&store, "Model", "name");

    let err = field.get_value().unwrap_err();
    assert_eq!(
        err,
        Error::FieldUninitialized {
            field: "name".to_string()
        }
    );
    assert!(err.is_recoverable());
    assert_eq!(field.version(), Version::ZERO);
}

#[test]
fn first_write_accepts_any_version() {
    let store = EntityStore::new();
    for (i, version) in [0u64, 1, 1_000, u64::MAX].into_iter().enumerate() {
        let field = field_of(&store, "Model", &format!("f{}", i));
        assert!(field.set_value("first", v(version)).unwrap().is_applied());
        assert_eq!(field.version(), v(version));
    }
}

#[test]
fn increasing_versions_all_land() {
    let store = EntityStore::new();
    let field = field_of(&store, "Counter", "value");
    for n in 1..=10u64 {
        field.set_value(n as i64, v(n * 10)).unwrap();
        assert_eq!(field.get_value().unwrap(), Value::Number(n as i64));
    }
    assert_eq!(field.version(), v(100));
}

#[test]
fn gaps_between_versions_are_fine() {
    let store = EntityStore::new();
    let field = field_of(&store, "Model", "name");
    field.set_value("a", v(2)).unwrap();
    field.set_value("b", v(900)).unwrap();
    assert_eq!(field.version(), v(900));
}

#[test]
fn lower_and_equal_versions_rejected() {
    let store = EntityStore::new();
    let field = field_of(&store, "Model", "name");
    field.set_value("kept", v(5)).unwrap();

    for attempted in [0u64, 4, 5] {
        match field.set_value("lost", v(attempted)).unwrap_err() {
            Error::StaleWrite {
                field: name,
                current,
                attempted: got,
            } => {
                assert_eq!(name, "name");
                assert_eq!(current, v(5));
                assert_eq!(got, v(attempted));
            }
            other => panic!("expected StaleWrite, got {:?}", other),
        }
    }

    let current = field.get_versioned().unwrap();
    assert_eq!(current.value, Value::from("kept"));
    assert_eq!(current.version, v(5));
}

#[test]
fn writes_may_change_tag() {
    let store = EntityStore::new();
    let field = field_of(&store, "Model", "slot");
    field.set_value("text", v(1)).unwrap();
    field.set_value(7, v(2)).unwrap();
    assert_eq!(field.get_value().unwrap(), Value::Number(7));
}

#[test]
fn ignore_policy_reports_without_failing() {
    let store = ignoring_store();
    let field = field_of(&store, "Model", "name");
    field.set_value("kept", v(2)).unwrap();

    let outcome = field.set_value("lost", v(1)).unwrap();
    assert_eq!(outcome, WriteOutcome::Ignored { current: v(2) });
    assert_eq!(field.get_value().unwrap(), Value::from("kept"));
}

#[test]
fn stale_write_on_one_field_does_not_touch_others() {
    let store = EntityStore::new();
    let entity = store.instantiate_entity(&Identifier::new("Model"));
    entity.get("a").set_value(1, v(5)).unwrap();
    entity.get("b").set_value(2, v(1)).unwrap();

    assert!(entity.get("a").set_value(9, v(1)).is_err());

    assert_eq!(entity.get("b").get_value().unwrap(), Value::Number(2));
    assert_eq!(entity.get("b").version(), v(1));
}

#[test]
fn historical_reads() {
    let store = EntityStore::new();
    let field = field_of(&store, "Model", "age");
    field.set_value(42, v(0)).unwrap();
    field.set_value(52, v(2)).unwrap();

    assert_eq!(field.initial(), Some(Value::Number(42)));
    assert_eq!(field.get_value().unwrap(), Value::Number(52));
    assert_eq!(field.value_at(v(1)), Some(Value::Number(42)));
    assert_eq!(field.value_at(v(3)), Some(Value::Number(52)));

    let history = field.history().unwrap();
    assert_eq!(history[0].version, v(2));
    assert_eq!(history[1].version, v(0));
}

#[test]
fn history_depth_from_config() {
    let config = StoreConfig::from_toml_str("history_depth = 1").unwrap();
    let store = EntityStore::with_config(config).unwrap();
    let field = field_of(&store, "Model", "n");
    field.set_value(1, v(1)).unwrap();
    field.set_value(2, v(2)).unwrap();
    field.set_value(3, v(3)).unwrap();

    assert_eq!(field.history().unwrap().len(), 1);
    assert_eq!(field.initial(), Some(Value::Number(1)));
    assert_eq!(field.value_at(v(1)), Some(Value::Number(1)));
    assert_eq!(field.value_at(v(2)), None);
}
