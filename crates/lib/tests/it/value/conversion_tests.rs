use dark_fns::{Error, Function, Map, Native, TypeTag, Value};
use serde_json::json;

use crate::helpers::*;

#[test]
fn test_from_primitives() {
    assert_eq!(Value::from(true), Value::Bool(true));
    assert_eq!(Value::from(3u64), Value::Number(3.0));
    assert_eq!(Value::from(-3i64), Value::Number(-3.0));
    assert_eq!(Value::from("s"), Value::String("s".to_string()));
    assert_eq!(Value::from(String::from("s")), "s");
    assert_eq!(Value::from(None::<bool>), Value::Undefined);
    assert_eq!(Value::default(), Value::Undefined);
}

#[test]
fn test_collect_into_containers() {
    let list: Value = (1..=3).map(Value::from).collect();
    assert_eq!(list.as_array().map(Vec::len), Some(3));

    let map: Value = [("k".to_string(), Value::from(1))].into_iter().collect();
    assert_eq!(map.as_object().and_then(|m| m.get("k")), Some(&Value::from(1)));
}

#[test]
fn test_primitive_comparisons() {
    let config = setup_config();
    let port = config.get_property("server").and_then(|s| s.get_property("port"));
    assert_eq!(port, Some(&Value::from(80)));
    assert!(*port.unwrap() == 80);
    assert!(80 == *port.unwrap());
    assert!(Value::from("x") == "x");
    assert!(Value::from(false) == false);
}

#[test]
fn test_try_from_into_crate_error() {
    let value = val(json!({"a": 1}));
    let err: Error = Vec::<Value>::try_from(&value).unwrap_err().into();
    assert!(err.is_type_error());
    assert_eq!(err.module(), "value");

    let map = Map::try_from(&value).unwrap();
    assert_eq!(map.len(), 1);
}

#[test]
fn test_function_and_native_identity() {
    let f = sum_fn();
    assert_eq!(Value::from(f.clone()), Value::from(f.clone()));
    assert_ne!(Value::from(f), Value::from(sum_fn()));

    let native = Native::new(String::from("handle"));
    assert_eq!(Value::from(native.clone()), Value::from(native.clone()));
    assert_eq!(
        native.downcast_ref::<String>().map(String::as_str),
        Some("handle")
    );
    assert_eq!(Value::from(native).type_of(), TypeTag::Object);

    let handle = Function::try_from(&Value::from(sum_fn())).unwrap();
    assert_eq!(handle.invoke(&[Value::from(1), Value::from(2)]), 3);
}

#[test]
fn test_nan_is_not_equal_to_itself() {
    assert_ne!(Value::from(f64::NAN), Value::from(f64::NAN));
}
