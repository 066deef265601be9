use dark_fns::{
    Function, Value,
    object::{MixinOptions, get_val_by_key_path, mixin, mixin_map},
};
use serde_json::json;

use crate::helpers::*;

#[test]
fn test_source_wins_on_non_mapping_keys() {
    let cases = [
        (json!({"x": 1}), json!({"x": 2})),
        (json!({"x": [1]}), json!({"x": {"y": 1}})),
        (json!({"x": null}), json!({"x": {"y": 1}})),
        (json!({"x": "s"}), json!({"x": null})),
        (json!({}), json!({"x": [1, 2]})),
    ];
    for (target, source) in cases {
        let mut target = val(target);
        let source = val(source);
        mixin(&mut target, &source, &MixinOptions::default());
        assert_eq!(
            target.get_property("x"),
            source.get_property("x"),
            "source value should win for {source}"
        );
    }
}

#[test]
fn test_null_source_keeps_target_mapping() {
    let mut target = val(json!({"a": {"x": 1}, "b": 2}));
    let source = val(json!({"a": null, "b": null}));
    mixin(&mut target, &source, &MixinOptions::new().concat_arr(true));

    // Only the mapping survives; a scalar is still overwritten
    assert_eq!(target.to_json(), Some(json!({"a": {"x": 1}, "b": null})));
}

#[test]
fn test_nested_mappings_merge() {
    let mut config = setup_config();
    let overrides = val(json!({"server": {"port": 8080, "tls": {"cert": "c.pem"}}}));
    mixin(&mut config, &overrides, &MixinOptions::default());

    assert_eq!(get_val_by_key_path(&config, "server.port", None), Some(&Value::from(8080)));
    assert_eq!(
        get_val_by_key_path(&config, "server.host", None),
        Some(&Value::from("localhost"))
    );
    assert_eq!(
        get_val_by_key_path(&config, "server.tls", None).and_then(Value::to_json),
        Some(json!({"enabled": false, "cert": "c.pem"}))
    );
}

#[test]
fn test_both_flags() {
    let options = MixinOptions::new().concat_fn(true).concat_arr(true);

    let mut target: Value = [
        ("nested".to_string(), val(json!({"scalar": 1, "list": [1]}))),
        ("hook".to_string(), Value::from(greeter("hello"))),
    ]
    .into_iter()
    .collect();
    let source: Value = [
        ("nested".to_string(), val(json!({"scalar": 2, "list": [2, 3]}))),
        ("hook".to_string(), Value::from(greeter("hi"))),
    ]
    .into_iter()
    .collect();

    mixin(&mut target, &source, &options);

    assert_eq!(
        get_val_by_key_path(&target, "nested", None).and_then(Value::to_json),
        Some(json!({"scalar": 2, "list": [1, 2, 3]}))
    );
    let hook = target
        .get_property("hook")
        .and_then(Value::as_function)
        .expect("hook should still be a function");
    assert_eq!(
        hook.invoke(&[Value::from("John")]),
        Value::from(vec![Value::from("hello John"), Value::from("hi John")])
    );
}

#[test]
fn test_concat_arr_appends_non_sequence_source() {
    let mut target = val(json!({"list": [1, 2]}));
    mixin(
        &mut target,
        &val(json!({"list": {"k": "v"}})),
        &MixinOptions::new().concat_arr(true),
    );
    assert_eq!(target.to_json(), Some(json!({"list": [1, 2, {"k": "v"}]})));
}

#[test]
fn test_concat_fn_requires_both_functions() {
    let mut target: Value = [("hook".to_string(), Value::from(1))].into_iter().collect();
    let hi = greeter("hi");
    let source: Value = [("hook".to_string(), Value::from(hi.clone()))].into_iter().collect();

    mixin(&mut target, &source, &MixinOptions::new().concat_fn(true));
    assert!(
        target
            .get_property("hook")
            .and_then(Value::as_function)
            .is_some_and(|hook| hook.ptr_eq(&hi))
    );
}

#[test]
fn test_mixin_returns_target() {
    let mut target = val(json!({"a": 1}));
    let merged = mixin(&mut target, &val(json!({"b": 2})), &MixinOptions::default());
    assert!(merged.get_property("b").is_some());
    merged.as_object_mut().unwrap().shift_remove("a");
    assert_eq!(target, val(json!({"b": 2})));
}

#[test]
fn test_mixin_map_directly() {
    let mut target = val(json!({"a": {"b": 1}}))
        .as_object()
        .cloned()
        .unwrap();
    let source = val(json!({"a": {"c": 2}})).as_object().cloned().unwrap();
    mixin_map(&mut target, &source, &MixinOptions::default());
    assert_eq!(Value::from(target), val(json!({"a": {"b": 1, "c": 2}})));
}

#[test]
fn test_options_from_config() {
    let options: MixinOptions =
        serde_json::from_value(json!({"isConcatFn": true, "isConcatArr": true})).unwrap();
    assert!(options.is_concat_fn);
    assert!(options.is_concat_arr);

    let roundtrip = serde_json::to_value(options).unwrap();
    assert_eq!(roundtrip, json!({"isConcatFn": true, "isConcatArr": true}));
}

#[test]
fn test_composed_hook_runs_every_time() {
    let (first, counter) = counting_fn();
    let second = Function::from_fn(|_| Value::Null);
    let mut target: Value = [("hook".to_string(), Value::from(first))].into_iter().collect();
    let source: Value = [("hook".to_string(), Value::from(second))].into_iter().collect();
    mixin(&mut target, &source, &MixinOptions::new().concat_fn(true));

    let hook = target.get_property("hook").and_then(Value::as_function).unwrap();
    hook.invoke(&[]);
    hook.invoke(&[]);
    assert_eq!(counter.load(std::sync::atomic::Ordering::SeqCst), 2);
}
