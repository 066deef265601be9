use dark_fns::{
    Value,
    function::{ArgsSpec, ArityRule, indefinite_args},
};

/// (start = 0, end, step = 1) where a lone argument is the end
fn bounds() -> ArgsSpec {
    ArgsSpec::new([Value::from(0), Value::Undefined, Value::from(1)])
        .with_transform(1, |args| vec![Value::Undefined, args[0].clone()])
}

#[test]
fn test_arity_table_dispatch() {
    let normalize = indefinite_args(bounds());

    assert_eq!(
        normalize(&[Value::from(5)]),
        vec![Value::from(0), Value::from(5), Value::from(1)]
    );
    assert_eq!(
        normalize(&[Value::from(2), Value::from(5)]),
        vec![Value::from(2), Value::from(5), Value::from(1)]
    );
    assert_eq!(
        normalize(&[Value::from(2), Value::from(5), Value::from(3)]),
        vec![Value::from(2), Value::from(5), Value::from(3)]
    );
}

#[test]
fn test_zero_arguments_yield_defaults() {
    let normalize = indefinite_args(bounds());
    assert_eq!(
        normalize(&[]),
        vec![Value::from(0), Value::Undefined, Value::from(1)]
    );
}

#[test]
fn test_replacement_ignores_call_arguments() {
    let spec = ArgsSpec::new([Value::from("a"), Value::from("b")])
        .with_replacement(2, [Value::from("x")]);
    assert_eq!(
        spec.resolve(&[Value::from(1), Value::from(2)]),
        vec![Value::from("x"), Value::from("b")]
    );
}

#[test]
fn test_explicit_pass_through_rule() {
    let spec = ArgsSpec::new([Value::from(0)]).with_rule(1, ArityRule::PassThrough);
    assert_eq!(spec.resolve(&[Value::from(9)]), vec![Value::from(9)]);
    assert_eq!(spec.resolve(&[Value::Undefined]), vec![Value::from(0)]);
}

#[test]
fn test_repeated_calls_are_independent() {
    let normalize = indefinite_args(bounds());
    let first = normalize(&[Value::from(1), Value::from(2), Value::from(3), Value::from(4)]);
    assert_eq!(first.len(), 4);

    // A longer earlier call does not leave extra positions behind
    assert_eq!(normalize(&[Value::from(5)]).len(), 3);
}

#[test]
fn test_into_function_returns_sequence() {
    let f = bounds().into_function();
    assert_eq!(
        f.invoke(&[Value::from(7)]),
        Value::from(vec![Value::from(0), Value::from(7), Value::from(1)])
    );
}
