use dark_fns::{
    Error, Function, Value,
    array::{self, ArrayError},
};

use crate::helpers::*;

#[test]
fn test_series_examples() {
    assert_eq!(array::series(5, |i, _, _| i as f64), vec![0.0, 1.0, 2.0, 3.0, 4.0]);
    assert_eq!(
        array::series_from(1.0, 5, |i, _, _| i as f64),
        vec![1.0, 1.0, 2.0, 3.0, 4.0]
    );
    assert_eq!(
        array::series(5, |_, _, acc| acc + 1.0),
        vec![0.0, 1.0, 2.0, 4.0, 8.0]
    );
}

#[test]
fn test_series_length_is_end() {
    for end in [0usize, 1, 2, 7, 20] {
        assert_eq!(array::series(end, |_, _, _| 1.0).len(), end.max(1));
    }
}

#[test]
fn test_ari_series_examples() {
    assert_eq!(array::ari_series(5), vec![0.0, 1.0, 2.0, 3.0, 4.0]);
    assert_eq!(
        array::ari_series_from(4.0, 7),
        vec![4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0]
    );
    assert_eq!(array::ari_series_from(1.0, 3), vec![1.0, 2.0, 3.0]);
    assert_eq!(
        array::ari_series_step(1.0, 5, 2.0),
        vec![1.0, 3.0, 5.0, 7.0, 9.0]
    );
}

#[test]
fn test_range_examples() {
    assert_eq!(array::range(5.0), vec![0.0, 1.0, 2.0, 3.0, 4.0]);
    assert_eq!(array::range_from(5.0, 10.0), vec![5.0, 6.0, 7.0, 8.0, 9.0]);
    assert_eq!(array::range_step(2.0, 10.0, 3.0), vec![2.0, 5.0, 8.0]);
    assert_eq!(array::range_step(0.0, 1.0, 0.25), vec![0.0, 0.25, 0.5, 0.75]);
}

#[test]
fn test_range_end_is_a_bound_not_a_length() {
    // The same arguments mean different things to the two generators
    assert_eq!(array::range_from(4.0, 7.0), vec![4.0, 5.0, 6.0]);
    assert_eq!(array::ari_series_from(4.0, 7).len(), 7);
}

#[test]
fn test_range_never_loops_forever() {
    assert!(array::range_step(0.0, 10.0, 0.0).is_empty());
    assert!(array::range_step(0.0, 10.0, -2.0).is_empty());
    assert!(array::range_from(0.0, f64::INFINITY).is_empty());
    assert!(array::range_from(f64::NAN, 10.0).is_empty());
}

#[test]
fn test_dynamic_generators() {
    let index = Value::from(arg_fn(0));

    let series = array::series_args(&[Value::from(5), index.clone()]).unwrap();
    assert_eq!(as_numbers(&series), vec![0.0, 1.0, 2.0, 3.0, 4.0]);

    let series = array::series_args(&[Value::from(1), Value::from(5), index]).unwrap();
    assert_eq!(as_numbers(&series), vec![1.0, 1.0, 2.0, 3.0, 4.0]);

    let ari = array::ari_series_args(&[Value::from(4), Value::from(7)]).unwrap();
    assert_eq!(as_numbers(&ari), vec![4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0]);

    let range = array::range_args(&[Value::from(5)]).unwrap();
    assert_eq!(as_numbers(&range), vec![0.0, 1.0, 2.0, 3.0, 4.0]);
}

#[test]
fn test_dynamic_series_generator_arguments() {
    // Each call sees (index, prefix, running_sum) and the prefix as receiver
    let describe = Value::from(Function::new(|this, args| {
        let prefix_len = this.as_array().map_or(0, Vec::len);
        let same_prefix = args.get(1) == Some(this);
        let acc = args[2].as_number_or(f64::NAN);
        assert!(same_prefix);
        assert_eq!(args[0].as_number(), Some(prefix_len as f64));
        Value::from(acc + 1.0)
    }));
    let result = array::series_args(&[Value::from(5), describe]).unwrap();
    assert_eq!(as_numbers(&result), vec![0.0, 1.0, 2.0, 4.0, 8.0]);
}

#[test]
fn test_dynamic_series_keeps_non_numeric_start() {
    let result = array::series_args(&[Value::from("head"), Value::from(3), Value::from(arg_fn(0))])
        .unwrap();
    assert_eq!(
        result,
        Value::from(vec![Value::from("head"), Value::from(1), Value::from(2)])
    );
}

#[test]
fn test_dynamic_generator_errors() {
    let err = array::series_args(&[]).unwrap_err();
    assert!(err.is_argument_error());
    assert_eq!(err.module(), "array");

    let err = array::range_args(&[
        Value::from(0),
        Value::from(1),
        Value::from(1),
        Value::from(1),
    ])
    .unwrap_err();
    assert!(matches!(
        err,
        Error::Array(ArrayError::TooManyArguments { max: 3, arity: 4 })
    ));

    let err = array::ari_series_args(&[Value::Null]).unwrap_err();
    assert!(err.is_type_error());
    match err {
        Error::Array(array_err) => assert_eq!(array_err.argument(), Some("end")),
        other => panic!("Expected an array error, got {other:?}"),
    }

    let err = array::series_args(&[Value::from(f64::INFINITY), Value::from(arg_fn(0))])
        .unwrap_err();
    assert!(err.is_type_error());
}

#[test]
fn test_oversized_series_lengths_are_rejected() {
    let err = array::series_args(&[Value::from(1e15), Value::from(arg_fn(0))]).unwrap_err();
    assert!(err.is_type_error());
    match err {
        Error::Array(array_err) => assert_eq!(array_err.argument(), Some("end")),
        other => panic!("Expected an array error, got {other:?}"),
    }

    let err = array::ari_series_args(&[Value::from(0), Value::from(1e15)]).unwrap_err();
    assert!(err.is_type_error());
}
