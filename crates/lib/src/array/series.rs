//! Sequence generators: [`series`], [`ari_series`] and [`range`].
//!
//! `series` and `ari_series` treat `end` as the length of the result, while
//! `range` treats it as an exclusive bound on the values themselves.

use tracing::{trace, warn};

use super::ArrayError;
use crate::{
    Result,
    function::ArgsSpec,
    value::{Function, Value},
};

/// Generators accept at most `(start, end, generator-or-step)`.
const MAX_ARITY: usize = 3;

/// Longest series the dynamic entry points will build, `2^32 - 1`.
const MAX_LENGTH: usize = u32::MAX as usize;

/// Builds a sequence of `end` elements (at least one) starting with `start`.
///
/// `next` receives the index, the elements built so far and the running sum
/// of generated elements (`start` excluded).
fn build_series<T, F, W>(start: T, end: usize, mut next: F, weight: W) -> Vec<T>
where
    F: FnMut(usize, &[T], f64) -> T,
    W: Fn(&T) -> f64,
{
    let mut items = vec![start];
    let mut accumulator = 0.0;
    for index in 1..end {
        let item = next(index, &items, accumulator);
        accumulator += weight(&item);
        items.push(item);
    }
    items
}

/// Builds a sequence of length `end` starting at 0.
///
/// Element `i` (for `i >= 1`) is `generator(i, built_so_far, running_sum)`,
/// where the running sum covers every generated element but not the start.
/// An `end` of 0 or 1 yields just the start.
///
/// ```
/// # use dark_fns::array::series;
/// assert_eq!(series(5, |i, _, _| i as f64), vec![0.0, 1.0, 2.0, 3.0, 4.0]);
/// assert_eq!(series(5, |_, _, acc| acc + 1.0), vec![0.0, 1.0, 2.0, 4.0, 8.0]);
/// ```
pub fn series<F>(end: usize, generator: F) -> Vec<f64>
where
    F: FnMut(usize, &[f64], f64) -> f64,
{
    series_from(0.0, end, generator)
}

/// Builds a sequence of length `end` starting at `start`.
///
/// See [`series`] for how elements are generated.
pub fn series_from<F>(start: f64, end: usize, generator: F) -> Vec<f64>
where
    F: FnMut(usize, &[f64], f64) -> f64,
{
    build_series(start, end, generator, |item| *item)
}

/// Arithmetic progression of length `end` starting at 0 with step 1.
pub fn ari_series(end: usize) -> Vec<f64> {
    ari_series_step(0.0, end, 1.0)
}

/// Arithmetic progression of length `end` starting at `start` with step 1.
///
/// ```
/// # use dark_fns::array::ari_series_from;
/// assert_eq!(ari_series_from(4.0, 7), vec![4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0]);
/// ```
pub fn ari_series_from(start: f64, end: usize) -> Vec<f64> {
    ari_series_step(start, end, 1.0)
}

/// Arithmetic progression of length `end` starting at `start`.
pub fn ari_series_step(start: f64, end: usize, step: f64) -> Vec<f64> {
    series_from(start, end, |index, items, _| items[index - 1] + step)
}

/// Values `0, 1, 2, ...` below `end`.
pub fn range(end: f64) -> Vec<f64> {
    range_step(0.0, end, 1.0)
}

/// Values `start, start + 1, ...` below `end`.
pub fn range_from(start: f64, end: f64) -> Vec<f64> {
    range_step(start, end, 1.0)
}

/// Values `start, start + step, ...` below `end`.
///
/// A step that is not positive, an infinite `end` and a step too small to
/// change the current value all produce a finite result instead of looping
/// forever: the first two yield an empty sequence, the last stops early.
///
/// ```
/// # use dark_fns::array::range_step;
/// assert_eq!(range_step(2.0, 10.0, 3.0), vec![2.0, 5.0, 8.0]);
/// assert!(range_step(0.0, 10.0, 0.0).is_empty());
/// ```
pub fn range_step(start: f64, end: f64, step: f64) -> Vec<f64> {
    if step.is_nan() || step <= 0.0 {
        warn!(step, "Range step is not positive, returning an empty range");
        return Vec::new();
    }
    if start < end && end.is_infinite() {
        warn!(start, "Range end is unbounded, returning an empty range");
        return Vec::new();
    }

    let mut items = Vec::new();
    let mut current = start;
    while current < end {
        items.push(current);
        let next = current + step;
        if next == current {
            warn!(current, step, "Range step is below float precision, stopping early");
            break;
        }
        current = next;
    }
    items
}

fn check_arity(arity: usize, required: usize, missing: &'static str) -> Result<()> {
    if arity < required {
        return Err(ArrayError::MissingArgument {
            name: missing,
            arity,
        }
        .into());
    }
    if arity > MAX_ARITY {
        return Err(ArrayError::TooManyArguments {
            max: MAX_ARITY,
            arity,
        }
        .into());
    }
    Ok(())
}

fn number_arg(argument: &'static str, value: &Value) -> Result<f64> {
    match value {
        Value::Number(n) => Ok(*n),
        other => Err(ArrayError::TypeMismatch {
            argument,
            expected: "number",
            actual: other.type_name(),
        }
        .into()),
    }
}

/// Reads a series length; lengths at or below 1 collapse to 1.
///
/// Lengths above [`MAX_LENGTH`], infinity included, are rejected.
fn length_arg(argument: &'static str, value: &Value) -> Result<usize> {
    let end = number_arg(argument, value)?;
    if end > MAX_LENGTH as f64 {
        warn!(end, max = MAX_LENGTH, "Series length out of range");
        return Err(ArrayError::TypeMismatch {
            argument,
            expected: "length below 2^32",
            actual: "number",
        }
        .into());
    }
    // NaN compares false and lands on the single-element case
    Ok(if end > 1.0 { end.ceil() as usize } else { 1 })
}

fn function_arg<'a>(argument: &'static str, value: &'a Value) -> Result<&'a Function> {
    value.as_function().ok_or_else(|| {
        ArrayError::TypeMismatch {
            argument,
            expected: "function",
            actual: value.type_name(),
        }
        .into()
    })
}

/// `(end, generator)` shifts right so the start keeps its default.
fn series_spec() -> ArgsSpec {
    ArgsSpec::new([Value::from(0)]).with_transform(2, |args| {
        let mut shifted = vec![Value::Undefined];
        shifted.extend_from_slice(args);
        shifted
    })
}

/// `(start = 0, end, step = 1)` where a lone argument is the end.
fn bounds_spec() -> ArgsSpec {
    ArgsSpec::new([Value::from(0), Value::Undefined, Value::from(1)])
        .with_transform(1, |args| vec![Value::Undefined, args[0].clone()])
}

/// Dynamic [`series`]: accepts `(end, generator)` or
/// `(start, end, generator)`.
///
/// The generator is called with the sequence built so far as receiver and
/// `(index, sequence, running_sum)` as arguments. Generated elements that are
/// not numbers make the running sum NaN.
///
/// ```
/// # use dark_fns::{Function, Value, array::series_args};
/// let index = Value::from(Function::from_fn(|args| args[0].clone()));
/// let result = series_args(&[Value::from(1), Value::from(5), index]).unwrap();
/// assert_eq!(result.to_json(), Some(serde_json::json!([1, 1, 2, 3, 4])));
/// ```
pub fn series_args(args: &[Value]) -> Result<Value> {
    check_arity(args.len(), 2, "generator")?;
    let resolved = series_spec().resolve(args);
    trace!(arity = args.len(), "Dispatching series arguments");

    let start = resolved[0].clone();
    let end = length_arg("end", &resolved[1])?;
    let generator = function_arg("generator", &resolved[2])?;

    let items = build_series(
        start,
        end,
        |index, items, accumulator| {
            // The prefix is copied once per element, so a series of n is quadratic
            let args = [
                Value::from(index),
                Value::Array(items.to_vec()),
                Value::from(accumulator),
            ];
            generator.call(&args[1], &args)
        },
        |item| item.as_number().unwrap_or(f64::NAN),
    );
    Ok(Value::Array(items))
}

/// Dynamic [`ari_series`]: accepts `(end)`, `(start, end)` or
/// `(start, end, step)`.
pub fn ari_series_args(args: &[Value]) -> Result<Value> {
    check_arity(args.len(), 1, "end")?;
    let resolved = bounds_spec().resolve(args);
    trace!(arity = args.len(), "Dispatching arithmetic series arguments");

    let start = number_arg("start", &resolved[0])?;
    let end = length_arg("end", &resolved[1])?;
    let step = number_arg("step", &resolved[2])?;
    Ok(ari_series_step(start, end, step).into_iter().map(Value::from).collect())
}

/// Dynamic [`range`]: accepts `(end)`, `(start, end)` or
/// `(start, end, step)`.
///
/// ```
/// # use dark_fns::{Value, array::range_args};
/// let result = range_args(&[Value::from(5), Value::from(10)]).unwrap();
/// assert_eq!(result.to_json(), Some(serde_json::json!([5, 6, 7, 8, 9])));
///
/// let err = range_args(&[]).unwrap_err();
/// assert!(err.is_argument_error());
/// ```
pub fn range_args(args: &[Value]) -> Result<Value> {
    check_arity(args.len(), 1, "end")?;
    let resolved = bounds_spec().resolve(args);
    trace!(arity = args.len(), "Dispatching range arguments");

    let start = number_arg("start", &resolved[0])?;
    let end = number_arg("end", &resolved[1])?;
    let step = number_arg("step", &resolved[2])?;
    Ok(range_step(start, end, step).into_iter().map(Value::from).collect())
}
