//! Sequence generators and defined-value-wins merges.
//!
//! Generators come in two flavors. The typed entry points ([`series`],
//! [`ari_series_from`], [`range_step`], ...) take the optional leading and
//! trailing arguments as separate functions. The `*_args` entry points take a
//! dynamic argument list and resolve the optional positions through an
//! [`ArgsSpec`](crate::function::ArgsSpec).
//!
//! The merges treat [`Value::Undefined`] in the source as "no opinion": the
//! target element at that index is kept.

use crate::value::{Function, Value};

pub mod errors;
mod series;

pub use errors::ArrayError;
pub use series::{
    ari_series, ari_series_args, ari_series_from, ari_series_step, range, range_args, range_from,
    range_step, series, series_args, series_from,
};

/// Overlays `source` onto `target`, skipping undefined source elements.
///
/// `target` grows (padded with undefined) when `source` is longer.
///
/// ```
/// # use dark_fns::{Value, array::def_assign};
/// let mut target = vec![Value::Undefined, Value::from(2)];
/// def_assign(&mut target, &[Value::from(0), Value::Undefined, Value::from(5)]);
/// assert_eq!(target, vec![Value::from(0), Value::from(2), Value::from(5)]);
/// ```
pub fn def_assign<'a>(target: &'a mut Vec<Value>, source: &[Value]) -> &'a mut Vec<Value> {
    if target.len() < source.len() {
        target.resize(source.len(), Value::Undefined);
    }
    for (slot, item) in target.iter_mut().zip(source) {
        if item.is_defined() {
            *slot = item.clone();
        }
    }
    target
}

/// Like [`def_assign`], but merges nested sequences element by element when
/// both sides hold a sequence at the same index.
pub fn deep_def_assign<'a>(target: &'a mut Vec<Value>, source: &[Value]) -> &'a mut Vec<Value> {
    if target.len() < source.len() {
        target.resize(source.len(), Value::Undefined);
    }
    for (slot, item) in target.iter_mut().zip(source) {
        match (slot, item) {
            (Value::Array(inner), Value::Array(nested)) => {
                deep_def_assign(inner, nested);
            }
            (slot, item) if item.is_defined() => *slot = item.clone(),
            _ => {}
        }
    }
    target
}

/// Resolves a relative fill bound: negative counts back from `len`, and the
/// result is clamped to `0..=len`.
fn relative_index(bound: Option<isize>, len: usize, default: usize) -> usize {
    match bound {
        None => default,
        Some(b) if b < 0 => len.saturating_sub(b.unsigned_abs()),
        Some(b) => (b as usize).min(len),
    }
}

/// Like [`relative_index`], but a positive bound may lie past `len`.
fn growing_index(bound: Option<isize>, len: usize, default: usize) -> usize {
    match bound {
        Some(b) if b >= 0 => b as usize,
        other => relative_index(other, len, default),
    }
}

/// Fills `arr[start..end]` with `value`.
///
/// A constant follows `Array.prototype.fill`: bounds default to the whole
/// sequence, negative bounds count from the end and everything is clamped to
/// the current length.
///
/// When `value` is a function it is called once per index with the sequence
/// as receiver and `(index, sequence)` as arguments, and each result is stored
/// before the next call. Bounds resolve as in [`fill_with`], so the sequence
/// grows when `end` lies past its length.
///
/// ```
/// # use dark_fns::{Function, Value, array::fill};
/// let mut arr = vec![Value::Null; 4];
/// fill(&mut arr, &Value::from(7), Some(1), Some(-1));
/// assert_eq!(arr, vec![Value::Null, Value::from(7), Value::from(7), Value::Null]);
///
/// let index = Value::from(Function::from_fn(|args| args[0].clone()));
/// fill(&mut arr, &index, None, Some(5));
/// assert_eq!(arr.len(), 5);
/// assert_eq!(arr[4], Value::from(4));
/// ```
pub fn fill<'a>(
    arr: &'a mut Vec<Value>,
    value: &Value,
    start: Option<isize>,
    end: Option<isize>,
) -> &'a mut Vec<Value> {
    match value {
        Value::Function(f) => fill_with(arr, call_with_receiver(f), start, end),
        constant => {
            let len = arr.len();
            let start = relative_index(start, len, 0);
            let end = relative_index(end, len, len);
            if start < end {
                arr[start..end].fill(constant.clone());
            }
            arr
        }
    }
}

/// Each call copies the sequence once, so filling `n` elements is quadratic.
fn call_with_receiver(f: &Function) -> impl FnMut(usize, &[Value]) -> Value + '_ {
    move |index: usize, current: &[Value]| {
        let args = [Value::from(index), Value::Array(current.to_vec())];
        f.call(&args[1], &args)
    }
}

/// Fills `arr[start..end]` with the results of `f(index, arr)`.
///
/// Negative bounds count from the end of the sequence as in [`fill`]. A
/// positive `start` or `end` past the length grows the sequence: `f` sees the
/// elements written so far, and skipped indices are padded with undefined.
pub fn fill_with<'a, F>(
    arr: &'a mut Vec<Value>,
    mut f: F,
    start: Option<isize>,
    end: Option<isize>,
) -> &'a mut Vec<Value>
where
    F: FnMut(usize, &[Value]) -> Value,
{
    let len = arr.len();
    let start = growing_index(start, len, 0);
    let end = growing_index(end, len, len);
    for index in start..end {
        let next = f(index, arr.as_slice());
        if index >= arr.len() {
            arr.resize(index + 1, Value::Undefined);
        }
        arr[index] = next;
    }
    arr
}
