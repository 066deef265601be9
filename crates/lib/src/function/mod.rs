//! Function combinators over [`Function`] handles.
//!
//! - [`concat_fn`] runs several functions with the same receiver and arguments
//!   and collects their results.
//! - [`curry`] fixes leading arguments of a function.
//! - [`indefinite_args`] builds an argument normalizer that fills positional
//!   defaults depending on how many arguments a call received.

use crate::value::{Function, Value};

pub mod args;

pub use args::{ArgsSpec, ArityRule, indefinite_args};

/// Concatenates functions into one.
///
/// Calling the result calls every function in order with the same receiver
/// and arguments, and returns their results as a sequence. Each call of the
/// composed function repeats every side effect.
///
/// # Examples
///
/// ```
/// use dark_fns::{Function, Value, function::concat_fn};
///
/// let hello = Function::from_fn(|args| Value::from(format!("hello {}", args[0])));
/// let hi = Function::from_fn(|args| Value::from(format!("hi {}", args[0])));
///
/// let both = concat_fn([hello, hi]);
/// assert_eq!(
///     both.invoke(&[Value::from("John")]),
///     Value::from(vec![Value::from("hello John"), Value::from("hi John")])
/// );
/// ```
pub fn concat_fn<I>(fns: I) -> Function
where
    I: IntoIterator<Item = Function>,
{
    let fns: Vec<Function> = fns.into_iter().collect();
    Function::new(move |this, args| fns.iter().map(|f| f.call(this, args)).collect())
}

/// Fixes the leading arguments of a function.
///
/// The returned function calls `f` with `preset` followed by its own
/// arguments, forwarding the receiver unchanged. Currying with no preset
/// arguments yields a plain wrapper around `f`.
///
/// # Examples
///
/// ```
/// use dark_fns::{Function, Value, function::curry};
///
/// let sum = Function::from_fn(|args| {
///     Value::from(args.iter().filter_map(Value::as_number).sum::<f64>())
/// });
///
/// let add_one = curry(&sum, [Value::from(1)]);
/// assert_eq!(add_one.invoke(&[Value::from(2), Value::from(3)]), 6);
///
/// let all_fixed = curry(&sum, [Value::from(1), Value::from(2), Value::from(3)]);
/// assert_eq!(all_fixed.invoke(&[]), 6);
/// ```
pub fn curry<I>(f: &Function, preset: I) -> Function
where
    I: IntoIterator<Item = Value>,
{
    let f = f.clone();
    let preset: Vec<Value> = preset.into_iter().collect();
    Function::new(move |this, args| {
        if preset.is_empty() {
            return f.call(this, args);
        }
        let mut combined = Vec::with_capacity(preset.len() + args.len());
        combined.extend_from_slice(&preset);
        combined.extend_from_slice(args);
        f.call(this, &combined)
    })
}
