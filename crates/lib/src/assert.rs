//! Predicates over [`Value`].
//!
//! Every predicate takes one value and returns a boolean. They are pure and
//! total: there is no input they reject.
//!
//! Type predicates follow the loose `typeof` tagging reported by
//! [`Value::type_of`], so [`is_obj`] is true for null and sequences as well as
//! mappings. Emptiness predicates compare the canonical serialization (see
//! [`Value::to_json`]) rather than a length, which means a mapping whose only
//! entries are undefined or functions counts as empty.
//!
//! ```
//! use dark_fns::{Value, assert};
//!
//! assert!(assert::is_obj(&Value::Null));
//! assert!(assert::is_strict_obj(&Value::Null));
//! assert!(!assert::is_array(&Value::Null));
//! assert!(assert::is_empty(&Value::from("")));
//! assert!(assert::is_falsy(&Value::from(0)));
//! ```

use std::any::{Any, TypeId};

use serde_json::Value as JsonValue;

use crate::value::{Function, Map, TypeTag, Value};

/// Returns true if the value is tagged `function`.
pub fn is_fn(target: &Value) -> bool {
    target.type_of() == TypeTag::Function
}

/// Returns true if the value is tagged `object`: null, sequences, mappings and
/// native objects.
pub fn is_obj(target: &Value) -> bool {
    target.type_of() == TypeTag::Object
}

/// Returns true if the value is undefined.
pub fn is_undef(target: &Value) -> bool {
    target.type_of() == TypeTag::Undefined
}

/// Returns true if the value is tagged `number`, NaN included.
pub fn is_number(target: &Value) -> bool {
    target.type_of() == TypeTag::Number
}

/// Returns true if the value is tagged `string`.
pub fn is_string(target: &Value) -> bool {
    target.type_of() == TypeTag::String
}

/// Returns true if the value is null.
pub fn is_null(target: &Value) -> bool {
    matches!(target, Value::Null)
}

/// Returns true if the value is the number zero (either sign).
pub fn is_zero(target: &Value) -> bool {
    matches!(target, Value::Number(n) if *n == 0.0)
}

/// Returns true if the value is `false`.
pub fn is_false(target: &Value) -> bool {
    matches!(target, Value::Bool(false))
}

/// Returns true if the value is `true`.
pub fn is_true(target: &Value) -> bool {
    matches!(target, Value::Bool(true))
}

/// Returns true if the value is the empty string.
pub fn is_empty_string(target: &Value) -> bool {
    matches!(target, Value::String(s) if s.is_empty())
}

/// Returns true if the value serializes to `[]`.
pub fn is_empty_array(target: &Value) -> bool {
    matches!(target.to_json(), Some(JsonValue::Array(items)) if items.is_empty())
}

/// Returns true if the value serializes to `{}`.
///
/// ```
/// # use dark_fns::{Function, Value, assert::is_empty_obj};
/// # use serde_json::json;
/// assert!(is_empty_obj(&Value::from(json!({}))));
/// assert!(!is_empty_obj(&Value::from(json!({"a": 1}))));
///
/// // Entries without a canonical form do not count
/// let only_fn: Value = [("f".to_string(), Value::from(Function::from_fn(|_| Value::Null)))]
///     .into_iter()
///     .collect();
/// assert!(is_empty_obj(&only_fn));
/// ```
pub fn is_empty_obj(target: &Value) -> bool {
    matches!(target.to_json(), Some(JsonValue::Object(map)) if map.is_empty())
}

/// Returns true if the value is a sequence.
pub fn is_array(target: &Value) -> bool {
    is_obj(target) && matches!(target, Value::Array(_))
}

/// Returns true if the value is `object`-tagged but not a sequence.
///
/// This includes null, which the loose type tag reports as an object.
pub fn is_strict_obj(target: &Value) -> bool {
    is_obj(target) && !is_array(target)
}

/// Returns true if the value is an empty string, or serializes to an empty
/// sequence or mapping.
pub fn is_empty(target: &Value) -> bool {
    is_empty_string(target) || is_empty_array(target) || is_empty_obj(target)
}

/// Returns true if the value is falsy: undefined, null, `false`, zero, NaN or
/// the empty string.
pub fn is_falsy(target: &Value) -> bool {
    match target {
        Value::Undefined | Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => *n == 0.0 || n.is_nan(),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) | Value::Function(_) | Value::Native(_) => false,
    }
}

/// Returns true if the value's runtime type is `T`.
///
/// Sequences are instances of `Vec<Value>`, mappings of [`Map`], functions of
/// [`Function`] and native objects of whatever they wrap. Primitives are not
/// instances of anything.
///
/// ```
/// # use dark_fns::{Map, Native, Value, assert::is_instance_of};
/// struct Session;
///
/// let native = Value::from(Native::new(Session));
/// assert!(is_instance_of::<Session>(&native));
/// assert!(!is_instance_of::<Map>(&native));
/// assert!(is_instance_of::<Vec<Value>>(&Value::Array(vec![])));
/// ```
pub fn is_instance_of<T: Any>(target: &Value) -> bool {
    let wanted = TypeId::of::<T>();
    match target {
        Value::Array(_) => wanted == TypeId::of::<Vec<Value>>(),
        Value::Object(_) => wanted == TypeId::of::<Map>(),
        Value::Function(_) => wanted == TypeId::of::<Function>(),
        Value::Native(native) => native.is::<T>(),
        _ => false,
    }
}
