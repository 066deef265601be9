//! Key path access and recursive merging for mappings.
//!
//! Key paths are dot-delimited strings (`"server.hosts.0"`). Each segment is
//! looked up as a mapping key, or as a decimal index when the current value is
//! a sequence. The empty path addresses the value itself.
//!
//! [`mixin`] deep-merges one mapping into another, with optional
//! concatenation of functions and sequences controlled by [`MixinOptions`].

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::{
    function::concat_fn,
    value::{Map, UNDEFINED, Value, parse_index},
};

pub mod errors;
pub mod path;

pub use errors::ObjectError;
pub use path::{KeyPath, PathError};

/// Looks up the value at `path`.
///
/// - The empty path returns `obj` itself.
/// - If a segment before the last resolves to undefined, the path does not
///   exist and the result is `None`.
/// - If only the last segment is undefined, the result is `default` when one
///   is supplied and undefined otherwise.
///
/// ```
/// # use dark_fns::{Value, object::get_val_by_key_path};
/// # use serde_json::json;
/// let obj = Value::from(json!({"a": {"c": 1}}));
///
/// assert_eq!(get_val_by_key_path(&obj, "a.c", None), Some(&Value::from(1)));
/// assert_eq!(get_val_by_key_path(&obj, "", None), Some(&obj));
///
/// let fallback = Value::from("d");
/// assert_eq!(get_val_by_key_path(&obj, "e", Some(&fallback)), Some(&fallback));
/// assert_eq!(get_val_by_key_path(&obj, "e", None), Some(&Value::Undefined));
/// assert_eq!(get_val_by_key_path(&obj, "e.f", Some(&fallback)), None);
/// ```
pub fn get_val_by_key_path<'a>(
    obj: &'a Value,
    path: impl AsRef<str>,
    default: Option<&'a Value>,
) -> Option<&'a Value> {
    let path = path.as_ref();
    if path.is_empty() {
        return Some(obj);
    }

    let mut segments = path.split('.').peekable();
    let mut current = obj;
    while let Some(segment) = segments.next() {
        match current.get_property(segment).filter(|value| value.is_defined()) {
            Some(next) => current = next,
            None if segments.peek().is_some() => {
                debug!(path, segment, "Key path not found");
                return None;
            }
            None => {
                trace!(path, has_default = default.is_some(), "Key path ends at undefined");
                return Some(default.unwrap_or(&UNDEFINED));
            }
        }
    }
    Some(current)
}

/// Looks up the value at `path`, reporting the first undefined segment.
///
/// Unlike [`get_val_by_key_path`] an undefined final segment is also an
/// error.
///
/// # Errors
/// Returns [`ObjectError::PathNotFound`] naming the segment that resolved to
/// undefined.
pub fn try_get_val_by_key_path(
    obj: &Value,
    path: impl AsRef<str>,
) -> Result<&Value, ObjectError> {
    let path = path.as_ref();
    if path.is_empty() {
        return Ok(obj);
    }

    let mut current = obj;
    for segment in path.split('.') {
        current = current
            .get_property(segment)
            .filter(|value| value.is_defined())
            .ok_or_else(|| ObjectError::PathNotFound {
                path: path.to_string(),
                segment: segment.to_string(),
            })?;
    }
    Ok(current)
}

/// Stores `value` at `path`, mutating `obj` in place.
///
/// Every segment but the last must already resolve to a defined value. The
/// last segment is inserted into a mapping, or written at a decimal index of
/// a sequence, padding the sequence with undefined when the index is past
/// its end. Nothing is modified when an error is returned.
///
/// # Errors
/// - [`ObjectError::PathNotFound`] when an intermediate segment is undefined.
/// - [`ObjectError::NotAContainer`] when the parent of the last segment is
///   neither a mapping nor a sequence.
/// - [`ObjectError::InvalidIndex`] when the parent is a sequence and the last
///   segment is not a decimal index.
///
/// ```
/// # use dark_fns::{Value, object::set_val_by_key_path};
/// # use serde_json::json;
/// let mut obj = Value::from(json!({"a": {"list": [1]}}));
/// set_val_by_key_path(&mut obj, Value::from(2), "a.b")?;
/// set_val_by_key_path(&mut obj, Value::from(3), "a.list.2")?;
///
/// assert_eq!(obj.to_json(), Some(json!({"a": {"list": [1, null, 3], "b": 2}})));
/// # Ok::<(), dark_fns::object::ObjectError>(())
/// ```
pub fn set_val_by_key_path(
    obj: &mut Value,
    value: Value,
    path: impl AsRef<str>,
) -> Result<(), ObjectError> {
    let path = path.as_ref();
    let (parents, last) = match path.rsplit_once('.') {
        Some((parents, last)) => (Some(parents), last),
        None => (None, path),
    };

    let mut current = obj;
    for segment in parents.into_iter().flat_map(|parents| parents.split('.')) {
        current = match current.get_property_mut(segment) {
            Some(next) if next.is_defined() => next,
            _ => {
                debug!(path, segment, "Key path not found, nothing set");
                return Err(ObjectError::PathNotFound {
                    path: path.to_string(),
                    segment: segment.to_string(),
                });
            }
        };
    }

    match current {
        Value::Object(map) => {
            map.insert(last.to_string(), value);
        }
        Value::Array(items) => {
            let index = parse_index(last).ok_or_else(|| ObjectError::InvalidIndex {
                path: path.to_string(),
                segment: last.to_string(),
            })?;
            if index >= items.len() {
                items.resize(index + 1, Value::Undefined);
            }
            items[index] = value;
        }
        other => {
            return Err(ObjectError::NotAContainer {
                path: path.to_string(),
                actual: other.type_name(),
            });
        }
    }
    trace!(path, "Set value by key path");
    Ok(())
}

/// Controls how [`mixin`] combines values present on both sides.
///
/// Deserializes from `{"isConcatFn": true, "isConcatArr": false}`; missing
/// fields default to `false`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MixinOptions {
    /// Compose two functions with [`concat_fn`] instead of overwriting.
    pub is_concat_fn: bool,
    /// Append to an existing sequence instead of overwriting it.
    pub is_concat_arr: bool,
}

impl MixinOptions {
    /// Options with both concatenations disabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether functions on both sides are composed.
    pub fn concat_fn(mut self, enabled: bool) -> Self {
        self.is_concat_fn = enabled;
        self
    }

    /// Sets whether sequences in the target are extended.
    pub fn concat_arr(mut self, enabled: bool) -> Self {
        self.is_concat_arr = enabled;
        self
    }
}

/// Deep-merges `source` into `target` and returns `target`.
///
/// Both values must be mappings; anything else leaves `target` untouched.
/// See [`mixin_map`] for the merge rules.
///
/// ```
/// # use dark_fns::{Value, object::{MixinOptions, mixin}};
/// # use serde_json::json;
/// let mut target = Value::from(json!({"a": {"x": 1, "list": [1]}, "b": 1}));
/// let source = Value::from(json!({"a": {"x": 2, "list": [2]}, "c": 3}));
///
/// mixin(&mut target, &source, &MixinOptions::default());
/// assert_eq!(
///     target.to_json(),
///     Some(json!({"a": {"x": 2, "list": [2]}, "b": 1, "c": 3}))
/// );
/// ```
pub fn mixin<'a>(target: &'a mut Value, source: &Value, options: &MixinOptions) -> &'a mut Value {
    match (&mut *target, source) {
        (Value::Object(target_map), Value::Object(source_map)) => {
            mixin_map(target_map, source_map, options);
        }
        (target, source) => {
            debug!(
                target_type = target.type_name(),
                source_type = source.type_name(),
                "Mixin requires two mappings, skipping"
            );
        }
    }
    target
}

/// Deep-merges `source` into `target` key by key, in source order.
///
/// For each key the incoming value goes through these checks in order:
///
/// 1. If both sides hold a mapping, they are merged recursively and the key
///    is done. A null or native incoming value leaves a target mapping as it
///    is, since it has no keys to merge.
/// 2. With [`MixinOptions::is_concat_fn`], two functions are replaced by
///    their composition, the target's function running first.
/// 3. With [`MixinOptions::is_concat_arr`], an existing sequence in the
///    target is extended: a sequence is spread, any other value is appended
///    as one element.
///
/// The resulting value then overwrites the target's entry. Keys new to the
/// target are appended at the end.
pub fn mixin_map<'a>(target: &'a mut Map, source: &Map, options: &MixinOptions) -> &'a mut Map {
    for (key, incoming) in source {
        if let (Some(Value::Object(existing)), Value::Object(nested)) =
            (target.get_mut(key), incoming)
        {
            trace!(key = key.as_str(), "Merging nested mapping");
            mixin_map(existing, nested, options);
            continue;
        }
        // Null and native objects count as objects but have no keys to merge
        if matches!(target.get(key), Some(Value::Object(_)))
            && matches!(incoming, Value::Null | Value::Native(_))
        {
            trace!(key = key.as_str(), "Keeping mapping over keyless object");
            continue;
        }

        let existing = target.get(key);
        let mut candidate = incoming.clone();

        let composed = match (existing, &candidate) {
            (Some(Value::Function(first)), Value::Function(second)) if options.is_concat_fn => {
                Some(concat_fn([first.clone(), second.clone()]))
            }
            _ => None,
        };
        if let Some(composed) = composed {
            trace!(key = key.as_str(), "Composing functions");
            candidate = Value::Function(composed);
        }

        if options.is_concat_arr {
            if let Some(Value::Array(items)) = existing {
                trace!(key = key.as_str(), "Concatenating sequences");
                let mut joined = items.clone();
                match candidate {
                    Value::Array(more) => joined.extend(more),
                    other => joined.push(other),
                }
                candidate = Value::Array(joined);
            }
        }

        target.insert(key.clone(), candidate);
    }
    target
}
