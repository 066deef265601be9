//!
//! dark-fns: small helpers for working with dynamically shaped data.
//!
//! Every helper operates on [`Value`], a closed tagged union of the shapes a
//! loosely typed record can take (undefined, null, booleans, numbers, strings,
//! sequences, mappings, functions and opaque host objects).
//!
//! ## Groups
//!
//! * **Predicates ([`assert`])**: type, equality and emptiness checks, such as
//!   [`assert::is_strict_obj`] and [`assert::is_empty`].
//! * **Function combinators ([`function`], also [`fns`])**: composition with
//!   [`function::concat_fn`], partial application with [`function::curry`] and
//!   variable-arity argument normalization with [`function::indefinite_args`].
//! * **Sequences ([`array`])**: generators ([`array::series`],
//!   [`array::ari_series`], [`array::range`]) and defined-value-wins merges
//!   ([`array::def_assign`], [`array::deep_def_assign`], [`array::fill`]).
//! * **Mappings ([`object`])**: dot-delimited key-path access
//!   ([`object::get_val_by_key_path`], [`object::set_val_by_key_path`]) and
//!   recursive merging with [`object::mixin`].
//!
//! ```
//! use dark_fns::{Value, object::{self, MixinOptions}};
//! use serde_json::json;
//!
//! let mut config = Value::from(json!({"server": {"port": 80, "hosts": ["a"]}}));
//! let overrides = Value::from(json!({"server": {"port": 8080, "hosts": ["b"]}}));
//!
//! object::mixin(&mut config, &overrides, &MixinOptions::new().concat_arr(true));
//!
//! assert_eq!(object::get_val_by_key_path(&config, "server.port", None), Some(&Value::from(8080)));
//! assert_eq!(config.to_json(), Some(json!({"server": {"port": 8080, "hosts": ["a", "b"]}})));
//! ```

pub mod array;
pub mod assert;
pub mod function;
pub mod object;
pub mod value;

/// The function combinators under their original group name.
pub use function as fns;

pub use value::{Function, Map, Native, TypeTag, Value};

/// Result type used throughout the dark-fns library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the dark-fns library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Structured value conversion errors from the value module
    #[error(transparent)]
    Value(value::ValueError),

    /// Structured key path errors from the object module
    #[error(transparent)]
    Path(object::PathError),

    /// Structured key path access errors from the object module
    #[error(transparent)]
    Object(object::ObjectError),

    /// Structured argument errors from the array module
    #[error(transparent)]
    Array(array::ArrayError),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Value(_) => "value",
            Error::Path(_) | Error::Object(_) => "object",
            Error::Array(_) => "array",
        }
    }

    /// Check if this error indicates a key path did not resolve.
    pub fn is_not_found(&self) -> bool {
        match self {
            Error::Object(object_err) => object_err.is_not_found(),
            _ => false,
        }
    }

    /// Check if this error is type-related.
    pub fn is_type_error(&self) -> bool {
        match self {
            Error::Value(value_err) => value_err.is_type_error(),
            Error::Object(object_err) => object_err.is_type_error(),
            Error::Array(array_err) => array_err.is_type_error(),
            Error::Path(_) => false,
        }
    }

    /// Check if this error is caused by a malformed argument list.
    pub fn is_argument_error(&self) -> bool {
        match self {
            Error::Array(array_err) => array_err.is_argument_error(),
            _ => false,
        }
    }
}
