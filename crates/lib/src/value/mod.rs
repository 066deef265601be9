//! The dynamic value type shared by every helper in this crate.
//!
//! [`Value`] is a closed tagged union standing in for the loosely typed values
//! the helpers were designed around. Predicates in [`crate::assert`] become
//! exhaustive matches over its variants, and the array/object helpers read and
//! mutate it in place.
//!
//! # Value Types
//!
//! ## Primitives
//! - [`Value::Undefined`] - An absent value. Distinct from null: merges skip it
//!   and key-path lookups treat it as "not there".
//! - [`Value::Null`] - An explicit empty value
//! - [`Value::Bool`] - Boolean values
//! - [`Value::Number`] - Double precision numbers
//! - [`Value::String`] - UTF-8 text
//!
//! ## Containers
//! - [`Value::Array`] - Ordered sequences
//! - [`Value::Object`] - Insertion-ordered string-keyed mappings
//!
//! ## Handles
//! - [`Value::Function`] - A shared callable, compared by identity
//! - [`Value::Native`] - An opaque host object, compared by identity
//!
//! # Direct Comparisons
//!
//! ```
//! # use dark_fns::Value;
//! let text = Value::from("hello");
//! let number = Value::from(42);
//! let flag = Value::from(true);
//!
//! assert!(text == "hello");
//! assert!(number == 42);
//! assert!(flag == true);
//! assert!(42 == number);
//!
//! // Type mismatches compare unequal
//! assert!(!(text == 42));
//! ```

use std::fmt;

use indexmap::IndexMap;

pub mod errors;
pub mod handle;
mod json;

pub use errors::ValueError;
pub use handle::{Function, Native};

/// Insertion-ordered mapping used for [`Value::Object`].
pub type Map = IndexMap<String, Value>;

/// Shared undefined value handed out by lookups that miss.
pub(crate) static UNDEFINED: Value = Value::Undefined;

/// A dynamically shaped value.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Value {
    /// Absent value
    #[default]
    Undefined,
    /// Null value
    Null,
    /// Boolean value
    Bool(bool),
    /// Number value
    Number(f64),
    /// Text value
    String(String),
    /// Ordered sequence of values
    Array(Vec<Value>),
    /// String-keyed mapping of values
    Object(Map),
    /// Callable handle
    Function(Function),
    /// Opaque host object
    Native(Native),
}

/// The primitive type tag of a value, as reported by a loose `typeof`.
///
/// The set is closed. Null, sequences, mappings and native objects all report
/// [`TypeTag::Object`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeTag {
    Undefined,
    Object,
    Boolean,
    Number,
    String,
    Function,
}

impl TypeTag {
    /// Returns the tag as the lowercase name `typeof` would produce.
    pub fn as_str(&self) -> &'static str {
        match self {
            TypeTag::Undefined => "undefined",
            TypeTag::Object => "object",
            TypeTag::Boolean => "boolean",
            TypeTag::Number => "number",
            TypeTag::String => "string",
            TypeTag::Function => "function",
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Value {
    /// Returns the primitive type tag of this value
    pub fn type_of(&self) -> TypeTag {
        match self {
            Value::Undefined => TypeTag::Undefined,
            Value::Null | Value::Array(_) | Value::Object(_) | Value::Native(_) => TypeTag::Object,
            Value::Bool(_) => TypeTag::Boolean,
            Value::Number(_) => TypeTag::Number,
            Value::String(_) => TypeTag::String,
            Value::Function(_) => TypeTag::Function,
        }
    }

    /// Returns the variant name as a string
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Undefined => "undefined",
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
            Value::Function(_) => "function",
            Value::Native(_) => "native",
        }
    }

    /// Returns true unless this is [`Value::Undefined`]
    pub fn is_defined(&self) -> bool {
        !matches!(self, Value::Undefined)
    }

    /// Returns true if this is [`Value::Undefined`]
    pub fn is_undefined(&self) -> bool {
        matches!(self, Value::Undefined)
    }

    /// Attempts to convert to a boolean
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Attempts to convert to a number
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to convert to a number, returning default if not a number
    pub fn as_number_or(&self, default: f64) -> f64 {
        self.as_number().unwrap_or(default)
    }

    /// Attempts to convert to a string slice
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Attempts to convert to a sequence (returns immutable reference)
    pub fn as_array(&self) -> Option<&Vec<Value>> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Attempts to convert to a mutable sequence reference
    pub fn as_array_mut(&mut self) -> Option<&mut Vec<Value>> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Attempts to convert to a mapping (returns immutable reference)
    pub fn as_object(&self) -> Option<&Map> {
        match self {
            Value::Object(map) => Some(map),
            _ => None,
        }
    }

    /// Attempts to convert to a mutable mapping reference
    pub fn as_object_mut(&mut self) -> Option<&mut Map> {
        match self {
            Value::Object(map) => Some(map),
            _ => None,
        }
    }

    /// Attempts to convert to a function handle
    pub fn as_function(&self) -> Option<&Function> {
        match self {
            Value::Function(func) => Some(func),
            _ => None,
        }
    }

    /// Attempts to convert to a native object handle
    pub fn as_native(&self) -> Option<&Native> {
        match self {
            Value::Native(native) => Some(native),
            _ => None,
        }
    }

    /// Looks up a property by key.
    ///
    /// Mappings are indexed by key and sequences by decimal index. Every other
    /// value has no addressable properties.
    ///
    /// ```
    /// # use dark_fns::Value;
    /// let value = Value::from(serde_json::json!({"list": [10, 20]}));
    /// let list = value.get_property("list").unwrap();
    /// assert_eq!(list.get_property("1"), Some(&Value::from(20)));
    /// assert_eq!(list.get_property("length"), None);
    /// ```
    pub fn get_property(&self, key: &str) -> Option<&Value> {
        match self {
            Value::Object(map) => map.get(key),
            Value::Array(items) => items.get(parse_index(key)?),
            _ => None,
        }
    }

    /// Looks up a property by key, returning a mutable reference
    pub fn get_property_mut(&mut self, key: &str) -> Option<&mut Value> {
        match self {
            Value::Object(map) => map.get_mut(key),
            Value::Array(items) => items.get_mut(parse_index(key)?),
            _ => None,
        }
    }
}

/// Parses a canonical decimal sequence index ("0", "12", but not "01" or "+1").
pub(crate) fn parse_index(key: &str) -> Option<usize> {
    if key.is_empty() || (key.len() > 1 && key.starts_with('0')) {
        return None;
    }
    if !key.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    key.parse().ok()
}

/// Formats a number the way loosely typed runtimes print it: integral values
/// without a fractional part, `NaN`, and signed `Infinity`.
pub(crate) fn format_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string()
    } else if n == 0.0 {
        // Negative zero prints as zero
        "0".to_string()
    } else {
        n.to_string()
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => write!(f, "undefined"),
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Number(n) => write!(f, "{}", format_number(*n)),
            Value::String(s) => write!(f, "{s}"),
            Value::Array(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
            Value::Object(map) => {
                write!(f, "{{")?;
                for (i, (key, value)) in map.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                write!(f, "}}")
            }
            Value::Function(_) => write!(f, "[Function]"),
            Value::Native(native) => write!(f, "[Native {}]", native.type_name()),
        }
    }
}

// Convenient From implementations for common types
impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(value)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Number(f64::from(value))
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Number(f64::from(value))
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Number(f64::from(value))
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        // Precision loss above 2^53 matches double-based numbers
        Value::Number(value as f64)
    }
}

impl From<u64> for Value {
    fn from(value: u64) -> Self {
        Value::Number(value as f64)
    }
}

impl From<usize> for Value {
    fn from(value: usize) -> Self {
        Value::Number(value as f64)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::Array(value)
    }
}

impl From<Map> for Value {
    fn from(value: Map) -> Self {
        Value::Object(value)
    }
}

impl From<Function> for Value {
    fn from(value: Function) -> Self {
        Value::Function(value)
    }
}

impl From<Native> for Value {
    fn from(value: Native) -> Self {
        Value::Native(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Undefined, Into::into)
    }
}

impl FromIterator<Value> for Value {
    fn from_iter<T: IntoIterator<Item = Value>>(iter: T) -> Self {
        Value::Array(iter.into_iter().collect())
    }
}

impl FromIterator<(String, Value)> for Value {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        Value::Object(iter.into_iter().collect())
    }
}

fn mismatch(expected: &str, value: &Value) -> ValueError {
    ValueError::TypeMismatch {
        expected: expected.to_string(),
        actual: value.type_name().to_string(),
    }
}

impl TryFrom<&Value> for f64 {
    type Error = ValueError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        value.as_number().ok_or_else(|| mismatch("number", value))
    }
}

impl TryFrom<&Value> for i64 {
    type Error = ValueError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Number(n) if n.is_finite() && n.fract() == 0.0 => Ok(*n as i64),
            _ => Err(mismatch("integer", value)),
        }
    }
}

impl TryFrom<&Value> for bool {
    type Error = ValueError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        value.as_bool().ok_or_else(|| mismatch("bool", value))
    }
}

impl TryFrom<&Value> for String {
    type Error = ValueError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        value
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| mismatch("string", value))
    }
}

impl<'a> TryFrom<&'a Value> for &'a str {
    type Error = ValueError;

    fn try_from(value: &'a Value) -> Result<Self, Self::Error> {
        value.as_str().ok_or_else(|| mismatch("string", value))
    }
}

impl TryFrom<&Value> for Vec<Value> {
    type Error = ValueError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        value
            .as_array()
            .cloned()
            .ok_or_else(|| mismatch("array", value))
    }
}

impl TryFrom<&Value> for Map {
    type Error = ValueError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        value
            .as_object()
            .cloned()
            .ok_or_else(|| mismatch("object", value))
    }
}

impl TryFrom<&Value> for Function {
    type Error = ValueError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        value
            .as_function()
            .cloned()
            .ok_or_else(|| mismatch("function", value))
    }
}

// PartialEq implementations for comparing Value with other types
impl PartialEq<str> for Value {
    fn eq(&self, other: &str) -> bool {
        matches!(self, Value::String(s) if s == other)
    }
}

impl PartialEq<&str> for Value {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

impl PartialEq<String> for Value {
    fn eq(&self, other: &String) -> bool {
        self == other.as_str()
    }
}

impl PartialEq<f64> for Value {
    fn eq(&self, other: &f64) -> bool {
        matches!(self, Value::Number(n) if n == other)
    }
}

impl PartialEq<i64> for Value {
    fn eq(&self, other: &i64) -> bool {
        *self == *other as f64
    }
}

impl PartialEq<i32> for Value {
    fn eq(&self, other: &i32) -> bool {
        *self == f64::from(*other)
    }
}

impl PartialEq<bool> for Value {
    fn eq(&self, other: &bool) -> bool {
        matches!(self, Value::Bool(b) if b == other)
    }
}

// Reverse implementations for symmetry
impl PartialEq<Value> for str {
    fn eq(&self, other: &Value) -> bool {
        other == self
    }
}

impl PartialEq<Value> for &str {
    fn eq(&self, other: &Value) -> bool {
        other == *self
    }
}

impl PartialEq<Value> for String {
    fn eq(&self, other: &Value) -> bool {
        other == self
    }
}

impl PartialEq<Value> for f64 {
    fn eq(&self, other: &Value) -> bool {
        other == self
    }
}

impl PartialEq<Value> for i64 {
    fn eq(&self, other: &Value) -> bool {
        other == self
    }
}

impl PartialEq<Value> for i32 {
    fn eq(&self, other: &Value) -> bool {
        other == self
    }
}

impl PartialEq<Value> for bool {
    fn eq(&self, other: &Value) -> bool {
        other == self
    }
}
