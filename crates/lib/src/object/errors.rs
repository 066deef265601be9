//! Error types for key path access.

use thiserror::Error;

/// Structured error types for key path lookups and assignments.
///
/// # Examples
///
/// ```
/// # use dark_fns::{Value, object::{ObjectError, set_val_by_key_path}};
/// let mut empty = Value::from(serde_json::json!({}));
/// let err = set_val_by_key_path(&mut empty, Value::from(3), "a.b").unwrap_err();
///
/// assert!(err.is_not_found());
/// assert_eq!(err.path(), "a.b");
/// ```
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ObjectError {
    /// A segment of the path resolved to undefined
    #[error("Key path '{path}' not found at segment '{segment}'")]
    PathNotFound { path: String, segment: String },

    /// The value holding the final segment cannot have properties
    #[error("Cannot set key path '{path}': parent is {actual}, not a container")]
    NotAContainer { path: String, actual: &'static str },

    /// The final segment does not address a sequence element
    #[error("Cannot set key path '{path}': '{segment}' is not a sequence index")]
    InvalidIndex { path: String, segment: String },
}

impl ObjectError {
    /// Check if this error indicates the path does not resolve
    pub fn is_not_found(&self) -> bool {
        matches!(self, ObjectError::PathNotFound { .. })
    }

    /// Check if this error is related to type mismatches
    pub fn is_type_error(&self) -> bool {
        matches!(
            self,
            ObjectError::NotAContainer { .. } | ObjectError::InvalidIndex { .. }
        )
    }

    /// Get the key path involved in this error
    pub fn path(&self) -> &str {
        match self {
            ObjectError::PathNotFound { path, .. }
            | ObjectError::NotAContainer { path, .. }
            | ObjectError::InvalidIndex { path, .. } => path,
        }
    }
}

// Conversion from ObjectError to the main Error type
impl From<ObjectError> for crate::Error {
    fn from(err: ObjectError) -> Self {
        crate::Error::Object(err)
    }
}
