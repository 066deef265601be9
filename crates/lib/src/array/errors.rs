//! Error types for the dynamic sequence generators.

use thiserror::Error;

/// Structured error types for the `*_args` entry points of [`crate::array`].
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArrayError {
    /// A required argument was not supplied
    #[error("Missing argument '{name}' in call with {arity} argument(s)")]
    MissingArgument { name: &'static str, arity: usize },

    /// More arguments were supplied than the generator accepts
    #[error("Too many arguments: accepts at most {max}, got {arity}")]
    TooManyArguments { max: usize, arity: usize },

    /// An argument has the wrong type
    #[error("Argument '{argument}' type mismatch: expected {expected}, found {actual}")]
    TypeMismatch {
        argument: &'static str,
        expected: &'static str,
        actual: &'static str,
    },
}

impl ArrayError {
    /// Check if this error is related to type mismatches
    pub fn is_type_error(&self) -> bool {
        matches!(self, ArrayError::TypeMismatch { .. })
    }

    /// Check if this error comes from a malformed argument list
    pub fn is_argument_error(&self) -> bool {
        matches!(
            self,
            ArrayError::MissingArgument { .. } | ArrayError::TooManyArguments { .. }
        )
    }

    /// Get the name of the offending argument, if one is known
    pub fn argument(&self) -> Option<&'static str> {
        match self {
            ArrayError::MissingArgument { name, .. } => Some(*name),
            ArrayError::TypeMismatch { argument, .. } => Some(*argument),
            ArrayError::TooManyArguments { .. } => None,
        }
    }
}

// Conversion from ArrayError to the main Error type
impl From<ArrayError> for crate::Error {
    fn from(err: ArrayError) -> Self {
        crate::Error::Array(err)
    }
}
