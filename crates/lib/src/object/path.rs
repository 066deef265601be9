//! Dot-delimited key paths.
//!
//! A [`KeyPath`] is the owned form of the `a.b.c` strings accepted by
//! [`get_val_by_key_path`](super::get_val_by_key_path) and
//! [`set_val_by_key_path`](super::set_val_by_key_path). Paths are kept
//! verbatim: `"a..b"` has an empty middle segment that addresses the `""`
//! key, and the empty string is the root.
//!
//! ```rust
//! use dark_fns::object::KeyPath;
//!
//! let path = KeyPath::new().push("user")?.push("profile")?.push("name")?;
//! assert_eq!(path.as_str(), "user.profile.name");
//! assert_eq!(path.last(), Some("name"));
//! assert_eq!(path.parent().map(|p| p.to_string()), Some("user.profile".to_string()));
//! # Ok::<(), dark_fns::object::PathError>(())
//! ```

use std::{convert::Infallible, fmt, str::FromStr};

use thiserror::Error;

/// Error type for key path construction.
#[non_exhaustive]
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PathError {
    /// Invalid segment: segments cannot contain dots.
    #[error("Invalid segment '{segment}': {reason}")]
    InvalidSegment { segment: String, reason: String },
}

// Conversion from PathError to the main Error type
impl From<PathError> for crate::Error {
    fn from(err: PathError) -> Self {
        crate::Error::Path(err)
    }
}

/// An owned, dot-delimited key path.
///
/// The segment count is tracked next to the text, so a path holding one
/// empty segment differs from the root even though both display as `""`.
/// String-based lookups read `""` as the root.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct KeyPath {
    inner: String,
    segments: usize,
}

impl KeyPath {
    /// Creates the root path, which addresses the value itself.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a segment.
    ///
    /// # Errors
    /// Returns an error if the segment contains a dot.
    pub fn push(mut self, segment: impl AsRef<str>) -> Result<Self, PathError> {
        let segment = segment.as_ref();
        if segment.contains('.') {
            return Err(PathError::InvalidSegment {
                segment: segment.to_string(),
                reason: "segments cannot contain dots".to_string(),
            });
        }
        if !self.is_root() {
            self.inner.push('.');
        }
        self.inner.push_str(segment);
        self.segments += 1;
        Ok(self)
    }

    /// Appends every segment of `other`.
    pub fn join(mut self, other: &KeyPath) -> Self {
        if other.is_root() {
            return self;
        }
        if !self.is_root() {
            self.inner.push('.');
        }
        self.inner.push_str(&other.inner);
        self.segments += other.segments;
        self
    }

    /// Iterates over the segments, root first.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        // The root has no segments, while "".split('.') yields one
        self.inner.split('.').take(self.segments)
    }

    /// Returns the number of segments.
    pub fn len(&self) -> usize {
        self.segments
    }

    /// Returns true if this is the root path.
    pub fn is_root(&self) -> bool {
        self.segments == 0
    }

    /// Returns the path without its last segment, or `None` for the root.
    pub fn parent(&self) -> Option<KeyPath> {
        match self.segments {
            0 => None,
            1 => Some(KeyPath::new()),
            segments => self.inner.rsplit_once('.').map(|(parent, _)| KeyPath {
                inner: parent.to_string(),
                segments: segments - 1,
            }),
        }
    }

    /// Returns the last segment, or `None` for the root.
    pub fn last(&self) -> Option<&str> {
        if self.is_root() {
            return None;
        }
        self.inner.rsplit('.').next()
    }

    /// Returns the path as a string slice.
    pub fn as_str(&self) -> &str {
        &self.inner
    }
}

impl AsRef<str> for KeyPath {
    fn as_ref(&self) -> &str {
        &self.inner
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.inner)
    }
}

impl FromStr for KeyPath {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(KeyPath::from(s))
    }
}

impl From<&str> for KeyPath {
    fn from(s: &str) -> Self {
        KeyPath::from(s.to_string())
    }
}

impl From<String> for KeyPath {
    /// The empty string parses as the root.
    fn from(inner: String) -> Self {
        let segments = if inner.is_empty() {
            0
        } else {
            inner.matches('.').count() + 1
        };
        KeyPath { inner, segments }
    }
}

impl<S: AsRef<str>> FromIterator<S> for KeyPath {
    /// Joins segments verbatim; segments that contain dots split further.
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let segments: Vec<String> = iter
            .into_iter()
            .map(|segment| segment.as_ref().to_string())
            .collect();
        if segments.is_empty() {
            return KeyPath::new();
        }
        let inner = segments.join(".");
        KeyPath {
            segments: inner.matches('.').count() + 1,
            inner,
        }
    }
}
