//! Property keys and their coercion rules.
//!
//! An object is addressed by name, an array by position. Callers may hold
//! either form and use it against either container: against an object the key
//! is stringified, against an array it must be (or parse as) an integer.

use std::borrow::Cow;
use std::fmt;

use crate::error::{AccessError, Result};

/// Locator for one entry of a container.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PropertyKey {
    /// Object member name.
    Name(String),
    /// Array position. Negative values are representable so that bounds
    /// failures carry the index the caller actually asked for.
    Index(i64),
}

impl PropertyKey {
    /// Parse a textual key, treating canonical integer text as an index and
    /// anything else as a name.
    ///
    /// Only text that [`as_name`](PropertyKey::as_name) would reproduce
    /// becomes an `Index`, so `"007"`, `"-0"` and `"+1"` stay names and still
    /// address the member spelled that way. Against an array a name is
    /// parsed again, so `"007"` still reaches position 7 there.
    ///
    /// ```
    /// use docpath_core::PropertyKey;
    ///
    /// assert_eq!(PropertyKey::parse_loose("12"), PropertyKey::Index(12));
    /// assert_eq!(PropertyKey::parse_loose("-1"), PropertyKey::Index(-1));
    /// assert_eq!(PropertyKey::parse_loose("007"), PropertyKey::Name("007".into()));
    /// assert_eq!(PropertyKey::parse_loose("name"), PropertyKey::Name("name".into()));
    /// ```
    pub fn parse_loose(raw: &str) -> Self {
        match raw.parse::<i64>() {
            Ok(index) if index.to_string() == raw => PropertyKey::Index(index),
            _ => PropertyKey::Name(raw.to_string()),
        }
    }

    /// Stringified form, used when the target is an object.
    pub fn as_name(&self) -> Cow<'_, str> {
        match self {
            PropertyKey::Name(name) => Cow::Borrowed(name),
            PropertyKey::Index(index) => Cow::Owned(index.to_string()),
        }
    }

    /// Integer form, used when the target is an array.
    ///
    /// # Errors
    ///
    /// Returns [`AccessError::InvalidIndexKey`] if a name does not parse as an
    /// integer.
    pub fn as_index(&self) -> Result<i64> {
        match self {
            PropertyKey::Index(index) => Ok(*index),
            PropertyKey::Name(name) => name
                .parse::<i64>()
                .map_err(|_| AccessError::InvalidIndexKey { key: name.clone() }),
        }
    }
}

impl fmt::Display for PropertyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyKey::Name(name) => f.write_str(name),
            PropertyKey::Index(index) => write!(f, "{index}"),
        }
    }
}

impl From<&str> for PropertyKey {
    fn from(name: &str) -> Self {
        PropertyKey::Name(name.to_string())
    }
}

impl From<String> for PropertyKey {
    fn from(name: String) -> Self {
        PropertyKey::Name(name)
    }
}

impl From<i64> for PropertyKey {
    fn from(index: i64) -> Self {
        PropertyKey::Index(index)
    }
}

impl From<usize> for PropertyKey {
    fn from(index: usize) -> Self {
        PropertyKey::Index(i64::try_from(index).unwrap_or(i64::MAX))
    }
}

impl From<i32> for PropertyKey {
    fn from(index: i32) -> Self {
        PropertyKey::Index(i64::from(index))
    }
}
