//! Native document tree.
//!
//! `DocValue` mirrors JSON but keeps objects as an ordered list of unique
//! keys ([`Members`]) instead of an index map, and adds an
//! [`Opaque`](DocValue::Opaque) leaf for host resources that ride along in a
//! document (file handles, connections, ...). Opaque leaves can be read and
//! moved but not deep-copied or serialized.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use serde::ser::{Error as _, SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};
use serde_json::{Number, Value};

use crate::document::{Document, Kind};
use crate::error::{AccessError, Result};

/// A node of the native document tree.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DocValue {
    #[default]
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Array(Vec<DocValue>),
    Object(Members),
    Opaque(OpaqueHandle),
}

/// Object storage: key-value pairs in insertion order, keys unique.
///
/// Every way of building `Members` goes through [`insert`](Members::insert),
/// so a repeated key overwrites the earlier value in the earlier position.
///
/// ```
/// use docpath_core::{DocValue, Members};
///
/// let members: Members = vec![
///     ("a".to_string(), DocValue::from(1i64)),
///     ("b".to_string(), DocValue::from(2i64)),
///     ("a".to_string(), DocValue::from(3i64)),
/// ]
/// .into();
/// assert_eq!(members.keys().collect::<Vec<_>>(), ["a", "b"]);
/// assert_eq!(members.get("a"), Some(&DocValue::from(3i64)));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Members {
    entries: Vec<(String, DocValue)>,
}

impl Members {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&DocValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut DocValue> {
        self.entries
            .iter_mut()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// Bind `key`, keeping the position of an existing key.
    pub fn insert(&mut self, key: String, value: DocValue) {
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &DocValue> {
        self.entries.iter().map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &DocValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl FromIterator<(String, DocValue)> for Members {
    fn from_iter<I: IntoIterator<Item = (String, DocValue)>>(iter: I) -> Self {
        let mut members = Members::new();
        for (key, value) in iter {
            members.insert(key, value);
        }
        members
    }
}

impl From<Vec<(String, DocValue)>> for Members {
    fn from(entries: Vec<(String, DocValue)>) -> Self {
        entries.into_iter().collect()
    }
}

impl IntoIterator for Members {
    type Item = (String, DocValue);
    type IntoIter = std::vec::IntoIter<(String, DocValue)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// Shared handle to a host value that has no document representation.
///
/// Cloning the handle shares the resource; equality is identity.
#[derive(Clone)]
pub struct OpaqueHandle {
    type_name: &'static str,
    inner: Arc<dyn Any + Send + Sync>,
}

impl OpaqueHandle {
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self {
            type_name: std::any::type_name::<T>(),
            inner: Arc::new(value),
        }
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.inner.downcast_ref::<T>()
    }
}

impl fmt::Debug for OpaqueHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "OpaqueHandle<{}>", self.type_name)
    }
}

impl PartialEq for OpaqueHandle {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl DocValue {
    /// Empty object.
    pub fn object() -> Self {
        DocValue::Object(Members::new())
    }

    /// Empty array.
    pub fn array() -> Self {
        DocValue::Array(Vec::new())
    }

    pub fn is_null(&self) -> bool {
        matches!(self, DocValue::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            DocValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            DocValue::Number(n) => n.as_i64(),
            _ => None,
        }
    }
}

impl Document for DocValue {
    fn kind(&self) -> Kind {
        match self {
            DocValue::Object(_) => Kind::Object,
            DocValue::Array(_) => Kind::Array,
            DocValue::Null
            | DocValue::Bool(_)
            | DocValue::Number(_)
            | DocValue::String(_)
            | DocValue::Opaque(_) => Kind::Scalar,
        }
    }

    fn element(&self, index: usize) -> Option<&DocValue> {
        match self {
            DocValue::Array(items) => items.get(index),
            _ => None,
        }
    }

    fn element_mut(&mut self, index: usize) -> Option<&mut DocValue> {
        match self {
            DocValue::Array(items) => items.get_mut(index),
            _ => None,
        }
    }

    fn insert_element(&mut self, index: usize, value: DocValue) {
        if let DocValue::Array(items) = self {
            items.insert(index, value);
        }
    }

    fn element_count(&self) -> usize {
        match self {
            DocValue::Array(items) => items.len(),
            _ => 0,
        }
    }

    fn element_values(&self) -> Box<dyn Iterator<Item = &DocValue> + '_> {
        match self {
            DocValue::Array(items) => Box::new(items.iter()),
            _ => Box::new(std::iter::empty()),
        }
    }

    fn member(&self, key: &str) -> Option<&DocValue> {
        match self {
            DocValue::Object(members) => members.get(key),
            _ => None,
        }
    }

    fn member_mut(&mut self, key: &str) -> Option<&mut DocValue> {
        match self {
            DocValue::Object(members) => members.get_mut(key),
            _ => None,
        }
    }

    fn insert_member(&mut self, key: String, value: DocValue) {
        if let DocValue::Object(members) = self {
            members.insert(key, value);
        }
    }

    fn member_keys(&self) -> Vec<String> {
        match self {
            DocValue::Object(members) => members.keys().map(str::to_string).collect(),
            _ => Vec::new(),
        }
    }

    fn member_values(&self) -> Box<dyn Iterator<Item = &DocValue> + '_> {
        match self {
            DocValue::Object(members) => Box::new(members.values()),
            _ => Box::new(std::iter::empty()),
        }
    }

    fn member_count(&self) -> usize {
        match self {
            DocValue::Object(members) => members.len(),
            _ => 0,
        }
    }

    fn try_duplicate(&self) -> Result<DocValue> {
        match self {
            DocValue::Array(items) => items
                .iter()
                .map(DocValue::try_duplicate)
                .collect::<Result<Vec<_>>>()
                .map(DocValue::Array),
            DocValue::Object(members) => members
                .iter()
                .map(|(k, v)| v.try_duplicate().map(|v| (k.to_string(), v)))
                .collect::<Result<Members>>()
                .map(DocValue::Object),
            DocValue::Opaque(handle) => Err(AccessError::CloneUnsupported {
                type_name: handle.type_name().to_string(),
            }),
            scalar => Ok(scalar.clone()),
        }
    }

    fn type_name(&self) -> &'static str {
        match self {
            DocValue::Null => "null",
            DocValue::Bool(_) => "boolean",
            DocValue::Number(_) => "number",
            DocValue::String(_) => "string",
            DocValue::Array(_) => "array",
            DocValue::Object(_) => "object",
            DocValue::Opaque(_) => "opaque",
        }
    }
}

impl Serialize for DocValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            DocValue::Null => serializer.serialize_unit(),
            DocValue::Bool(b) => serializer.serialize_bool(*b),
            DocValue::Number(n) => n.serialize(serializer),
            DocValue::String(s) => serializer.serialize_str(s),
            DocValue::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            DocValue::Object(members) => {
                let mut map = serializer.serialize_map(Some(members.len()))?;
                for (k, v) in members.iter() {
                    map.serialize_entry(k, v)?;
                }
                map.end()
            }
            DocValue::Opaque(handle) => Err(S::Error::custom(format!(
                "opaque value of type {} cannot be serialized",
                handle.type_name()
            ))),
        }
    }
}

impl From<Value> for DocValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => DocValue::Null,
            Value::Bool(b) => DocValue::Bool(b),
            Value::Number(n) => DocValue::Number(n),
            Value::String(s) => DocValue::String(s),
            Value::Array(items) => DocValue::Array(items.into_iter().map(DocValue::from).collect()),
            Value::Object(map) => DocValue::Object(
                map.into_iter()
                    .map(|(k, v)| (k, DocValue::from(v)))
                    .collect(),
            ),
        }
    }
}

impl TryFrom<DocValue> for Value {
    type Error = AccessError;

    fn try_from(value: DocValue) -> Result<Value> {
        serde_json::to_value(&value).map_err(|e| AccessError::Conversion(e.to_string()))
    }
}

impl From<&str> for DocValue {
    fn from(s: &str) -> Self {
        DocValue::String(s.to_string())
    }
}

impl From<i64> for DocValue {
    fn from(n: i64) -> Self {
        DocValue::Number(n.into())
    }
}

impl From<bool> for DocValue {
    fn from(b: bool) -> Self {
        DocValue::Bool(b)
    }
}
