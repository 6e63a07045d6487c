//! Container inspection, read, and write operations over any [`Document`].
//!
//! These are the calls a path evaluator makes at each segment of a path. All
//! functions are stateless: reads borrow the value they are given, writes
//! mutate the container passed in through `&mut`.
//!
//! Lenient lookups return `Ok(None)` for an absent key. That `None` is the
//! missing-sentinel and is never confused with a present `null` value, which
//! comes back as `Ok(Some(null))`.

use tracing::{debug, trace};

use crate::document::{Document, Kind};
use crate::error::{AccessError, Result};
use crate::key::PropertyKey;

/// True if `value` is an object or an array.
pub fn is_container<D: Document>(value: &D) -> bool {
    matches!(value.kind(), Kind::Object | Kind::Array)
}

pub fn is_array<D: Document>(value: &D) -> bool {
    value.kind() == Kind::Array
}

/// True if `value` is an object.
pub fn is_map<D: Document>(value: &D) -> bool {
    value.kind() == Kind::Object
}

/// Element at `index` of an array.
///
/// # Errors
///
/// - [`AccessError::IndexOutOfRange`] if `index < 0` or `index >= length`.
/// - [`AccessError::TypeMismatch`] if `value` is not an array.
pub fn get_array_index<D: Document>(value: &D, index: i64) -> Result<&D> {
    if !is_array(value) {
        return Err(mismatch("array", value));
    }
    let length = value.element_count();
    let slot = checked_slot(index, length, length)?;
    value
        .element(slot)
        .ok_or(AccessError::IndexOutOfRange { index, length })
}

/// Value bound to `key` in an object.
///
/// With `throw_on_missing` an absent key fails with
/// [`AccessError::PropertyNotFound`]; without it the result is `Ok(None)`.
///
/// # Examples
///
/// ```
/// use docpath_core::{get_map_value, AccessError};
/// use serde_json::json;
///
/// let doc = json!({"a": null});
/// assert_eq!(get_map_value(&doc, "a", false).unwrap(), Some(&json!(null)));
/// assert_eq!(get_map_value(&doc, "b", false).unwrap(), None);
/// assert!(matches!(
///     get_map_value(&doc, "b", true),
///     Err(AccessError::PropertyNotFound { .. })
/// ));
/// ```
pub fn get_map_value<'a, D: Document>(
    value: &'a D,
    key: &str,
    throw_on_missing: bool,
) -> Result<Option<&'a D>> {
    if !is_map(value) {
        return Err(mismatch("object", value));
    }
    match value.member(key) {
        Some(found) => Ok(Some(found)),
        None if throw_on_missing => {
            debug!(key, "property not found");
            Err(AccessError::PropertyNotFound {
                key: key.to_string(),
            })
        }
        None => Ok(None),
    }
}

/// Entry of a container addressed by a loosely typed key.
///
/// Objects use the stringified key and a lenient lookup. Arrays coerce the
/// key to an index and always report out-of-range positions.
///
/// # Errors
///
/// - [`AccessError::IndexOutOfRange`] for an array index outside `[0, length)`.
/// - [`AccessError::InvalidIndexKey`] if an array key is not an integer.
/// - [`AccessError::TypeMismatch`] if `value` is a scalar.
pub fn get_property<'a, D: Document>(value: &'a D, key: &PropertyKey) -> Result<Option<&'a D>> {
    match value.kind() {
        Kind::Object => Ok(value.member(&key.as_name())),
        Kind::Array => get_array_index(value, key.as_index()?).map(Some),
        Kind::Scalar => Err(mismatch("object or array", value)),
    }
}

/// Mutable counterpart of [`get_property`], for descending before a write.
pub fn get_property_mut<'a, D: Document>(
    value: &'a mut D,
    key: &PropertyKey,
) -> Result<Option<&'a mut D>> {
    match value.kind() {
        Kind::Object => Ok(value.member_mut(&key.as_name())),
        Kind::Array => {
            let index = key.as_index()?;
            let length = value.element_count();
            let slot = checked_slot(index, length, length)?;
            value
                .element_mut(slot)
                .map(Some)
                .ok_or(AccessError::IndexOutOfRange { index, length })
        }
        Kind::Scalar => Err(mismatch("object or array", value)),
    }
}

/// Write `new_value` into a container.
///
/// - Object: the stringified key is inserted or replaced. A replaced key
///   keeps its position, a new key is appended. `key` must be `Some`.
/// - Array with `Some(key)`: the value is *inserted* at that index and later
///   elements shift right. Nothing is overwritten. Valid indices are
///   `0..=length`.
/// - Array with `None`: the value is appended.
///
/// # Examples
///
/// ```
/// use docpath_core::{length, set_property, PropertyKey};
/// use serde_json::json;
///
/// let mut list = json!([1, 2, 3]);
/// set_property(&mut list, Some(&PropertyKey::Index(1)), json!(99)).unwrap();
/// assert_eq!(list, json!([1, 99, 2, 3]));
/// assert_eq!(length(&list).unwrap(), 4);
/// ```
///
/// # Errors
///
/// - [`AccessError::IndexOutOfRange`] for an insert position outside `[0, length]`.
/// - [`AccessError::InvalidIndexKey`] if an array key is not an integer.
/// - [`AccessError::MissingKey`] for an object write without a key.
/// - [`AccessError::TypeMismatch`] if `value` is a scalar.
pub fn set_property<D: Document>(
    value: &mut D,
    key: Option<&PropertyKey>,
    new_value: D,
) -> Result<()> {
    match value.kind() {
        Kind::Object => {
            let name = key.ok_or(AccessError::MissingKey)?.as_name().into_owned();
            trace!(key = %name, "set object member");
            value.insert_member(name, new_value);
            Ok(())
        }
        Kind::Array => {
            let index = key.map(PropertyKey::as_index).transpose()?;
            let len = value.element_count();
            let slot = match index {
                Some(index) => checked_slot(index, len, len + 1)?,
                None => len,
            };
            trace!(index = slot, length = len, "insert array element");
            value.insert_element(slot, new_value);
            Ok(())
        }
        Kind::Scalar => Err(mismatch("object or array", value)),
    }
}

/// Keys of an object in insertion order, or `"0"..="n-1"` for an array.
///
/// The result is a snapshot, so the container may be mutated while the keys
/// are walked.
pub fn property_keys<D: Document>(value: &D) -> Result<Vec<String>> {
    match value.kind() {
        Kind::Object => Ok(value.member_keys()),
        Kind::Array => Ok((0..value.element_count()).map(|i| i.to_string()).collect()),
        Kind::Scalar => Err(mismatch("object or array", value)),
    }
}

/// Number of elements of an array, or number of keys of an object.
pub fn length<D: Document>(value: &D) -> Result<usize> {
    match value.kind() {
        Kind::Object => Ok(value.member_count()),
        Kind::Array => Ok(value.element_count()),
        Kind::Scalar => Err(mismatch("object or array", value)),
    }
}

/// Restartable view over the values of a container.
///
/// Arrays yield their elements in order; objects yield their values in the
/// order of [`property_keys`].
pub fn to_iterable<D: Document>(value: &D) -> Result<Values<'_, D>> {
    if is_container(value) {
        Ok(Values { container: value })
    } else {
        Err(mismatch("object or array", value))
    }
}

/// Independent deep copy of a document value.
///
/// # Errors
///
/// [`AccessError::CloneUnsupported`] if some payload cannot be duplicated.
pub fn deep_copy<D: Document>(value: &D) -> Result<D> {
    let copy = value.try_duplicate();
    match &copy {
        Ok(_) => trace!(kind = value.type_name(), "deep copy"),
        Err(err) => debug!(error = %err, "deep copy failed"),
    }
    copy
}

/// Values of a container, produced by [`to_iterable`].
///
/// Each call to [`iter`](Values::iter) (or `into_iter`) starts from the first
/// value again.
#[derive(Debug)]
pub struct Values<'a, D> {
    container: &'a D,
}

impl<D> Clone for Values<'_, D> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<D> Copy for Values<'_, D> {}

impl<'a, D: Document> Values<'a, D> {
    pub fn iter(&self) -> Box<dyn Iterator<Item = &'a D> + 'a> {
        let container: &'a D = self.container;
        match container.kind() {
            Kind::Array => container.element_values(),
            _ => container.member_values(),
        }
    }
}

impl<'a, D: Document> IntoIterator for Values<'a, D> {
    type Item = &'a D;
    type IntoIter = Box<dyn Iterator<Item = &'a D> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Bounds-check `index` against `limit` (exclusive) and convert it to a slot.
fn checked_slot(index: i64, length: usize, limit: usize) -> Result<usize> {
    usize::try_from(index)
        .ok()
        .filter(|slot| *slot < limit)
        .ok_or(AccessError::IndexOutOfRange { index, length })
}

fn mismatch<D: Document>(expected: &'static str, found: &D) -> AccessError {
    AccessError::TypeMismatch {
        expected,
        found: found.type_name(),
    }
}
