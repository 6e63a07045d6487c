//! The capability a backing value representation provides to the accessor.
//!
//! The accessor never names a concrete document type. Anything that can say
//! which variant it is, expose its elements or members, and duplicate itself
//! can be walked and edited by a path evaluator.

use serde::Serialize;

use crate::error::Result;

/// The variant of a document value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    /// Mapping from string keys to values, in insertion order.
    Object,
    /// Ordered sequence of values.
    Array,
    /// String, number, boolean, null, or any other leaf payload.
    Scalar,
}

impl Kind {
    pub fn as_str(self) -> &'static str {
        match self {
            Kind::Object => "object",
            Kind::Array => "array",
            Kind::Scalar => "scalar",
        }
    }
}

/// A node of a JSON-like tree.
///
/// Element methods (`element`, `element_mut`, `insert_element`,
/// `element_count`, `element_values`) only have meaning on arrays, member
/// methods (`member`, `member_mut`, `insert_member`, `member_keys`,
/// `member_values`) only on objects. On other variants lookups return `None`,
/// counts are zero, iteration is empty and insertion is a no-op. The accessor
/// checks [`kind`](Document::kind) before calling them.
///
/// Arrays are addressed one position at a time, so a backing is free to store
/// them in any indexable sequence (`Vec`, `VecDeque`, a rope, ...).
pub trait Document: Sized {
    /// Which variant this value currently is.
    fn kind(&self) -> Kind;

    /// Array element at `index`.
    fn element(&self, index: usize) -> Option<&Self>;

    fn element_mut(&mut self, index: usize) -> Option<&mut Self>;

    /// Insert `value` at `index`, shifting later elements right. The accessor
    /// only calls this with `index <= element_count()`.
    fn insert_element(&mut self, index: usize, value: Self);

    fn element_count(&self) -> usize;

    /// Array elements in order.
    fn element_values(&self) -> Box<dyn Iterator<Item = &Self> + '_>;

    /// Object member bound to `key`.
    fn member(&self, key: &str) -> Option<&Self>;

    fn member_mut(&mut self, key: &str) -> Option<&mut Self>;

    /// Bind `key` to `value`. An existing key keeps its position; a new key
    /// goes last.
    fn insert_member(&mut self, key: String, value: Self);

    /// Object keys in insertion order.
    fn member_keys(&self) -> Vec<String>;

    /// Object values in the same order as [`member_keys`](Document::member_keys).
    fn member_values(&self) -> Box<dyn Iterator<Item = &Self> + '_>;

    fn member_count(&self) -> usize {
        self.member_keys().len()
    }

    /// Independent deep copy of this value.
    ///
    /// # Errors
    ///
    /// Returns [`AccessError::CloneUnsupported`](crate::AccessError::CloneUnsupported)
    /// when some payload in the tree cannot be duplicated.
    fn try_duplicate(&self) -> Result<Self>;

    /// Short name of the runtime type, for diagnostics.
    fn type_name(&self) -> &'static str {
        self.kind().as_str()
    }
}
