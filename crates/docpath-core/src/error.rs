//! Error types for document access operations.

use thiserror::Error;

/// Errors raised by the document accessor.
///
/// Two kinds are recoverable and expected in normal traversal:
/// [`PropertyNotFound`](AccessError::PropertyNotFound) and
/// [`IndexOutOfRange`](AccessError::IndexOutOfRange). A path evaluator
/// usually turns them into a "path not found" result. The remaining variants
/// signal a caller bug (wrong container variant, uncoercible key) or, for
/// [`CloneUnsupported`](AccessError::CloneUnsupported), a document carrying
/// data that cannot be duplicated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AccessError {
    /// A strict lookup asked for an object key that is not present.
    #[error("Property ['{key}'] not found in the current context")]
    PropertyNotFound { key: String },

    /// An array index outside `[0, length)` (or `[0, length]` for inserts).
    #[error("Index {index} out of range for array of length {length}")]
    IndexOutOfRange { index: i64, length: usize },

    /// The operation was invoked on the wrong variant.
    #[error("Type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },

    /// A key used against an array does not coerce to an integer index.
    #[error("Key '{key}' is not a valid array index")]
    InvalidIndexKey { key: String },

    /// An object write was attempted without a key.
    #[error("A key is required to set a property on an object")]
    MissingKey,

    /// A scalar payload in the document cannot be duplicated.
    #[error("Cannot deep-copy value of type {type_name}")]
    CloneUnsupported { type_name: String },

    /// Conversion between document backings failed.
    #[error("Conversion error: {0}")]
    Conversion(String),
}

impl AccessError {
    /// True for faults an evaluator should report as "path not found".
    pub fn is_path_not_found(&self) -> bool {
        matches!(
            self,
            AccessError::PropertyNotFound { .. } | AccessError::IndexOutOfRange { .. }
        )
    }

    /// True for faults that indicate a bug in the caller rather than in the data.
    pub fn is_contract_violation(&self) -> bool {
        matches!(
            self,
            AccessError::TypeMismatch { .. }
                | AccessError::InvalidIndexKey { .. }
                | AccessError::MissingKey
        )
    }
}

/// Convenience alias used throughout docpath-core.
pub type Result<T> = std::result::Result<T, AccessError>;
