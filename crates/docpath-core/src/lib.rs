//! # docpath-core
//!
//! Uniform accessor layer over already-parsed JSON-like document trees.
//!
//! A path-query engine (JSONPath and friends) walks a document one segment at
//! a time: look up a key, index into an array, list the children, insert a
//! value. This crate provides those operations once, over any backing that
//! implements [`Document`], so the engine never needs to know whether it is
//! looking at a `serde_json::Value` or some other tree.
//!
//! ## Quick start
//!
//! ```rust
//! use docpath_core::{get_property, property_keys, set_property, PropertyKey};
//! use serde_json::json;
//!
//! let mut doc = json!({"a": [1, 2, 3]});
//!
//! let list = get_property(&doc, &"a".into()).unwrap().unwrap();
//! assert_eq!(list, &json!([1, 2, 3]));
//!
//! // Array writes insert, they never overwrite.
//! let list = docpath_core::get_property_mut(&mut doc, &"a".into()).unwrap().unwrap();
//! set_property(list, Some(&PropertyKey::Index(1)), json!(99)).unwrap();
//! assert_eq!(doc, json!({"a": [1, 99, 2, 3]}));
//!
//! assert_eq!(property_keys(&doc).unwrap(), vec!["a"]);
//! ```
//!
//! ## Modules
//!
//! - [`accessor`] - container inspection, reads, writes, deep copy
//! - [`document`] - the [`Document`] capability a backing implements
//! - [`key`] - [`PropertyKey`] and its coercion rules
//! - [`types`] - [`DocValue`], the native backing with opaque leaves
//! - [`error`] - [`AccessError`]
//!
//! `serde_json::Value` implements [`Document`] out of the box.

pub mod accessor;
pub mod document;
pub mod error;
mod json;
pub mod key;
pub mod types;

pub use accessor::{
    deep_copy, get_array_index, get_map_value, get_property, get_property_mut, is_array,
    is_container, is_map, length, property_keys, set_property, to_iterable, Values,
};
pub use document::{Document, Kind};
pub use error::{AccessError, Result};
pub use key::PropertyKey;
pub use types::{DocValue, Members, OpaqueHandle};
