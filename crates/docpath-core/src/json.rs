//! [`Document`] backing for `serde_json::Value`.
//!
//! Built with serde_json's `preserve_order` feature, `Map` keeps insertion
//! order and `insert` on an existing key replaces the value in place.

use serde_json::Value;

use crate::document::{Document, Kind};
use crate::error::Result;

impl Document for Value {
    fn kind(&self) -> Kind {
        match self {
            Value::Object(_) => Kind::Object,
            Value::Array(_) => Kind::Array,
            Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => Kind::Scalar,
        }
    }

    fn element(&self, index: usize) -> Option<&Value> {
        self.as_array().and_then(|items| items.get(index))
    }

    fn element_mut(&mut self, index: usize) -> Option<&mut Value> {
        self.as_array_mut().and_then(|items| items.get_mut(index))
    }

    fn insert_element(&mut self, index: usize, value: Value) {
        if let Value::Array(items) = self {
            items.insert(index, value);
        }
    }

    fn element_count(&self) -> usize {
        self.as_array().map_or(0, Vec::len)
    }

    fn element_values(&self) -> Box<dyn Iterator<Item = &Value> + '_> {
        match self {
            Value::Array(items) => Box::new(items.iter()),
            _ => Box::new(std::iter::empty()),
        }
    }

    fn member(&self, key: &str) -> Option<&Value> {
        self.as_object().and_then(|map| map.get(key))
    }

    fn member_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.as_object_mut().and_then(|map| map.get_mut(key))
    }

    fn insert_member(&mut self, key: String, value: Value) {
        if let Value::Object(map) = self {
            map.insert(key, value);
        }
    }

    fn member_keys(&self) -> Vec<String> {
        match self {
            Value::Object(map) => map.keys().cloned().collect(),
            _ => Vec::new(),
        }
    }

    fn member_values(&self) -> Box<dyn Iterator<Item = &Value> + '_> {
        match self {
            Value::Object(map) => Box::new(map.values()),
            _ => Box::new(std::iter::empty()),
        }
    }

    fn member_count(&self) -> usize {
        self.as_object().map_or(0, |map| map.len())
    }

    // Every JSON payload is plain data, so cloning never fails.
    fn try_duplicate(&self) -> Result<Value> {
        Ok(self.clone())
    }

    fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn insert_member_keeps_existing_position() {
        let mut doc = json!({"a": 1, "b": 2, "c": 3});
        doc.insert_member("b".into(), json!(20));
        doc.insert_member("d".into(), json!(4));
        assert_eq!(doc.member_keys(), vec!["a", "b", "c", "d"]);
        assert_eq!(doc["b"], json!(20));
    }

    #[test]
    fn member_methods_are_inert_on_scalars() {
        let mut doc = json!("text");
        doc.insert_member("a".into(), json!(1));
        assert_eq!(doc, json!("text"));
        assert!(doc.member_keys().is_empty());
        assert_eq!(doc.member_values().count(), 0);
        assert!(doc.member("a").is_none());
    }

    #[test]
    fn type_names_follow_json_vocabulary() {
        assert_eq!(json!(null).type_name(), "null");
        assert_eq!(json!(true).type_name(), "boolean");
        assert_eq!(json!(1.5).type_name(), "number");
        assert_eq!(json!([]).type_name(), "array");
    }
}
