// SPDX-License-Identifier: Apache-2.0

use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;

/// Type tag of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JsonType {
    Null,
    False,
    True,
    Number,
    String,
    Array,
    Object,
}

impl JsonType {
    /// Returns true for arrays and objects.
    pub const fn is_composite(&self) -> bool {
        matches!(self, JsonType::Array | JsonType::Object)
    }
}

impl core::fmt::Display for JsonType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let name = match self {
            JsonType::Null => "null",
            JsonType::False => "false",
            JsonType::True => "true",
            JsonType::Number => "number",
            JsonType::String => "string",
            JsonType::Array => "array",
            JsonType::Object => "object",
        };
        f.write_str(name)
    }
}

/// Object fields, ordered by key.
pub type Map = BTreeMap<String, Value>;

/// One parsed JSON value and, for arrays and objects, everything it owns.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// A null value (e.g., `null`). Also the state of a freshly created node.
    #[default]
    Null,
    /// A boolean value (e.g., `true` or `false`).
    Bool(bool),
    /// A number value (e.g., `42` or `3.14`).
    Number(f64),
    /// A string value, copied verbatim from between the quotes.
    String(String),
    /// An array; children in document order.
    Array(Vec<Value>),
    /// An object.
    Object(Map),
}

impl Value {
    pub const fn get_type(&self) -> JsonType {
        match self {
            Value::Null => JsonType::Null,
            Value::Bool(false) => JsonType::False,
            Value::Bool(true) => JsonType::True,
            Value::Number(_) => JsonType::Number,
            Value::String(_) => JsonType::String,
            Value::Array(_) => JsonType::Array,
            Value::Object(_) => JsonType::Object,
        }
    }

    /// Decoded value of a number node.
    ///
    /// # Panics
    /// If the node is not a number. Use [`as_f64`](Self::as_f64) when the type is unknown.
    pub fn number_value(&self) -> f64 {
        match self {
            Value::Number(n) => *n,
            other => panic!("number_value called on a {} node", other.get_type()),
        }
    }

    pub const fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items.as_slice()),
            _ => None,
        }
    }

    pub const fn as_object(&self) -> Option<&Map> {
        match self {
            Value::Object(fields) => Some(fields),
            _ => None,
        }
    }

    pub const fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Looks up a field of an object node. Returns `None` for other types.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_object().and_then(|fields| fields.get(key))
    }

    /// Looks up a child of an array node. Returns `None` for other types.
    pub fn get_index(&self, index: usize) -> Option<&Value> {
        self.as_array().and_then(|items| items.get(index))
    }

    /// Number of children (arrays) or fields (objects); zero for scalars.
    pub fn len(&self) -> usize {
        match self {
            Value::Array(items) => items.len(),
            Value::Object(fields) => fields.len(),
            _ => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(String::from(s))
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items)
    }
}

impl From<Map> for Value {
    fn from(fields: Map) -> Self {
        Value::Object(fields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn test_default_is_null() {
        let node = Value::default();
        assert_eq!(node.get_type(), JsonType::Null);
        assert!(node.is_null());
    }

    #[test]
    fn test_bool_type_tags() {
        assert_eq!(Value::from(true).get_type(), JsonType::True);
        assert_eq!(Value::from(false).get_type(), JsonType::False);
    }

    #[test]
    fn test_accessors_on_wrong_type() {
        let node = Value::from("text");
        assert_eq!(node.as_f64(), None);
        assert_eq!(node.as_bool(), None);
        assert_eq!(node.get("key"), None);
        assert_eq!(node.get_index(0), None);
        assert_eq!(node.len(), 0);
        assert_eq!(node.as_str(), Some("text"));
    }

    #[test]
    fn test_container_lookups() {
        let mut fields = Map::new();
        fields.insert("list".into(), Value::from(vec![Value::from(1.0), Value::Null]));
        let node = Value::from(fields);

        assert_eq!(node.get_type(), JsonType::Object);
        assert!(node.get_type().is_composite());
        let list = node.get("list").unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list.get_index(0).unwrap().number_value(), 1.0);
        assert!(list.get_index(1).unwrap().is_null());
        assert_eq!(list.get_index(2), None);
    }

    #[test]
    #[should_panic(expected = "number_value called on a string node")]
    fn test_number_value_on_string_panics() {
        Value::from("1").number_value();
    }

    #[test]
    fn test_type_display() {
        assert_eq!(std::format!("{}", JsonType::Array), "array");
        assert_eq!(std::format!("{}", JsonType::False), "false");
    }
}
