use std::collections::{ BTreeMap, HashMap };

use crate::models::value::Value;
use crate::traits::property_access::PropertyAccess;

/// Input accepted when populating a bag in bulk
#[derive(Debug, Clone, PartialEq)]
pub enum PropertySource {
    /// Key/value pairs from an associative structure
    Mapping(Vec<(String, Value)>),
    /// Public properties captured from another bag-like object
    Object(Vec<(String, Value)>),
    /// Anything else; ignored by `set_properties`
    Unsupported(Value),
}

impl PropertySource {
    /// Capture the public properties of another object
    pub fn from_object<P: PropertyAccess + ?Sized>(object: &P) -> Self {
        PropertySource::Object(object.get_properties(true).into_iter().collect())
    }

    pub fn is_supported(&self) -> bool {
        !matches!(self, PropertySource::Unsupported(_))
    }

    /// Number of pairs this source would apply
    pub fn len(&self) -> usize {
        match self {
            PropertySource::Mapping(pairs) | PropertySource::Object(pairs) => pairs.len(),
            PropertySource::Unsupported(_) => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Kind label for log messages
    pub fn kind(&self) -> &'static str {
        match self {
            PropertySource::Mapping(_) => "mapping",
            PropertySource::Object(_) => "object",
            PropertySource::Unsupported(value) => value.kind(),
        }
    }
}

impl From<Value> for PropertySource {
    fn from(value: Value) -> Self {
        match value {
            Value::Map(map) => PropertySource::Mapping(map.into_iter().collect()),
            // A list behaves as a hash keyed by position
            Value::List(items) => PropertySource::Mapping(
                items
                    .into_iter()
                    .enumerate()
                    .map(|(i, v)| (i.to_string(), v))
                    .collect()
            ),
            other => PropertySource::Unsupported(other),
        }
    }
}

impl From<&str> for PropertySource {
    fn from(s: &str) -> Self {
        PropertySource::Unsupported(Value::from(s))
    }
}

impl<V: Into<Value>> From<BTreeMap<String, V>> for PropertySource {
    fn from(map: BTreeMap<String, V>) -> Self {
        PropertySource::Mapping(map.into_iter().map(|(k, v)| (k, v.into())).collect())
    }
}

impl<V: Into<Value>> From<HashMap<String, V>> for PropertySource {
    fn from(map: HashMap<String, V>) -> Self {
        PropertySource::Mapping(map.into_iter().map(|(k, v)| (k, v.into())).collect())
    }
}

impl<K: Into<String>, V: Into<Value>> From<Vec<(K, V)>> for PropertySource {
    fn from(pairs: Vec<(K, V)>) -> Self {
        PropertySource::Mapping(pairs.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}
