use log::trace;
use std::collections::BTreeMap;
use std::fmt;

use crate::config::BagOptions;
use crate::models::error_entry::ErrorEntry;
use crate::models::snapshot::BagSnapshot;
use crate::models::source::PropertySource;
use crate::models::value::Value;
use crate::traits::error_log::ErrorLog;
use crate::traits::property_access::PropertyAccess;

/// A key/value store with soft-failure reads and an append-only error log.
///
/// Not internally synchronized; wrap it in a `Mutex` to share it across threads.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertyBag {
    properties: BTreeMap<String, Value>,
    errors: Vec<ErrorEntry>,
    options: BagOptions,
}

impl PropertyBag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: BagOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// Build a bag and populate it from `source`. Unsupported input is ignored.
    pub fn from_source(source: impl Into<PropertySource>) -> Self {
        let mut bag = Self::new();
        bag.set_properties(source.into());
        bag
    }

    /// Rebuild a bag from a serialized snapshot
    pub fn from_snapshot(snapshot: BagSnapshot, options: BagOptions) -> Self {
        Self {
            properties: snapshot.properties,
            errors: snapshot.errors,
            options,
        }
    }

    /// Serializable image of every property and the full error log
    pub fn snapshot(&self) -> BagSnapshot {
        BagSnapshot {
            properties: self.properties.clone(),
            errors: self.errors.clone(),
        }
    }

    pub fn options(&self) -> &BagOptions {
        &self.options
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    fn is_reserved(&self, name: &str) -> bool {
        name.starts_with(self.options.reserved_prefix.as_str())
    }
}

impl PropertyAccess for PropertyBag {
    fn get(&self, name: &str, default: Value) -> Value {
        match self.properties.get(name) {
            Some(value) if !value.is_null() => value.clone(),
            _ => default,
        }
    }

    fn set(&mut self, name: &str, value: Value) -> Option<Value> {
        trace!("set {} = {}", name, value);
        self.properties.insert(name.to_string(), value)
    }

    fn get_properties(&self, public_only: bool) -> BTreeMap<String, Value> {
        self.properties
            .iter()
            .filter(|(name, _)| !public_only || !self.is_reserved(name))
            .map(|(name, value)| (name.clone(), value.clone()))
            .collect()
    }

    fn describe(&self) -> String {
        "PropertyBag".to_string()
    }
}

impl ErrorLog for PropertyBag {
    fn error_entries(&self) -> &[ErrorEntry] {
        &self.errors
    }

    fn push_error(&mut self, entry: ErrorEntry) {
        self.errors.push(entry);
    }
}

impl fmt::Display for PropertyBag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.describe())
    }
}

impl From<&PropertyBag> for PropertySource {
    fn from(bag: &PropertyBag) -> Self {
        PropertySource::from_object(bag)
    }
}
