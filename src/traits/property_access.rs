use log::{ debug, trace };
use std::collections::BTreeMap;

use crate::models::source::PropertySource;
use crate::models::value::Value;

/// Generic, soft-failing access to named properties.
///
/// `def` and `set_properties` are written purely in terms of `get` and
/// `set`, so a type that overrides those two sees its own behaviour applied
/// to bulk and defaulting writes as well, including through `dyn PropertyAccess`.
pub trait PropertyAccess {
    /// Current value of `name`, or `default` when it is unset or null
    fn get(&self, name: &str, default: Value) -> Value;

    /// Create or overwrite `name`, returning the previous value (`None` when absent)
    fn set(&mut self, name: &str, value: Value) -> Option<Value>;

    /// Snapshot of the properties; `public_only` hides reserved names
    fn get_properties(&self, public_only: bool) -> BTreeMap<String, Value>;

    /// Human-readable identification of the object
    fn describe(&self) -> String;

    /// Ensure `name` holds a value, assigning `default` if it does not.
    /// Not atomic: a read followed by a write.
    ///
    /// The result is read back through `get` after the write, so it reflects
    /// any transformation applied by an overriding `set`. If `set` refuses the
    /// write, nothing is stored and the result is `default`, which is also
    /// what a later `get(name, default)` reports.
    fn def(&mut self, name: &str, default: Value) -> Value {
        let value = self.get(name, default);
        self.set(name, value.clone());
        self.get(name, value)
    }

    /// Apply every pair of `source` through `set`. Returns false, leaving the
    /// object untouched, when the source is neither a mapping nor an object.
    fn set_properties(&mut self, source: PropertySource) -> bool {
        let pairs = match source {
            PropertySource::Mapping(pairs) | PropertySource::Object(pairs) => pairs,
            PropertySource::Unsupported(value) => {
                debug!("{}: ignoring unsupported property source ({})", self.describe(), value.kind());
                return false;
            }
        };
        trace!("{}: applying {} properties", self.describe(), pairs.len());
        for (name, value) in pairs {
            self.set(&name, value);
        }
        true
    }

    /// Shorthand for `get(name, Value::Null)`
    fn get_or_null(&self, name: &str) -> Value {
        self.get(name, Value::Null)
    }

    /// Whether `name` holds a non-null value
    fn has(&self, name: &str) -> bool {
        !self.get(name, Value::Null).is_null()
    }
}
