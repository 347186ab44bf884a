use log::debug;
use serde::{ Deserialize, Serialize };
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::errors::{ PropbagError, PropbagResult };
use crate::models::error_entry::ErrorEntry;
use crate::models::source::PropertySource;
use crate::models::value::Value;

/// On-disk document format of a snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Yaml,
}

impl DocumentFormat {
    /// `.yaml`/`.yml` are YAML, everything else is JSON
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()).map(|ext| ext.to_lowercase()) {
            Some(ext) if ext == "yaml" || ext == "yml" => DocumentFormat::Yaml,
            _ => DocumentFormat::Json,
        }
    }
}

/// Parse a JSON or YAML document into a `Value`; blank YAML is null
pub fn parse_document(contents: &str, format: DocumentFormat) -> PropbagResult<Value> {
    match format {
        DocumentFormat::Json => Ok(serde_json::from_str(contents)?),
        DocumentFormat::Yaml if contents.trim().is_empty() => Ok(Value::Null),
        DocumentFormat::Yaml => Ok(serde_yaml::from_str(contents)?),
    }
}

/// Read a document from disk, picking the format from the extension
pub fn read_document(path: &Path) -> PropbagResult<Value> {
    let contents = fs::read_to_string(path)?;
    let format = DocumentFormat::from_path(path);
    debug!("Reading {:?} document from {}", format, path.display());
    parse_document(&contents, format)
}

/// Properties a document contributes when applied to a bag: the
/// `properties` of an envelope, otherwise the document itself
pub fn document_source(document: Value) -> PropertySource {
    if let Value::Map(map) = &document {
        if let Some(snapshot) = BagSnapshot::from_envelope(map) {
            return PropertySource::from(snapshot.properties);
        }
    }
    PropertySource::from(document)
}

/// Serializable image of a bag
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BagSnapshot {
    #[serde(default)]
    pub properties: BTreeMap<String, Value>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ErrorEntry>,
}

impl BagSnapshot {
    pub fn from_json_str(contents: &str) -> PropbagResult<Self> {
        Self::from_document(parse_document(contents, DocumentFormat::Json)?)
    }

    pub fn from_yaml_str(contents: &str) -> PropbagResult<Self> {
        Self::from_document(parse_document(contents, DocumentFormat::Yaml)?)
    }

    /// Accept either the `{properties, errors}` envelope or a bare mapping
    pub fn from_document(value: Value) -> PropbagResult<Self> {
        let map = match value {
            Value::Map(map) => map,
            Value::Null => return Ok(Self::default()),
            other => {
                return Err(PropbagError::UnsupportedSource(other.kind().to_string()));
            }
        };

        match Self::from_envelope(&map) {
            Some(snapshot) => Ok(snapshot),
            None => Ok(Self { properties: map, errors: Vec::new() }),
        }
    }

    /// Parse `map` as an envelope. A mapping only qualifies when its keys are
    /// limited to `properties` (a map) and `errors` (a list of entries).
    fn from_envelope(map: &BTreeMap<String, Value>) -> Option<Self> {
        if map.is_empty() {
            return None;
        }
        let shaped = map.iter().all(|(key, value)| match (key.as_str(), value) {
            ("properties", Value::Map(_)) => true,
            ("errors", Value::List(_)) => true,
            _ => false,
        });
        if !shaped {
            return None;
        }

        // Round-trip through JSON to reuse the derived envelope layout
        let json = serde_json::to_value(map).ok()?;
        match serde_json::from_value(json) {
            Ok(snapshot) => Some(snapshot),
            Err(e) => {
                debug!("Mapping looks like an envelope but does not parse as one: {}", e);
                None
            }
        }
    }

    pub fn to_json_pretty(&self) -> PropbagResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn to_yaml(&self) -> PropbagResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn load(path: &Path) -> PropbagResult<Self> {
        Self::from_document(read_document(path)?)
    }

    pub fn save(&self, path: &Path) -> PropbagResult<()> {
        let format = DocumentFormat::from_path(path);
        let contents = match format {
            DocumentFormat::Json => self.to_json_pretty()?,
            DocumentFormat::Yaml => self.to_yaml()?,
        };
        fs::write(path, contents)?;
        debug!("Saved {:?} snapshot to {}", format, path.display());
        Ok(())
    }
}
