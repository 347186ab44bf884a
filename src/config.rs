use log::debug;
use serde::{ Deserialize, Serialize };
use std::fs;
use std::path::{ Path, PathBuf };

use crate::errors::{ PropbagError, PropbagResult };

/// Prefix marking a property as implementation-private
pub const DEFAULT_RESERVED_PREFIX: &str = "_";

/// Environment variable naming a config file
pub const CONFIG_ENV_VAR: &str = "PROPBAG_CONFIG";

/// Options applied to a single bag
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BagOptions {
    /// Names starting with this prefix are hidden from public snapshots
    pub reserved_prefix: String,
}

impl Default for BagOptions {
    fn default() -> Self {
        Self {
            reserved_prefix: DEFAULT_RESERVED_PREFIX.to_string(),
        }
    }
}

/// Output format for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn parse(input: &str) -> PropbagResult<Self> {
        match input.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(PropbagError::Config(format!("unknown output format: {}", other))),
        }
    }
}

/// File-level configuration for the propbag tool
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PropbagConfig {
    pub reserved_prefix: String,
    pub output_format: OutputFormat,
    pub log_level: Option<String>,
}

impl Default for PropbagConfig {
    fn default() -> Self {
        Self {
            reserved_prefix: DEFAULT_RESERVED_PREFIX.to_string(),
            output_format: OutputFormat::Text,
            log_level: None,
        }
    }
}

impl PropbagConfig {
    /// Load configuration from a YAML file
    pub fn from_file(path: &Path) -> PropbagResult<Self> {
        let contents = fs::read_to_string(path)?;
        let config = Self::from_yaml_str(&contents)?;
        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    pub fn from_yaml_str(contents: &str) -> PropbagResult<Self> {
        // An empty file is a valid, all-defaults config
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: PropbagConfig = serde_yaml::from_str(contents)?;
        if config.reserved_prefix.is_empty() {
            return Err(PropbagError::Config("reserved_prefix must not be empty".to_string()));
        }
        Ok(config)
    }

    /// Resolve config: explicit path, then `PROPBAG_CONFIG`, then defaults
    pub fn resolve(explicit: Option<&Path>) -> PropbagResult<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }
        match std::env::var(CONFIG_ENV_VAR) {
            Ok(path) if !path.is_empty() => Self::from_file(&PathBuf::from(path)),
            _ => {
                debug!("No config file given, using defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn bag_options(&self) -> BagOptions {
        BagOptions {
            reserved_prefix: self.reserved_prefix.clone(),
        }
    }
}
