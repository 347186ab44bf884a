use thiserror::Error;

/// Errors raised by the fallible outer surface: snapshot files, config, CLI.
/// Bag operations themselves never fail.
#[derive(Debug, Error)]
pub enum PropbagError {
    #[error("I/O error")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse JSON document")]
    Json(#[from] serde_json::Error),

    #[error("Failed to parse YAML document")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unsupported property source: expected a mapping or object, got {0}")]
    UnsupportedSource(String),
}

/// Result type for propbag operations that can fail
pub type PropbagResult<T> = Result<T, PropbagError>;
