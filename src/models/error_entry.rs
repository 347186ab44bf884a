use chrono::{ DateTime, Utc };
use serde::{ Deserialize, Serialize };
use std::fmt;

/// A structured error record, the counterpart of an exception object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorValue {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Message of the underlying cause, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default = "Utc::now")]
    pub recorded_at: DateTime<Utc>,
}

impl ErrorValue {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: None,
            kind: None,
            source: None,
            recorded_at: Utc::now(),
        }
    }

    pub fn with_code(mut self, code: i64) -> Self {
        self.code = Some(code);
        self
    }

    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    /// Capture a Rust error, keeping the message of its direct cause
    pub fn from_error(err: &(dyn std::error::Error + 'static)) -> Self {
        let mut value = Self::new(err.to_string());
        value.source = err.source().map(|cause| cause.to_string());
        value
    }
}

impl fmt::Display for ErrorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.kind, self.code) {
            (Some(kind), Some(code)) => write!(f, "[{} {}] {}", kind, code, self.message),
            (Some(kind), None) => write!(f, "[{}] {}", kind, self.message),
            (None, Some(code)) => write!(f, "[{}] {}", code, self.message),
            (None, None) => write!(f, "{}", self.message),
        }
    }
}

/// One entry of a bag's error log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ErrorEntry {
    Plain(String),
    Structured(ErrorValue),
}

impl ErrorEntry {
    /// The textual message, uniform across both variants
    pub fn message(&self) -> &str {
        match self {
            ErrorEntry::Plain(message) => message,
            ErrorEntry::Structured(value) => &value.message,
        }
    }

    pub fn is_structured(&self) -> bool {
        matches!(self, ErrorEntry::Structured(_))
    }

    /// Reduce a structured entry to its message
    pub fn into_plain(self) -> ErrorEntry {
        match self {
            ErrorEntry::Structured(value) => ErrorEntry::Plain(value.message),
            plain => plain,
        }
    }
}

impl fmt::Display for ErrorEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorEntry::Plain(message) => write!(f, "{}", message),
            ErrorEntry::Structured(value) => write!(f, "{}", value),
        }
    }
}

impl From<&str> for ErrorEntry {
    fn from(message: &str) -> Self {
        ErrorEntry::Plain(message.to_string())
    }
}

impl From<String> for ErrorEntry {
    fn from(message: String) -> Self {
        ErrorEntry::Plain(message)
    }
}

impl From<ErrorValue> for ErrorEntry {
    fn from(value: ErrorValue) -> Self {
        ErrorEntry::Structured(value)
    }
}
