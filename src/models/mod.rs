pub mod value;
pub mod error_entry;
pub mod source;
pub mod snapshot;

// Re-export common model types
pub use value::Value;
pub use error_entry::{ErrorEntry, ErrorValue};
pub use source::PropertySource;
pub use snapshot::{BagSnapshot, DocumentFormat, document_source, parse_document, read_document};
