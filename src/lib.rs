pub mod models;
pub mod traits;
pub mod errors;
pub mod config;
pub mod implementations;
#[cfg(test)]
pub mod tests;

// Re-export core components
pub use config::{BagOptions, OutputFormat, PropbagConfig};
pub use errors::{PropbagError, PropbagResult};
pub use implementations::property_bag::PropertyBag;
pub use models::{
    value::Value,
    error_entry::{
        ErrorEntry,
        ErrorValue,
    },
    source::PropertySource,
    snapshot::{
        BagSnapshot,
        DocumentFormat,
    },
};
pub use traits::{
    ErrorLog,
    PropertyAccess,
};
