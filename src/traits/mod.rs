pub mod property_access;
pub mod error_log;

// Re-export traits
pub use property_access::PropertyAccess;
pub use error_log::ErrorLog;
