pub mod property_bag_tests;
pub mod error_log_tests;
