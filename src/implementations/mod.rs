pub mod property_bag;

pub use property_bag::PropertyBag;
