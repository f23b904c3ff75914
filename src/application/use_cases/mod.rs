pub mod catalog_operations;
pub mod preference_operations;

pub use catalog_operations::*;
pub use preference_operations::*;
