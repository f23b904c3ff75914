pub mod catalog_filter;

pub use catalog_filter::CatalogFilter;
