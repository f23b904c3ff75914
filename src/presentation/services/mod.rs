pub mod async_executor;
mod catalog_loader;
pub mod logging;

pub use async_executor::AsyncExecutor;
pub use catalog_loader::CatalogLoader;
