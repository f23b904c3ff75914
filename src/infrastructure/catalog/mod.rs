pub mod file_repository;
pub mod http_repository;

pub use file_repository::FileEntryRepository;
pub use http_repository::HttpEntryRepository;

use crate::domain::{entities::Entry, errors::LoadError, repositories::EntryRepository};
use std::sync::Arc;

/// Picks the loader for a configured data source: URLs go over HTTP,
/// everything else is read as a local file.
pub fn repository_for(source: &str) -> Arc<dyn EntryRepository> {
    if source.starts_with("http://") || source.starts_with("https://") {
        Arc::new(HttpEntryRepository::new(source.to_string()))
    } else {
        Arc::new(FileEntryRepository::new(source))
    }
}

pub(crate) fn parse_entries(body: &[u8]) -> Result<Vec<Entry>, LoadError> {
    Ok(serde_json::from_slice(body)?)
}
