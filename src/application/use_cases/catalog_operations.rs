use crate::application::dto::CatalogSnapshot;
use crate::domain::{errors::LoadError, repositories::EntryRepository, services::CatalogFilter};
use chrono::Local;
use std::sync::Arc;

pub struct LoadCatalog {
    repository: Arc<dyn EntryRepository>,
}

impl LoadCatalog {
    pub fn new(repository: Arc<dyn EntryRepository>) -> Self {
        Self { repository }
    }

    pub fn source(&self) -> String {
        self.repository.source()
    }

    pub async fn execute(&self) -> Result<CatalogSnapshot, LoadError> {
        let source = self.repository.source();
        tracing::info!("Loading catalog from {}", source);

        let entries = self.repository.load().await.inspect_err(|e| {
            tracing::error!("Failed to load catalog from {}: {}", source, e);
        })?;

        let categories = CatalogFilter::derive_categories(&entries);
        tracing::info!(
            "Loaded {} entries in {} categories",
            entries.len(),
            categories.len() - 1
        );

        Ok(CatalogSnapshot {
            entries,
            categories,
            source,
            loaded_at: Local::now(),
        })
    }
}
