use crate::domain::entities::{CategoryFilter, Entry};
use chrono::{DateTime, Local};

/// Result of one successful catalog load.
#[derive(Debug, Clone)]
pub struct CatalogSnapshot {
    pub entries: Vec<Entry>,
    pub categories: Vec<CategoryFilter>,
    pub source: String,
    pub loaded_at: DateTime<Local>,
}

impl CatalogSnapshot {
    pub fn summary(&self) -> String {
        format!(
            "{} entries from {} at {}",
            self.entries.len(),
            self.source,
            self.loaded_at.format("%H:%M:%S")
        )
    }
}
