use super::parse_entries;
use crate::domain::{entities::Entry, errors::LoadError, repositories::EntryRepository};
use async_trait::async_trait;
use std::path::{Path, PathBuf};

pub struct FileEntryRepository {
    path: PathBuf,
}

impl FileEntryRepository {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

#[async_trait]
impl EntryRepository for FileEntryRepository {
    async fn load(&self) -> Result<Vec<Entry>, LoadError> {
        let body = tokio::fs::read(&self.path).await.map_err(|e| LoadError::Io {
            path: self.path.display().to_string(),
            reason: e.to_string(),
        })?;

        tracing::debug!("Read {} bytes from {}", body.len(), self.path.display());
        parse_entries(&body)
    }

    fn source(&self) -> String {
        self.path.display().to_string()
    }
}
