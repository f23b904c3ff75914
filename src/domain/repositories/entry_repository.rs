use crate::domain::entities::Entry;
use crate::domain::errors::LoadError;
use async_trait::async_trait;

#[async_trait]
pub trait EntryRepository: Send + Sync {
    /// Single best-effort fetch of the whole catalog. No retry, no caching.
    async fn load(&self) -> Result<Vec<Entry>, LoadError>;

    /// Human readable location, used in logs and the footer.
    fn source(&self) -> String;
}
