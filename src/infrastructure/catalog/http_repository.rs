use super::parse_entries;
use crate::domain::{entities::Entry, errors::LoadError, repositories::EntryRepository};
use async_trait::async_trait;

const USER_AGENT: &str = concat!("vitrine/", env!("CARGO_PKG_VERSION"));

pub struct HttpEntryRepository {
    client: reqwest::Client,
    url: String,
}

impl HttpEntryRepository {
    pub fn new(url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            url,
        }
    }
}

#[async_trait]
impl EntryRepository for HttpEntryRepository {
    async fn load(&self) -> Result<Vec<Entry>, LoadError> {
        let response = self
            .client
            .get(&self.url)
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .send()
            .await
            .map_err(|e| LoadError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Status(status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| LoadError::Transport(format!("failed to read response: {}", e)))?;

        tracing::debug!("Fetched {} bytes from {}", body.len(), self.url);
        parse_entries(&body)
    }

    fn source(&self) -> String {
        self.url.clone()
    }
}
