use crate::domain::entities::Binding;
use thiserror::Error;

/// Failure of the one-shot catalog load.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LoadError {
    #[error("network error: {0}")]
    Transport(String),
    #[error("HTTP error! status: {0}")]
    Status(u16),
    #[error("failed to read catalog file {path}: {reason}")]
    Io { path: String, reason: String },
    #[error("malformed catalog: {0}")]
    Parse(String),
    #[error("catalog load task failed: {0}")]
    Task(String),
}

impl From<serde_json::Error> for LoadError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value.to_string())
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("required surface elements are missing: {}", format_bindings(.0))]
    MissingBindings(Vec<Binding>),
}

fn format_bindings(bindings: &[Binding]) -> String {
    bindings
        .iter()
        .map(Binding::name)
        .collect::<Vec<_>>()
        .join(", ")
}
