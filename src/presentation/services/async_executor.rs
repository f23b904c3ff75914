use anyhow::{Context, Result};
use std::future::Future;
use std::sync::Arc;

pub struct AsyncExecutor {
    runtime: Arc<tokio::runtime::Runtime>,
}

impl AsyncExecutor {
    pub fn new() -> Result<Self> {
        let runtime = tokio::runtime::Runtime::new().context("Failed to start async runtime")?;

        Ok(Self {
            runtime: Arc::new(runtime),
        })
    }

    pub fn execute<F, T>(&self, future: F) -> T
    where
        F: Future<Output = T>,
    {
        self.runtime.block_on(future)
    }
}

impl Clone for AsyncExecutor {
    fn clone(&self) -> Self {
        Self {
            runtime: Arc::clone(&self.runtime),
        }
    }
}
