use crate::application::dto::CatalogSnapshot;
use crate::application::use_cases::LoadCatalog;
use crate::domain::errors::LoadError;
use crate::presentation::services::AsyncExecutor;
use std::sync::Arc;
use std::sync::mpsc::{Receiver, TryRecvError, channel};
use std::thread;

type LoadResult = Result<CatalogSnapshot, LoadError>;

/// Runs catalog loads off the UI thread and hands the result back on poll.
pub struct CatalogLoader {
    executor: AsyncExecutor,
    in_flight: Option<Receiver<LoadResult>>,
}

impl CatalogLoader {
    pub fn new(executor: AsyncExecutor) -> Self {
        Self {
            executor,
            in_flight: None,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Starts a load unless one is already running. `notify` is called from
    /// the worker thread once the result is ready.
    pub fn start<N>(&mut self, use_case: Arc<LoadCatalog>, notify: N) -> bool
    where
        N: Fn() + Send + 'static,
    {
        if self.in_flight.is_some() {
            tracing::warn!("Catalog load already running, ignoring duplicate");
            return false;
        }

        let (tx, rx) = channel();
        let executor = self.executor.clone();

        thread::spawn(move || {
            let result = executor.execute(async move { use_case.execute().await });
            if tx.send(result).is_err() {
                tracing::debug!("Catalog load finished after the receiver was dropped");
            }
            notify();
        });

        self.in_flight = Some(rx);
        true
    }

    pub fn poll(&mut self) -> Option<LoadResult> {
        let rx = self.in_flight.as_ref()?;

        let result = match rx.try_recv() {
            Ok(result) => result,
            Err(TryRecvError::Empty) => return None,
            Err(TryRecvError::Disconnected) => {
                Err(LoadError::Task("load worker exited without a result".to_string()))
            }
        };

        self.in_flight = None;
        Some(result)
    }
}
