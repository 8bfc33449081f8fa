//! Content providers.
//!
//! `ContentProvider` is the blocking source; `ContentRequest` runs one on a
//! background thread and is polled from the UI loop every frame, the same
//! way page fetches are.

use std::path::PathBuf;
use std::sync::{mpsc, Arc};
use std::time::{Duration, Instant};

use super::{ContentModel, DEFAULT_CONTENT_JSON};
use crate::config::AppConfig;
use crate::error::ContentError;

pub trait ContentProvider: Send + Sync {
    fn fetch_content(&self) -> Result<ContentModel, ContentError>;
}

/// The embedded résumé, served after a simulated latency.
pub struct StaticProvider {
    latency: Duration,
}

impl StaticProvider {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }
}

impl ContentProvider for StaticProvider {
    fn fetch_content(&self) -> Result<ContentModel, ContentError> {
        if !self.latency.is_zero() {
            std::thread::sleep(self.latency);
        }
        Ok(ContentModel::from_json(DEFAULT_CONTENT_JSON)?)
    }
}

/// Résumé read from a JSON file on every fetch.
pub struct JsonFileProvider {
    path: PathBuf,
}

impl JsonFileProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ContentProvider for JsonFileProvider {
    fn fetch_content(&self) -> Result<ContentModel, ContentError> {
        let raw = std::fs::read_to_string(&self.path)?;
        Ok(ContentModel::from_json(&raw)?)
    }
}

/// Provider selected by the configuration.
pub fn provider_for(cfg: &AppConfig) -> Arc<dyn ContentProvider> {
    match &cfg.content_path {
        Some(path) => Arc::new(JsonFileProvider::new(path.clone())),
        None => Arc::new(StaticProvider::new(cfg.simulated_latency)),
    }
}

/// An in-flight fetch with a deadline.
pub struct ContentRequest {
    rx: mpsc::Receiver<Result<ContentModel, ContentError>>,
    deadline: Instant,
    timeout: Duration,
}

impl ContentRequest {
    /// Start fetching on a worker thread. `on_done` runs after the result is
    /// sent (the GUI passes a repaint request).
    pub fn spawn(
        provider: Arc<dyn ContentProvider>,
        timeout: Duration,
        on_done: impl FnOnce() + Send + 'static,
    ) -> Self {
        let (tx, rx) = mpsc::channel();
        std::thread::spawn(move || {
            let result = provider.fetch_content();
            let _ = tx.send(result);
            on_done();
        });
        Self {
            rx,
            deadline: Instant::now() + timeout,
            timeout,
        }
    }

    /// Non-blocking check. `None` while still waiting.
    pub fn poll(&self) -> Option<Result<ContentModel, ContentError>> {
        match self.rx.try_recv() {
            Ok(result) => Some(result),
            Err(mpsc::TryRecvError::Disconnected) => Some(Err(ContentError::Disconnected)),
            Err(mpsc::TryRecvError::Empty) => {
                if Instant::now() >= self.deadline {
                    Some(Err(ContentError::Timeout(self.timeout)))
                } else {
                    None
                }
            }
        }
    }

    /// Block until a result or the deadline.
    pub fn wait(self) -> Result<ContentModel, ContentError> {
        let remaining = self.deadline.saturating_duration_since(Instant::now());
        match self.rx.recv_timeout(remaining) {
            Ok(result) => result,
            Err(mpsc::RecvTimeoutError::Timeout) => Err(ContentError::Timeout(self.timeout)),
            Err(mpsc::RecvTimeoutError::Disconnected) => Err(ContentError::Disconnected),
        }
    }
}
