//! Local key/value storage.
//!
//! The app keeps its persisted strings in a `MemoryStore` which the binary
//! hydrates from, and flushes back to, eframe's storage.

use std::collections::HashMap;

use serde::{de::DeserializeOwned, Serialize};

use crate::content::ContentModel;
use crate::error::StorageError;

/// Key for the last content saved from the control panel.
pub const RESUME_CONTENT_KEY: &str = "resume_content_v2";
/// Key for the accepted profile picture source.
pub const PROFILE_IMAGE_KEY: &str = "resume_profile_image";

/// Every key the application persists.
pub const KNOWN_KEYS: [&str; 2] = [RESUME_CONTENT_KEY, PROFILE_IMAGE_KEY];

pub trait LocalStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: String);
    fn remove(&mut self, key: &str);
}

#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    values: HashMap<String, String>,
    dirty: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a lookup function, reading only `KNOWN_KEYS`.
    ///
    /// Empty strings count as absent, since eframe storage cannot delete.
    pub fn hydrate(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let values = KNOWN_KEYS
            .iter()
            .filter_map(|k| lookup(k).filter(|v| !v.is_empty()).map(|v| (k.to_string(), v)))
            .collect();
        Self {
            values,
            dirty: false,
        }
    }

    /// Write every known key through `write`, empty for removed ones.
    pub fn flush(&mut self, mut write: impl FnMut(&str, String)) {
        for key in KNOWN_KEYS {
            write(key, self.values.get(key).cloned().unwrap_or_default());
        }
        self.dirty = false;
    }

    /// `flush` only when something changed since the last flush.
    pub fn flush_if_dirty(&mut self, write: impl FnMut(&str, String)) -> bool {
        if !self.dirty {
            return false;
        }
        self.flush(write);
        true
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }
}

impl LocalStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) {
        self.values.insert(key.to_string(), value);
        self.dirty = true;
    }

    fn remove(&mut self, key: &str) {
        if self.values.remove(key).is_some() {
            self.dirty = true;
        }
    }
}

/// Store `value` as JSON under `key`.
pub fn save_json<T: Serialize>(
    store: &mut dyn LocalStore,
    key: &str,
    value: &T,
) -> Result<(), StorageError> {
    let json = serde_json::to_string(value)?;
    store.set(key, json);
    Ok(())
}

/// Read JSON under `key`; malformed data is logged and ignored.
pub fn load_json<T: DeserializeOwned>(store: &dyn LocalStore, key: &str) -> Option<T> {
    let raw = store.get(key)?;
    match serde_json::from_str(&raw) {
        Ok(v) => Some(v),
        Err(e) => {
            log::warn!("Ignoring malformed value under {}: {}", key, e);
            None
        }
    }
}

/// Store content saved from the control panel under `RESUME_CONTENT_KEY`.
pub fn save_content(store: &mut dyn LocalStore, model: &ContentModel) -> Result<(), StorageError> {
    save_json(store, RESUME_CONTENT_KEY, model)
}

/// Content to show once a fetch completes. With `restore` set, the last
/// saved edit wins over `fetched` when one is stored and readable.
pub fn resolve_content(store: &dyn LocalStore, fetched: ContentModel, restore: bool) -> ContentModel {
    if !restore {
        return fetched;
    }
    match load_json::<ContentModel>(store, RESUME_CONTENT_KEY) {
        Some(saved) => {
            log::info!("Restoring saved content for {}", saved.header.name);
            saved
        }
        None => fetched,
    }
}
