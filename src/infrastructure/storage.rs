use std::cell::RefCell;
use std::collections::HashMap;

use crate::domain::errors::{AppError, StorageResult};
use crate::domain::logging::LogComponent;
use crate::domain::theme::KeyValueStore;
use crate::log_warn;

/// `window.localStorage`
pub struct LocalStorage {
    storage: web_sys::Storage,
}

impl LocalStorage {
    /// `None` when the browser refuses access (private mode, sandboxed frame)
    pub fn open() -> Option<Self> {
        let storage = web_sys::window()?.local_storage().ok()??;
        Some(Self { storage })
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        self.storage
            .get_item(key)
            .map_err(|e| AppError::StorageError(format!("reading '{}': {:?}", key, e)))
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        self.storage
            .set_item(key, value)
            .map_err(|e| AppError::StorageError(format!("writing '{}': {:?}", key, e)))
    }
}

/// Session-only store; used when local storage is unavailable and in tests
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(key: &str, value: &str) -> Self {
        let storage = Self::new();
        storage.entries.borrow_mut().insert(key.to_string(), value.to_string());
        storage
    }
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Local storage when the browser allows it, memory otherwise
pub fn browser_storage() -> Box<dyn KeyValueStore> {
    match LocalStorage::open() {
        Some(storage) => Box::new(storage),
        None => {
            log_warn!(
                LogComponent::Infrastructure("Storage"),
                "localStorage unavailable, theme preference will not survive reloads"
            );
            Box::new(MemoryStorage::new())
        }
    }
}
