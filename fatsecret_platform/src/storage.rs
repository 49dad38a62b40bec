//! Key-value storage adapters
//!
//! The client persists small records (cached access tokens) through a
//! storage adapter so that hosts can decide where that state lives: in
//! process memory, on the local filesystem, or in a private store such
//! as Redis behind a custom adapter.

use std::{collections::HashMap, error};

use async_trait::async_trait;
use tokio::sync::RwLock;

#[cfg(feature = "file")]
#[cfg_attr(docsrs, doc(cfg(feature = "file")))]
pub mod file;

#[cfg(feature = "file")]
pub use file::FileStorage;

/// An asynchronous key-value store for persisted client state
///
/// Implementations are free to fail; callers treat a failed read as a
/// cache miss and a failed write as a degraded but functional state.
#[async_trait]
pub trait StorageAdapter: Send + Sync {
    /// Gets the value stored under `key`, if any
    async fn get_item(
        &self,
        key: &str,
    ) -> Result<Option<String>, Box<dyn error::Error + Send + Sync + 'static>>;

    /// Stores `value` under `key`, replacing any prior value
    async fn set_item(
        &self,
        key: &str,
        value: &str,
    ) -> Result<(), Box<dyn error::Error + Send + Sync + 'static>>;

    /// Removes the value stored under `key`, if any
    async fn remove_item(
        &self,
        key: &str,
    ) -> Result<(), Box<dyn error::Error + Send + Sync + 'static>>;
}

/// An in-memory storage adapter
///
/// Entries live for the lifetime of the process. This is the default
/// store used by the client when no other adapter is provided.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStorage {
    /// Constructs an empty in-memory store
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl StorageAdapter for MemoryStorage {
    async fn get_item(
        &self,
        key: &str,
    ) -> Result<Option<String>, Box<dyn error::Error + Send + Sync + 'static>> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn set_item(
        &self,
        key: &str,
        value: &str,
    ) -> Result<(), Box<dyn error::Error + Send + Sync + 'static>> {
        self.entries
            .write()
            .await
            .insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    async fn remove_item(
        &self,
        key: &str,
    ) -> Result<(), Box<dyn error::Error + Send + Sync + 'static>> {
        self.entries.write().await.remove(key);
        Ok(())
    }
}
