//! In-memory profile storage.

use super::{BoxFuture, Storage, StorageError, StorageResult};
use crate::profile::UserProfile;
use std::collections::HashMap;
use std::sync::RwLock;

/// In-memory storage for testing and ephemeral sessions.
#[derive(Default)]
pub struct MemoryStorage {
    profiles: RwLock<HashMap<String, UserProfile>>,
}

fn lock_error<E: std::fmt::Display>(e: E) -> StorageError {
    StorageError::Other(format!("Lock error: {}", e))
}

impl MemoryStorage {
    /// Create a new empty memory storage.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn save(&self, key: &str, profile: &UserProfile) -> BoxFuture<'_, StorageResult<()>> {
        let key = key.to_string();
        let profile = profile.clone();
        Box::pin(async move {
            self.profiles
                .write()
                .map_err(lock_error)?
                .insert(key, profile);
            Ok(())
        })
    }

    fn load(&self, key: &str) -> BoxFuture<'_, StorageResult<UserProfile>> {
        let key = key.to_string();
        Box::pin(async move {
            self.profiles
                .read()
                .map_err(lock_error)?
                .get(&key)
                .cloned()
                .ok_or_else(|| StorageError::NotFound(key))
        })
    }

    fn exists(&self, key: &str) -> BoxFuture<'_, StorageResult<bool>> {
        let key = key.to_string();
        Box::pin(async move {
            Ok(self
                .profiles
                .read()
                .map_err(lock_error)?
                .contains_key(&key))
        })
    }
}
