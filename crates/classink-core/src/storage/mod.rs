//! Profile persistence backends.
//!
//! The profile is the unit of persistence: saved whole on every mutation
//! and loaded whole at startup. Backends are keyed stores of serialized
//! profiles; the single-teacher app uses one well-known key.

mod memory;

#[cfg(not(target_arch = "wasm32"))]
mod file;

pub use memory::MemoryStorage;

#[cfg(not(target_arch = "wasm32"))]
pub use file::FileStorage;

use crate::profile::UserProfile;
use std::future::Future;
use std::pin::Pin;
use thiserror::Error;

/// Key the single local profile is stored under.
pub const DEFAULT_PROFILE_KEY: &str = "profile";

/// Storage errors.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Profile not found: {0}")]
    NotFound(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("IO error: {0}")]
    Io(String),
    #[error("Storage error: {0}")]
    Other(String),
}

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Boxed future for async operations (compatible with WASM).
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Trait for profile storage backends.
///
/// Deliberately narrow: the profile is rewritten whole and read whole,
/// so save/load (plus an existence probe for first-run detection) is the
/// entire surface. Implementations can keep profiles in memory or on the
/// filesystem; the interface leaves room for remote stores later.
///
/// Note: On native platforms, implementations must be Send + Sync.
/// On WASM, these bounds are relaxed since it's single-threaded.
#[cfg(not(target_arch = "wasm32"))]
pub trait Storage: Send + Sync {
    /// Save a profile under a key, replacing any previous version.
    fn save(&self, key: &str, profile: &UserProfile) -> BoxFuture<'_, StorageResult<()>>;

    /// Load the profile stored under a key.
    fn load(&self, key: &str) -> BoxFuture<'_, StorageResult<UserProfile>>;

    /// Check if a profile exists under a key.
    fn exists(&self, key: &str) -> BoxFuture<'_, StorageResult<bool>>;
}

/// Trait for profile storage backends (WASM version without Send + Sync).
#[cfg(target_arch = "wasm32")]
pub trait Storage {
    /// Save a profile under a key, replacing any previous version.
    fn save(&self, key: &str, profile: &UserProfile) -> BoxFuture<'_, StorageResult<()>>;

    /// Load the profile stored under a key.
    fn load(&self, key: &str) -> BoxFuture<'_, StorageResult<UserProfile>>;

    /// Check if a profile exists under a key.
    fn exists(&self, key: &str) -> BoxFuture<'_, StorageResult<bool>>;
}
