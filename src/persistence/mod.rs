//! Key-value persistence
//!
//! The game stores a handful of small string values (high score, settings).
//! Backends:
//! - `MemoryStore`: in-process map (tests, fallback when storage is missing)
//! - `JsonFileStore`: JSON object on disk, written via tmp file + rename (native)
//! - `LocalStorageStore`: browser LocalStorage (wasm)

pub mod memory;

#[cfg(not(target_arch = "wasm32"))]
pub mod file;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use memory::MemoryStore;

#[cfg(not(target_arch = "wasm32"))]
pub use file::JsonFileStore;

#[cfg(target_arch = "wasm32")]
pub use web::LocalStorageStore;

use thiserror::Error;

/// Failure talking to a storage backend
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("storage file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// A string key-value store that survives restarts
pub trait ScoreStore {
    /// Value stored under `key`, or `None` if never set
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}
