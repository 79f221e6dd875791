//! The two-key persistent store: the provider credential and the UI language.
//!
//! This mirrors the browser's synced key-value storage: read at session
//! start, written only by the settings path. A trait at the seam keeps the
//! orchestrator testable without touching the filesystem.

pub mod file;
pub mod memory;

pub use file::FileKeyStore;
pub use memory::MemoryKeyStore;

use async_trait::async_trait;
use thiserror::Error;

/// Storage key holding the provider API credential.
pub const KEY_API_KEY: &str = "api_key";
/// Storage key holding the preferred output language code.
pub const KEY_LANGUAGE: &str = "language";

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("storage io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("storage corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
}

#[async_trait]
pub trait KeyStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}
