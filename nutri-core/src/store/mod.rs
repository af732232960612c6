//! Local key-value persistence.
//!
//! Each [`StoreKey`] holds one JSON snapshot of a whole collection. A store
//! only has to get and put whole values; a put either fully succeeds or
//! returns an error.

mod file;
mod key;
mod memory;

pub use file::FileStore;
pub use key::StoreKey;
pub use memory::MemoryStore;

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// A string-valued key-value store.
pub trait KeyValueStore {
    /// Returns the stored snapshot, or `None` if the key was never written.
    fn get(&self, key: StoreKey) -> Result<Option<String>, StoreError>;

    /// Replaces the snapshot for `key`.
    fn put(&mut self, key: StoreKey, value: &str) -> Result<(), StoreError>;
}

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("I/O error for {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Store rejected write to '{key}': {reason}")]
    Rejected { key: StoreKey, reason: String },
}
