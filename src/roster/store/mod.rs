//! # Storage Layer
//!
//! The [`DataStore`] trait abstracts the persisted user list so the command
//! layer never touches the filesystem directly.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage, one JSON array in one file
//! - [`memory::InMemoryStore`]: in-memory buffer for tests
//!
//! ## Design
//!
//! Backends only provide raw byte access. Decoding and encoding are provided
//! trait methods, so every backend runs the same read-decode / encode-write
//! cycle: the whole list is materialized on load and rewritten wholesale on
//! save. There is no secondary index and no caching across calls.
//!
//! Raw access exists in the public trait because `list` emits the persisted
//! bytes verbatim, not a re-encoding of the decoded list.

use crate::error::Result;
use crate::model::User;

pub mod fs;
pub mod memory;

/// Abstract interface for the persisted user list.
pub trait DataStore {
    /// Raw bytes of the persisted list, empty when nothing has been stored
    /// yet.
    fn read_raw(&self) -> Result<Vec<u8>>;

    /// Replace the persisted bytes wholesale.
    fn write_raw(&mut self, data: &[u8]) -> Result<()>;

    /// Decode the full list. An absent or empty backing store is an empty
    /// list, not an error.
    fn load_users(&self) -> Result<Vec<User>> {
        let raw = self.read_raw()?;
        if raw.is_empty() {
            return Ok(Vec::new());
        }
        Ok(serde_json::from_slice(&raw)?)
    }

    /// Encode and persist the full list, replacing the previous contents.
    fn save_users(&mut self, users: &[User]) -> Result<()> {
        let data = serde_json::to_vec(users)?;
        self.write_raw(&data)
    }
}
