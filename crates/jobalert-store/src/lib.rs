//! Persisted set of already-notified matches.
//!
//! A [`SeenStore`] remembers one [`SeenKey`] per reported [`JobMatch`] so a
//! listing is mailed once and never again. [`FileSeenStore`] keeps the keys in
//! a plain-text file, one per line; [`MemorySeenStore`] keeps them in memory.

pub mod error;
pub mod file;
pub mod fresh;
pub mod key;
pub mod memory;

pub use error::StoreError;
pub use file::FileSeenStore;
pub use fresh::filter_fresh;
pub use key::SeenKey;
pub use memory::MemorySeenStore;

/// Minimal set interface the freshness filter needs.
pub trait SeenStore {
    fn contains(&self, key: &SeenKey) -> bool;

    /// Inserts `key`, returning `true` if it was not already present.
    fn add(&mut self, key: SeenKey) -> bool;

    /// Writes the full set to the backing storage.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backing storage cannot be written.
    fn persist(&self) -> Result<(), StoreError>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
