use std::collections::BTreeSet;

use crate::{SeenKey, SeenStore, StoreError};

/// In-memory store; `persist` is a no-op.
#[derive(Debug, Default, Clone)]
pub struct MemorySeenStore {
    keys: BTreeSet<SeenKey>,
}

impl MemorySeenStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn keys(&self) -> impl Iterator<Item = &SeenKey> {
        self.keys.iter()
    }
}

impl<K: Into<SeenKey>> FromIterator<K> for MemorySeenStore {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        Self {
            keys: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl SeenStore for MemorySeenStore {
    fn contains(&self, key: &SeenKey) -> bool {
        self.keys.contains(key)
    }

    fn add(&mut self, key: SeenKey) -> bool {
        self.keys.insert(key)
    }

    fn persist(&self) -> Result<(), StoreError> {
        Ok(())
    }

    fn len(&self) -> usize {
        self.keys.len()
    }
}
