use std::collections::BTreeSet;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::{SeenKey, SeenStore, StoreError};

/// Seen set backed by a UTF-8 text file with one key per line.
///
/// Keys are kept sorted so the file is rewritten in a stable order.
#[derive(Debug)]
pub struct FileSeenStore {
    path: PathBuf,
    keys: BTreeSet<SeenKey>,
}

impl FileSeenStore {
    /// Reads the key file at `path`.
    ///
    /// A missing file yields an empty set. Lines are trimmed and blank lines
    /// are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Read`] for any I/O error other than the file not
    /// existing (including invalid UTF-8).
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let keys = match std::fs::read_to_string(&path) {
            Ok(content) => content
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(SeenKey::from)
                .collect(),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::info!(path = %path.display(), "seen file not found; starting empty");
                BTreeSet::new()
            }
            Err(e) => {
                return Err(StoreError::Read {
                    path: path.display().to_string(),
                    source: e,
                })
            }
        };

        tracing::debug!(path = %path.display(), keys = keys.len(), "loaded seen set");
        Ok(Self { path, keys })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SeenStore for FileSeenStore {
    fn contains(&self, key: &SeenKey) -> bool {
        self.keys.contains(key)
    }

    fn add(&mut self, key: SeenKey) -> bool {
        self.keys.insert(key)
    }

    /// Overwrites the file with every key, sorted, one per line.
    ///
    /// The content goes to a sibling `.tmp` file first and is renamed over
    /// the original.
    fn persist(&self) -> Result<(), StoreError> {
        let write_err = |source: std::io::Error| StoreError::Write {
            path: self.path.display().to_string(),
            source,
        };

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(write_err)?;
        }

        let mut content = String::new();
        for key in &self.keys {
            content.push_str(key.as_str());
            content.push('\n');
        }

        let mut tmp_name = self.path.as_os_str().to_owned();
        tmp_name.push(".tmp");
        let tmp_path = PathBuf::from(tmp_name);

        std::fs::write(&tmp_path, content).map_err(write_err)?;
        std::fs::rename(&tmp_path, &self.path).map_err(write_err)?;

        tracing::debug!(path = %self.path.display(), keys = self.keys.len(), "persisted seen set");
        Ok(())
    }

    fn len(&self) -> usize {
        self.keys.len()
    }
}
