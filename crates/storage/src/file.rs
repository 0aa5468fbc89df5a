//! JSON-snapshot file backend.

use std::{
    collections::BTreeMap,
    path::PathBuf,
    sync::{Mutex, MutexGuard, PoisonError},
};

use crate::{Storage, error::StorageError};

/// On-disk snapshot format.
#[derive(Debug, Default, serde::Serialize, serde::Deserialize)]
struct Snapshot {
    entries: BTreeMap<String, String>,
}

/// File-backed storage.
///
/// The whole map is held in memory; `commit` serializes it to a temp file in
/// the same directory and renames it over the target, so a crash mid-write
/// leaves the previous snapshot intact.
pub struct FileStorage {
    path: PathBuf,
    snapshot: Mutex<Snapshot>,
}

impl FileStorage {
    /// Open a snapshot file, treating a missing file as an empty store.
    ///
    /// An unreadable or unparsable file is a hard error, never a silent
    /// reinitialization.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let path = path.into();
        let snapshot = match std::fs::read_to_string(&path) {
            Ok(text) => serde_json::from_str(&text)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Snapshot::default(),
            Err(e) => return Err(StorageError::Io(e)),
        };

        Ok(Self {
            path,
            snapshot: Mutex::new(snapshot),
        })
    }

    /// Path of the snapshot file.
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    fn lock(&self) -> MutexGuard<'_, Snapshot> {
        self.snapshot.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Storage for FileStorage {
    fn get_string(&self, name: &str) -> Result<Option<String>, StorageError> {
        Ok(self.lock().entries.get(name).cloned())
    }

    fn put_string(&self, name: &str, value: &str) -> Result<(), StorageError> {
        self.lock().entries.insert(name.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, name: &str) -> Result<(), StorageError> {
        self.lock().entries.remove(name);
        Ok(())
    }

    fn names(&self) -> Result<Vec<String>, StorageError> {
        Ok(self.lock().entries.keys().cloned().collect())
    }

    fn commit(&self) -> Result<(), StorageError> {
        let json = serde_json::to_string_pretty(&*self.lock())?;

        let tmp = self.path.with_extension("tmp");
        std::fs::write(&tmp, json)?;

        // Restrict the snapshot to the owner (Unix only).
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let _ = std::fs::set_permissions(&tmp, std::fs::Permissions::from_mode(0o600));
        }

        std::fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}
