use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use business::domain::errors::StorageError;
use business::domain::storage::key_value::KeyValueStore;
use tracing::warn;

/// Durable key/value slots backed by one file per namespace key.
///
/// `cart-storage` lands at `<dir>/cart-storage.json`. Writes go to a
/// temporary file first and are renamed into place, which is enough for the
/// single-writer model the stores run under.
#[derive(Debug)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|err| {
            warn!(target: "storefront", "Cannot create storage dir {}: {}", dir.display(), err);
            StorageError::Unavailable
        })?;
        Ok(Self { dir })
    }

    fn slot_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(self.slot_path(key)) {
            Ok(raw) => Ok(Some(raw)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(_) => Err(StorageError::Read),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.slot_path(key);
        let tmp = path.with_extension("json.tmp");
        write_and_swap(&tmp, &path, value).map_err(|err| {
            warn!(target: "storefront", "Cannot write slot {}: {}", path.display(), err);
            StorageError::Write
        })
    }
}

fn write_and_swap(tmp: &Path, path: &Path, value: &str) -> std::io::Result<()> {
    fs::write(tmp, value)?;
    fs::rename(tmp, path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_return_none_before_first_write() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path()).unwrap();

        assert_eq!(store.get("cart-storage").unwrap(), None);
    }

    #[test]
    fn should_read_back_what_was_written() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path()).unwrap();

        store.set("cart-storage", r#"{"version":1}"#).unwrap();

        assert_eq!(
            store.get("cart-storage").unwrap().as_deref(),
            Some(r#"{"version":1}"#)
        );
    }

    #[test]
    fn should_survive_a_fresh_adapter_over_the_same_directory() {
        let dir = tempfile::tempdir().unwrap();
        {
            let store = FileStore::new(dir.path()).unwrap();
            store.set("wishlist-storage", "saved").unwrap();
        }

        let reopened = FileStore::new(dir.path()).unwrap();

        assert_eq!(
            reopened.get("wishlist-storage").unwrap().as_deref(),
            Some("saved")
        );
    }

    #[test]
    fn should_keep_slots_isolated_by_key() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path()).unwrap();

        store.set("cart-storage", "cart").unwrap();
        store.set("wishlist-storage", "wishlist").unwrap();

        assert_eq!(store.get("cart-storage").unwrap().as_deref(), Some("cart"));
        assert_eq!(
            store.get("wishlist-storage").unwrap().as_deref(),
            Some("wishlist")
        );
    }
}
