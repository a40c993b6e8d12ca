use std::collections::HashMap;
use std::sync::Mutex;

use business::domain::errors::StorageError;
use business::domain::storage::key_value::KeyValueStore;

/// In-memory key/value slots. State lasts only for the process lifetime;
/// used in tests and for sessions without a writable disk.
#[derive(Debug, Default)]
pub struct MemoryStore {
    slots: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let slots = self.slots.lock().map_err(|_| StorageError::Unavailable)?;
        Ok(slots.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut slots = self.slots.lock().map_err(|_| StorageError::Unavailable)?;
        slots.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
