/// Storage errors for the durable key/value slots.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage.unavailable")]
    Unavailable,
    #[error("storage.read")]
    Read,
    #[error("storage.write")]
    Write,
}

impl StorageError {
    pub fn unavailable() -> Self {
        StorageError::Unavailable
    }
    pub fn read() -> Self {
        StorageError::Read
    }
    pub fn write() -> Self {
        StorageError::Write
    }
}
