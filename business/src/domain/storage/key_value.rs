use crate::domain::errors::StorageError;

/// Fixed namespace key for the cart's durable slot.
pub const CART_STORAGE_KEY: &str = "cart-storage";

/// Fixed namespace key for the wishlist's durable slot.
pub const WISHLIST_STORAGE_KEY: &str = "wishlist-storage";

/// Port for the durable key/value slots that outlive a session.
///
/// The only contractual property is that writing a value and reading it back
/// through a fresh adapter over the same backing yields the same string.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}
