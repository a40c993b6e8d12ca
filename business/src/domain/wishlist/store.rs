use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::domain::catalog::model::Product;
use crate::domain::logger::Logger;
use crate::domain::storage::key_value::{KeyValueStore, WISHLIST_STORAGE_KEY};
use crate::domain::storage::persisted;
use crate::domain::wishlist::model::WishlistEntry;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WishlistState {
    pub entries: Vec<WishlistEntry>,
}

/// Client-side wishlist container.
///
/// Invariant on every mutating path: no two entries share a product id.
/// Mutations are synchronous and write the whole state to the durable slot.
pub struct WishlistStore {
    state: WishlistState,
    storage: Arc<dyn KeyValueStore>,
    logger: Arc<dyn Logger>,
}

impl WishlistStore {
    pub fn initialize(storage: Arc<dyn KeyValueStore>, logger: Arc<dyn Logger>) -> Self {
        let state = persisted::initialize(storage.as_ref(), logger.as_ref(), WISHLIST_STORAGE_KEY);
        Self {
            state,
            storage,
            logger,
        }
    }

    /// Inserts the product unless it is already saved. Idempotent.
    pub fn add_item(&mut self, product: &Product) {
        if self.contains(&product.id) {
            return;
        }
        self.state.entries.push(WishlistEntry::from_product(product));
        self.logger
            .debug(&format!("Saved product {} to wishlist", product.id));
        self.persist();
    }

    /// Removes the entry for the product id; unknown ids are a no-op.
    pub fn remove_item(&mut self, product_id: &str) {
        self.state.entries.retain(|e| e.product_id != product_id);
        self.persist();
    }

    pub fn contains(&self, product_id: &str) -> bool {
        self.state.entries.iter().any(|e| e.product_id == product_id)
    }

    /// Present ⇒ remove, absent ⇒ add. Returns whether the product is saved
    /// after the toggle.
    pub fn toggle(&mut self, product: &Product) -> bool {
        if self.contains(&product.id) {
            self.remove_item(&product.id);
            false
        } else {
            self.add_item(product);
            true
        }
    }

    pub fn clear(&mut self) {
        self.state.entries.clear();
        self.logger.debug("Cleared wishlist");
        self.persist();
    }

    pub fn entries(&self) -> &[WishlistEntry] {
        &self.state.entries
    }

    pub fn len(&self) -> usize {
        self.state.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.entries.is_empty()
    }

    fn persist(&self) {
        persisted::persist(
            self.storage.as_ref(),
            self.logger.as_ref(),
            WISHLIST_STORAGE_KEY,
            &self.state,
        );
    }
}
