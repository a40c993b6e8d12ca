use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::domain::cart::model::CartLine;
use crate::domain::catalog::model::Product;
use crate::domain::logger::Logger;
use crate::domain::storage::key_value::{CART_STORAGE_KEY, KeyValueStore};
use crate::domain::storage::persisted;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CartState {
    pub lines: Vec<CartLine>,
}

/// Client-side cart container.
///
/// Lines are keyed by product id: re-adding a product increments its line's
/// quantity rather than appending a duplicate line, which keeps quantity
/// adjustments deterministic. Every mutation is synchronous and writes the
/// whole state back to the durable slot; the single-writer model of the UI
/// event loop makes locking unnecessary.
pub struct CartStore {
    state: CartState,
    storage: Arc<dyn KeyValueStore>,
    logger: Arc<dyn Logger>,
}

impl CartStore {
    /// Rehydrates the cart from its durable slot, starting empty when the
    /// slot is missing or unreadable.
    pub fn initialize(storage: Arc<dyn KeyValueStore>, logger: Arc<dyn Logger>) -> Self {
        let state = persisted::initialize(storage.as_ref(), logger.as_ref(), CART_STORAGE_KEY);
        Self {
            state,
            storage,
            logger,
        }
    }

    pub fn add_item(&mut self, product: &Product) {
        match self
            .state
            .lines
            .iter_mut()
            .find(|l| l.product_id == product.id)
        {
            Some(line) => line.quantity += 1,
            None => self.state.lines.push(CartLine::from_product(product)),
        }
        self.logger
            .debug(&format!("Added product {} to cart", product.id));
        self.persist();
    }

    /// Removes every line for the product id; unknown ids are a no-op.
    pub fn remove_item(&mut self, product_id: &str) {
        self.state.lines.retain(|l| l.product_id != product_id);
        self.persist();
    }

    pub fn increment_quantity(&mut self, product_id: &str) {
        if let Some(line) = self
            .state
            .lines
            .iter_mut()
            .find(|l| l.product_id == product_id)
        {
            line.quantity += 1;
            self.persist();
        }
    }

    /// Decrements the line's quantity, floored at 1. Going below 1 is a
    /// no-op, not a removal.
    pub fn decrement_quantity(&mut self, product_id: &str) {
        if let Some(line) = self
            .state
            .lines
            .iter_mut()
            .find(|l| l.product_id == product_id)
        {
            if line.quantity > 1 {
                line.quantity -= 1;
            }
            self.persist();
        }
    }

    pub fn clear(&mut self) {
        self.state.lines.clear();
        self.logger.debug("Cleared cart");
        self.persist();
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.state.lines
    }

    pub fn is_empty(&self) -> bool {
        self.state.lines.is_empty()
    }

    /// Sum of quantities across all lines.
    pub fn total_items(&self) -> u64 {
        self.state
            .lines
            .iter()
            .map(|l| u64::from(l.quantity))
            .sum()
    }

    /// Σ (unit_price - discount) * quantity, in minor units.
    pub fn subtotal(&self) -> i64 {
        self.state.lines.iter().map(CartLine::line_total).sum()
    }

    fn persist(&self) {
        persisted::persist(
            self.storage.as_ref(),
            self.logger.as_ref(),
            CART_STORAGE_KEY,
            &self.state,
        );
    }
}
