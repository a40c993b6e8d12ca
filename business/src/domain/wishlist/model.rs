use serde::{Deserialize, Serialize};

use crate::domain::catalog::model::Product;

/// A saved product; the wishlist holds at most one entry per product id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WishlistEntry {
    pub product_id: String,
    pub name: String,
    pub unit_price: i64,
    pub discount: i64,
    pub images: Vec<String>,
    pub brand_name: Option<String>,
}

impl WishlistEntry {
    pub fn from_product(product: &Product) -> Self {
        Self {
            product_id: product.id.clone(),
            name: product.name.clone(),
            unit_price: product.price,
            discount: product.discount,
            images: product.images.clone(),
            brand_name: product.brand.as_ref().map(|b| b.name.clone()),
        }
    }

    /// The amount actually charged per unit.
    pub fn effective_price(&self) -> i64 {
        self.unit_price - self.discount
    }
}
