use serde::{Deserialize, Serialize};

use crate::domain::catalog::model::Product;

/// One cart entry for a product, with the price captured at add time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub product_id: String,
    pub name: String,
    pub unit_price: i64,
    pub discount: i64,
    pub images: Vec<String>,
    pub quantity: u32,
    pub brand_name: Option<String>,
}

impl CartLine {
    /// Builds a line from the product's current listing data, quantity 1.
    pub fn from_product(product: &Product) -> Self {
        Self {
            product_id: product.id.clone(),
            name: product.name.clone(),
            unit_price: product.price,
            discount: product.discount,
            images: product.images.clone(),
            quantity: 1,
            brand_name: product.brand.as_ref().map(|b| b.name.clone()),
        }
    }

    /// The amount actually charged per unit.
    pub fn effective_price(&self) -> i64 {
        self.unit_price - self.discount
    }

    pub fn line_total(&self) -> i64 {
        self.effective_price() * i64::from(self.quantity)
    }
}
