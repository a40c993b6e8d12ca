use chrono::{DateTime, Utc};

use super::value_objects::BrandKind;

#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub slug: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Brand {
    pub id: String,
    pub name: String,
    pub kind: BrandKind,
}

/// A catalog product as consumed from the read API.
///
/// Prices are integers in minor currency units. Image URLs are decoded from
/// the wire format at the adapter boundary; the domain only ever sees a typed
/// list. Discount bounds are not validated here; the catalog API owns that.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: i64,
    pub discount: i64,
    pub images: Vec<String>,
    pub brand: Option<Brand>,
    pub category: Option<Category>,
    pub created_at: DateTime<Utc>,
}

impl Product {
    /// The amount actually charged per unit.
    pub fn effective_price(&self) -> i64 {
        self.price - self.discount
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Banner {
    pub id: String,
    pub title: String,
    pub image_url: String,
    pub link: Option<String>,
}

/// Call-to-action block rendered under the banner carousel.
#[derive(Debug, Clone, PartialEq)]
pub struct BannerCta {
    pub heading: String,
    pub subheading: Option<String>,
    pub button_label: String,
    pub button_link: String,
}
