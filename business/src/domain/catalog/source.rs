use async_trait::async_trait;

use super::errors::CatalogError;
use super::model::{Banner, BannerCta, Brand, Category, Product};

/// Read port for the catalog HTTP API.
///
/// Listings are fetched whole, once per page; filtering and sorting happen
/// in memory on the returned vectors.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn products(&self) -> Result<Vec<Product>, CatalogError>;
    async fn categories(&self) -> Result<Vec<Category>, CatalogError>;
    async fn brands(&self) -> Result<Vec<Brand>, CatalogError>;
    async fn banners(&self) -> Result<Vec<Banner>, CatalogError>;
    async fn banner_cta(&self) -> Result<BannerCta, CatalogError>;
}
