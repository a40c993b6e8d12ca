use async_trait::async_trait;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::filters::ProductFilter;
use crate::domain::catalog::model::Product;
use crate::domain::catalog::value_objects::SortOrder;

pub struct BrowseProductsParams {
    pub filter: ProductFilter,
    pub sort: SortOrder,
}

#[async_trait]
pub trait BrowseProductsUseCase: Send + Sync {
    async fn execute(&self, params: BrowseProductsParams) -> Result<Vec<Product>, CatalogError>;
}
