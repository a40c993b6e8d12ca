use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::filters::sort_products;
use crate::domain::catalog::model::Product;
use crate::domain::catalog::source::CatalogSource;
use crate::domain::catalog::use_cases::browse::{BrowseProductsParams, BrowseProductsUseCase};
use crate::domain::logger::Logger;

pub struct BrowseProductsUseCaseImpl {
    pub source: Arc<dyn CatalogSource>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl BrowseProductsUseCase for BrowseProductsUseCaseImpl {
    async fn execute(&self, params: BrowseProductsParams) -> Result<Vec<Product>, CatalogError> {
        let products = self.source.products().await?;

        let filtered = params.filter.apply(&products);
        let listed = sort_products(&filtered, params.sort);

        self.logger.debug(&format!(
            "Listing {} of {} products (sort: {})",
            listed.len(),
            products.len(),
            params.sort
        ));
        Ok(listed)
    }
}
