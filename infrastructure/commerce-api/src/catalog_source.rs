use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::warn;

use business::domain::catalog::errors::CatalogError;
use business::domain::catalog::model::{Banner, BannerCta, Brand, Category, Product};
use business::domain::catalog::source::CatalogSource;

use crate::client::ApiClient;
use crate::dto::{BannerCtaDto, BannerDto, BrandDto, CategoryDto, ProductDto};
use crate::fallback;

/// `CatalogSource` adapter over the storefront read API.
pub struct CatalogSourceHttp {
    api: ApiClient,
}

impl CatalogSourceHttp {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    async fn fetch_list<T: DeserializeOwned>(&self, url: String) -> Result<Vec<T>, CatalogError> {
        let response = self.api.client.get(&url).send().await.map_err(|err| {
            warn!(target: "storefront", "Catalog request to {} failed: {}", url, err);
            CatalogError::Unreachable
        })?;

        if !response.status().is_success() {
            warn!(target: "storefront", "Catalog request to {} returned {}", url, response.status());
            return Err(CatalogError::InvalidResponse);
        }

        response
            .json::<Vec<T>>()
            .await
            .map_err(|_| CatalogError::InvalidResponse)
    }
}

#[async_trait]
impl CatalogSource for CatalogSourceHttp {
    async fn products(&self) -> Result<Vec<Product>, CatalogError> {
        let dtos: Vec<ProductDto> = self.fetch_list(self.api.products_url()).await?;
        if dtos.is_empty() {
            return Ok(fallback::sample_products());
        }
        Ok(dtos.into_iter().map(ProductDto::into_domain).collect())
    }

    async fn categories(&self) -> Result<Vec<Category>, CatalogError> {
        let dtos: Vec<CategoryDto> = self.fetch_list(self.api.categories_url()).await?;
        if dtos.is_empty() {
            return Ok(fallback::sample_categories());
        }
        Ok(dtos.into_iter().map(CategoryDto::into_domain).collect())
    }

    async fn brands(&self) -> Result<Vec<Brand>, CatalogError> {
        let dtos: Vec<BrandDto> = self.fetch_list(self.api.brands_url()).await?;
        if dtos.is_empty() {
            return Ok(fallback::sample_brands());
        }
        Ok(dtos.into_iter().map(BrandDto::into_domain).collect())
    }

    async fn banners(&self) -> Result<Vec<Banner>, CatalogError> {
        let dtos: Vec<BannerDto> = self.fetch_list(self.api.banners_url()).await?;
        if dtos.is_empty() {
            return Ok(fallback::sample_banners());
        }
        Ok(dtos.into_iter().map(BannerDto::into_domain).collect())
    }

    async fn banner_cta(&self) -> Result<BannerCta, CatalogError> {
        let dtos: Vec<BannerCtaDto> = self.fetch_list(self.api.banner_cta_url()).await?;
        Ok(dtos
            .into_iter()
            .next()
            .map(BannerCtaDto::into_domain)
            .unwrap_or_else(fallback::sample_banner_cta))
    }
}
