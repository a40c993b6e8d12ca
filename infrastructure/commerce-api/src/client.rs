use reqwest::Client;

/// Shared HTTP client configuration for the storefront API.
pub struct ApiClient {
    pub client: Client,
    pub base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .unwrap_or_default();

        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Returns the full-listing products endpoint URL.
    pub fn products_url(&self) -> String {
        format!("{}/products?all=true", self.base_url)
    }

    pub fn categories_url(&self) -> String {
        format!("{}/categories?all=true", self.base_url)
    }

    pub fn brands_url(&self) -> String {
        format!("{}/brands?all=true", self.base_url)
    }

    pub fn banners_url(&self) -> String {
        format!("{}/banners?all=true", self.base_url)
    }

    pub fn banner_cta_url(&self) -> String {
        format!("{}/banner-cta", self.base_url)
    }

    pub fn orders_url(&self) -> String {
        format!("{}/orders", self.base_url)
    }
}
