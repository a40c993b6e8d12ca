use std::env;
use std::path::PathBuf;

use business::domain::checkout::shipping::ShippingPolicy;

/// Application configuration for the storefront shell
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_base_url: String,
    pub storage_dir: PathBuf,
    pub shipping: ShippingPolicy,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// Environment variables:
    /// - STOREFRONT_API_BASE_URL: Catalog/order API root (default: "http://localhost:3000/api")
    /// - STOREFRONT_STORAGE_DIR: Directory for the durable slots (default: ".storefront")
    /// - STOREFRONT_FREE_SHIPPING_THRESHOLD: Minor-unit threshold override
    /// - STOREFRONT_SHIPPING_FEE: Minor-unit flat fee override
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let api_base_url = env::var("STOREFRONT_API_BASE_URL")
            .unwrap_or_else(|_| "http://localhost:3000/api".to_string());
        let storage_dir = env::var("STOREFRONT_STORAGE_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(".storefront"));

        let defaults = ShippingPolicy::default();
        let shipping = ShippingPolicy {
            free_shipping_threshold: env_i64(
                "STOREFRONT_FREE_SHIPPING_THRESHOLD",
                defaults.free_shipping_threshold,
            ),
            fee: env_i64("STOREFRONT_SHIPPING_FEE", defaults.fee),
        };

        Self {
            api_base_url,
            storage_dir,
            shipping,
        }
    }
}

fn env_i64(key: &str, default: i64) -> i64 {
    env::var(key)
        .ok()
        .and_then(|raw| raw.parse().ok())
        .unwrap_or(default)
}
