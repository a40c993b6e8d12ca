use std::sync::Arc;

use logger::TracingLogger;
use persistence::file_store::FileStore;

use commerce_api::catalog_source::CatalogSourceHttp;
use commerce_api::client::ApiClient;
use commerce_api::order_gateway::OrderGatewayHttp;

use business::application::catalog::browse::BrowseProductsUseCaseImpl;
use business::application::checkout::place_order::PlaceOrderUseCaseImpl;
use business::domain::cart::store::CartStore;
use business::domain::catalog::source::CatalogSource;
use business::domain::catalog::use_cases::browse::BrowseProductsUseCase;
use business::domain::checkout::shipping::ShippingPolicy;
use business::domain::checkout::use_cases::place_order::PlaceOrderUseCase;
use business::domain::logger::Logger;
use business::domain::storage::key_value::KeyValueStore;
use business::domain::wishlist::store::WishlistStore;

use crate::config::app_config::AppConfig;

/// Explicit store/use-case container handed to the UI layer; the stores are
/// the single writers of their durable slots, so the container owns them.
pub struct StorefrontContainer {
    pub cart: CartStore,
    pub wishlist: WishlistStore,
    pub catalog: Arc<dyn CatalogSource>,
    pub browse_products: Arc<dyn BrowseProductsUseCase>,
    pub place_order: Arc<dyn PlaceOrderUseCase>,
    pub shipping: ShippingPolicy,
}

impl StorefrontContainer {
    pub fn new(config: &AppConfig) -> anyhow::Result<Self> {
        let logger: Arc<dyn Logger> = Arc::new(TracingLogger);

        // Infrastructure adapters
        let storage: Arc<dyn KeyValueStore> = Arc::new(FileStore::new(&config.storage_dir)?);
        let catalog: Arc<dyn CatalogSource> = Arc::new(CatalogSourceHttp::new(ApiClient::new(
            config.api_base_url.clone(),
        )));
        let order_gateway = Arc::new(OrderGatewayHttp::new(ApiClient::new(
            config.api_base_url.clone(),
        )));

        // Client-side state containers
        let cart = CartStore::initialize(storage.clone(), logger.clone());
        let wishlist = WishlistStore::initialize(storage, logger.clone());

        // Use cases
        let browse_products = Arc::new(BrowseProductsUseCaseImpl {
            source: catalog.clone(),
            logger: logger.clone(),
        });
        let place_order = Arc::new(PlaceOrderUseCaseImpl {
            gateway: order_gateway,
            logger,
        });

        Ok(Self {
            cart,
            wishlist,
            catalog,
            browse_products,
            place_order,
            shipping: config.shipping,
        })
    }
}
