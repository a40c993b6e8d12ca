use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::store::CartStore;
use crate::domain::checkout::errors::CheckoutError;
use crate::domain::checkout::gateway::{OrderGateway, OrderRequest};
use crate::domain::checkout::model::{OrderItem, PlacedOrder};
use crate::domain::checkout::use_cases::place_order::{PlaceOrderParams, PlaceOrderUseCase};
use crate::domain::logger::Logger;

pub struct PlaceOrderUseCaseImpl {
    pub gateway: Arc<dyn OrderGateway>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl PlaceOrderUseCase for PlaceOrderUseCaseImpl {
    async fn execute(
        &self,
        cart: &mut CartStore,
        params: PlaceOrderParams,
    ) -> Result<PlacedOrder, CheckoutError> {
        if cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        let items: Vec<OrderItem> = cart.lines().iter().map(OrderItem::from_line).collect();
        let request = OrderRequest {
            draft: params.draft,
            items,
        };

        self.logger.info(&format!(
            "Placing order with {} items",
            request.items.len()
        ));

        let placed = self.gateway.submit(&request).await?;

        // Clear only after the gateway confirms, so a failed submission
        // never loses the cart.
        cart.clear();

        self.logger
            .info(&format!("Order placed: {}", placed.order_id));
        Ok(placed)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::str::FromStr;
    use std::sync::Mutex;

    use chrono::Utc;
    use mockall::mock;

    use super::*;
    use crate::domain::catalog::model::Product;
    use crate::domain::checkout::errors::OrderGatewayError;
    use crate::domain::checkout::model::{NewOrderDraftProps, OrderDraft, OrderId, PaymentMode};
    use crate::domain::errors::StorageError;
    use crate::domain::storage::key_value::KeyValueStore;

    mock! {
        pub Gateway {}

        #[async_trait]
        impl OrderGateway for Gateway {
            async fn submit(&self, order: &OrderRequest) -> Result<PlacedOrder, OrderGatewayError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    #[derive(Default)]
    struct FakeStore {
        slots: Mutex<HashMap<String, String>>,
    }

    impl KeyValueStore for FakeStore {
        fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            Ok(self.slots.lock().unwrap().get(key).cloned())
        }

        fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
            self.slots
                .lock()
                .unwrap()
                .insert(key.to_string(), value.to_string());
            Ok(())
        }
    }

    fn cart_with_one_item() -> CartStore {
        let mut cart = CartStore::initialize(Arc::new(FakeStore::default()), mock_logger());
        cart.add_item(&Product {
            id: "p1".to_string(),
            name: "Iron Man Figure".to_string(),
            description: String::new(),
            price: 1000,
            discount: 100,
            images: vec![],
            brand: None,
            category: None,
            created_at: Utc::now(),
        });
        cart
    }

    fn draft() -> OrderDraft {
        OrderDraft::new(NewOrderDraftProps {
            name: "Asha Rao".to_string(),
            email: Some("asha@example.com".to_string()),
            phone: "9876543210".to_string(),
            address: "12 MG Road".to_string(),
            city: "Bengaluru".to_string(),
            pincode: "560001".to_string(),
            payment_mode: PaymentMode::Cod,
        })
        .unwrap()
    }

    #[tokio::test]
    async fn should_clear_cart_after_successful_submission() {
        let mut mock_gateway = MockGateway::new();
        mock_gateway.expect_submit().returning(|_| {
            Ok(PlacedOrder {
                order_id: OrderId::from_str("AHQ-1042").unwrap(),
            })
        });

        let use_case = PlaceOrderUseCaseImpl {
            gateway: Arc::new(mock_gateway),
            logger: mock_logger(),
        };
        let mut cart = cart_with_one_item();

        let result = use_case
            .execute(&mut cart, PlaceOrderParams { draft: draft() })
            .await;

        assert!(result.is_ok());
        assert_eq!(result.unwrap().order_id.as_str(), "AHQ-1042");
        assert!(cart.is_empty());
    }

    #[tokio::test]
    async fn should_keep_cart_when_gateway_rejects_order() {
        let mut mock_gateway = MockGateway::new();
        mock_gateway
            .expect_submit()
            .returning(|_| Err(OrderGatewayError::Rejected("out of stock".to_string())));

        let use_case = PlaceOrderUseCaseImpl {
            gateway: Arc::new(mock_gateway),
            logger: mock_logger(),
        };
        let mut cart = cart_with_one_item();

        let result = use_case
            .execute(&mut cart, PlaceOrderParams { draft: draft() })
            .await;

        assert!(matches!(
            result.unwrap_err(),
            CheckoutError::Gateway(OrderGatewayError::Rejected(_))
        ));
        assert_eq!(cart.total_items(), 1);
    }

    #[tokio::test]
    async fn should_reject_empty_cart() {
        let mock_gateway = MockGateway::new();

        let use_case = PlaceOrderUseCaseImpl {
            gateway: Arc::new(mock_gateway),
            logger: mock_logger(),
        };
        let mut cart = CartStore::initialize(Arc::new(FakeStore::default()), mock_logger());

        let result = use_case
            .execute(&mut cart, PlaceOrderParams { draft: draft() })
            .await;

        assert!(matches!(result.unwrap_err(), CheckoutError::EmptyCart));
    }

    #[tokio::test]
    async fn should_submit_cart_lines_as_order_items() {
        let mut mock_gateway = MockGateway::new();
        mock_gateway.expect_submit().withf(|request| {
            request.items.len() == 1
                && request.items[0].id == "p1"
                && request.items[0].price == 1000
                && request.items[0].discount == 100
                && request.items[0].quantity == 1
        }).returning(|_| {
            Ok(PlacedOrder {
                order_id: OrderId::from_str("AHQ-7").unwrap(),
            })
        });

        let use_case = PlaceOrderUseCaseImpl {
            gateway: Arc::new(mock_gateway),
            logger: mock_logger(),
        };
        let mut cart = cart_with_one_item();

        let result = use_case
            .execute(&mut cart, PlaceOrderParams { draft: draft() })
            .await;

        assert!(result.is_ok());
    }
}
