use std::str::FromStr;

use async_trait::async_trait;
use tracing::warn;

use business::domain::checkout::errors::OrderGatewayError;
use business::domain::checkout::gateway::{OrderGateway, OrderRequest};
use business::domain::checkout::model::{OrderId, PlacedOrder};

use crate::client::ApiClient;
use crate::dto::{ErrorResponseDto, OrderRequestDto, OrderResponseDto};

/// `OrderGateway` adapter over the order submission API.
pub struct OrderGatewayHttp {
    api: ApiClient,
}

impl OrderGatewayHttp {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

#[async_trait]
impl OrderGateway for OrderGatewayHttp {
    async fn submit(&self, order: &OrderRequest) -> Result<PlacedOrder, OrderGatewayError> {
        let url = self.api.orders_url();
        let body = OrderRequestDto::from_domain(order);

        let response = self
            .api
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|err| {
                warn!(target: "storefront", "Order submission failed: {}", err);
                OrderGatewayError::Unreachable
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let message = response
                .json::<ErrorResponseDto>()
                .await
                .map(|e| e.error)
                .unwrap_or_else(|_| status.to_string());
            return Err(OrderGatewayError::Rejected(message));
        }

        let placed: OrderResponseDto = response
            .json()
            .await
            .map_err(|_| OrderGatewayError::InvalidResponse)?;

        let order_id = OrderId::from_str(&placed.order_id)
            .map_err(|_| OrderGatewayError::InvalidResponse)?;

        Ok(PlacedOrder { order_id })
    }
}
