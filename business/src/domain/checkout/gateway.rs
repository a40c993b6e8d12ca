use async_trait::async_trait;

use super::errors::OrderGatewayError;
use super::model::{OrderDraft, OrderItem, PlacedOrder};

/// A fully assembled order submission.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderRequest {
    pub draft: OrderDraft,
    pub items: Vec<OrderItem>,
}

/// Port for the order submission API.
#[async_trait]
pub trait OrderGateway: Send + Sync {
    async fn submit(&self, order: &OrderRequest) -> Result<PlacedOrder, OrderGatewayError>;
}
