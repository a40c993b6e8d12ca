use async_trait::async_trait;

use crate::domain::cart::store::CartStore;
use crate::domain::checkout::errors::CheckoutError;
use crate::domain::checkout::model::{OrderDraft, PlacedOrder};

pub struct PlaceOrderParams {
    pub draft: OrderDraft,
}

#[async_trait]
pub trait PlaceOrderUseCase: Send + Sync {
    /// Submits the cart's lines as an order. The cart is cleared only after
    /// the gateway confirms success; on failure it is left untouched.
    async fn execute(
        &self,
        cart: &mut CartStore,
        params: PlaceOrderParams,
    ) -> Result<PlacedOrder, CheckoutError>;
}
