#[derive(Debug, thiserror::Error)]
pub enum OrderDraftError {
    #[error("order.name_empty")]
    NameEmpty,
    #[error("order.phone_empty")]
    PhoneEmpty,
    #[error("order.address_empty")]
    AddressEmpty,
    #[error("order.city_empty")]
    CityEmpty,
    #[error("order.pincode_empty")]
    PincodeEmpty,
}

#[derive(Debug, thiserror::Error)]
pub enum OrderGatewayError {
    #[error("order_gateway.unreachable")]
    Unreachable,
    #[error("order_gateway.rejected: {0}")]
    Rejected(String),
    #[error("order_gateway.invalid_response")]
    InvalidResponse,
}

#[derive(Debug, thiserror::Error)]
pub enum CheckoutError {
    #[error("checkout.empty_cart")]
    EmptyCart,
    #[error("order_gateway.submit")]
    Gateway(#[from] OrderGatewayError),
}
