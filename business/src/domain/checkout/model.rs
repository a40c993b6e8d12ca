use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::errors::OrderDraftError;
use crate::domain::cart::model::CartLine;

static ORDER_ID_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^AHQ-\d+$").expect("hardcoded pattern is valid"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMode {
    Cod,
    Online,
}

impl std::fmt::Display for PaymentMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PaymentMode::Cod => write!(f, "cod"),
            PaymentMode::Online => write!(f, "online"),
        }
    }
}

impl std::str::FromStr for PaymentMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cod" => Ok(PaymentMode::Cod),
            "online" => Ok(PaymentMode::Online),
            _ => Err(format!("Invalid payment mode: {}", s)),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderDraft {
    pub name: String,
    pub email: Option<String>,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub pincode: String,
    pub payment_mode: PaymentMode,
}

pub struct NewOrderDraftProps {
    pub name: String,
    pub email: Option<String>,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub pincode: String,
    pub payment_mode: PaymentMode,
}

impl OrderDraft {
    pub fn new(props: NewOrderDraftProps) -> Result<Self, OrderDraftError> {
        if props.name.trim().is_empty() {
            return Err(OrderDraftError::NameEmpty);
        }
        if props.phone.trim().is_empty() {
            return Err(OrderDraftError::PhoneEmpty);
        }
        if props.address.trim().is_empty() {
            return Err(OrderDraftError::AddressEmpty);
        }
        if props.city.trim().is_empty() {
            return Err(OrderDraftError::CityEmpty);
        }
        if props.pincode.trim().is_empty() {
            return Err(OrderDraftError::PincodeEmpty);
        }

        Ok(Self {
            name: props.name,
            email: props.email,
            phone: props.phone,
            address: props.address,
            city: props.city,
            pincode: props.pincode,
            payment_mode: props.payment_mode,
        })
    }
}

/// One order line as submitted to the order API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub id: String,
    pub price: i64,
    pub discount: i64,
    pub quantity: u32,
}

impl OrderItem {
    pub fn from_line(line: &CartLine) -> Self {
        Self {
            id: line.product_id.clone(),
            price: line.unit_price,
            discount: line.discount,
            quantity: line.quantity,
        }
    }
}

/// Human-readable order identifier of the form `AHQ-<digits>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderId(String);

impl OrderId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for OrderId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if ORDER_ID_PATTERN.is_match(s) {
            Ok(OrderId(s.to_string()))
        } else {
            Err(format!("Invalid order id: {}", s))
        }
    }
}

/// Result of a successful order submission.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedOrder {
    pub order_id: OrderId,
}
