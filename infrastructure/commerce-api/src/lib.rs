pub mod catalog_source;
pub mod client;
pub mod dto;
pub mod fallback;
pub mod order_gateway;
