//! Wire types for the order service.
//!
//! Everything here mirrors the JSON the service accepts or returns. The
//! harness never interprets an order beyond comparing it to an expectation.

mod faults;
mod status;

pub use faults::FaultFlags;
pub use status::OrderStatus;

use serde::{Deserialize, Serialize};

/// Body of `POST /create-order`.
///
/// Flattens the fault flags so the wire shape is
/// `{num_tokens, order_fail, payment_fail, inventory_fail, delivery_fail}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateOrderRequest {
    pub num_tokens: u64,
    #[serde(flatten)]
    pub faults: FaultFlags,
}

impl CreateOrderRequest {
    pub fn new(num_tokens: u64, faults: FaultFlags) -> Self {
        Self { num_tokens, faults }
    }
}

/// Body returned by `POST /create-order`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateOrderResponse {
    pub message: String,
}

/// An order as reported by `GET /get-order`.
///
/// `status` and `status_message` stay raw strings: the harness compares them
/// verbatim and a service may report non-terminal statuses while processing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: u64,
    pub user_id: u64,
    pub num_tokens: u64,
    pub status: String,
    pub status_message: String,
}

impl Order {
    /// True once the service has finished processing this order.
    pub fn is_terminal(&self) -> bool {
        OrderStatus::parse(&self.status).is_some()
    }
}

/// The five values a fetched order must carry for a scenario to pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpectedOrder {
    pub id: u64,
    pub user_id: u64,
    pub num_tokens: u64,
    pub status: OrderStatus,
    pub status_message: String,
}
