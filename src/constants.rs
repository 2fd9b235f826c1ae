//! Values the order service is expected to report.
//!
//! The status values and status messages don't follow one convention
//! ("complete" vs "Order complete"). That mismatch is the service's contract
//! and is kept verbatim.

pub const DEFAULT_NUM_TOKENS: u64 = 5;
pub const DEFAULT_MAX_CREDITS: u64 = 100;
pub const DEFAULT_MAX_TOKENS: u64 = 1000;

pub const ORDER_COMPLETE_STATUS: &str = "complete";
pub const ORDER_FAILED_STATUS: &str = "failed";

/// Message returned in the body of a successful `POST /create-order`.
pub const ORDER_CREATED_MESSAGE: &str = "Order created";

pub const ORDER_COMPLETE_STATUS_MESSAGE: &str = "Order complete";
pub const INSUFFICIENT_CREDITS_STATUS_MESSAGE: &str = "User has insufficient funds for purchase.";
pub const INSUFFICIENT_TOKENS_STATUS_MESSAGE: &str = "Insufficient tokens to purchase.";
pub const ORDER_FORCED_FAILURE_STATUS_MESSAGE: &str = "Failure in order service!";
pub const PAYMENT_FORCED_FAILURE_STATUS_MESSAGE: &str = "Failure in payment service!";
pub const INVENTORY_FORCED_FAILURE_STATUS_MESSAGE: &str = "Failure in inventory service!";
pub const DELIVERY_FORCED_FAILURE_STATUS_MESSAGE: &str = "Failure in delivery service!";

/// HTTP status codes the harness checks against.
pub mod status_code {
    pub const CREATED: u16 = 201;
    pub const OK: u16 = 200;
}

/// Route names, joined onto the configured base URL.
pub mod routes {
    pub const CREATE_ORDER: &str = "create-order";
    pub const GET_ORDER: &str = "get-order";
}

pub const DEFAULT_BASE_URL: &str = "http://localhost";
