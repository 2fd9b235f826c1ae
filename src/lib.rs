//! order_harness: integration-test harness for an order-creation HTTP API.
//!
//! The harness creates an order, waits for the service to process it, reads
//! it back and checks every field, for a fixed set of scenarios: a plain
//! order, orders over the credit and token limits, and failures injected into
//! the order, payment, inventory and delivery services.

pub mod constants;
pub mod scenario;

mod client;
mod config;
mod error;
mod harness;
mod order;

pub use client::OrderClient;
pub use config::{HarnessConfig, WaitStrategy};
pub use error::{HarnessError, ScenarioFailure};
pub use harness::{verify_order_information, OrderHarness, OrderIds};
pub use order::{
    CreateOrderRequest, CreateOrderResponse, ExpectedOrder, FaultFlags, Order, OrderStatus,
};
pub use scenario::Scenario;
