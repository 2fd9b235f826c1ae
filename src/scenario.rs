//! The named order scenarios.
//!
//! Each scenario is a fixed combination of request inputs and the outcome the
//! service must report for them.

use crate::constants::*;
use crate::order::{FaultFlags, OrderStatus};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scenario {
    pub name: &'static str,
    pub num_tokens: u64,
    pub faults: FaultFlags,
    pub expected_status: OrderStatus,
    pub expected_status_message: &'static str,
}

impl Scenario {
    fn failing(
        name: &'static str,
        num_tokens: u64,
        faults: FaultFlags,
        message: &'static str,
    ) -> Self {
        Self {
            name,
            num_tokens,
            faults,
            expected_status: OrderStatus::Failed,
            expected_status_message: message,
        }
    }

    /// A small order with no faults completes.
    pub fn baseline() -> Self {
        Self {
            name: "create_order",
            num_tokens: DEFAULT_NUM_TOKENS,
            faults: FaultFlags::none(),
            expected_status: OrderStatus::Complete,
            expected_status_message: ORDER_COMPLETE_STATUS_MESSAGE,
        }
    }

    /// One token more than a user can afford.
    pub fn insufficient_credits() -> Self {
        Self::failing(
            "create_order_with_insufficient_credits",
            DEFAULT_MAX_CREDITS + 1,
            FaultFlags::none(),
            INSUFFICIENT_CREDITS_STATUS_MESSAGE,
        )
    }

    /// One token more than the inventory holds.
    pub fn insufficient_tokens() -> Self {
        Self::failing(
            "create_order_with_insufficient_tokens",
            DEFAULT_MAX_TOKENS + 1,
            FaultFlags::none(),
            INSUFFICIENT_TOKENS_STATUS_MESSAGE,
        )
    }

    pub fn order_service_failure() -> Self {
        Self::failing(
            "create_order_with_order_service_failure",
            DEFAULT_NUM_TOKENS,
            FaultFlags::none().with_order_fail(),
            ORDER_FORCED_FAILURE_STATUS_MESSAGE,
        )
    }

    pub fn payment_service_failure() -> Self {
        Self::failing(
            "create_order_with_payment_service_failure",
            DEFAULT_NUM_TOKENS,
            FaultFlags::none().with_payment_fail(),
            PAYMENT_FORCED_FAILURE_STATUS_MESSAGE,
        )
    }

    pub fn inventory_service_failure() -> Self {
        Self::failing(
            "create_order_with_inventory_service_failure",
            DEFAULT_NUM_TOKENS,
            FaultFlags::none().with_inventory_fail(),
            INVENTORY_FORCED_FAILURE_STATUS_MESSAGE,
        )
    }

    pub fn delivery_service_failure() -> Self {
        Self::failing(
            "create_order_with_delivery_service_failure",
            DEFAULT_NUM_TOKENS,
            FaultFlags::none().with_delivery_fail(),
            DELIVERY_FORCED_FAILURE_STATUS_MESSAGE,
        )
    }

    /// Every named scenario.
    pub fn all() -> Vec<Scenario> {
        vec![
            Self::baseline(),
            Self::insufficient_credits(),
            Self::insufficient_tokens(),
            Self::order_service_failure(),
            Self::payment_service_failure(),
            Self::inventory_service_failure(),
            Self::delivery_service_failure(),
        ]
    }
}

/// The sequence the `order-harness` binary runs.
///
/// Insufficient tokens is left out. With the default limits an order of
/// `DEFAULT_MAX_TOKENS + 1` also exceeds `DEFAULT_MAX_CREDITS`, so which
/// message comes back depends on the service's check order.
pub fn default_sequence() -> Vec<Scenario> {
    vec![
        Scenario::baseline(),
        Scenario::insufficient_credits(),
        Scenario::order_service_failure(),
        Scenario::payment_service_failure(),
        Scenario::inventory_service_failure(),
        Scenario::delivery_service_failure(),
    ]
}
