use serde::{Deserialize, Serialize};

/// Fault-injection flags understood by the order service.
///
/// Each flag asks the service to simulate a failure in the named downstream
/// dependency. All flags are always sent, `false` when unset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaultFlags {
    pub order_fail: bool,
    pub payment_fail: bool,
    pub inventory_fail: bool,
    pub delivery_fail: bool,
}

impl FaultFlags {
    /// No injected faults.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn with_order_fail(mut self) -> Self {
        self.order_fail = true;
        self
    }

    pub fn with_payment_fail(mut self) -> Self {
        self.payment_fail = true;
        self
    }

    pub fn with_inventory_fail(mut self) -> Self {
        self.inventory_fail = true;
        self
    }

    pub fn with_delivery_fail(mut self) -> Self {
        self.delivery_fail = true;
        self
    }

    /// True if any downstream failure is requested.
    pub fn any(&self) -> bool {
        self.order_fail || self.payment_fail || self.inventory_fail || self.delivery_fail
    }
}
