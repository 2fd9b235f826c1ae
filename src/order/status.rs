use std::fmt;

use crate::constants::{ORDER_COMPLETE_STATUS, ORDER_FAILED_STATUS};

/// Terminal order status as reported by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderStatus {
    Complete,
    Failed,
}

impl OrderStatus {
    /// The exact string the service uses on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Complete => ORDER_COMPLETE_STATUS,
            OrderStatus::Failed => ORDER_FAILED_STATUS,
        }
    }

    /// Parse a wire status. Anything other than a terminal status is `None`.
    pub fn parse(status: &str) -> Option<Self> {
        match status {
            ORDER_COMPLETE_STATUS => Some(OrderStatus::Complete),
            ORDER_FAILED_STATUS => Some(OrderStatus::Failed),
            _ => None,
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
