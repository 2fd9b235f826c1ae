/// The user/order id pair the next scenario expects the service to assign.
///
/// Both start at 1 and advance together. The harness relies on the service
/// handing out ids in the same lockstep, with no gaps and no other clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderIds {
    pub user_id: u64,
    pub order_id: u64,
}

impl Default for OrderIds {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderIds {
    pub fn new() -> Self {
        Self {
            user_id: 1,
            order_id: 1,
        }
    }

    /// Start from an arbitrary pair, e.g. against a service that already
    /// holds orders.
    pub fn starting_at(user_id: u64, order_id: u64) -> Self {
        Self { user_id, order_id }
    }

    pub fn advance(&mut self) {
        self.user_id += 1;
        self.order_id += 1;
    }
}
